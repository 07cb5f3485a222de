//! Identifier newtypes.
//!
//! Every domain object the event core talks about is referenced by an opaque
//! integer id. The event core never interprets these values beyond identity;
//! they come from the persistence layer that owns users, alliances, wars and
//! battle reports.
//!
//! ```
//! use warfront::core::{AllianceId, UserId};
//!
//! let user = UserId::new(7);
//! assert_eq!(user.raw(), 7);
//! assert_eq!(user.to_string(), "User(7)");
//!
//! let alliance: AllianceId = 3.into();
//! assert_eq!(alliance, AllianceId::new(3));
//! ```

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl $name {
            /// Create a new id.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw id value.
            #[must_use]
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({})"), self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Identifier of a user (player account).
    UserId,
    "User"
);

define_id!(
    /// Identifier of an alliance.
    AllianceId,
    "Alliance"
);

define_id!(
    /// Identifier of a war between two alliances.
    WarId,
    "War"
);

define_id!(
    /// Identifier of a stored battle report.
    ReportId,
    "Report"
);

impl ReportId {
    /// The id following this one, or `None` once the sequence is exhausted.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }
}
