//! Player records.
//!
//! A `Player` is owned by whatever loaded it (a request handler, a battle
//! resolver). Events only borrow players for the duration of a dispatch.

use serde::{Deserialize, Serialize};

use super::{AllianceId, UserId};

/// A user entity as seen by the event core.
///
/// ```
/// use warfront::core::{AllianceId, Player, UserId};
///
/// let player = Player::new(UserId::new(1), "Aurelia").with_alliance(AllianceId::new(9));
/// assert_eq!(player.alliance, Some(AllianceId::new(9)));
/// assert_eq!(player.to_string(), "Aurelia (User(1))");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Account id.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Alliance membership, if any.
    pub alliance: Option<AllianceId>,
}

impl Player {
    /// Create a player without an alliance.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            alliance: None,
        }
    }

    /// Set the alliance (builder pattern).
    #[must_use]
    pub fn with_alliance(mut self, alliance: AllianceId) -> Self {
        self.alliance = Some(alliance);
        self
    }

    /// Check if this player belongs to the given alliance.
    #[must_use]
    pub fn is_member_of(&self, alliance: AllianceId) -> bool {
        self.alliance == Some(alliance)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
