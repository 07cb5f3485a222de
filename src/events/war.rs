//! War events.

use serde::{Deserialize, Serialize};

use crate::core::{AllianceId, WarId};

/// A strategic target was destroyed, deciding a war between two alliances.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrategicTargetDestroyedEvent {
    war_id: WarId,
    winning_alliance_id: AllianceId,
    losing_alliance_id: AllianceId,
}

impl StrategicTargetDestroyedEvent {
    /// Create a new event.
    #[must_use]
    pub const fn new(
        war_id: WarId,
        winning_alliance_id: AllianceId,
        losing_alliance_id: AllianceId,
    ) -> Self {
        Self {
            war_id,
            winning_alliance_id,
            losing_alliance_id,
        }
    }

    #[must_use]
    pub const fn war_id(&self) -> WarId {
        self.war_id
    }

    #[must_use]
    pub const fn winning_alliance_id(&self) -> AllianceId {
        self.winning_alliance_id
    }

    #[must_use]
    pub const fn losing_alliance_id(&self) -> AllianceId {
        self.losing_alliance_id
    }
}
