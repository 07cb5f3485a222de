//! The event sum type and its discriminator.

use serde::Serialize;

use super::battle::BattleConcludedEvent;
use super::war::StrategicTargetDestroyedEvent;

/// Event kind. Listeners are registered per kind.
///
/// Every kind names exactly one concrete `Event` variant; there is no kind
/// for "any event".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// `Event::BattleConcluded`
    BattleConcluded,
    /// `Event::StrategicTargetDestroyed`
    StrategicTargetDestroyed,
}

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [EventKind; 2] = [EventKind::BattleConcluded, EventKind::StrategicTargetDestroyed];

    /// Stable snake_case name, used as a log field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            EventKind::BattleConcluded => "battle_concluded",
            EventKind::StrategicTargetDestroyed => "strategic_target_destroyed",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that happened in the game.
///
/// Events are immutable snapshots built by a service right after its
/// transaction commits, dispatched once, then dropped. The lifetime ties
/// borrowed entities (players) to the dispatch call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event<'a> {
    /// A battle was resolved.
    BattleConcluded(BattleConcludedEvent<'a>),
    /// A strategic target fell, deciding a war.
    StrategicTargetDestroyed(StrategicTargetDestroyedEvent),
}

impl<'a> Event<'a> {
    /// The concrete kind of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::BattleConcluded(_) => EventKind::BattleConcluded,
            Event::StrategicTargetDestroyed(_) => EventKind::StrategicTargetDestroyed,
        }
    }

    /// The battle payload, if this is a `BattleConcluded` event.
    #[must_use]
    pub fn as_battle_concluded(&self) -> Option<&BattleConcludedEvent<'a>> {
        match self {
            Event::BattleConcluded(battle) => Some(battle),
            _ => None,
        }
    }

    /// The war payload, if this is a `StrategicTargetDestroyed` event.
    #[must_use]
    pub fn as_strategic_target_destroyed(&self) -> Option<&StrategicTargetDestroyedEvent> {
        match self {
            Event::StrategicTargetDestroyed(target) => Some(target),
            _ => None,
        }
    }
}

impl<'a> From<BattleConcludedEvent<'a>> for Event<'a> {
    fn from(event: BattleConcludedEvent<'a>) -> Self {
        Event::BattleConcluded(event)
    }
}

impl From<StrategicTargetDestroyedEvent> for Event<'_> {
    fn from(event: StrategicTargetDestroyedEvent) -> Self {
        Event::StrategicTargetDestroyed(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AllianceId, Player, ReportId, UserId, WarId};
    use crate::events::BattleResult;

    #[test]
    fn test_kind_names() {
        assert_eq!(EventKind::BattleConcluded.to_string(), "battle_concluded");
        assert_eq!(EventKind::StrategicTargetDestroyed.name(), "strategic_target_destroyed");
        assert_eq!(EventKind::ALL.len(), 2);
    }

    #[test]
    fn test_event_kind_and_accessors() {
        let attacker = Player::new(UserId::new(1), "A");
        let defender = Player::new(UserId::new(2), "D");
        let battle: Event<'_> =
            BattleConcludedEvent::new(ReportId::new(1), &attacker, &defender, BattleResult::Stalemate).into();

        assert_eq!(battle.kind(), EventKind::BattleConcluded);
        assert!(battle.as_battle_concluded().is_some());
        assert!(battle.as_strategic_target_destroyed().is_none());

        let target: Event<'_> =
            StrategicTargetDestroyedEvent::new(WarId::new(1), AllianceId::new(2), AllianceId::new(3)).into();

        assert_eq!(target.kind(), EventKind::StrategicTargetDestroyed);
        assert!(target.as_battle_concluded().is_none());
        assert_eq!(
            target.as_strategic_target_destroyed().map(|t| t.war_id()),
            Some(WarId::new(1))
        );
    }

    #[test]
    fn test_event_serializes_with_kind_tag() {
        let event: Event<'_> =
            StrategicTargetDestroyedEvent::new(WarId::new(5), AllianceId::new(6), AllianceId::new(7)).into();

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "strategic_target_destroyed");
        assert_eq!(json["war_id"], 5);
        assert_eq!(json["winning_alliance_id"], 6);
        assert_eq!(json["losing_alliance_id"], 7);
    }
}
