//! Battle statistics.
//!
//! `StatsTracker` keeps running totals per player and per alliance. Totals
//! live in persistent maps, so [`StatsTracker::snapshot`] is an O(1) clone
//! that later events do not affect.

use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

use crate::core::{AllianceId, UserId};
use crate::dispatch::{Listener, ListenerError};
use crate::events::{BattleConcludedEvent, BattleResult, Event, StrategicTargetDestroyedEvent};

/// Cumulative totals for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub battles: u64,
    pub victories: u64,
    pub defeats: u64,
    pub stalemates: u64,
    pub prestige_gained: u64,
    pub guards_killed: u64,
    pub credits_plundered: u64,
    pub structure_damage_dealt: u64,
    pub structure_damage_suffered: u64,
}

impl PlayerStats {
    fn record_result(&mut self, result: BattleResult) {
        self.battles = self.battles.saturating_add(1);
        match result {
            BattleResult::Victory => self.victories = self.victories.saturating_add(1),
            BattleResult::Defeat => self.defeats = self.defeats.saturating_add(1),
            BattleResult::Stalemate => self.stalemates = self.stalemates.saturating_add(1),
        }
    }
}

/// Cumulative totals for one alliance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllianceStats {
    pub strategic_targets_destroyed: u64,
    pub strategic_targets_lost: u64,
}

/// Point-in-time copy of all totals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub players: im::HashMap<UserId, PlayerStats>,
    pub alliances: im::HashMap<AllianceId, AllianceStats>,
}

impl StatsSnapshot {
    /// Totals for a player (zero if never seen).
    #[must_use]
    pub fn player(&self, id: UserId) -> PlayerStats {
        self.players.get(&id).copied().unwrap_or_default()
    }

    /// Totals for an alliance (zero if never seen).
    #[must_use]
    pub fn alliance(&self, id: AllianceId) -> AllianceStats {
        self.alliances.get(&id).copied().unwrap_or_default()
    }
}

/// Listener that accumulates [`PlayerStats`] and [`AllianceStats`].
///
/// The attacker is credited with prestige, guards killed, credits plundered
/// and structure damage dealt. The defender records the mirrored result and
/// the structure damage suffered.
#[derive(Debug, Default)]
pub struct StatsTracker {
    totals: Mutex<StatsSnapshot>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current totals.
    pub fn snapshot(&self) -> StatsSnapshot {
        self.totals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current totals for one player.
    pub fn player(&self, id: UserId) -> PlayerStats {
        self.totals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .player(id)
    }

    /// Current totals for one alliance.
    pub fn alliance(&self, id: AllianceId) -> AllianceStats {
        self.totals
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .alliance(id)
    }

    fn record_battle(totals: &mut StatsSnapshot, battle: &BattleConcludedEvent<'_>) {
        let attacker = totals.players.entry(battle.attacker().id).or_insert_with(PlayerStats::default);
        attacker.record_result(battle.result());
        attacker.prestige_gained = attacker.prestige_gained.saturating_add(battle.prestige_gained());
        attacker.guards_killed = attacker.guards_killed.saturating_add(battle.guards_killed());
        attacker.credits_plundered = attacker.credits_plundered.saturating_add(battle.credits_plundered());
        attacker.structure_damage_dealt = attacker
            .structure_damage_dealt
            .saturating_add(battle.structure_damage());

        let defender = totals.players.entry(battle.defender().id).or_insert_with(PlayerStats::default);
        defender.record_result(battle.result().for_defender());
        defender.structure_damage_suffered = defender
            .structure_damage_suffered
            .saturating_add(battle.structure_damage());
    }

    fn record_strategic_target(totals: &mut StatsSnapshot, target: &StrategicTargetDestroyedEvent) {
        let winner = totals.alliances.entry(target.winning_alliance_id()).or_insert_with(AllianceStats::default);
        winner.strategic_targets_destroyed = winner.strategic_targets_destroyed.saturating_add(1);

        let loser = totals.alliances.entry(target.losing_alliance_id()).or_insert_with(AllianceStats::default);
        loser.strategic_targets_lost = loser.strategic_targets_lost.saturating_add(1);
    }
}

impl Listener for StatsTracker {
    fn handle(&self, event: &Event<'_>) -> Result<(), ListenerError> {
        let mut totals = self.totals.lock().map_err(|_| ListenerError::Poisoned {
            listener: "stats",
            resource: "stats totals",
        })?;

        match event {
            Event::BattleConcluded(battle) => Self::record_battle(&mut totals, battle),
            Event::StrategicTargetDestroyed(target) => Self::record_strategic_target(&mut totals, target),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "stats"
    }
}
