//! Achievement unlocks.
//!
//! Achievements are evaluated against the totals kept by a shared
//! [`StatsTracker`]. The achievement listener must therefore be registered
//! after the tracker for the same event kind, or it will judge each event
//! against totals that do not include it yet.

use std::sync::{Arc, Mutex, PoisonError};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{AchievementThresholds, AllianceId, UserId};
use crate::dispatch::{Listener, ListenerError};
use crate::events::{BattleConcludedEvent, Event, StrategicTargetDestroyedEvent};

use super::stats::{PlayerStats, StatsTracker};

/// Per-player achievements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// First victory.
    FirstBlood,
    /// Enough victories.
    Warlord,
    /// Enough credits plundered.
    Plunderer,
    /// Enough structure damage dealt.
    Demolisher,
    /// Enough guards killed.
    Headhunter,
    /// Enough prestige gained.
    PrestigeHoarder,
}

impl Achievement {
    /// Every player achievement, in evaluation order.
    pub const ALL: [Achievement; 6] = [
        Achievement::FirstBlood,
        Achievement::Warlord,
        Achievement::Plunderer,
        Achievement::Demolisher,
        Achievement::Headhunter,
        Achievement::PrestigeHoarder,
    ];

    /// Check whether totals meet this achievement's threshold.
    #[must_use]
    pub fn is_earned(self, stats: &PlayerStats, thresholds: &AchievementThresholds) -> bool {
        match self {
            Achievement::FirstBlood => stats.victories >= 1,
            Achievement::Warlord => stats.victories >= thresholds.warlord_victories,
            Achievement::Plunderer => stats.credits_plundered >= thresholds.plunderer_credits,
            Achievement::Demolisher => stats.structure_damage_dealt >= thresholds.demolisher_damage,
            Achievement::Headhunter => stats.guards_killed >= thresholds.headhunter_guards,
            Achievement::PrestigeHoarder => stats.prestige_gained >= thresholds.prestige_hoarder,
        }
    }
}

/// Alliance-wide achievements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllianceAchievement {
    /// Destroyed an enemy strategic target.
    StrategicStrike,
}

#[derive(Debug, Default)]
struct Unlocks {
    players: FxHashMap<UserId, SmallVec<[Achievement; 4]>>,
    alliances: FxHashMap<AllianceId, SmallVec<[AllianceAchievement; 1]>>,
}

/// Unlocks achievements once per player or alliance.
#[derive(Debug)]
pub struct AchievementListener {
    stats: Arc<StatsTracker>,
    thresholds: AchievementThresholds,
    unlocked: Mutex<Unlocks>,
}

impl AchievementListener {
    pub fn new(stats: Arc<StatsTracker>, thresholds: AchievementThresholds) -> Self {
        Self {
            stats,
            thresholds,
            unlocked: Mutex::new(Unlocks::default()),
        }
    }

    /// Achievements a player has unlocked, in unlock order.
    pub fn unlocked(&self, user: UserId) -> Vec<Achievement> {
        self.unlocked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .players
            .get(&user)
            .map(|list| list.to_vec())
            .unwrap_or_default()
    }

    /// Achievements an alliance has unlocked, in unlock order.
    pub fn alliance_unlocked(&self, alliance: AllianceId) -> Vec<AllianceAchievement> {
        self.unlocked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .alliances
            .get(&alliance)
            .map(|list| list.to_vec())
            .unwrap_or_default()
    }

    fn evaluate_player(&self, unlocks: &mut Unlocks, user: UserId) {
        let stats = self.stats.player(user);
        let held = unlocks.players.get(&user);
        let fresh: SmallVec<[Achievement; 4]> = Achievement::ALL
            .into_iter()
            .filter(|achievement| held.map_or(true, |held| !held.contains(achievement)))
            .filter(|achievement| achievement.is_earned(&stats, &self.thresholds))
            .collect();
        if fresh.is_empty() {
            return;
        }

        for achievement in &fresh {
            tracing::info!(user = user.raw(), achievement = ?achievement, "achievement unlocked");
        }
        unlocks.players.entry(user).or_default().extend(fresh);
    }

    fn battle(&self, unlocks: &mut Unlocks, battle: &BattleConcludedEvent<'_>) {
        self.evaluate_player(unlocks, battle.attacker().id);
        self.evaluate_player(unlocks, battle.defender().id);
    }

    fn strategic_target(&self, unlocks: &mut Unlocks, target: &StrategicTargetDestroyedEvent) {
        let alliance = target.winning_alliance_id();
        let earned = unlocks.alliances.entry(alliance).or_default();
        if !earned.contains(&AllianceAchievement::StrategicStrike) {
            tracing::info!(
                alliance = alliance.raw(),
                achievement = ?AllianceAchievement::StrategicStrike,
                "alliance achievement unlocked"
            );
            earned.push(AllianceAchievement::StrategicStrike);
        }
    }
}

impl Listener for AchievementListener {
    fn handle(&self, event: &Event<'_>) -> Result<(), ListenerError> {
        let mut unlocks = self.unlocked.lock().map_err(|_| ListenerError::Poisoned {
            listener: "achievements",
            resource: "unlock ledger",
        })?;

        match event {
            Event::BattleConcluded(battle) => self.battle(&mut unlocks, battle),
            Event::StrategicTargetDestroyed(target) => self.strategic_target(&mut unlocks, target),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "achievements"
    }
}
