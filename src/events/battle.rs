//! Battle outcome events.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Player, ReportId};

/// Outcome of a battle, from the attacker's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleResult {
    /// The attacker won.
    Victory,
    /// The attacker lost.
    Defeat,
    /// Neither side prevailed.
    Stalemate,
}

impl BattleResult {
    /// Stable lowercase label, as stored in battle reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BattleResult::Victory => "victory",
            BattleResult::Defeat => "defeat",
            BattleResult::Stalemate => "stalemate",
        }
    }

    /// The same battle seen from the defender's side.
    #[must_use]
    pub const fn for_defender(self) -> Self {
        match self {
            BattleResult::Victory => BattleResult::Defeat,
            BattleResult::Defeat => BattleResult::Victory,
            BattleResult::Stalemate => BattleResult::Stalemate,
        }
    }
}

impl std::fmt::Display for BattleResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A battle result label that is not one of the known outcomes.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown battle result: {0:?}")]
pub struct UnknownBattleResult(pub String);

impl std::str::FromStr for BattleResult {
    type Err = UnknownBattleResult;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "victory" => Ok(BattleResult::Victory),
            "defeat" => Ok(BattleResult::Defeat),
            "stalemate" => Ok(BattleResult::Stalemate),
            other => Err(UnknownBattleResult(other.to_string())),
        }
    }
}

/// A battle has been resolved and its report committed.
///
/// Attacker and defender are borrowed: the event lives only as long as the
/// dispatch that carries it. All counts are non-negative by construction and
/// default to zero; `structure_damage` stays zero for producers that do not
/// track it.
///
/// ```
/// use warfront::core::{Player, ReportId, UserId};
/// use warfront::events::{BattleConcludedEvent, BattleResult};
///
/// let attacker = Player::new(UserId::new(1), "Aurelia");
/// let defender = Player::new(UserId::new(2), "Brennus");
///
/// let event = BattleConcludedEvent::new(ReportId::new(42), &attacker, &defender, BattleResult::Victory)
///     .with_prestige_gained(10)
///     .with_credits_plundered(500);
///
/// assert_eq!(event.report_id(), ReportId::new(42));
/// assert_eq!(event.credits_plundered(), 500);
/// assert_eq!(event.structure_damage(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BattleConcludedEvent<'a> {
    report_id: ReportId,
    attacker: &'a Player,
    defender: &'a Player,
    result: BattleResult,
    prestige_gained: u64,
    guards_killed: u64,
    credits_plundered: u64,
    structure_damage: u64,
}

impl<'a> BattleConcludedEvent<'a> {
    /// Create an event with all counts at zero.
    #[must_use]
    pub fn new(
        report_id: ReportId,
        attacker: &'a Player,
        defender: &'a Player,
        result: BattleResult,
    ) -> Self {
        Self {
            report_id,
            attacker,
            defender,
            result,
            prestige_gained: 0,
            guards_killed: 0,
            credits_plundered: 0,
            structure_damage: 0,
        }
    }

    /// Set prestige gained (builder pattern).
    #[must_use]
    pub fn with_prestige_gained(mut self, prestige: u64) -> Self {
        self.prestige_gained = prestige;
        self
    }

    /// Set guards killed (builder pattern).
    #[must_use]
    pub fn with_guards_killed(mut self, guards: u64) -> Self {
        self.guards_killed = guards;
        self
    }

    /// Set credits plundered (builder pattern).
    #[must_use]
    pub fn with_credits_plundered(mut self, credits: u64) -> Self {
        self.credits_plundered = credits;
        self
    }

    /// Set structure damage (builder pattern).
    #[must_use]
    pub fn with_structure_damage(mut self, damage: u64) -> Self {
        self.structure_damage = damage;
        self
    }

    #[must_use]
    pub fn report_id(&self) -> ReportId {
        self.report_id
    }

    #[must_use]
    pub fn attacker(&self) -> &'a Player {
        self.attacker
    }

    #[must_use]
    pub fn defender(&self) -> &'a Player {
        self.defender
    }

    #[must_use]
    pub fn result(&self) -> BattleResult {
        self.result
    }

    #[must_use]
    pub fn prestige_gained(&self) -> u64 {
        self.prestige_gained
    }

    #[must_use]
    pub fn guards_killed(&self) -> u64 {
        self.guards_killed
    }

    #[must_use]
    pub fn credits_plundered(&self) -> u64 {
        self.credits_plundered
    }

    #[must_use]
    pub fn structure_damage(&self) -> u64 {
        self.structure_damage
    }
}
