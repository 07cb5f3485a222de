//! Battle report producer.

use serde::{Deserialize, Serialize};

use crate::core::{Player, ReportId};
use crate::dispatch::EventDispatcher;
use crate::events::{BattleConcludedEvent, BattleResult, Event};

use super::ServiceError;

/// What the battle resolver decided. Counts default to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub result: BattleResult,
    #[serde(default)]
    pub prestige_gained: u64,
    #[serde(default)]
    pub guards_killed: u64,
    #[serde(default)]
    pub credits_plundered: u64,
    #[serde(default)]
    pub structure_damage: u64,
}

impl BattleOutcome {
    pub fn new(result: BattleResult) -> Self {
        Self {
            result,
            prestige_gained: 0,
            guards_killed: 0,
            credits_plundered: 0,
            structure_damage: 0,
        }
    }

    #[must_use]
    pub fn with_prestige_gained(mut self, prestige: u64) -> Self {
        self.prestige_gained = prestige;
        self
    }

    #[must_use]
    pub fn with_guards_killed(mut self, guards: u64) -> Self {
        self.guards_killed = guards;
        self
    }

    #[must_use]
    pub fn with_credits_plundered(mut self, credits: u64) -> Self {
        self.credits_plundered = credits;
        self
    }

    #[must_use]
    pub fn with_structure_damage(mut self, damage: u64) -> Self {
        self.structure_damage = damage;
        self
    }
}

/// Commits battle reports and announces them.
///
/// Report ids are allocated from a monotonic sequence. The report counts as
/// committed once its id is allocated; listeners run afterwards, so a
/// listener failure does not roll the report back.
#[derive(Debug)]
pub struct BattleService<'d> {
    dispatcher: &'d EventDispatcher,
    last_report: ReportId,
}

impl<'d> BattleService<'d> {
    /// Start a fresh report sequence.
    pub fn new(dispatcher: &'d EventDispatcher) -> Self {
        Self::resume(dispatcher, ReportId::new(0))
    }

    /// Continue a sequence whose last committed report is `last_report`.
    pub fn resume(dispatcher: &'d EventDispatcher, last_report: ReportId) -> Self {
        Self {
            dispatcher,
            last_report,
        }
    }

    /// Id of the most recently committed report.
    #[must_use]
    pub fn last_report(&self) -> ReportId {
        self.last_report
    }

    /// Commit a battle report and dispatch `BattleConcluded`.
    pub fn conclude(
        &mut self,
        attacker: &Player,
        defender: &Player,
        outcome: &BattleOutcome,
    ) -> Result<ReportId, ServiceError> {
        if attacker.id == defender.id {
            return Err(ServiceError::SamePlayer(attacker.id));
        }

        let report = self
            .last_report
            .next()
            .ok_or(ServiceError::ReportSequenceExhausted(self.last_report))?;
        self.last_report = report;
        tracing::debug!(report = report.raw(), result = outcome.result.as_str(), "battle report committed");

        let event = BattleConcludedEvent::new(report, attacker, defender, outcome.result)
            .with_prestige_gained(outcome.prestige_gained)
            .with_guards_killed(outcome.guards_killed)
            .with_credits_plundered(outcome.credits_plundered)
            .with_structure_damage(outcome.structure_damage);
        self.dispatcher.dispatch(&Event::BattleConcluded(event))?;
        Ok(report)
    }
}
