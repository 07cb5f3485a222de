//! Audit log listener.

use crate::dispatch::{Listener, ListenerError};
use crate::events::Event;

/// Writes one structured log record per event under the `warfront::audit`
/// target. Never fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuditLogListener;

impl AuditLogListener {
    pub fn new() -> Self {
        Self
    }
}

impl Listener for AuditLogListener {
    fn handle(&self, event: &Event<'_>) -> Result<(), ListenerError> {
        match event {
            Event::BattleConcluded(battle) => {
                tracing::info!(
                    target: "warfront::audit",
                    kind = %event.kind(),
                    report_id = battle.report_id().raw(),
                    attacker = battle.attacker().id.raw(),
                    defender = battle.defender().id.raw(),
                    result = battle.result().as_str(),
                    prestige_gained = battle.prestige_gained(),
                    guards_killed = battle.guards_killed(),
                    credits_plundered = battle.credits_plundered(),
                    structure_damage = battle.structure_damage(),
                    "battle concluded"
                );
            }
            Event::StrategicTargetDestroyed(target) => {
                tracing::info!(
                    target: "warfront::audit",
                    kind = %event.kind(),
                    war_id = target.war_id().raw(),
                    winning_alliance = target.winning_alliance_id().raw(),
                    losing_alliance = target.losing_alliance_id().raw(),
                    "strategic target destroyed"
                );
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "audit_log"
    }
}
