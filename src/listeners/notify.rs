//! Notification delivery.
//!
//! The listener turns events into [`Notification`] DTOs and hands them to a
//! [`NotificationSink`]. Rendering to HTML or mail happens elsewhere; the
//! sink only receives plain data.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{AllianceId, NotificationConfig, ReportId, UserId};
use crate::dispatch::{Listener, ListenerError};
use crate::events::{BattleConcludedEvent, Event, StrategicTargetDestroyedEvent};

/// Who a notification is addressed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Recipient {
    /// A single player.
    User(UserId),
    /// Every member of an alliance.
    Alliance(AllianceId),
}

/// A rendered notification, ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub recipient: Recipient,
    pub subject: String,
    pub body: String,
    /// Battle report the notification links to, if any.
    pub report: Option<ReportId>,
}

/// Errors raised by a sink.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("notification outbox is closed")]
    Closed,
}

/// Destination for notifications.
pub trait NotificationSink: Send + Sync {
    /// Accept one notification for delivery.
    fn deliver(&self, notification: Notification) -> Result<(), SinkError>;
}

impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn deliver(&self, notification: Notification) -> Result<(), SinkError> {
        (**self).deliver(notification)
    }
}

/// In-memory sink. A delivery worker drains it.
#[derive(Debug, Default)]
pub struct Outbox {
    queue: Mutex<Vec<Notification>>,
    closed: AtomicBool,
}

impl Outbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop accepting notifications.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Take every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut queue = self.queue.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *queue)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for Outbox {
    fn deliver(&self, notification: Notification) -> Result<(), SinkError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(SinkError::Closed);
        }
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
        Ok(())
    }
}

/// Notifies the players and alliances involved in an event.
#[derive(Debug)]
pub struct NotificationListener<S> {
    sink: S,
    config: NotificationConfig,
}

impl<S: NotificationSink> NotificationListener<S> {
    pub fn new(sink: S, config: NotificationConfig) -> Self {
        Self { sink, config }
    }

    fn send(&self, notification: Notification) -> Result<(), ListenerError> {
        self.sink
            .deliver(notification)
            .map_err(|err| ListenerError::failed(self.name(), err))
    }

    fn battle(&self, battle: &BattleConcludedEvent<'_>) -> Result<(), ListenerError> {
        let report = battle.report_id();
        let subject = format!("Battle report #{}", report.raw());

        self.send(Notification {
            recipient: Recipient::User(battle.attacker().id),
            subject: subject.clone(),
            body: format!(
                "Your attack on {} ended in {}. Prestige +{}, guards killed {}, credits plundered {}, structure damage {}.",
                battle.defender().name,
                battle.result(),
                battle.prestige_gained(),
                battle.guards_killed(),
                battle.credits_plundered(),
                battle.structure_damage(),
            ),
            report: Some(report),
        })?;

        if self.config.notify_defender {
            self.send(Notification {
                recipient: Recipient::User(battle.defender().id),
                subject,
                body: format!(
                    "{} attacked you. Outcome for you: {}. Guards lost {}, credits lost {}, structure damage {}.",
                    battle.attacker().name,
                    battle.result().for_defender(),
                    battle.guards_killed(),
                    battle.credits_plundered(),
                    battle.structure_damage(),
                ),
                report: Some(report),
            })?;
        }
        Ok(())
    }

    fn strategic_target(&self, target: &StrategicTargetDestroyedEvent) -> Result<(), ListenerError> {
        if !self.config.notify_alliances {
            return Ok(());
        }
        let subject = format!("Strategic target destroyed ({})", target.war_id());

        self.send(Notification {
            recipient: Recipient::Alliance(target.winning_alliance_id()),
            subject: subject.clone(),
            body: format!(
                "Your alliance destroyed the strategic target of {}.",
                target.losing_alliance_id()
            ),
            report: None,
        })?;
        self.send(Notification {
            recipient: Recipient::Alliance(target.losing_alliance_id()),
            subject,
            body: format!(
                "Your strategic target was destroyed by {}.",
                target.winning_alliance_id()
            ),
            report: None,
        })
    }
}

impl<S: NotificationSink> Listener for NotificationListener<S> {
    fn handle(&self, event: &Event<'_>) -> Result<(), ListenerError> {
        match event {
            Event::BattleConcluded(battle) => self.battle(battle),
            Event::StrategicTargetDestroyed(target) => self.strategic_target(target),
        }
    }

    fn name(&self) -> &str {
        "notifications"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Player, WarId};
    use crate::events::BattleResult;

    fn players() -> (Player, Player) {
        (
            Player::new(UserId::new(1), "Aurelia"),
            Player::new(UserId::new(2), "Brennus"),
        )
    }

    #[test]
    fn test_battle_notifies_both_sides() {
        let outbox = Arc::new(Outbox::new());
        let listener = NotificationListener::new(Arc::clone(&outbox), NotificationConfig::default());
        let (attacker, defender) = players();
        let event: Event<'_> = BattleConcludedEvent::new(ReportId::new(42), &attacker, &defender, BattleResult::Victory)
            .with_credits_plundered(500)
            .into();

        listener.handle(&event).unwrap();

        let sent = outbox.drain();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].recipient, Recipient::User(UserId::new(1)));
        assert_eq!(sent[0].subject, "Battle report #42");
        assert!(sent[0].body.contains("Brennus"));
        assert!(sent[0].body.contains("victory"));
        assert!(sent[0].body.contains("credits plundered 500"));
        assert_eq!(sent[1].recipient, Recipient::User(UserId::new(2)));
        assert!(sent[1].body.contains("defeat"));
        assert_eq!(sent[1].report, Some(ReportId::new(42)));
        assert!(outbox.is_empty());
    }

    #[test]
    fn test_defender_notification_can_be_disabled() {
        let outbox = Arc::new(Outbox::new());
        let config = NotificationConfig {
            notify_defender: false,
            notify_alliances: true,
        };
        let listener = NotificationListener::new(Arc::clone(&outbox), config);
        let (attacker, defender) = players();
        let event: Event<'_> =
            BattleConcludedEvent::new(ReportId::new(1), &attacker, &defender, BattleResult::Stalemate).into();

        listener.handle(&event).unwrap();

        assert_eq!(outbox.len(), 1);
    }

    #[test]
    fn test_strategic_target_notifies_alliances() {
        let outbox = Arc::new(Outbox::new());
        let listener = NotificationListener::new(Arc::clone(&outbox), NotificationConfig::default());
        let event: Event<'_> =
            StrategicTargetDestroyedEvent::new(WarId::new(9), AllianceId::new(1), AllianceId::new(2)).into();

        listener.handle(&event).unwrap();

        let sent = outbox.drain();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].recipient, Recipient::Alliance(AllianceId::new(1)));
        assert_eq!(sent[1].recipient, Recipient::Alliance(AllianceId::new(2)));
        assert_eq!(sent[0].subject, "Strategic target destroyed (War(9))");
        assert_eq!(sent[0].report, None);
    }

    #[test]
    fn test_alliance_notifications_can_be_disabled() {
        let outbox = Arc::new(Outbox::new());
        let config = NotificationConfig {
            notify_defender: true,
            notify_alliances: false,
        };
        let listener = NotificationListener::new(Arc::clone(&outbox), config);
        let event: Event<'_> =
            StrategicTargetDestroyedEvent::new(WarId::new(9), AllianceId::new(1), AllianceId::new(2)).into();

        listener.handle(&event).unwrap();

        assert!(outbox.is_empty());
    }

    #[test]
    fn test_closed_outbox_fails_listener() {
        let outbox = Arc::new(Outbox::new());
        outbox.close();
        let listener = NotificationListener::new(Arc::clone(&outbox), NotificationConfig::default());
        let event: Event<'_> =
            StrategicTargetDestroyedEvent::new(WarId::new(1), AllianceId::new(1), AllianceId::new(2)).into();

        let err = listener.handle(&event).unwrap_err();

        assert_eq!(err.listener(), "notifications");
        assert!(matches!(err, ListenerError::Failed { .. }));
    }
}
