//! War producer.

use crate::core::{AllianceId, WarId};
use crate::dispatch::EventDispatcher;
use crate::events::{Event, StrategicTargetDestroyedEvent};

use super::ServiceError;

/// Announces decided wars.
#[derive(Clone, Copy, Debug)]
pub struct WarService<'d> {
    dispatcher: &'d EventDispatcher,
}

impl<'d> WarService<'d> {
    pub fn new(dispatcher: &'d EventDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Record that `winner` destroyed `loser`'s strategic target in `war`.
    pub fn destroy_strategic_target(
        &self,
        war: WarId,
        winner: AllianceId,
        loser: AllianceId,
    ) -> Result<(), ServiceError> {
        if winner == loser {
            return Err(ServiceError::SameAlliance(winner));
        }
        tracing::debug!(war = war.raw(), winner = winner.raw(), loser = loser.raw(), "strategic target destroyed");

        let event = StrategicTargetDestroyedEvent::new(war, winner, loser);
        self.dispatcher.dispatch(&Event::StrategicTargetDestroyed(event))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::events::EventKind;

    #[test]
    fn test_destroy_dispatches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_listener_fn(EventKind::StrategicTargetDestroyed, move |event: &Event<'_>| {
            assert_eq!(event.kind(), EventKind::StrategicTargetDestroyed);
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        WarService::new(&dispatcher)
            .destroy_strategic_target(WarId::new(1), AllianceId::new(2), AllianceId::new(3))
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_same_alliance_rejected() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut dispatcher = EventDispatcher::new();
        dispatcher.add_listener_fn(EventKind::StrategicTargetDestroyed, move |_event: &Event<'_>| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let err = WarService::new(&dispatcher)
            .destroy_strategic_target(WarId::new(1), AllianceId::new(2), AllianceId::new(2))
            .unwrap_err();

        assert!(matches!(err, ServiceError::SameAlliance(id) if id == AllianceId::new(2)));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
