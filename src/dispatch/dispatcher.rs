//! Event dispatcher.
//!
//! The dispatcher maps each event kind to an ordered list of listeners.
//! The host application registers listeners once at startup, then hands
//! shared references to the services that produce events.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::events::{Event, EventKind};

use super::listener::{Listener, ListenerError};

/// Listeners for one kind, in registration order.
type ListenerList = SmallVec<[Arc<dyn Listener>; 4]>;

/// Registry and invocation engine for domain events.
///
/// Registration needs `&mut self` and dispatch only `&self`, so once the
/// dispatcher is shared (by reference or behind an `Arc`) the registry is
/// frozen. Dispatch is synchronous: every listener runs on the caller's
/// thread before `dispatch` returns.
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use warfront::core::{AllianceId, WarId};
/// use warfront::dispatch::EventDispatcher;
/// use warfront::events::{Event, EventKind, StrategicTargetDestroyedEvent};
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
///
/// let mut dispatcher = EventDispatcher::new();
/// dispatcher.add_listener_fn(EventKind::StrategicTargetDestroyed, move |_event: &Event<'_>| {
///     counter.fetch_add(1, Ordering::SeqCst);
///     Ok(())
/// });
///
/// let event = StrategicTargetDestroyedEvent::new(WarId::new(1), AllianceId::new(2), AllianceId::new(3));
/// dispatcher.dispatch(&event.into()).unwrap();
///
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
#[derive(Default)]
pub struct EventDispatcher {
    listeners: FxHashMap<EventKind, ListenerList>,
}

impl EventDispatcher {
    /// Create a dispatcher with no listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for events of exactly `kind`.
    ///
    /// Appends to the kind's list. Registering the same listener twice makes
    /// it run twice per dispatch.
    pub fn add_listener(&mut self, kind: EventKind, listener: Arc<dyn Listener>) {
        tracing::debug!(kind = %kind, listener = listener.name(), "registering listener");
        self.listeners.entry(kind).or_default().push(listener);
    }

    /// Register a closure as a listener.
    pub fn add_listener_fn<F>(&mut self, kind: EventKind, listener: F)
    where
        F: Fn(&Event<'_>) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        self.add_listener(kind, Arc::new(listener));
    }

    /// Deliver an event to every listener registered for its kind.
    ///
    /// Listeners run in registration order and all see the same `event`.
    /// With no listeners for the kind this does nothing. The first listener
    /// error stops the dispatch; later listeners are skipped and the error
    /// is returned untouched.
    pub fn dispatch(&self, event: &Event<'_>) -> Result<(), ListenerError> {
        let kind = event.kind();
        let Some(listeners) = self.listeners.get(&kind) else {
            tracing::trace!(kind = %kind, "no listeners registered");
            return Ok(());
        };

        tracing::trace!(kind = %kind, listeners = listeners.len(), "dispatching event");
        for listener in listeners {
            tracing::trace!(kind = %kind, listener = listener.name(), "invoking listener");
            listener.handle(event)?;
        }
        Ok(())
    }

    /// Number of registrations for a kind (duplicates included).
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, SmallVec::len)
    }

    /// Check if anything is registered for a kind.
    #[must_use]
    pub fn has_listeners(&self, kind: EventKind) -> bool {
        self.listener_count(kind) > 0
    }

    /// Names of the listeners for a kind, in invocation order.
    pub fn listener_names(&self, kind: EventKind) -> Vec<&str> {
        self.listeners
            .get(&kind)
            .map(|list| list.iter().map(|l| l.name()).collect())
            .unwrap_or_default()
    }

    /// Total registrations across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.values().map(SmallVec::len).sum()
    }

    /// Check if no listener is registered at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for kind in EventKind::ALL {
            if let Some(list) = self.listeners.get(&kind) {
                map.entry(&kind, &list.iter().map(|l| l.name()).collect::<Vec<_>>());
            }
        }
        map.finish()
    }
}
