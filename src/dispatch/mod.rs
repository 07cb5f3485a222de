//! Event dispatch core.
//!
//! Producers hand events to an [`EventDispatcher`], which forwards them to
//! the [`Listener`]s registered for that event's kind. There is no queue and
//! no background work: dispatch is a direct, in-order call of every listener
//! on the producer's thread.
//!
//! ## Example Usage
//!
//! ```
//! use std::sync::Arc;
//! use warfront::core::{Player, ReportId, UserId};
//! use warfront::dispatch::{EventDispatcher, Listener, ListenerError};
//! use warfront::events::{BattleConcludedEvent, BattleResult, Event, EventKind};
//!
//! struct RejectStalemates;
//!
//! impl Listener for RejectStalemates {
//!     fn handle(&self, event: &Event<'_>) -> Result<(), ListenerError> {
//!         match event.as_battle_concluded() {
//!             Some(battle) if battle.result() == BattleResult::Stalemate => {
//!                 Err(ListenerError::rejected(self.name(), "stalemate"))
//!             }
//!             _ => Ok(()),
//!         }
//!     }
//! }
//!
//! let mut dispatcher = EventDispatcher::new();
//! dispatcher.add_listener(EventKind::BattleConcluded, Arc::new(RejectStalemates));
//!
//! let attacker = Player::new(UserId::new(1), "Aurelia");
//! let defender = Player::new(UserId::new(2), "Brennus");
//! let event = BattleConcludedEvent::new(ReportId::new(1), &attacker, &defender, BattleResult::Stalemate);
//!
//! assert!(dispatcher.dispatch(&event.into()).is_err());
//! ```

mod dispatcher;
mod listener;

pub use dispatcher::EventDispatcher;
pub use listener::{Listener, ListenerError};
