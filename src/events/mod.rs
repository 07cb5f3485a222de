//! Domain events.
//!
//! Game-logic services describe what happened by building an [`Event`] and
//! handing it to the [`EventDispatcher`](crate::dispatch::EventDispatcher).
//! The set of events is closed: each variant has its own payload struct and
//! an [`EventKind`] discriminator that listeners are registered against.
//!
//! ## Key Components
//!
//! - [`Event`]: Sum of all event payloads
//! - [`EventKind`]: Inspectable discriminator used for routing
//! - [`BattleConcludedEvent`]: A battle report was committed
//! - [`StrategicTargetDestroyedEvent`]: A war was decided
//!
//! ## Example Usage
//!
//! ```
//! use warfront::core::{AllianceId, WarId};
//! use warfront::events::{Event, EventKind, StrategicTargetDestroyedEvent};
//!
//! let event: Event<'_> =
//!     StrategicTargetDestroyedEvent::new(WarId::new(1), AllianceId::new(2), AllianceId::new(3)).into();
//!
//! assert_eq!(event.kind(), EventKind::StrategicTargetDestroyed);
//! ```

mod battle;
mod event;
mod war;

pub use battle::{BattleConcludedEvent, BattleResult, UnknownBattleResult};
pub use event::{Event, EventKind};
pub use war::StrategicTargetDestroyedEvent;
