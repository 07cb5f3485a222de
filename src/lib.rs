//! # warfront
//!
//! Domain event core for a browser-based multiplayer strategy game.
//!
//! Game-logic services (battle resolution, wars) announce what happened by
//! dispatching typed events. Side effects such as audit logging,
//! notifications, stat tracking and achievements live in listeners that the
//! application wires in once at startup.
//!
//! ## Design Principles
//!
//! 1. **Closed event set**: `Event` is an enum and `EventKind` its
//!    discriminator. Listeners are registered per kind and matched exactly.
//!
//! 2. **Synchronous, in-order**: `dispatch` calls each listener on the
//!    producer's thread, in registration order, before returning.
//!
//! 3. **Fail fast**: the first listener error stops the dispatch and reaches
//!    the producer unchanged.
//!
//! 4. **Explicit wiring**: the dispatcher is a plain value built at startup
//!    and passed by reference. Registering needs `&mut`, dispatching `&`.
//!
//! ## Modules
//!
//! - `core`: Identifiers, players, wiring configuration
//! - `events`: Event payloads and kinds
//! - `dispatch`: Listener trait and dispatcher
//! - `listeners`: Audit, notification, stats and achievement listeners
//! - `services`: Producers that commit state and dispatch events
//! - `wiring`: Standard bootstrap of the dispatcher

pub mod core;
pub mod events;
pub mod dispatch;
pub mod listeners;
pub mod services;
pub mod wiring;

// Re-export commonly used types
pub use crate::core::{
    AllianceId, ReportId, UserId, WarId,
    Player,
    AchievementThresholds, ConfigError, NotificationConfig, WiringConfig,
};

pub use crate::events::{
    BattleConcludedEvent, BattleResult, Event, EventKind, StrategicTargetDestroyedEvent,
};

pub use crate::dispatch::{EventDispatcher, Listener, ListenerError};

pub use crate::listeners::{
    Achievement, AchievementListener, AllianceAchievement, AuditLogListener,
    Notification, NotificationListener, NotificationSink, Outbox, Recipient, SinkError,
    PlayerStats, AllianceStats, StatsSnapshot, StatsTracker,
};

pub use crate::services::{BattleOutcome, BattleService, ServiceError, WarService};

pub use crate::wiring::{wire, Subsystems};
