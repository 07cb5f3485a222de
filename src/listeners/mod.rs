//! Listeners for the cross-cutting subsystems.
//!
//! - [`AuditLogListener`]: structured audit records via `tracing`
//! - [`NotificationListener`]: player and alliance notifications
//! - [`StatsTracker`]: running battle and war totals
//! - [`AchievementListener`]: one-time unlocks based on those totals

mod achievements;
mod audit;
mod notify;
mod stats;

pub use achievements::{Achievement, AchievementListener, AllianceAchievement};
pub use audit::AuditLogListener;
pub use notify::{Notification, NotificationListener, NotificationSink, Outbox, Recipient, SinkError};
pub use stats::{AllianceStats, PlayerStats, StatsSnapshot, StatsTracker};
