//! Core types: identifiers, players, wiring configuration.
//!
//! These are the plain values the event core passes around. They carry no
//! behavior beyond construction and inspection.

pub mod ids;
pub mod player;
pub mod config;

pub use ids::{AllianceId, ReportId, UserId, WarId};
pub use player::Player;
pub use config::{AchievementThresholds, ConfigError, NotificationConfig, WiringConfig};
