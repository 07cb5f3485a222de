//! Event producers.
//!
//! Services stand in for the game-logic layer: they finish their own state
//! change first, then build the matching event and dispatch it. They borrow
//! a fully wired [`EventDispatcher`](crate::dispatch::EventDispatcher).

mod battle;
mod war;

use thiserror::Error;

use crate::core::{AllianceId, ReportId, UserId};
use crate::dispatch::ListenerError;

pub use battle::{BattleOutcome, BattleService};
pub use war::WarService;

/// Errors returned by producers.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0} cannot fight itself")]
    SamePlayer(UserId),

    #[error("{0} cannot be both winner and loser")]
    SameAlliance(AllianceId),

    #[error("no report id left after {0}")]
    ReportSequenceExhausted(ReportId),

    #[error(transparent)]
    Listener(#[from] ListenerError),
}
