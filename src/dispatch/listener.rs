//! The listener capability.

use std::error::Error as StdError;

use thiserror::Error;

use crate::events::Event;

/// Failure raised by a listener while handling an event.
///
/// The dispatcher never inspects or wraps these: the first one aborts the
/// dispatch and is returned to the caller as-is.
#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("listener {listener} rejected event: {reason}")]
    Rejected { listener: String, reason: String },

    #[error("listener {listener} cannot access {resource}: lock poisoned")]
    Poisoned {
        listener: &'static str,
        resource: &'static str,
    },

    #[error("listener {listener} failed")]
    Failed {
        listener: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl ListenerError {
    /// The listener refused the event.
    pub fn rejected(listener: impl Into<String>, reason: impl Into<String>) -> Self {
        ListenerError::Rejected {
            listener: listener.into(),
            reason: reason.into(),
        }
    }

    /// The listener hit an error from one of its collaborators.
    pub fn failed(
        listener: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        ListenerError::Failed {
            listener: listener.into(),
            source: source.into(),
        }
    }

    /// Name of the listener that raised this error.
    #[must_use]
    pub fn listener(&self) -> &str {
        match self {
            ListenerError::Rejected { listener, .. } | ListenerError::Failed { listener, .. } => {
                listener.as_str()
            }
            ListenerError::Poisoned { listener, .. } => *listener,
        }
    }
}

/// A handler for domain events.
///
/// Listeners perform side effects (logging, notifications, stat tracking)
/// and report failure only through the returned error. They run on the
/// dispatching thread while the producer waits, so they should be fast and
/// never block.
///
/// Any `Fn(&Event<'_>) -> Result<(), ListenerError>` closure is a listener.
///
/// ```
/// use warfront::dispatch::{Listener, ListenerError};
/// use warfront::events::Event;
///
/// struct Ignore;
///
/// impl Listener for Ignore {
///     fn handle(&self, _event: &Event<'_>) -> Result<(), ListenerError> {
///         Ok(())
///     }
///
///     fn name(&self) -> &str {
///         "ignore"
///     }
/// }
/// ```
pub trait Listener: Send + Sync {
    /// Handle one event.
    fn handle(&self, event: &Event<'_>) -> Result<(), ListenerError>;

    /// Name used in logs and errors.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Listener for F
where
    F: Fn(&Event<'_>) -> Result<(), ListenerError> + Send + Sync,
{
    fn handle(&self, event: &Event<'_>) -> Result<(), ListenerError> {
        self(event)
    }
}
