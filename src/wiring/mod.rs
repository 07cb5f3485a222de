//! Application bootstrap.
//!
//! [`wire`] builds the dispatcher once, before any traffic, and returns
//! handles to the stateful subsystems so the host can read them later.
//!
//! Registration order for every kind:
//! 1. audit log (if enabled)
//! 2. stats tracker
//! 3. achievements (reads the tracker, so it must follow it)
//! 4. notifications

use std::sync::Arc;

use crate::core::{ConfigError, WiringConfig};
use crate::dispatch::{EventDispatcher, Listener};
use crate::events::EventKind;
use crate::listeners::{AchievementListener, AuditLogListener, NotificationListener, NotificationSink, StatsTracker};

/// Handles to the wired subsystems.
#[derive(Debug, Clone)]
pub struct Subsystems {
    pub stats: Arc<StatsTracker>,
    pub achievements: Arc<AchievementListener>,
}

/// Build a dispatcher with the standard listeners for `config`.
///
/// The config is validated first, so a zero threshold is rejected here no
/// matter how the config was built.
///
/// ```
/// use std::sync::Arc;
/// use warfront::core::{Player, UserId, WiringConfig};
/// use warfront::events::BattleResult;
/// use warfront::listeners::Outbox;
/// use warfront::services::{BattleOutcome, BattleService};
/// use warfront::wiring::wire;
///
/// let outbox = Arc::new(Outbox::new());
/// let (dispatcher, subsystems) = wire(&WiringConfig::default(), Arc::clone(&outbox)).unwrap();
///
/// let attacker = Player::new(UserId::new(1), "Aurelia");
/// let defender = Player::new(UserId::new(2), "Brennus");
/// BattleService::new(&dispatcher)
///     .conclude(&attacker, &defender, &BattleOutcome::new(BattleResult::Victory))
///     .unwrap();
///
/// assert_eq!(subsystems.stats.player(UserId::new(1)).victories, 1);
/// assert_eq!(outbox.len(), 2);
/// ```
pub fn wire<S>(config: &WiringConfig, sink: S) -> Result<(EventDispatcher, Subsystems), ConfigError>
where
    S: NotificationSink + 'static,
{
    config.validate()?;

    let stats = Arc::new(StatsTracker::new());
    let achievements = Arc::new(AchievementListener::new(Arc::clone(&stats), config.achievements));
    let notifications: Arc<dyn Listener> = Arc::new(NotificationListener::new(sink, config.notifications));
    let audit: Option<Arc<dyn Listener>> = config
        .audit
        .then(|| Arc::new(AuditLogListener::new()) as Arc<dyn Listener>);

    let mut dispatcher = EventDispatcher::new();
    for kind in EventKind::ALL {
        if let Some(audit) = &audit {
            dispatcher.add_listener(kind, Arc::clone(audit));
        }
        dispatcher.add_listener(kind, Arc::clone(&stats) as Arc<dyn Listener>);
        dispatcher.add_listener(kind, Arc::clone(&achievements) as Arc<dyn Listener>);
        dispatcher.add_listener(kind, Arc::clone(&notifications));
    }
    tracing::info!(listeners = dispatcher.len(), audit = config.audit, "event dispatcher wired");

    Ok((dispatcher, Subsystems { stats, achievements }))
}
