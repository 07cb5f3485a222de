//! Wiring configuration.
//!
//! The host application configures the listener subsystems at startup by
//! providing:
//! - `AchievementThresholds`: when cumulative stats unlock achievements
//! - `NotificationConfig`: who gets told about what
//! - `WiringConfig`: combines all configuration and toggles the audit log
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse wiring config")]
    Parse(#[from] serde_json::Error),

    #[error("invalid wiring config: {field} must be greater than zero")]
    Invalid { field: &'static str },
}

/// Cumulative thresholds for per-player achievements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchievementThresholds {
    /// Victories needed for `Warlord`.
    pub warlord_victories: u64,

    /// Credits plundered needed for `Plunderer`.
    pub plunderer_credits: u64,

    /// Structure damage dealt needed for `Demolisher`.
    pub demolisher_damage: u64,

    /// Guards killed needed for `Headhunter`.
    pub headhunter_guards: u64,

    /// Prestige gained needed for `PrestigeHoarder`.
    pub prestige_hoarder: u64,
}

impl Default for AchievementThresholds {
    fn default() -> Self {
        Self {
            warlord_victories: 10,
            plunderer_credits: 100_000,
            demolisher_damage: 5_000,
            headhunter_guards: 1_000,
            prestige_hoarder: 500,
        }
    }
}

impl AchievementThresholds {
    /// Set the victories needed for `Warlord`.
    #[must_use]
    pub fn with_warlord_victories(mut self, victories: u64) -> Self {
        self.warlord_victories = victories;
        self
    }

    /// Set the credits needed for `Plunderer`.
    #[must_use]
    pub fn with_plunderer_credits(mut self, credits: u64) -> Self {
        self.plunderer_credits = credits;
        self
    }

    /// Set the structure damage needed for `Demolisher`.
    #[must_use]
    pub fn with_demolisher_damage(mut self, damage: u64) -> Self {
        self.demolisher_damage = damage;
        self
    }

    /// Set the guards killed needed for `Headhunter`.
    #[must_use]
    pub fn with_headhunter_guards(mut self, guards: u64) -> Self {
        self.headhunter_guards = guards;
        self
    }

    /// Set the prestige needed for `PrestigeHoarder`.
    #[must_use]
    pub fn with_prestige_hoarder(mut self, prestige: u64) -> Self {
        self.prestige_hoarder = prestige;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("achievements.warlord_victories", self.warlord_victories),
            ("achievements.plunderer_credits", self.plunderer_credits),
            ("achievements.demolisher_damage", self.demolisher_damage),
            ("achievements.headhunter_guards", self.headhunter_guards),
            ("achievements.prestige_hoarder", self.prestige_hoarder),
        ];
        match fields.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(ConfigError::Invalid { field: *field }),
            None => Ok(()),
        }
    }
}

/// Notification fan-out rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Send the defender a battle report notification.
    pub notify_defender: bool,

    /// Notify both alliances when a strategic target falls.
    pub notify_alliances: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            notify_defender: true,
            notify_alliances: true,
        }
    }
}

/// Complete wiring configuration.
///
/// ```
/// use warfront::core::WiringConfig;
///
/// let config = WiringConfig::from_json_str(r#"{ "audit": false }"#).unwrap();
/// assert!(!config.audit);
/// assert_eq!(config.achievements.warlord_victories, 10);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WiringConfig {
    /// Achievement thresholds.
    pub achievements: AchievementThresholds,

    /// Notification rules.
    pub notifications: NotificationConfig,

    /// Register the audit log listener.
    pub audit: bool,
}

impl Default for WiringConfig {
    fn default() -> Self {
        Self {
            achievements: AchievementThresholds::default(),
            notifications: NotificationConfig::default(),
            audit: true,
        }
    }
}

impl WiringConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set achievement thresholds.
    #[must_use]
    pub fn with_achievements(mut self, achievements: AchievementThresholds) -> Self {
        self.achievements = achievements;
        self
    }

    /// Set notification rules.
    #[must_use]
    pub fn with_notifications(mut self, notifications: NotificationConfig) -> Self {
        self.notifications = notifications;
        self
    }

    /// Enable or disable the audit log.
    #[must_use]
    pub fn with_audit(mut self, audit: bool) -> Self {
        self.audit = audit;
        self
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.achievements.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WiringConfig::new();
        assert!(config.audit);
        assert!(config.notifications.notify_defender);
        assert!(config.notifications.notify_alliances);
        assert_eq!(config.achievements.plunderer_credits, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = WiringConfig::from_json_str("{}").unwrap();
        assert_eq!(config, WiringConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "achievements": { "warlord_victories": 3 },
            "notifications": { "notify_defender": false }
        }"#;
        let config = WiringConfig::from_json_str(json).unwrap();

        assert_eq!(config.achievements.warlord_victories, 3);
        assert_eq!(config.achievements.demolisher_damage, 5_000);
        assert!(!config.notifications.notify_defender);
        assert!(config.notifications.notify_alliances);
        assert!(config.audit);
    }

    #[test]
    fn test_malformed_json() {
        let err = WiringConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let json = r#"{ "achievements": { "headhunter_guards": 0 } }"#;
        let err = WiringConfig::from_json_str(json).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { field: "achievements.headhunter_guards" }
        ));
    }

    #[test]
    fn test_builder() {
        let config = WiringConfig::new()
            .with_audit(false)
            .with_achievements(AchievementThresholds::default().with_warlord_victories(2))
            .with_notifications(NotificationConfig {
                notify_defender: false,
                notify_alliances: true,
            });

        assert!(!config.audit);
        assert_eq!(config.achievements.warlord_victories, 2);
        assert!(!config.notifications.notify_defender);
    }
}
