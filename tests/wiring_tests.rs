//! End-to-end tests: services producing events into a fully wired dispatcher.

use std::sync::Arc;

use warfront::core::{AchievementThresholds, ConfigError, AllianceId, Player, ReportId, UserId, WarId, WiringConfig};
use warfront::events::BattleResult;
use warfront::listeners::{Achievement, AllianceAchievement, Outbox, Recipient};
use warfront::services::{BattleOutcome, BattleService, ServiceError, WarService};
use warfront::wiring::wire;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warfront=trace"))
        .with_test_writer()
        .try_init();
}

fn config() -> WiringConfig {
    WiringConfig::from_json_str(
        r#"{
            "achievements": { "warlord_victories": 3, "plunderer_credits": 1000 },
            "audit": true
        }"#,
    )
    .unwrap()
}

/// A run of battles updates stats, unlocks achievements and queues notifications.
#[test]
fn test_battle_campaign() {
    init_tracing();
    let outbox = Arc::new(Outbox::new());
    let (dispatcher, subsystems) = wire(&config(), Arc::clone(&outbox)).unwrap();

    let aurelia = Player::new(UserId::new(1), "Aurelia").with_alliance(AllianceId::new(10));
    let brennus = Player::new(UserId::new(2), "Brennus").with_alliance(AllianceId::new(20));

    let mut battles = BattleService::new(&dispatcher);
    let raid = BattleOutcome::new(BattleResult::Victory)
        .with_prestige_gained(5)
        .with_guards_killed(2)
        .with_credits_plundered(400)
        .with_structure_damage(10);

    for _ in 0..3 {
        battles.conclude(&aurelia, &brennus, &raid).unwrap();
    }
    let counter = battles
        .conclude(&brennus, &aurelia, &BattleOutcome::new(BattleResult::Defeat))
        .unwrap();
    assert_eq!(counter, ReportId::new(4));

    let snapshot = subsystems.stats.snapshot();
    let a = snapshot.player(UserId::new(1));
    assert_eq!(a.battles, 4);
    assert_eq!(a.victories, 4);
    assert_eq!(a.credits_plundered, 1_200);
    assert_eq!(a.structure_damage_dealt, 30);

    let b = snapshot.player(UserId::new(2));
    assert_eq!(b.defeats, 4);
    assert_eq!(b.structure_damage_suffered, 30);

    assert_eq!(
        subsystems.achievements.unlocked(UserId::new(1)),
        vec![Achievement::FirstBlood, Achievement::Warlord, Achievement::Plunderer]
    );
    assert!(subsystems.achievements.unlocked(UserId::new(2)).is_empty());

    let sent = outbox.drain();
    assert_eq!(sent.len(), 8);
    assert_eq!(sent[0].recipient, Recipient::User(UserId::new(1)));
    assert_eq!(sent[1].recipient, Recipient::User(UserId::new(2)));
    assert_eq!(sent[7].report, Some(ReportId::new(4)));
}

/// War outcomes reach stats, achievements and both alliances.
#[test]
fn test_war_decided() {
    init_tracing();
    let outbox = Arc::new(Outbox::new());
    let (dispatcher, subsystems) = wire(&WiringConfig::default(), Arc::clone(&outbox)).unwrap();

    WarService::new(&dispatcher)
        .destroy_strategic_target(WarId::new(7), AllianceId::new(10), AllianceId::new(20))
        .unwrap();

    assert_eq!(subsystems.stats.alliance(AllianceId::new(10)).strategic_targets_destroyed, 1);
    assert_eq!(subsystems.stats.alliance(AllianceId::new(20)).strategic_targets_lost, 1);
    assert_eq!(
        subsystems.achievements.alliance_unlocked(AllianceId::new(10)),
        vec![AllianceAchievement::StrategicStrike]
    );

    let recipients: Vec<_> = outbox.drain().into_iter().map(|n| n.recipient).collect();
    assert_eq!(
        recipients,
        vec![Recipient::Alliance(AllianceId::new(10)), Recipient::Alliance(AllianceId::new(20))]
    );
}

/// Notifications run last, so a closed outbox fails the producer only after
/// stats and achievements have been updated.
#[test]
fn test_closed_outbox_surfaces_to_producer() {
    let outbox = Arc::new(Outbox::new());
    outbox.close();
    let config = WiringConfig::default()
        .with_achievements(AchievementThresholds::default())
        .with_audit(false);
    let (dispatcher, subsystems) = wire(&config, Arc::clone(&outbox)).unwrap();

    let aurelia = Player::new(UserId::new(1), "Aurelia");
    let brennus = Player::new(UserId::new(2), "Brennus");
    let err = BattleService::new(&dispatcher)
        .conclude(&aurelia, &brennus, &BattleOutcome::new(BattleResult::Victory))
        .unwrap_err();

    match err {
        ServiceError::Listener(listener_err) => assert_eq!(listener_err.listener(), "notifications"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(subsystems.stats.player(UserId::new(1)).victories, 1);
    assert_eq!(subsystems.achievements.unlocked(UserId::new(1)), vec![Achievement::FirstBlood]);
    assert!(outbox.is_empty());
}

/// Defender notifications can be switched off through config.
#[test]
fn test_config_controls_notifications() {
    let outbox = Arc::new(Outbox::new());
    let config = WiringConfig::from_json_str(r#"{ "notifications": { "notify_defender": false } }"#).unwrap();
    let (dispatcher, _) = wire(&config, Arc::clone(&outbox)).unwrap();

    let aurelia = Player::new(UserId::new(1), "Aurelia");
    let brennus = Player::new(UserId::new(2), "Brennus");
    BattleService::new(&dispatcher)
        .conclude(&aurelia, &brennus, &BattleOutcome::new(BattleResult::Stalemate))
        .unwrap();

    let sent = outbox.drain();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, Recipient::User(UserId::new(1)));
}

/// Configs assembled in code go through the same checks as JSON ones, so a
/// zero threshold can never hand achievements to losing players.
#[test]
fn test_builder_config_validated_on_wire() {
    let config = WiringConfig::default()
        .with_achievements(AchievementThresholds::default().with_warlord_victories(0));

    match wire(&config, Arc::new(Outbox::new())) {
        Err(ConfigError::Invalid { field }) => assert_eq!(field, "achievements.warlord_victories"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("zero threshold was wired"),
    }
}
