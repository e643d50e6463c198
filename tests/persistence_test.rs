//! Snapshot persistence across restarts

mod common;

use std::sync::Arc;

use serde_json::json;
use tempfile::TempDir;

use xtm_achievements::config::{StorageBackend, StorageSettings};
use xtm_achievements::stats::{
    open_gateway, AchievementId, AchievementManager, Clock, DailyStatsUpdate, JsonFileBackend,
    ManualClock, MemoryBackend, PersistenceGateway,
};

use common::{day, Harness};

fn settings(dir: &TempDir, backend: StorageBackend) -> StorageSettings {
    let file = match backend {
        StorageBackend::Json => "achievements.json",
        StorageBackend::Sqlite => "achievements.db",
    };
    StorageSettings {
        backend,
        path: Some(dir.path().join(file)),
        ..StorageSettings::default()
    }
}

fn open(settings: &StorageSettings, clock: &ManualClock) -> AchievementManager {
    let gateway = open_gateway(settings).unwrap();
    AchievementManager::with_clock(gateway, Arc::new(clock.clone()))
}

fn roundtrip(backend: StorageBackend) {
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, backend);
    let clock = ManualClock::at_day(day(2024, 6, 10));

    let mut manager = open(&settings, &clock);
    manager.record_session();
    manager.increment_shares(120);
    manager.update_hashrate(2_500.0);
    let unlocked_at = manager
        .achievement(AchievementId::CenturyClub)
        .unwrap()
        .unlocked_at;
    let stats = manager.stats().clone();
    drop(manager);

    let reopened = open(&settings, &clock);
    assert_eq!(reopened.stats(), &stats);
    assert_eq!(
        reopened.achievement(AchievementId::CenturyClub).unwrap().unlocked_at,
        unlocked_at
    );
    assert_eq!(reopened.progress().unlocked, 4);
    assert!(reopened.snapshot().recent_unlocks.is_empty());
}

#[test]
fn test_json_backend_survives_restart() {
    roundtrip(StorageBackend::Json);
}

#[test]
fn test_sqlite_backend_survives_restart() {
    roundtrip(StorageBackend::Sqlite);
}

#[test]
fn test_memory_backend_survives_restart() {
    let mut h = Harness::new(day(2024, 6, 10));
    h.manager.add_earnings(12.5);
    let mut h = h.restart();

    assert_eq!(h.manager.stats().total_xtm_earned, 12.5);
    assert!(h.manager.achievement(AchievementId::TenXtm).unwrap().is_unlocked());
    assert!(h.manager.drain_recent_unlocks().is_empty());
}

#[test]
fn test_huge_earnings_do_not_wipe_history() {
    let mut h = Harness::new(day(2024, 6, 10));
    h.manager.record_session();
    h.manager.increment_shares(150);
    h.manager.add_earnings(f64::MAX);
    h.manager.add_earnings(f64::MAX);
    h.manager.record_daily_stats(DailyStatsUpdate::earnings(f64::MAX));
    h.manager.record_daily_stats(DailyStatsUpdate::earnings(f64::MAX));

    let saved: serde_json::Value =
        serde_json::from_str(&h.backend.contents().unwrap()).unwrap();
    assert_eq!(saved["stats"]["totalXtmEarned"], f64::MAX);

    let h = h.restart();
    let stats = h.manager.stats();
    assert_eq!(stats.total_shares_submitted, 150);
    assert_eq!(stats.sessions_count, 1);
    assert_eq!(stats.total_xtm_earned, f64::MAX);
    assert_eq!(stats.daily_stats[&day(2024, 6, 10)].xtm_earned, f64::MAX);
    assert!(h.manager.achievement(AchievementId::CenturyClub).unwrap().is_unlocked());
    assert!(h.manager.achievement(AchievementId::TenThousandXtm).unwrap().is_unlocked());
}

#[test]
fn test_corrupt_snapshot_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let settings = settings(&dir, StorageBackend::Json);
    std::fs::write(settings.snapshot_path(), "{\"achievements\": [1, 2").unwrap();

    let manager = open(&settings, &ManualClock::at_day(day(2024, 6, 10)));
    assert_eq!(manager.progress().unlocked, 0);
    assert_eq!(manager.stats().sessions_count, 0);

    // Initialization rewrites the file with a valid snapshot
    let body = std::fs::read_to_string(settings.snapshot_path()).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&body).is_ok());
}

#[test]
fn test_catalog_merge_keeps_unlocks_and_refreshes_descriptions() {
    let stored = json!({
        "achievements": {
            "first_share": {
                "id": "first_share",
                "name": "Old Name",
                "description": "Old description",
                "icon": "?",
                "category": "mining",
                "rarity": "common",
                "requirement": 1,
                "unlockedAt": 1_700_000_000_000_i64,
                "progress": 1
            },
            "retired_badge": {
                "id": "retired_badge",
                "unlockedAt": 1_600_000_000_000_i64
            }
        },
        "stats": {
            "totalSharesSubmitted": 3,
            "dailyStats": {}
        }
    });
    let backend = MemoryBackend::with_contents(stored.to_string());
    let h = Harness::with_backend(day(2024, 6, 10), backend);

    let record = h.manager.achievement(AchievementId::FirstShare).unwrap();
    assert_eq!(record.unlocked_at, Some(1_700_000_000_000));
    assert_eq!(record.definition.name, "First Share");
    assert_ne!(record.definition.description, "Old description");
    assert_eq!(h.manager.achievements().count(), 25);
    assert_eq!(h.manager.stats().total_shares_submitted, 3);

    let saved: serde_json::Value =
        serde_json::from_str(&h.backend.contents().unwrap()).unwrap();
    assert!(saved["achievements"].get("retired_badge").is_none());
    assert_eq!(saved["achievements"]["first_share"]["name"], "First Share");
}

#[test]
fn test_snapshot_uses_camel_case_layout() {
    let mut h = Harness::new(day(2024, 6, 10));
    h.manager.record_session();
    h.manager.add_mining_time(60);

    let saved: serde_json::Value =
        serde_json::from_str(&h.backend.contents().unwrap()).unwrap();
    let stats = &saved["stats"];
    assert_eq!(stats["sessionsCount"], 1);
    assert_eq!(stats["totalMiningSeconds"], 60);
    assert_eq!(stats["lastMiningDate"], "2024-06-10");
    assert_eq!(
        saved["achievements"]["first_session"]["unlockedAt"],
        h.clock.now_ms()
    );
}

#[test]
fn test_unwritable_location_keeps_running_in_memory() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let gateway = PersistenceGateway::new(JsonFileBackend::new(
        blocker.join("achievements.json"),
    ));
    let mut manager = AchievementManager::new(gateway);

    assert_eq!(manager.increment_shares(1), vec![AchievementId::FirstShare]);
    assert_eq!(manager.stats().total_shares_submitted, 1);
}
