//! Mining tracker driven by a recorded event feed

mod common;

use std::time::Duration;

use xtm_achievements::config::TrackerSettings;
use xtm_achievements::stats::AchievementId;
use xtm_achievements::tracker::{MiningEvent, MiningTracker};

use common::{day, Harness};

const FEED: &str = r#"
{"type":"performance_mode","enabled":true}
{"type":"mining_status","hardware":"cpu","is_mining":true,"hash_rate":800.0,"estimated_earnings":0}
{"type":"pool_stats","hardware":"cpu","accepted_shares":0}
{"type":"mining_status","hardware":"gpu","is_mining":true,"hash_rate":12000.0,"estimated_earnings":5000000}
{"type":"pool_stats","hardware":"cpu","accepted_shares":150}
{"type":"mining_status","hardware":"cpu","is_mining":true,"hash_rate":900.0,"estimated_earnings":250000}
"#;

fn events() -> Vec<MiningEvent> {
    FEED.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_feed_updates_stats_and_unlocks() {
    let h = Harness::new(day(2024, 7, 1));
    let manager = h.manager.into_shared();
    let mut tracker = MiningTracker::new(manager.clone(), TrackerSettings::default());

    let mut unlocked = Vec::new();
    for event in events() {
        unlocked.extend(tracker.handle(event));
    }

    assert!(unlocked.contains(&AchievementId::PerformanceMode));
    assert!(unlocked.contains(&AchievementId::FirstSession));
    assert!(unlocked.contains(&AchievementId::HashApprentice));
    assert!(unlocked.contains(&AchievementId::CenturyClub));
    assert!(unlocked.contains(&AchievementId::FirstXtm));

    {
        let manager = manager.lock().unwrap();
        let stats = manager.stats();
        assert_eq!(stats.sessions_count, 1);
        assert_eq!(stats.total_shares_submitted, 150);
        // GPU estimate was its own baseline; only the CPU delta counts
        assert_eq!(stats.total_xtm_earned, 0.25);
        assert_eq!(stats.best_hashrate, 12_900.0);

        let today = &stats.daily_stats[&day(2024, 7, 1)];
        assert_eq!(today.shares_submitted, 150);
        assert_eq!(today.peak_hashrate, 12_900.0);
    }

    tokio::time::sleep(Duration::from_secs(65)).await;
    assert_eq!(manager.lock().unwrap().stats().total_mining_seconds, 60);

    tracker.shutdown();
    tokio::time::sleep(Duration::from_secs(60)).await;

    let manager = manager.lock().unwrap();
    assert_eq!(manager.stats().total_mining_seconds, 60);
    assert_eq!(
        manager.stats().daily_stats[&day(2024, 7, 1)].mining_seconds,
        60
    );
}

#[tokio::test(start_paused = true)]
async fn test_custom_tick_interval_and_divisor() {
    let h = Harness::new(day(2024, 7, 1));
    let manager = h.manager.into_shared();
    let settings = TrackerSettings {
        tick_interval_secs: 30,
        earnings_divisor: 1_000.0,
    };
    let mut tracker = MiningTracker::new(manager.clone(), settings);

    let status = |estimate: f64| MiningEvent::MiningStatus {
        hardware: xtm_achievements::tracker::HardwareClass::Gpu,
        is_mining: true,
        hash_rate: 0.0,
        estimated_earnings: Some(estimate),
    };
    tracker.handle(status(1_000.0));
    tracker.handle(status(3_000.0));

    tokio::time::sleep(Duration::from_secs(95)).await;
    tracker.shutdown();

    let manager = manager.lock().unwrap();
    assert_eq!(manager.stats().total_xtm_earned, 2.0);
    assert_eq!(manager.stats().total_mining_seconds, 90);
}
