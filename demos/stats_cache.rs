//! Statistics cache example: skip refetching within the freshness window

use flick::stats::{GameMode, GameType, Winner};
use flick::{MatchRecord, StatsCacheStore, StatsSnapshot, FRESHNESS_WINDOW};

fn fetch_history(now_ms: u64) -> StatsSnapshot {
    // Stand-in for the network fetch the real stats view performs.
    println!("  (fetching match history...)");
    let matches = vec![MatchRecord {
        id: "m-001".to_string(),
        team1_name: "Reds".to_string(),
        team2_name: "Blues".to_string(),
        team1_score: 7,
        team2_score: 5,
        team1_rounds: None,
        team2_rounds: None,
        winner: Some(Winner::Team1),
        game_mode: GameMode::Points,
        game_type: GameType::Doubles,
        start_time: now_ms - 900_000,
        end_time: now_ms,
        duration: 900_000,
        event_title: Some("Friday league".to_string()),
    }];
    StatsSnapshot::new(matches, now_ms)
}

fn open_stats_view(cache: &StatsCacheStore, now_ms: u64) {
    // Staleness is the reader's call: compare the age against the window
    // and refetch on a miss.
    match cache.get() {
        Some(snapshot) if snapshot.is_fresh(now_ms) => {
            println!(
                "Cache hit: {} matches, {}s old",
                snapshot.matches.len(),
                snapshot.age(now_ms).as_secs()
            );
        }
        _ => {
            println!("Cache miss, refreshing");
            cache.set(Some(fetch_history(now_ms)));
        }
    }
}

fn main() {
    println!("=== Stats Cache Example ===\n");

    let cache = StatsCacheStore::new();
    let t = 1_700_000_000_000u64;
    let window_ms = FRESHNESS_WINDOW.as_millis() as u64;

    println!("First visit:");
    open_stats_view(&cache, t);

    println!("\nBack two minutes later:");
    open_stats_view(&cache, t + 2 * 60 * 1000);

    println!("\nBack after the window ({}s) has passed:", window_ms / 1000);
    open_stats_view(&cache, t + window_ms);
}
