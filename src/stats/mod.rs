//! Match-history statistics and their session cache.
//!
//! Views showing a player's statistics fetch the full match history once and
//! keep it in a [`StatsCacheStore`] so navigating back within the freshness
//! window skips the refetch.

mod cache;
mod records;

pub use cache::{StatsCacheStore, StatsSnapshot, FRESHNESS_WINDOW};
pub use records::{GameMode, GameType, InvalidWinner, MatchRecord, Winner};
