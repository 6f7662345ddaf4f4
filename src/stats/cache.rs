use super::records::MatchRecord;
use crate::store::{Store, Subscription};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// How long a cached snapshot stays usable before a view must refetch.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(5 * 60);

/// The cached payload of the statistics views: the fetched match history
/// plus the moment it was fetched.
///
/// Both fields are always populated together; a snapshot is never partial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub matches: Vec<MatchRecord>,
    /// Unix epoch milliseconds of the fetch that produced `matches`.
    pub last_updated: u64,
}

impl StatsSnapshot {
    pub fn new(matches: Vec<MatchRecord>, last_updated: u64) -> Self {
        Self {
            matches,
            last_updated,
        }
    }

    /// Age of the snapshot at `now_ms` (clamped to zero for clocks that
    /// moved backwards).
    pub fn age(&self, now_ms: u64) -> Duration {
        Duration::from_millis(now_ms.saturating_sub(self.last_updated))
    }

    /// Whether the snapshot may still be used at `now_ms`.
    ///
    /// Fresh while `now - last_updated < FRESHNESS_WINDOW`: a snapshot aged
    /// exactly the window is already stale.
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        self.age(now_ms) < FRESHNESS_WINDOW
    }
}

/// Session cache for the statistics views.
///
/// Holds the last fetched [`StatsSnapshot`], or nothing before the first
/// fetch. A new fetch result fully replaces the old one; there is no merge.
/// Staleness is the reader's call: the store never expires or refreshes
/// entries on its own.
pub struct StatsCacheStore {
    store: Store<Option<StatsSnapshot>>,
}

impl StatsCacheStore {
    /// Create an empty cache (no fetch has happened yet).
    pub fn new() -> Self {
        Self {
            store: Store::new(None),
        }
    }

    /// The cached snapshot, if any.
    pub fn get(&self) -> Option<StatsSnapshot> {
        self.store.get()
    }

    /// Replace the cached snapshot atomically. `None` empties the cache.
    pub fn set(&self, snapshot: Option<StatsSnapshot>) {
        match &snapshot {
            Some(snapshot) => debug!(
                matches = snapshot.matches.len(),
                last_updated = snapshot.last_updated,
                "stats cache replaced"
            ),
            None => debug!("stats cache emptied"),
        }
        self.store.set(snapshot);
    }

    /// Whether a cached snapshot exists and is still fresh at `now_ms`.
    pub fn is_fresh(&self, now_ms: u64) -> bool {
        self.store.read(|snapshot| {
            snapshot
                .as_ref()
                .is_some_and(|snapshot| snapshot.is_fresh(now_ms))
        })
    }

    /// Subscribe to cache changes.
    ///
    /// The observer is called immediately with the current value, which is
    /// `None` when nothing has been fetched yet.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Option<StatsSnapshot>) + Send + Sync + 'static,
    {
        self.store.subscribe(observer)
    }
}

impl Default for StatsCacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    const T: u64 = 1_700_000_000_000;
    const D: u64 = FRESHNESS_WINDOW.as_millis() as u64;

    #[test]
    fn starts_empty() {
        let cache = StatsCacheStore::new();
        assert_eq!(cache.get(), None);
        assert!(!cache.is_fresh(T));
    }

    #[test]
    fn new_subscriber_sees_absent_value() {
        let cache = StatsCacheStore::new();

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let subscription = cache.subscribe(move |snapshot| {
            seen_clone.lock().unwrap().push(snapshot.clone());
        });

        assert_eq!(*seen.lock().unwrap(), vec![None]);
        drop(subscription);
    }

    #[test]
    fn set_round_trips_payload() {
        let cache = StatsCacheStore::new();
        let snapshot = StatsSnapshot::new(Vec::new(), T);

        cache.set(Some(snapshot.clone()));
        assert_eq!(cache.get(), Some(snapshot));
    }

    #[test]
    fn freshness_boundary() {
        let snapshot = StatsSnapshot::new(Vec::new(), T);

        assert!(snapshot.is_fresh(T));
        assert!(snapshot.is_fresh(T + D - 1));
        // Exactly one window old counts as stale.
        assert!(!snapshot.is_fresh(T + D));
        assert!(!snapshot.is_fresh(T + D + 1));
    }

    #[test]
    fn age_clamps_backwards_clock() {
        let snapshot = StatsSnapshot::new(Vec::new(), T);
        assert_eq!(snapshot.age(T - 1), Duration::ZERO);
        assert!(snapshot.is_fresh(T - 1));
    }

    #[test]
    fn replacement_is_total() {
        let cache = StatsCacheStore::new();
        cache.set(Some(StatsSnapshot::new(Vec::new(), T)));
        cache.set(Some(StatsSnapshot::new(Vec::new(), T + 1)));

        assert_eq!(cache.get().unwrap().last_updated, T + 1);

        cache.set(None);
        assert_eq!(cache.get(), None);
    }
}
