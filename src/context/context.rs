use crate::locale::{Locale, LocaleStore};
use crate::schedule::TimeConfig;
use crate::stats::StatsCacheStore;

/// Owns one instance of each session store plus the scheduling defaults.
///
/// Construct one per application session (or per test) and pass it to the
/// layers that need state, instead of reaching for process-wide singletons.
pub struct AppContext {
    locale: LocaleStore,
    stats: StatsCacheStore,
    time_defaults: TimeConfig,
}

impl AppContext {
    /// Create a context whose locale store reports changes to the given
    /// localization runtime hook.
    pub fn new<F>(locale_sync: F) -> Self
    where
        F: Fn(Locale) + Send + Sync + 'static,
    {
        Self {
            locale: LocaleStore::new(locale_sync),
            stats: StatsCacheStore::new(),
            time_defaults: TimeConfig::default(),
        }
    }

    /// Create a context with no localization runtime attached.
    pub fn detached() -> Self {
        Self {
            locale: LocaleStore::detached(),
            stats: StatsCacheStore::new(),
            time_defaults: TimeConfig::default(),
        }
    }

    /// The active UI language store.
    pub fn locale(&self) -> &LocaleStore {
        &self.locale
    }

    /// The statistics cache store.
    pub fn stats(&self) -> &StatsCacheStore {
        &self.stats
    }

    /// Scheduling defaults cloned into newly created tournaments.
    pub fn time_defaults(&self) -> &TimeConfig {
        &self.time_defaults
    }

    /// Handoff slot for the locale negotiation middleware: the request
    /// pipeline writes the negotiated locale here so downstream view logic
    /// renders in that language.
    pub fn set_request_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }
}
