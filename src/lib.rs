//! # Flick
//!
//! Reactive state stores and scheduling defaults for tournament scoring apps.
//!
//! Flick is the state-management core of a tournament front-end, split in
//! two levels:
//!
//! ## Stores (reactive state)
//!
//! Single-slot state containers with ordered observer notification:
//! - `Store<T>` - thread-safe state container with RAII subscriptions
//! - `LocaleStore` - active UI language, synced to the localization runtime
//! - `StatsCacheStore` - cached match-history snapshot with a freshness window
//!
//! ## Tournament session plumbing
//!
//! - `TimeConfig` - per-tournament scheduling defaults
//! - `AppContext` - owns one instance of each store per application session
//! - `sync_version_file` - release-step writer for the deployed `version.json`

pub mod context;
pub mod locale;
pub mod schedule;
pub mod stats;
pub mod store;
pub mod version;

// Re-export main types for convenience
pub use context::AppContext;
pub use locale::{Locale, LocaleStore, ParseLocaleError};
pub use schedule::TimeConfig;
pub use stats::{MatchRecord, StatsCacheStore, StatsSnapshot, FRESHNESS_WINDOW};
pub use store::{Store, Subscription};
pub use version::{sync_version_file, VersionInfo};
