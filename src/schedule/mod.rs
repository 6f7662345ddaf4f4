//! Per-tournament scheduling configuration.

mod time_config;

pub use time_config::{TimeConfig, TimeConfigError, POINT_BUCKETS};
