//! High-level state management with stores.
//!
//! Stores hold a single slot of application state with ordered observer
//! notification, immediate replay on subscribe, and RAII unsubscription.

mod store;

pub use store::{Store, Subscription};
