//! Application-level ownership of the session stores.

mod context;

pub use context::AppContext;
