//! UI language selection.
//!
//! The active display language is a closed set of locale tags. Free-form
//! tags from the outside (negotiation headers, query parameters) are parsed
//! at the boundary; past it, only [`Locale`] values exist.

mod locale;
mod store;

pub use locale::{Locale, ParseLocaleError};
pub use store::LocaleStore;
