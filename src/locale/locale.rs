use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A UI display language the app ships translations for.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Spanish, the launch language.
    #[default]
    Es,
    /// Catalan.
    Ca,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 3] = [Locale::Es, Locale::Ca, Locale::En];

    /// The locale's tag as used in translation bundles and URLs.
    pub fn as_tag(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::Ca => "ca",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Returned when a locale tag from the outside is not a supported language.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("unknown locale tag `{0}`, expected one of es, ca, en")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "es" => Ok(Locale::Es),
            "ca" => Ok(Locale::Ca),
            "en" => Ok(Locale::En),
            other => Err(ParseLocaleError(other.to_string())),
        }
    }
}
