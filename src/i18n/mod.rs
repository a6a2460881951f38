//! i18n - Internationalization Module
//!
//! Supported locales, the static locale registry, resolution helpers and
//! translation lookups backed by the bundled `locales/*.yml` catalogs.

mod registry;
mod resolve;
mod timezone;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use registry::*;
pub use resolve::*;
pub use timezone::*;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// German
    #[default]
    #[serde(rename = "de")]
    German,
    /// English
    #[serde(rename = "en")]
    English,
}

/// Fallback locale when no other source yields a supported one
pub const DEFAULT_LOCALE: Locale = Locale::German;

/// Every supported locale, in declaration order
pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::German, Locale::English];

impl Locale {
    /// The raw locale code, e.g. `"en"`
    pub fn code(self) -> &'static str {
        match self {
            Locale::German => "de",
            Locale::English => "en",
        }
    }

    /// Exact lookup by code. Use [`normalize_locale`] for raw user input.
    pub fn from_code(code: &str) -> Option<Self> {
        SUPPORTED_LOCALES.into_iter().find(|l| l.code() == code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| Error::Invalid {
            message: format!("unsupported locale code: {s}"),
        })
    }
}

/// Translate a key for the given locale
///
/// Missing keys are handled by `rust-i18n`, which falls back to the default
/// locale's catalog and finally echoes the key.
pub fn t(locale: Locale, key: &str) -> String {
    rust_i18n::t!(key, locale = locale.code()).to_string()
}

/// Translation function bound to one locale
///
/// Two translators compare equal exactly when they produce the same strings,
/// so side effects can use it as a change-detection dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn t(&self, key: &str) -> String {
        t(self.locale, key)
    }
}
