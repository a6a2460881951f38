//! Locale resolution logic.

use super::{Locale, DEFAULT_LOCALE};

/// Normalize a raw locale string (e.g. from the OS or a URL) to a supported locale.
///
/// Only the primary subtag is considered: everything before the first `-` or
/// `_` is lower-cased and matched against the supported set. Anything else
/// yields [`DEFAULT_LOCALE`].
///
/// ```
/// use locale_switcher::i18n::{normalize_locale, Locale};
///
/// assert_eq!(normalize_locale("en-US"), Locale::English);
/// assert_eq!(normalize_locale("de_DE"), Locale::German);
/// assert_eq!(normalize_locale("fr"), Locale::German);
/// ```
pub fn normalize_locale(raw: &str) -> Locale {
    let prefix = raw.split(['-', '_']).next().unwrap_or_default();
    Locale::from_code(&prefix.to_lowercase()).unwrap_or(DEFAULT_LOCALE)
}

/// Raw inputs the resolver picks from, highest priority first
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleSources<'a> {
    /// Value read from the persisted store
    pub persisted: Option<&'a str>,
    /// Value of the URL query parameter
    pub url_param: Option<&'a str>,
    /// Language reported by the browser / operating system
    pub browser_language: Option<&'a str>,
}

impl<'a> LocaleSources<'a> {
    /// The first non-empty source in priority order
    pub fn first_present(&self) -> Option<&'a str> {
        [self.persisted, self.url_param, self.browser_language]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
    }
}

/// Resolve the effective locale.
///
/// Resolution order (highest to lowest priority):
/// 1. Persisted value
/// 2. URL query parameter
/// 3. Browser language
/// 4. [`DEFAULT_LOCALE`]
///
/// The first present source decides; an unsupported value normalizes to the
/// default rather than deferring to a lower-priority source.
pub fn resolve_locale(sources: &LocaleSources<'_>) -> Locale {
    sources
        .first_present()
        .map(normalize_locale)
        .unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SUPPORTED_LOCALES;

    #[test]
    fn supported_codes_normalize_to_themselves() {
        for locale in SUPPORTED_LOCALES {
            assert_eq!(normalize_locale(locale.code()), locale);
        }
    }

    #[test]
    fn region_suffixes_are_stripped() {
        assert_eq!(normalize_locale("en-US"), Locale::English);
        assert_eq!(normalize_locale("de_DE"), Locale::German);
        assert_eq!(normalize_locale("EN-gb"), Locale::English);
        assert_eq!(normalize_locale("en_US.UTF-8"), Locale::English);
    }

    #[test]
    fn unsupported_strings_fall_back_to_default() {
        for raw in ["fr", "", "-", "english", "zz-ZZ", "  ", " en", "en "] {
            assert_eq!(normalize_locale(raw), DEFAULT_LOCALE, "input {raw:?}");
        }
    }

    #[test]
    fn persisted_value_takes_priority() {
        let sources = LocaleSources {
            persisted: Some("en"),
            url_param: Some("de"),
            browser_language: Some("de-AT"),
        };
        assert_eq!(resolve_locale(&sources), Locale::English);
    }

    #[test]
    fn url_param_beats_browser_language() {
        let sources = LocaleSources {
            persisted: None,
            url_param: Some("en"),
            browser_language: Some("de-DE"),
        };
        assert_eq!(resolve_locale(&sources), Locale::English);
    }

    #[test]
    fn empty_sources_are_skipped() {
        let sources = LocaleSources {
            persisted: Some(""),
            url_param: Some(""),
            browser_language: Some("en-US"),
        };
        assert_eq!(resolve_locale(&sources), Locale::English);
    }

    #[test]
    fn whitespace_source_still_decides() {
        let sources = LocaleSources {
            persisted: Some("  "),
            url_param: None,
            browser_language: Some("en-US"),
        };
        assert_eq!(resolve_locale(&sources), DEFAULT_LOCALE);
    }

    #[test]
    fn unsupported_first_source_does_not_fall_through() {
        let sources = LocaleSources {
            persisted: Some("fr"),
            url_param: None,
            browser_language: Some("en-US"),
        };
        assert_eq!(resolve_locale(&sources), DEFAULT_LOCALE);
    }

    #[test]
    fn no_sources_yield_default() {
        assert_eq!(resolve_locale(&LocaleSources::default()), DEFAULT_LOCALE);
    }
}
