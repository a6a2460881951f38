//! Locale Registry
//!
//! Static display metadata for every supported locale.

use super::{t, Locale};
use crate::assets::LocaleIcon;

/// Display metadata for a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleInfo {
    pub code: Locale,
    /// Catalog key of the locale's display name
    pub translation_key: &'static str,
    pub icon: LocaleIcon,
}

/// One entry per supported locale, in switcher order
pub static LOCALES_INFO: [LocaleInfo; 2] = [
    LocaleInfo {
        code: Locale::English,
        translation_key: "locales.english",
        icon: LocaleIcon::EnglishFlag,
    },
    LocaleInfo {
        code: Locale::German,
        translation_key: "locales.german",
        icon: LocaleIcon::GermanFlag,
    },
];

impl LocaleInfo {
    /// Registry entry for a locale
    pub fn of(locale: Locale) -> &'static LocaleInfo {
        match locale {
            Locale::English => &LOCALES_INFO[0],
            Locale::German => &LOCALES_INFO[1],
        }
    }

    /// Display name translated into `ui_locale`
    pub fn label(&self, ui_locale: Locale) -> String {
        t(ui_locale, self.translation_key)
    }

    /// Position of a locale in [`LOCALES_INFO`]
    pub fn index_of(locale: Locale) -> usize {
        LOCALES_INFO
            .iter()
            .position(|info| info.code == locale)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SUPPORTED_LOCALES;

    #[test]
    fn registry_covers_every_locale_once() {
        for locale in SUPPORTED_LOCALES {
            let matches = LOCALES_INFO.iter().filter(|i| i.code == locale).count();
            assert_eq!(matches, 1, "{locale}");
            assert_eq!(LocaleInfo::of(locale).code, locale);
            assert_eq!(LOCALES_INFO[LocaleInfo::index_of(locale)].code, locale);
        }
    }

    #[test]
    fn labels_follow_ui_locale() {
        let english = LocaleInfo::of(Locale::English);
        assert_eq!(english.label(Locale::English), "English");
        assert_eq!(english.label(Locale::German), "Englisch");
    }
}
