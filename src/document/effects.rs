//! Document side effects
//!
//! Each effect owns one input and writes to the [`Document`] only when that
//! input differs from the previous run.

use tracing::debug;

use super::Document;
use crate::constants::META_DESCRIPTION;
use crate::i18n::{Locale, Translator};

/// Remembers the last dependency value an effect ran with
#[derive(Debug, Clone)]
pub struct Dependency<T> {
    last: Option<T>,
}

impl<T> Default for Dependency<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Copy> Dependency<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value`; `true` when it differs from the previous one
    pub fn changed(&mut self, value: T) -> bool {
        if self.last == Some(value) {
            return false;
        }
        self.last = Some(value);
        true
    }
}

/// Keeps the root language attribute in sync with the resolved locale
#[derive(Debug, Clone, Default)]
pub struct UpdateHtmlLang {
    locale: Dependency<Locale>,
}

impl UpdateHtmlLang {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the effect ran
    pub fn apply(&mut self, locale: Locale, document: &mut impl Document) -> bool {
        if !self.locale.changed(locale) {
            return false;
        }
        debug!(lang = %locale, "Updating document language");
        document.set_lang(locale.code());
        true
    }
}

/// Writes translated title and description into the document head
#[derive(Debug, Clone, Default)]
pub struct UpdateMetadata {
    translator: Dependency<Translator>,
}

impl UpdateMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the effect ran
    pub fn apply(&mut self, translator: Translator, document: &mut impl Document) -> bool {
        if !self.translator.changed(translator) {
            return false;
        }
        debug!(locale = %translator.locale(), "Updating document metadata");
        document.set_title(&translator.t("app.title"));
        document.set_meta_content(META_DESCRIPTION, &translator.t("app.description"));
        true
    }
}
