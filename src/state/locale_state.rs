//! LocaleState - Locale State Provider
//!
//! Owns the current locale and timezone. There is a single writer
//! (`set_locale*` / `complete_activation`); readers subscribe to
//! [`LocaleChange`] notifications over a channel.

use std::future::Future;

use chrono_tz::Tz;
use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, info};

use crate::config::{PersistStrategy, SwitcherConfig};
use crate::constants::DEFAULT_TIMEZONE;
use crate::i18n::{
    current_timezone, normalize_locale, resolve_locale, resolve_timezone, Locale, LocaleSources,
    Translator, DEFAULT_LOCALE,
};
use crate::location::Location;
use crate::storage::StorageAdapter;

/// Where the browser/system language comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserLanguage {
    /// Ask the operating system during activation
    System,
    /// A fixed value (or none at all)
    Fixed(Option<String>),
}

/// Language reported by the operating system, e.g. `"en-US"`
pub fn system_language() -> Option<String> {
    let current = locale_config::Locale::current().to_string();
    let first = current.split(',').next().unwrap_or_default().trim();
    (!first.is_empty()).then(|| first.to_string())
}

/// What triggered a locale change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    /// Initial resolution from storage, URL or browser language
    Activation,
    /// An explicit `set_locale` call
    Selection,
}

/// Notification sent to subscribers after the state has been updated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub previous: Locale,
    pub current: Locale,
    pub cause: ChangeCause,
}

/// Result of the off-thread activation lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activation {
    generation: u64,
    pub locale: Locale,
    pub time_zone: Tz,
}

/// State for the active locale
#[derive(Debug)]
pub struct LocaleState {
    locale: Locale,
    time_zone: Tz,
    storage: StorageAdapter,
    location: Option<Location>,
    browser_language: BrowserLanguage,
    strategy: PersistStrategy,
    /// Configured query parameter, applied to any attached location
    query_param: Option<String>,
    default_timezone: String,
    /// Bumped by every selection; stale activations compare against it
    generation: u64,
    activated: bool,
    subscribers: Vec<Sender<LocaleChange>>,
}

impl LocaleState {
    /// Create a state initialized to [`DEFAULT_LOCALE`]
    pub fn new(storage: StorageAdapter) -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            time_zone: resolve_timezone(None, DEFAULT_TIMEZONE),
            storage,
            location: None,
            browser_language: BrowserLanguage::System,
            strategy: PersistStrategy::default(),
            query_param: None,
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            generation: 0,
            activated: false,
            subscribers: Vec::new(),
        }
    }

    /// Apply strategy, query parameter and timezone fallback from config
    pub fn with_config(mut self, config: &SwitcherConfig) -> Self {
        self.strategy = config.strategy;
        self.default_timezone = config.default_timezone.clone();
        self.time_zone = resolve_timezone(None, &self.default_timezone);
        self.query_param = Some(config.query_param.clone());
        if let Some(location) = self.location.take() {
            return self.with_location(location);
        }
        self
    }

    pub fn with_strategy(mut self, strategy: PersistStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(match &self.query_param {
            Some(param) => location.with_param(param.clone()),
            None => location,
        });
        self
    }

    /// Use a fixed browser language instead of asking the OS
    pub fn with_browser_language(mut self, language: Option<String>) -> Self {
        self.browser_language = BrowserLanguage::Fixed(language);
        self
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.locale)
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn strategy(&self) -> PersistStrategy {
        self.strategy
    }

    pub fn storage(&self) -> &StorageAdapter {
        &self.storage
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Receive a [`LocaleChange`] for every subsequent change
    pub fn subscribe(&mut self) -> Receiver<LocaleChange> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    // ==================== Activation ====================

    /// Build the activation lookup
    ///
    /// The returned future owns everything it needs and performs the blocking
    /// storage read and system-language query off the calling thread. Apply
    /// its output with [`LocaleState::complete_activation`].
    pub fn activation(&self) -> impl Future<Output = Activation> + Send + 'static {
        let storage = self.storage.clone();
        let url_param = match self.strategy {
            PersistStrategy::UrlAndStorage => {
                self.location.as_ref().and_then(Location::locale_param)
            }
            PersistStrategy::ContextOnly => None,
        };
        let browser_language = self.browser_language.clone();
        let fallback_timezone = self.default_timezone.clone();
        let generation = self.generation;

        smol::unblock(move || {
            let persisted = storage.get();
            let browser = match browser_language {
                BrowserLanguage::System => system_language(),
                BrowserLanguage::Fixed(language) => language,
            };
            let sources = LocaleSources {
                persisted: persisted.as_deref(),
                url_param: url_param.as_deref(),
                browser_language: browser.as_deref(),
            };
            debug!(?sources, "Resolving initial locale");

            Activation {
                generation,
                locale: resolve_locale(&sources),
                time_zone: current_timezone(&fallback_timezone),
            }
        })
    }

    /// Apply an activation result
    ///
    /// Returns `false` when a selection happened after the activation started
    /// (the newer selection is kept) or when the state was already activated.
    pub fn complete_activation(&mut self, activation: Activation) -> bool {
        if self.activated {
            debug!(resolved = %activation.locale, "Already activated");
            return false;
        }
        self.activated = true;
        self.time_zone = activation.time_zone;

        if activation.generation != self.generation {
            debug!(
                resolved = %activation.locale,
                current = %self.locale,
                "Discarding stale activation"
            );
            return false;
        }

        info!(locale = %activation.locale, time_zone = %activation.time_zone, "Locale activated");
        self.replace(activation.locale, ChangeCause::Activation);
        true
    }

    /// Resolve and apply the initial locale
    pub async fn activate(&mut self) -> bool {
        let activation = self.activation().await;
        self.complete_activation(activation)
    }

    // ==================== Setters ====================

    /// Select a locale; the URL is rewritten only under [`PersistStrategy::UrlAndStorage`]
    pub fn set_locale(&mut self, locale: Locale) {
        let update_url = self.strategy == PersistStrategy::UrlAndStorage;
        self.set_locale_with(locale, update_url);
    }

    /// Select a locale, optionally rewriting the location's query parameter
    pub fn set_locale_with(&mut self, locale: Locale, update_url: bool) {
        self.generation += 1;
        info!(locale = %locale, update_url, "Locale selected");
        self.replace(locale, ChangeCause::Selection);

        self.storage.set(locale.code());

        if update_url {
            if let Some(location) = self.location.as_mut() {
                location.replace_locale_param(locale.code());
                debug!(url = %location, "Location updated");
            }
        }
    }

    /// Select from a raw string, normalizing unsupported input to the default
    pub fn set_raw_locale(&mut self, raw: &str) {
        self.set_locale(normalize_locale(raw));
    }

    fn replace(&mut self, locale: Locale, cause: ChangeCause) {
        let previous = self.locale;
        self.locale = locale;
        if previous == locale {
            return;
        }

        let change = LocaleChange {
            previous,
            current: locale,
            cause,
        };
        self.subscribers.retain(|tx| tx.send(change).is_ok());
    }
}
