//! Application - Composition and Event Loop
//!
//! Wires the locale state, the switcher, the document effects and the pointer
//! registry together and drives them from line-based input.

use std::io::{BufRead, Write};
use std::sync::Arc;

use crossbeam_channel::Receiver;
use tracing::{error, info, warn};

use crate::app::commands::{help, AppAction};
use crate::components::composite::locale_switcher::LocaleSwitcher;
use crate::components::pointer::{Bounds, PointerEvent, PointerEvents, PointerKind};
use crate::config::{PersistStrategy, SwitcherConfig};
use crate::constants::DEFAULT_PAGE_URL;
use crate::document::{HtmlDocument, UpdateHtmlLang, UpdateMetadata};
use crate::error::Result;
use crate::i18n::{LOCALES_INFO, DEFAULT_LOCALE};
use crate::location::Location;
use crate::state::locale_state::{LocaleChange, LocaleState};
use crate::storage::{FileStorage, StorageAdapter};

/// Height of the toggle button and of each option row
const ROW_HEIGHT: f32 = 32.0;
const SWITCHER_WIDTH: f32 = 180.0;

/// Startup options for [`run_app`]
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Page URL (may carry the locale query parameter)
    pub url: Option<String>,
    /// Override the OS language
    pub browser_language: Option<String>,
    /// Keep preferences in memory instead of the config dir
    pub memory: bool,
    /// Force [`PersistStrategy::UrlAndStorage`]
    pub sync_url: bool,
}

/// The composed page
#[derive(Debug)]
pub struct LocaleApp {
    state: LocaleState,
    switcher: LocaleSwitcher,
    pointer: PointerEvents,
    document: HtmlDocument,
    html_lang: UpdateHtmlLang,
    metadata: UpdateMetadata,
    changes: Receiver<LocaleChange>,
}

impl LocaleApp {
    /// Mount the switcher and run the document effects for the initial state
    pub fn new(mut state: LocaleState) -> Self {
        let changes = state.subscribe();
        let mut pointer = PointerEvents::new();

        let mut switcher = LocaleSwitcher::new();
        switcher.set_bounds(switcher_bounds(false));
        switcher.mount(&mut pointer);

        let mut app = Self {
            state,
            switcher,
            pointer,
            document: HtmlDocument::new(DEFAULT_LOCALE.code()),
            html_lang: UpdateHtmlLang::new(),
            metadata: UpdateMetadata::new(),
            changes,
        };
        app.run_effects();
        app
    }

    pub fn state(&self) -> &LocaleState {
        &self.state
    }

    pub fn switcher(&self) -> &LocaleSwitcher {
        &self.switcher
    }

    pub fn document(&self) -> &HtmlDocument {
        &self.document
    }

    /// Resolve the initial locale and propagate it
    pub async fn activate(&mut self) {
        self.state.activate().await;
        self.pump();
    }

    /// Drain pending change notifications, re-running effects once if any arrived
    pub fn pump(&mut self) -> usize {
        let drained = self.changes.try_iter().count();
        if drained > 0 {
            self.run_effects();
        }
        drained
    }

    fn run_effects(&mut self) {
        self.html_lang.apply(self.state.locale(), &mut self.document);
        self.metadata.apply(self.state.translator(), &mut self.document);
    }

    /// Apply one interaction; `false` once the user quits
    pub fn dispatch(&mut self, action: AppAction) -> bool {
        match action {
            AppAction::Toggle => self.switcher.toggle(&self.state),
            AppAction::Key(key) => {
                self.switcher.handle_key(key, &mut self.state);
            }
            AppAction::Hover(index) => self.switcher.hover(index),
            AppAction::Click(index) => self.switcher.click_item(index, &mut self.state),
            AppAction::PointerDown(position) => {
                self.pointer.dispatch(&PointerEvent {
                    kind: PointerKind::MouseDown,
                    position,
                });
            }
            AppAction::Show => {}
            AppAction::Quit => return false,
        }

        self.switcher.set_bounds(switcher_bounds(self.switcher.is_open()));
        self.pump();
        true
    }

    /// Text rendering of the page
    pub fn render(&self) -> String {
        let mut out = self.document.render_head();
        if let Some(location) = self.state.location() {
            out.push_str(&format!("url: {location}\n"));
        }
        out.push_str(&format!("timezone: {}\n", self.state.time_zone()));
        out.push_str(&self.switcher.view(&self.state).to_string());
        out
    }

    /// Detach global listeners
    pub fn shutdown(&mut self) {
        self.switcher.unmount(&mut self.pointer);
    }
}

fn switcher_bounds(open: bool) -> Bounds {
    let rows = if open { 1 + LOCALES_INFO.len() } else { 1 };
    Bounds::new(0.0, 0.0, SWITCHER_WIDTH, ROW_HEIGHT * rows as f32)
}

/// Adapter over the preferences file, or an in-memory one when it can't be opened
fn preferences_storage(backend: Result<FileStorage>) -> StorageAdapter {
    match backend {
        Ok(storage) => StorageAdapter::new(Arc::new(storage)),
        Err(e) => {
            error!(error = %e, "Preferences file unavailable, keeping the locale in memory");
            StorageAdapter::in_memory()
        }
    }
}

/// Build the locale state from options and on-disk configuration
pub fn build_state(options: &AppOptions) -> Result<LocaleState> {
    let (storage, mut config) = if options.memory {
        (StorageAdapter::in_memory(), SwitcherConfig::default())
    } else {
        let storage = preferences_storage(FileStorage::in_config_dir());
        (storage, SwitcherConfig::load_or_default())
    };
    if options.sync_url {
        config.strategy = PersistStrategy::UrlAndStorage;
    }

    let url = options.url.as_deref().unwrap_or(DEFAULT_PAGE_URL);
    let location = Location::parse(url)?;

    let mut state = LocaleState::new(storage).with_location(location);
    if let Some(language) = &options.browser_language {
        state = state.with_browser_language(Some(language.clone()));
    }
    Ok(state.with_config(&config))
}

/// Run the interactive shell on stdin/stdout
pub fn run_app(options: AppOptions) -> anyhow::Result<()> {
    let state = build_state(&options)?;
    let mut app = LocaleApp::new(state);
    smol::block_on(app.activate());
    info!(locale = %app.state().locale(), "Ready");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    writeln!(stdout, "{}", help())?;
    write!(stdout, "{}", app.render())?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<AppAction>() {
            Ok(action) => {
                if !app.dispatch(action) {
                    break;
                }
                write!(stdout, "{}", app.render())?;
            }
            Err(e) => {
                warn!(error = %e, "Ignoring input");
                writeln!(stdout, "{e}\n{}", help())?;
            }
        }
        stdout.flush()?;
    }

    app.shutdown();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pointer::Point;
    use crate::components::primitives::listbox::NavKey;
    use crate::document::Document;
    use crate::i18n::Locale;
    use crate::storage::get_stored_locale;

    fn memory_app(browser: Option<&str>) -> LocaleApp {
        let options = AppOptions {
            url: Some("https://example.com/?locale=en".to_string()),
            browser_language: browser.map(str::to_string),
            memory: true,
            sync_url: false,
        };
        let state = build_state(&options).expect("state");
        LocaleApp::new(state.with_browser_language(browser.map(str::to_string)))
    }

    #[test]
    fn initial_render_uses_default_locale() {
        let app = memory_app(None);
        assert_eq!(app.document().lang(), "de");
        assert_eq!(app.document().title(), "Sprachumschalter");
    }

    #[test]
    fn activation_propagates_to_document() {
        let mut app = memory_app(Some("en-US"));
        smol::block_on(app.activate());
        assert_eq!(app.state().locale(), Locale::English);
        assert_eq!(app.document().lang(), "en");
        assert_eq!(app.document().title(), "Locale Switcher");
    }

    #[test]
    fn selection_flow_updates_everything() {
        let mut app = memory_app(None);
        smol::block_on(app.activate());

        assert!(app.dispatch(AppAction::Toggle));
        assert!(app.switcher().is_open());
        app.dispatch(AppAction::Key(NavKey::ArrowUp));
        app.dispatch(AppAction::Key(NavKey::Enter));

        assert_eq!(app.state().locale(), Locale::English);
        assert!(!app.switcher().is_open());
        assert_eq!(app.document().lang(), "en");
        assert_eq!(get_stored_locale(app.state().storage()).as_deref(), Some("en"));
        // context-only strategy leaves the URL untouched
        assert_eq!(
            app.state().location().map(ToString::to_string).as_deref(),
            Some("https://example.com/?locale=en")
        );
    }

    #[test]
    fn outside_pointer_closes_switcher() {
        let mut app = memory_app(None);
        app.dispatch(AppAction::Toggle);
        app.dispatch(AppAction::PointerDown(Point::new(10.0, 40.0)));
        assert!(app.switcher().is_open());

        app.dispatch("outside".parse().expect("command"));
        assert!(!app.switcher().is_open());
    }

    #[test]
    fn sync_url_option_rewrites_location() {
        let options = AppOptions {
            url: Some("https://example.com/".to_string()),
            browser_language: None,
            memory: true,
            sync_url: true,
        };
        let state = build_state(&options)
            .expect("state")
            .with_browser_language(None);
        let mut app = LocaleApp::new(state);
        app.dispatch(AppAction::Toggle);
        app.dispatch(AppAction::Click(0));

        let url = app.state().location().map(ToString::to_string);
        assert_eq!(url.as_deref(), Some("https://example.com/?locale=en"));
        assert!(app.render().contains("url: https://example.com/?locale=en"));
    }

    #[test]
    fn unusable_config_dir_falls_back_to_memory() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let storage = preferences_storage(FileStorage::in_dir(file.path()));

        storage.set("en");
        assert_eq!(storage.get().as_deref(), Some("en"));

        let mut state = LocaleState::new(storage).with_browser_language(None);
        state.set_locale(Locale::English);
        assert_eq!(state.locale(), Locale::English);
    }

    #[test]
    fn quit_stops_and_shutdown_detaches() {
        let mut app = memory_app(None);
        assert!(!app.dispatch(AppAction::Quit));
        app.shutdown();
        assert!(!app.switcher().is_mounted());
    }
}
