//! Locale Switcher Component
//!
//! A toggle button showing the active locale plus a listbox of every
//! supported locale. Selecting an item updates the [`LocaleState`] and closes
//! the list; a pointer event outside the widget also closes it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

use crate::assets::LocaleIcon;
use crate::components::pointer::{Bounds, ListenerId, PointerEvents};
use crate::components::primitives::listbox::{
    render_listbox, KeyOutcome, ListboxItem, ListboxNavigation, ListboxView, NavEvent, NavKey,
};
use crate::i18n::{LocaleInfo, Translator, LOCALES_INFO};
use crate::state::locale_state::LocaleState;

/// The toggle button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleButtonView {
    pub icon: Option<LocaleIcon>,
    pub label: String,
    pub expanded: bool,
}

/// Rendered switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitcherView {
    pub button: ToggleButtonView,
    pub listbox: Option<ListboxView>,
}

impl fmt::Display for SwitcherView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let icon = self.button.icon.map(LocaleIcon::glyph).unwrap_or(" ");
        let arrow = if self.button.expanded { "▲" } else { "▼" };
        writeln!(f, "[{icon} {} {arrow}]", self.button.label)?;
        if let Some(listbox) = &self.listbox {
            write!(f, "{listbox}")?;
        }
        Ok(())
    }
}

/// Dropdown locale switcher
#[derive(Debug)]
pub struct LocaleSwitcher {
    open: Rc<Cell<bool>>,
    bounds: Rc<Cell<Bounds>>,
    navigation: ListboxNavigation,
    listener: Option<ListenerId>,
}

impl LocaleSwitcher {
    pub fn new() -> Self {
        Self {
            open: Rc::new(Cell::new(false)),
            bounds: Rc::new(Cell::new(Bounds::default())),
            navigation: ListboxNavigation::new(LOCALES_INFO.len()),
            listener: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.listener.is_some()
    }

    pub fn active_index(&self) -> usize {
        self.navigation.active_index()
    }

    /// Root element bounds used for outside-pointer detection
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds.set(bounds);
    }

    // ==================== Lifecycle ====================

    /// Attach the outside-pointer listener
    pub fn mount(&mut self, events: &mut PointerEvents) {
        if self.listener.is_some() {
            return;
        }

        let open = self.open.clone();
        let bounds = self.bounds.clone();
        let id = events.add_listener(move |event| {
            if open.get() && !bounds.get().contains(event.position) {
                debug!(?event, "Pointer outside switcher, closing");
                open.set(false);
            }
        });
        self.listener = Some(id);
    }

    /// Detach the outside-pointer listener
    pub fn unmount(&mut self, events: &mut PointerEvents) {
        if let Some(id) = self.listener.take() {
            events.remove_listener(id);
        }
    }

    // ==================== Interaction ====================

    /// Flip the open flag; opening highlights the current locale
    pub fn toggle(&mut self, state: &LocaleState) {
        let open = !self.open.get();
        if open {
            self.navigation.sync(LocaleInfo::index_of(state.locale()));
        }
        self.open.set(open);
    }

    pub fn close(&mut self) {
        self.open.set(false);
    }

    /// Keyboard input while the list has focus
    pub fn handle_key(&mut self, key: NavKey, state: &mut LocaleState) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome {
                event: NavEvent::Ignored,
                default_prevented: false,
            };
        }

        let outcome = self.navigation.handle_key(key);
        match outcome.event {
            NavEvent::Select(index) => self.select(index, state),
            NavEvent::Escape => self.close(),
            NavEvent::Moved(_) | NavEvent::Ignored => {}
        }
        outcome
    }

    /// Pointer entered an option
    pub fn hover(&mut self, index: usize) {
        if self.is_open() {
            self.navigation.hover(index);
        }
    }

    /// Pointer clicked an option
    pub fn click_item(&mut self, index: usize, state: &mut LocaleState) {
        if !self.is_open() {
            return;
        }
        if let NavEvent::Select(index) = self.navigation.click(index) {
            self.select(index, state);
        }
    }

    fn select(&mut self, index: usize, state: &mut LocaleState) {
        let Some(info) = LOCALES_INFO.get(index) else {
            return;
        };
        info!(locale = %info.code, "Locale chosen in switcher");
        state.set_locale(info.code);
        self.navigation.sync(index);
        self.close();
    }

    // ==================== Rendering ====================

    /// Options labelled in the current UI locale
    pub fn items(translator: Translator) -> Vec<ListboxItem> {
        LOCALES_INFO
            .iter()
            .map(|info| ListboxItem {
                code: info.code.code().to_string(),
                label: translator.t(info.translation_key),
                icon: Some(info.icon),
            })
            .collect()
    }

    pub fn view(&self, state: &LocaleState) -> SwitcherView {
        let translator = state.translator();
        let items = Self::items(translator);
        let current = items
            .iter()
            .find(|item| item.code == state.locale().code());

        SwitcherView {
            button: ToggleButtonView {
                icon: current.and_then(|item| item.icon),
                label: current.map(|item| item.label.clone()).unwrap_or_default(),
                expanded: self.is_open(),
            },
            listbox: render_listbox(self.is_open(), &items, &self.navigation),
        }
    }
}

impl Default for LocaleSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::pointer::PointerEvent;
    use crate::i18n::Locale;
    use crate::storage::{get_stored_locale, StorageAdapter};

    fn german_state() -> LocaleState {
        LocaleState::new(StorageAdapter::in_memory()).with_browser_language(None)
    }

    #[test]
    fn toggle_opens_on_current_locale() {
        let state = german_state();
        let mut switcher = LocaleSwitcher::new();

        switcher.toggle(&state);
        assert!(switcher.is_open());
        assert_eq!(switcher.active_index(), LocaleInfo::index_of(Locale::German));

        switcher.toggle(&state);
        assert!(!switcher.is_open());
    }

    #[test]
    fn keyboard_selection_updates_state_and_closes() {
        let mut state = german_state();
        let mut switcher = LocaleSwitcher::new();
        switcher.toggle(&state);

        // German is last; Down wraps to English
        switcher.handle_key(NavKey::ArrowDown, &mut state);
        let outcome = switcher.handle_key(NavKey::Enter, &mut state);

        assert_eq!(outcome.event, NavEvent::Select(0));
        assert_eq!(state.locale(), Locale::English);
        assert_eq!(get_stored_locale(state.storage()).as_deref(), Some("en"));
        assert!(!switcher.is_open());
    }

    #[test]
    fn escape_closes_without_selecting() {
        let mut state = german_state();
        let mut switcher = LocaleSwitcher::new();
        switcher.toggle(&state);
        switcher.handle_key(NavKey::ArrowUp, &mut state);
        switcher.handle_key(NavKey::Escape, &mut state);

        assert!(!switcher.is_open());
        assert_eq!(state.locale(), Locale::German);
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut state = german_state();
        let mut switcher = LocaleSwitcher::new();
        let outcome = switcher.handle_key(NavKey::Enter, &mut state);
        assert_eq!(outcome.event, NavEvent::Ignored);
        assert!(!outcome.default_prevented);
    }

    #[test]
    fn click_selects_item() {
        let mut state = german_state();
        let mut switcher = LocaleSwitcher::new();
        switcher.toggle(&state);
        switcher.hover(0);
        assert_eq!(switcher.active_index(), 0);

        switcher.click_item(0, &mut state);
        assert_eq!(state.locale(), Locale::English);
        assert!(!switcher.is_open());
    }

    #[test]
    fn outside_pointer_closes_while_mounted() {
        let state = german_state();
        let mut events = PointerEvents::new();
        let mut switcher = LocaleSwitcher::new();
        switcher.set_bounds(Bounds::new(0.0, 0.0, 120.0, 80.0));
        switcher.mount(&mut events);
        switcher.mount(&mut events);
        assert_eq!(events.len(), 1);

        switcher.toggle(&state);
        events.dispatch(&PointerEvent::mouse_down(60.0, 40.0));
        assert!(switcher.is_open());

        events.dispatch(&PointerEvent::touch_start(300.0, 300.0));
        assert!(!switcher.is_open());

        switcher.unmount(&mut events);
        assert!(events.is_empty());
        assert!(!switcher.is_mounted());

        switcher.toggle(&state);
        events.dispatch(&PointerEvent::mouse_down(300.0, 300.0));
        assert!(switcher.is_open());
    }

    #[test]
    fn view_reflects_state() {
        let mut state = german_state();
        let mut switcher = LocaleSwitcher::new();

        let closed = switcher.view(&state);
        assert_eq!(closed.button.label, "Deutsch");
        assert_eq!(closed.button.icon, Some(LocaleIcon::GermanFlag));
        assert!(closed.listbox.is_none());

        state.set_locale(Locale::English);
        switcher.toggle(&state);
        let open = switcher.view(&state);
        assert_eq!(open.button.label, "English");
        assert!(open.button.expanded);

        let listbox = open.listbox.expect("open switcher renders list");
        let labels: Vec<_> = listbox.options.iter().map(|o| o.item.label.as_str()).collect();
        assert_eq!(labels, vec!["English", "German"]);
        assert!(listbox.options[0].active);
    }
}
