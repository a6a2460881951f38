//! Listbox Component
//!
//! Keyboard/pointer selection state for an open/closed option list, plus the
//! view model the list renders to. The open flag belongs to the caller.

use std::fmt;

use tracing::debug;

use crate::assets::LocaleIcon;

/// Keys the listbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

impl NavKey {
    /// Map a keystroke name (`"down"`, `"ArrowDown"`, `"esc"`, ...) to a key
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "down" | "arrowdown" => NavKey::ArrowDown,
            "up" | "arrowup" => NavKey::ArrowUp,
            "enter" | "return" => NavKey::Enter,
            "escape" | "esc" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// What a key press resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// The active index moved
    Moved(usize),
    /// The item at the index was chosen
    Select(usize),
    /// The list should be dismissed
    Escape,
    /// Nothing happened
    Ignored,
}

/// Result of handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOutcome {
    pub event: NavEvent,
    /// The host should suppress its own handling of the key
    pub default_prevented: bool,
}

impl KeyOutcome {
    fn handled(event: NavEvent) -> Self {
        Self {
            event,
            default_prevented: true,
        }
    }

    fn ignored() -> Self {
        Self {
            event: NavEvent::Ignored,
            default_prevented: false,
        }
    }
}

/// Active-index state machine with wraparound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxNavigation {
    item_count: usize,
    active_index: usize,
}

impl ListboxNavigation {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            active_index: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Change the number of items, clamping the active index
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.sync(self.active_index);
    }

    /// Mirror the owner's current selection
    pub fn sync(&mut self, index: usize) {
        self.active_index = index.min(self.item_count.saturating_sub(1));
    }

    /// Pointer entered the item at `index`
    pub fn hover(&mut self, index: usize) {
        if index < self.item_count {
            self.active_index = index;
        }
    }

    /// Pointer clicked the item at `index`: hover followed by Enter
    pub fn click(&mut self, index: usize) -> NavEvent {
        if index >= self.item_count {
            return NavEvent::Ignored;
        }
        self.hover(index);
        NavEvent::Select(self.active_index)
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        let outcome = match key {
            NavKey::ArrowDown | NavKey::ArrowUp if self.is_empty() => KeyOutcome::ignored(),
            NavKey::ArrowDown => {
                self.active_index = (self.active_index + 1) % self.item_count;
                KeyOutcome::handled(NavEvent::Moved(self.active_index))
            }
            NavKey::ArrowUp => {
                self.active_index = (self.active_index + self.item_count - 1) % self.item_count;
                KeyOutcome::handled(NavEvent::Moved(self.active_index))
            }
            NavKey::Enter if self.is_empty() => KeyOutcome::handled(NavEvent::Ignored),
            NavKey::Enter => KeyOutcome::handled(NavEvent::Select(self.active_index)),
            NavKey::Escape => KeyOutcome::handled(NavEvent::Escape),
            NavKey::Other => KeyOutcome::ignored(),
        };
        debug!(?key, event = ?outcome.event, "Listbox key");
        outcome
    }

    /// Apply a key press, invoking `on_select` for Enter and `on_escape` for Escape
    pub fn handle_key_with(
        &mut self,
        key: NavKey,
        mut on_select: impl FnMut(usize),
        on_escape: Option<&mut dyn FnMut()>,
    ) -> KeyOutcome {
        let outcome = self.handle_key(key);
        match outcome.event {
            NavEvent::Select(index) => on_select(index),
            NavEvent::Escape => {
                if let Some(on_escape) = on_escape {
                    on_escape();
                }
            }
            NavEvent::Moved(_) | NavEvent::Ignored => {}
        }
        outcome
    }
}

/// A single option in the listbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxItem {
    /// Unique code, e.g. a locale code
    pub code: String,
    pub label: String,
    pub icon: Option<LocaleIcon>,
}

/// Rendered option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxOptionView {
    pub id: String,
    pub item: ListboxItem,
    pub active: bool,
}

/// Rendered list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxView {
    pub options: Vec<ListboxOptionView>,
    /// Element id of the active option
    pub active_descendant: String,
}

fn option_id(index: usize) -> String {
    format!("listbox-item-{index}")
}

/// Render the list; `None` while closed
pub fn render_listbox(
    is_open: bool,
    items: &[ListboxItem],
    navigation: &ListboxNavigation,
) -> Option<ListboxView> {
    if !is_open {
        return None;
    }

    let active = navigation.active_index();
    let options = items
        .iter()
        .enumerate()
        .map(|(index, item)| ListboxOptionView {
            id: option_id(index),
            item: item.clone(),
            active: index == active,
        })
        .collect();

    Some(ListboxView {
        options,
        active_descendant: option_id(active),
    })
}

impl fmt::Display for ListboxView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for option in &self.options {
            let marker = if option.active { '>' } else { ' ' };
            let icon = option.item.icon.map(LocaleIcon::glyph).unwrap_or(" ");
            writeln!(f, " {marker} {icon} {}", option.item.label)?;
        }
        Ok(())
    }
}
