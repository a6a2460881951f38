//! Embedded assets for locale-switcher
//!
//! Uses rust-embed to bundle the flag icons at compile time.

use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct Assets;

impl Assets {
    /// Load an asset by path, `None` when it is not bundled
    pub fn load(path: &str) -> Option<Cow<'static, [u8]>> {
        if path.is_empty() {
            return None;
        }
        Self::get(path).map(|f| f.data)
    }

    /// List bundled asset paths under a prefix
    pub fn list(prefix: &str) -> Vec<String> {
        Self::iter()
            .filter(|p| p.starts_with(prefix))
            .map(|p| p.into_owned())
            .collect()
    }
}

/// Icons attached to locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleIcon {
    /// Union flag
    EnglishFlag,
    /// German tricolour
    GermanFlag,
}

impl LocaleIcon {
    /// Get the SVG path for this icon
    pub fn path(self) -> &'static str {
        match self {
            LocaleIcon::EnglishFlag => "icons/flag-en.svg",
            LocaleIcon::GermanFlag => "icons/flag-de.svg",
        }
    }

    /// Short text rendering for terminals and plain-text views
    pub fn glyph(self) -> &'static str {
        match self {
            LocaleIcon::EnglishFlag => "🇬🇧",
            LocaleIcon::GermanFlag => "🇩🇪",
        }
    }

    /// The SVG markup
    pub fn svg(self) -> Option<Cow<'static, str>> {
        match Assets::load(self.path())? {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes).ok().map(Cow::Borrowed),
            Cow::Owned(bytes) => String::from_utf8(bytes).ok().map(Cow::Owned),
        }
    }
}
