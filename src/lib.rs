//! Locale Switcher Library
//!
//! Locale resolution, best-effort persistence, a headless locale-switcher
//! widget and document side effects that keep the page language, title and
//! description in sync with the active locale.

rust_i18n::i18n!("locales", fallback = "de");

pub mod app;
pub mod assets;
pub mod components;
pub mod config;
pub mod constants;
pub mod document;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod location;
pub mod state;
pub mod storage;
