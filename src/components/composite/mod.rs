//! Composite Components
//!
//! Widgets assembled from primitives and application state.

pub mod locale_switcher;
