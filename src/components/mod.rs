//! Components - Reusable UI Components
//!
//! Headless widgets: they hold interaction state and render to view models.

pub mod composite;
pub mod pointer;
pub mod primitives;
