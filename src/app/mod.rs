//! Application Layer
//!
//! Composition of state, widgets and document effects, plus the demo shell.

pub mod application;
pub mod commands;
