//! A "like button" style reaction picker for terminal UIs.
//!
//! Tap to toggle the default reaction; long-press to reveal a strip of all
//! reactions, drag to highlight one and release to pick it.

pub mod animation;
pub mod app;
pub mod config;
pub mod error;
pub mod gesture;
pub mod log;
pub mod overlay;
pub mod picker;
pub mod reaction;
pub mod tui;
