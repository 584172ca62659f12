//! Terminal rendering for the picker and the demo screen.

pub mod components;
pub mod theme;
pub mod ui;
