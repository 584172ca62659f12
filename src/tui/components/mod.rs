//! UI components for the TUI.
//!
//! # Component Organization
//!
//! - `reaction_button` - The picker control: current icon and label
//! - `reaction_strip` - Floating strip of reactions shown during a long press
//! - `status_log` - Selection callbacks received by the host screen

mod reaction_button;
mod reaction_strip;
mod status_log;

// Re-export all render functions for use in ui.rs
pub use reaction_button::render_reaction_button;
pub use reaction_strip::render_reaction_strip;
pub use status_log::render_status_log;
