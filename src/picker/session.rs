//! Long-press session states.
//!
//! | from        | event                       | to          |
//! |-------------|-----------------------------|-------------|
//! | Idle        | long press began            | PressActive |
//! | PressActive | long press changed          | PressActive |
//! | PressActive | long press ended            | Committed   |
//! | Committed   | release animation completed | Idle        |
//!
//! Taps never change the session state. The strip is built on entering
//! `PressActive` and dropped on returning to `Idle`, so every session starts
//! from a fresh strip.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No long press in progress, no strip
    #[default]
    Idle,
    /// Strip shown, pointer being tracked
    PressActive,
    /// Pointer released, waiting for the strip's teardown animation
    Committed,
}

impl SessionState {
    pub fn accepts_begin(self) -> bool {
        self == SessionState::Idle
    }

    pub fn is_tracking(self) -> bool {
        self == SessionState::PressActive
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::PressActive => "press-active",
            SessionState::Committed => "committed",
        }
    }
}
