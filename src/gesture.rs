//! Tap and long-press recognition from raw mouse events.
//!
//! Terminals only report button down, drag and up. The recognizer adds the
//! notion of time: a press held for at least `min_press_duration` without
//! moving further than `allowable_movement` cells becomes a long press, and
//! subsequent drags and the release are reported as its phases. A press
//! released before that is a tap. Call [`GestureRecognizer::tick`] every
//! frame so a held, motionless press can begin.

use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Default hold time before a press becomes a long press.
pub const DEFAULT_MIN_PRESS: Duration = Duration::from_millis(500);

/// Default movement (cells) tolerated before the long press begins.
pub const DEFAULT_ALLOWABLE_MOVEMENT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongPressPhase {
    Began,
    Changed,
    Ended,
}

/// A recognized gesture, carrying the pointer's screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap(Position),
    LongPress(LongPressPhase, Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PressState {
    Idle,
    Pressed {
        origin: Position,
        last: Position,
        since: Instant,
    },
    LongPressing,
    /// Moved too far before the hold elapsed; swallow events until release
    Failed,
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    min_press_duration: Duration,
    allowable_movement: u16,
    state: PressState,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_PRESS, DEFAULT_ALLOWABLE_MOVEMENT)
    }
}

impl GestureRecognizer {
    pub fn new(min_press_duration: Duration, allowable_movement: u16) -> Self {
        Self {
            min_press_duration,
            allowable_movement,
            state: PressState::Idle,
        }
    }

    /// True while a press that started on the target is being tracked.
    pub fn is_tracking(&self) -> bool {
        !matches!(self.state, PressState::Idle)
    }

    pub fn is_long_pressing(&self) -> bool {
        matches!(self.state, PressState::LongPressing)
    }

    /// Feed a mouse event. Presses only start inside `target`.
    ///
    /// A press that arrives while a long press is active means its release was
    /// lost, so the long press is ended first.
    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        target: Rect,
        now: Instant,
    ) -> Option<Gesture> {
        let position = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let interrupted = matches!(self.state, PressState::LongPressing)
                    .then_some(Gesture::LongPress(LongPressPhase::Ended, position));
                self.state = if target.contains(position) {
                    PressState::Pressed {
                        origin: position,
                        last: position,
                        since: now,
                    }
                } else {
                    PressState::Idle
                };
                interrupted
            }
            MouseEventKind::Drag(MouseButton::Left) => match self.state {
                PressState::Pressed { origin, since, .. } => {
                    if self.exceeds_movement(origin, position) {
                        self.state = PressState::Failed;
                    } else {
                        self.state = PressState::Pressed {
                            origin,
                            last: position,
                            since,
                        };
                    }
                    None
                }
                PressState::LongPressing => {
                    Some(Gesture::LongPress(LongPressPhase::Changed, position))
                }
                _ => None,
            },
            MouseEventKind::Up(MouseButton::Left) => {
                let previous = std::mem::replace(&mut self.state, PressState::Idle);
                match previous {
                    PressState::Pressed { .. } if target.contains(position) => {
                        Some(Gesture::Tap(position))
                    }
                    PressState::LongPressing => {
                        Some(Gesture::LongPress(LongPressPhase::Ended, position))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    /// Advance time. Begins the long press once the hold duration elapses.
    pub fn tick(&mut self, now: Instant) -> Option<Gesture> {
        if let PressState::Pressed { last, since, .. } = self.state {
            if now.saturating_duration_since(since) >= self.min_press_duration {
                self.state = PressState::LongPressing;
                return Some(Gesture::LongPress(LongPressPhase::Began, last));
            }
        }
        None
    }

    /// Drop any tracked press without reporting it.
    pub fn reset(&mut self) {
        self.state = PressState::Idle;
    }

    fn exceeds_movement(&self, origin: Position, position: Position) -> bool {
        let dx = origin.x.abs_diff(position.x);
        let dy = origin.y.abs_diff(position.y);
        dx.max(dy) > self.allowable_movement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn target() -> Rect {
        Rect::new(10, 10, 12, 1)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn down(x: u16, y: u16) -> MouseEvent {
        mouse(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    fn drag(x: u16, y: u16) -> MouseEvent {
        mouse(MouseEventKind::Drag(MouseButton::Left), x, y)
    }

    fn up(x: u16, y: u16) -> MouseEvent {
        mouse(MouseEventKind::Up(MouseButton::Left), x, y)
    }

    #[test]
    fn test_quick_press_is_tap() {
        let start = Instant::now();
        let mut recognizer = GestureRecognizer::default();

        assert_eq!(recognizer.handle_mouse(down(12, 10), target(), start), None);
        assert_eq!(recognizer.tick(start + Duration::from_millis(100)), None);
        assert_eq!(
            recognizer.handle_mouse(up(12, 10), target(), start + Duration::from_millis(120)),
            Some(Gesture::Tap(Position::new(12, 10)))
        );
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn test_press_outside_target_is_ignored() {
        let start = Instant::now();
        let mut recognizer = GestureRecognizer::default();

        recognizer.handle_mouse(down(0, 0), target(), start);
        assert!(!recognizer.is_tracking());
        assert_eq!(recognizer.tick(start + Duration::from_secs(1)), None);
        assert_eq!(recognizer.handle_mouse(up(0, 0), target(), start), None);
    }

    #[test]
    fn test_hold_begins_long_press_then_reports_phases() {
        let start = Instant::now();
        let mut recognizer = GestureRecognizer::default();

        recognizer.handle_mouse(down(12, 10), target(), start);
        assert_eq!(
            recognizer.tick(start + DEFAULT_MIN_PRESS),
            Some(Gesture::LongPress(LongPressPhase::Began, Position::new(12, 10)))
        );
        assert!(recognizer.is_long_pressing());

        // Only begins once
        assert_eq!(recognizer.tick(start + Duration::from_secs(2)), None);

        // Drags far away are fine once the long press is active
        assert_eq!(
            recognizer.handle_mouse(drag(30, 6), target(), start),
            Some(Gesture::LongPress(LongPressPhase::Changed, Position::new(30, 6)))
        );
        assert_eq!(
            recognizer.handle_mouse(up(31, 6), target(), start),
            Some(Gesture::LongPress(LongPressPhase::Ended, Position::new(31, 6)))
        );
        assert!(!recognizer.is_tracking());
    }

    #[test]
    fn test_small_jitter_still_begins_long_press() {
        let start = Instant::now();
        let mut recognizer = GestureRecognizer::default();

        recognizer.handle_mouse(down(12, 10), target(), start);
        recognizer.handle_mouse(drag(13, 10), target(), start);
        assert_eq!(
            recognizer.tick(start + DEFAULT_MIN_PRESS),
            Some(Gesture::LongPress(LongPressPhase::Began, Position::new(13, 10)))
        );
    }

    #[test]
    fn test_early_drag_fails_gesture() {
        let start = Instant::now();
        let mut recognizer = GestureRecognizer::default();

        recognizer.handle_mouse(down(12, 10), target(), start);
        assert_eq!(recognizer.handle_mouse(drag(16, 10), target(), start), None);
        assert_eq!(recognizer.tick(start + Duration::from_secs(1)), None);
        assert_eq!(recognizer.handle_mouse(up(12, 10), target(), start), None);
    }

    #[test]
    fn test_release_outside_target_is_not_a_tap() {
        let start = Instant::now();
        let mut recognizer = GestureRecognizer::new(DEFAULT_MIN_PRESS, 100);

        recognizer.handle_mouse(down(12, 10), target(), start);
        recognizer.handle_mouse(drag(40, 10), target(), start);
        assert_eq!(recognizer.handle_mouse(up(40, 10), target(), start), None);
    }

    #[test]
    fn test_new_press_ends_long_press_with_lost_release() {
        let start = Instant::now();
        let mut recognizer = GestureRecognizer::default();

        recognizer.handle_mouse(down(12, 10), target(), start);
        recognizer.tick(start + DEFAULT_MIN_PRESS);
        recognizer.handle_mouse(drag(30, 6), target(), start);

        // Release happened outside the terminal; the next press ends the old one
        assert_eq!(
            recognizer.handle_mouse(down(14, 10), target(), start + Duration::from_secs(2)),
            Some(Gesture::LongPress(LongPressPhase::Ended, Position::new(14, 10)))
        );
        assert!(!recognizer.is_long_pressing());
        assert!(recognizer.is_tracking());
        assert_eq!(
            recognizer.handle_mouse(up(14, 10), target(), start + Duration::from_secs(2)),
            Some(Gesture::Tap(Position::new(14, 10)))
        );

        // Same when the interrupting press lands off the target
        recognizer.handle_mouse(down(12, 10), target(), start);
        recognizer.tick(start + DEFAULT_MIN_PRESS);
        assert_eq!(
            recognizer.handle_mouse(down(0, 0), target(), start + Duration::from_secs(2)),
            Some(Gesture::LongPress(LongPressPhase::Ended, Position::new(0, 0)))
        );
        assert!(!recognizer.is_tracking());
    }
}
