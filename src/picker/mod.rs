//! Reaction picker control.
//!
//! Shows the current reaction (or the unselected placeholder). A tap toggles
//! between the default reaction and the placeholder. A long press reveals a
//! strip of all reactions above the control; dragging highlights the icon
//! under the pointer and releasing commits it once the strip has animated
//! away.
//!
//! The control is driven entirely by its owner: gestures come in through
//! [`ReactionPicker::handle_gesture`] and time through [`ReactionPicker::tick`].
//! Misconfiguration is never reported; such calls are ignored.

mod listener;
mod session;
mod strip;

pub use listener::{SelectionEvent, SelectionListener};
pub use session::SessionState;
pub use strip::{STRIP_ANIMATION, Strip, StripLayout};

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use ratatui::style::Style;

use crate::animation::{Animated, Timing, Transform};
use crate::gesture::{Gesture, LongPressPhase};
use crate::log;
use crate::overlay::{OverlayHost, OverlayId};
use crate::reaction::Reaction;

/// Duration of each phase of the current-icon pop.
pub const POP_ANIMATION: Duration = Duration::from_millis(300);

/// Peak scale of the current-icon pop.
pub const POP_SCALE: f32 = 1.2;

/// Presentation settings. None of these affect selection behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerStyle {
    /// Width (cells) of each icon slot in the strip
    pub icon_width: u16,
    /// Height (rows) of each icon slot in the strip
    pub icon_height: u16,
    /// Horizontal padding between and around strip icons
    pub padding_x: u16,
    /// Vertical padding above and below strip icons
    pub padding_y: u16,
    /// Horizontal offset of the strip from the control's left edge
    pub strip_inset: u16,
    /// Width (cells) of the current icon in the control itself
    pub current_icon_width: u16,
    /// Style of the current label; its color is overridden by the reaction's
    pub label_style: Style,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            icon_width: 4,
            icon_height: 1,
            padding_x: 2,
            padding_y: 1,
            strip_inset: 1,
            current_icon_width: 2,
            label_style: Style::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PopPhase {
    Rest,
    Growing,
    Settling,
}

/// The reaction picker control. Generic over the overlay host that shows its strip.
pub struct ReactionPicker<H: OverlayHost> {
    host: H,
    listener: Option<Box<dyn SelectionListener>>,
    style: PickerStyle,
    /// Screen frame of the control, set by the layout each frame
    frame: Rect,

    reactions: Vec<Reaction>,
    unselected: Option<Reaction>,
    default_index: usize,
    selected: Option<usize>,
    pending: Option<usize>,

    session: SessionState,
    strip: Option<Strip>,
    next_overlay: u64,

    current_icon: Animated,
    pop: PopPhase,
}

impl<H: OverlayHost> ReactionPicker<H> {
    /// Create an unconfigured picker. Gestures are inert until [`Self::configure`].
    pub fn new(host: H) -> Self {
        Self {
            host,
            listener: None,
            style: PickerStyle::default(),
            frame: Rect::default(),
            reactions: Vec::new(),
            unselected: None,
            default_index: 0,
            selected: None,
            pending: None,
            session: SessionState::Idle,
            strip: None,
            next_overlay: 0,
            current_icon: Animated::default(),
            pop: PopPhase::Rest,
        }
    }

    pub fn with_style(mut self, style: PickerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn set_listener(&mut self, listener: impl SelectionListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Replace the reaction set and placeholder, clearing the selection.
    ///
    /// Ignored when `reactions` is empty.
    pub fn configure(&mut self, reactions: Vec<Reaction>, unselected: Reaction) {
        if reactions.is_empty() {
            log::log_event("picker: configure ignored, no reactions");
            return;
        }

        self.teardown_strip();
        let had_selection = self.selected.is_some();

        log::log_event(&format!("picker: configured with {} reactions", reactions.len()));
        self.reactions = reactions;
        self.unselected = Some(unselected);
        self.default_index = 0;

        self.selected = None;
        self.current_icon.set(Transform::IDENTITY);
        self.pop = PopPhase::Rest;
        if had_selection {
            self.notify_deselected();
        }
    }

    /// Make `reactions[index]` the tap target. Out-of-range indices are ignored.
    pub fn set_default_index(&mut self, index: usize) {
        if index < self.reactions.len() {
            self.default_index = index;
        } else {
            log::log_event(&format!("picker: default index {} out of range", index));
        }
    }

    pub fn set_label_style(&mut self, style: Style) {
        self.style.label_style = style;
    }

    pub fn set_icon_size(&mut self, width: u16) {
        self.style.current_icon_width = width;
    }

    /// Update the control's screen frame. Strips are anchored to it.
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    pub fn is_configured(&self) -> bool {
        !self.reactions.is_empty()
    }

    pub fn unselected_reaction(&self) -> Option<&Reaction> {
        self.unselected.as_ref()
    }

    pub fn default_reaction(&self) -> Option<&Reaction> {
        self.reactions.get(self.default_index)
    }

    pub fn selected_reaction(&self) -> Option<&Reaction> {
        self.selected.and_then(|i| self.reactions.get(i))
    }

    /// Reaction highlighted under the pointer in the current session.
    pub fn pending_reaction(&self) -> Option<&Reaction> {
        self.pending.and_then(|i| self.reactions.get(i))
    }

    /// The reaction on display: the selection, else the placeholder.
    pub fn current(&self) -> Option<&Reaction> {
        self.selected_reaction().or(self.unselected.as_ref())
    }

    /// Transform of the current icon (pop animation).
    pub fn current_icon(&self) -> Transform {
        self.current_icon.value()
    }

    pub fn session_state(&self) -> SessionState {
        self.session
    }

    pub fn strip(&self) -> Option<&Strip> {
        self.strip.as_ref()
    }

    /// True while anything still needs frames.
    pub fn is_animating(&self) -> bool {
        self.current_icon.is_animating() || self.strip.as_ref().is_some_and(Strip::is_animating)
    }

    /// Dispatch a recognized gesture.
    pub fn handle_gesture(&mut self, gesture: Gesture, now: Instant) {
        match gesture {
            Gesture::Tap(_) => self.tap(now),
            Gesture::LongPress(LongPressPhase::Began, _) => self.long_press_began(now),
            Gesture::LongPress(LongPressPhase::Changed, position) => {
                self.long_press_changed(position, now)
            }
            Gesture::LongPress(LongPressPhase::Ended, _) => self.long_press_ended(now),
        }
    }

    /// Plain tap: deselect if something is selected, else select the default.
    pub fn tap(&mut self, now: Instant) {
        if self.reactions.is_empty() {
            return;
        }

        if self.selected.is_some() {
            self.deselect();
        } else {
            self.select(self.default_index, now);
        }
    }

    /// Build and reveal a fresh strip above the control.
    pub fn long_press_began(&mut self, now: Instant) {
        if self.reactions.is_empty() {
            return;
        }
        if !self.session.accepts_begin() {
            log::log_event(&format!(
                "picker: long press ignored while {}",
                self.session.label()
            ));
            return;
        }

        let id = OverlayId(self.next_overlay);
        self.next_overlay += 1;

        let bounds = self.host.bounds();
        let layout = StripLayout::compute(self.frame, self.reactions.len(), &self.style, bounds);
        let frame = layout.frame();
        let mut strip = Strip::new(id, layout, &self.style);
        strip.reveal(now);

        self.host.add_overlay(id, frame);
        self.strip = Some(strip);
        self.pending = None;
        self.session = SessionState::PressActive;

        log::log_event(&format!(
            "picker: strip {} shown at {}x{}+{}+{}",
            id.0, frame.width, frame.height, frame.x, frame.y
        ));
    }

    /// Highlight the icon under `position`. Misses keep the previous highlight.
    pub fn long_press_changed(&mut self, position: Position, now: Instant) {
        if !self.session.is_tracking() {
            return;
        }
        let Some(strip) = self.strip.as_mut() else {
            return;
        };

        if let Some(index) = strip.layout().hit_test(position) {
            if self.pending != Some(index) {
                log::log_event(&format!("picker: highlight {}", index));
            }
            self.pending = Some(index);
            strip.highlight(index, now);
        }
    }

    /// Start the strip's teardown. The commit happens in [`Self::tick`].
    pub fn long_press_ended(&mut self, now: Instant) {
        if !self.session.is_tracking() {
            return;
        }
        if let Some(strip) = self.strip.as_mut() {
            strip.dismiss(now);
        }
        self.session = SessionState::Committed;
    }

    /// Advance animations and deliver their completions.
    pub fn tick(&mut self, now: Instant) {
        if self.current_icon.tick(now) {
            match self.pop {
                PopPhase::Growing => {
                    self.current_icon
                        .animate_to(Transform::IDENTITY, Timing::ease_in_out(POP_ANIMATION), now);
                    self.pop = PopPhase::Settling;
                }
                PopPhase::Settling => self.pop = PopPhase::Rest,
                PopPhase::Rest => {}
            }
        }

        let dismissed = match self.strip.as_mut() {
            Some(strip) => strip.tick(now) && self.session == SessionState::Committed,
            None => false,
        };
        if dismissed {
            self.finish_commit(now);
        }
    }

    fn finish_commit(&mut self, now: Instant) {
        self.teardown_strip();
        if let Some(index) = self.pending.take() {
            self.select(index, now);
        }
    }

    /// Remove the strip from the host and forget the session.
    fn teardown_strip(&mut self) {
        if let Some(strip) = self.strip.take() {
            self.host.remove_overlay(strip.id());
            log::log_event(&format!("picker: strip {} removed", strip.id().0));
        }
        self.session = SessionState::Idle;
        self.pending = None;
    }

    fn select(&mut self, index: usize, now: Instant) {
        let Some(reaction) = self.reactions.get(index) else {
            return;
        };
        self.selected = Some(index);

        self.current_icon.set(Transform::IDENTITY);
        self.current_icon
            .animate_to(Transform::IDENTITY.scaled(POP_SCALE), Timing::spring(POP_ANIMATION), now);
        self.pop = PopPhase::Growing;

        log::log_event(&format!("picker: selected {} ({})", reaction.id, reaction.label_text()));
        if let Some(listener) = self.listener.as_mut() {
            listener.on_selected(reaction);
        }
    }

    fn deselect(&mut self) {
        self.selected = None;
        self.current_icon.set(Transform::IDENTITY);
        self.pop = PopPhase::Rest;
        log::log_event("picker: deselected");
        self.notify_deselected();
    }

    fn notify_deselected(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_deselected();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use ratatui::style::{Color, Modifier};

    type Events = Rc<RefCell<Vec<SelectionEvent>>>;

    impl SelectionListener for Events {
        fn on_selected(&mut self, reaction: &Reaction) {
            self.borrow_mut().push(SelectionEvent::Selected(reaction.clone()));
        }

        fn on_deselected(&mut self) {
            self.borrow_mut().push(SelectionEvent::Deselected);
        }
    }

    /// Overlay host that records every call.
    #[derive(Debug, Default)]
    struct RecordingHost {
        added: Vec<(OverlayId, Rect)>,
        removed: Vec<OverlayId>,
    }

    impl RecordingHost {
        fn visible(&self) -> Vec<OverlayId> {
            self.added
                .iter()
                .map(|(id, _)| *id)
                .filter(|id| !self.removed.contains(id))
                .collect()
        }
    }

    impl OverlayHost for RecordingHost {
        fn add_overlay(&mut self, overlay: OverlayId, frame: Rect) {
            self.added.push((overlay, frame));
        }

        fn remove_overlay(&mut self, overlay: OverlayId) {
            self.removed.push(overlay);
        }

        fn bounds(&self) -> Rect {
            Rect::new(0, 0, 80, 30)
        }
    }

    fn a() -> Reaction {
        Reaction::new(1).with_icon("👍").with_label("Like").with_color(Color::Gray)
    }

    fn b() -> Reaction {
        Reaction::new(2).with_icon("❤️").with_label("Love").with_color(Color::Red)
    }

    fn c() -> Reaction {
        Reaction::new(3).with_icon("💡").with_label("Insightful").with_color(Color::Cyan)
    }

    fn u() -> Reaction {
        Reaction::new(0).with_icon("👍").with_label("Like")
    }

    // Strip for [A, B, C] under a control at (10, 20) spans columns 11..31:
    // A at 13..17, B at 19..23, C at 25..29.
    const OVER_A: Position = Position { x: 14, y: 20 };
    const OVER_C: Position = Position { x: 26, y: 20 };
    const OVER_GAP: Position = Position { x: 18, y: 20 };

    fn picker() -> (ReactionPicker<RecordingHost>, Events) {
        let events: Events = Rc::default();
        let mut picker = ReactionPicker::new(RecordingHost::default());
        picker.set_listener(events.clone());
        picker.set_frame(Rect::new(10, 20, 12, 1));
        picker.configure(vec![a(), b(), c()], u());
        (picker, events)
    }

    #[test]
    fn test_configure_shows_placeholder() {
        let (picker, events) = picker();
        assert_eq!(picker.current(), Some(&u()));
        assert!(picker.selected_reaction().is_none());
        assert_eq!(picker.default_reaction(), Some(&a()));
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_tap_selects_default_then_deselects() {
        let (mut picker, events) = picker();
        let now = Instant::now();

        picker.tap(now);
        assert_eq!(picker.selected_reaction(), Some(&a()));
        assert_eq!(picker.current(), Some(&a()));
        assert_eq!(*events.borrow(), vec![SelectionEvent::Selected(a())]);

        picker.tap(now);
        assert!(picker.selected_reaction().is_none());
        assert_eq!(picker.current(), Some(&u()));
        assert_eq!(
            *events.borrow(),
            vec![SelectionEvent::Selected(a()), SelectionEvent::Deselected]
        );
        // Taps never show the strip
        assert!(picker.host().added.is_empty());
    }

    #[test]
    fn test_set_default_index() {
        let (mut picker, events) = picker();
        let now = Instant::now();

        picker.set_default_index(1);
        picker.tap(now);
        assert_eq!(picker.selected_reaction(), Some(&b()));

        picker.tap(now);
        picker.set_default_index(99);
        assert_eq!(picker.default_reaction(), Some(&b()));
        picker.tap(now);
        assert_eq!(picker.selected_reaction(), Some(&b()));

        assert_eq!(
            *events.borrow(),
            vec![
                SelectionEvent::Selected(b()),
                SelectionEvent::Deselected,
                SelectionEvent::Selected(b()),
            ]
        );
    }

    #[test]
    fn test_drag_updates_pending_without_callbacks() {
        let (mut picker, events) = picker();
        let now = Instant::now();

        picker.long_press_began(now);
        assert_eq!(picker.session_state(), SessionState::PressActive);
        assert!(picker.pending_reaction().is_none());
        assert_eq!(picker.host().visible().len(), 1);

        picker.long_press_changed(OVER_A, now);
        assert_eq!(picker.pending_reaction(), Some(&a()));

        picker.long_press_changed(OVER_C, now + Duration::from_millis(50));
        assert_eq!(picker.pending_reaction(), Some(&c()));
        assert_eq!(picker.strip().and_then(Strip::highlighted), Some(2));

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_release_commits_after_teardown_animation() {
        let (mut picker, events) = picker();
        let start = Instant::now();

        picker.long_press_began(start);
        picker.long_press_changed(OVER_C, start);
        let release = start + Duration::from_millis(400);
        picker.long_press_ended(release);
        assert_eq!(picker.session_state(), SessionState::Committed);

        // Mid-animation: nothing committed yet, strip still hosted
        picker.tick(release + Duration::from_millis(100));
        assert!(events.borrow().is_empty());
        assert!(picker.strip().is_some());
        assert_eq!(picker.host().visible().len(), 1);

        picker.tick(release + STRIP_ANIMATION);
        assert_eq!(*events.borrow(), vec![SelectionEvent::Selected(c())]);
        assert_eq!(picker.selected_reaction(), Some(&c()));
        assert!(picker.pending_reaction().is_none());
        assert!(picker.strip().is_none());
        assert!(picker.host().visible().is_empty());
        assert_eq!(picker.session_state(), SessionState::Idle);

        // Later frames fire nothing more
        picker.tick(release + Duration::from_secs(2));
        assert_eq!(events.borrow().len(), 1);
    }

    #[test]
    fn test_reveal_completion_does_not_commit() {
        let (mut picker, events) = picker();
        let start = Instant::now();

        picker.long_press_began(start);
        picker.long_press_changed(OVER_A, start);
        picker.tick(start + STRIP_ANIMATION);

        assert!(events.borrow().is_empty());
        assert_eq!(picker.session_state(), SessionState::PressActive);
    }

    #[test]
    fn test_release_without_hit_selects_nothing() {
        let (mut picker, events) = picker();
        let start = Instant::now();

        picker.long_press_began(start);
        picker.long_press_changed(OVER_GAP, start);
        assert!(picker.pending_reaction().is_none());
        picker.long_press_ended(start);
        picker.tick(start + STRIP_ANIMATION);

        assert!(events.borrow().is_empty());
        assert!(picker.selected_reaction().is_none());
        assert!(picker.host().visible().is_empty());
    }

    #[test]
    fn test_miss_keeps_previous_highlight() {
        let (mut picker, _events) = picker();
        let start = Instant::now();

        picker.long_press_began(start);
        picker.long_press_changed(OVER_A, start);
        picker.long_press_changed(OVER_GAP, start);
        picker.long_press_changed(Position::new(79, 0), start);
        assert_eq!(picker.pending_reaction(), Some(&a()));
        assert_eq!(picker.strip().and_then(Strip::highlighted), Some(0));
    }

    #[test]
    fn test_each_session_rebuilds_strip() {
        let (mut picker, _events) = picker();
        let start = Instant::now();

        for session in 0..2u64 {
            let t = start + Duration::from_secs(session);
            picker.long_press_began(t);
            assert_eq!(picker.strip().map(Strip::id), Some(OverlayId(session)));
            picker.long_press_ended(t);
            picker.tick(t + STRIP_ANIMATION);
        }

        let host = picker.host();
        assert_eq!(host.added.len(), 2);
        assert_eq!(host.removed, vec![OverlayId(0), OverlayId(1)]);
        assert_eq!(host.added[0].1, Rect::new(11, 17, 20, 3));
    }

    #[test]
    fn test_begin_during_teardown_is_ignored() {
        let (mut picker, _events) = picker();
        let start = Instant::now();

        picker.long_press_began(start);
        picker.long_press_ended(start);
        picker.long_press_began(start + Duration::from_millis(10));

        assert_eq!(picker.session_state(), SessionState::Committed);
        assert_eq!(picker.host().added.len(), 1);
    }

    #[test]
    fn test_phases_outside_session_are_ignored() {
        let (mut picker, events) = picker();
        let now = Instant::now();

        picker.long_press_changed(OVER_A, now);
        picker.long_press_ended(now);
        picker.tick(now + STRIP_ANIMATION);

        assert!(picker.pending_reaction().is_none());
        assert_eq!(picker.session_state(), SessionState::Idle);
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_long_press_on_selected_reaction_reselects() {
        let (mut picker, events) = picker();
        let start = Instant::now();

        picker.tap(start);
        picker.long_press_began(start);
        picker.long_press_changed(OVER_A, start);
        picker.long_press_ended(start);
        picker.tick(start + STRIP_ANIMATION);

        assert_eq!(
            *events.borrow(),
            vec![SelectionEvent::Selected(a()), SelectionEvent::Selected(a())]
        );
    }

    #[test]
    fn test_unconfigured_picker_is_inert() {
        let events: Events = Rc::default();
        let mut picker = ReactionPicker::new(RecordingHost::default());
        picker.set_listener(events.clone());
        let now = Instant::now();

        picker.configure(Vec::new(), u());
        assert!(!picker.is_configured());
        assert!(picker.current().is_none());

        picker.tap(now);
        picker.tap(now);
        picker.long_press_began(now);

        assert!(events.borrow().is_empty());
        assert!(picker.selected_reaction().is_none());
        assert!(picker.host().added.is_empty());
        assert_eq!(picker.session_state(), SessionState::Idle);
    }

    #[test]
    fn test_empty_configure_keeps_previous_configuration() {
        let (mut picker, events) = picker();
        let now = Instant::now();

        picker.configure(Vec::new(), Reaction::new(42));
        assert_eq!(picker.reactions().len(), 3);
        assert_eq!(picker.current(), Some(&u()));

        picker.tap(now);
        assert_eq!(*events.borrow(), vec![SelectionEvent::Selected(a())]);
    }

    #[test]
    fn test_reconfigure_clears_selection_and_strip() {
        let (mut picker, events) = picker();
        let now = Instant::now();

        picker.set_default_index(2);
        picker.tap(now);
        picker.long_press_began(now);

        let placeholder = Reaction::new(9).with_label("React");
        picker.configure(vec![b(), a()], placeholder.clone());

        assert!(picker.selected_reaction().is_none());
        assert_eq!(picker.current(), Some(&placeholder));
        assert_eq!(picker.default_reaction(), Some(&b()));
        assert!(picker.strip().is_none());
        assert!(picker.host().visible().is_empty());
        assert_eq!(
            *events.borrow(),
            vec![SelectionEvent::Selected(c()), SelectionEvent::Deselected]
        );
    }

    #[test]
    fn test_select_pops_current_icon() {
        let (mut picker, _events) = picker();
        let start = Instant::now();

        picker.tap(start);
        picker.tick(start + Duration::from_millis(150));
        assert!(picker.current_icon().scale > 1.0);

        picker.tick(start + POP_ANIMATION);
        assert_eq!(picker.current_icon().scale, POP_SCALE);
        assert!(picker.is_animating());

        picker.tick(start + POP_ANIMATION * 2);
        assert_eq!(picker.current_icon().scale, 1.0);
        assert!(!picker.is_animating());
    }

    #[test]
    fn test_handle_gesture_dispatches_phases() {
        let (mut picker, events) = picker();
        let start = Instant::now();

        let on_control = Position::new(12, 20);
        picker.handle_gesture(Gesture::LongPress(LongPressPhase::Began, on_control), start);
        picker.handle_gesture(Gesture::LongPress(LongPressPhase::Changed, OVER_C), start);
        picker.handle_gesture(Gesture::LongPress(LongPressPhase::Ended, OVER_C), start);
        picker.tick(start + STRIP_ANIMATION);
        picker.handle_gesture(Gesture::Tap(on_control), start + STRIP_ANIMATION);

        assert_eq!(
            *events.borrow(),
            vec![SelectionEvent::Selected(c()), SelectionEvent::Deselected]
        );
    }

    #[test]
    fn test_oversized_strip_from_config_stays_in_bounds() {
        let config: crate::config::Config = toml::from_str("[strip]\nicon_width = 20000").unwrap();
        let events: Events = Rc::default();
        let mut picker =
            ReactionPicker::new(RecordingHost::default()).with_style(config.picker_style());
        picker.set_listener(events.clone());
        picker.set_frame(Rect::new(10, 20, 12, 1));
        picker.configure(vec![a(), b(), c(), u()], u());

        let start = Instant::now();
        picker.long_press_began(start);
        assert_eq!(picker.session_state(), SessionState::PressActive);
        let (_, frame) = picker.host().added[0];
        assert_eq!(frame.x, 0);
        assert_eq!(frame.y, 17);

        // Slot 0 starts after the leading padding
        picker.long_press_changed(Position::new(2, 0), start);
        assert_eq!(picker.pending_reaction(), Some(&a()));
        picker.long_press_ended(start);
        picker.tick(start + STRIP_ANIMATION);
        assert_eq!(*events.borrow(), vec![SelectionEvent::Selected(a())]);
    }

    #[test]
    fn test_cosmetic_setters() {
        let (mut picker, _events) = picker();
        picker.set_icon_size(4);
        picker.set_label_style(Style::new().add_modifier(Modifier::BOLD));
        assert_eq!(picker.style().current_icon_width, 4);
        assert_eq!(picker.style().label_style, Style::new().add_modifier(Modifier::BOLD));
    }
}
