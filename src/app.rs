//! Demo host screen state.
//!
//! Builds the built-in reaction set (or the one from the config file), wires
//! it into a [`ReactionPicker`] and keeps a short history of the callbacks the
//! picker delivers.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::layout::Rect;
use ratatui::style::Color;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::Config;
use crate::gesture::{Gesture, GestureRecognizer, LongPressPhase};
use crate::log;
use crate::overlay::OverlayLayer;
use crate::picker::{ReactionPicker, SelectionEvent};
use crate::reaction::Reaction;

/// Number of callback entries kept for display.
const HISTORY_LIMIT: usize = 32;

/// Built-in reactions of the demo screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionOption {
    None,
    Like,
    Love,
    Insightful,
    Curious,
}

impl ReactionOption {
    /// Options offered in the strip, in display order.
    pub fn selectable() -> &'static [ReactionOption] {
        &[
            ReactionOption::Like,
            ReactionOption::Love,
            ReactionOption::Insightful,
            ReactionOption::Curious,
        ]
    }

    pub fn id(self) -> i64 {
        self as i64
    }

    pub fn reaction(self) -> Reaction {
        let reaction = Reaction::new(self.id());
        match self {
            ReactionOption::None => reaction
                .with_icon("👍")
                .with_label("Like")
                .with_color(Color::Gray),
            ReactionOption::Like => reaction
                .with_icon("👍")
                .with_label("Like")
                .with_color(Color::Gray),
            ReactionOption::Love => reaction
                .with_icon("❤️")
                .with_label("Love")
                .with_color(Color::Red),
            ReactionOption::Insightful => reaction
                .with_icon("💡")
                .with_label("Insightful")
                .with_color(Color::Rgb(39, 179, 249)),
            ReactionOption::Curious => reaction
                .with_icon("🧠")
                .with_label("Curious")
                .with_color(Color::Rgb(45, 215, 184)),
        }
    }
}

fn builtin_reactions() -> Vec<Reaction> {
    ReactionOption::selectable()
        .iter()
        .map(|option| option.reaction())
        .collect()
}

pub struct App {
    pub picker: ReactionPicker<OverlayLayer>,
    pub gestures: GestureRecognizer,
    /// Callback history, oldest first
    pub history: Vec<String>,
    pub should_quit: bool,
    frame_interval: Duration,
}

impl App {
    /// Build the screen from config. Selection callbacks are sent to `events`.
    ///
    /// Reactions that fail to convert are replaced by the built-in set with a
    /// warning.
    pub fn new(config: &Config, events: UnboundedSender<SelectionEvent>) -> Self {
        let reactions = match config.reactions() {
            Ok(reactions) if !reactions.is_empty() => reactions,
            Ok(_) => builtin_reactions(),
            Err(e) => {
                log::log_warning(&format!("config reactions: {}, using built-in set", e));
                builtin_reactions()
            }
        };
        let unselected = match config.unselected() {
            Ok(unselected) => unselected.unwrap_or_else(|| ReactionOption::None.reaction()),
            Err(e) => {
                log::log_warning(&format!("config placeholder: {}, using built-in", e));
                ReactionOption::None.reaction()
            }
        };

        let mut picker = ReactionPicker::new(OverlayLayer::new(Rect::default()))
            .with_style(config.picker_style());
        picker.configure(reactions, unselected);
        picker.set_listener(events);
        if let Some(index) = config.default_index {
            picker.set_default_index(index);
        }

        Self {
            picker,
            gestures: GestureRecognizer::new(config.long_press(), config.allowable_movement()),
            history: Vec::new(),
            should_quit: false,
            frame_interval: config.frame_interval(),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let target = self.picker.frame();
        if let Some(gesture) = self.gestures.handle_mouse(mouse, target, now) {
            self.dispatch(gesture, now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => self.picker.tap(now),
            _ => {}
        }
    }

    /// Advance gesture timing and animations. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(gesture) = self.gestures.tick(now) {
            self.dispatch(gesture, now);
        }
        self.picker.tick(now);
    }

    /// Record a callback delivered by the picker.
    pub fn record(&mut self, event: SelectionEvent) {
        let entry = match event {
            SelectionEvent::Selected(reaction) => {
                format!("Selected reaction is: {}", reaction.label_text())
            }
            SelectionEvent::Deselected => "Deselected reaction".to_string(),
        };
        log::log(&entry);
        self.history.push(entry);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }

    fn dispatch(&mut self, gesture: Gesture, now: Instant) {
        // Movement is too chatty for the log
        if !matches!(gesture, Gesture::LongPress(LongPressPhase::Changed, _)) {
            log::log_event(&format!("gesture: {:?}", gesture));
        }
        self.picker.handle_gesture(gesture, now);
    }
}
