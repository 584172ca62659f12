//! Reaction records.
//!
//! A `Reaction` is a plain value describing one selectable option. Every
//! presentational field is optional; renderers fall back to blank cells, an
//! empty label and the theme's default text color.

use ratatui::style::Color;
use serde_json::Value;

/// Opaque image handle for a reaction icon.
///
/// In the terminal an icon is a short glyph string, usually a single emoji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon(String);

impl Icon {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn glyph(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Icon {
    fn from(glyph: &str) -> Self {
        Self::new(glyph)
    }
}

/// One selectable reaction (Like, Love, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// Identifier, unique within a picker's reaction set
    pub id: i64,
    pub icon: Option<Icon>,
    pub label: Option<String>,
    /// Color used for the label and icon while this reaction is current
    pub color: Option<Color>,
    /// Host-defined value, never inspected by the picker
    pub payload: Option<Value>,
}

impl Reaction {
    /// Create a reaction with only an id; use the `with_*` builders for the rest.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            icon: None,
            label: None,
            color: None,
            payload: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Label text, empty when absent.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    /// Icon glyph, empty when absent.
    pub fn glyph(&self) -> &str {
        self.icon.as_ref().map(Icon::glyph).unwrap_or("")
    }
}
