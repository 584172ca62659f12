//! Overlay hosting for floating views.
//!
//! The picker never reaches into global screen state to show its strip.
//! Instead it is handed an [`OverlayHost`] at construction and asks it to add
//! or remove overlays by id. The terminal renderer draws whatever the host
//! currently lists, on top of the regular layout.

use ratatui::layout::Rect;

/// Handle identifying one overlay view for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(pub u64);

/// Capability to render floating views above the regular layout.
pub trait OverlayHost {
    /// Show `overlay` at `frame` (screen coordinates). Re-adding an id moves it.
    fn add_overlay(&mut self, overlay: OverlayId, frame: Rect);

    /// Stop showing `overlay`. Unknown ids are ignored.
    fn remove_overlay(&mut self, overlay: OverlayId);

    /// Screen area overlays may occupy.
    fn bounds(&self) -> Rect;
}

/// Overlay layer drawn by the terminal UI, topmost last.
#[derive(Debug, Default)]
pub struct OverlayLayer {
    bounds: Rect,
    overlays: Vec<(OverlayId, Rect)>,
}

impl OverlayLayer {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            overlays: Vec::new(),
        }
    }

    /// Update the screen area (call when the terminal is resized).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Overlays in z-order.
    pub fn overlays(&self) -> &[(OverlayId, Rect)] {
        &self.overlays
    }

    pub fn frame_of(&self, overlay: OverlayId) -> Option<Rect> {
        self.overlays
            .iter()
            .find(|(id, _)| *id == overlay)
            .map(|(_, frame)| *frame)
    }

    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }
}

impl OverlayHost for OverlayLayer {
    fn add_overlay(&mut self, overlay: OverlayId, frame: Rect) {
        self.overlays.retain(|(id, _)| *id != overlay);
        self.overlays.push((overlay, frame));
    }

    fn remove_overlay(&mut self, overlay: OverlayId) {
        self.overlays.retain(|(id, _)| *id != overlay);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
