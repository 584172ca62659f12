//! The floating icon strip shown during a long press.
//!
//! Layout is computed once per session from the control's frame, the number
//! of reactions and the picker style. Slot `i` sits at local column
//! `padding_x + i * (icon_width + padding_x)`; everything else inside the
//! strip is padding and never hit.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use crate::animation::{Animated, Timing, Transform};
use crate::overlay::OverlayId;

use super::PickerStyle;

/// Duration of every strip transition.
pub const STRIP_ANIMATION: Duration = Duration::from_millis(300);

/// Geometry of a strip: its resting screen frame and its icon slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripLayout {
    frame: Rect,
    /// Slot rects relative to `frame`
    slots: Vec<Rect>,
}

impl StripLayout {
    /// Width and height needed for `count` icons plus padding on every side.
    /// Saturates at `u16::MAX` in either direction.
    pub fn size(count: usize, style: &PickerStyle) -> (u16, u16) {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        let width = count
            .saturating_mul(u32::from(style.icon_width))
            .saturating_add(count.saturating_add(1).saturating_mul(u32::from(style.padding_x)));
        let height = u32::from(style.icon_height)
            .saturating_add(2 * u32::from(style.padding_y));
        (clamp_cells(width), clamp_cells(height))
    }

    /// Lay out `count` icons directly above `anchor`, kept inside `bounds`.
    pub fn compute(anchor: Rect, count: usize, style: &PickerStyle, bounds: Rect) -> Self {
        let (width, height) = Self::size(count, style);

        let mut x = anchor.x.saturating_add(style.strip_inset);
        if x.saturating_add(width) > bounds.right() {
            x = bounds.right().saturating_sub(width);
        }
        x = x.max(bounds.x);
        let y = anchor.y.saturating_sub(height).max(bounds.y);

        let stride = u32::from(style.icon_width) + u32::from(style.padding_x);
        let slots = (0..count)
            .map(|i| {
                let i = u32::try_from(i).unwrap_or(u32::MAX);
                let x = u32::from(style.padding_x).saturating_add(i.saturating_mul(stride));
                Rect::new(clamp_cells(x), style.padding_y, style.icon_width, style.icon_height)
            })
            .collect();

        Self {
            frame: Rect::new(x, y, width, height),
            slots,
        }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Screen frame of slot `index`.
    pub fn slot_frame(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).map(|slot| Rect {
            x: self.frame.x.saturating_add(slot.x),
            y: self.frame.y.saturating_add(slot.y),
            ..*slot
        })
    }

    /// Slot under a screen point. Only the horizontal coordinate matters: the
    /// vertical one is pinned to the strip's center row.
    pub fn hit_test(&self, point: Position) -> Option<usize> {
        let local_x = point.x.checked_sub(self.frame.x)?;
        let local = Position::new(local_x, self.frame.height / 2);
        self.slots.iter().position(|slot| slot.contains(local))
    }
}

fn clamp_cells(value: u32) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// One session's strip view: layout plus the animated container and icons.
#[derive(Debug, Clone)]
pub struct Strip {
    id: OverlayId,
    layout: StripLayout,
    container: Animated,
    icons: Vec<Animated>,
    highlighted: Option<usize>,
    icon_lift: f32,
}

impl Strip {
    pub fn new(id: OverlayId, layout: StripLayout, style: &PickerStyle) -> Self {
        let icons = vec![Animated::default(); layout.len()];
        Self {
            id,
            layout,
            container: Animated::new(Transform::IDENTITY.with_alpha(0.0)),
            icons,
            highlighted: None,
            icon_lift: style.icon_height as f32 / 2.0,
        }
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    pub fn container(&self) -> Transform {
        self.container.value()
    }

    pub fn icon(&self, index: usize) -> Transform {
        self.icons
            .get(index)
            .map(Animated::value)
            .unwrap_or_default()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Slide up from the control while fading in.
    pub fn reveal(&mut self, now: Instant) {
        let rise = self.layout.frame().height as f32;
        self.container
            .set(Transform::IDENTITY.translated(0.0, rise).with_alpha(0.0));
        self.container
            .animate_to(Transform::IDENTITY, Timing::spring(STRIP_ANIMATION), now);
    }

    /// Lift the icon at `index` by half its height, settle every other icon.
    pub fn highlight(&mut self, index: usize, now: Instant) {
        self.highlighted = Some(index);
        let lifted = Transform::IDENTITY.translated(0.0, -self.icon_lift);
        for (i, icon) in self.icons.iter_mut().enumerate() {
            let target = if i == index { lifted } else { Transform::IDENTITY };
            icon.animate_to(target, Timing::spring(STRIP_ANIMATION), now);
        }
    }

    /// Settle all icons, drop the strip back toward the control and fade it out.
    pub fn dismiss(&mut self, now: Instant) {
        for icon in &mut self.icons {
            icon.animate_to(Transform::IDENTITY, Timing::spring(STRIP_ANIMATION), now);
        }
        let dropped = Transform::IDENTITY
            .translated(0.0, self.icon_lift)
            .with_alpha(0.0);
        self.container
            .animate_to(dropped, Timing::spring(STRIP_ANIMATION), now);
    }

    /// Advance all animations. Returns `true` when the container's current
    /// transition completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        for icon in &mut self.icons {
            icon.tick(now);
        }
        self.container.tick(now)
    }

    pub fn is_animating(&self) -> bool {
        self.container.is_animating() || self.icons.iter().any(Animated::is_animating)
    }
}
