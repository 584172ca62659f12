//! Floating reaction strip drawn on the overlay layer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::picker::Strip;
use crate::reaction::Reaction;
use crate::tui::theme::*;

/// Below this opacity the strip is not drawn at all.
const MIN_VISIBLE_ALPHA: f32 = 0.05;

/// Below this opacity the strip is drawn dimmed.
const DIM_ALPHA: f32 = 0.6;

/// Render `strip` at its resting frame, offset by its animated transforms.
pub fn render_reaction_strip(frame: &mut Frame, strip: &Strip, reactions: &[Reaction]) {
    let bounds = frame.area();
    let container = strip.container();
    if container.alpha < MIN_VISIBLE_ALPHA {
        return;
    }

    let dx = container.column_offset();
    let dy = container.row_offset();
    let Some(strip_area) = offset_rect(strip.layout().frame(), dx, dy, bounds) else {
        return;
    };

    let mut base = Style::new().bg(STRIP_BG).fg(TEXT_WHITE);
    if container.alpha < DIM_ALPHA {
        base = base.add_modifier(Modifier::DIM);
    }

    frame.render_widget(Clear, strip_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(base.fg(STRIP_BORDER))
        .style(base);
    frame.render_widget(block, strip_area);

    for (index, reaction) in reactions.iter().enumerate() {
        let Some(slot) = strip.layout().slot_frame(index) else {
            continue;
        };
        let icon = strip.icon(index);
        let Some(icon_area) = offset_rect(
            slot,
            dx + icon.column_offset(),
            dy + icon.row_offset(),
            bounds,
        ) else {
            continue;
        };

        let mut icon_style = base.fg(reaction.color.unwrap_or(TEXT_WHITE));
        if strip.highlighted() == Some(index) {
            icon_style = icon_style.add_modifier(Modifier::BOLD);
        }

        let paragraph = Paragraph::new(Line::styled(reaction.glyph().to_string(), icon_style))
            .style(base)
            .centered();
        frame.render_widget(paragraph, icon_area);
    }

    // Label of the highlighted reaction just below the strip
    if let Some(reaction) = strip.highlighted().and_then(|i| reactions.get(i)) {
        let label_area = Rect {
            y: strip_area.bottom(),
            height: 1,
            ..strip_area
        };
        if label_area.y < bounds.bottom() {
            let color = reaction.color.unwrap_or(TEXT_WHITE);
            let label = Paragraph::new(Line::styled(
                reaction.label_text().to_string(),
                Style::new().fg(color).add_modifier(Modifier::BOLD),
            ))
            .centered();
            frame.render_widget(Clear, label_area);
            frame.render_widget(label, label_area);
        }
    }
}

/// Shift `rect` by whole cells and clip it to `bounds`.
fn offset_rect(rect: Rect, dx: i16, dy: i16, bounds: Rect) -> Option<Rect> {
    let x = i32::from(rect.x) + i32::from(dx);
    let y = i32::from(rect.y) + i32::from(dy);

    let left = x.max(i32::from(bounds.x));
    let top = y.max(i32::from(bounds.y));
    let right = (x + i32::from(rect.width)).min(i32::from(bounds.right()));
    let bottom = (y + i32::from(rect.height)).min(i32::from(bounds.bottom()));

    if right <= left || bottom <= top {
        return None;
    }

    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}
