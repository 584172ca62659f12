//! The picker control itself: current icon plus label.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::overlay::OverlayHost;
use crate::picker::ReactionPicker;
use crate::tui::theme::*;

/// Scale above which the current icon is drawn emphasized.
const POP_EMPHASIS: f32 = 1.08;

/// Render the control into `area`. The caller has already set the picker's frame.
pub fn render_reaction_button<H: OverlayHost>(
    frame: &mut Frame,
    area: Rect,
    picker: &ReactionPicker<H>,
) {
    let style = picker.style();

    let line = match picker.current() {
        Some(current) => {
            let color = current.color.unwrap_or(TEXT_WHITE);

            let mut icon_style = Style::new().fg(color);
            if picker.current_icon().scale > POP_EMPHASIS {
                icon_style = icon_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            let glyph = current.glyph();
            let icon_cells = glyph_width(glyph);
            let pad = usize::from(style.current_icon_width).saturating_sub(icon_cells);

            Line::from(vec![
                Span::styled(glyph.to_string(), icon_style),
                Span::raw(" ".repeat(pad + 1)),
                Span::styled(current.label_text().to_string(), style.label_style.fg(color)),
            ])
        }
        None => Line::styled("(no reactions)", Style::new().fg(TEXT_DIM)),
    };

    let border_color = if picker.selected_reaction().is_some() {
        ACCENT_MINT
    } else {
        TEXT_DIM
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(border_color));

    let paragraph = Paragraph::new(line).block(block).centered();
    frame.render_widget(paragraph, area);
}

/// Rough display width of an icon glyph: emoji take two cells, ASCII one.
pub fn glyph_width(glyph: &str) -> usize {
    glyph
        .chars()
        .filter(|c| !matches!(*c, '\u{FE0F}' | '\u{200D}'))
        .map(|c| if c.is_ascii() { 1 } else { 2 })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_width() {
        assert_eq!(glyph_width("L"), 1);
        assert_eq!(glyph_width("👍"), 2);
        assert_eq!(glyph_width("❤️"), 2);
        assert_eq!(glyph_width(""), 0);
    }
}
