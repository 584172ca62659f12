//! Log of the host's selection callbacks.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::theme::*;

/// Render the most recent `history` entries, newest last.
pub fn render_status_log(frame: &mut Frame, area: Rect, history: &[String]) {
    let visible = area.height.saturating_sub(2) as usize;
    let skip = history.len().saturating_sub(visible);

    let mut lines: Vec<Line> = history
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", Style::new().fg(ACCENT_GOLD)),
                Span::styled(entry.as_str(), Style::new().fg(TEXT_WHITE)),
            ])
        })
        .collect();

    if lines.is_empty() {
        lines.push(Line::styled(
            "Tap or long-press the button",
            Style::new().fg(TEXT_DIM),
        ));
    }

    let block = Block::default()
        .title(" Callbacks ")
        .title_style(Style::new().fg(ACCENT_GOLD).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
