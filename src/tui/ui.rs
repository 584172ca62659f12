use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::components::*;
use super::theme::*;
use crate::app::App;

/// Width of the picker control on the demo screen.
const BUTTON_WIDTH: u16 = 24;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main vertical layout: title, space for the strip, button, callbacks, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2),  // Title + spacing
        Constraint::Min(5),     // Room above the button for the strip
        Constraint::Length(3),  // Button
        Constraint::Length(1),  // Gap
        Constraint::Length(8),  // Callback log
        Constraint::Length(1),  // Hotkeys
    ])
    .split(area);

    render_title(frame, main_layout[0]);

    // Lay out the control before drawing so gestures and the strip use this frame
    let button_area = centered(main_layout[2], BUTTON_WIDTH);
    app.picker.set_frame(button_area);
    app.picker.host_mut().set_bounds(area);

    render_reaction_button(frame, button_area, &app.picker);
    render_status_log(frame, centered(main_layout[4], 48), &app.history);
    render_hotkeys(frame, main_layout[5]);

    // Overlays last so they draw above everything else
    if let Some(strip) = app.picker.strip() {
        let hosted = app.picker.host().frame_of(strip.id()).is_some();
        if hosted {
            render_reaction_strip(frame, strip, app.picker.reactions());
        }
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled("reaction", Style::new().fg(ACCENT_CORAL).add_modifier(Modifier::BOLD)),
        Span::styled("-", Style::new().fg(TEXT_DIM)),
        Span::styled("picker", Style::new().fg(ACCENT_LIGHT_BLUE).add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(title).centered(), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect) {
    let hotkeys = Line::from(vec![
        Span::styled("[click]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" tap · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[hold + drag]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" pick · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" tap · ", Style::new().fg(TEXT_DIM)),
        Span::styled("[q]", Style::new().fg(ACCENT_LIGHT_BLUE)),
        Span::styled(" quit", Style::new().fg(TEXT_DIM)),
    ]);
    frame.render_widget(Paragraph::new(hotkeys).centered(), area);
}

/// Horizontally centered sub-area of at most `width` columns.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    Rect::new(x, area.y, width, area.height)
}
