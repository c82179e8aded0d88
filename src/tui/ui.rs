use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::tui::components::{render_field, render_options};
use crate::tui::theme::*;

/// Vertical pitch of the form: one line per field plus one spacer.
const FIELD_PITCH: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Regions are rebuilt from scratch on every frame.
    app.interactions.clear();

    let area = frame.area();

    // Main vertical layout: logo, form, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Form
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);
    render_form(frame, main_layout[1], app);
    render_hotkeys(frame, main_layout[2], app);
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" drop", Style::new().fg(ACCENT_CORAL).bold()),
        Span::styled("sel", Style::new().fg(ACCENT_GOLD).bold()),
        Span::styled("  dropdown fields for the terminal", Style::new().fg(TEXT_DIM)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_form(frame: &mut Frame, area: Rect, app: &mut App) {
    let App {
        fields,
        focus,
        interactions,
        ..
    } = app;

    // Field lines first, so an open popup can overlay the lines below it.
    let mut line_areas: Vec<Rect> = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        let y = area.y + i as u16 * FIELD_PITCH;
        if y >= area.y + area.height {
            break;
        }
        let line_area = Rect::new(
            area.x + 1,
            y,
            area.width.saturating_sub(2),
            1,
        );
        render_field(frame, line_area, field, i, i == *focus, interactions);
        line_areas.push(line_area);
    }

    // Only the focused field can be open; its popup draws on top.
    if let Some(field) = fields.get(*focus) {
        if field.is_open() {
            if let Some(line_area) = line_areas.get(*focus) {
                render_options(frame, *line_area, field, *focus, interactions);
            }
        }
    }
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let open = app.focused_field().map(|f| f.is_open()).unwrap_or(false);

    let hotkeys = if open {
        Line::from(vec![
            Span::styled(" [↑/↓]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" navigate · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" select · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" close", Style::new().fg(TEXT_DIM)),
        ])
    } else {
        Line::from(vec![
            Span::styled(" [Tab]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" next field · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" open · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[×]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" clear · ", Style::new().fg(TEXT_DIM)),
            Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" quit", Style::new().fg(TEXT_DIM)),
        ])
    };

    frame.render_widget(Paragraph::new(hotkeys), area);
}
