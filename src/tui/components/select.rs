//! Dropdown field component.
//!
//! Renders one field's container line (label, current value or badge row,
//! clear affordance, caret) and, while open, the popup option list. All
//! mouse regions are registered here during render; the scoped affordances
//! (badges, clear) sit above the container toggle in priority.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::Field;
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractionRegistry, InteractiveRegion};
use crate::tui::theme::*;

/// Priority of the container line (lowest, everything overlaps it).
const CONTAINER_PRIORITY: i32 = 0;
/// Priority of badges and the clear affordance: above their own container,
/// below any popup that happens to overlay them.
const SCOPED_PRIORITY: i32 = 5;
/// Priority of popup option rows (above every field line they overlap).
const POPUP_PRIORITY: i32 = 10;

/// Width of the label column, so the value columns line up across fields.
const LABEL_WIDTH: usize = 10;

fn push_span(spans: &mut Vec<Span<'static>>, col: &mut u16, text: String, style: Style) -> (u16, u16) {
    let width = text.chars().count() as u16;
    let start = *col;
    spans.push(Span::styled(text, style));
    *col += width;
    (start, width)
}

/// Render a field's container line and register its mouse regions.
pub fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: &Field,
    index: usize,
    focused: bool,
    registry: &mut InteractionRegistry,
) {
    let mut spans: Vec<Span> = Vec::new();
    let mut col = area.x;

    // Label column.
    let name_style = if focused {
        Style::new().fg(ACCENT_BLUE).bold()
    } else {
        Style::new().fg(ACCENT_BLUE)
    };
    push_span(
        &mut spans,
        &mut col,
        format!("{:<width$}", field.name(), width = LABEL_WIDTH),
        name_style,
    );

    // Current value: badge row in multiple mode, plain label otherwise.
    if field.is_multiple() {
        let badges = field.badges();
        if badges.is_empty() {
            push_span(
                &mut spans,
                &mut col,
                "(none)".to_string(),
                Style::new().fg(TEXT_DIM),
            );
        }
        for (ix, option) in badges {
            let (start, width) = push_span(
                &mut spans,
                &mut col,
                format!("[{} ×]", option.label),
                Style::new().fg(TEXT_WHITE).bg(BADGE_BG),
            );
            registry.register(
                InteractiveRegion::clickable(
                    "badge",
                    ClickRegion::new(start, area.y, width, 1),
                    Action::RemoveBadge { field: index, ix },
                )
                .with_priority(SCOPED_PRIORITY),
            );
            push_span(&mut spans, &mut col, " ".to_string(), Style::new());
        }
    } else {
        let style = if field.has_selection() {
            Style::new().fg(TEXT_WHITE)
        } else {
            Style::new().fg(TEXT_DIM)
        };
        push_span(&mut spans, &mut col, field.value_summary(), style);
    }

    // Clear affordance, scoped so it never doubles as a toggle.
    push_span(&mut spans, &mut col, "  ".to_string(), Style::new());
    let clear_style = if field.has_selection() {
        Style::new().fg(ACCENT_CORAL)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let (clear_start, clear_width) =
        push_span(&mut spans, &mut col, "×".to_string(), clear_style);
    registry.register(
        InteractiveRegion::clickable(
            "clear",
            ClickRegion::new(clear_start, area.y, clear_width, 1),
            Action::ClearField(index),
        )
        .with_priority(SCOPED_PRIORITY),
    );

    // Caret.
    let caret = if field.is_open() { " ▴" } else { " ▾" };
    push_span(
        &mut spans,
        &mut col,
        caret.to_string(),
        Style::new().fg(TEXT_DIM),
    );

    // The whole line is the activation surface.
    registry.register(
        InteractiveRegion::clickable(
            "field",
            ClickRegion::from(area),
            Action::ToggleField(index),
        )
        .with_priority(CONTAINER_PRIORITY),
    );

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the popup option list under an open field's line.
pub fn render_options(
    frame: &mut Frame,
    line_area: Rect,
    field: &Field,
    index: usize,
    registry: &mut InteractionRegistry,
) {
    let frame_area = frame.area();
    let options = field.options();

    let popup_x = line_area.x + LABEL_WIDTH as u16;
    let rows = options.len().max(1) as u16;
    let longest = options
        .iter()
        .map(|o| o.label.chars().count())
        .max()
        .unwrap_or(0);
    let width = ((longest + 8) as u16)
        .max(18)
        .min(frame_area.width.saturating_sub(popup_x));
    let height = (rows + 2).min(frame_area.height.saturating_sub(line_area.y + 1));
    if width < 4 || height < 3 {
        return;
    }

    let popup_area = Rect::new(popup_x, line_area.y + 1, width, height);

    // Clear the area behind the popup.
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = Vec::new();

    if options.is_empty() {
        lines.push(Line::styled("  (no options)", Style::new().fg(TEXT_DIM)));
    }

    // Keep the highlighted row inside the window when the popup is shorter
    // than the list.
    let visible = (height - 2) as usize;
    let offset = field
        .highlighted_index()
        .saturating_sub(visible.saturating_sub(1));

    for (i, option) in options.iter().enumerate().skip(offset).take(visible) {
        let is_highlighted = field.is_row_highlighted(i);
        let is_selected = field.is_row_selected(i);
        let cursor = if is_highlighted { "> " } else { "  " };

        let mut row_style = if is_highlighted {
            Style::new().fg(TEXT_WHITE).bg(HIGHLIGHT_BG).bold()
        } else {
            Style::new().fg(TEXT_WHITE)
        };
        if is_selected {
            row_style = row_style.fg(ACCENT_MINT);
        }

        let check = if is_selected { " ✓" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(cursor, row_style),
            Span::styled(option.label.clone(), row_style),
            Span::styled(check, row_style),
        ]));

        registry.register(
            InteractiveRegion::clickable(
                "option",
                ClickRegion::new(
                    popup_area.x + 1,
                    popup_area.y + 1 + (i - offset) as u16,
                    popup_area.width.saturating_sub(2),
                    1,
                ),
                Action::ClickOption { field: index, index: i },
            )
            .with_hover(Action::HoverOption { field: index, index: i })
            .with_priority(POPUP_PRIORITY),
        );
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(ACCENT_MINT));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
