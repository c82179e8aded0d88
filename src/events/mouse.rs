//! Mouse event handling.
//!
//! Mouse events are dispatched through the interaction registry, which is
//! populated by UI components during each render. Badge and clear regions
//! register above the container region, so a click on them resolves to the
//! scoped gesture and never falls through to the container toggle.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::App;

use super::Action;

/// Handle mouse events and return the appropriate action.
///
/// Clicks are hit-tested against the registry; a left click that lands on
/// no registered region blurs the focused field. Pointer movement drives
/// option-row highlighting.
pub fn handle_mouse_event(app: &App, mouse: MouseEvent) -> Action {
    let x = mouse.column;
    let y = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let action = app.interactions.handle_click(x, y);
            if matches!(action, Action::None) {
                Action::Blur
            } else {
                action
            }
        }
        MouseEventKind::Moved => app.interactions.handle_hover(x, y),
        _ => Action::None,
    }
}
