//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents dispatched by the keyboard and mouse
//! handlers and processed by the App to update state.

use crate::select::{OptionIx, SelectKey};

/// Actions that can be dispatched from event handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do.
    None,

    // === Application ===
    /// Quit the application.
    Quit,

    // === Focus ===
    /// Move focus to the next field.
    FocusNext,
    /// Move focus to the previous field.
    FocusPrev,
    /// Focus lost (click outside every interactive region).
    Blur,

    // === Dropdown gestures ===
    /// Key routed to the focused field's dropdown.
    Key(SelectKey),
    /// Toggle a field's dropdown open/closed (container click).
    ToggleField(usize),
    /// Highlight an option row under the pointer.
    HoverOption { field: usize, index: usize },
    /// Select an option row and close the dropdown.
    ClickOption { field: usize, index: usize },
    /// Remove one selected entry via its badge.
    RemoveBadge { field: usize, ix: OptionIx },
    /// Clear a field's whole selection.
    ClearField(usize),
}
