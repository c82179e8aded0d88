//! Dropdown controller: open/closed state, highlight navigation, and
//! mode-dispatched selection mutations.

use std::marker::PhantomData;

use super::mode::SelectionMode;
use super::options::{OptionIx, SelectOption};

/// Keys the dropdown reacts to. Everything else is ignored by the control
/// and left to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKey {
    /// Enter or Space.
    Activate,
    /// ArrowUp.
    Up,
    /// ArrowDown.
    Down,
    /// Escape.
    Escape,
}

/// Interaction state machine for one dropdown.
///
/// The controller owns the option list and the ephemeral UI state (open flag,
/// highlighted index). The selection value stays with the caller: gesture
/// methods borrow the current value and return `Some(replacement)` when a
/// mutation occurred, `None` when the gesture was a no-op. The caller applies
/// the replacement itself, so there is never a second copy of the selection
/// to drift out of sync.
///
/// `M` fixes the mode for the lifetime of the instance; a controller built
/// for [`Single`](super::Single) cannot be called with a
/// [`Multiple`](super::Multiple) value or vice versa.
#[derive(Debug, Clone)]
pub struct SelectController<M: SelectionMode> {
    options: Vec<SelectOption>,
    open: bool,
    highlighted: usize,
    _mode: PhantomData<M>,
}

impl<M: SelectionMode> SelectController<M> {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self {
            options,
            open: false,
            highlighted: 0,
            _mode: PhantomData,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn option(&self, ix: OptionIx) -> Option<&SelectOption> {
        self.options.get(ix.index())
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Replace the option list. Handles minted against the old list are
    /// stale afterwards; the ephemeral state resets.
    #[allow(dead_code)]
    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        self.open = false;
        self.highlighted = 0;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn is_highlighted(&self, index: usize) -> bool {
        index == self.highlighted
    }

    /// Whether `ix` is part of `value`.
    pub fn is_selected(&self, value: &M::Value, ix: OptionIx) -> bool {
        M::is_selected(value, ix)
    }

    /// Open the dropdown. The highlight resets to the first option on every
    /// closed-to-open transition; reopening never remembers the old position.
    pub fn open(&mut self) {
        if !self.open {
            self.open = true;
            self.highlighted = 0;
        }
    }

    /// Close the dropdown without committing. The highlight is left as-is;
    /// the reset happens on the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Primary activation: open when closed, dismiss when open.
    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Dismiss on focus loss.
    pub fn blur(&mut self) {
        self.close();
    }

    /// Move the highlight one row up, clamped at the first option.
    pub fn highlight_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Move the highlight one row down, clamped at the last option.
    pub fn highlight_next(&mut self) {
        if !self.is_empty() {
            self.highlighted = (self.highlighted + 1).min(self.len() - 1);
        }
    }

    /// Move the highlight to a hovered row. Only meaningful while open;
    /// out-of-range rows are ignored.
    pub fn hover(&mut self, index: usize) {
        if self.open && index < self.len() {
            self.highlighted = index;
        }
    }

    /// Apply the mode's select rule for `ix` against `value`.
    ///
    /// Returns the replacement value, or `None` when the gesture is a no-op
    /// (single-mode reselect, or a handle pointing outside the list).
    pub fn select(&self, value: &M::Value, ix: OptionIx) -> Option<M::Value> {
        if ix.index() >= self.len() {
            return None;
        }
        M::select(value, ix)
    }

    /// Click on an option row while open: select it, then close.
    ///
    /// Ignored while closed (there is no row to click). The close happens
    /// even when the select itself was a no-op.
    pub fn click_option(&mut self, value: &M::Value, index: usize) -> Option<M::Value> {
        if !self.open || index >= self.len() {
            return None;
        }
        let change = self.select(value, OptionIx(index));
        self.close();
        change
    }

    /// Commit the highlighted option, then close.
    ///
    /// With an empty option list the dropdown still closes but nothing is
    /// committed.
    pub fn commit(&mut self, value: &M::Value) -> Option<M::Value> {
        if !self.open {
            return None;
        }
        let change = if self.highlighted < self.len() {
            self.select(value, OptionIx(self.highlighted))
        } else {
            None
        };
        self.close();
        change
    }

    /// Clear the selection. Always a notification, even when the selection
    /// is already empty.
    pub fn clear(&self) -> M::Value {
        M::cleared()
    }

    /// Route one key press through the state machine.
    ///
    /// While closed, activation and arrows open the dropdown (highlight
    /// reset to 0) and Escape is ignored. While open, arrows move the
    /// highlight, Escape dismisses without committing, and activation
    /// commits the highlighted option.
    pub fn handle_key(&mut self, value: &M::Value, key: SelectKey) -> Option<M::Value> {
        if !self.open {
            match key {
                SelectKey::Activate | SelectKey::Up | SelectKey::Down => self.open(),
                SelectKey::Escape => {}
            }
            return None;
        }

        match key {
            SelectKey::Activate => self.commit(value),
            SelectKey::Up => {
                self.highlight_prev();
                None
            }
            SelectKey::Down => {
                self.highlight_next();
                None
            }
            SelectKey::Escape => {
                self.close();
                None
            }
        }
    }
}

impl SelectController<super::Multiple> {
    /// Remove one selected handle via its badge affordance.
    ///
    /// Unlike [`select`](Self::select) this never appends: removing a handle
    /// that is no longer selected is a no-op. Open flag and highlight are
    /// untouched.
    pub fn remove(&self, value: &Vec<OptionIx>, ix: OptionIx) -> Option<Vec<OptionIx>> {
        if !value.contains(&ix) {
            return None;
        }
        Some(value.iter().copied().filter(|v| *v != ix).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::{Multiple, Single};

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("Apple", 1),
            SelectOption::new("Banana", 2),
            SelectOption::new("Cherry", 3),
        ]
    }

    #[test]
    fn test_navigation_clamps_to_bounds() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        select.open();

        select.highlight_prev();
        assert_eq!(select.highlighted_index(), 0);

        for _ in 0..10 {
            select.highlight_next();
        }
        assert_eq!(select.highlighted_index(), 2);
    }

    #[test]
    fn test_navigation_on_empty_list_never_moves() {
        let mut select: SelectController<Single> = SelectController::new(vec![]);
        select.open();

        select.highlight_next();
        select.highlight_prev();
        assert_eq!(select.highlighted_index(), 0);
    }

    #[test]
    fn test_open_resets_highlight() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        select.open();
        select.highlight_next();
        select.highlight_next();
        assert_eq!(select.highlighted_index(), 2);

        select.close();
        select.open();
        assert_eq!(select.highlighted_index(), 0);
    }

    #[test]
    fn test_close_keeps_highlight_until_reopen() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        select.open();
        select.highlight_next();
        select.handle_key(&None, SelectKey::Escape);
        assert_eq!(select.highlighted_index(), 1);
    }

    #[test]
    fn test_single_reselect_emits_nothing() {
        let select: SelectController<Single> = SelectController::new(fruit());
        let value = Some(OptionIx(1));

        assert_eq!(select.select(&value, OptionIx(1)), None);
        assert_eq!(select.select(&value, OptionIx(0)), Some(Some(OptionIx(0))));
    }

    #[test]
    fn test_multiple_append_and_remove_preserve_order() {
        let select: SelectController<Multiple> = SelectController::new(fruit());
        let value = vec![OptionIx(0), OptionIx(1)];

        // Removing Apple keeps Banana.
        assert_eq!(select.select(&value, OptionIx(0)), Some(vec![OptionIx(1)]));
        // Selecting Cherry appends at the end.
        assert_eq!(
            select.select(&value, OptionIx(2)),
            Some(vec![OptionIx(0), OptionIx(1), OptionIx(2)])
        );
    }

    #[test]
    fn test_select_out_of_range_is_noop() {
        let select: SelectController<Multiple> = SelectController::new(fruit());
        assert_eq!(select.select(&vec![], OptionIx(3)), None);
    }

    #[test]
    fn test_clear_always_emits() {
        let single: SelectController<Single> = SelectController::new(fruit());
        assert_eq!(single.clear(), None);

        let multi: SelectController<Multiple> = SelectController::new(fruit());
        assert_eq!(multi.clear(), Vec::new());
        // Already empty still resolves to the cleared value.
        assert_eq!(multi.clear(), multi.clear());
    }

    #[test]
    fn test_escape_closes_without_commit() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        select.open();
        select.highlight_next();

        assert_eq!(select.handle_key(&None, SelectKey::Escape), None);
        assert!(!select.is_open());
    }

    #[test]
    fn test_escape_while_closed_is_noop() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        assert_eq!(select.handle_key(&None, SelectKey::Escape), None);
        assert!(!select.is_open());
    }

    #[test]
    fn test_commit_equals_click() {
        let value: Vec<OptionIx> = vec![];

        let mut by_key: SelectController<Multiple> = SelectController::new(fruit());
        by_key.open();
        by_key.highlight_next();
        let committed = by_key.handle_key(&value, SelectKey::Activate);

        let mut by_mouse: SelectController<Multiple> = SelectController::new(fruit());
        by_mouse.open();
        let clicked = by_mouse.click_option(&value, 1);

        assert_eq!(committed, clicked);
        assert_eq!(committed, Some(vec![OptionIx(1)]));
        assert!(!by_key.is_open());
        assert!(!by_mouse.is_open());
    }

    #[test]
    fn test_commit_on_empty_list_closes_silently() {
        let mut select: SelectController<Multiple> = SelectController::new(vec![]);
        select.open();

        assert_eq!(select.handle_key(&vec![], SelectKey::Activate), None);
        assert!(!select.is_open());
    }

    #[test]
    fn test_click_while_closed_is_ignored() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        assert_eq!(select.click_option(&None, 1), None);
        assert!(!select.is_open());
    }

    #[test]
    fn test_hover_moves_highlight_only_while_open() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        select.hover(2);
        assert_eq!(select.highlighted_index(), 0);

        select.open();
        select.hover(2);
        assert_eq!(select.highlighted_index(), 2);

        select.hover(9);
        assert_eq!(select.highlighted_index(), 2);
    }

    #[test]
    fn test_keys_while_closed_open_with_highlight_reset() {
        for key in [SelectKey::Activate, SelectKey::Up, SelectKey::Down] {
            let mut select: SelectController<Single> = SelectController::new(fruit());
            select.open();
            select.highlight_next();
            select.close();

            assert_eq!(select.handle_key(&None, key), None);
            assert!(select.is_open());
            assert_eq!(select.highlighted_index(), 0);
        }
    }

    #[test]
    fn test_arrow_sequence_commits_third_option() {
        // open, down, down, enter on an empty multi selection picks Cherry.
        let mut select: SelectController<Multiple> = SelectController::new(fruit());
        let value: Vec<OptionIx> = vec![];

        assert_eq!(select.handle_key(&value, SelectKey::Activate), None);
        assert_eq!(select.handle_key(&value, SelectKey::Down), None);
        assert_eq!(select.handle_key(&value, SelectKey::Down), None);
        assert_eq!(select.highlighted_index(), 2);

        let change = select.handle_key(&value, SelectKey::Activate);
        assert_eq!(change, Some(vec![OptionIx(2)]));
        assert!(!select.is_open());
    }

    #[test]
    fn test_click_replaces_single_selection() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        let value = Some(OptionIx(0));

        select.open();
        let change = select.click_option(&value, 1);
        assert_eq!(change, Some(Some(OptionIx(1))));
        assert!(!select.is_open());
    }

    #[test]
    fn test_duplicate_options_are_distinct_entries() {
        let options = vec![SelectOption::new("Apple", 1), SelectOption::new("Apple", 1)];
        let select: SelectController<Multiple> = SelectController::new(options);
        let value = vec![OptionIx(0)];

        assert!(select.is_selected(&value, OptionIx(0)));
        assert!(!select.is_selected(&value, OptionIx(1)));
        assert_eq!(
            select.select(&value, OptionIx(1)),
            Some(vec![OptionIx(0), OptionIx(1)])
        );
    }

    #[test]
    fn test_badge_remove_never_appends() {
        let select: SelectController<Multiple> = SelectController::new(fruit());
        let value = vec![OptionIx(0), OptionIx(2)];

        assert_eq!(select.remove(&value, OptionIx(0)), Some(vec![OptionIx(2)]));
        assert_eq!(select.remove(&value, OptionIx(1)), None);
    }

    #[test]
    fn test_set_options_resets_ephemeral_state() {
        let mut select: SelectController<Single> = SelectController::new(fruit());
        select.open();
        select.highlight_next();

        select.set_options(vec![SelectOption::new("Date", 4)]);
        assert!(!select.is_open());
        assert_eq!(select.highlighted_index(), 0);
    }
}
