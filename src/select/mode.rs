//! Single- vs multiple-choice selection semantics.
//!
//! The two modes differ in the shape of the selection value and in what a
//! select gesture does to it. Each mode is a distinct type implementing
//! [`SelectionMode`], so a controller instantiated for one mode cannot be
//! handed the other mode's value shape.

use super::options::OptionIx;

/// Mutation and membership rules for one selection mode.
///
/// The selection value itself is owned by the caller. Mutations never touch
/// it in place; they return the replacement value, or `None` when the
/// gesture is a no-op and no notification should be emitted.
pub trait SelectionMode {
    /// Shape of the externally owned selection value.
    type Value: Clone + Default + PartialEq + std::fmt::Debug;

    /// Apply a select gesture for `ix` to `value`.
    fn select(value: &Self::Value, ix: OptionIx) -> Option<Self::Value>;

    /// The value a clear gesture resolves to.
    fn cleared() -> Self::Value;

    /// Whether `ix` is part of `value`.
    fn is_selected(value: &Self::Value, ix: OptionIx) -> bool;
}

/// Single-choice mode: at most one selected option.
///
/// Selecting the current option again is a no-op; there is no
/// deselect-by-reselect in this mode.
#[derive(Debug, Clone, Copy)]
pub struct Single;

impl SelectionMode for Single {
    type Value = Option<OptionIx>;

    fn select(value: &Self::Value, ix: OptionIx) -> Option<Self::Value> {
        if *value == Some(ix) {
            None
        } else {
            Some(Some(ix))
        }
    }

    fn cleared() -> Self::Value {
        None
    }

    fn is_selected(value: &Self::Value, ix: OptionIx) -> bool {
        *value == Some(ix)
    }
}

/// Multiple-choice mode: an ordered set of selected options.
///
/// Order reflects selection order, not list order. Selecting a present
/// handle removes it, keeping the relative order of the rest; selecting an
/// absent handle appends it.
#[derive(Debug, Clone, Copy)]
pub struct Multiple;

impl SelectionMode for Multiple {
    type Value = Vec<OptionIx>;

    fn select(value: &Self::Value, ix: OptionIx) -> Option<Self::Value> {
        if value.contains(&ix) {
            Some(value.iter().copied().filter(|v| *v != ix).collect())
        } else {
            let mut next = value.clone();
            next.push(ix);
            Some(next)
        }
    }

    fn cleared() -> Self::Value {
        Vec::new()
    }

    fn is_selected(value: &Self::Value, ix: OptionIx) -> bool {
        value.contains(&ix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_reselect_is_noop() {
        let value = Some(OptionIx(0));
        assert_eq!(Single::select(&value, OptionIx(0)), None);
    }

    #[test]
    fn test_single_select_replaces() {
        let value = Some(OptionIx(0));
        assert_eq!(Single::select(&value, OptionIx(2)), Some(Some(OptionIx(2))));
        assert_eq!(Single::select(&None, OptionIx(1)), Some(Some(OptionIx(1))));
    }

    #[test]
    fn test_multiple_select_appends_in_selection_order() {
        let value = vec![OptionIx(2), OptionIx(0)];
        assert_eq!(
            Multiple::select(&value, OptionIx(1)),
            Some(vec![OptionIx(2), OptionIx(0), OptionIx(1)])
        );
    }

    #[test]
    fn test_multiple_select_removes_preserving_order() {
        let value = vec![OptionIx(0), OptionIx(1), OptionIx(2)];
        assert_eq!(
            Multiple::select(&value, OptionIx(1)),
            Some(vec![OptionIx(0), OptionIx(2)])
        );
    }

    #[test]
    fn test_cleared_shapes() {
        assert_eq!(Single::cleared(), None);
        assert_eq!(Multiple::cleared(), Vec::new());
    }

    #[test]
    fn test_membership() {
        assert!(Single::is_selected(&Some(OptionIx(1)), OptionIx(1)));
        assert!(!Single::is_selected(&None, OptionIx(1)));
        assert!(Multiple::is_selected(&vec![OptionIx(3)], OptionIx(3)));
        assert!(!Multiple::is_selected(&vec![OptionIx(3)], OptionIx(0)));
    }
}
