//! Option entries and the stable handles that identify them.

use serde::Deserialize;
use std::fmt;

/// A labeled entry in a dropdown's option list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    /// Display text shown in the option row and in badges.
    pub label: String,
    /// Caller-defined payload carried alongside the label.
    pub value: i64,
}

impl SelectOption {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl fmt::Display for SelectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Stable handle to a position in one options list.
///
/// Selection membership is decided by handle equality, never by comparing
/// labels or values. Two structurally identical options at different
/// positions have different handles and stay distinct in every membership
/// check. A handle is only meaningful for the options list it was minted
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionIx(pub usize);

impl OptionIx {
    /// Position of the referenced option within its list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for OptionIx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structurally_equal_handles_stay_distinct() {
        let a = SelectOption::new("Apple", 1);
        let b = SelectOption::new("Apple", 1);
        assert_eq!(a, b);
        assert_ne!(OptionIx(0), OptionIx(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(SelectOption::new("Banana", 2).to_string(), "Banana");
        assert_eq!(OptionIx(3).to_string(), "#3");
    }
}
