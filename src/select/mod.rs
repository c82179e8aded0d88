//! Dropdown selection control.
//!
//! The control is split into the option list types, the per-mode selection
//! semantics, and the controller that owns the open/highlight state machine.
//! Rendering is left to the `tui` layer, which only reads the controller's
//! derived view state.

mod controller;
mod mode;
mod options;

pub use controller::{SelectController, SelectKey};
pub use mode::{Multiple, SelectionMode, Single};
pub use options::{OptionIx, SelectOption};
