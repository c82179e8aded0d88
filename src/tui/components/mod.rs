//! UI components for the TUI.
//!
//! - `select` - dropdown field line, badges, clear affordance, popup list

mod select;

pub use select::{render_field, render_options};
