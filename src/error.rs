//! Domain error types for dropsel.
//!
//! The dropdown control itself has no error paths: invalid gestures degrade
//! to no-ops. Errors only arise at the edges, when loading configuration or
//! talking to the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for dropsel.
#[derive(Debug, Error)]
pub enum DropselError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for DropselError.
pub type Result<T> = std::result::Result<T, DropselError>;
