//! Error types for antworld_core.
//!
//! Direct field accessors on [`crate::AntWorld`] treat an out-of-bounds cell as a
//! broken caller contract and panic. The checked `try_*` accessors on
//! [`crate::grid::GridStore`] and the constructors report through [`WorldError`].

use thiserror::Error;

/// Main error type for world construction and checked grid access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    /// Position truncates to a cell outside the grid
    #[error("Position ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },

    /// Grid cannot be built with these dimensions
    #[error("Invalid world dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Configuration rejected by validation
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for antworld_core operations.
pub type Result<T> = std::result::Result<T, WorldError>;

impl WorldError {
    /// Creates a new configuration error.
    #[must_use]
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
