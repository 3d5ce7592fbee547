//! Error types for the aging Game of Life engine

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the core engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Index outside the grid dimensions. This indicates caller misuse:
    /// the stepper's own iteration never goes out of bounds.
    #[error("coordinates ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Paired grids of unequal size passed to `step` or `is_stable`
    #[error("grid dimensions differ: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// Seed file body inconsistent with its declared dimensions
    #[error("malformed grid description: {0}")]
    MalformedGrid(String),

    /// Seed file missing or unreadable; recoverable by falling back to a
    /// random configuration
    #[error("cannot open seed file {path}")]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
