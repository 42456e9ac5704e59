// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the editor can report.
#[derive(Debug, Error)]
pub enum MapError {
    /// A cell was addressed outside `[0, size)`. The caller is expected to
    /// clip pointer coordinates before painting, so this indicates a bug.
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfRange { x: usize, y: usize, size: usize },

    #[error("invalid cell value {0}; expected 0 (empty), 1 (wall), 2 (tree) or 3 (rock)")]
    InvalidCellValue(u8),

    #[error("grid is not square: column {column} has {len} cells, expected {expected}")]
    Ragged {
        column: usize,
        len: usize,
        expected: usize,
    },

    /// The map file could not be written. Grid state is untouched.
    #[error("failed to write map to {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("map encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, MapError>;
