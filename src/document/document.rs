// src/document/document.rs

use std::fs;
use std::path::{Path, PathBuf};

use log::{error, info};

use crate::error::{MapError, Result};
use crate::map::Grid;

/// The on-disk side of a map: where it is saved and how it is encoded.
///
/// The file is a bare JSON array of `size` arrays of `size` integer cell
/// codes, outer index = column. No header, no version.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
}

impl Document {
    /// Create a document that saves to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Encodes the whole grid as one JSON document.
    pub fn encode(grid: &Grid) -> Result<String> {
        Ok(serde_json::to_string(grid)?)
    }

    /// Rebuilds a grid from an encoded map, rejecting ragged or unknown cells.
    pub fn decode(text: &str) -> Result<Grid> {
        Ok(serde_json::from_str(text)?)
    }

    /// Writes the grid to this document's path, replacing any previous file.
    ///
    /// The map is encoded in memory first, so an encoding failure leaves an
    /// existing file untouched. The grid itself is only read.
    pub fn save(&self, grid: &Grid) -> Result<()> {
        let json = Self::encode(grid)?;
        fs::write(&self.path, json).map_err(|source| {
            error!("Failed to write {}: {}", self.path.display(), source);
            MapError::Storage {
                path: self.path.clone(),
                source,
            }
        })?;
        info!("Map saved to {}", self.path.display());
        Ok(())
    }
}
