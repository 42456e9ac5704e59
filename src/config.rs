// src/config.rs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::editor::generator::{DEFAULT_SPARSITY, DEFAULT_WALL_DENSITY, MAX_SPARSITY, MIN_SPARSITY};
use crate::error::{MapError, Result};
use crate::map::{DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
use crate::utils::util::in_range;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "map_editor.json";
pub const DEFAULT_OUTPUT_PATH: &str = "wall_map.json";
/// Pixels per cell on the canvas.
pub const DEFAULT_CELL_SIZE: u32 = 6;

/// Editor settings. Every field is optional in the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_size: usize,
    pub cell_size: u32,
    pub output_path: PathBuf,
    /// Initial value of the sparsity slider.
    pub sparsity: f64,
    pub wall_density: f64,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            sparsity: DEFAULT_SPARSITY,
            wall_density: DEFAULT_WALL_DENSITY,
            seed: None,
        }
    }
}

impl EditorConfig {
    /// Parses and validates a config from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| MapError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: EditorConfig =
            serde_json::from_str(&text).map_err(|source| MapError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `explicit` if given. Otherwise tries [`DEFAULT_CONFIG_FILE`] and
    /// falls back to defaults when it does not exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let path = Path::new(DEFAULT_CONFIG_FILE);
        match Self::from_file(path) {
            Err(MapError::ConfigRead { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(MapError::InvalidConfig("grid_size must be at least 1".into()));
        }
        if self.grid_size > MAX_GRID_SIZE {
            return Err(MapError::InvalidConfig(format!(
                "grid_size {} exceeds the maximum of {}",
                self.grid_size, MAX_GRID_SIZE
            )));
        }
        if self.cell_size == 0 {
            return Err(MapError::InvalidConfig("cell_size must be at least 1".into()));
        }
        if !in_range(self.sparsity, MIN_SPARSITY, MAX_SPARSITY) {
            return Err(MapError::InvalidConfig(format!(
                "sparsity {} is outside [{}, {}]",
                self.sparsity, MIN_SPARSITY, MAX_SPARSITY
            )));
        }
        if !in_range(self.wall_density, 0.0, 1.0) {
            return Err(MapError::InvalidConfig(format!(
                "wall_density {} is outside [0, 1]",
                self.wall_density
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wall_map_editor_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_values() {
        let config = EditorConfig::default();
        assert_eq!(config.grid_size, 100);
        assert_eq!(config.cell_size, 6);
        assert_eq!(config.output_path, PathBuf::from("wall_map.json"));
        assert_eq!(config.sparsity, 0.05);
        assert_eq!(config.wall_density, 0.3);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let path = temp_config("partial", r#"{ "grid_size": 20, "seed": 7 }"#);
        let config = EditorConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.grid_size, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(config.wall_density, DEFAULT_WALL_DENSITY);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad = [
            EditorConfig { grid_size: 0, ..Default::default() },
            EditorConfig { cell_size: 0, ..Default::default() },
            EditorConfig { sparsity: 0.9, ..Default::default() },
            EditorConfig { wall_density: -0.1, ..Default::default() },
            EditorConfig { wall_density: f64::NAN, ..Default::default() },
        ];
        for config in bad {
            assert!(matches!(config.validate(), Err(MapError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_oversized_grid_rejected() {
        for grid_size in [MAX_GRID_SIZE + 1, 50_000, 1usize << 32] {
            let config = EditorConfig { grid_size, ..Default::default() };
            assert!(matches!(config.validate(), Err(MapError::InvalidConfig(_))));
        }
        let largest = EditorConfig { grid_size: MAX_GRID_SIZE, ..Default::default() };
        assert!(largest.validate().is_ok());
    }

    #[test]
    fn test_oversized_grid_in_file_rejected() {
        let path = temp_config("oversized", r#"{ "grid_size": 4294967296 }"#);
        let result = EditorConfig::from_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MapError::InvalidConfig(_))));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = temp_config("malformed", "{ grid_size: ");
        let result = EditorConfig::from_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(MapError::ConfigParse { .. })));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let path = std::env::temp_dir().join("wall_map_editor_does_not_exist.json");
        assert!(matches!(
            EditorConfig::load(Some(&path)),
            Err(MapError::ConfigRead { .. })
        ));
    }
}
