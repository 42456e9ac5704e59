// src/editor/core.rs

use log::{error, info, warn};

use crate::config::EditorConfig;
use crate::document::Document;
use crate::editor::generator::{ProceduralGenerator, MAX_SPARSITY, MIN_SPARSITY};
use crate::editor::PaintMode;
use crate::error::Result;
use crate::map::{CellKind, Grid};
use crate::utils::geometry::CellMapping;
use crate::utils::util::clamp_probability;

/// The core `Editor` struct: the grid being painted plus the session
/// settings that drive the paint and generation actions.
pub struct Editor {
    grid: Grid,

    /// Where saves go.
    document: Document,

    generator: ProceduralGenerator,

    current_mode: PaintMode,

    /// Probability used by `randomize_trees_rocks`.
    sparsity: f64,
    /// Probability used by `generate_walls`. Independent of sparsity.
    wall_density: f64,

    cell_size: u32,

    is_dirty: bool,

    /// Messages or status for UI.
    pub status_message: String,
    /// Set when a save fails; the UI shows it until dismissed.
    pub error_message: Option<String>,
}

impl Editor {
    /// Create an editor with an all-empty grid sized by `config`.
    pub fn new(config: &EditorConfig) -> Self {
        Self::with_generator(config, ProceduralGenerator::from_seed_option(config.seed))
    }

    pub fn with_generator(config: &EditorConfig, generator: ProceduralGenerator) -> Self {
        let sparsity =
            clamp_probability(config.sparsity, MIN_SPARSITY, MAX_SPARSITY).unwrap_or(MIN_SPARSITY);
        let wall_density = clamp_probability(config.wall_density, 0.0, 1.0).unwrap_or(0.0);
        Self {
            grid: Grid::new(config.grid_size),
            document: Document::new(config.output_path.clone()),
            generator,
            current_mode: PaintMode::default(),
            sparsity,
            wall_density,
            cell_size: config.cell_size,
            is_dirty: false,
            status_message: String::new(),
            error_message: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Pixel/cell conversion for the canvas.
    pub fn mapping(&self) -> CellMapping {
        CellMapping::new(self.grid.size(), self.cell_size)
    }

    pub fn current_mode(&self) -> PaintMode {
        self.current_mode
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        self.current_mode = mode;
        info!("Mode set to: {}", mode.name());
        self.status_message = format!("Mode set to: {}", mode.name());
    }

    pub fn available_modes(&self) -> &'static [PaintMode] {
        PaintMode::all()
    }

    pub fn sparsity(&self) -> f64 {
        self.sparsity
    }

    /// Stores a new sparsity clamped to `[MIN_SPARSITY, MAX_SPARSITY]` and
    /// returns the stored value. Non-finite input keeps the old value.
    pub fn set_sparsity(&mut self, value: f64) -> f64 {
        match clamp_probability(value, MIN_SPARSITY, MAX_SPARSITY) {
            Some(sparsity) => {
                self.sparsity = sparsity;
                info!("Sparsity set to: {:.2}", sparsity);
            }
            None => warn!("Ignoring sparsity {}", value),
        }
        self.sparsity
    }

    pub fn wall_density(&self) -> f64 {
        self.wall_density
    }

    /// Paints a single cell. Out-of-range coordinates are a caller bug: they
    /// are logged and returned as an error, and the grid is left unchanged.
    pub fn paint_cell(&mut self, x: usize, y: usize, kind: CellKind) -> Result<()> {
        if let Err(err) = self.grid.set(x, y, kind) {
            error!("paint_cell: {}", err);
            return Err(err);
        }
        self.is_dirty = true;
        Ok(())
    }

    /// Paints `(x, y)` with the current mode.
    pub fn paint_at(&mut self, x: usize, y: usize) -> Result<()> {
        self.paint_cell(x, y, self.current_mode.cell_kind())
    }

    /// Paints the cell under a canvas pixel offset with the current mode.
    /// Offsets outside the canvas are clipped; returns the painted cell.
    pub fn paint_pixel(&mut self, px: f32, py: f32) -> Option<(usize, usize)> {
        let (x, y) = self.mapping().pixel_to_cell(px, py)?;
        self.paint_at(x, y).ok()?;
        Some((x, y))
    }

    /// Scatters trees and rocks over empty cells at the current sparsity.
    pub fn randomize_trees_rocks(&mut self) -> usize {
        let painted = self.generator.scatter_trees_rocks(&mut self.grid, self.sparsity);
        self.is_dirty = true;
        info!("Randomized trees and rocks ({} cells).", painted);
        self.status_message = format!("Randomized trees and rocks ({} cells)", painted);
        painted
    }

    /// Scatters walls over the whole grid at the configured wall density.
    pub fn generate_walls(&mut self) -> usize {
        let density = self.wall_density;
        self.generate_walls_with_density(density)
    }

    /// Scatters walls at an explicit density (clamped to `[0, 1]`),
    /// overwriting whatever the chosen cells held.
    pub fn generate_walls_with_density(&mut self, density: f64) -> usize {
        let density = clamp_probability(density, 0.0, 1.0).unwrap_or(0.0);
        let walls = self.generator.generate_walls(&mut self.grid, density);
        self.is_dirty = true;
        info!("Walls generated randomly ({} cells).", walls);
        self.status_message = format!("Walls generated randomly ({} cells)", walls);
        walls
    }

    pub fn clear(&mut self) {
        self.grid.clear();
        self.is_dirty = true;
        info!("Map cleared.");
        self.status_message = "Map cleared".to_owned();
    }

    /// Snapshot of the grid as nested integer codes. Read-only.
    pub fn export_json(&self) -> Vec<Vec<u8>> {
        self.grid.export()
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.is_dirty
    }

    /// Writes the grid to the document path. On failure the grid and the
    /// dirty flag are left as they were.
    pub fn save_document(&mut self) -> Result<()> {
        self.document.save(&self.grid)?;
        self.is_dirty = false;
        Ok(())
    }

    /// Saves and reports the outcome through `status_message` and
    /// `error_message` instead of returning it.
    pub fn save_document_wrapper(&mut self) -> bool {
        match self.save_document() {
            Ok(()) => {
                self.status_message = format!("Map saved to {}", self.document.path().display());
                self.error_message = None;
                true
            }
            Err(err) => {
                self.status_message = "Save failed".to_owned();
                self.error_message = Some(err.to_string());
                false
            }
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorConfig::default())
    }
}
