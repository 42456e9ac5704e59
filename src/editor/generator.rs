// src/editor/generator.rs

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::map::{CellKind, Grid};

/// Lowest sparsity the editor accepts.
pub const MIN_SPARSITY: f64 = 0.01;
/// Highest sparsity the editor accepts.
pub const MAX_SPARSITY: f64 = 0.5;
pub const DEFAULT_SPARSITY: f64 = 0.05;
/// Chance of each cell becoming a wall in [`ProceduralGenerator::generate_walls`].
/// Kept separate from sparsity.
pub const DEFAULT_WALL_DENSITY: f64 = 0.3;

/// Randomized terrain rules. Every cell gets an independent draw; there is
/// no clustering or spatial correlation.
#[derive(Debug, Clone)]
pub struct ProceduralGenerator<R = StdRng> {
    rng: R,
}

impl ProceduralGenerator<StdRng> {
    /// Seeds from OS entropy, so each session generates different terrain.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A reproducible generator, mainly for tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> ProceduralGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        ProceduralGenerator { rng }
    }

    /// Turns each `Empty` cell into a `Tree` or `Rock` (even odds) with
    /// probability `sparsity`. Non-empty cells, walls included, are never
    /// touched. Returns how many cells were painted.
    pub fn scatter_trees_rocks(&mut self, grid: &mut Grid, sparsity: f64) -> usize {
        let mut painted = 0;
        for cell in grid.iter_mut() {
            if *cell == CellKind::Empty && self.rng.random::<f64>() < sparsity {
                *cell = if self.rng.random_bool(0.5) {
                    CellKind::Tree
                } else {
                    CellKind::Rock
                };
                painted += 1;
            }
        }
        debug!("Scattered {} trees/rocks at sparsity {:.2}", painted, sparsity);
        painted
    }

    /// Sets each cell to `Wall` with probability `density`, whatever it held
    /// before. Returns how many cells were set.
    pub fn generate_walls(&mut self, grid: &mut Grid, density: f64) -> usize {
        let mut walls = 0;
        for cell in grid.iter_mut() {
            if self.rng.random::<f64>() < density {
                *cell = CellKind::Wall;
                walls += 1;
            }
        }
        debug!("Placed {} walls at density {:.2}", walls, density);
        walls
    }
}
