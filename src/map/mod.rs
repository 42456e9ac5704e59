// src/map/mod.rs
pub mod cell;
pub mod grid;

pub use cell::CellKind;
pub use grid::{Grid, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
