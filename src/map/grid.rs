// src/map/grid.rs
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{MapError, Result};
use crate::map::CellKind;

/// Default width and height of a new map, in cells.
pub const DEFAULT_GRID_SIZE: usize = 100;
/// Largest side length the editor will open. The canvas redraws every cell
/// each frame, so this also bounds per-frame work.
pub const MAX_GRID_SIZE: usize = 1000;

/// A fixed-size square grid of cells.
///
/// Cells are addressed by column `x` and row `y`. Storage is column-major so
/// that one column is a contiguous slice, which is also the layout of the
/// exported JSON (outer array indexed by column, inner by row).
///
/// The grid holds no presentation state; views read it after each mutation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<CellKind>>")]
pub struct Grid {
    size: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Creates a `size` x `size` grid with every cell `Empty`.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`. Validated configs never
    /// exceed [`MAX_GRID_SIZE`].
    pub fn new(size: usize) -> Self {
        let len = size
            .checked_mul(size)
            .unwrap_or_else(|| panic!("grid size {} overflows the cell count", size));
        Self {
            size,
            cells: vec![CellKind::Empty; len],
        }
    }

    /// Side length of the grid. Never changes after construction.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if self.contains(x, y) {
            Ok(x * self.size + y)
        } else {
            Err(MapError::OutOfRange { x, y, size: self.size })
        }
    }

    /// Returns the cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<CellKind> {
        self.index(x, y).ok().map(|i| self.cells[i])
    }

    /// Paints a single cell. Out-of-range coordinates leave the grid
    /// untouched and return `MapError::OutOfRange`.
    pub fn set(&mut self, x: usize, y: usize, kind: CellKind) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Overwrites every cell with `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.iter_mut().for_each(|cell| *cell = kind);
    }

    /// Resets every cell to `Empty`.
    pub fn clear(&mut self) {
        self.fill(CellKind::Empty);
    }

    /// Iterates cells mutably in column-major order (x outer, y inner).
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CellKind> {
        self.cells.iter_mut()
    }

    /// Iterates `((x, y), kind)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = ((usize, usize), CellKind)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &kind)| ((i / size, i % size), kind))
    }

    /// One slice per column, each `size` cells long.
    pub fn columns(&self) -> impl Iterator<Item = &[CellKind]> {
        // chunks() panics on a zero chunk size; a 0x0 grid has no columns anyway.
        self.cells.chunks(self.size.max(1))
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&cell| cell == kind).count()
    }

    /// Snapshot of the grid as nested integer codes, outer index = column.
    pub fn export(&self) -> Vec<Vec<u8>> {
        self.columns()
            .map(|column| column.iter().map(|&kind| kind.code()).collect())
            .collect()
    }

    /// Rebuilds a grid from the nested integer codes produced by [`Grid::export`].
    pub fn from_export(columns: Vec<Vec<u8>>) -> Result<Self> {
        let columns = columns
            .into_iter()
            .map(|column| {
                column
                    .into_iter()
                    .map(CellKind::try_from)
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::try_from(columns)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl TryFrom<Vec<Vec<CellKind>>> for Grid {
    type Error = MapError;

    fn try_from(columns: Vec<Vec<CellKind>>) -> Result<Self> {
        let size = columns.len();
        let mut cells = Vec::with_capacity(size * size);
        for (column, cells_in_column) in columns.into_iter().enumerate() {
            if cells_in_column.len() != size {
                return Err(MapError::Ragged {
                    column,
                    len: cells_in_column.len(),
                    expected: size,
                });
            }
            cells.extend(cells_in_column);
        }
        Ok(Self { size, cells })
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.columns())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.count(CellKind::Empty), 16);
        assert_eq!(Grid::default().size(), DEFAULT_GRID_SIZE);
    }

    #[test]
    #[should_panic(expected = "overflows the cell count")]
    fn test_overflowing_size_panics_before_allocating() {
        Grid::new(usize::MAX);
    }

    #[test]
    fn test_paint_is_idempotent() {
        let mut grid = Grid::new(10);
        grid.set(3, 7, CellKind::Rock).unwrap();
        grid.set(3, 7, CellKind::Rock).unwrap();
        assert_eq!(grid.get(3, 7), Some(CellKind::Rock));
        assert_eq!(grid.count(CellKind::Rock), 1);
    }

    #[test]
    fn test_paint_addresses_column_then_row() {
        let mut grid = Grid::new(3);
        grid.set(2, 0, CellKind::Wall).unwrap();
        assert_eq!(grid.get(2, 0), Some(CellKind::Wall));
        assert_eq!(grid.get(0, 2), Some(CellKind::Empty));
        assert_eq!(grid.export()[2][0], 1);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut grid = Grid::new(5);
        let err = grid.set(5, 0, CellKind::Wall).unwrap_err();
        assert!(matches!(err, MapError::OutOfRange { x: 5, y: 0, size: 5 }));
        assert!(grid.set(0, 99, CellKind::Wall).is_err());
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.count(CellKind::Empty), 25);
    }

    #[test]
    fn test_clear_is_total() {
        for size in 1..=8 {
            let mut grid = Grid::new(size);
            grid.fill(CellKind::Tree);
            grid.set(0, 0, CellKind::Wall).unwrap();
            grid.clear();
            assert!(grid.iter().all(|(_, kind)| kind == CellKind::Empty));
        }
    }

    #[test]
    fn test_iter_reports_coordinates() {
        let mut grid = Grid::new(3);
        grid.set(1, 2, CellKind::Tree).unwrap();
        let painted: Vec<_> = grid
            .iter()
            .filter(|&(_, kind)| kind != CellKind::Empty)
            .collect();
        assert_eq!(painted, vec![((1, 2), CellKind::Tree)]);
    }

    #[test]
    fn test_export_round_trip() {
        let mut grid = Grid::new(6);
        grid.set(0, 0, CellKind::Wall).unwrap();
        grid.set(1, 4, CellKind::Tree).unwrap();
        grid.set(5, 5, CellKind::Rock).unwrap();

        let exported = grid.export();
        assert_eq!(exported.len(), 6);
        assert!(exported.iter().all(|column| column.len() == 6));
        for ((x, y), kind) in grid.iter() {
            assert_eq!(exported[x][y], kind.code());
        }

        let json = serde_json::to_string(&exported).unwrap();
        let reloaded: Vec<Vec<u8>> = serde_json::from_str(&json).unwrap();
        assert_eq!(Grid::from_export(reloaded).unwrap(), grid);
    }

    #[test]
    fn test_serde_matches_export() {
        let mut grid = Grid::new(2);
        grid.set(1, 0, CellKind::Rock).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[0,0],[3,0]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_rebuild_rejects_malformed_input() {
        let ragged = vec![vec![0, 0], vec![0]];
        assert!(matches!(
            Grid::from_export(ragged),
            Err(MapError::Ragged { column: 1, len: 1, expected: 2 })
        ));
        let bad_code = vec![vec![0, 9], vec![0, 0]];
        assert!(matches!(Grid::from_export(bad_code), Err(MapError::InvalidCellValue(9))));
        assert!(serde_json::from_str::<Grid>("[[0,1,2]]").is_err());
    }
}
