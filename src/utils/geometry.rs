// src/utils/geometry.rs

/// Converts between canvas pixels and grid cells.
///
/// The canvas is `grid_size * cell_size` pixels square with its origin at the
/// top-left corner of cell `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMapping {
    pub grid_size: usize,
    pub cell_size: u32,
}

impl CellMapping {
    pub fn new(grid_size: usize, cell_size: u32) -> Self {
        Self { grid_size, cell_size }
    }

    /// Side length of the whole canvas in pixels.
    pub fn canvas_extent(&self) -> f32 {
        (self.grid_size as f32) * (self.cell_size as f32)
    }

    /// Maps a pixel offset (relative to the canvas origin) to the cell under
    /// it, by integer division. Offsets outside the canvas give `None`, so
    /// callers never hand out-of-range coordinates to the grid.
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if self.cell_size == 0 || !px.is_finite() || !py.is_finite() || px < 0.0 || py < 0.0 {
            return None;
        }
        let x = (px as usize) / self.cell_size as usize;
        let y = (py as usize) / self.cell_size as usize;
        if x < self.grid_size && y < self.grid_size {
            Some((x, y))
        } else {
            None
        }
    }

    /// Top-left pixel of a cell, relative to the canvas origin.
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        let size = self.cell_size as f32;
        (x as f32 * size, y as f32 * size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_division() {
        let mapping = CellMapping::new(100, 6);
        assert_eq!(mapping.pixel_to_cell(0.0, 0.0), Some((0, 0)));
        assert_eq!(mapping.pixel_to_cell(5.9, 6.0), Some((0, 1)));
        assert_eq!(mapping.pixel_to_cell(599.0, 599.0), Some((99, 99)));
    }

    #[test]
    fn test_outside_canvas_is_clipped() {
        let mapping = CellMapping::new(100, 6);
        assert_eq!(mapping.pixel_to_cell(600.0, 10.0), None);
        assert_eq!(mapping.pixel_to_cell(10.0, 600.0), None);
        assert_eq!(mapping.pixel_to_cell(-0.5, 10.0), None);
        assert_eq!(mapping.pixel_to_cell(f32::NAN, 10.0), None);
    }

    #[test]
    fn test_canvas_extent_and_origin() {
        let mapping = CellMapping::new(10, 8);
        assert_eq!(mapping.canvas_extent(), 80.0);
        assert_eq!(mapping.cell_origin(2, 3), (16.0, 24.0));
    }
}
