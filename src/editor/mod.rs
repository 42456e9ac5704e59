// src/editor/mod.rs

pub mod core;
pub mod generator;

pub use self::core::Editor;
pub use generator::ProceduralGenerator;

use crate::map::CellKind;

/// The brush applied when the user clicks or drags on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintMode {
    #[default]
    Wall,
    Tree,
    Rock,
    Erase,
}

impl PaintMode {
    /// Returns a user-friendly name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            PaintMode::Wall => "Wall",
            PaintMode::Tree => "Tree",
            PaintMode::Rock => "Rock",
            PaintMode::Erase => "Erase",
        }
    }

    /// The cell kind this mode paints. Erasing paints `Empty`.
    pub fn cell_kind(&self) -> CellKind {
        match self {
            PaintMode::Wall => CellKind::Wall,
            PaintMode::Tree => CellKind::Tree,
            PaintMode::Rock => CellKind::Rock,
            PaintMode::Erase => CellKind::Empty,
        }
    }

    /// Returns all available modes. Useful for toolbars.
    pub fn all() -> &'static [PaintMode] {
        &[
            PaintMode::Wall,
            PaintMode::Tree,
            PaintMode::Rock,
            PaintMode::Erase,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_paints_a_distinct_kind() {
        let kinds: Vec<CellKind> = PaintMode::all().iter().map(|m| m.cell_kind()).collect();
        assert_eq!(
            kinds,
            vec![CellKind::Wall, CellKind::Tree, CellKind::Rock, CellKind::Empty]
        );
    }

    #[test]
    fn test_default_mode_is_wall() {
        assert_eq!(PaintMode::default(), PaintMode::Wall);
        assert_eq!(PaintMode::Erase.name(), "Erase");
    }
}
