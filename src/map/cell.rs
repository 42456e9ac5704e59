// src/map/cell.rs
use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// The contents of a single grid cell.
///
/// On disk each kind is stored as its integer code: `Empty=0`, `Wall=1`,
/// `Tree=2`, `Rock=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CellKind {
    #[default]
    Empty,
    Wall,
    Tree,
    Rock,
}

impl CellKind {
    pub fn code(self) -> u8 {
        match self {
            CellKind::Empty => 0,
            CellKind::Wall => 1,
            CellKind::Tree => 2,
            CellKind::Rock => 3,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CellKind::Empty => "Empty",
            CellKind::Wall => "Wall",
            CellKind::Tree => "Tree",
            CellKind::Rock => "Rock",
        }
    }

    pub fn all() -> &'static [CellKind] {
        &[CellKind::Empty, CellKind::Wall, CellKind::Tree, CellKind::Rock]
    }
}

impl From<CellKind> for u8 {
    fn from(kind: CellKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for CellKind {
    type Error = MapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellKind::Empty),
            1 => Ok(CellKind::Wall),
            2 => Ok(CellKind::Tree),
            3 => Ok(CellKind::Rock),
            other => Err(MapError::InvalidCellValue(other)),
        }
    }
}
