use serde::{Deserialize, Serialize};

/// A position inside one of the per-character symbol grids.
///
/// Columns count from the western edge, rows from the northern edge.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GridCell {
    pub column: u8,
    pub row: u8,
}

impl GridCell {
    pub fn new(column: u8, row: u8) -> Self {
        Self { column, row }
    }
}

impl From<(u8, u8)> for GridCell {
    fn from((column, row): (u8, u8)) -> Self {
        Self::new(column, row)
    }
}
