//! Per-position symbol grids.
//!
//! A symbol's five bits split between the axes 3/2 or 2/3 depending on
//! whether the symbol starts on a longitude or a latitude bit. Odd character
//! positions (1-indexed) start on longitude and lay their symbols out on an
//! 8 x 4 grid; even positions start on latitude and use a 4 x 8 grid.
//!
//! Columns count west to east, rows count from the northern edge:
//!
//! ```text
//! odd positions          even positions
//! b c f g u v y z        p r x z
//! 8 9 d e s t w x        n q w y
//! 2 3 6 7 k m q r        j m t v
//! 0 1 4 5 h j n p        h k s u
//!                        5 7 e g
//!                        4 6 d f
//!                        1 3 9 c
//!                        0 2 8 b
//! ```

use crate::compute::codec::alphabet;
use geohash_types::GridCell;
use once_cell::sync::Lazy;

const SYMBOLS: usize = 32;

/// One of the two symbol grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u8,
    height: u8,
    /// Cell of each symbol value.
    cells: [GridCell; SYMBOLS],
    /// Symbol value of each cell, row-major from the north-west corner.
    values: [u8; SYMBOLS],
}

static ODD_GRID: Lazy<Grid> = Lazy::new(|| Grid::build(true));
static EVEN_GRID: Lazy<Grid> = Lazy::new(|| Grid::build(false));

/// Split a 5-bit value into the bits at positions 4, 2, 0 and 3, 1.
fn deinterleave(value: u8) -> (u8, u8) {
    let major = ((value >> 2) & 0b100) | ((value >> 1) & 0b010) | (value & 0b001);
    let minor = ((value >> 2) & 0b10) | ((value >> 1) & 0b01);
    (major, minor)
}

impl Grid {
    fn build(lon_first: bool) -> Self {
        let (width, height) = if lon_first { (8, 4) } else { (4, 8) };
        let mut cells = [GridCell::default(); SYMBOLS];
        let mut values = [0u8; SYMBOLS];

        for value in 0..SYMBOLS as u8 {
            let (major, minor) = deinterleave(value);
            let (lon, lat) = if lon_first { (major, minor) } else { (minor, major) };
            let cell = GridCell::new(lon, height - 1 - lat);
            cells[value as usize] = cell;
            values[cell.row as usize * width as usize + cell.column as usize] = value;
        }

        Self {
            width,
            height,
            cells,
            values,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Cell of a 5-bit symbol value.
    pub fn cell_of_value(&self, value: u8) -> GridCell {
        self.cells[(value & 0x1f) as usize]
    }

    /// Cell of an alphabet symbol, or `None` for a non-alphabet byte.
    pub fn cell_of(&self, symbol: u8) -> Option<GridCell> {
        alphabet::value_of(symbol).map(|value| self.cell_of_value(value))
    }

    /// Symbol value at `cell`, or `None` outside the grid.
    pub fn value_at(&self, cell: GridCell) -> Option<u8> {
        if cell.column >= self.width || cell.row >= self.height {
            return None;
        }
        Some(self.values[cell.row as usize * self.width as usize + cell.column as usize])
    }

    /// Alphabet symbol at `cell`, or `None` outside the grid.
    pub fn symbol_at(&self, cell: GridCell) -> Option<u8> {
        self.value_at(cell).map(alphabet::symbol_of)
    }

    /// The grid rendered one string per row, northernmost row first.
    pub fn rows(&self) -> Vec<String> {
        self.values
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|&v| alphabet::symbol_of(v) as char).collect())
            .collect()
    }
}

/// Maps character positions to their grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridIndexer;

impl GridIndexer {
    /// Grid for the 1-indexed character `position`.
    pub fn grid_for(position: usize) -> &'static Grid {
        debug_assert!(position >= 1, "positions are 1-indexed");
        if position % 2 == 1 { &*ODD_GRID } else { &*EVEN_GRID }
    }

    pub fn width(position: usize) -> u8 {
        Self::grid_for(position).width()
    }

    pub fn height(position: usize) -> u8 {
        Self::grid_for(position).height()
    }

    /// Cell of `symbol` at the 1-indexed character `position`.
    pub fn cell_of(position: usize, symbol: u8) -> Option<GridCell> {
        Self::grid_for(position).cell_of(symbol)
    }

    /// Symbol at `cell` for the 1-indexed character `position`.
    pub fn symbol_at(position: usize, cell: GridCell) -> Option<u8> {
        Self::grid_for(position).symbol_at(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_odd_grid_layout() {
        let grid = GridIndexer::grid_for(1);
        assert_eq!((grid.width(), grid.height()), (8, 4));
        assert_eq!(
            grid.rows(),
            vec!["bcfguvyz", "89destwx", "2367kmqr", "0145hjnp"]
        );
        assert!(std::ptr::eq(grid, GridIndexer::grid_for(3)));
    }

    #[test]
    fn test_even_grid_layout() {
        let grid = GridIndexer::grid_for(2);
        assert_eq!((grid.width(), grid.height()), (4, 8));
        assert_eq!(
            grid.rows(),
            vec!["prxz", "nqwy", "jmtv", "hksu", "57eg", "46df", "139c", "028b"]
        );
    }

    #[test]
    fn test_lookups_are_bidirectional() {
        for position in 1..=4 {
            let grid = GridIndexer::grid_for(position);
            for &symbol in alphabet::ALPHABET.iter() {
                let cell = grid.cell_of(symbol).unwrap();
                assert_eq!(grid.symbol_at(cell), Some(symbol));
            }
        }
    }

    #[test]
    fn test_known_cells() {
        assert_eq!(GridIndexer::cell_of(1, b'4'), Some(GridCell::new(2, 3)));
        assert_eq!(GridIndexer::cell_of(3, b'x'), Some(GridCell::new(7, 1)));
        assert_eq!(GridIndexer::cell_of(2, b'u'), Some(GridCell::new(3, 3)));
        assert_eq!(GridIndexer::cell_of(2, b'g'), Some(GridCell::new(3, 4)));
        assert_eq!(GridIndexer::cell_of(2, b'a'), None);
    }

    #[test]
    fn test_out_of_grid() {
        assert_eq!(GridIndexer::symbol_at(1, GridCell::new(8, 0)), None);
        assert_eq!(GridIndexer::symbol_at(2, GridCell::new(0, 8)), None);
        assert_eq!(GridIndexer::symbol_at(2, GridCell::new(3, 7)), Some(b'b'));
    }
}
