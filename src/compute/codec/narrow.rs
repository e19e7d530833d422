//! Bit-by-bit narrowing of a bounding box.
//!
//! Each geohash bit halves the current box along one axis, starting with
//! longitude and alternating after every bit. Encoding picks the half that
//! holds the coordinate; decoding replays recorded bits.

use super::bits::BITS_PER_SYMBOL;
use geohash_types::{Axis, BoundingBox, Coordinate};

/// A bounding box together with the axis the next bit refines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxNarrower {
    bbox: BoundingBox,
    axis: Axis,
}

impl BoxNarrower {
    /// Start from the whole globe, refining longitude first.
    pub fn new() -> Self {
        Self {
            bbox: BoundingBox::world(),
            axis: Axis::FIRST,
        }
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    /// Axis the next bit will refine.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Apply one bit: `true` keeps the upper half, `false` the lower half.
    pub fn apply(&mut self, bit: bool) {
        self.bbox = if bit {
            self.bbox.upper_half(self.axis)
        } else {
            self.bbox.lower_half(self.axis)
        };
        self.axis = self.axis.flip();
    }

    /// Choose the half holding `coord`, apply it and return the bit.
    ///
    /// A coordinate exactly on the midpoint goes to the lower half.
    pub fn locate(&mut self, coord: &Coordinate) -> bool {
        let bit = coord.get(self.axis) > self.bbox.mid(self.axis);
        self.apply(bit);
        bit
    }

    /// Apply the five bits of one symbol value, most significant first.
    pub fn apply_symbol(&mut self, value: u8) {
        for shift in (0..BITS_PER_SYMBOL).rev() {
            self.apply((value >> shift) & 1 == 1);
        }
    }
}

impl Default for BoxNarrower {
    fn default() -> Self {
        Self::new()
    }
}

/// Interleaved bits locating `coord` after `depth` halvings, MSB first.
///
/// `depth` must not exceed 64; callers validate it beforehand.
pub fn interleave(coord: &Coordinate, depth: u32) -> u64 {
    debug_assert!(depth <= u64::BITS);
    let mut narrower = BoxNarrower::new();
    (0..depth).fold(0u64, |acc, _| (acc << 1) | u64::from(narrower.locate(coord)))
}

/// Bounding box of a sequence of symbol values.
pub fn refine(symbols: &[u8]) -> BoundingBox {
    let mut narrower = BoxNarrower::new();
    for &value in symbols {
        narrower.apply_symbol(value);
    }
    narrower.bbox()
}
