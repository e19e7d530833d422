//! Compute layer for the geohash codec.
//!
//! - `codec`: bit interleaving, symbol packing, encode/decode/bounds
//! - `range`: per-position grids and rectangle enumeration
//! - `validation`: call-boundary checks shared by both

pub mod codec;
pub mod range;
pub mod validation;

pub use codec::{CellSize, Codec};
pub use range::grid::{Grid, GridIndexer};
pub use range::{RangeEnumerator, RangeResult};
