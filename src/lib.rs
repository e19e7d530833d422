//! Geohash codec with bounding boxes and rectangular range enumeration.
//!
//! ## Features
//! - **Encoding**: latitude/longitude to a base-32 geohash string or its packed integer
//! - **Decoding**: geohash to a rounded center coordinate or back to its integer
//! - **Bounds**: the exact rectangle a geohash denotes
//! - **Ranges**: every geohash of a given length between two corner hashes
//!
//! ```rust
//! use geohash_range::{bounds, decode, encode, range};
//!
//! let hash = encode(-23.5505, -46.6333)?;
//! assert_eq!(hash, "6gyf4bf8mk");
//!
//! let center = decode(&hash)?;
//! assert!(bounds(&hash)?.contains(&center));
//!
//! let cells = range("6u4", "6gx").expect("corners share a length");
//! assert_eq!(cells.len(), 18);
//! # Ok::<(), geohash_range::GeohashError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;

pub use builder::CodecBuilder;
pub use config::CodecConfig;
pub use error::{GeohashError, Result};

pub use compute::codec::{
    CellSize, Codec, DEFAULT_DEPTH, DEFAULT_PRECISION, MAX_PRECISION, bounds, bounds_int, decode,
    decode_int, decode_value, decode_with_precision, encode, encode_int, encode_value,
    encode_with_depth, round_to,
};
pub use compute::range::grid::{Grid, GridIndexer};
pub use compute::range::{RangeEnumerator, RangeResult};

pub use geohash_types::{Axis, BoundingBox, Coordinate, GridCell};

pub use geo::{Point, Rect};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Every hash between two corner hashes of equal length.
///
/// `None` signals a malformed request (empty corner, non-alphabet symbol or
/// a length mismatch). See [`RangeEnumerator::range`].
pub fn range(from: &str, to: &str) -> Option<RangeResult> {
    RangeEnumerator.range(from, to)
}

/// [`range`] with the corners packed as `"prefix-suffix"`, e.g. `"6u4-gx"`.
pub fn range_shorthand(combined: &str) -> Option<RangeResult> {
    RangeEnumerator.range_shorthand(combined)
}

/// Common imports
pub mod prelude {

    pub use crate::{CodecBuilder, CodecConfig, GeohashError, Result};

    pub use crate::{Codec, RangeEnumerator, RangeResult};

    pub use crate::{bounds, decode, encode, range, range_shorthand};

    pub use crate::{BoundingBox, Coordinate};
}
