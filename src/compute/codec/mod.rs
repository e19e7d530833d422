//! Geohash encoding, decoding and bounding boxes.
//!
//! A geohash is built by repeatedly halving the globe, alternating between
//! longitude and latitude, and recording which half holds the coordinate.
//! The resulting bits are grouped five at a time into alphabet symbols.
//!
//! ```rust
//! use geohash_range::compute::codec::{bounds, decode, encode};
//!
//! let hash = encode(-23.5505, -46.6333)?;
//! assert_eq!(hash, "6gyf4bf8mk");
//!
//! let center = decode(&hash)?;
//! assert_eq!(center.to_array(), [-23.550501, -46.633299]);
//! assert!(bounds(&hash)?.contains(&center));
//! # Ok::<(), geohash_range::GeohashError>(())
//! ```

pub mod alphabet;
pub mod bits;
pub mod narrow;

use crate::compute::validation::{
    validate_binary_depth, validate_coordinate, validate_precision, validate_string_depth,
};
use crate::config::CodecConfig;
use crate::error::Result;
use bits::BITS_PER_SYMBOL;
use geohash_types::{BoundingBox, Coordinate};

/// Default number of interleaved bits (ten symbols).
pub const DEFAULT_DEPTH: u32 = 50;

/// Default number of decimal digits kept by `decode`.
pub const DEFAULT_PRECISION: u32 = 6;

/// Most decimal digits `decode` can keep.
pub const MAX_PRECISION: u32 = 15;

/// Geohash codec bound to a depth and a decode precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Codec {
    depth: u32,
    precision: u32,
}

impl Codec {
    /// Codec with the default depth (50) and precision (6).
    pub fn new() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Codec from a validated configuration.
    pub fn with_config(config: &CodecConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            depth: config.depth,
            precision: config.precision,
        })
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Number of symbols in the hashes this codec produces.
    pub fn hash_len(&self) -> usize {
        (self.depth / BITS_PER_SYMBOL) as usize
    }

    /// Encode a coordinate as a hash string of `depth / 5` symbols.
    pub fn encode(&self, lat: f64, lon: f64) -> Result<String> {
        encode_with_depth(lat, lon, self.depth)
    }

    /// Encode a coordinate as its `depth` interleaved bits.
    pub fn encode_int(&self, lat: f64, lon: f64) -> Result<u64> {
        encode_int(lat, lon, self.depth)
    }

    /// Center of `hash`, rounded to this codec's precision.
    pub fn decode(&self, hash: &str) -> Result<Coordinate> {
        decode_with_precision(hash, self.precision)
    }

    /// Center of an integer hash, rounded to this codec's precision.
    pub fn decode_value(&self, value: u64) -> Result<Coordinate> {
        decode_value(value, self.precision)
    }

    pub fn decode_int(&self, hash: &str) -> Result<u64> {
        decode_int(hash)
    }

    pub fn bounds(&self, hash: &str) -> Result<BoundingBox> {
        bounds(hash)
    }

    /// Size of a cell of this codec's hash length.
    pub fn cell_size(&self) -> CellSize {
        CellSize::for_symbols(self.hash_len())
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Extent in degrees of every cell of a given hash length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub lat_degrees: f64,
    pub lon_degrees: f64,
}

impl CellSize {
    /// Cell size of hashes with `symbols` characters.
    ///
    /// Longitude takes the extra bit when the total bit count is odd.
    pub fn for_symbols(symbols: usize) -> Self {
        let bits = symbols as i32 * BITS_PER_SYMBOL as i32;
        let lon_bits = (bits + 1) / 2;
        let lat_bits = bits / 2;
        Self {
            lat_degrees: 180.0 / 2f64.powi(lat_bits),
            lon_degrees: 360.0 / 2f64.powi(lon_bits),
        }
    }
}

/// Encode a coordinate with the default depth of 50 bits.
pub fn encode(lat: f64, lon: f64) -> Result<String> {
    encode_with_depth(lat, lon, DEFAULT_DEPTH)
}

/// Encode a coordinate as a hash of `depth / 5` symbols.
///
/// `depth` must be a positive multiple of five, at most 60.
pub fn encode_with_depth(lat: f64, lon: f64, depth: u32) -> Result<String> {
    validate_string_depth(depth).inspect_err(|e| log::warn!("Rejecting encode: {}", e))?;
    let value = encode_int(lat, lon, depth)?;
    Ok(bits::group(value, (depth / BITS_PER_SYMBOL) as usize))
}

/// Encode a coordinate as its `depth` interleaved bits, most significant
/// first. Any depth from 1 to 64 is accepted.
pub fn encode_int(lat: f64, lon: f64, depth: u32) -> Result<u64> {
    let coord = Coordinate::new(lat, lon);
    validate_coordinate(&coord).inspect_err(|e| log::warn!("Rejecting encode: {}", e))?;
    validate_binary_depth(depth).inspect_err(|e| log::warn!("Rejecting encode: {}", e))?;
    Ok(narrow::interleave(&coord, depth))
}

/// Render an integer hash as a string, without any geometry.
///
/// The value is zero-padded on the most significant side to whole symbols.
pub fn encode_value(value: u64) -> String {
    bits::group_all(value)
}

/// Center of `hash` rounded to six decimal digits.
pub fn decode(hash: &str) -> Result<Coordinate> {
    decode_with_precision(hash, DEFAULT_PRECISION)
}

/// Center of `hash` rounded to `precision` decimal digits.
///
/// Ties round half away from zero.
pub fn decode_with_precision(hash: &str, precision: u32) -> Result<Coordinate> {
    validate_precision(precision).inspect_err(|e| log::warn!("Rejecting decode: {}", e))?;
    let center = bounds(hash)?.center();
    Ok(round_coordinate(center, precision))
}

/// Packed integer of `hash`; the inverse of [`encode_value`].
pub fn decode_int(hash: &str) -> Result<u64> {
    bits::ungroup(hash)
}

/// Center of an integer hash rounded to `precision` decimal digits.
pub fn decode_value(value: u64, precision: u32) -> Result<Coordinate> {
    validate_precision(precision).inspect_err(|e| log::warn!("Rejecting decode: {}", e))?;
    Ok(round_coordinate(bounds_int(value).center(), precision))
}

/// Bounding box denoted by `hash`.
pub fn bounds(hash: &str) -> Result<BoundingBox> {
    let symbols = bits::unpack(hash)?;
    Ok(narrow::refine(&symbols))
}

/// Bounding box of an integer hash, grouped as by [`encode_value`].
pub fn bounds_int(value: u64) -> BoundingBox {
    let count = bits::symbol_count(value);
    let symbols: bits::Symbols = (0..count)
        .rev()
        .map(|i| {
            let shift = i as u32 * BITS_PER_SYMBOL;
            (value.checked_shr(shift).unwrap_or(0) & 0x1f) as u8
        })
        .collect();
    narrow::refine(&symbols)
}

/// Round `value` to `precision` decimal digits, ties away from zero.
///
/// ```
/// use geohash_range::compute::codec::round_to;
///
/// assert_eq!(round_to(0.125, 2), 0.13);
/// assert_eq!(round_to(-0.125, 2), -0.13);
/// assert_eq!(round_to(22.5, 0), 23.0);
/// ```
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

fn round_coordinate(coord: Coordinate, precision: u32) -> Coordinate {
    Coordinate::new(
        round_to(coord.lat, precision),
        round_to(coord.lon, precision),
    )
}
