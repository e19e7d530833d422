//! Packing of interleaved bits into 5-bit symbol groups and back.
//!
//! The most significant group always comes first, so the string form and the
//! integer form of a hash sort the same way.

use super::alphabet;
use crate::error::{GeohashError, Result};
use smallvec::SmallVec;

pub const BITS_PER_SYMBOL: u32 = 5;

/// Longest hash whose bits always fit in a `u64`. One more symbol fits only
/// when its leading group is at most four bits wide.
pub const MAX_PACKED_SYMBOLS: usize = (u64::BITS / BITS_PER_SYMBOL) as usize;

const SPARE_BITS: u32 = u64::BITS % BITS_PER_SYMBOL;

const SYMBOL_MASK: u64 = 0x1f;

/// Decoded 5-bit values of a hash, most significant first.
pub type Symbols = SmallVec<[u8; 16]>;

/// Number of symbols needed to hold `value` once it is zero-padded on the
/// most significant side to a multiple of five bits. Zero takes one symbol.
pub fn symbol_count(value: u64) -> usize {
    let bits = u64::BITS - value.leading_zeros();
    (bits.div_ceil(BITS_PER_SYMBOL) as usize).max(1)
}

/// Render the low `5 * symbols` bits of `value` as a hash string.
pub fn group(value: u64, symbols: usize) -> String {
    (0..symbols)
        .rev()
        .map(|i| {
            let shift = i as u32 * BITS_PER_SYMBOL;
            let bits = value.checked_shr(shift).unwrap_or(0) & SYMBOL_MASK;
            alphabet::symbol_of(bits as u8) as char
        })
        .collect()
}

/// Render `value` with exactly as many symbols as it needs.
pub fn group_all(value: u64) -> String {
    group(value, symbol_count(value))
}

/// Decode every symbol of `hash` into its 5-bit value.
pub fn unpack(hash: &str) -> Result<Symbols> {
    if hash.is_empty() {
        return Err(GeohashError::InvalidHash("empty hash".into()));
    }

    hash.bytes()
        .enumerate()
        .map(|(idx, b)| {
            alphabet::value_of(b).ok_or_else(|| {
                GeohashError::InvalidHash(format!(
                    "byte {:#04x} at position {} is not a geohash symbol",
                    b, idx
                ))
            })
        })
        .collect()
}

/// Pack `hash` into an integer, the inverse of [`group`].
pub fn ungroup(hash: &str) -> Result<u64> {
    let symbols = unpack(hash)?;
    let overflows = match symbols.len() {
        n if n <= MAX_PACKED_SYMBOLS => false,
        n if n == MAX_PACKED_SYMBOLS + 1 => symbols[0] >> SPARE_BITS != 0,
        _ => true,
    };
    if overflows {
        return Err(GeohashError::InvalidHash(format!(
            "{} symbols do not fit in 64 bits",
            symbols.len()
        )));
    }

    Ok(symbols
        .iter()
        .fold(0u64, |acc, &v| (acc << BITS_PER_SYMBOL) | u64::from(v)))
}
