//! The 32-symbol geohash alphabet.
//!
//! Digits `0-9` followed by the lowercase letters without `a`, `i`, `l`
//! and `o`. Position in the table is the 5-bit value of the symbol.

use once_cell::sync::Lazy;

pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Sentinel for bytes that are not geohash symbols.
const INVALID: u8 = 0xff;

static DECODE_TABLE: Lazy<[u8; 256]> = Lazy::new(|| {
    let mut table = [INVALID; 256];
    for (value, &symbol) in ALPHABET.iter().enumerate() {
        table[symbol as usize] = value as u8;
    }
    table
});

/// 5-bit value of `symbol`, or `None` when it is not in the alphabet.
///
/// Lookup is case-sensitive: only lowercase letters are symbols.
#[inline]
pub fn value_of(symbol: u8) -> Option<u8> {
    match DECODE_TABLE[symbol as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Symbol for a 5-bit value. Only the low five bits of `value` are used.
#[inline]
pub fn symbol_of(value: u8) -> u8 {
    ALPHABET[(value & 0x1f) as usize]
}
