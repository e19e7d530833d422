//! Error types for the geohash codec.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeohashError>;

/// Errors returned at the codec call boundary.
///
/// Every check runs before any narrowing starts, so an error never comes
/// with a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeohashError {
    /// Latitude or longitude is non-finite or outside the globe.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid depth {depth}: {reason}")]
    InvalidDepth { depth: u32, reason: &'static str },

    #[error("invalid precision {0}: at most {max} decimal digits are supported", max = crate::compute::codec::MAX_PRECISION)]
    InvalidPrecision(u32),

    /// Empty hash, a symbol outside the alphabet, or too many symbols.
    #[error("invalid geohash: {0}")]
    InvalidHash(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for GeohashError {
    fn from(err: serde_json::Error) -> Self {
        GeohashError::Config(err.to_string())
    }
}
