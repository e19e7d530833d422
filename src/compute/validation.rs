//! Call-boundary validation for coordinates, depths and precisions.
//!
//! These checks run before any narrowing, so a rejected call never produces
//! a partial result.

use crate::compute::codec::MAX_PRECISION;
use crate::compute::codec::bits::BITS_PER_SYMBOL;
use crate::error::{GeohashError, Result};
use geohash_types::Coordinate;

/// Deepest hash that can be rendered as a string (12 symbols).
pub const MAX_STRING_DEPTH: u32 = 60;

/// Deepest hash that can be returned as an integer.
pub const MAX_BINARY_DEPTH: u32 = u64::BITS;

/// Validates a coordinate has finite components inside the globe.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use geohash_range::compute::validation::validate_coordinate;
/// use geohash_types::Coordinate;
///
/// assert!(validate_coordinate(&Coordinate::new(-23.5505, -46.6333)).is_ok());
/// assert!(validate_coordinate(&Coordinate::new(95.0, 0.0)).is_err());
/// assert!(validate_coordinate(&Coordinate::new(0.0, f64::NAN)).is_err());
/// ```
pub fn validate_coordinate(coord: &Coordinate) -> Result<()> {
    let (lat, lon) = (coord.lat, coord.lon);

    if !coord.is_finite() {
        let message = if lat.is_finite() {
            format!("Longitude must be finite, got: {}", lon)
        } else {
            format!("Latitude must be finite, got: {}", lat)
        };
        return Err(GeohashError::InvalidCoordinate(message));
    }

    if !coord.is_on_globe() {
        let message = if Coordinate::LAT_RANGE.contains(&lat) {
            format!("Longitude out of range [-180.0, 180.0]: {}", lon)
        } else {
            format!("Latitude out of range [-90.0, 90.0]: {}", lat)
        };
        return Err(GeohashError::InvalidCoordinate(message));
    }

    Ok(())
}

/// Validates a depth for string output: positive, a multiple of five and no
/// deeper than [`MAX_STRING_DEPTH`].
///
/// ```
/// use geohash_range::compute::validation::validate_string_depth;
///
/// assert!(validate_string_depth(50).is_ok());
/// assert!(validate_string_depth(0).is_err());
/// assert!(validate_string_depth(12).is_err());
/// assert!(validate_string_depth(65).is_err());
/// ```
pub fn validate_string_depth(depth: u32) -> Result<()> {
    validate_binary_depth(depth)?;

    if depth % BITS_PER_SYMBOL != 0 {
        return Err(GeohashError::InvalidDepth {
            depth,
            reason: "must be a multiple of 5 for string output",
        });
    }

    if depth > MAX_STRING_DEPTH {
        return Err(GeohashError::InvalidDepth {
            depth,
            reason: "string output holds at most 60 bits",
        });
    }

    Ok(())
}

/// Validates a depth for integer output: between 1 and 64 bits.
pub fn validate_binary_depth(depth: u32) -> Result<()> {
    if depth == 0 {
        return Err(GeohashError::InvalidDepth {
            depth,
            reason: "must be positive",
        });
    }

    if depth > MAX_BINARY_DEPTH {
        return Err(GeohashError::InvalidDepth {
            depth,
            reason: "integer output holds at most 64 bits",
        });
    }

    Ok(())
}

/// Validates the number of decimal digits kept by `decode`.
pub fn validate_precision(precision: u32) -> Result<()> {
    if precision > MAX_PRECISION {
        return Err(GeohashError::InvalidPrecision(precision));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        for (lat, lon) in [(0.0, 0.0), (90.0, 180.0), (-90.0, -180.0), (40.7128, -74.0060)] {
            assert!(validate_coordinate(&Coordinate::new(lat, lon)).is_ok());
        }
    }

    #[test]
    fn test_invalid_coordinates() {
        let cases = [
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
            (f64::INFINITY, 0.0),
            (0.0, f64::NEG_INFINITY),
            (90.0001, 0.0),
            (-90.0001, 0.0),
            (0.0, 180.0001),
            (0.0, -180.0001),
        ];
        for (lat, lon) in cases {
            let result = validate_coordinate(&Coordinate::new(lat, lon));
            assert!(
                matches!(result, Err(GeohashError::InvalidCoordinate(_))),
                "({}, {}) should be rejected",
                lat,
                lon
            );
        }
    }

    #[test]
    fn test_coordinate_error_names_the_axis() {
        let message = |lat, lon| match validate_coordinate(&Coordinate::new(lat, lon)) {
            Err(GeohashError::InvalidCoordinate(message)) => message,
            other => panic!("({}, {}) gave {:?}", lat, lon, other),
        };

        assert_eq!(message(f64::NAN, 0.0), "Latitude must be finite, got: NaN");
        assert_eq!(message(0.0, f64::INFINITY), "Longitude must be finite, got: inf");
        assert_eq!(message(91.0, 0.0), "Latitude out of range [-90.0, 90.0]: 91");
        assert_eq!(message(0.0, -181.5), "Longitude out of range [-180.0, 180.0]: -181.5");
        // Latitude is reported first when both axes are bad.
        assert_eq!(message(95.0, 200.0), "Latitude out of range [-90.0, 90.0]: 95");
    }

    #[test]
    fn test_string_depth() {
        for depth in (5..=60).step_by(5) {
            assert!(validate_string_depth(depth).is_ok());
        }
        for depth in [0, 1, 4, 7, 49, 61, 64, 65] {
            assert!(validate_string_depth(depth).is_err(), "depth {}", depth);
        }
    }

    #[test]
    fn test_binary_depth() {
        assert!(validate_binary_depth(1).is_ok());
        assert!(validate_binary_depth(7).is_ok());
        assert!(validate_binary_depth(64).is_ok());
        assert!(validate_binary_depth(0).is_err());
        assert!(validate_binary_depth(65).is_err());
    }

    #[test]
    fn test_precision() {
        assert!(validate_precision(0).is_ok());
        assert!(validate_precision(MAX_PRECISION).is_ok());
        assert_eq!(
            validate_precision(MAX_PRECISION + 1),
            Err(GeohashError::InvalidPrecision(MAX_PRECISION + 1))
        );
    }
}
