use crate::axis::Axis;
use geo::Point;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A geographic position in decimal degrees.
///
/// Latitude comes first, matching the way geohash coordinates are usually
/// written. When converted to a `geo::Point`, longitude becomes `x` and
/// latitude becomes `y`.
///
/// # Examples
///
/// ```
/// use geohash_types::coordinate::Coordinate;
/// use geo::Point;
///
/// let coord = Coordinate::new(-23.5505, -46.6333);
/// let point: Point<f64> = coord.into();
/// assert_eq!(point.x(), -46.6333);
/// assert_eq!(point.y(), -23.5505);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, [-90, 90]
    pub lat: f64,
    /// Longitude in degrees, [-180, 180]
    pub lon: f64,
}

impl Coordinate {
    /// Valid latitudes in degrees.
    pub const LAT_RANGE: RangeInclusive<f64> = -90.0..=90.0;
    /// Valid longitudes in degrees.
    pub const LON_RANGE: RangeInclusive<f64> = -180.0..=180.0;

    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Value of the coordinate along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Lon => self.lon,
            Axis::Lat => self.lat,
        }
    }

    /// Whether both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Whether the coordinate lies on the globe ([-90, 90] x [-180, 180]).
    pub fn is_on_globe(&self) -> bool {
        Self::LAT_RANGE.contains(&self.lat) && Self::LON_RANGE.contains(&self.lon)
    }

    /// Returns `[lat, lon]`.
    pub fn to_array(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }
}

impl From<Coordinate> for Point<f64> {
    fn from(coord: Coordinate) -> Self {
        Point::new(coord.lon, coord.lat)
    }
}

impl From<Point<f64>> for Coordinate {
    fn from(point: Point<f64>) -> Self {
        Coordinate::new(point.y(), point.x())
    }
}

impl From<(f64, f64)> for Coordinate {
    /// Builds a coordinate from a `(lat, lon)` pair.
    fn from((lat, lon): (f64, f64)) -> Self {
        Coordinate::new(lat, lon)
    }
}
