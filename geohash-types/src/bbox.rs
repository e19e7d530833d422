use crate::axis::Axis;
use crate::coordinate::Coordinate;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned latitude/longitude rectangle.
///
/// This is the region a geohash denotes. It wraps a `geo::Rect` whose `x`
/// axis is longitude and `y` axis is latitude. Narrowing only ever shrinks a
/// box; there is no operation that widens one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl BoundingBox {
    /// Create a bounding box from its south-west and north-east corners.
    ///
    /// # Arguments
    ///
    /// * `min_lat` - Southern edge
    /// * `min_lon` - Western edge
    /// * `max_lat` - Northern edge
    /// * `max_lon` - Eastern edge
    ///
    /// # Examples
    ///
    /// ```
    /// use geohash_types::bbox::BoundingBox;
    ///
    /// let bbox = BoundingBox::new(40.7, -74.0, 40.8, -73.9);
    /// assert_eq!(bbox.sw().lat, 40.7);
    /// assert_eq!(bbox.ne().lon, -73.9);
    /// ```
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_lon, y: min_lat },
                geo::coord! { x: max_lon, y: max_lat },
            ),
        }
    }

    /// The whole globe: [-90, 90] x [-180, 180].
    pub fn world() -> Self {
        Self::new(-90.0, -180.0, 90.0, 180.0)
    }

    pub fn min_lat(&self) -> f64 {
        self.rect.min().y
    }

    pub fn min_lon(&self) -> f64 {
        self.rect.min().x
    }

    pub fn max_lat(&self) -> f64 {
        self.rect.max().y
    }

    pub fn max_lon(&self) -> f64 {
        self.rect.max().x
    }

    /// Lower edge along `axis`.
    pub fn min(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Lon => self.min_lon(),
            Axis::Lat => self.min_lat(),
        }
    }

    /// Upper edge along `axis`.
    pub fn max(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Lon => self.max_lon(),
            Axis::Lat => self.max_lat(),
        }
    }

    /// Midpoint along `axis`.
    pub fn mid(&self, axis: Axis) -> f64 {
        (self.min(axis) + self.max(axis)) / 2.0
    }

    /// South-west corner.
    pub fn sw(&self) -> Coordinate {
        Coordinate::new(self.min_lat(), self.min_lon())
    }

    /// North-east corner.
    pub fn ne(&self) -> Coordinate {
        Coordinate::new(self.max_lat(), self.max_lon())
    }

    /// Center of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.mid(Axis::Lat), self.mid(Axis::Lon))
    }

    /// Extent in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon() - self.min_lon()
    }

    /// Extent in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat() - self.min_lat()
    }

    /// Keep the half of the box above the midpoint of `axis`.
    pub fn upper_half(&self, axis: Axis) -> Self {
        let mid = self.mid(axis);
        match axis {
            Axis::Lon => Self::new(self.min_lat(), mid, self.max_lat(), self.max_lon()),
            Axis::Lat => Self::new(mid, self.min_lon(), self.max_lat(), self.max_lon()),
        }
    }

    /// Keep the half of the box below the midpoint of `axis`.
    pub fn lower_half(&self, axis: Axis) -> Self {
        let mid = self.mid(axis);
        match axis {
            Axis::Lon => Self::new(self.min_lat(), self.min_lon(), self.max_lat(), mid),
            Axis::Lat => Self::new(self.min_lat(), self.min_lon(), mid, self.max_lon()),
        }
    }

    /// Check if a coordinate lies inside the box (edges inclusive).
    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.lat >= self.min_lat()
            && coord.lat <= self.max_lat()
            && coord.lon >= self.min_lon()
            && coord.lon <= self.max_lon()
    }

    /// Check if `other` lies entirely inside this box (edges inclusive).
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.min_lat() >= self.min_lat()
            && other.max_lat() <= self.max_lat()
            && other.min_lon() >= self.min_lon()
            && other.max_lon() <= self.max_lon()
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::world()
    }
}

impl From<BoundingBox> for Rect {
    fn from(bbox: BoundingBox) -> Self {
        bbox.rect
    }
}
