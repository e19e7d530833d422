use serde::{Deserialize, Serialize};

/// The axis a single interleaved geohash bit refines.
///
/// Geohash bits alternate between the two axes, starting with longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Lon,
    Lat,
}

impl Axis {
    /// The axis of the first bit of every geohash.
    pub const FIRST: Axis = Axis::Lon;

    /// The axis refined by the following bit.
    pub fn flip(self) -> Self {
        match self {
            Axis::Lon => Axis::Lat,
            Axis::Lat => Axis::Lon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_alternates() {
        assert_eq!(Axis::Lon.flip(), Axis::Lat);
        assert_eq!(Axis::Lat.flip(), Axis::Lon);
        assert_eq!(Axis::FIRST.flip().flip(), Axis::FIRST);
    }
}
