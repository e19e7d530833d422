//! # geohash-types
//!
//! Core value types shared by the `geohash-range` codec.
//!
//! - **Coordinates**: `Coordinate` (latitude/longitude in degrees)
//! - **Bounding boxes**: `BoundingBox`, the rectangle a geohash denotes
//! - **Axes**: `Axis`, the alternating longitude/latitude bit axis
//! - **Grid cells**: `GridCell`, a (column, row) position inside a character grid
//!
//! All types are serializable with Serde and convert to and from the `geo`
//! crate's geometric primitives (x = longitude, y = latitude).
//!
//! ## Examples
//!
//! ```rust
//! use geohash_types::bbox::BoundingBox;
//! use geohash_types::coordinate::Coordinate;
//!
//! let sao_paulo = Coordinate::new(-23.5505, -46.6333);
//! let southern_america = BoundingBox::new(-60.0, -90.0, 0.0, -30.0);
//! assert!(southern_america.contains(&sao_paulo));
//! ```

pub mod axis;
pub mod bbox;
pub mod coordinate;
pub mod grid;

pub use axis::Axis;
pub use bbox::BoundingBox;
pub use coordinate::Coordinate;
pub use grid::GridCell;
