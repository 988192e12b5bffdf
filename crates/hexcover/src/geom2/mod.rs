//! 2D geometry kernel (pixel space).
//!
//! Purpose
//! - Provide the small set of predicates the placement engine needs:
//!   point-in-polygon, shoelace area, squared distances and bounding boxes.
//! - Keep every function total: degenerate rings yield empty/zero results,
//!   never errors or panics.
//!
//! Conventions
//! - Coordinates are Cartesian and only need to be consistent across the
//!   polygons and positions of one call (screen or math orientation both work).
//! - Polygons are implicit rings; the closing edge last→first is not stored.
//!
//! Code cross-refs: `PolygonTester`, `Region`, `placement::Placer`

pub mod rand;
mod region;
mod types;
mod util;

pub use region::Region;
pub use types::{Bbox2, EvenOdd, Point, Polygon, PolygonTester, Winding};
pub use util::{
    area_centroid, dist2, point_in_polygon, polygon_area, signed_area, winding_number,
};
