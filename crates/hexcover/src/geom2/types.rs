//! Basic 2D types used by the coverage engine.
//!
//! - `Polygon`: implicit ring of pixel-space points (service area or exclusion).
//! - `Bbox2`: closed axis-aligned bounds used to scan lattices and grids.
//! - `PolygonTester`: swappable inside/outside predicate (`EvenOdd`, `Winding`).

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::util::{point_in_polygon, winding_number};

/// Pixel-space coordinate. Serialized as `[x, y]`.
pub type Point = Vector2<f64>;

/// Ordered ring of points, implicitly closed.
///
/// Fewer than 3 points is degenerate: such a polygon contains nothing and has
/// zero area.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    pub pts: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(pts: Vec<Point>) -> Self {
        Self { pts }
    }

    /// Axis-aligned rectangle with corners `(x0, y0)` and `(x1, y1)`.
    pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.pts.len() < 3
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pts.iter().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Edges as `(a, b)` pairs including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.pts.len();
        (0..n).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }

    /// Bounds of a non-degenerate ring.
    pub fn bbox(&self) -> Option<Bbox2> {
        if self.is_degenerate() {
            return None;
        }
        let mut b = Bbox2 {
            min: self.pts[0],
            max: self.pts[0],
        };
        for p in &self.pts[1..] {
            b.min.x = b.min.x.min(p.x);
            b.min.y = b.min.y.min(p.y);
            b.max.x = b.max.x.max(p.x);
            b.max.y = b.max.y.max(p.y);
        }
        Some(b)
    }
}

/// Closed axis-aligned box `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox2 {
    pub min: Point,
    pub max: Point,
}

impl Bbox2 {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Inside/outside predicate shared by the seed generator and the samplers.
///
/// Implementations must be deterministic: a point exactly on an edge may go
/// either way, but always the same way for a fixed polygon.
pub trait PolygonTester {
    fn contains(&self, p: Point, poly: &Polygon) -> bool;
}

/// Ray casting (even-odd rule).
#[derive(Clone, Copy, Debug, Default)]
pub struct EvenOdd;

impl PolygonTester for EvenOdd {
    #[inline]
    fn contains(&self, p: Point, poly: &Polygon) -> bool {
        point_in_polygon(p, poly)
    }
}

/// Non-zero winding rule. Agrees with `EvenOdd` on simple polygons; differs on
/// self-overlapping rings where a region is wound twice.
#[derive(Clone, Copy, Debug, Default)]
pub struct Winding;

impl PolygonTester for Winding {
    #[inline]
    fn contains(&self, p: Point, poly: &Polygon) -> bool {
        winding_number(p, poly) != 0
    }
}

impl<T: PolygonTester + ?Sized> PolygonTester for &T {
    #[inline]
    fn contains(&self, p: Point, poly: &Polygon) -> bool {
        (**self).contains(p, poly)
    }
}
