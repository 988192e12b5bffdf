//! A service area together with the exclusion zones that cut into it.

use super::types::{Bbox2, Point, Polygon, PolygonTester};

/// Admissible set of one service area: inside `area`, outside every exclusion.
///
/// Degenerate exclusions are dropped on construction; a degenerate area admits
/// nothing.
#[derive(Clone, Debug)]
pub struct Region<'a, T: PolygonTester> {
    area: &'a Polygon,
    exclusions: Vec<&'a Polygon>,
    tester: T,
}

impl<'a, T: PolygonTester> Region<'a, T> {
    pub fn new(area: &'a Polygon, exclusions: &'a [Polygon], tester: T) -> Self {
        Self {
            area,
            exclusions: exclusions.iter().filter(|e| !e.is_degenerate()).collect(),
            tester,
        }
    }

    #[inline]
    pub fn area(&self) -> &Polygon {
        self.area
    }

    #[inline]
    pub fn bbox(&self) -> Option<Bbox2> {
        self.area.bbox()
    }

    #[inline]
    pub fn is_excluded(&self, p: Point) -> bool {
        self.exclusions.iter().any(|e| self.tester.contains(p, e))
    }

    #[inline]
    pub fn admits(&self, p: Point) -> bool {
        !self.area.is_degenerate() && self.tester.contains(p, self.area) && !self.is_excluded(p)
    }
}
