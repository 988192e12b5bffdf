//! Uniform bucket grid for radius queries.
//!
//! Points are bucketed by `(⌊x/cell⌋, ⌊y/cell⌋)`. Queries visit only the cells
//! overlapping the query disc and apply the exact `dist2 <= r²` test, so they
//! return the same set as a full scan. Callers only count or flag hits, which
//! keeps results independent of the map's iteration order.

use std::collections::HashMap;

use crate::geom2::{dist2, Point};

#[derive(Clone, Debug)]
pub(crate) struct BucketGrid {
    cell: f64,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl BucketGrid {
    pub(crate) fn new(cell: f64) -> Self {
        debug_assert!(cell > 0.0 && cell.is_finite(), "bucket cell must be positive");
        Self {
            cell,
            buckets: HashMap::new(),
        }
    }

    pub(crate) fn from_points(cell: f64, pts: &[Point]) -> Self {
        let mut grid = Self::new(cell);
        for (i, p) in pts.iter().enumerate() {
            grid.insert(i, *p);
        }
        grid
    }

    #[inline]
    fn coord(&self, v: f64) -> i64 {
        (v / self.cell).floor() as i64
    }

    /// Register `pts[idx] == p`.
    pub(crate) fn insert(&mut self, idx: usize, p: Point) {
        let key = (self.coord(p.x), self.coord(p.y));
        self.buckets.entry(key).or_default().push(idx);
    }

    /// Call `f(i)` for every indexed `pts[i]` with `dist2(pts[i], p) <= r²`.
    pub(crate) fn for_each_within(
        &self,
        pts: &[Point],
        p: Point,
        r: f64,
        mut f: impl FnMut(usize),
    ) {
        let r2 = r * r;
        let (x0, x1) = (self.coord(p.x - r), self.coord(p.x + r));
        let (y0, y1) = (self.coord(p.y - r), self.coord(p.y + r));
        for kx in x0..=x1 {
            for ky in y0..=y1 {
                let Some(bucket) = self.buckets.get(&(kx, ky)) else {
                    continue;
                };
                for &i in bucket {
                    if dist2(pts[i], p) <= r2 {
                        f(i);
                    }
                }
            }
        }
    }

    pub(crate) fn any_within(&self, pts: &[Point], p: Point, r: f64) -> bool {
        let r2 = r * r;
        let (x0, x1) = (self.coord(p.x - r), self.coord(p.x + r));
        let (y0, y1) = (self.coord(p.y - r), self.coord(p.y + r));
        (x0..=x1).any(|kx| {
            (y0..=y1).any(|ky| {
                self.buckets
                    .get(&(kx, ky))
                    .is_some_and(|b| b.iter().any(|&i| dist2(pts[i], p) <= r2))
            })
        })
    }

    #[cfg(test)]
    pub(crate) fn count_within(&self, pts: &[Point], p: Point, r: f64) -> usize {
        let mut n = 0;
        self.for_each_within(pts, p, r, |_| n += 1);
        n
    }
}
