//! Coverage sampler: axis-aligned sample grids inside a region.
//!
//! Samples only measure coverage; they are never device positions by
//! themselves (the gap-fill and fine passes may choose to place a device on
//! one). Two resolutions are used per area: a coarse grid for the greedy
//! loop and a fine grid for the final hole-filling pass and the report.

use tracing::{trace, warn};

use super::index::BucketGrid;
use crate::geom2::{area_centroid, Bbox2, Point, PolygonTester, Region};

/// Enlarge `(dx, dy)` by a common factor until a scan of `bb` visits at most
/// `max_points` raw points. Returns the steps and whether they changed.
pub(crate) fn fit_steps(bb: &Bbox2, dx: f64, dy: f64, max_points: usize) -> (f64, f64, bool) {
    let raw = |s: f64| {
        ((bb.width() / (dx * s)).floor() + 1.0) * ((bb.height() / (dy * s)).floor() + 1.0)
    };
    let max = max_points.max(1) as f64;
    if raw(1.0) <= max {
        return (dx, dy, false);
    }
    let mut s = (raw(1.0) / max).sqrt();
    while raw(s) > max {
        s *= 1.05;
    }
    warn!(dx, dy, factor = s, max_points, "grid budget exceeded, coarsening step");
    (dx * s, dy * s, true)
}

/// Sample points of one resolution, indexed for radius queries.
#[derive(Clone, Debug)]
pub struct SampleSet {
    pub pts: Vec<Point>,
    /// Grid step in pixels (after any clamp).
    pub spacing: f64,
    pub clamped: bool,
    index: BucketGrid,
}

impl SampleSet {
    /// Grid at spacing `r · factor`; the radius-query index uses cell size `r`.
    pub fn grid<T: PolygonTester>(
        region: &Region<'_, T>,
        r: f64,
        factor: f64,
        max_points: usize,
    ) -> Self {
        let (pts, spacing, clamped) = sample_grid(region, r * factor, max_points);
        let index = BucketGrid::from_points(r, &pts);
        Self {
            pts,
            spacing,
            clamped,
            index,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Visit every sample within `r` of `p` (inclusive).
    #[inline]
    pub(crate) fn for_each_within(&self, p: Point, r: f64, f: impl FnMut(usize)) {
        self.index.for_each_within(&self.pts, p, r, f);
    }
}

/// Admissible grid points at `step`, anchored half a step in from the
/// bounding box's minimum corner. Returns `(points, step_used, clamped)`.
/// Falls back to the area centroid alone when no grid point is admissible.
pub fn sample_grid<T: PolygonTester>(
    region: &Region<'_, T>,
    step: f64,
    max_points: usize,
) -> (Vec<Point>, f64, bool) {
    let Some(bb) = region.bbox() else {
        return (Vec::new(), step, false);
    };
    let (step, _, clamped) = fit_steps(&bb, step, step, max_points);
    let mut pts = Vec::new();
    for row in 0usize.. {
        let y = bb.min.y + step * (row as f64 + 0.5);
        if y > bb.max.y {
            break;
        }
        for col in 0usize.. {
            let x = bb.min.x + step * (col as f64 + 0.5);
            if x > bb.max.x {
                break;
            }
            let p = Point::new(x, y);
            if region.admits(p) {
                pts.push(p);
            }
        }
    }
    // Areas narrower than one step still get a sample when their centroid is admissible.
    if pts.is_empty() {
        if let Some(c) = area_centroid(region.area()).filter(|c| region.admits(*c)) {
            pts.push(c);
        }
    }
    trace!(count = pts.len(), step, "sample_grid");
    (pts, step, clamped)
}
