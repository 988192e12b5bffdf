//! Hexagonal seed lattice.
//!
//! Rows are `r·1.5·o` apart, columns `r·√3·o`; every other row is shifted by
//! half a column. The lattice is anchored half a step in from the bounding
//! box's minimum corner, so a square exactly one step wide gets one centred row.

use tracing::trace;

use super::sample::fit_steps;
use crate::geom2::{Point, PolygonTester, Region};

/// Which rows carry the half-column shift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LatticePhase {
    /// Odd rows shifted (base seeding).
    #[default]
    Even,
    /// Even rows shifted (escalator's offset lattice).
    Odd,
}

/// Admissible lattice points plus whether the point budget forced a coarser step.
#[derive(Clone, Debug, Default)]
pub struct Lattice {
    pub pts: Vec<Point>,
    pub clamped: bool,
}

/// Hex lattice of admissible points for device radius `r` (pixels) and overlap `o`.
pub fn hex_lattice<T: PolygonTester>(
    region: &Region<'_, T>,
    r: f64,
    overlap: f64,
    phase: LatticePhase,
    max_points: usize,
) -> Lattice {
    let Some(bb) = region.bbox() else {
        return Lattice::default();
    };
    let dx = r * 3f64.sqrt() * overlap;
    let dy = r * 1.5 * overlap;
    let (dx, dy, clamped) = fit_steps(&bb, dx, dy, max_points);

    let mut pts = Vec::new();
    for row in 0usize.. {
        let y = bb.min.y + dy * (row as f64 + 0.5);
        if y > bb.max.y {
            break;
        }
        let shifted = (row % 2 == 1) != (phase == LatticePhase::Odd);
        let x0 = bb.min.x + dx * if shifted { 1.0 } else { 0.5 };
        for col in 0usize.. {
            let x = x0 + dx * col as f64;
            if x > bb.max.x {
                break;
            }
            let p = Point::new(x, y);
            if region.admits(p) {
                pts.push(p);
            }
        }
    }
    trace!(count = pts.len(), dx, dy, ?phase, "hex_lattice");
    Lattice { pts, clamped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::{EvenOdd, Polygon};

    #[test]
    fn square_lattice_layout() {
        let sq = Polygon::rect(0.0, 0.0, 100.0, 100.0);
        let region = Region::new(&sq, &[], EvenOdd);
        let lat = hex_lattice(&region, 30.0, 0.9, LatticePhase::Even, 10_000);
        assert!(!lat.clamped);
        assert_eq!(lat.pts.len(), 4);
        let dx = 30.0 * 3f64.sqrt() * 0.9;
        // Row 0 unshifted, row 1 shifted by half a column.
        assert!((lat.pts[0].x - dx * 0.5).abs() < 1e-9);
        assert!((lat.pts[0].y - 20.25).abs() < 1e-9);
        assert!((lat.pts[2].x - dx).abs() < 1e-9);
        assert!((lat.pts[2].y - 60.75).abs() < 1e-9);
    }

    #[test]
    fn odd_phase_shifts_the_other_rows() {
        let sq = Polygon::rect(0.0, 0.0, 100.0, 100.0);
        let region = Region::new(&sq, &[], EvenOdd);
        let even = hex_lattice(&region, 10.0, 1.0, LatticePhase::Even, 10_000);
        let odd = hex_lattice(&region, 10.0, 1.0, LatticePhase::Odd, 10_000);
        let dx = 10.0 * 3f64.sqrt();
        assert!((even.pts[0].x - dx * 0.5).abs() < 1e-9);
        assert!((odd.pts[0].x - dx).abs() < 1e-9);
    }

    #[test]
    fn lattice_respects_exclusions() {
        let sq = Polygon::rect(0.0, 0.0, 200.0, 200.0);
        let excl = vec![Polygon::rect(50.0, 50.0, 150.0, 150.0)];
        let region = Region::new(&sq, &excl, EvenOdd);
        let lat = hex_lattice(&region, 10.0, 0.9, LatticePhase::Even, 100_000);
        assert!(!lat.pts.is_empty());
        for p in &lat.pts {
            assert!(!region.is_excluded(*p));
        }
    }

    // Rows and columns are counted per axis on a rectangle, so both only grow.
    #[test]
    fn tighter_overlap_never_yields_fewer_seeds() {
        let sq = Polygon::rect(0.0, 0.0, 300.0, 180.0);
        let region = Region::new(&sq, &[], EvenOdd);
        let mut prev = 0;
        for o in [1.0, 0.9, 0.8, 0.7, 0.6] {
            let n = hex_lattice(&region, 25.0, o, LatticePhase::Even, 100_000).pts.len();
            assert!(n >= prev, "overlap {o}: {n} < {prev}");
            prev = n;
        }
    }

    #[test]
    fn budget_clamp_coarsens_step() {
        let sq = Polygon::rect(0.0, 0.0, 1000.0, 1000.0);
        let region = Region::new(&sq, &[], EvenOdd);
        let lat = hex_lattice(&region, 1.0, 1.0, LatticePhase::Even, 500);
        assert!(lat.clamped);
        assert!(lat.pts.len() <= 500);
        assert!(!lat.pts.is_empty());
    }

    #[test]
    fn degenerate_area_has_no_lattice() {
        let two = Polygon::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        let region = Region::new(&two, &[], EvenOdd);
        assert!(hex_lattice(&region, 5.0, 0.9, LatticePhase::Even, 1000).pts.is_empty());
    }
}
