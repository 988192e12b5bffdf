//! Density escalator.
//!
//! A handful of large discs can satisfy the coverage ratio while still being a
//! poor antenna layout. The escalator enforces a minimum plausible density:
//! `ceil(theoretical_min · multiplier)` devices, where the multiplier grows as
//! the overlap factor shrinks. Extra devices come from an offset hex lattice
//! (tighter spacing, opposite row phase) and keep a minimum distance to every
//! existing device.

use tracing::debug;

use super::index::BucketGrid;
use super::seed::{hex_lattice, LatticePhase};
use super::types::PlacementCfg;
use crate::geom2::{Point, PolygonTester, Region};

/// `area / (π r²)`: devices needed under perfect packing.
#[inline]
pub fn theoretical_min(area_px: f64, r: f64) -> f64 {
    area_px / (std::f64::consts::PI * r * r)
}

/// Device count the escalator tops an area up to.
pub fn density_floor(theoretical_min: f64, overlap: f64, cfg: &PlacementCfg) -> usize {
    let target = theoretical_min * cfg.density_multiplier(overlap);
    if target.is_finite() && target > 0.0 {
        target.ceil() as usize
    } else {
        0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct EscalateOutcome {
    pub added: usize,
    pub cap_reached: bool,
    pub clamped: bool,
}

/// Add offset-lattice devices until `floor` is met or candidates run out.
/// `overlap` is the factor the base lattice was laid with.
pub(crate) fn escalate<T: PolygonTester>(
    region: &Region<'_, T>,
    devices: &mut Vec<Point>,
    r: f64,
    overlap: f64,
    floor: usize,
    cfg: &PlacementCfg,
) -> EscalateOutcome {
    let mut out = EscalateOutcome::default();
    if devices.len() >= floor {
        return out;
    }
    let lattice = hex_lattice(
        region,
        r,
        overlap * cfg.escalator_spacing,
        LatticePhase::Odd,
        cfg.max_grid_points,
    );
    out.clamped = lattice.clamped;
    let min_sep = cfg.escalator_min_separation * r;
    let mut placed = BucketGrid::from_points(r, devices);
    let before = devices.len();
    for c in lattice.pts {
        if devices.len() >= floor {
            break;
        }
        if devices.len() >= cfg.max_devices {
            out.cap_reached = true;
            break;
        }
        if placed.any_within(devices, c, min_sep) {
            continue;
        }
        placed.insert(devices.len(), c);
        devices.push(c);
    }
    out.added = devices.len() - before;
    debug!(
        floor,
        before,
        added = out.added,
        short = floor.saturating_sub(devices.len()),
        "density escalator"
    );
    out
}
