//! Fine pass: plug holes the coarse grid could not see.
//!
//! Walks the fine samples first-to-last and places a device directly on every
//! sample that is still uncovered, unless a device already sits within
//! `fine_min_separation · r`. Coverage is updated after each placement, so one
//! new device usually retires a run of neighbouring holes.

use tracing::debug;

use super::evaluate::Coverage;
use super::index::BucketGrid;
use super::sample::SampleSet;
use super::types::PlacementCfg;
use crate::geom2::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FinePassOutcome {
    pub added: usize,
    pub cap_reached: bool,
}

pub(crate) fn fine_pass(
    samples: &SampleSet,
    devices: &mut Vec<Point>,
    r: f64,
    cfg: &PlacementCfg,
) -> FinePassOutcome {
    let mut cov = Coverage::evaluate(samples, devices, r);
    let mut placed = BucketGrid::from_points(r, devices);
    let min_sep = cfg.fine_min_separation * r;
    let mut added = 0;
    let mut cap_reached = false;
    for i in 0..samples.len() {
        if cov.covered[i] {
            continue;
        }
        if added >= cfg.fine_max_additions || devices.len() >= cfg.max_devices {
            cap_reached = true;
            break;
        }
        let p = samples.pts[i];
        if placed.any_within(devices, p, min_sep) {
            continue;
        }
        placed.insert(devices.len(), p);
        devices.push(p);
        cov.mark_within(samples, p, r);
        added += 1;
    }
    if added > 0 || cap_reached {
        debug!(added, cap_reached, ratio = cov.ratio(), "fine pass");
    }
    FinePassOutcome {
        added,
        cap_reached,
    }
}
