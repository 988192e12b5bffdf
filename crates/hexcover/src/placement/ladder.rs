//! Overlap ladder: device counts that never drop as the lattice gets denser.
//!
//! The greedy passes can land one device lower at a denser lattice than at a
//! looser one. Each area is therefore also solved at every ladder step
//! `1.0, 1.0 - step, ...` strictly looser than the requested overlap, and the
//! area is topped up to the largest count seen there. Along the ladder the
//! final count is non-increasing in overlap.
//!
//! Top-up uses farthest-point insertion over the fine samples: each new device
//! goes on the sample farthest from every device, first index winning ties.

use tracing::debug;

use super::sample::SampleSet;
use super::types::PlacementCfg;
use crate::geom2::{dist2, Point};

/// Ladder steps strictly looser than `overlap`, loosest first.
///
/// Steps are rounded to nine decimals so `0.95` on the ladder is the same
/// float as a caller's `0.95`. An `overlap` within `1e-9` of a step skips it.
pub fn looser_overlaps(overlap: f64, step: f64) -> Vec<f64> {
    let mut out = Vec::new();
    if !(step > 0.0) {
        return out;
    }
    for k in 0usize.. {
        let level = ((1.0 - k as f64 * step) * 1e9).round() / 1e9;
        if level <= overlap + 1e-9 || level <= 0.0 {
            break;
        }
        out.push(level);
    }
    out
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TopUpOutcome {
    pub added: usize,
    pub cap_reached: bool,
}

/// Add devices on fine samples until `target` is met, the device cap fires,
/// or every sample already carries a device.
pub(crate) fn top_up(
    samples: &SampleSet,
    devices: &mut Vec<Point>,
    target: usize,
    cfg: &PlacementCfg,
) -> TopUpOutcome {
    let mut out = TopUpOutcome::default();
    if devices.len() >= target {
        return out;
    }
    let mut nearest: Vec<f64> = samples
        .pts
        .iter()
        .map(|p| {
            devices
                .iter()
                .map(|d| dist2(*p, *d))
                .fold(f64::INFINITY, f64::min)
        })
        .collect();
    while devices.len() < target {
        if devices.len() >= cfg.max_devices {
            out.cap_reached = true;
            break;
        }
        let mut best: Option<(usize, f64)> = None;
        for (i, &d) in nearest.iter().enumerate() {
            if d > 0.0 && best.is_none_or(|(_, b)| d > b) {
                best = Some((i, d));
            }
        }
        let Some((i, _)) = best else {
            break;
        };
        let p = samples.pts[i];
        devices.push(p);
        for (q, n) in samples.pts.iter().zip(nearest.iter_mut()) {
            *n = n.min(dist2(*q, p));
        }
        out.added += 1;
    }
    debug!(
        target,
        added = out.added,
        cap_reached = out.cap_reached,
        "ladder top-up"
    );
    out
}
