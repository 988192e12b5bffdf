//! Greedy gap-fill over the coarse sample grid.
//!
//! Each step scores every uncovered sample by how many uncovered samples a
//! device placed on it would cover (itself included) and places one device at
//! the best, first index winning ties. Three bounds stop the loop: `gap_batch`
//! additions per pass, `gap_max_passes` passes, and the per-area device caps.

use tracing::{debug, trace};

use super::evaluate::Coverage;
use super::sample::SampleSet;
use super::types::PlacementCfg;
use crate::geom2::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct GapFillOutcome {
    pub added: usize,
    pub iterations: usize,
    pub candidates: usize,
    pub cap_reached: bool,
}

/// Best uncovered sample and its score, or `None` when nothing scores > 0.
pub fn best_candidate(samples: &SampleSet, cov: &Coverage, r: f64) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for i in cov.uncovered() {
        let mut score = 0;
        samples.for_each_within(samples.pts[i], r, |j| {
            if !cov.covered[j] {
                score += 1;
            }
        });
        if score > 0 && best.is_none_or(|(_, s)| score > s) {
            best = Some((i, score));
        }
    }
    best
}

pub(crate) fn gap_fill(
    samples: &SampleSet,
    devices: &mut Vec<Point>,
    r: f64,
    cfg: &PlacementCfg,
) -> GapFillOutcome {
    let mut out = GapFillOutcome::default();
    let threshold = cfg.gap_cover_threshold;
    for pass in 0..cfg.gap_max_passes {
        let mut cov = Coverage::evaluate(samples, devices, r);
        if cov.ratio() >= threshold {
            return out;
        }
        out.iterations += 1;
        for _ in 0..cfg.gap_batch {
            if cov.ratio() >= threshold {
                break;
            }
            if out.added >= cfg.max_gap_antennas || devices.len() >= cfg.max_devices {
                debug!(added = out.added, devices = devices.len(), "gap-fill cap reached");
                out.cap_reached = true;
                return out;
            }
            out.candidates += cov.len() - cov.covered_count();
            let Some((i, score)) = best_candidate(samples, &cov, r) else {
                return out;
            };
            let p = samples.pts[i];
            devices.push(p);
            cov.mark_within(samples, p, r);
            out.added += 1;
            trace!(pass, sample = i, score, ratio = cov.ratio(), "gap-fill placed");
        }
    }
    if Coverage::evaluate(samples, devices, r).ratio() < threshold {
        debug!(passes = cfg.gap_max_passes, "gap-fill passes exhausted below threshold");
        out.cap_reached = true;
    }
    out
}
