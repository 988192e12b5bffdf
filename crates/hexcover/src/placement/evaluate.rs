//! Coverage evaluator: which samples lie within `r` of some device.

use super::sample::SampleSet;
use crate::geom2::Point;

/// Covered flags parallel to a `SampleSet`, with a running count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Coverage {
    pub covered: Vec<bool>,
    n_covered: usize,
}

impl Coverage {
    /// Classify every sample against the current devices.
    pub fn evaluate(samples: &SampleSet, devices: &[Point], r: f64) -> Self {
        let mut cov = Self {
            covered: vec![false; samples.len()],
            n_covered: 0,
        };
        for &d in devices {
            cov.mark_within(samples, d, r);
        }
        cov
    }

    /// Flag the samples a device at `p` covers; returns how many were new.
    pub fn mark_within(&mut self, samples: &SampleSet, p: Point, r: f64) -> usize {
        let before = self.n_covered;
        let covered = &mut self.covered;
        let n = &mut self.n_covered;
        samples.for_each_within(p, r, |i| {
            if !covered[i] {
                covered[i] = true;
                *n += 1;
            }
        });
        self.n_covered - before
    }

    #[inline]
    pub fn covered_count(&self) -> usize {
        self.n_covered
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.covered.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.covered.is_empty()
    }

    /// Covered share; an empty sample set counts as fully covered.
    pub fn ratio(&self) -> f64 {
        if self.covered.is_empty() {
            1.0
        } else {
            self.n_covered as f64 / self.covered.len() as f64
        }
    }

    /// Indices of uncovered samples, in sample order.
    pub fn uncovered(&self) -> impl Iterator<Item = usize> + '_ {
        self.covered
            .iter()
            .enumerate()
            .filter_map(|(i, c)| (!c).then_some(i))
    }
}
