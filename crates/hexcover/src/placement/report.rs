//! Report builder: per-area reports and their roll-up.

use super::types::{CoverageReport, PlacementCfg, SolverMode};

/// What the per-area pipeline did, as seen by the report.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct AreaStats {
    pub covered: usize,
    pub samples: usize,
    pub devices: usize,
    pub theoretical_min: f64,
    pub tightened: bool,
    pub fine_added: usize,
    pub escalated: usize,
    pub cap_reached: bool,
}

pub(crate) fn area_report(stats: &AreaStats, cfg: &PlacementCfg) -> CoverageReport {
    let coverage_pct = if stats.samples == 0 {
        0.0
    } else {
        stats.covered as f64 / stats.samples as f64 * 100.0
    };
    let mode = if stats.escalated > 0 {
        SolverMode::Hybrid
    } else if stats.tightened || stats.fine_added > 0 {
        SolverMode::Adaptive
    } else {
        SolverMode::Greedy
    };
    CoverageReport {
        coverage_pct,
        target_pct: cfg.gap_cover_threshold * 100.0,
        device_count: stats.devices,
        theoretical_min: stats.theoretical_min.ceil() as usize,
        overlap: cfg.overlap_factor,
        mode,
        density_fallback: stats.escalated > 0,
        alternative_seeding: stats.tightened,
        cap_reached: stats.cap_reached,
        sample_count: stats.samples,
    }
}

/// Aggregate per-area reports: coverage weighted by sample count, counts
/// summed, the most escalated mode, flags OR-ed.
pub fn roll_up(areas: &[CoverageReport], cfg: &PlacementCfg) -> CoverageReport {
    let mut out = CoverageReport::empty(cfg);
    let mut weighted = 0.0;
    for a in areas {
        weighted += a.coverage_pct * a.sample_count as f64;
        out.sample_count += a.sample_count;
        out.device_count += a.device_count;
        out.theoretical_min += a.theoretical_min;
        out.mode = out.mode.max(a.mode);
        out.density_fallback |= a.density_fallback;
        out.alternative_seeding |= a.alternative_seeding;
        out.cap_reached |= a.cap_reached;
    }
    if out.sample_count > 0 {
        out.coverage_pct = weighted / out.sample_count as f64;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_escalation_paths() {
        let cfg = PlacementCfg::default();
        let base = AreaStats {
            covered: 10,
            samples: 10,
            devices: 3,
            theoretical_min: 2.2,
            ..AreaStats::default()
        };
        let r = area_report(&base, &cfg);
        assert_eq!(r.mode, SolverMode::Greedy);
        assert_eq!(r.theoretical_min, 3);
        assert_eq!(r.coverage_pct, 100.0);
        assert!((r.target_pct - 99.5).abs() < 1e-9);

        let tightened = AreaStats {
            tightened: true,
            ..base
        };
        let r = area_report(&tightened, &cfg);
        assert_eq!(r.mode, SolverMode::Adaptive);
        assert!(r.alternative_seeding);

        let fine = AreaStats {
            fine_added: 1,
            ..base
        };
        assert_eq!(area_report(&fine, &cfg).mode, SolverMode::Adaptive);

        let escalated = AreaStats {
            escalated: 2,
            tightened: true,
            ..base
        };
        let r = area_report(&escalated, &cfg);
        assert_eq!(r.mode, SolverMode::Hybrid);
        assert!(r.density_fallback);
    }

    #[test]
    fn no_samples_reports_zero_coverage() {
        let r = area_report(&AreaStats::default(), &PlacementCfg::default());
        assert_eq!(r.coverage_pct, 0.0);
        assert_eq!(r.theoretical_min, 0);
        assert_eq!(r.device_count, 0);
    }

    #[test]
    fn roll_up_weights_by_samples() {
        let cfg = PlacementCfg::default();
        let a = CoverageReport {
            coverage_pct: 100.0,
            sample_count: 300,
            device_count: 4,
            theoretical_min: 3,
            ..CoverageReport::empty(&cfg)
        };
        let b = CoverageReport {
            coverage_pct: 50.0,
            sample_count: 100,
            device_count: 1,
            theoretical_min: 2,
            mode: SolverMode::Adaptive,
            cap_reached: true,
            ..CoverageReport::empty(&cfg)
        };
        let r = roll_up(&[a, b], &cfg);
        assert!((r.coverage_pct - 87.5).abs() < 1e-9);
        assert_eq!(r.device_count, 5);
        assert_eq!(r.theoretical_min, 5);
        assert_eq!(r.mode, SolverMode::Adaptive);
        assert!(r.cap_reached);
        assert!(!r.density_fallback);

        let empty = roll_up(&[], &cfg);
        assert_eq!(empty, CoverageReport::empty(&cfg));
    }
}
