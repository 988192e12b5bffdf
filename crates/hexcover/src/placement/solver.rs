//! Per-area pipeline and the multi-area entry point.
//!
//! seed → (adaptive tightening) → coarse gap-fill → fine pass → density
//! escalator → ladder top-up → report. Areas never share state; device ids
//! are assigned sequentially in area order after each area is solved.

use tracing::{debug, info, warn};

use super::error::PlacementError;
use super::escalate::{density_floor, escalate, theoretical_min};
use super::evaluate::Coverage;
use super::fine::fine_pass;
use super::gapfill::{gap_fill, GapFillOutcome};
use super::ladder::{looser_overlaps, top_up};
use super::report::{area_report, roll_up, AreaStats};
use super::sample::SampleSet;
use super::seed::{hex_lattice, LatticePhase};
use super::types::{
    CoverageDebugInfo, CoverageReport, Device, DeviceId, Placement, PlacementCfg, PlacementInput,
};
use crate::geom2::{polygon_area, EvenOdd, Point, Polygon, PolygonTester, Region};

/// Positions and report for a single service area.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaPlacement {
    pub positions: Vec<Point>,
    pub report: CoverageReport,
    pub debug: CoverageDebugInfo,
}

/// Placement engine with an injected point-in-polygon predicate.
#[derive(Clone, Debug, Default)]
pub struct Placer<T: PolygonTester = EvenOdd> {
    tester: T,
}

impl Placer<EvenOdd> {
    pub fn new() -> Self {
        Self { tester: EvenOdd }
    }
}

impl<T: PolygonTester> Placer<T> {
    /// Swap the inside/outside predicate used by seeding and sampling.
    pub fn with_tester<U: PolygonTester>(self, tester: U) -> Placer<U> {
        Placer { tester }
    }

    pub fn tester(&self) -> &T {
        &self.tester
    }

    /// Solve every service area and concatenate the results.
    ///
    /// Errors only on malformed input (non-finite numbers, out-of-range
    /// tuning). A missing or non-positive scale, or a non-positive radius,
    /// yields an empty placement before any tuning parameter is looked at.
    pub fn place(&self, input: &PlacementInput) -> Result<Placement, PlacementError> {
        input.validate_numbers()?;
        let cfg = &input.params;
        let Some(r) = input.radius_px() else {
            warn!(
                scale = ?input.scale,
                radius = input.radius,
                "no usable pixel radius, nothing placed"
            );
            return Ok(Placement::empty(cfg));
        };
        cfg.validate()?;

        let mut devices = Vec::new();
        let mut areas = Vec::with_capacity(input.service_areas.len());
        let mut debug_info = Vec::new();
        for (k, area) in input.service_areas.iter().enumerate() {
            let res = self.place_area(area, &input.exclusions, r, cfg);
            debug!(
                area = k,
                devices = res.report.device_count,
                coverage_pct = res.report.coverage_pct,
                mode = %res.report.mode,
                "area solved"
            );
            let base = devices.len();
            devices.extend(res.positions.into_iter().enumerate().map(|(i, pos)| Device {
                id: DeviceId(base + i),
                pos,
                radius: r,
                power: input.power,
            }));
            areas.push(res.report);
            if cfg.debug {
                debug_info.push(res.debug);
            }
        }

        let report = roll_up(&areas, cfg);
        info!(
            areas = areas.len(),
            devices = report.device_count,
            coverage_pct = report.coverage_pct,
            mode = %report.mode,
            "placement done"
        );
        Ok(Placement {
            devices,
            report,
            areas,
            debug: cfg.debug.then_some(debug_info),
        })
    }

    /// Solve one service area for pixel radius `r`.
    ///
    /// `cfg` is assumed valid (see `PlacementCfg::validate`) and `r > 0`.
    pub fn place_area(
        &self,
        area: &Polygon,
        exclusions: &[Polygon],
        r: f64,
        cfg: &PlacementCfg,
    ) -> AreaPlacement {
        let debug_base = CoverageDebugInfo {
            hard_cap: cfg.max_devices,
            ..CoverageDebugInfo::default()
        };
        if area.is_degenerate() {
            debug!(vertices = area.pts.len(), "degenerate service area skipped");
            return AreaPlacement {
                positions: Vec::new(),
                report: area_report(&AreaStats::default(), cfg),
                debug: debug_base,
            };
        }
        let region = Region::new(area, exclusions, &self.tester);
        let theo = theoretical_min(polygon_area(area), r);
        let coarse = SampleSet::grid(&region, r, cfg.gap_sample_factor, cfg.max_grid_points);
        let fine_samples =
            SampleSet::grid(&region, r, cfg.fine_sample_factor, cfg.max_grid_points);

        let mut run = run_pipeline(
            &region,
            &coarse,
            &fine_samples,
            theo,
            r,
            cfg.overlap_factor,
            cfg,
        );
        let ladder_floor = looser_overlaps(cfg.overlap_factor, cfg.overlap_ladder_step)
            .into_iter()
            .map(|level| {
                run_pipeline(&region, &coarse, &fine_samples, theo, r, level, cfg)
                    .devices
                    .len()
            })
            .max()
            .unwrap_or(0)
            .min(cfg.max_devices);
        let topped = top_up(&fine_samples, &mut run.devices, ladder_floor, cfg);
        let cap_reached =
            run.cap_reached || topped.cap_reached || coarse.clamped || fine_samples.clamped;

        let coverage = Coverage::evaluate(&fine_samples, &run.devices, r);
        let stats = AreaStats {
            covered: coverage.covered_count(),
            samples: coverage.len(),
            devices: run.devices.len(),
            theoretical_min: theo,
            tightened: run.tightened,
            fine_added: run.fine_added,
            escalated: run.escalated + topped.added,
            cap_reached,
        };
        let debug = CoverageDebugInfo {
            sample_spacing: coarse.spacing,
            candidate_count: run.gap.candidates,
            iterations: run.gap.iterations,
            seed_count: run.seed_count,
            gap_added: run.gap.added,
            fine_added: run.fine_added,
            escalated: run.escalated,
            ladder_floor,
            topped_up: topped.added,
            uncovered: coverage.uncovered().map(|i| fine_samples.pts[i]).collect(),
            ..debug_base
        };
        AreaPlacement {
            positions: run.devices,
            report: area_report(&stats, cfg),
            debug,
        }
    }
}

/// One pass of the per-area pipeline at a single overlap factor.
struct PipelineRun {
    devices: Vec<Point>,
    seed_count: usize,
    tightened: bool,
    gap: GapFillOutcome,
    fine_added: usize,
    escalated: usize,
    cap_reached: bool,
}

/// seed → (adaptive tightening) → gap-fill → fine pass → escalator, with the
/// density floor taken at `overlap`.
fn run_pipeline<T: PolygonTester>(
    region: &Region<'_, T>,
    coarse: &SampleSet,
    fine_samples: &SampleSet,
    theo: f64,
    r: f64,
    overlap: f64,
    cfg: &PlacementCfg,
) -> PipelineRun {
    let mut effective = overlap;
    let seeds = hex_lattice(region, r, effective, LatticePhase::Even, cfg.max_grid_points);
    let mut cap_reached = seeds.clamped;
    let mut devices = seeds.pts;

    let mut tightened = false;
    if !coarse.is_empty() {
        let ratio = Coverage::evaluate(coarse, &devices, r).ratio();
        let tighter = (effective * cfg.tighten_factor)
            .max(cfg.overlap_floor)
            .min(effective);
        if ratio < cfg.tighten_below && tighter < effective {
            debug!(ratio, from = effective, to = tighter, "sparse seeding, re-seeding tighter");
            let reseed = hex_lattice(region, r, tighter, LatticePhase::Even, cfg.max_grid_points);
            cap_reached |= reseed.clamped;
            devices = reseed.pts;
            effective = tighter;
            tightened = true;
        }
    }
    if devices.len() > cfg.max_devices {
        warn!(
            seeds = devices.len(),
            max_devices = cfg.max_devices,
            "seed lattice exceeds device cap, truncating"
        );
        devices.truncate(cfg.max_devices);
        cap_reached = true;
    }
    let seed_count = devices.len();

    let gap = gap_fill(coarse, &mut devices, r, cfg);
    cap_reached |= gap.cap_reached;

    let fine = fine_pass(fine_samples, &mut devices, r, cfg);
    cap_reached |= fine.cap_reached;

    let floor = density_floor(theo, overlap, cfg);
    let esc = escalate(region, &mut devices, r, effective, floor, cfg);
    cap_reached |= esc.cap_reached || esc.clamped;

    PipelineRun {
        devices,
        seed_count,
        tightened,
        gap,
        fine_added: fine.added,
        escalated: esc.added,
        cap_reached,
    }
}

/// Solve with the default even-odd point-in-polygon test.
pub fn place_devices(input: &PlacementInput) -> Result<Placement, PlacementError> {
    Placer::new().place(input)
}
