//! Data types for the placement engine: inputs, tuning, devices and reports.
//!
//! Kept small and explicit; all of them round-trip through JSON (camelCase)
//! so the CLI and downstream consumers can store them verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{PlacementError, PolygonRole};
use crate::geom2::{Point, Polygon};

/// Sequential identifier, unique within one placement call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub usize);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ant-{}", self.0)
    }
}

/// A placed antenna. `radius` is in pixels; `power` is opaque and passed through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub pos: Point,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
}

/// Which escalation paths fired, ordered from least to most escalated.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SolverMode {
    /// Seeding plus the coarse gap-fill only.
    #[default]
    Greedy,
    /// Adaptive tightening re-seeded, or the fine pass added devices.
    Adaptive,
    /// The density escalator added devices.
    Hybrid,
}

impl SolverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SolverMode::Greedy => "greedy",
            SolverMode::Adaptive => "adaptive",
            SolverMode::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for SolverMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coverage summary for one area, or the roll-up over all areas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageReport {
    /// Covered share of the fine sample set, in percent.
    pub coverage_pct: f64,
    pub target_pct: f64,
    pub device_count: usize,
    /// `ceil(area / (π r²))`.
    pub theoretical_min: usize,
    pub overlap: f64,
    pub mode: SolverMode,
    pub density_fallback: bool,
    pub alternative_seeding: bool,
    /// A safety cap or a grid-density clamp fired.
    pub cap_reached: bool,
    /// Fine samples behind `coverage_pct`; weights the roll-up.
    pub sample_count: usize,
}

impl CoverageReport {
    /// Zero-coverage report for inputs that produce no devices.
    pub fn empty(cfg: &PlacementCfg) -> Self {
        Self {
            target_pct: cfg.gap_cover_threshold * 100.0,
            overlap: cfg.overlap_factor,
            ..Self::default()
        }
    }
}

/// Diagnostics for one area. Never needed for correctness.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageDebugInfo {
    /// Coarse sample spacing in pixels (after any clamp).
    pub sample_spacing: f64,
    /// Candidate positions scored by the gap-fill optimizer.
    pub candidate_count: usize,
    /// Gap-fill passes that placed or tried to place devices.
    pub iterations: usize,
    pub hard_cap: usize,
    pub seed_count: usize,
    pub gap_added: usize,
    pub fine_added: usize,
    pub escalated: usize,
    /// Largest device count seen at a looser overlap ladder step.
    pub ladder_floor: usize,
    /// Devices added to reach `ladder_floor`.
    pub topped_up: usize,
    /// Fine samples still uncovered at the end.
    pub uncovered: Vec<Point>,
}

/// Tuning parameters. Every field has a default; JSON may give any subset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementCfg {
    /// Hex lattice tightness; 1.0 matches non-overlapping packing, lower is denser.
    pub overlap_factor: f64,
    /// Coarse sample spacing as a fraction of the radius.
    pub gap_sample_factor: f64,
    /// Fine sample spacing as a fraction of the radius.
    pub fine_sample_factor: f64,
    /// Coverage ratio at which the gap-fill optimizer stops.
    pub gap_cover_threshold: f64,
    /// Devices the gap-fill optimizer may add per area.
    pub max_gap_antennas: usize,
    pub gap_batch: usize,
    pub gap_max_passes: usize,
    pub fine_max_additions: usize,
    /// Fine pass skips samples with a device closer than this many radii.
    pub fine_min_separation: f64,
    /// Hard ceiling on devices per area across all passes, seeding included.
    pub max_devices: usize,
    /// Post-seeding ratio below which the area is re-seeded tighter.
    pub tighten_below: f64,
    pub tighten_factor: f64,
    pub overlap_floor: f64,
    /// Density floor multiplier is `escalator_base + (1 - overlap) * escalator_slope`.
    pub escalator_base: f64,
    pub escalator_slope: f64,
    /// Offset lattice spacing relative to the base lattice.
    pub escalator_spacing: f64,
    pub escalator_min_separation: f64,
    /// Spacing of the overlap ladder an area is also solved at; 0 disables it.
    pub overlap_ladder_step: f64,
    /// Raw bounding-box points a lattice or sample grid may scan.
    pub max_grid_points: usize,
    /// Attach `CoverageDebugInfo` per area.
    pub debug: bool,
}

impl Default for PlacementCfg {
    fn default() -> Self {
        Self {
            overlap_factor: 0.9,
            gap_sample_factor: 0.6,
            fine_sample_factor: 0.35,
            gap_cover_threshold: 0.995,
            max_gap_antennas: 200,
            gap_batch: 25,
            gap_max_passes: 10,
            fine_max_additions: 150,
            fine_min_separation: 0.55,
            max_devices: 2000,
            tighten_below: 0.6,
            tighten_factor: 0.75,
            overlap_floor: 0.6,
            escalator_base: 0.9,
            escalator_slope: 0.8,
            escalator_spacing: 0.9,
            escalator_min_separation: 0.6,
            overlap_ladder_step: 0.05,
            max_grid_points: 250_000,
            debug: false,
        }
    }
}

impl PlacementCfg {
    pub fn validate(&self) -> Result<(), PlacementError> {
        positive("overlapFactor", self.overlap_factor)?;
        positive("gapSampleFactor", self.gap_sample_factor)?;
        positive("fineSampleFactor", self.fine_sample_factor)?;
        positive("escalatorSpacing", self.escalator_spacing)?;
        positive("overlapFloor", self.overlap_floor)?;
        unit_interval("gapCoverThreshold", self.gap_cover_threshold, false)?;
        unit_interval("tightenBelow", self.tighten_below, true)?;
        unit_interval("tightenFactor", self.tighten_factor, false)?;
        non_negative("fineMinSeparation", self.fine_min_separation)?;
        non_negative("escalatorMinSeparation", self.escalator_min_separation)?;
        non_negative("overlapLadderStep", self.overlap_ladder_step)?;
        finite("escalatorBase", self.escalator_base)?;
        finite("escalatorSlope", self.escalator_slope)?;
        if self.max_grid_points == 0 {
            return Err(PlacementError::invalid(
                "maxGridPoints",
                0.0,
                "must allow at least one point",
            ));
        }
        Ok(())
    }

    /// Density floor multiplier for a given overlap factor.
    #[inline]
    pub fn density_multiplier(&self, overlap: f64) -> f64 {
        self.escalator_base + (1.0 - overlap) * self.escalator_slope
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), PlacementError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlacementError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), PlacementError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(PlacementError::invalid(field, value, "must be > 0"));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), PlacementError> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(PlacementError::invalid(field, value, "must be >= 0"));
    }
    Ok(())
}

fn unit_interval(field: &'static str, value: f64, allow_zero: bool) -> Result<(), PlacementError> {
    finite(field, value)?;
    let low_ok = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if !low_ok || value > 1.0 {
        return Err(PlacementError::invalid(field, value, "must lie in the unit interval"));
    }
    Ok(())
}

/// One placement call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementInput {
    pub service_areas: Vec<Polygon>,
    #[serde(default)]
    pub exclusions: Vec<Polygon>,
    /// Real-world units per pixel. Missing or non-positive yields an empty placement.
    #[serde(default)]
    pub scale: Option<f64>,
    /// Device radius in real-world units.
    pub radius: f64,
    #[serde(default)]
    pub power: Option<f64>,
    #[serde(default)]
    pub params: PlacementCfg,
}

impl PlacementInput {
    /// Reject non-finite numbers and out-of-range tuning before the solver runs.
    pub fn validate(&self) -> Result<(), PlacementError> {
        self.validate_numbers()?;
        self.params.validate()
    }

    /// Finiteness of coordinates, scale, radius and power only.
    pub fn validate_numbers(&self) -> Result<(), PlacementError> {
        check_polygons(PolygonRole::ServiceArea, &self.service_areas)?;
        check_polygons(PolygonRole::Exclusion, &self.exclusions)?;
        if let Some(scale) = self.scale {
            finite("scale", scale)?;
        }
        finite("radius", self.radius)?;
        if let Some(power) = self.power {
            finite("power", power)?;
        }
        Ok(())
    }

    /// Device radius in pixels, or `None` when the scale guard applies.
    pub fn radius_px(&self) -> Option<f64> {
        let scale = self.scale.filter(|s| *s > 0.0)?;
        let r = self.radius / scale;
        (r.is_finite() && r > 0.0).then_some(r)
    }
}

fn check_polygons(role: PolygonRole, polys: &[Polygon]) -> Result<(), PlacementError> {
    for (index, poly) in polys.iter().enumerate() {
        if let Some(vertex) = poly
            .pts
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(PlacementError::NonFiniteCoordinate {
                role,
                index,
                vertex,
            });
        }
    }
    Ok(())
}

/// Result of one placement call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub devices: Vec<Device>,
    /// Roll-up across all service areas.
    pub report: CoverageReport,
    /// One report per service area, in input order.
    pub areas: Vec<CoverageReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug: Option<Vec<CoverageDebugInfo>>,
}

impl Placement {
    pub fn empty(cfg: &PlacementCfg) -> Self {
        Self {
            devices: Vec::new(),
            report: CoverageReport::empty(cfg),
            areas: Vec::new(),
            debug: None,
        }
    }
}
