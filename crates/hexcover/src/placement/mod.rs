//! Coverage placement: hex seeding, greedy gap-fill, fine pass, density escalation.
//!
//! Purpose
//! - Given service areas, exclusion zones and a device radius, choose device
//!   positions that cover each area to a target ratio with few devices, and
//!   report how well that worked.
//!
//! Pipeline (per area, strictly sequential)
//! - `seed`: hex lattice at spacing `r·√3·o` × `r·1.5·o`; re-seeded once
//!   tighter when the first lattice covers less than `tighten_below`.
//! - `gapfill`: greedy additions on the coarse sample grid until the ratio
//!   reaches `gap_cover_threshold` or a cap fires.
//! - `fine`: finer grid; place directly on remaining holes.
//! - `escalate`: top up to `ceil(theoretical_min · multiplier)` devices from
//!   an offset lattice.
//! - `ladder`: solve again at every looser overlap ladder step and top up to
//!   the largest count seen, so denser overlaps never end with fewer devices.
//! - `report`: per-area report, then a roll-up across areas.
//!
//! Determinism
//! - No randomness; identical inputs give identical devices and reports.
//!   Radius queries go through a bucket grid but only count or flag hits, so
//!   they match a full scan exactly.
//!
//! Code cross-refs: `geom2::{Region, PolygonTester}`, `Placer`, `PlacementCfg`

mod error;
mod escalate;
mod evaluate;
mod fine;
mod gapfill;
mod index;
mod ladder;
mod report;
mod sample;
mod seed;
mod solver;
mod types;

pub use error::{PlacementError, PolygonRole};
pub use escalate::{density_floor, theoretical_min};
pub use evaluate::Coverage;
pub use gapfill::best_candidate;
pub use ladder::looser_overlaps;
pub use report::roll_up;
pub use sample::{sample_grid, SampleSet};
pub use seed::{hex_lattice, Lattice, LatticePhase};
pub use solver::{place_devices, AreaPlacement, Placer};
pub use types::{
    CoverageDebugInfo, CoverageReport, Device, DeviceId, Placement, PlacementCfg, PlacementInput,
    SolverMode,
};
