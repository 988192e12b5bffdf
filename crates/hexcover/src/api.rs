//! Curated surface for callers that want the individual pipeline stages.
//!
//! The full pipeline is `placement::Placer`; these re-exports let tools and
//! experiments run a single stage (a seed lattice, a sample grid, a coverage
//! evaluation) against the same geometry the solver sees.

// Geometry kernel
pub use crate::geom2::{
    area_centroid, dist2, point_in_polygon, polygon_area, signed_area, winding_number, Bbox2,
    EvenOdd, Point, Polygon, PolygonTester, Region, Winding,
};
// Random service areas
pub use crate::geom2::rand::{
    draw_polygon_radial, RadialCfg, ReplayToken as AreaReplay, VertexCount,
};
// Pipeline stages
pub use crate::placement::{
    best_candidate, density_floor, hex_lattice, looser_overlaps, roll_up, sample_grid,
    theoretical_min, Coverage, Lattice, LatticePhase, SampleSet,
};
// Entry points and records
pub use crate::placement::{
    place_devices, AreaPlacement, CoverageDebugInfo, CoverageReport, Device, DeviceId, Placement,
    PlacementCfg, PlacementError, PlacementInput, Placer, PolygonRole, SolverMode,
};
