//! Automatic radio-coverage placement.
//!
//! Given polygonal service areas, exclusion zones, a device radius and a few
//! density knobs, compute antenna positions that cover each area to a target
//! ratio with few devices, plus a coverage report.
//!
//! The engine is a pure, synchronous function of its input: no I/O, no
//! randomness, no state kept between calls. Image analysis, persistence and
//! advisory services live elsewhere and only exchange the plain data types
//! defined here.
//!
//! ```
//! use hexcover::prelude::*;
//!
//! let job = PlacementInput {
//!     service_areas: vec![Polygon::rect(0.0, 0.0, 100.0, 100.0)],
//!     exclusions: vec![],
//!     scale: Some(1.0),
//!     radius: 30.0,
//!     power: None,
//!     params: PlacementCfg::default(),
//! };
//! let out = place_devices(&job).unwrap();
//! assert!(out.report.coverage_pct >= 99.5);
//! ```

pub mod api;
pub mod geom2;
pub mod placement;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point, Polygon};
pub use placement::{place_devices, Placement, PlacementCfg, PlacementError, PlacementInput};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::{EvenOdd, Point, Polygon, PolygonTester, Winding};
    pub use crate::placement::{
        place_devices, CoverageDebugInfo, CoverageReport, Device, DeviceId, Placement,
        PlacementCfg, PlacementError, PlacementInput, Placer, SolverMode,
    };
}
