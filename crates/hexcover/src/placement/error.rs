use std::fmt;

use thiserror::Error;

/// Which input list a polygon came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PolygonRole {
    ServiceArea,
    Exclusion,
}

impl fmt::Display for PolygonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonRole::ServiceArea => f.write_str("service area"),
            PolygonRole::Exclusion => f.write_str("exclusion"),
        }
    }
}

/// Malformed input rejected before the solver runs.
///
/// Everything else (bad scale, degenerate polygons, exhausted budgets) degrades
/// silently and is visible in the report instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementError {
    #[error("non-finite coordinate in {role} polygon {index} at vertex {vertex}")]
    NonFiniteCoordinate {
        role: PolygonRole,
        index: usize,
        vertex: usize,
    },

    #[error("non-finite value for '{field}': {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("invalid parameter '{field}': {value} - {reason}")]
    InvalidParam {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl PlacementError {
    pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParam {
            field,
            value,
            reason,
        }
    }
}
