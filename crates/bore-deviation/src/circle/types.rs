//! Circle types and fit errors.

use serde::{Deserialize, Serialize};

/// Millimeters to micrometers.
pub(crate) const MM_TO_UM: f64 = 1000.0;

// ── Error type ─────────────────────────────────────────────────────────────

/// Errors that can occur during least-squares circle fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum CircleFitError {
    /// Too few points to determine a circle.
    TooFewPoints {
        /// Required minimum number of points.
        needed: usize,
        /// Provided number of points.
        got: usize,
    },
    /// Input contains NaN or infinite coordinates.
    NonFiniteInput,
    /// The normal-equations matrix is singular or near-singular
    /// (collinear or coincident points).
    SingularSystem {
        /// Reciprocal condition number (smallest / largest singular value).
        rcond: f64,
    },
    /// The solved coefficients do not describe a real circle.
    ImaginaryRadius {
        /// `cx² + cy² − C` in normalized coordinates.
        r_squared: f64,
    },
}

impl std::fmt::Display for CircleFitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPoints { needed, got } => {
                write!(f, "too few points: need {}, got {}", needed, got)
            }
            Self::NonFiniteInput => write!(f, "non-finite point coordinates"),
            Self::SingularSystem { rcond } => {
                write!(f, "singular normal equations (rcond {:.3e})", rcond)
            }
            Self::ImaginaryRadius { r_squared } => {
                write!(f, "fitted circle has no real radius (r² = {:.3e})", r_squared)
            }
        }
    }
}

impl std::error::Error for CircleFitError {}

// ── Types ──────────────────────────────────────────────────────────────────

/// Least-squares circle `(x − cx)² + (y − cy)² = r²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedCircle {
    /// Center x.
    pub cx: f64,
    /// Center y.
    pub cy: f64,
    /// Radius.
    pub r: f64,
}

impl FittedCircle {
    /// Distance from a point to the center.
    pub fn center_distance(&self, [x, y]: [f64; 2]) -> f64 {
        (x - self.cx).hypot(y - self.cy)
    }

    /// Deviation in micrometers of each point's center distance from
    /// `nominal_radius` (millimeters).
    pub fn radial_deviation_um(
        &self,
        points: impl IntoIterator<Item = [f64; 2]>,
        nominal_radius: f64,
    ) -> Vec<f64> {
        points
            .into_iter()
            .map(|p| (self.center_distance(p) - nominal_radius) * MM_TO_UM)
            .collect()
    }
}
