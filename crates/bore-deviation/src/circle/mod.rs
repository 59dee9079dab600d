//! Least-squares circle fitting.
//!
//! Implements:
//! - Algebraic (Kåsa) circle fit from power-sum moments with singularity
//!   detection.
//! - Radial deviation of measured points relative to a fitted center.

mod fit;
mod types;

pub use fit::{fit_circle_lsq, MIN_POINTS};
pub(crate) use types::MM_TO_UM;
pub use types::{CircleFitError, FittedCircle};
