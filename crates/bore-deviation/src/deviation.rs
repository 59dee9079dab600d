//! Deviation series of one condition relative to the reference, in micrometers.
//!
//! Radius-indexed series are built as separate cap and rod halves and joined
//! with the closing rule `cap ++ rod ++ [first]` (2N+1 entries), matching
//! [`ReferenceGeometry::radius_angles`]. Diameter series have one entry per row.

use serde::{Deserialize, Serialize};

use crate::circle::{fit_circle_lsq, CircleFitError, FittedCircle, MM_TO_UM};
use crate::config::AnalysisConfig;
use crate::normalize::NormalizedTable;
use crate::reference::ReferenceGeometry;
use crate::spectral::smooth_spectrum;

/// A radius-indexed series still split into its cap and rod halves.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitSeries {
    pub cap: Vec<f64>,
    pub rod: Vec<f64>,
}

impl SplitSeries {
    /// Join as `cap ++ rod ++ [first]`.
    pub fn closed_loop(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.cap.len() + self.rod.len() + 1);
        out.extend_from_slice(&self.cap);
        out.extend_from_slice(&self.rod);
        if let Some(&first) = out.first() {
            out.push(first);
        }
        out
    }

    /// Smooth each half independently.
    pub fn smoothed(&self, threshold: f64) -> Self {
        Self {
            cap: smooth_spectrum(&self.cap, threshold),
            rod: smooth_spectrum(&self.rod, threshold),
        }
    }
}

/// The three deviation series exposed on a result record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationSeries {
    /// Radius change relative to the reference's per-row radii (2N+1).
    pub change_radius: Vec<f64>,
    /// Radius change relative to the fitted circle center and nominal radius (2N+1).
    pub lsm_change_radius: Vec<f64>,
    /// Diameter change relative to the reference's per-row diameters (N).
    pub change_diameter: Vec<f64>,
}

/// Per-row radius change against the reference's own per-row radii.
pub fn raw_radius_change(table: &NormalizedTable, reference: &ReferenceGeometry) -> SplitSeries {
    SplitSeries {
        cap: difference_um(&table.cap_radii(), &reference.cap_radii),
        rod: difference_um(&table.rod_radii(), &reference.rod_radii),
    }
}

/// Per-row diameter change against the reference's per-row diameters.
pub fn diameter_change(table: &NormalizedTable, reference: &ReferenceGeometry) -> Vec<f64> {
    difference_um(&table.diameters(), &reference.nominal_diameters)
}

/// Fit the least-squares circle over the closed traversal and express every
/// point's center distance against `nominal_radius`.
pub fn corrected_radius_change(
    table: &NormalizedTable,
    nominal_radius: f64,
) -> Result<(SplitSeries, FittedCircle), CircleFitError> {
    let circle = fit_circle_lsq(&table.closed_traversal())?;
    let rows = table.rows();
    let series = SplitSeries {
        cap: circle.radial_deviation_um(rows.iter().map(|s| s.cap()), nominal_radius),
        rod: circle.radial_deviation_um(rows.iter().map(|s| s.rod()), nominal_radius),
    };
    Ok((series, circle))
}

fn difference_um(values: &[f64], reference: &[f64]) -> Vec<f64> {
    values
        .iter()
        .zip(reference)
        .map(|(v, r)| (v - r) * MM_TO_UM)
        .collect()
}

/// All deviation data of one condition before it is packed into a record.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionDeviation {
    pub radius: SplitSeries,
    pub lsm_radius: SplitSeries,
    pub diameter: Vec<f64>,
    pub circle: FittedCircle,
}

impl ConditionDeviation {
    pub fn compute(
        table: &NormalizedTable,
        reference: &ReferenceGeometry,
    ) -> Result<Self, CircleFitError> {
        let (lsm_radius, circle) = corrected_radius_change(table, reference.nominal_radius)?;
        Ok(Self {
            radius: raw_radius_change(table, reference),
            lsm_radius,
            diameter: diameter_change(table, reference),
            circle,
        })
    }

    /// Unsmoothed series, joined.
    pub fn raw(&self) -> DeviationSeries {
        DeviationSeries {
            change_radius: self.radius.closed_loop(),
            lsm_change_radius: self.lsm_radius.closed_loop(),
            change_diameter: self.diameter.clone(),
        }
    }

    /// Smoothed twins using the per-series thresholds of `config`.
    pub fn smoothed(&self, config: &AnalysisConfig) -> DeviationSeries {
        DeviationSeries {
            change_radius: self.radius.smoothed(config.threshold_rad).closed_loop(),
            lsm_change_radius: self.lsm_radius.smoothed(config.threshold_lsm).closed_loop(),
            change_diameter: smooth_spectrum(&self.diameter, config.threshold_dia),
        }
    }
}
