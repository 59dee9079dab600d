//! Scalar deviation metrics.
//!
//! All metrics are pure functions of already-resolved series; the caller
//! decides whether raw or smoothed series are passed in.

use serde::{Deserialize, Serialize};

use crate::circle::MM_TO_UM;

/// Summary metrics of one condition, in micrometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviationMetrics {
    /// Peak-to-peak spread of the corrected radius-change series.
    pub roundness: f64,
    /// Half the peak-to-peak spread of the diameter-change series.
    pub simple_roundness: f64,
    /// Shrinkage of the rod-endpoint distance relative to the reference.
    pub sliding_distance: f64,
    /// Magnitude of the largest inward diameter change.
    pub pull_in: f64,
    /// Larger of `pull_in` and `sliding_distance`.
    pub close_in: f64,
    /// Largest diameter change.
    pub max_change_dia: f64,
    /// Smallest diameter change.
    pub min_change_dia: f64,
}

impl DeviationMetrics {
    /// Derive every metric from the effective series.
    ///
    /// Rod-endpoint distances are in millimeters.
    pub fn compute(
        effective_lsm_change_radius: &[f64],
        effective_change_diameter: &[f64],
        reference_rod_distance: f64,
        rod_distance: f64,
    ) -> Self {
        let sliding = sliding_distance(reference_rod_distance, rod_distance);
        let pull = pull_in(effective_change_diameter);
        Self {
            roundness: roundness(effective_lsm_change_radius),
            simple_roundness: simple_roundness(effective_change_diameter),
            sliding_distance: sliding,
            pull_in: pull,
            close_in: close_in(pull, sliding),
            max_change_dia: series_max(effective_change_diameter),
            min_change_dia: series_min(effective_change_diameter),
        }
    }
}

pub fn roundness(lsm_change_radius: &[f64]) -> f64 {
    series_max(lsm_change_radius) - series_min(lsm_change_radius)
}

pub fn simple_roundness(change_diameter: &[f64]) -> f64 {
    (series_max(change_diameter) - series_min(change_diameter)) / 2.0
}

pub fn sliding_distance(reference_rod_distance: f64, rod_distance: f64) -> f64 {
    (reference_rod_distance - rod_distance) * MM_TO_UM
}

pub fn pull_in(change_diameter: &[f64]) -> f64 {
    -series_min(change_diameter)
}

pub fn close_in(pull_in: f64, sliding_distance: f64) -> f64 {
    pull_in.max(sliding_distance)
}

/// Largest element; NaN for an empty series.
pub fn series_max(series: &[f64]) -> f64 {
    series.iter().copied().reduce(f64::max).unwrap_or(f64::NAN)
}

/// Smallest element; NaN for an empty series.
pub fn series_min(series: &[f64]) -> f64 {
    series.iter().copied().reduce(f64::min).unwrap_or(f64::NAN)
}
