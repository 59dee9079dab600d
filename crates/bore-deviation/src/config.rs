//! Analysis configuration bundle.

use serde::{Deserialize, Serialize};

/// Upper bound on generated axis ticks; larger requests fall back to auto-scaling.
const MAX_AXIS_TICKS: usize = 1000;

/// Numeric options delivered alongside the conditions.
///
/// Only the three thresholds influence computation. Axis bounds and rotation
/// are carried through for the presentation collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Auto-scale the diameter-change axis.
    pub is_auto: bool,
    /// Upper diameter-change axis bound (µm), used when `is_auto` is false.
    pub max_val: f64,
    /// Lower diameter-change axis bound (µm), used when `is_auto` is false.
    pub min_val: f64,
    /// Diameter-change axis tick spacing (µm).
    pub interval: f64,
    /// Polar plot rotation in degrees.
    pub rotation: f64,
    /// Spectral threshold for the raw radius-change series.
    pub threshold_rad: f64,
    /// Spectral threshold for the diameter-change series.
    pub threshold_dia: f64,
    /// Spectral threshold for the least-squares corrected radius-change series.
    pub threshold_lsm: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            is_auto: true,
            max_val: 50.0,
            min_val: -50.0,
            interval: 10.0,
            rotation: 0.0,
            threshold_rad: 0.0,
            threshold_dia: 0.0,
            threshold_lsm: 0.0,
        }
    }
}

impl AnalysisConfig {
    /// All spectral thresholds are finite and non-negative.
    pub fn thresholds_are_valid(&self) -> bool {
        [self.threshold_rad, self.threshold_dia, self.threshold_lsm]
            .iter()
            .all(|t| t.is_finite() && *t >= 0.0)
    }

    /// Fixed diameter-change axis ticks from `min_val` to `max_val` inclusive.
    ///
    /// Returns `None` when auto-scaling is requested or the manual bounds
    /// cannot produce a sensible tick set.
    pub fn diameter_ticks(&self) -> Option<Vec<f64>> {
        if self.is_auto {
            return None;
        }
        let span = self.max_val - self.min_val;
        if !span.is_finite() || span < 0.0 || !self.interval.is_finite() || self.interval <= 0.0
        {
            return None;
        }
        let steps = (span / self.interval + 1e-9).floor() as usize;
        if steps >= MAX_AXIS_TICKS {
            return None;
        }
        Some(
            (0..=steps)
                .map(|i| self.min_val + i as f64 * self.interval)
                .collect(),
        )
    }

    /// Angular offset (degrees) applied to the polar plot's zero direction.
    pub fn polar_offset_degrees(&self) -> f64 {
        180.0 - self.rotation
    }
}
