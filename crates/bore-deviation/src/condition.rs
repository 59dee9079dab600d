//! Measured conditions as delivered by the measurement-loading collaborator.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::CoordinateColumn;

/// One measured point pair: a cap (bore-side) point and a rod point.
///
/// Field order follows the measurement sheet columns: `cap_y, cap_x, rod_y, rod_x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSample {
    pub cap_y: f64,
    pub cap_x: f64,
    pub rod_y: f64,
    pub rod_x: f64,
}

impl CoordinateSample {
    pub fn new(cap: [f64; 2], rod: [f64; 2]) -> Self {
        Self {
            cap_y: cap[1],
            cap_x: cap[0],
            rod_y: rod[1],
            rod_x: rod[0],
        }
    }

    /// Cap point as `[x, y]`.
    pub fn cap(&self) -> [f64; 2] {
        [self.cap_x, self.cap_y]
    }

    /// Rod point as `[x, y]`.
    pub fn rod(&self) -> [f64; 2] {
        [self.rod_x, self.rod_y]
    }

    /// First column holding a non-finite value, in sheet column order.
    pub(crate) fn first_non_finite(&self) -> Option<CoordinateColumn> {
        [
            (self.cap_y, CoordinateColumn::CapY),
            (self.cap_x, CoordinateColumn::CapX),
            (self.rod_y, CoordinateColumn::RodY),
            (self.rod_x, CoordinateColumn::RodX),
        ]
        .into_iter()
        .find(|(v, _)| !v.is_finite())
        .map(|(_, col)| col)
    }
}

/// One operating scenario to be compared against the reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Identifying label ("situation").
    pub label: String,
    /// Enable spectral smoothing for this condition's series.
    #[serde(default)]
    pub smoothing: bool,
    /// Marks the single baseline condition.
    #[serde(default)]
    pub is_reference: bool,
    /// Display style tag, resolved by [`crate::StyleMap`].
    #[serde(default)]
    pub style: String,
    /// Invalid conditions are excluded from computation entirely.
    #[serde(default = "default_true")]
    pub is_valid: bool,
    /// Raw coordinate samples in measurement order.
    pub samples: Vec<CoordinateSample>,
}

fn default_true() -> bool {
    true
}

impl Condition {
    /// Valid, non-reference, unsmoothed condition with the given samples.
    pub fn new(label: impl Into<String>, samples: Vec<CoordinateSample>) -> Self {
        Self {
            label: label.into(),
            smoothing: false,
            is_reference: false,
            style: String::new(),
            is_valid: true,
            samples,
        }
    }

    pub fn as_reference(mut self) -> Self {
        self.is_reference = true;
        self
    }

    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing = enabled;
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_validity(mut self, is_valid: bool) -> Self {
        self.is_valid = is_valid;
        self
    }
}

/// Typed boundary between the loader collaborator and the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionBatch {
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub config: AnalysisConfig,
}
