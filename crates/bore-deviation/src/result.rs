//! Per-condition result records.
//!
//! A record is either unsmoothed or smoothed, fixed at construction. The
//! variant only decides which [`DeviationSeries`] is *effective*; every metric
//! is computed from the effective series through the same code path.

use serde::{Deserialize, Serialize};

use crate::circle::FittedCircle;
use crate::deviation::DeviationSeries;
use crate::metrics::{self, DeviationMetrics};
use crate::normalize::NormalizedTable;
use crate::reference::ReferenceGeometry;

/// Reference-derived context carried by every record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceContext {
    pub label: String,
    pub table: NormalizedTable,
    /// Nominal radius in millimeters.
    pub nominal_radius: f64,
    /// Reference rod-endpoint distance in millimeters.
    pub rod_endpoint_distance: f64,
}

impl From<&ReferenceGeometry> for ReferenceContext {
    fn from(g: &ReferenceGeometry) -> Self {
        Self {
            label: g.label.clone(),
            table: g.table.clone(),
            nominal_radius: g.nominal_radius,
            rod_endpoint_distance: g.rod_endpoint_distance,
        }
    }
}

/// Which series set is authoritative for metrics and display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesVariant {
    Unsmoothed,
    Smoothed { smoothed: DeviationSeries },
}

/// Everything a record needs besides its variant.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordParts {
    pub label: String,
    pub style: String,
    pub is_valid: bool,
    pub table: NormalizedTable,
    pub reference: ReferenceContext,
    /// Angles (degrees) paired with the radius-indexed series.
    pub radius_angles: Vec<f64>,
    /// Angles (degrees) paired with the diameter series.
    pub diameter_angles: Vec<f64>,
    pub raw: DeviationSeries,
    pub circle: FittedCircle,
}

/// Terminal, read-only output for one non-reference condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    label: String,
    style: String,
    is_valid: bool,
    table: NormalizedTable,
    reference: ReferenceContext,
    radius_angles: Vec<f64>,
    diameter_angles: Vec<f64>,
    raw: DeviationSeries,
    circle: FittedCircle,
    variant: SeriesVariant,
}

impl ResultRecord {
    pub fn unsmoothed(parts: RecordParts) -> Self {
        Self::assemble(parts, SeriesVariant::Unsmoothed)
    }

    /// Smoothed record; `smoothed` must mirror the shape of `parts.raw`.
    pub fn smoothed(parts: RecordParts, smoothed: DeviationSeries) -> Self {
        debug_assert_eq!(smoothed.change_radius.len(), parts.raw.change_radius.len());
        debug_assert_eq!(
            smoothed.lsm_change_radius.len(),
            parts.raw.lsm_change_radius.len()
        );
        debug_assert_eq!(
            smoothed.change_diameter.len(),
            parts.raw.change_diameter.len()
        );
        Self::assemble(parts, SeriesVariant::Smoothed { smoothed })
    }

    fn assemble(parts: RecordParts, variant: SeriesVariant) -> Self {
        Self {
            label: parts.label,
            style: parts.style,
            is_valid: parts.is_valid,
            table: parts.table,
            reference: parts.reference,
            radius_angles: parts.radius_angles,
            diameter_angles: parts.diameter_angles,
            raw: parts.raw,
            circle: parts.circle,
            variant,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Normalized coordinate table of this condition.
    pub fn table(&self) -> &NormalizedTable {
        &self.table
    }

    pub fn reference(&self) -> &ReferenceContext {
        &self.reference
    }

    pub fn radius_angles(&self) -> &[f64] {
        &self.radius_angles
    }

    pub fn diameter_angles(&self) -> &[f64] {
        &self.diameter_angles
    }

    pub fn circle(&self) -> &FittedCircle {
        &self.circle
    }

    pub fn variant(&self) -> &SeriesVariant {
        &self.variant
    }

    pub fn raw(&self) -> &DeviationSeries {
        &self.raw
    }

    /// Smoothed series, present only on smoothed records.
    pub fn smoothed_series(&self) -> Option<&DeviationSeries> {
        match &self.variant {
            SeriesVariant::Unsmoothed => None,
            SeriesVariant::Smoothed { smoothed } => Some(smoothed),
        }
    }

    pub fn is_smoothed(&self) -> bool {
        self.smoothed_series().is_some()
    }

    /// Series set the metrics are computed from.
    pub fn effective(&self) -> &DeviationSeries {
        self.smoothed_series().unwrap_or(&self.raw)
    }

    pub fn effective_change_diameter(&self) -> &[f64] {
        &self.effective().change_diameter
    }

    pub fn effective_lsm_change_radius(&self) -> &[f64] {
        &self.effective().lsm_change_radius
    }

    pub fn effective_change_radius(&self) -> &[f64] {
        &self.effective().change_radius
    }

    /// Rod-endpoint distance of this condition, in millimeters.
    pub fn rod_endpoint_distance(&self) -> f64 {
        self.table.rod_endpoint_distance()
    }

    pub fn metrics(&self) -> DeviationMetrics {
        DeviationMetrics::compute(
            self.effective_lsm_change_radius(),
            self.effective_change_diameter(),
            self.reference.rod_endpoint_distance,
            self.rod_endpoint_distance(),
        )
    }

    pub fn roundness(&self) -> f64 {
        metrics::roundness(self.effective_lsm_change_radius())
    }

    pub fn simple_roundness(&self) -> f64 {
        metrics::simple_roundness(self.effective_change_diameter())
    }

    pub fn sliding_distance(&self) -> f64 {
        metrics::sliding_distance(
            self.reference.rod_endpoint_distance,
            self.rod_endpoint_distance(),
        )
    }

    pub fn pull_in(&self) -> f64 {
        metrics::pull_in(self.effective_change_diameter())
    }

    pub fn close_in(&self) -> f64 {
        metrics::close_in(self.pull_in(), self.sliding_distance())
    }

    pub fn max_change_dia(&self) -> f64 {
        metrics::series_max(self.effective_change_diameter())
    }

    pub fn min_change_dia(&self) -> f64 {
        metrics::series_min(self.effective_change_diameter())
    }
}
