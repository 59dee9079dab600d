//! Tabular views of a result record for report writers.
//!
//! Column sets mirror the per-condition report sheet: a diameter block, a
//! radius block, and a ten-row result block.

use serde::{Deserialize, Serialize};

use crate::result::ResultRecord;

/// One named column of a report block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesColumn {
    pub name: String,
    pub values: Vec<f64>,
}

impl SeriesColumn {
    fn new(name: &str, values: &[f64]) -> Self {
        Self {
            name: name.to_string(),
            values: values.to_vec(),
        }
    }
}

/// The result block of a report sheet, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub close_in: f64,
    pub sliding_distance: f64,
    pub pull_in: f64,
    pub simple_roundness: f64,
    pub max_change_dia: f64,
    pub min_change_dia: f64,
    pub roundness: f64,
    pub lsm_cx: f64,
    pub lsm_cy: f64,
    pub lsm_r: f64,
}

impl MetricsSummary {
    /// `(label, value)` pairs in display order.
    pub fn rows(&self) -> [(&'static str, f64); 10] {
        [
            ("close_in", self.close_in),
            ("sliding_distance", self.sliding_distance),
            ("pull_in", self.pull_in),
            ("simple_roundness", self.simple_roundness),
            ("max_change_dia", self.max_change_dia),
            ("min_change_dia", self.min_change_dia),
            ("roundness", self.roundness),
            ("lsm_cx", self.lsm_cx),
            ("lsm_cy", self.lsm_cy),
            ("lsm_r", self.lsm_r),
        ]
    }
}

/// Serializable snapshot of everything a report sheet shows for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordReport {
    pub label: String,
    pub reference_label: String,
    pub smoothed: bool,
    pub diameter_columns: Vec<SeriesColumn>,
    pub radius_columns: Vec<SeriesColumn>,
    pub summary: MetricsSummary,
}

impl ResultRecord {
    /// Angle, diameter change, and (smoothed records) smoothed diameter change.
    pub fn diameter_columns(&self) -> Vec<SeriesColumn> {
        let mut cols = vec![
            SeriesColumn::new("angle_deg", self.diameter_angles()),
            SeriesColumn::new("change_diameter_um", &self.raw().change_diameter),
        ];
        if let Some(s) = self.smoothed_series() {
            cols.push(SeriesColumn::new(
                "fft_change_diameter_um",
                &s.change_diameter,
            ));
        }
        cols
    }

    /// Angle, radius change and corrected radius change, each followed by its
    /// smoothed twin on smoothed records.
    pub fn radius_columns(&self) -> Vec<SeriesColumn> {
        let raw = self.raw();
        let smoothed = self.smoothed_series();
        let mut cols = vec![
            SeriesColumn::new("angle_deg", self.radius_angles()),
            SeriesColumn::new("change_radius_um", &raw.change_radius),
        ];
        if let Some(s) = smoothed {
            cols.push(SeriesColumn::new("fft_change_radius_um", &s.change_radius));
        }
        cols.push(SeriesColumn::new(
            "lsm_change_radius_um",
            &raw.lsm_change_radius,
        ));
        if let Some(s) = smoothed {
            cols.push(SeriesColumn::new(
                "fft_lsm_change_radius_um",
                &s.lsm_change_radius,
            ));
        }
        cols
    }

    pub fn summary(&self) -> MetricsSummary {
        let m = self.metrics();
        let c = self.circle();
        MetricsSummary {
            close_in: m.close_in,
            sliding_distance: m.sliding_distance,
            pull_in: m.pull_in,
            simple_roundness: m.simple_roundness,
            max_change_dia: m.max_change_dia,
            min_change_dia: m.min_change_dia,
            roundness: m.roundness,
            lsm_cx: c.cx,
            lsm_cy: c.cy,
            lsm_r: c.r,
        }
    }

    pub fn report(&self) -> RecordReport {
        RecordReport {
            label: self.label().to_string(),
            reference_label: self.reference().label.clone(),
            smoothed: self.is_smoothed(),
            diameter_columns: self.diameter_columns(),
            radius_columns: self.radius_columns(),
            summary: self.summary(),
        }
    }
}
