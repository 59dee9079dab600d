//! Reference circle estimation from the single reference condition.
//!
//! Angles are measured from the negative x-axis: cap angles are
//! `|atan2(y, -x)|`, rod angles are offset by 180° as `180 + |atan2(y, -x)|`.

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedTable;

/// Geometry derived once from the reference condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceGeometry {
    /// Label of the reference condition.
    pub label: String,
    /// Normalized coordinate table of the reference condition.
    pub table: NormalizedTable,
    /// Per-row cap radius of the reference.
    pub cap_radii: Vec<f64>,
    /// Per-row rod radius of the reference.
    pub rod_radii: Vec<f64>,
    /// Mean of the mean cap radius and the mean rod radius.
    pub nominal_radius: f64,
    /// Per-row cap–rod distance of the reference.
    pub nominal_diameters: Vec<f64>,
    /// Distance between the reference's first and last rod points.
    pub rod_endpoint_distance: f64,
    /// Angle (degrees) of each row, paired with diameter-indexed series.
    pub diameter_angles: Vec<f64>,
    /// Cap angles, reversed rod angles, then the first angle again (2N+1 entries).
    pub radius_angles: Vec<f64>,
}

impl ReferenceGeometry {
    pub fn from_table(label: impl Into<String>, table: NormalizedTable) -> Self {
        let cap_radii = table.cap_radii();
        let rod_radii = table.rod_radii();
        let nominal_radius = (mean(&cap_radii) + mean(&rod_radii)) / 2.0;
        let nominal_diameters = table.diameters();
        let rod_endpoint_distance = table.rod_endpoint_distance();

        let cap_angles: Vec<f64> = table
            .rows()
            .iter()
            .map(|s| cap_angle_deg(s.cap_x, s.cap_y))
            .collect();
        let rod_angles: Vec<f64> = table
            .rows()
            .iter()
            .map(|s| rod_angle_deg(s.rod_x, s.rod_y))
            .collect();

        let mut radius_angles = Vec::with_capacity(2 * table.len() + 1);
        radius_angles.extend_from_slice(&cap_angles);
        radius_angles.extend(rod_angles.iter().rev());
        if let Some(&first) = radius_angles.first() {
            radius_angles.push(first);
        }

        Self {
            label: label.into(),
            table,
            cap_radii,
            rod_radii,
            nominal_radius,
            nominal_diameters,
            rod_endpoint_distance,
            diameter_angles: cap_angles,
            radius_angles,
        }
    }
}

pub(crate) fn cap_angle_deg(x: f64, y: f64) -> f64 {
    y.atan2(-x).to_degrees().abs()
}

pub(crate) fn rod_angle_deg(x: f64, y: f64) -> f64 {
    180.0 + y.atan2(-x).to_degrees().abs()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
