//! Coordinate normalization into canonical angular traversal order.
//!
//! Cap points are sorted by ascending x and rod points by descending x, then
//! recombined row by row. Both sorts are stable and compare by numeric value
//! (`-0.0 == 0.0`), so ties keep their measurement order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::condition::{Condition, CoordinateSample};
use crate::error::AnalysisError;

/// A condition's coordinates after normalization.
///
/// Row `i` pairs the `i`-th cap point (ascending x) with the `i`-th rod point
/// (descending x). The row count equals the raw sample count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    rows: Vec<CoordinateSample>,
}

/// Normalize a condition's raw samples.
///
/// Fails with [`AnalysisError::DataFormat`] on the first non-finite value.
pub fn normalize(condition: &Condition) -> Result<NormalizedTable, AnalysisError> {
    for (row, sample) in condition.samples.iter().enumerate() {
        if let Some(column) = sample.first_non_finite() {
            return Err(AnalysisError::DataFormat {
                condition: condition.label.clone(),
                row,
                column,
            });
        }
    }

    let mut cap: Vec<[f64; 2]> = condition.samples.iter().map(|s| s.cap()).collect();
    let mut rod: Vec<[f64; 2]> = condition.samples.iter().map(|s| s.rod()).collect();
    cap.sort_by(|a, b| numeric_cmp(a[0], b[0]));
    rod.sort_by(|a, b| numeric_cmp(b[0], a[0]));

    let rows = cap
        .into_iter()
        .zip(rod)
        .map(|(c, r)| CoordinateSample::new(c, r))
        .collect();
    Ok(NormalizedTable { rows })
}

/// Numeric ordering of finite values; signed zeros compare equal.
fn numeric_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl NormalizedTable {
    pub fn rows(&self) -> &[CoordinateSample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-row distance of the cap point from the origin.
    pub fn cap_radii(&self) -> Vec<f64> {
        self.rows.iter().map(|s| s.cap_x.hypot(s.cap_y)).collect()
    }

    /// Per-row distance of the rod point from the origin.
    pub fn rod_radii(&self) -> Vec<f64> {
        self.rows.iter().map(|s| s.rod_x.hypot(s.rod_y)).collect()
    }

    /// Per-row cap–rod distance.
    pub fn diameters(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|s| (s.cap_x - s.rod_x).hypot(s.cap_y - s.rod_y))
            .collect()
    }

    /// Distance between the first and last rod points (0 for fewer than two rows).
    pub fn rod_endpoint_distance(&self) -> f64 {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => (first.rod_x - last.rod_x).hypot(first.rod_y - last.rod_y),
            _ => 0.0,
        }
    }

    /// Cap points followed by the rod points in reverse row order, forming
    /// one continuous closed traversal of the bore.
    pub fn closed_traversal(&self) -> Vec<[f64; 2]> {
        self.rows
            .iter()
            .map(|s| s.cap())
            .chain(self.rows.iter().rev().map(|s| s.rod()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoordinateColumn;
    use approx::assert_relative_eq;

    fn condition(samples: Vec<CoordinateSample>) -> Condition {
        Condition::new("c", samples)
    }

    #[test]
    fn cap_ascending_rod_descending() {
        let c = condition(vec![
            CoordinateSample::new([2.0, 0.1], [-1.0, -0.1]),
            CoordinateSample::new([-3.0, 0.2], [4.0, -0.2]),
            CoordinateSample::new([0.5, 0.3], [0.0, -0.3]),
        ]);
        let t = normalize(&c).expect("finite input");
        let cap_x: Vec<f64> = t.rows().iter().map(|s| s.cap_x).collect();
        let rod_x: Vec<f64> = t.rows().iter().map(|s| s.rod_x).collect();
        assert_eq!(cap_x, vec![-3.0, 0.5, 2.0]);
        assert_eq!(rod_x, vec![4.0, 0.0, -1.0]);
        // y travels with its own x
        assert_eq!(t.rows()[0].cap_y, 0.2);
        assert_eq!(t.rows()[0].rod_y, -0.2);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn ties_keep_measurement_order() {
        let c = condition(vec![
            CoordinateSample::new([1.0, 10.0], [1.0, -10.0]),
            CoordinateSample::new([1.0, 20.0], [1.0, -20.0]),
            CoordinateSample::new([0.0, 30.0], [2.0, -30.0]),
        ]);
        let t = normalize(&c).expect("finite input");
        let cap_y: Vec<f64> = t.rows().iter().map(|s| s.cap_y).collect();
        let rod_y: Vec<f64> = t.rows().iter().map(|s| s.rod_y).collect();
        assert_eq!(cap_y, vec![30.0, 10.0, 20.0]);
        assert_eq!(rod_y, vec![-30.0, -10.0, -20.0]);
    }

    #[test]
    fn signed_zeros_tie_in_measurement_order() {
        let c = condition(vec![
            CoordinateSample::new([0.0, 1.0], [-0.0, -1.0]),
            CoordinateSample::new([-0.0, 2.0], [0.0, -2.0]),
        ]);
        let t = normalize(&c).expect("finite input");
        let cap_y: Vec<f64> = t.rows().iter().map(|s| s.cap_y).collect();
        let rod_y: Vec<f64> = t.rows().iter().map(|s| s.rod_y).collect();
        assert_eq!(cap_y, vec![1.0, 2.0]);
        assert_eq!(rod_y, vec![-1.0, -2.0]);
    }

    #[test]
    fn non_finite_value_is_data_format_error() {
        let mut bad = CoordinateSample::new([1.0, 1.0], [-1.0, -1.0]);
        bad.rod_y = f64::NAN;
        let c = Condition::new("warm", vec![CoordinateSample::new([0.0, 1.0], [0.0, -1.0]), bad]);
        let err = normalize(&c).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::DataFormat {
                condition: "warm".to_string(),
                row: 1,
                column: CoordinateColumn::RodY,
            }
        );
    }

    #[test]
    fn geometry_helpers() {
        let c = condition(vec![
            CoordinateSample::new([-3.0, 4.0], [3.0, -4.0]),
            CoordinateSample::new([0.0, 5.0], [0.0, -5.0]),
            CoordinateSample::new([3.0, 4.0], [-3.0, -4.0]),
        ]);
        let t = normalize(&c).expect("finite input");
        for r in t.cap_radii().into_iter().chain(t.rod_radii()) {
            assert_relative_eq!(r, 5.0, epsilon = 1e-12);
        }
        for d in t.diameters() {
            assert_relative_eq!(d, 10.0, epsilon = 1e-12);
        }
        assert_relative_eq!(t.rod_endpoint_distance(), 6.0, epsilon = 1e-12);

        let loop_pts = t.closed_traversal();
        assert_eq!(loop_pts.len(), 6);
        assert_eq!(loop_pts[2], [3.0, 4.0]);
        // rod rows run 3, 0, -3 in x; the traversal visits them reversed
        assert_eq!(loop_pts[3], [-3.0, -4.0]);
        assert_eq!(loop_pts[5], [3.0, -4.0]);
    }

    #[test]
    fn empty_condition_normalizes_to_empty_table() {
        let t = normalize(&condition(Vec::new())).expect("empty is valid");
        assert!(t.is_empty());
        assert_eq!(t.rod_endpoint_distance(), 0.0);
    }
}
