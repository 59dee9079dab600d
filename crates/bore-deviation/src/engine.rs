//! High-level analysis API.
//!
//! [`DeviationAnalyzer`] is the primary entry point. It wraps an
//! [`AnalysisConfig`] and turns a set of measured conditions into one
//! [`ResultRecord`] per valid, non-reference condition.
//!
//! Pipeline: validity filter → reference check → normalize → reference
//! geometry → per condition: deviation series, circle fit, optional
//! smoothing, record.

use crate::condition::{Condition, ConditionBatch};
use crate::config::AnalysisConfig;
use crate::deviation::ConditionDeviation;
use crate::error::AnalysisError;
use crate::normalize::{normalize, NormalizedTable};
use crate::reference::ReferenceGeometry;
use crate::result::{RecordParts, ReferenceContext, ResultRecord};

/// Primary analysis interface.
///
/// Create once, analyze many condition sets.
///
/// # Examples
///
/// ```no_run
/// use bore_deviation::{AnalysisConfig, Condition, DeviationAnalyzer};
///
/// let conditions: Vec<Condition> = Vec::new();
/// let analyzer = DeviationAnalyzer::new(AnalysisConfig::default());
/// match analyzer.analyze(&conditions) {
///     Ok(records) => println!("{} records", records.len()),
///     Err(e) => eprintln!("analysis failed: {e}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeviationAnalyzer {
    config: AnalysisConfig,
}

impl DeviationAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        debug_assert!(
            config.thresholds_are_valid(),
            "spectral thresholds must be finite and non-negative"
        );
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a loader batch with its own configuration.
    pub fn analyze_batch(batch: &ConditionBatch) -> Result<Vec<ResultRecord>, AnalysisError> {
        Self::new(batch.config.clone()).analyze(&batch.conditions)
    }

    /// Run the full pipeline.
    ///
    /// Records follow the input order of the valid non-reference conditions.
    /// Any error aborts the run.
    pub fn analyze(&self, conditions: &[Condition]) -> Result<Vec<ResultRecord>, AnalysisError> {
        let valid: Vec<&Condition> = conditions.iter().filter(|c| c.is_valid).collect();
        let reference_count = valid.iter().filter(|c| c.is_reference).count();
        tracing::info!(
            "{} conditions, {} valid, {} marked as reference",
            conditions.len(),
            valid.len(),
            reference_count
        );
        if reference_count != 1 {
            return Err(AnalysisError::Configuration { reference_count });
        }

        let tables = valid
            .iter()
            .map(|c| normalize(c))
            .collect::<Result<Vec<NormalizedTable>, _>>()?;

        let (ref_idx, _) = valid
            .iter()
            .enumerate()
            .find(|(_, c)| c.is_reference)
            .ok_or(AnalysisError::Configuration { reference_count })?;
        let reference =
            ReferenceGeometry::from_table(valid[ref_idx].label.clone(), tables[ref_idx].clone());
        tracing::debug!(
            "reference '{}': nominal radius {:.6} mm, rod endpoint distance {:.6} mm, {} rows",
            reference.label,
            reference.nominal_radius,
            reference.rod_endpoint_distance,
            reference.table.len()
        );

        valid
            .into_iter()
            .zip(tables)
            .filter(|(c, _)| !c.is_reference)
            .map(|(c, table)| self.build_record(c, table, &reference))
            .collect()
    }

    fn build_record(
        &self,
        condition: &Condition,
        table: NormalizedTable,
        reference: &ReferenceGeometry,
    ) -> Result<ResultRecord, AnalysisError> {
        let deviation = ConditionDeviation::compute(&table, reference).map_err(|source| {
            AnalysisError::DegenerateFit {
                condition: condition.label.clone(),
                source,
            }
        })?;
        tracing::debug!(
            "condition '{}': lsm circle cx={:.6} cy={:.6} r={:.6}",
            condition.label,
            deviation.circle.cx,
            deviation.circle.cy,
            deviation.circle.r
        );

        let parts = RecordParts {
            label: condition.label.clone(),
            style: condition.style.clone(),
            is_valid: condition.is_valid,
            table,
            reference: ReferenceContext::from(reference),
            radius_angles: reference.radius_angles.clone(),
            diameter_angles: reference.diameter_angles.clone(),
            raw: deviation.raw(),
            circle: deviation.circle,
        };

        let record = if condition.smoothing {
            tracing::debug!(
                "condition '{}': smoothing (rad {}, lsm {}, dia {})",
                condition.label,
                self.config.threshold_rad,
                self.config.threshold_lsm,
                self.config.threshold_dia
            );
            ResultRecord::smoothed(parts, deviation.smoothed(&self.config))
        } else {
            ResultRecord::unsmoothed(parts)
        };
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circle::CircleFitError;
    use crate::condition::CoordinateSample;
    use crate::error::CoordinateColumn;
    use crate::test_utils::{circle_condition, jitter};
    use approx::assert_relative_eq;

    fn analyzer() -> DeviationAnalyzer {
        DeviationAnalyzer::new(AnalysisConfig::default())
    }

    #[test]
    fn uniform_offset_metrics() {
        let conditions = vec![
            circle_condition("ref", 24, 50.0, [0.0, 0.0], 0.0).as_reference(),
            circle_condition("hot", 24, 50.0, [0.0, 0.0], 0.01),
        ];
        let records = analyzer().analyze(&conditions).expect("analyzes");
        assert_eq!(records.len(), 1);
        let rec = &records[0];

        assert_eq!(rec.label(), "hot");
        assert_relative_eq!(rec.reference().nominal_radius, 50.0, epsilon = 1e-9);
        assert_relative_eq!(rec.roundness(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(rec.max_change_dia(), 20.0, epsilon = 1e-6);
        assert_relative_eq!(rec.min_change_dia(), 20.0, epsilon = 1e-6);
        assert_relative_eq!(rec.simple_roundness(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(rec.pull_in(), -20.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_references_is_configuration_error() {
        let conditions = vec![
            circle_condition("a", 8, 50.0, [0.0, 0.0], 0.0),
            circle_condition("b", 8, 50.0, [0.0, 0.0], 0.01),
        ];
        assert_eq!(
            analyzer().analyze(&conditions),
            Err(AnalysisError::Configuration { reference_count: 0 })
        );
    }

    #[test]
    fn two_references_is_configuration_error_before_any_numeric_work() {
        let mut broken = circle_condition("b", 8, 50.0, [0.0, 0.0], 0.0).as_reference();
        broken.samples[0].cap_x = f64::NAN;
        let conditions = vec![
            circle_condition("a", 8, 50.0, [0.0, 0.0], 0.0).as_reference(),
            broken,
        ];
        // the NaN would be a data-format error if normalization had run
        assert_eq!(
            analyzer().analyze(&conditions),
            Err(AnalysisError::Configuration { reference_count: 2 })
        );
    }

    #[test]
    fn invalid_conditions_are_ignored() {
        let mut junk = circle_condition("junk", 8, 50.0, [0.0, 0.0], 0.0)
            .as_reference()
            .with_validity(false);
        junk.samples[0].rod_y = f64::INFINITY;
        let conditions = vec![
            junk,
            circle_condition("ref", 8, 50.0, [0.0, 0.0], 0.0).as_reference(),
            circle_condition("hot", 8, 50.0, [0.0, 0.0], 0.002),
            circle_condition("off", 8, 50.0, [0.0, 0.0], 0.004).with_validity(false),
        ];
        let records = analyzer().analyze(&conditions).expect("analyzes");
        let labels: Vec<&str> = records.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["hot"]);
    }

    #[test]
    fn non_numeric_coordinate_is_data_format_error() {
        let mut bad = circle_condition("bad", 8, 50.0, [0.0, 0.0], 0.0);
        bad.samples[3].cap_y = f64::NAN;
        let conditions = vec![
            circle_condition("ref", 8, 50.0, [0.0, 0.0], 0.0).as_reference(),
            bad,
        ];
        assert_eq!(
            analyzer().analyze(&conditions),
            Err(AnalysisError::DataFormat {
                condition: "bad".to_string(),
                row: 3,
                column: CoordinateColumn::CapY,
            })
        );
    }

    #[test]
    fn degenerate_fit_aborts_run() {
        let flat = Condition::new(
            "flat",
            (0..8)
                .map(|i| CoordinateSample::new([i as f64, 1.0], [i as f64, 1.0]))
                .collect(),
        );
        let conditions = vec![
            circle_condition("ref", 8, 50.0, [0.0, 0.0], 0.0).as_reference(),
            circle_condition("ok", 8, 50.0, [0.0, 0.0], 0.001),
            flat,
        ];
        match analyzer().analyze(&conditions) {
            Err(AnalysisError::DegenerateFit { condition, source }) => {
                assert_eq!(condition, "flat");
                assert!(matches!(source, CircleFitError::SingularSystem { .. }));
            }
            other => panic!("expected degenerate fit, got {other:?}"),
        }
    }

    #[test]
    fn records_keep_input_order_and_variant() {
        let conditions = vec![
            circle_condition("c1", 16, 50.0, [0.0, 0.0], 0.003).with_smoothing(true),
            circle_condition("ref", 16, 50.0, [0.0, 0.0], 0.0).as_reference(),
            circle_condition("c2", 16, 50.0, [0.0, 0.0], -0.003),
        ];
        let records = analyzer().analyze(&conditions).expect("analyzes");
        let labels: Vec<&str> = records.iter().map(|r| r.label()).collect();
        assert_eq!(labels, ["c1", "c2"]);
        assert!(records[0].is_smoothed());
        assert!(!records[1].is_smoothed());
        assert_eq!(records[0].radius_angles().len(), 33);
        assert_eq!(records[0].diameter_angles().len(), 16);
        assert_eq!(records[0].reference().label, "ref");
    }

    #[test]
    fn smoothing_thresholds_feed_effective_series() {
        let hot = jitter(circle_condition("hot", 32, 50.0, [0.0, 0.0], 0.01), 0.002, 11)
            .with_smoothing(true);
        let conditions = vec![
            circle_condition("ref", 32, 50.0, [0.0, 0.0], 0.0).as_reference(),
            hot,
        ];

        let identity = analyzer().analyze(&conditions).expect("analyzes");
        let rec = &identity[0];
        let smoothed = rec.smoothed_series().expect("smoothed variant");
        for (a, b) in smoothed.change_diameter.iter().zip(&rec.raw().change_diameter) {
            assert_relative_eq!(*a, *b, epsilon = 1e-9);
        }

        let config = AnalysisConfig {
            threshold_rad: 1e9,
            threshold_dia: 1e9,
            threshold_lsm: 1e9,
            ..Default::default()
        };
        let zeroed = DeviationAnalyzer::new(config)
            .analyze(&conditions)
            .expect("analyzes");
        let rec = &zeroed[0];
        assert!(rec.effective_change_diameter().iter().all(|v| *v == 0.0));
        assert_eq!(rec.roundness(), 0.0);
        assert_eq!(rec.max_change_dia(), 0.0);
        // raw series are untouched by smoothing
        assert!(rec.raw().change_diameter.iter().any(|v| *v != 0.0));
    }

    #[test]
    fn sliding_distance_tracks_rod_endpoints() {
        let conditions = vec![
            circle_condition("ref", 12, 50.0, [0.0, 0.0], 0.0).as_reference(),
            circle_condition("shrunk", 12, 50.0, [0.0, 0.0], -0.01),
        ];
        let records = analyzer().analyze(&conditions).expect("analyzes");
        let rec = &records[0];
        let expected =
            (rec.reference().rod_endpoint_distance - rec.rod_endpoint_distance()) * 1000.0;
        assert_relative_eq!(rec.sliding_distance(), expected, epsilon = 1e-9);
        assert!(rec.sliding_distance() > 0.0);
        // uniform shrink: pull-in is 20 µm and exceeds the sliding distance
        assert_relative_eq!(rec.pull_in(), 20.0, epsilon = 1e-6);
        assert_relative_eq!(rec.close_in(), 20.0, epsilon = 1e-6);
    }

    #[test]
    fn batch_uses_its_own_config() {
        let batch = ConditionBatch {
            conditions: vec![
                circle_condition("ref", 8, 50.0, [0.0, 0.0], 0.0).as_reference(),
                circle_condition("hot", 8, 50.0, [0.0, 0.0], 0.01).with_smoothing(true),
            ],
            config: AnalysisConfig {
                threshold_dia: 1e9,
                ..Default::default()
            },
        };
        let records = DeviationAnalyzer::analyze_batch(&batch).expect("analyzes");
        assert!(records[0].effective_change_diameter().iter().all(|v| *v == 0.0));
    }
}
