//! bore-deviation — geometric deviation engine for measured bore profiles.
//!
//! Compares cap/rod coordinate measurements of several operating conditions
//! against one reference condition. The pipeline stages are:
//!
//! 1. **Normalize** – finiteness check, cap rows ascending and rod rows
//!    descending by x.
//! 2. **Reference** – per-row radii, nominal radius and diameters, rod
//!    endpoint distance, and angle sequences of the reference condition.
//! 3. **Deviation** – raw radius change, diameter change, and radius change
//!    corrected by a least-squares circle fit.
//! 4. **Spectral** – optional FFT magnitude-threshold smoothing per series.
//! 5. **Metrics** – roundness, simple roundness, sliding distance, pull-in,
//!    close-in and diameter-change extremes from the effective series.
//!
//! # Public API
//! - [`DeviationAnalyzer`] as the primary entry point
//! - [`Condition`], [`ConditionBatch`] and [`AnalysisConfig`] as inputs
//! - [`ResultRecord`] and its report/presentation views as outputs
//!
//! Lower-level building blocks ([`fit_circle_lsq`], [`smooth_spectrum`],
//! [`normalize`]) are exposed for callers that assemble their own pipeline.

mod circle;
mod condition;
mod config;
mod deviation;
mod engine;
mod error;
mod metrics;
mod normalize;
mod presentation;
mod reference;
mod report;
mod result;
mod spectral;
#[cfg(test)]
mod test_utils;

pub use circle::{fit_circle_lsq, CircleFitError, FittedCircle, MIN_POINTS};
pub use condition::{Condition, ConditionBatch, CoordinateSample};
pub use config::AnalysisConfig;
pub use deviation::{ConditionDeviation, DeviationSeries, SplitSeries};
pub use engine::DeviationAnalyzer;
pub use error::{AnalysisError, CoordinateColumn};
pub use metrics::DeviationMetrics;
pub use normalize::{normalize, NormalizedTable};
pub use presentation::{LineDash, LineStyle, RadialScale, RadialSeries, StyleMap};
pub use reference::ReferenceGeometry;
pub use report::{MetricsSummary, RecordReport, SeriesColumn};
pub use result::{RecordParts, ReferenceContext, ResultRecord, SeriesVariant};
pub use spectral::smooth_spectrum;
