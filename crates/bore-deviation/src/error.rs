//! Error taxonomy for the deviation engine.

use crate::circle::CircleFitError;

/// Coordinate column of a [`crate::CoordinateSample`], used to locate bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateColumn {
    CapY,
    CapX,
    RodY,
    RodX,
}

impl CoordinateColumn {
    /// Column name as used by the measurement sheet (`cap_y`, `cap_x`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::CapY => "cap_y",
            Self::CapX => "cap_x",
            Self::RodY => "rod_y",
            Self::RodX => "rod_x",
        }
    }
}

impl std::fmt::Display for CoordinateColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors returned by [`crate::DeviationAnalyzer`].
///
/// Every variant is fatal to the run: no partial record list is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The valid conditions do not contain exactly one reference.
    Configuration {
        /// Number of valid conditions flagged as reference.
        reference_count: usize,
    },
    /// A coordinate value of a valid condition is not a finite number.
    DataFormat {
        /// Label of the offending condition.
        condition: String,
        /// Zero-based sample row.
        row: usize,
        /// Offending column.
        column: CoordinateColumn,
    },
    /// The least-squares circle of a condition could not be determined.
    DegenerateFit {
        /// Label of the offending condition.
        condition: String,
        /// Underlying fit failure.
        source: CircleFitError,
    },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration { reference_count } => write!(
                f,
                "exactly one valid condition must be marked as reference, found {}",
                reference_count
            ),
            Self::DataFormat {
                condition,
                row,
                column,
            } => write!(
                f,
                "condition '{}': non-numeric coordinate in column {} at row {}",
                condition, column, row
            ),
            Self::DegenerateFit { condition, source } => {
                write!(f, "condition '{}': degenerate circle fit: {}", condition, source)
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DegenerateFit { source, .. } => Some(source),
            _ => None,
        }
    }
}
