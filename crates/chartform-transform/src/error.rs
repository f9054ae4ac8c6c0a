//! Error types for chart transformation.
//!
//! Every transformer either returns its output or exactly one of two errors:
//! [`ValidationError`] when the input is structurally wrong and
//! [`TransformationError`] when it is well-formed but cannot be charted.

use thiserror::Error;

use crate::dataset::DataShape;
use crate::output::ChartKind;

/// Result type alias for transformer operations.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Umbrella error returned by every transformer entry point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// The input shape or parameters are invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The input is valid but the chart cannot be produced.
    #[error(transparent)]
    Transformation(#[from] TransformationError),
}

impl ChartError {
    /// Returns true for validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true for transformation failures.
    pub fn is_transformation(&self) -> bool {
        matches!(self, Self::Transformation(_))
    }
}

/// Structural problems with the input dataset or call parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// One or more required columns are absent.
    #[error(
        "missing required columns: {} (available: {})",
        .missing.join(", "),
        .available.join(", ")
    )]
    MissingColumns {
        /// Required names not present in the dataset, in request order.
        missing: Vec<String>,
        /// Columns the dataset does provide, in dataset order.
        available: Vec<String>,
    },

    /// A parameter value is outside what the chart accepts.
    #[error("invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of the expected value.
        expected: &'static str,
    },

    /// The dataset does not have the row count the chart requires.
    #[error("expected {expected} row(s), got {actual}")]
    RowCount {
        /// Required number of rows.
        expected: usize,
        /// Rows in the dataset.
        actual: usize,
    },

    /// A list parameter does not line up with the columns it names.
    #[error("{name} has {actual} entries but {expected} columns were requested")]
    LengthMismatch {
        /// Parameter name.
        name: &'static str,
        /// Number of requested columns.
        expected: usize,
        /// Number of entries provided.
        actual: usize,
    },

    /// A list parameter that must name at least one column is empty.
    #[error("{name} must name at least one column")]
    EmptyRequest {
        /// Parameter name.
        name: &'static str,
    },
}

/// Semantic failure on input that passed structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} | chart type: {chart} | dataset shape: {shape}")]
pub struct TransformationError {
    /// Chart being produced.
    pub chart: ChartKind,
    /// Row/column counts of the input dataset.
    pub shape: DataShape,
    /// Human-readable description.
    pub message: String,
}

impl TransformationError {
    /// Create a transformation error for the given chart and dataset shape.
    pub fn new(chart: ChartKind, shape: DataShape, message: impl Into<String>) -> Self {
        Self {
            chart,
            shape,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display() {
        let err = ValidationError::MissingColumns {
            missing: vec!["revenue".to_string()],
            available: vec!["vendor".to_string(), "orders".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required columns: revenue (available: vendor, orders)"
        );
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = ValidationError::InvalidParameter {
            name: "page_size",
            value: "0".to_string(),
            expected: "positive integer",
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter 'page_size': 0 (expected positive integer)"
        );
    }

    #[test]
    fn test_transformation_error_display() {
        let err = TransformationError::new(
            ChartKind::CorrelationHeatmap,
            DataShape { rows: 3, columns: 1 },
            "need at least 2 numeric columns for correlation",
        );
        assert_eq!(
            err.to_string(),
            "need at least 2 numeric columns for correlation | chart type: correlation_heatmap | dataset shape: (3, 1)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: ChartError = ValidationError::RowCount {
            expected: 1,
            actual: 2,
        }
        .into();
        assert!(err.is_validation());
        assert!(!err.is_transformation());
        assert_eq!(err.to_string(), "expected 1 row(s), got 2");
    }
}
