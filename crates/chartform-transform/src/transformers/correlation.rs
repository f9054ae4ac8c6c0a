//! Pearson correlation heatmaps.
//!
//! The matrix is built over pairwise-complete observations: each pair of
//! columns uses exactly the rows where both are present, independently of
//! every other pair. Undefined coefficients (too few shared rows or a
//! constant column within them) are emitted as `null`. The diagonal is
//! always `1.0`.

use serde_json::Value;

use crate::config::{DEFAULT_CORRELATION_PRECISION, MAX_CORRELATION_PRECISION};
use crate::dataset::TabularData;
use crate::error::{Result, TransformationError};
use crate::numeric::{coerce_numeric, numeric_columns, pearson, round_to};
use crate::output::{ChartKind, CorrelationHeatmap, HeatmapCell};
use crate::validate::validate_columns;

use super::{Transformer, column, log_start};

const AXIS_LABEL: &str = "Metrics";
const VALUE_LABEL: &str = "Correlation Coefficient";

/// Column selection for a correlation heatmap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CorrelationHeatmapParams {
    /// Columns to correlate, in output order. When `None`, every numeric
    /// column is used in dataset order.
    pub metrics: Option<Vec<String>>,
}

impl CorrelationHeatmapParams {
    /// Correlate every numeric column.
    pub fn auto() -> Self {
        Self::default()
    }

    /// Correlate the listed columns only.
    pub fn with_metrics<I, S>(metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            metrics: Some(metrics.into_iter().map(Into::into).collect()),
        }
    }
}

/// Builds a [`CorrelationHeatmap`].
#[derive(Debug, Clone, Copy)]
pub struct CorrelationHeatmapTransformer {
    precision: u32,
}

impl Default for CorrelationHeatmapTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_CORRELATION_PRECISION)
    }
}

impl CorrelationHeatmapTransformer {
    /// Create a transformer rounding coefficients to `precision` decimals.
    ///
    /// Precision is capped at [`MAX_CORRELATION_PRECISION`].
    pub fn new(precision: u32) -> Self {
        Self {
            precision: precision.min(MAX_CORRELATION_PRECISION),
        }
    }

    /// Decimal places kept in each coefficient.
    pub fn precision(&self) -> u32 {
        self.precision
    }
}

impl Transformer for CorrelationHeatmapTransformer {
    type Params = CorrelationHeatmapParams;
    type Output = CorrelationHeatmap;

    const KIND: ChartKind = ChartKind::CorrelationHeatmap;

    fn transform<D>(&self, data: &D, params: &CorrelationHeatmapParams) -> Result<CorrelationHeatmap>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        let columns = match &params.metrics {
            Some(metrics) => {
                validate_columns(data, metrics.as_slice())?;
                metrics.clone()
            }
            None => numeric_columns(data),
        };
        if columns.len() < 2 {
            return Err(TransformationError::new(
                Self::KIND,
                shape,
                format!(
                    "need at least 2 numeric columns for correlation, found {}",
                    columns.len()
                ),
            )
            .into());
        }

        let mut series = Vec::with_capacity(columns.len());
        for name in &columns {
            let values = coerce_numeric(&column(data, name));
            if values.iter().all(Option::is_none) {
                return Err(TransformationError::new(
                    Self::KIND,
                    shape,
                    format!("column '{name}' contains no numeric values"),
                )
                .into());
            }
            series.push(values);
        }

        let n = columns.len();
        let mut matrix = vec![vec![None; n]; n];
        for i in 0..n {
            matrix[i][i] = Some(1.0);
            for j in (i + 1)..n {
                let coefficient = pearson(&series[i], &series[j])
                    .map(|r| round_to(r, self.precision));
                if coefficient.is_none() {
                    tracing::debug!(
                        left = %columns[i],
                        right = %columns[j],
                        "Correlation undefined for column pair"
                    );
                }
                matrix[i][j] = coefficient;
                matrix[j][i] = coefficient;
            }
        }

        let mut cells = Vec::with_capacity(n * n);
        for (x, metric) in columns.iter().enumerate() {
            for (y, row_metric) in columns.iter().enumerate() {
                cells.push(HeatmapCell {
                    x: Value::String(metric.clone()),
                    y: Value::String(row_metric.clone()),
                    value: coefficient_value(matrix[y][x]),
                });
            }
        }

        Ok(CorrelationHeatmap {
            columns,
            matrix,
            data: cells,
            x_label: AXIS_LABEL.to_string(),
            y_label: AXIS_LABEL.to_string(),
            value_label: VALUE_LABEL.to_string(),
        })
    }
}

fn coefficient_value(coefficient: Option<f64>) -> Value {
    coefficient
        .and_then(serde_json::Number::from_f64)
        .map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Table;
    use crate::error::{ChartError, ValidationError};
    use chartform_common::CellValue;
    use serde_json::json;

    fn metrics() -> Table {
        Table::from_rows(
            ["region", "orders", "revenue", "returns", "flat"],
            vec![
                vec!["EU".into(), 1.into(), 10.into(), 9.into(), 5.into()],
                vec!["US".into(), 2.into(), 20.into(), 7.into(), 5.into()],
                vec!["APAC".into(), 3.into(), 30.into(), 8.into(), 5.into()],
                vec!["LATAM".into(), 4.into(), 40.into(), 2.into(), 5.into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_detects_numeric_columns() {
        let chart = CorrelationHeatmapTransformer::default()
            .transform(&metrics(), &CorrelationHeatmapParams::auto())
            .unwrap();
        assert_eq!(chart.columns, ["orders", "revenue", "returns", "flat"]);
        assert_eq!(chart.matrix[0][1], Some(1.0));
        assert_eq!(chart.x_label, "Metrics");
        assert_eq!(chart.value_label, "Correlation Coefficient");
    }

    #[test]
    fn test_symmetric_with_unit_diagonal() {
        let chart = CorrelationHeatmapTransformer::default()
            .transform(&metrics(), &CorrelationHeatmapParams::auto())
            .unwrap();
        let n = chart.columns.len();
        for i in 0..n {
            assert_eq!(chart.matrix[i][i], Some(1.0));
            for j in 0..n {
                assert_eq!(chart.matrix[i][j], chart.matrix[j][i]);
            }
        }
    }

    #[test]
    fn test_constant_column_is_null_off_diagonal() {
        let chart = CorrelationHeatmapTransformer::default()
            .transform(&metrics(), &CorrelationHeatmapParams::auto())
            .unwrap();
        assert_eq!(chart.matrix[3], vec![None, None, None, Some(1.0)]);
    }

    #[test]
    fn test_precision_is_applied() {
        let chart = CorrelationHeatmapTransformer::new(2)
            .transform(
                &metrics(),
                &CorrelationHeatmapParams::with_metrics(["orders", "returns"]),
            )
            .unwrap();
        // r(orders, returns) = -10 / sqrt(145) = -0.8304...
        assert_eq!(chart.matrix[0][1], Some(-0.83));
    }

    #[test]
    fn test_cells_are_x_major() {
        let chart = CorrelationHeatmapTransformer::default()
            .transform(
                &metrics(),
                &CorrelationHeatmapParams::with_metrics(["revenue", "flat"]),
            )
            .unwrap();
        assert_eq!(
            serde_json::to_value(&chart.data).unwrap(),
            json!([
                {"x": "revenue", "y": "revenue", "value": 1.0},
                {"x": "revenue", "y": "flat", "value": null},
                {"x": "flat", "y": "revenue", "value": null},
                {"x": "flat", "y": "flat", "value": 1.0},
            ])
        );
    }

    #[test]
    fn test_explicit_metrics_coerce_text() {
        let table = Table::from_rows(
            ["a", "b"],
            vec![
                vec![1.into(), "2".into()],
                vec![2.into(), "n/a".into()],
                vec![3.into(), "6".into()],
            ],
        )
        .unwrap();
        let chart = CorrelationHeatmapTransformer::default()
            .transform(&table, &CorrelationHeatmapParams::with_metrics(["a", "b"]))
            .unwrap();
        assert_eq!(chart.matrix[0][1], Some(1.0));
    }

    #[test]
    fn test_not_enough_columns() {
        let table = Table::from_rows(
            ["name", "orders"],
            vec![vec!["a".into(), 1.into()], vec!["b".into(), 2.into()]],
        )
        .unwrap();
        let err = CorrelationHeatmapTransformer::default()
            .transform(&table, &CorrelationHeatmapParams::auto())
            .unwrap_err();
        assert!(err.is_transformation());
        assert!(err.to_string().contains("found 1"));

        let err = CorrelationHeatmapTransformer::default()
            .transform(&table, &CorrelationHeatmapParams::with_metrics(["orders", "name"]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "column 'name' contains no numeric values | chart type: correlation_heatmap | dataset shape: (2, 2)"
        );
    }

    #[test]
    fn test_unknown_metric() {
        let err = CorrelationHeatmapTransformer::default()
            .transform(
                &metrics(),
                &CorrelationHeatmapParams::with_metrics(["orders", "profit"]),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ChartError::Validation(ValidationError::MissingColumns { .. })
        ));
    }

    #[test]
    fn test_all_missing_column_is_not_detected() {
        let table = Table::from_rows(
            ["a", "b", "c"],
            vec![
                vec![1.into(), 2.into(), CellValue::Missing],
                vec![2.into(), 5.into(), CellValue::Missing],
            ],
        )
        .unwrap();
        let chart = CorrelationHeatmapTransformer::default()
            .transform(&table, &CorrelationHeatmapParams::auto())
            .unwrap();
        assert_eq!(chart.columns, ["a", "b"]);
    }

    #[test]
    fn test_precision_is_capped() {
        let transformer = CorrelationHeatmapTransformer::new(400);
        assert_eq!(transformer.precision(), MAX_CORRELATION_PRECISION);

        let chart = transformer
            .transform(
                &metrics(),
                &CorrelationHeatmapParams::with_metrics(["orders", "returns"]),
            )
            .unwrap();
        let r = chart.matrix[0][1].unwrap();
        assert!((r + 10.0 / 145f64.sqrt()).abs() < 1e-11);
    }

    #[test]
    fn test_large_magnitudes_correlate() {
        let table = Table::from_rows(
            ["a", "b"],
            vec![
                vec![1e200.into(), 2e200.into()],
                vec![2e200.into(), 4e200.into()],
                vec![3e200.into(), 6e200.into()],
            ],
        )
        .unwrap();
        let chart = CorrelationHeatmapTransformer::default()
            .transform(&table, &CorrelationHeatmapParams::auto())
            .unwrap();
        assert_eq!(
            chart.matrix,
            vec![vec![Some(1.0), Some(1.0)], vec![Some(1.0), Some(1.0)]]
        );
    }
}
