//! Pie charts.

use crate::dataset::TabularData;
use crate::error::Result;
use crate::output::{ChartKind, PieChart, PieSlice};
use crate::sanitize::{sanitize, sanitize_text};
use crate::validate::validate_columns;

use super::{Transformer, column, log_start, require_numeric};

/// Columns feeding a pie chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieChartParams {
    /// Slice label column.
    pub label_column: String,
    /// Slice value column.
    pub value_column: String,
}

impl PieChartParams {
    /// Pie slices of `value_column` labelled by `label_column`.
    pub fn new(label_column: impl Into<String>, value_column: impl Into<String>) -> Self {
        Self {
            label_column: label_column.into(),
            value_column: value_column.into(),
        }
    }
}

/// Builds a [`PieChart`] with one slice per row. Values are not normalized.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieChartTransformer;

impl Transformer for PieChartTransformer {
    type Params = PieChartParams;
    type Output = PieChart;

    const KIND: ChartKind = ChartKind::PieChart;

    fn transform<D>(&self, data: &D, params: &PieChartParams) -> Result<PieChart>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        validate_columns(data, &[&params.label_column, &params.value_column])?;

        let labels = column(data, &params.label_column);
        let values = column(data, &params.value_column);
        require_numeric(Self::KIND, shape, &params.value_column, &values)?;

        let data = labels
            .iter()
            .zip(&values)
            .map(|(label, value)| PieSlice {
                label: sanitize_text(label),
                value: sanitize(value),
            })
            .collect();
        Ok(PieChart { data })
    }
}
