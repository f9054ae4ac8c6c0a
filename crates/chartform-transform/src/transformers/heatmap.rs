//! Sparse two-axis heatmaps.

use crate::dataset::TabularData;
use crate::error::Result;
use crate::label::format_label;
use crate::output::{ChartKind, Heatmap, HeatmapCell};
use crate::sanitize::sanitize;
use crate::validate::validate_columns;

use super::{Transformer, column, log_start, require_numeric};

/// Columns feeding a heatmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapParams {
    pub x_column: String,
    pub y_column: String,
    pub value_column: String,
}

impl HeatmapParams {
    /// Grid of `value_column` over the `x_column` and `y_column` axes.
    pub fn new(
        x_column: impl Into<String>,
        y_column: impl Into<String>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            value_column: value_column.into(),
        }
    }
}

/// Builds a [`Heatmap`] with one cell per row.
///
/// Combinations absent from the dataset stay absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatmapTransformer;

impl Transformer for HeatmapTransformer {
    type Params = HeatmapParams;
    type Output = Heatmap;

    const KIND: ChartKind = ChartKind::Heatmap;

    fn transform<D>(&self, data: &D, params: &HeatmapParams) -> Result<Heatmap>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        validate_columns(
            data,
            &[&params.x_column, &params.y_column, &params.value_column],
        )?;

        let xs = column(data, &params.x_column);
        let ys = column(data, &params.y_column);
        let values = column(data, &params.value_column);
        require_numeric(Self::KIND, shape, &params.value_column, &values)?;

        let data = xs
            .iter()
            .zip(&ys)
            .zip(&values)
            .map(|((x, y), value)| HeatmapCell {
                x: sanitize(x),
                y: sanitize(y),
                value: sanitize(value),
            })
            .collect();

        Ok(Heatmap {
            data,
            x_label: format_label(&params.x_column),
            y_label: format_label(&params.y_column),
            value_label: format_label(&params.value_column),
        })
    }
}
