//! Single and multi-series line charts.

use chartform_common::CellValue;

use crate::dataset::TabularData;
use crate::error::{Result, ValidationError};
use crate::label::format_label;
use crate::output::{ChartKind, LineChart, LineSeries, MultiLineChart, XyPoint};
use crate::sanitize::sanitize;
use crate::validate::{validate_columns, validate_names};

use super::{Transformer, column, log_start, require_numeric};

/// Columns feeding a single-series line chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChartParams {
    /// X axis column.
    pub x_column: String,
    /// Y axis column.
    pub y_column: String,
    /// Display name of the series. Defaults to the formatted y column.
    pub series_name: Option<String>,
}

impl LineChartParams {
    /// Single series of `y_column` over `x_column`.
    pub fn new(x_column: impl Into<String>, y_column: impl Into<String>) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            series_name: None,
        }
    }

    /// Override the series display name.
    #[must_use]
    pub fn with_series_name(mut self, name: impl Into<String>) -> Self {
        self.series_name = Some(name.into());
        self
    }
}

/// Builds a [`LineChart`] with one point per row, in row order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineChartTransformer;

impl Transformer for LineChartTransformer {
    type Params = LineChartParams;
    type Output = LineChart;

    const KIND: ChartKind = ChartKind::LineChart;

    fn transform<D>(&self, data: &D, params: &LineChartParams) -> Result<LineChart>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        validate_columns(data, &[&params.x_column, &params.y_column])?;

        let xs = column(data, &params.x_column);
        let ys = column(data, &params.y_column);
        require_numeric(Self::KIND, shape, &params.y_column, &ys)?;

        Ok(LineChart {
            data: points(&xs, &ys),
            series_name: params
                .series_name
                .clone()
                .unwrap_or_else(|| format_label(&params.y_column)),
            x_label: format_label(&params.x_column),
            y_label: format_label(&params.y_column),
        })
    }
}

/// Columns feeding a multi-series line chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLineChartParams {
    /// X axis column shared by every series.
    pub x_column: String,
    /// One series per column, in this order.
    pub y_columns: Vec<String>,
    /// Display names, one per y column. Defaults to the formatted column names.
    pub series_names: Option<Vec<String>>,
}

impl MultiLineChartParams {
    /// One series per column in `y_columns`, sharing `x_column`.
    pub fn new<I, S>(x_column: impl Into<String>, y_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            x_column: x_column.into(),
            y_columns: y_columns.into_iter().map(Into::into).collect(),
            series_names: None,
        }
    }

    /// Override the series display names, one per y column.
    #[must_use]
    pub fn with_series_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Builds a [`MultiLineChart`].
///
/// Every series reuses the x values of the same rows. Series whose
/// underlying x domains differ are not aligned or interpolated; callers
/// reshape such data before charting it.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiLineChartTransformer;

impl Transformer for MultiLineChartTransformer {
    type Params = MultiLineChartParams;
    type Output = MultiLineChart;

    const KIND: ChartKind = ChartKind::MultiLineChart;

    fn transform<D>(&self, data: &D, params: &MultiLineChartParams) -> Result<MultiLineChart>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        if params.y_columns.is_empty() {
            return Err(ValidationError::EmptyRequest { name: "y_columns" }.into());
        }
        let required: Vec<&str> = std::iter::once(params.x_column.as_str())
            .chain(params.y_columns.iter().map(String::as_str))
            .collect();
        validate_columns(data, &required)?;
        validate_names(
            "series_names",
            params.series_names.as_deref(),
            &params.y_columns,
        )?;

        let xs = column(data, &params.x_column);
        let mut series = Vec::with_capacity(params.y_columns.len());
        for (idx, key) in params.y_columns.iter().enumerate() {
            let ys = column(data, key);
            require_numeric(Self::KIND, shape, key, &ys)?;
            let name = params
                .series_names
                .as_ref()
                .and_then(|names| names.get(idx).cloned())
                .unwrap_or_else(|| format_label(key));
            series.push(LineSeries {
                name,
                key: key.clone(),
                data: points(&xs, &ys),
            });
        }

        Ok(MultiLineChart {
            series,
            x_label: format_label(&params.x_column),
        })
    }
}

fn points(xs: &[CellValue], ys: &[CellValue]) -> Vec<XyPoint> {
    xs.iter()
        .zip(ys)
        .map(|(x, y)| XyPoint {
            x: sanitize(x),
            y: sanitize(y),
        })
        .collect()
}
