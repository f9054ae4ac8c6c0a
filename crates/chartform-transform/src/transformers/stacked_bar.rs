//! Stacked bar charts.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use crate::dataset::TabularData;
use crate::error::{Result, ValidationError};
use crate::label::format_label;
use crate::output::{ChartKind, StackedBarChart, StackedBarPoint};
use crate::sanitize::sanitize;
use crate::validate::{validate_columns, validate_names};

use super::{Transformer, column, log_start, require_numeric};

/// Output key holding the category of each bar.
const CATEGORY_KEY: &str = "x";

/// Columns feeding a stacked bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackedBarChartParams {
    /// Category column.
    pub x_column: String,
    /// Segment columns, stacked in this order.
    pub y_columns: Vec<String>,
    /// Display names, one per segment. Defaults to the formatted column names.
    pub category_names: Option<Vec<String>>,
}

impl StackedBarChartParams {
    /// One segment per column in `y_columns`, stacked per `x_column` category.
    pub fn new<I, S>(x_column: impl Into<String>, y_columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            x_column: x_column.into(),
            y_columns: y_columns.into_iter().map(Into::into).collect(),
            category_names: None,
        }
    }

    /// Override the segment display names, one per y column.
    #[must_use]
    pub fn with_category_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category_names = Some(names.into_iter().map(Into::into).collect());
        self
    }
}

/// Builds a [`StackedBarChart`] with one bar per row and one segment per y column.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedBarChartTransformer;

impl Transformer for StackedBarChartTransformer {
    type Params = StackedBarChartParams;
    type Output = StackedBarChart;

    const KIND: ChartKind = ChartKind::StackedBarChart;

    fn transform<D>(&self, data: &D, params: &StackedBarChartParams) -> Result<StackedBarChart>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        if params.y_columns.is_empty() {
            return Err(ValidationError::EmptyRequest { name: "y_columns" }.into());
        }
        validate_segment_keys(&params.y_columns)?;
        let required: Vec<&str> = std::iter::once(params.x_column.as_str())
            .chain(params.y_columns.iter().map(String::as_str))
            .collect();
        validate_columns(data, &required)?;
        validate_names(
            "category_names",
            params.category_names.as_deref(),
            &params.y_columns,
        )?;

        let xs = column(data, &params.x_column);
        let mut segments = Vec::with_capacity(params.y_columns.len());
        for key in &params.y_columns {
            let cells = column(data, key);
            require_numeric(Self::KIND, shape, key, &cells)?;
            segments.push((key, cells));
        }

        let data = xs
            .iter()
            .enumerate()
            .map(|(row, x)| StackedBarPoint {
                x: sanitize(x),
                segments: segments
                    .iter()
                    .map(|(key, cells)| {
                        let value = cells.get(row).map(sanitize).unwrap_or_default();
                        (key.to_string(), value)
                    })
                    .collect::<IndexMap<_, _>>(),
            })
            .collect();

        let categories = match &params.category_names {
            Some(names) => names.clone(),
            None => params.y_columns.iter().map(|c| format_label(c)).collect(),
        };

        Ok(StackedBarChart {
            data,
            categories,
            x_label: format_label(&params.x_column),
        })
    }
}

/// Segment columns become keys next to the category, so each must be
/// distinct and must not shadow it.
fn validate_segment_keys(y_columns: &[String]) -> std::result::Result<(), ValidationError> {
    let mut seen = BTreeSet::new();
    for key in y_columns {
        if key == CATEGORY_KEY {
            return Err(ValidationError::InvalidParameter {
                name: "y_columns",
                value: key.clone(),
                expected: "a column other than 'x'",
            });
        }
        if !seen.insert(key.as_str()) {
            return Err(ValidationError::InvalidParameter {
                name: "y_columns",
                value: key.clone(),
                expected: "distinct column names",
            });
        }
    }
    Ok(())
}
