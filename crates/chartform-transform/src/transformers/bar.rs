//! Categorical bar charts.

use crate::dataset::TabularData;
use crate::error::Result;
use crate::label::format_label;
use crate::output::{BarChart, BarPoint, ChartKind};
use crate::sanitize::{sanitize, sanitize_text};
use crate::validate::validate_columns;

use super::{Transformer, column, log_start, require_numeric};

/// Columns feeding a bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChartParams {
    /// Category column.
    pub x_column: String,
    /// Value column.
    pub y_column: String,
    /// Column providing bar labels. Defaults to `x_column`.
    pub label_column: Option<String>,
}

impl BarChartParams {
    /// Bar chart of `y_column` per `x_column` category.
    pub fn new(x_column: impl Into<String>, y_column: impl Into<String>) -> Self {
        Self {
            x_column: x_column.into(),
            y_column: y_column.into(),
            label_column: None,
        }
    }

    /// Take bar labels from another column.
    #[must_use]
    pub fn with_label_column(mut self, label_column: impl Into<String>) -> Self {
        self.label_column = Some(label_column.into());
        self
    }

    fn label_column(&self) -> &str {
        self.label_column.as_deref().unwrap_or(&self.x_column)
    }
}

/// Builds a [`BarChart`] with one bar per row, in row order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarChartTransformer;

impl Transformer for BarChartTransformer {
    type Params = BarChartParams;
    type Output = BarChart;

    const KIND: ChartKind = ChartKind::BarChart;

    fn transform<D>(&self, data: &D, params: &BarChartParams) -> Result<BarChart>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        validate_columns(
            data,
            &[
                params.x_column.as_str(),
                params.y_column.as_str(),
                params.label_column(),
            ],
        )?;

        let xs = column(data, &params.x_column);
        let ys = column(data, &params.y_column);
        require_numeric(Self::KIND, shape, &params.y_column, &ys)?;
        let labels = column(data, params.label_column());

        let data = xs
            .iter()
            .zip(&ys)
            .zip(&labels)
            .map(|((x, y), label)| BarPoint {
                x: sanitize(x),
                y: sanitize(y),
                label: sanitize_text(label),
            })
            .collect();

        Ok(BarChart {
            data,
            x_label: format_label(&params.x_column),
            y_label: format_label(&params.y_column),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Table;
    use crate::error::ValidationError;
    use chartform_common::CellValue;
    use serde_json::json;

    fn vendors() -> Table {
        Table::from_rows(
            ["vendor_name", "total_gmv", "region"],
            vec![
                vec!["Acme".into(), 120.into(), "EU".into()],
                vec!["Globex".into(), CellValue::Missing, "US".into()],
                vec![CellValue::Missing, 80.5.into(), CellValue::Missing],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_bars_in_row_order() {
        let chart = BarChartTransformer
            .transform(&vendors(), &BarChartParams::new("vendor_name", "total_gmv"))
            .unwrap();
        assert_eq!(chart.x_label, "Vendor Name");
        assert_eq!(chart.y_label, "Total Gmv");
        assert_eq!(
            serde_json::to_value(&chart.data).unwrap(),
            json!([
                {"x": "Acme", "y": 120.0, "label": "Acme"},
                {"x": "Globex", "y": null, "label": "Globex"},
                {"x": null, "y": 80.5, "label": null},
            ])
        );
    }

    #[test]
    fn test_label_column_override() {
        let params = BarChartParams::new("vendor_name", "total_gmv").with_label_column("region");
        let chart = BarChartTransformer.transform(&vendors(), &params).unwrap();
        let labels: Vec<Option<&str>> = chart.data.iter().map(|p| p.label.as_deref()).collect();
        assert_eq!(labels, [Some("EU"), Some("US"), None]);
    }

    #[test]
    fn test_missing_label_column() {
        let params = BarChartParams::new("vendor_name", "total_gmv").with_label_column("country");
        let err = BarChartTransformer.transform(&vendors(), &params).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ChartError::Validation(ValidationError::MissingColumns { ref missing, .. })
                if missing == &["country".to_string()]
        ));
    }

    #[test]
    fn test_text_value_column_rejected() {
        let err = BarChartTransformer
            .transform(&vendors(), &BarChartParams::new("vendor_name", "region"))
            .unwrap_err();
        assert!(err.is_transformation());
    }
}
