//! Funnel charts.

use crate::dataset::TabularData;
use crate::error::Result;
use crate::label::format_label;
use crate::output::{ChartKind, FunnelChart, FunnelStage};
use crate::sanitize::{sanitize, sanitize_text};
use crate::validate::validate_columns;

use super::{Transformer, column, log_start, require_numeric};

/// Columns feeding a funnel chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunnelChartParams {
    /// Stage name column.
    pub stage_column: String,
    /// Stage value column.
    pub value_column: String,
}

impl FunnelChartParams {
    /// Funnel of `value_column` per stage.
    pub fn new(stage_column: impl Into<String>, value_column: impl Into<String>) -> Self {
        Self {
            stage_column: stage_column.into(),
            value_column: value_column.into(),
        }
    }
}

/// Builds a [`FunnelChart`].
///
/// Rows are taken as stages in the order given. Only raw stage values are
/// emitted; drop-off between stages is left to the front end.
#[derive(Debug, Clone, Copy, Default)]
pub struct FunnelChartTransformer;

impl Transformer for FunnelChartTransformer {
    type Params = FunnelChartParams;
    type Output = FunnelChart;

    const KIND: ChartKind = ChartKind::FunnelChart;

    fn transform<D>(&self, data: &D, params: &FunnelChartParams) -> Result<FunnelChart>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        validate_columns(data, &[&params.stage_column, &params.value_column])?;

        let stages = column(data, &params.stage_column);
        let values = column(data, &params.value_column);
        require_numeric(Self::KIND, shape, &params.value_column, &values)?;

        let data = stages
            .iter()
            .zip(&values)
            .map(|(stage, value)| FunnelStage {
                stage: sanitize_text(stage),
                value: sanitize(value),
            })
            .collect();

        Ok(FunnelChart {
            data,
            stage_label: format_label(&params.stage_column),
            value_label: format_label(&params.value_column),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Table;
    use serde_json::json;

    #[test]
    fn test_stage_order_is_preserved() {
        // Deliberately not sorted by value.
        let table = Table::from_rows(
            ["funnel_stage", "user_count"],
            vec![
                vec!["Visit".into(), 1000.into()],
                vec!["Signup".into(), 1200.into()],
                vec!["Purchase".into(), 90.into()],
            ],
        )
        .unwrap();
        let chart = FunnelChartTransformer
            .transform(&table, &FunnelChartParams::new("funnel_stage", "user_count"))
            .unwrap();
        let stages: Vec<Option<&str>> = chart.data.iter().map(|s| s.stage.as_deref()).collect();
        assert_eq!(stages, [Some("Visit"), Some("Signup"), Some("Purchase")]);
        assert_eq!(chart.data[1].value, json!(1200.0));
        assert_eq!(chart.stage_label, "Funnel Stage");
        assert_eq!(chart.value_label, "User Count");
    }
}
