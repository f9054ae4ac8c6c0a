//! Chart transformers.
//!
//! Every chart type has one unit-like transformer implementing
//! [`Transformer`]. A transformer validates the requested columns before
//! touching any row, walks the rows once, sanitizes only the cells it needs
//! and returns a freshly built payload.
//!
//! # Example
//!
//! ```
//! use chartform_transform::{BarChartParams, BarChartTransformer, Table, Transformer};
//!
//! let table = Table::from_rows(
//!     ["cat", "val"],
//!     vec![vec!["A".into(), 10.into()], vec!["B".into(), 5.into()]],
//! )
//! .unwrap();
//! let chart = BarChartTransformer
//!     .transform(&table, &BarChartParams::new("cat", "val"))
//!     .unwrap();
//! assert_eq!(chart.data.len(), 2);
//! assert_eq!(chart.x_label, "Cat");
//! ```

mod bar;
mod correlation;
mod funnel;
mod heatmap;
mod kpi;
mod line;
mod pie;
mod stacked_bar;
mod table;

pub use bar::{BarChartParams, BarChartTransformer};
pub use correlation::{CorrelationHeatmapParams, CorrelationHeatmapTransformer};
pub use funnel::{FunnelChartParams, FunnelChartTransformer};
pub use heatmap::{HeatmapParams, HeatmapTransformer};
pub use kpi::KpiCardsTransformer;
pub use line::{LineChartParams, LineChartTransformer, MultiLineChartParams, MultiLineChartTransformer};
pub use pie::{PieChartParams, PieChartTransformer};
pub use stacked_bar::{StackedBarChartParams, StackedBarChartTransformer};
pub use table::{DataTableParams, DataTableTransformer};

use chartform_common::CellValue;

use crate::dataset::{DataShape, TabularData};
use crate::error::{Result, TransformationError};
use crate::output::{ChartKind, ChartOutput};

/// The contract shared by all chart transformers.
///
/// Implementations are stateless after construction, so one instance can
/// serve any number of calls, including concurrent ones.
pub trait Transformer: Send + Sync {
    /// Per-call parameters (column names, overrides, pagination).
    type Params;

    /// The typed payload produced on success.
    type Output: Into<ChartOutput>;

    /// Chart type produced by this transformer.
    const KIND: ChartKind;

    /// Convert `data` into a chart payload.
    ///
    /// # Errors
    ///
    /// Returns a validation error when a required column is absent or a
    /// parameter is out of range, and a transformation error when the data
    /// is well-formed but cannot be charted. No partial output is returned.
    fn transform<D>(&self, data: &D, params: &Self::Params) -> Result<Self::Output>
    where
        D: TabularData + ?Sized;
}

/// Logs the start of a transform and returns the dataset shape.
pub(crate) fn log_start<D>(kind: ChartKind, data: &D) -> DataShape
where
    D: TabularData + ?Sized,
{
    let shape = data.shape();
    tracing::debug!(
        chart = %kind,
        rows = shape.rows,
        columns = shape.columns,
        "Transforming dataset"
    );
    shape
}

/// Cells of a column that has already passed validation.
pub(crate) fn column<D>(data: &D, name: &str) -> Vec<CellValue>
where
    D: TabularData + ?Sized,
{
    data.column_values(name).unwrap_or_default()
}

/// Rejects a value column that has present cells but none of them numeric.
///
/// Entirely missing columns are accepted and surface as nulls.
pub(crate) fn require_numeric(
    kind: ChartKind,
    shape: DataShape,
    name: &str,
    cells: &[CellValue],
) -> std::result::Result<(), TransformationError> {
    let mut present = cells.iter().filter(|cell| !cell.is_missing()).peekable();
    if present.peek().is_none() {
        return Ok(());
    }
    if present.any(CellValue::is_numeric) {
        Ok(())
    } else {
        Err(TransformationError::new(
            kind,
            shape,
            format!("column '{name}' contains no numeric values"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_numeric() {
        let shape = DataShape {
            rows: 2,
            columns: 1,
        };
        let ok = [CellValue::from("n/a"), CellValue::Float(1.0)];
        assert!(require_numeric(ChartKind::BarChart, shape, "val", &ok).is_ok());

        let all_missing = [CellValue::Missing, CellValue::Float(f64::NAN)];
        assert!(require_numeric(ChartKind::BarChart, shape, "val", &all_missing).is_ok());

        let text = [CellValue::from("a"), CellValue::from("b")];
        let err = require_numeric(ChartKind::BarChart, shape, "val", &text).unwrap_err();
        assert_eq!(err.chart, ChartKind::BarChart);
        assert_eq!(err.message, "column 'val' contains no numeric values");
    }
}
