//! Tabular dataset to chart structure transformation.
//!
//! This crate turns a dataset (a Polars [`DataFrame`](polars::prelude::DataFrame)
//! or any other [`TabularData`]) into JSON-ready structures for charting
//! front ends. Each chart type has a [`Transformer`]; [`ChartTransformer`]
//! bundles all of them behind one entry point.
//!
//! Every transformer follows the same pipeline:
//!
//! 1. validate the requested columns ([`validate_columns`])
//! 2. walk the rows once, converting each needed cell with [`sanitize`]
//! 3. assemble the typed payload, wrapped in [`ChartOutput`]
//!
//! Failures are reported as [`ValidationError`] for structural problems and
//! [`TransformationError`] for data that cannot be charted.
//!
//! # Example
//!
//! ```
//! use chartform_transform::{ChartTransformer, Table};
//! use serde_json::json;
//!
//! let table = Table::from_rows(
//!     ["total_orders", "revenue"],
//!     vec![vec![150.into(), 45000.5.into()]],
//! )
//! .unwrap();
//! let output = ChartTransformer::new().kpi_cards(&table).unwrap();
//! assert_eq!(
//!     output.to_json().unwrap(),
//!     json!({
//!         "chart_type": "kpi_cards",
//!         "data": [
//!             {"key": "total_orders", "label": "Total Orders", "value": 150.0},
//!             {"key": "revenue", "label": "Revenue", "value": 45000.5},
//!         ]
//!     })
//! );
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod facade;
pub mod label;
pub mod numeric;
pub mod output;
pub mod sanitize;
pub mod transformers;
pub mod validate;

pub use config::{ConfigError, TransformConfig};
pub use dataset::{DataShape, Table, TabularData};
pub use error::{ChartError, Result, TransformationError, ValidationError};
pub use facade::{ChartRequest, ChartTransformer};
pub use label::format_label;
pub use numeric::numeric_columns;
pub use output::{
    BarChart, BarPoint, ChartKind, ChartOutput, CorrelationHeatmap, DataTable, FunnelChart,
    FunnelStage, Heatmap, HeatmapCell, KpiCard, KpiCards, LineChart, LineSeries, MultiLineChart,
    Pagination, PieChart, PieSlice, StackedBarChart, StackedBarPoint, TableColumn, XyPoint,
};
pub use sanitize::{sanitize, sanitize_text};
pub use transformers::{
    BarChartParams, BarChartTransformer, CorrelationHeatmapParams, CorrelationHeatmapTransformer,
    DataTableParams, DataTableTransformer, FunnelChartParams, FunnelChartTransformer,
    HeatmapParams, HeatmapTransformer, KpiCardsTransformer, LineChartParams, LineChartTransformer,
    MultiLineChartParams, MultiLineChartTransformer, PieChartParams, PieChartTransformer,
    StackedBarChartParams, StackedBarChartTransformer, Transformer,
};
pub use validate::validate_columns;
