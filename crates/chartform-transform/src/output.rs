//! Chart output types.
//!
//! Each chart has a typed payload. [`ChartOutput`] wraps them behind an
//! internal `chart_type` tag so serialized output is a plain JSON object.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// The closed set of supported chart types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Single-row dashboard metrics.
    KpiCards,
    /// Categorical bars.
    BarChart,
    /// One series over an x axis.
    LineChart,
    /// Several series sharing an x axis.
    MultiLineChart,
    /// Part-to-whole slices.
    PieChart,
    /// Sparse two-axis intensity grid.
    Heatmap,
    /// Pearson correlation matrix over numeric columns.
    CorrelationHeatmap,
    /// Ordered conversion stages.
    FunnelChart,
    /// Bars split into segments.
    StackedBarChart,
    /// Paginated rows.
    DataTable,
}

impl ChartKind {
    /// Every chart type, in facade order.
    pub const ALL: [ChartKind; 10] = [
        ChartKind::KpiCards,
        ChartKind::BarChart,
        ChartKind::LineChart,
        ChartKind::MultiLineChart,
        ChartKind::PieChart,
        ChartKind::Heatmap,
        ChartKind::CorrelationHeatmap,
        ChartKind::FunnelChart,
        ChartKind::StackedBarChart,
        ChartKind::DataTable,
    ];

    /// The `chart_type` discriminator used in output.
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::KpiCards => "kpi_cards",
            ChartKind::BarChart => "bar_chart",
            ChartKind::LineChart => "line_chart",
            ChartKind::MultiLineChart => "multi_line_chart",
            ChartKind::PieChart => "pie_chart",
            ChartKind::Heatmap => "heatmap",
            ChartKind::CorrelationHeatmap => "correlation_heatmap",
            ChartKind::FunnelChart => "funnel_chart",
            ChartKind::StackedBarChart => "stacked_bar_chart",
            ChartKind::DataTable => "data_table",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart-ready structure, serialized with a `chart_type` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart_type", rename_all = "snake_case")]
pub enum ChartOutput {
    /// See [`KpiCards`].
    KpiCards(KpiCards),
    /// See [`BarChart`].
    BarChart(BarChart),
    /// See [`LineChart`].
    LineChart(LineChart),
    /// See [`MultiLineChart`].
    MultiLineChart(MultiLineChart),
    /// See [`PieChart`].
    PieChart(PieChart),
    /// See [`Heatmap`].
    Heatmap(Heatmap),
    /// See [`CorrelationHeatmap`].
    CorrelationHeatmap(CorrelationHeatmap),
    /// See [`FunnelChart`].
    FunnelChart(FunnelChart),
    /// See [`StackedBarChart`].
    StackedBarChart(StackedBarChart),
    /// See [`DataTable`].
    DataTable(DataTable),
}

impl ChartOutput {
    /// The chart type of this output.
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartOutput::KpiCards(_) => ChartKind::KpiCards,
            ChartOutput::BarChart(_) => ChartKind::BarChart,
            ChartOutput::LineChart(_) => ChartKind::LineChart,
            ChartOutput::MultiLineChart(_) => ChartKind::MultiLineChart,
            ChartOutput::PieChart(_) => ChartKind::PieChart,
            ChartOutput::Heatmap(_) => ChartKind::Heatmap,
            ChartOutput::CorrelationHeatmap(_) => ChartKind::CorrelationHeatmap,
            ChartOutput::FunnelChart(_) => ChartKind::FunnelChart,
            ChartOutput::StackedBarChart(_) => ChartKind::StackedBarChart,
            ChartOutput::DataTable(_) => ChartKind::DataTable,
        }
    }

    /// Serialize to a JSON value.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

macro_rules! impl_from_payload {
    ($($payload:ident),* $(,)?) => {
        $(
            impl From<$payload> for ChartOutput {
                fn from(payload: $payload) -> Self {
                    ChartOutput::$payload(payload)
                }
            }
        )*
    };
}

impl_from_payload!(
    KpiCards,
    BarChart,
    LineChart,
    MultiLineChart,
    PieChart,
    Heatmap,
    CorrelationHeatmap,
    FunnelChart,
    StackedBarChart,
    DataTable,
);

/// One KPI card per dataset column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCards {
    /// Cards in dataset column order.
    pub data: Vec<KpiCard>,
}

/// A single dashboard metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCard {
    /// Source column name.
    pub key: String,
    /// Formatted column label.
    pub label: String,
    /// Sanitized metric value.
    pub value: Value,
}

/// Categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    /// One bar per row, in row order.
    pub data: Vec<BarPoint>,
    /// Formatted x column label.
    pub x_label: String,
    /// Formatted y column label.
    pub y_label: String,
}

/// A single bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    /// Category.
    pub x: Value,
    /// Bar height.
    pub y: Value,
    /// Text form of the label column, `null` when missing.
    pub label: Option<String>,
}

/// An `(x, y)` pair on a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct XyPoint {
    /// Position on the x axis.
    pub x: Value,
    /// Value on the y axis.
    pub y: Value,
}

/// Single-series line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    /// Points in row order.
    pub data: Vec<XyPoint>,
    /// Series display name.
    pub series_name: String,
    /// Formatted x column label.
    pub x_label: String,
    /// Formatted y column label.
    pub y_label: String,
}

/// Multi-series line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MultiLineChart {
    /// One series per requested y column, in request order.
    pub series: Vec<LineSeries>,
    /// Formatted x column label.
    pub x_label: String,
}

/// One line of a multi-line chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    /// Display name.
    pub name: String,
    /// Source column.
    pub key: String,
    /// Points in row order.
    pub data: Vec<XyPoint>,
}

/// Pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    /// One slice per row; values are not normalized.
    pub data: Vec<PieSlice>,
}

/// A single pie slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Slice label, `null` when missing.
    pub label: Option<String>,
    /// Slice value.
    pub value: Value,
}

/// Sparse heatmap: one cell per row, missing combinations are not filled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    /// Cells in row order.
    pub data: Vec<HeatmapCell>,
    /// Formatted x column label.
    pub x_label: String,
    /// Formatted y column label.
    pub y_label: String,
    /// Formatted value column label.
    pub value_label: String,
}

/// A heatmap cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    /// Column coordinate.
    pub x: Value,
    /// Row coordinate.
    pub y: Value,
    /// Intensity.
    pub value: Value,
}

/// Correlation matrix over numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationHeatmap {
    /// Correlated columns, in detection (or request) order.
    pub columns: Vec<String>,
    /// `matrix[i][j]` is the coefficient of `columns[i]` against `columns[j]`.
    pub matrix: Vec<Vec<Option<f64>>>,
    /// The matrix flattened into heatmap cells, x-major.
    pub data: Vec<HeatmapCell>,
    /// Axis label for both axes.
    pub x_label: String,
    /// Axis label for both axes.
    pub y_label: String,
    /// Label for cell values.
    pub value_label: String,
}

/// Funnel chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelChart {
    /// Stages in caller-provided order.
    pub data: Vec<FunnelStage>,
    /// Formatted stage column label.
    pub stage_label: String,
    /// Formatted value column label.
    pub value_label: String,
}

/// A funnel stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunnelStage {
    /// Stage name, `null` when missing.
    pub stage: Option<String>,
    /// Raw stage value.
    pub value: Value,
}

/// Stacked bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBarChart {
    /// One bar per row.
    pub data: Vec<StackedBarPoint>,
    /// Segment display names, in request order.
    pub categories: Vec<String>,
    /// Formatted x column label.
    pub x_label: String,
}

/// A bar with one value per segment column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBarPoint {
    /// Category.
    pub x: Value,
    /// Segment column to value, in request order. Nulls are kept.
    #[serde(flatten)]
    pub segments: IndexMap<String, Value>,
}

/// Paginated table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    /// Column descriptors in dataset order.
    pub columns: Vec<TableColumn>,
    /// Rows of the requested page.
    pub rows: Vec<IndexMap<String, Value>>,
    /// Page metadata.
    pub pagination: Pagination,
}

/// A table column descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableColumn {
    /// Column name.
    pub key: String,
    /// Formatted column label.
    pub label: String,
}

/// Page metadata for [`DataTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Requested page (1-based).
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Rows in the whole dataset.
    pub total_rows: usize,
    /// Number of pages, at least 1.
    pub total_pages: usize,
    /// First row of the page (0-based).
    pub start_index: usize,
    /// One past the last row of the page.
    pub end_index: usize,
    /// Whether a previous page exists.
    pub has_previous: bool,
    /// Whether a following page exists.
    pub has_next: bool,
}
