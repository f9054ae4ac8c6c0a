//! Single entry point over every chart transformer.

use crate::config::TransformConfig;
use crate::dataset::TabularData;
use crate::error::Result;
use crate::output::{ChartKind, ChartOutput};
use crate::transformers::{
    BarChartParams, BarChartTransformer, CorrelationHeatmapParams, CorrelationHeatmapTransformer,
    DataTableParams, DataTableTransformer, FunnelChartParams, FunnelChartTransformer,
    HeatmapParams, HeatmapTransformer, KpiCardsTransformer, LineChartParams, LineChartTransformer,
    MultiLineChartParams, MultiLineChartTransformer, PieChartParams, PieChartTransformer,
    StackedBarChartParams, StackedBarChartTransformer, Transformer,
};

/// A chart request: the chart type together with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartRequest {
    KpiCards,
    BarChart(BarChartParams),
    LineChart(LineChartParams),
    MultiLineChart(MultiLineChartParams),
    PieChart(PieChartParams),
    Heatmap(HeatmapParams),
    CorrelationHeatmap(CorrelationHeatmapParams),
    FunnelChart(FunnelChartParams),
    StackedBarChart(StackedBarChartParams),
    DataTable(DataTableParams),
}

impl ChartRequest {
    /// Chart type this request produces.
    pub fn kind(&self) -> ChartKind {
        match self {
            ChartRequest::KpiCards => ChartKind::KpiCards,
            ChartRequest::BarChart(_) => ChartKind::BarChart,
            ChartRequest::LineChart(_) => ChartKind::LineChart,
            ChartRequest::MultiLineChart(_) => ChartKind::MultiLineChart,
            ChartRequest::PieChart(_) => ChartKind::PieChart,
            ChartRequest::Heatmap(_) => ChartKind::Heatmap,
            ChartRequest::CorrelationHeatmap(_) => ChartKind::CorrelationHeatmap,
            ChartRequest::FunnelChart(_) => ChartKind::FunnelChart,
            ChartRequest::StackedBarChart(_) => ChartKind::StackedBarChart,
            ChartRequest::DataTable(_) => ChartKind::DataTable,
        }
    }
}

/// Owns one instance of each transformer and delegates to it unchanged.
///
/// Construct once and reuse: the facade holds no per-call state, so shared
/// references may be used from several threads at once.
///
/// # Example
///
/// ```
/// use chartform_transform::{BarChartParams, ChartRequest, ChartTransformer, Table};
///
/// let table = Table::from_rows(
///     ["cat", "val"],
///     vec![vec!["A".into(), 10.into()], vec!["B".into(), 5.into()]],
/// )
/// .unwrap();
/// let charts = ChartTransformer::new();
/// let output = charts
///     .transform(&table, &ChartRequest::BarChart(BarChartParams::new("cat", "val")))
///     .unwrap();
/// assert_eq!(output.to_json().unwrap()["chart_type"], "bar_chart");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChartTransformer {
    config: TransformConfig,
    kpi: KpiCardsTransformer,
    bar: BarChartTransformer,
    line: LineChartTransformer,
    multi_line: MultiLineChartTransformer,
    pie: PieChartTransformer,
    heatmap: HeatmapTransformer,
    correlation: CorrelationHeatmapTransformer,
    funnel: FunnelChartTransformer,
    stacked_bar: StackedBarChartTransformer,
    table: DataTableTransformer,
}

impl ChartTransformer {
    /// Create a facade with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a facade from a configuration.
    pub fn with_config(config: TransformConfig) -> Self {
        Self {
            config,
            correlation: CorrelationHeatmapTransformer::new(config.correlation_precision),
            table: DataTableTransformer::new(config.default_page_size),
            ..Self::default()
        }
    }

    /// Configuration the facade was built from.
    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    /// Run the transformer matching `request`.
    pub fn transform<D>(&self, data: &D, request: &ChartRequest) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        match request {
            ChartRequest::KpiCards => self.kpi_cards(data),
            ChartRequest::BarChart(params) => self.bar_chart(data, params),
            ChartRequest::LineChart(params) => self.line_chart(data, params),
            ChartRequest::MultiLineChart(params) => self.multi_line_chart(data, params),
            ChartRequest::PieChart(params) => self.pie_chart(data, params),
            ChartRequest::Heatmap(params) => self.heatmap(data, params),
            ChartRequest::CorrelationHeatmap(params) => self.correlation_heatmap(data, params),
            ChartRequest::FunnelChart(params) => self.funnel_chart(data, params),
            ChartRequest::StackedBarChart(params) => self.stacked_bar_chart(data, params),
            ChartRequest::DataTable(params) => self.data_table(data, params),
        }
    }

    /// KPI cards from a single-row dataset.
    pub fn kpi_cards<D>(&self, data: &D) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.kpi, data, &())
    }

    /// Bar chart.
    pub fn bar_chart<D>(&self, data: &D, params: &BarChartParams) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.bar, data, params)
    }

    /// Line chart.
    pub fn line_chart<D>(&self, data: &D, params: &LineChartParams) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.line, data, params)
    }

    /// Multi-line chart.
    pub fn multi_line_chart<D>(&self, data: &D, params: &MultiLineChartParams) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.multi_line, data, params)
    }

    /// Pie chart.
    pub fn pie_chart<D>(&self, data: &D, params: &PieChartParams) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.pie, data, params)
    }

    /// Heatmap.
    pub fn heatmap<D>(&self, data: &D, params: &HeatmapParams) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.heatmap, data, params)
    }

    /// Correlation heatmap over numeric columns.
    pub fn correlation_heatmap<D>(
        &self,
        data: &D,
        params: &CorrelationHeatmapParams,
    ) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.correlation, data, params)
    }

    /// Funnel chart.
    pub fn funnel_chart<D>(&self, data: &D, params: &FunnelChartParams) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.funnel, data, params)
    }

    /// Stacked bar chart.
    pub fn stacked_bar_chart<D>(
        &self,
        data: &D,
        params: &StackedBarChartParams,
    ) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.stacked_bar, data, params)
    }

    /// One page of a data table.
    pub fn data_table<D>(&self, data: &D, params: &DataTableParams) -> Result<ChartOutput>
    where
        D: TabularData + ?Sized,
    {
        run(&self.table, data, params)
    }
}

fn run<T, D>(transformer: &T, data: &D, params: &T::Params) -> Result<ChartOutput>
where
    T: Transformer,
    D: TabularData + ?Sized,
{
    transformer.transform(data, params).map(Into::into)
}
