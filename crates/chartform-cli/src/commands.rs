use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chartform_transform::{
    BarChartParams, ChartKind, ChartOutput, ChartRequest, ChartTransformer,
    CorrelationHeatmapParams, DataTableParams, FunnelChartParams, HeatmapParams, LineChartParams,
    MultiLineChartParams, PieChartParams, StackedBarChartParams, TransformConfig,
};

use crate::cli::{Command, InputArgs};
use crate::ingest::read_csv;

/// Split a chart subcommand into its input arguments and chart request.
///
/// Returns `None` for subcommands that do not build a chart.
pub fn chart_request(command: &Command) -> Option<(&InputArgs, ChartRequest)> {
    let pair = match command {
        Command::Kpi(args) => (&args.input, ChartRequest::KpiCards),
        Command::Bar(args) => (
            &args.input,
            ChartRequest::BarChart(BarChartParams {
                x_column: args.x_column.clone(),
                y_column: args.y_column.clone(),
                label_column: args.label_column.clone(),
            }),
        ),
        Command::Line(args) => (
            &args.input,
            ChartRequest::LineChart(LineChartParams {
                x_column: args.x_column.clone(),
                y_column: args.y_column.clone(),
                series_name: args.series_name.clone(),
            }),
        ),
        Command::MultiLine(args) => (
            &args.input,
            ChartRequest::MultiLineChart(MultiLineChartParams {
                x_column: args.x_column.clone(),
                y_columns: args.y_columns.clone(),
                series_names: args.series_names.clone(),
            }),
        ),
        Command::Pie(args) => (
            &args.input,
            ChartRequest::PieChart(PieChartParams::new(&args.label_column, &args.value_column)),
        ),
        Command::Heatmap(args) => (
            &args.input,
            ChartRequest::Heatmap(HeatmapParams::new(
                &args.x_column,
                &args.y_column,
                &args.value_column,
            )),
        ),
        Command::Correlation(args) => (
            &args.input,
            ChartRequest::CorrelationHeatmap(CorrelationHeatmapParams {
                metrics: args.metrics.clone(),
            }),
        ),
        Command::Funnel(args) => (
            &args.input,
            ChartRequest::FunnelChart(FunnelChartParams::new(
                &args.stage_column,
                &args.value_column,
            )),
        ),
        Command::StackedBar(args) => (
            &args.input,
            ChartRequest::StackedBarChart(StackedBarChartParams {
                x_column: args.x_column.clone(),
                y_columns: args.y_columns.clone(),
                category_names: args.category_names.clone(),
            }),
        ),
        Command::Table(args) => (
            &args.input,
            ChartRequest::DataTable(DataTableParams {
                page: args.page,
                page_size: args.page_size,
            }),
        ),
        Command::Charts => return None,
    };
    Some(pair)
}

/// Load the input, build the chart and write its JSON.
pub fn run_chart(input: &InputArgs, request: &ChartRequest) -> Result<()> {
    let output = build_chart(input, request)?;
    let json = render(&output, input.pretty)?;
    write_output(&json, input.output.as_deref())
}

/// Load the configuration and dataset, then run the requested transformer.
pub fn build_chart(input: &InputArgs, request: &ChartRequest) -> Result<ChartOutput> {
    let config = match &input.config {
        Some(path) => TransformConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => TransformConfig::default(),
    };
    let df = read_csv(&input.input, input.clean_columns)?;
    let charts = ChartTransformer::with_config(config);
    let output = charts
        .transform(&df, request)
        .with_context(|| format!("build {} from {}", request.kind(), input.input.display()))?;
    Ok(output)
}

/// Serialize a chart to JSON text.
pub fn render(output: &ChartOutput, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(output)
    } else {
        serde_json::to_string(output)
    };
    json.context("serialize chart output")
}

fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, format!("{json}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote chart output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}").context("write chart output to stdout")?;
        }
    }
    Ok(())
}

/// Print the supported chart types.
pub fn run_charts() -> Result<()> {
    let mut stdout = io::stdout().lock();
    for kind in ChartKind::ALL {
        writeln!(stdout, "{kind}")?;
    }
    Ok(())
}
