//! CLI argument definitions for `chartform`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "chartform",
    version,
    about = "Turn CSV datasets into JSON chart structures",
    long_about = "Turn CSV datasets into JSON structures ready for charting front ends.\n\n\
                  Each subcommand reads one CSV file, builds one chart type and\n\
                  writes the result as JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// One KPI card per column of a single-row dataset.
    Kpi(KpiArgs),

    /// Categorical bar chart.
    Bar(BarArgs),

    /// Single-series line chart.
    Line(LineArgs),

    /// Line chart with one series per value column.
    MultiLine(MultiLineArgs),

    /// Pie chart.
    Pie(PieArgs),

    /// Sparse heatmap over two axis columns.
    Heatmap(HeatmapArgs),

    /// Pearson correlation matrix over numeric columns.
    Correlation(CorrelationArgs),

    /// Funnel chart with stages in file order.
    Funnel(FunnelArgs),

    /// Stacked bar chart.
    StackedBar(StackedBarArgs),

    /// One page of the dataset as a table.
    Table(TableArgs),

    /// List the supported chart types.
    Charts,
}

/// Arguments shared by every chart subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// TOML file with engine settings.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Lowercase column names and replace spaces with underscores.
    #[arg(long = "clean-columns")]
    pub clean_columns: bool,

    /// Write JSON to this file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON output.
    #[arg(long = "pretty")]
    pub pretty: bool,
}

#[derive(Args, Debug, Clone)]
pub struct KpiArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BarArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Category column.
    #[arg(long = "x")]
    pub x_column: String,

    /// Value column.
    #[arg(long = "y")]
    pub y_column: String,

    /// Column providing bar labels (defaults to the category column).
    #[arg(long = "label")]
    pub label_column: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct LineArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "x")]
    pub x_column: String,

    #[arg(long = "y")]
    pub y_column: String,

    /// Display name of the series.
    #[arg(long = "series-name")]
    pub series_name: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct MultiLineArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "x")]
    pub x_column: String,

    /// Value columns, one series each (comma separated or repeated).
    #[arg(long = "y", value_delimiter = ',', required = true)]
    pub y_columns: Vec<String>,

    /// Series display names, one per value column.
    #[arg(long = "series-names", value_delimiter = ',')]
    pub series_names: Option<Vec<String>>,
}

#[derive(Args, Debug, Clone)]
pub struct PieArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "label")]
    pub label_column: String,

    #[arg(long = "value")]
    pub value_column: String,
}

#[derive(Args, Debug, Clone)]
pub struct HeatmapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "x")]
    pub x_column: String,

    #[arg(long = "y")]
    pub y_column: String,

    #[arg(long = "value")]
    pub value_column: String,
}

#[derive(Args, Debug, Clone)]
pub struct CorrelationArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Columns to correlate (defaults to every numeric column).
    #[arg(long = "metrics", value_delimiter = ',')]
    pub metrics: Option<Vec<String>>,
}

#[derive(Args, Debug, Clone)]
pub struct FunnelArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "stage")]
    pub stage_column: String,

    #[arg(long = "value")]
    pub value_column: String,
}

#[derive(Args, Debug, Clone)]
pub struct StackedBarArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long = "x")]
    pub x_column: String,

    /// Segment columns (comma separated or repeated).
    #[arg(long = "y", value_delimiter = ',', required = true)]
    pub y_columns: Vec<String>,

    /// Segment display names, one per segment column.
    #[arg(long = "category-names", value_delimiter = ',')]
    pub category_names: Option<Vec<String>>,
}

#[derive(Args, Debug, Clone)]
pub struct TableArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Page number, starting at 1.
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Rows per page (defaults to the configured page size).
    #[arg(long = "page-size")]
    pub page_size: Option<usize>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
