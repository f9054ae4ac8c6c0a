//! Shared building blocks for chartform crates.
//!
//! - [`CellValue`]: the engine-facing representation of a single table cell
//! - Polars `AnyValue` conversion and column-name helpers

pub mod cell;
pub mod polars;

pub use cell::{CellValue, format_date, format_timestamp};
pub use self::polars::{any_to_cell, clean_column_name, clean_column_names, format_numeric, parse_f64};
