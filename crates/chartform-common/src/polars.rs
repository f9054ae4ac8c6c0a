//! Polars AnyValue utility functions.
//!
//! This module converts Polars `AnyValue` cells into [`CellValue`] and provides
//! the numeric parsing and column-name helpers shared by the workspace.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame, PolarsError, PolarsResult, TimeUnit};

use crate::cell::CellValue;

/// Days between 0001-01-01 (CE) and the Unix epoch, as used by Polars `Date`.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Converts a Polars `AnyValue` to a [`CellValue`].
///
/// Integer widths collapse to `Int`, floats to `Float`, temporal values to
/// `Date`/`Timestamp` (UTC). Types without a dedicated variant keep their
/// display form in `Other`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use chartform_common::{CellValue, any_to_cell};
///
/// assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
/// assert_eq!(any_to_cell(AnyValue::Int32(42)), CellValue::Int(42));
/// assert_eq!(any_to_cell(AnyValue::String("hello")), CellValue::from("hello"));
/// ```
pub fn any_to_cell(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Missing,
        AnyValue::Boolean(b) => CellValue::Bool(b),
        AnyValue::Int8(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Int(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Int(v),
        AnyValue::UInt8(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Int(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).map_or(CellValue::Float(v as f64), CellValue::Int),
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        AnyValue::Date(days) => date_from_epoch_days(days).map_or(CellValue::Missing, CellValue::Date),
        AnyValue::Datetime(v, unit, _) => {
            timestamp_from_epoch(v, unit).map_or(CellValue::Missing, CellValue::Timestamp)
        }
        AnyValue::DatetimeOwned(v, unit, _) => {
            timestamp_from_epoch(v, unit).map_or(CellValue::Missing, CellValue::Timestamp)
        }
        // For any other type, use Display but strip outer quotes if present
        other => {
            let s = other.to_string();
            if s.starts_with('"') && s.ends_with('"') && s.len() >= 2 {
                CellValue::Other(s[1..s.len() - 1].to_string())
            } else {
                CellValue::Other(s)
            }
        }
    }
}

fn date_from_epoch_days(days: i32) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(days.checked_add(EPOCH_DAYS_FROM_CE)?)
}

fn timestamp_from_epoch(value: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let datetime = match unit {
        TimeUnit::Nanoseconds => Some(DateTime::from_timestamp_nanos(value)),
        TimeUnit::Microseconds => DateTime::from_timestamp_micros(value),
        TimeUnit::Milliseconds => DateTime::from_timestamp_millis(value),
    };
    datetime.map(|dt| dt.naive_utc())
}

/// Formats a floating-point number as a string without trailing zeros after decimal.
///
/// Only trims trailing zeros if the number contains a decimal point.
/// Integer-valued floats like 40.0 are formatted as "40", not "4".
///
/// # Examples
///
/// ```
/// use chartform_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(40.0), "40");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.');
        if trimmed.is_empty() {
            "0".to_string()
        } else {
            trimmed.to_string()
        }
    } else {
        s
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Normalizes a column name: lowercase, spaces replaced by underscores.
///
/// # Examples
///
/// ```
/// use chartform_common::clean_column_name;
///
/// assert_eq!(clean_column_name("Total GMV"), "total_gmv");
/// assert_eq!(clean_column_name("Customer Name"), "customer_name");
/// ```
pub fn clean_column_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

/// Applies [`clean_column_name`] to every column of a DataFrame in place.
///
/// Fails if two columns collapse to the same cleaned name.
pub fn clean_column_names(df: &mut DataFrame) -> PolarsResult<()> {
    let cleaned: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| clean_column_name(name.as_str()))
        .collect();
    let mut seen = BTreeSet::new();
    for name in &cleaned {
        if !seen.insert(name.as_str()) {
            return Err(PolarsError::Duplicate(
                format!("column name '{name}' appears more than once after cleaning").into(),
            ));
        }
    }
    df.set_column_names(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{NamedFrom, Series};

    #[test]
    fn test_any_to_cell_scalars() {
        assert_eq!(any_to_cell(AnyValue::Null), CellValue::Missing);
        assert_eq!(any_to_cell(AnyValue::Boolean(true)), CellValue::Bool(true));
        assert_eq!(any_to_cell(AnyValue::Int64(-100)), CellValue::Int(-100));
        assert_eq!(any_to_cell(AnyValue::UInt32(7)), CellValue::Int(7));
        assert_eq!(any_to_cell(AnyValue::Float32(1.5)), CellValue::Float(1.5));
        assert_eq!(any_to_cell(AnyValue::Float64(3.25)), CellValue::Float(3.25));
        assert_eq!(any_to_cell(AnyValue::String("x")), CellValue::from("x"));
    }

    #[test]
    fn test_any_to_cell_large_unsigned() {
        assert_eq!(
            any_to_cell(AnyValue::UInt64(u64::MAX)),
            CellValue::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn test_any_to_cell_temporal() {
        // 19_723 days after the epoch
        assert_eq!(
            any_to_cell(AnyValue::Date(19_723)),
            CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );

        let expected = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let millis = expected.and_utc().timestamp_millis();
        assert_eq!(
            any_to_cell(AnyValue::Datetime(millis, TimeUnit::Milliseconds, None)),
            CellValue::Timestamp(expected)
        );
    }

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(10.5), "10.5");
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("3.5"), Some(3.5));
        assert_eq!(parse_f64("  3.5  "), Some(3.5));
        assert_eq!(parse_f64("invalid"), None);
    }

    #[test]
    fn test_clean_column_names() {
        let mut df = DataFrame::new(vec![
            Series::new("Total GMV".into(), vec![100i64]).into(),
            Series::new("Customer Name".into(), vec!["John"]).into(),
        ])
        .unwrap();

        clean_column_names(&mut df).unwrap();

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["total_gmv", "customer_name"]);
    }

    #[test]
    fn test_clean_column_names_rejects_collisions() {
        let mut df = DataFrame::new(vec![
            Series::new("Total GMV".into(), vec![1i64]).into(),
            Series::new("total gmv".into(), vec![2i64]).into(),
        ])
        .unwrap();

        assert!(clean_column_names(&mut df).is_err());
    }
}
