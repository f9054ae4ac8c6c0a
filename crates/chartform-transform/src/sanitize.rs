//! Value sanitization: one cell in, one JSON-safe primitive out.

use chartform_common::{CellValue, format_date, format_timestamp};
use serde_json::{Number, Value};

/// Converts a cell into a JSON primitive.
///
/// - Missing, NaN, infinities and empty text become `null`.
/// - Every number becomes a JSON float.
/// - Dates and timestamps become ISO 8601 strings.
/// - Booleans pass through; everything else keeps its text form.
///
/// Never fails.
///
/// # Examples
///
/// ```
/// use chartform_common::CellValue;
/// use chartform_transform::sanitize;
/// use serde_json::json;
///
/// assert_eq!(sanitize(&CellValue::Int(150)), json!(150.0));
/// assert_eq!(sanitize(&CellValue::Float(f64::NAN)), json!(null));
/// ```
pub fn sanitize(cell: &CellValue) -> Value {
    match cell {
        CellValue::Missing => Value::Null,
        CellValue::Int(v) => float_value(*v as f64),
        CellValue::Float(v) => float_value(*v),
        CellValue::Date(d) => Value::String(format_date(d)),
        CellValue::Timestamp(ts) => Value::String(format_timestamp(ts)),
        CellValue::Text(s) if s.is_empty() => Value::Null,
        CellValue::Text(s) | CellValue::Other(s) => Value::String(s.clone()),
        CellValue::Bool(b) => Value::Bool(*b),
    }
}

/// Text form of a cell for labels and categories, `None` when missing.
pub fn sanitize_text(cell: &CellValue) -> Option<String> {
    cell.to_text()
}

fn float_value(v: f64) -> Value {
    Number::from_f64(v).map_or(Value::Null, Value::Number)
}
