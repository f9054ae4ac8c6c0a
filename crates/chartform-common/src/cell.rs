//! Engine-facing cell model.
//!
//! Every tabular source is read through [`CellValue`], so the transformation
//! engine never depends on a particular dataframe library's type tags.

use chrono::{NaiveDate, NaiveDateTime};

use crate::polars::{format_numeric, parse_f64};

/// A single cell of a tabular dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Null, NA or otherwise absent.
    #[default]
    Missing,
    /// Integral number.
    Int(i64),
    /// Floating-point number. NaN and infinities count as missing.
    Float(f64),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time, interpreted as UTC.
    Timestamp(NaiveDateTime),
    /// Text. The empty string counts as missing.
    Text(String),
    /// Boolean flag.
    Bool(bool),
    /// Any other source type, kept in its natural text form.
    Other(String),
}

impl CellValue {
    /// Returns true for every representation of missing data.
    pub fn is_missing(&self) -> bool {
        match self {
            CellValue::Missing => true,
            CellValue::Float(v) => !v.is_finite(),
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns true if the cell is a number or text that parses as one.
    pub fn is_numeric(&self) -> bool {
        self.as_f64().is_some()
    }

    /// Coerces the cell to a finite `f64`.
    ///
    /// Integers and finite floats convert directly; text is trimmed and parsed.
    /// Booleans, dates and timestamps are not numeric.
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            CellValue::Int(v) => *v as f64,
            CellValue::Float(v) => *v,
            CellValue::Text(s) => parse_f64(s)?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Natural text form of the cell, or `None` when missing.
    ///
    /// # Examples
    ///
    /// ```
    /// use chartform_common::CellValue;
    ///
    /// assert_eq!(CellValue::Int(10).to_text().as_deref(), Some("10"));
    /// assert_eq!(CellValue::Float(2.50).to_text().as_deref(), Some("2.5"));
    /// assert_eq!(CellValue::Text(String::new()).to_text(), None);
    /// ```
    pub fn to_text(&self) -> Option<String> {
        if self.is_missing() {
            return None;
        }
        let text = match self {
            CellValue::Missing => return None,
            CellValue::Int(v) => v.to_string(),
            CellValue::Float(v) => format_numeric(*v),
            CellValue::Date(d) => format_date(d),
            CellValue::Timestamp(ts) => format_timestamp(ts),
            CellValue::Text(s) | CellValue::Other(s) => s.clone(),
            CellValue::Bool(b) => b.to_string(),
        };
        Some(text)
    }
}

/// Formats a date as ISO 8601 (`YYYY-MM-DD`).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a timestamp as ISO 8601 (`YYYY-MM-DDTHH:MM:SS[.fraction]`).
///
/// The fractional part is only written when non-zero.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(i64::from(value))
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        CellValue::Date(value)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(value: NaiveDateTime) -> Self {
        CellValue::Timestamp(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Missing, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_representations() {
        assert!(CellValue::Missing.is_missing());
        assert!(CellValue::Float(f64::NAN).is_missing());
        assert!(CellValue::Float(f64::INFINITY).is_missing());
        assert!(CellValue::Text(String::new()).is_missing());
        assert!(CellValue::from(None::<i64>).is_missing());
        assert!(!CellValue::Text(" ".to_string()).is_missing());
        assert!(!CellValue::Int(0).is_missing());
        assert!(!CellValue::Bool(false).is_missing());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(CellValue::Int(42).as_f64(), Some(42.0));
        assert_eq!(CellValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::from(" 2.5 ").as_f64(), Some(2.5));
        assert_eq!(CellValue::from("abc").as_f64(), None);
        assert_eq!(CellValue::from("nan").as_f64(), None);
        assert_eq!(CellValue::Float(f64::NAN).as_f64(), None);
        assert_eq!(CellValue::Bool(true).as_f64(), None);
        assert_eq!(CellValue::Missing.as_f64(), None);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(CellValue::Int(-3).to_text().as_deref(), Some("-3"));
        assert_eq!(CellValue::Float(40.0).to_text().as_deref(), Some("40"));
        assert_eq!(CellValue::Bool(true).to_text().as_deref(), Some("true"));
        assert_eq!(CellValue::from("Mon").to_text().as_deref(), Some("Mon"));
        assert_eq!(CellValue::Float(f64::NAN).to_text(), None);
        assert_eq!(CellValue::Missing.to_text(), None);
    }

    #[test]
    fn test_temporal_formatting() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        assert_eq!(format_date(&date), "2024-01-31");

        let ts = date.and_hms_opt(13, 5, 9).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-31T13:05:09");

        let ts = date.and_hms_milli_opt(13, 5, 9, 250).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-31T13:05:09.250");
    }
}
