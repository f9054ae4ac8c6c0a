//! Column and parameter validation run before any row access.

use crate::dataset::TabularData;
use crate::error::ValidationError;

/// Checks that every required column exists.
///
/// # Errors
///
/// Returns [`ValidationError::MissingColumns`] listing each absent name once,
/// in request order, together with the dataset's available columns.
pub fn validate_columns<D, S>(data: &D, required: &[S]) -> Result<(), ValidationError>
where
    D: TabularData + ?Sized,
    S: AsRef<str>,
{
    let available = data.column_names();
    let mut missing: Vec<String> = Vec::new();
    for name in required {
        let name = name.as_ref();
        if !available.iter().any(|c| c == name) && !missing.iter().any(|m| m == name) {
            missing.push(name.to_string());
        }
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingColumns { missing, available })
    }
}

/// Checks that a positive-integer parameter is at least 1.
pub(crate) fn require_positive(name: &'static str, value: usize) -> Result<(), ValidationError> {
    if value == 0 {
        return Err(ValidationError::InvalidParameter {
            name,
            value: value.to_string(),
            expected: "positive integer",
        });
    }
    Ok(())
}

/// Checks that an optional list of display names matches the requested columns.
pub(crate) fn validate_names(
    name: &'static str,
    names: Option<&[String]>,
    columns: &[String],
) -> Result<(), ValidationError> {
    match names {
        Some(names) if names.len() != columns.len() => Err(ValidationError::LengthMismatch {
            name,
            expected: columns.len(),
            actual: names.len(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Table;

    fn table() -> Table {
        Table::new(["vendor", "revenue"])
    }

    #[test]
    fn test_all_present() {
        assert!(validate_columns(&table(), &["vendor", "revenue"]).is_ok());
        assert!(validate_columns(&table(), &[] as &[&str]).is_ok());
    }

    #[test]
    fn test_missing_reported_once_in_order() {
        let err = validate_columns(&table(), &["orders", "vendor", "region", "orders"]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingColumns {
                missing: vec!["orders".to_string(), "region".to_string()],
                available: vec!["vendor".to_string(), "revenue".to_string()],
            }
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("page", 1).is_ok());
        assert!(matches!(
            require_positive("page", 0),
            Err(ValidationError::InvalidParameter { name: "page", .. })
        ));
    }

    #[test]
    fn test_validate_names() {
        let columns = vec!["a".to_string(), "b".to_string()];
        assert!(validate_names("series_names", None, &columns).is_ok());
        let two = vec!["A".to_string(), "B".to_string()];
        assert!(validate_names("series_names", Some(two.as_slice()), &columns).is_ok());
        let one = vec!["A".to_string()];
        assert_eq!(
            validate_names("series_names", Some(one.as_slice()), &columns),
            Err(ValidationError::LengthMismatch {
                name: "series_names",
                expected: 2,
                actual: 1
            })
        );
    }
}
