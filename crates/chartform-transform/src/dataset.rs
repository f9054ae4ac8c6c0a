//! Tabular dataset capability consumed by the transformers.
//!
//! Transformers only need to look up a column by name and walk rows in a
//! stable order. [`TabularData`] captures exactly that, with implementations
//! for Polars [`DataFrame`] and the in-memory [`Table`].

use std::fmt;

use chartform_common::{CellValue, any_to_cell};
use polars::prelude::{AnyValue, DataFrame};

use crate::error::ValidationError;

/// Row and column counts of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DataShape {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

/// Read access to an ordered set of named columns.
///
/// Column order is insertion order and row order is stable across calls.
pub trait TabularData {
    /// Column names in dataset order.
    fn column_names(&self) -> Vec<String>;

    /// Number of rows.
    fn height(&self) -> usize;

    /// Number of columns.
    fn width(&self) -> usize {
        self.column_names().len()
    }

    /// Row/column counts.
    fn shape(&self) -> DataShape {
        DataShape {
            rows: self.height(),
            columns: self.width(),
        }
    }

    /// Returns true if a column with this exact name exists.
    fn has_column(&self, name: &str) -> bool {
        self.column_names().iter().any(|c| c == name)
    }

    /// Cells `offset..offset + len` of a column, clipped to the dataset height.
    ///
    /// Returns `None` if the column does not exist.
    fn column_slice(&self, name: &str, offset: usize, len: usize) -> Option<Vec<CellValue>>;

    /// Every cell of a column in row order.
    fn column_values(&self, name: &str) -> Option<Vec<CellValue>> {
        self.column_slice(name, 0, self.height())
    }

    /// A single cell.
    fn cell(&self, name: &str, row: usize) -> Option<CellValue> {
        self.column_slice(name, row, 1)?.into_iter().next()
    }
}

impl TabularData for DataFrame {
    fn column_names(&self) -> Vec<String> {
        self.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn height(&self) -> usize {
        DataFrame::height(self)
    }

    fn width(&self) -> usize {
        DataFrame::width(self)
    }

    fn column_slice(&self, name: &str, offset: usize, len: usize) -> Option<Vec<CellValue>> {
        let column = self.column(name).ok()?;
        let end = offset.saturating_add(len).min(column.len());
        let cells = (offset.min(end)..end)
            .map(|idx| any_to_cell(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        Some(cells)
    }
}

/// A small row-oriented dataset held in memory.
///
/// # Examples
///
/// ```
/// use chartform_common::CellValue;
/// use chartform_transform::{Table, TabularData};
///
/// let table = Table::from_rows(
///     ["category", "value"],
///     vec![vec!["A".into(), 10.into()], vec!["B".into(), CellValue::Missing]],
/// )
/// .unwrap();
/// assert_eq!(table.height(), 2);
/// assert_eq!(table.cell("value", 1), Some(CellValue::Missing));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Create an empty table with the given columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Create a table from column names and rows.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LengthMismatch`] if a row's width differs
    /// from the number of columns.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<CellValue>>) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns);
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::LengthMismatch`] if the row's width differs
    /// from the number of columns.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), ValidationError> {
        if row.len() != self.columns.len() {
            return Err(ValidationError::LengthMismatch {
                name: "row",
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }
}

impl TabularData for Table {
    fn column_names(&self) -> Vec<String> {
        self.columns.clone()
    }

    fn height(&self) -> usize {
        self.rows.len()
    }

    fn width(&self) -> usize {
        self.columns.len()
    }

    fn column_slice(&self, name: &str, offset: usize, len: usize) -> Option<Vec<CellValue>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .skip(offset)
                .take(len)
                .map(|row| row[idx].clone())
                .collect(),
        )
    }
}
