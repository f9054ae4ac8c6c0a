//! Paginated data tables.

use indexmap::IndexMap;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::dataset::TabularData;
use crate::error::Result;
use crate::label::format_label;
use crate::output::{ChartKind, DataTable, Pagination, TableColumn};
use crate::sanitize::sanitize;
use crate::validate::require_positive;

use super::{Transformer, log_start};

/// Page selection for a data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTableParams {
    /// Page number, starting at 1.
    pub page: usize,
    /// Rows per page. Falls back to the transformer's default.
    pub page_size: Option<usize>,
}

impl Default for DataTableParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: None,
        }
    }
}

impl DataTableParams {
    /// Request `page` with an explicit page size.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size: Some(page_size),
        }
    }

    /// Request a page with the default page size.
    pub fn page(page: usize) -> Self {
        Self {
            page,
            page_size: None,
        }
    }
}

impl Pagination {
    /// Derive page bounds for `total_rows` rows.
    ///
    /// Pages past the end produce an empty window positioned at `total_rows`.
    /// Callers guarantee `page >= 1` and `page_size >= 1`.
    pub fn compute(page: usize, page_size: usize, total_rows: usize) -> Self {
        let total_pages = total_rows.div_ceil(page_size).max(1);
        let start_index = page
            .saturating_sub(1)
            .saturating_mul(page_size)
            .min(total_rows);
        let end_index = start_index.saturating_add(page_size).min(total_rows);
        Self {
            page,
            page_size,
            total_rows,
            total_pages,
            start_index,
            end_index,
            has_previous: page > 1,
            has_next: page < total_pages,
        }
    }

    /// Number of rows on the page.
    pub fn len(&self) -> usize {
        self.end_index - self.start_index
    }

    /// Returns true if the page holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds a [`DataTable`] holding one page of rows.
///
/// Every column is included in dataset order and every emitted cell is
/// sanitized.
#[derive(Debug, Clone, Copy)]
pub struct DataTableTransformer {
    default_page_size: usize,
}

impl Default for DataTableTransformer {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl DataTableTransformer {
    /// Create a transformer using `default_page_size` when a call names none.
    pub fn new(default_page_size: usize) -> Self {
        Self { default_page_size }
    }

    /// Page size used when a request names none.
    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }
}

impl Transformer for DataTableTransformer {
    type Params = DataTableParams;
    type Output = DataTable;

    const KIND: ChartKind = ChartKind::DataTable;

    fn transform<D>(&self, data: &D, params: &DataTableParams) -> Result<DataTable>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        let page_size = params.page_size.unwrap_or(self.default_page_size);
        require_positive("page", params.page)?;
        require_positive("page_size", page_size)?;

        let pagination = Pagination::compute(params.page, page_size, shape.rows);
        if pagination.is_empty() && shape.rows > 0 {
            tracing::debug!(
                page = pagination.page,
                total_pages = pagination.total_pages,
                "Requested page is past the last page"
            );
        }

        let names = data.column_names();
        let columns = names
            .iter()
            .map(|name| TableColumn {
                key: name.clone(),
                label: format_label(name),
            })
            .collect();

        let mut rows = vec![IndexMap::with_capacity(names.len()); pagination.len()];
        for name in &names {
            let cells = data
                .column_slice(name, pagination.start_index, pagination.len())
                .unwrap_or_default();
            for (row, cell) in rows.iter_mut().zip(&cells) {
                row.insert(name.clone(), sanitize(cell));
            }
        }

        Ok(DataTable {
            columns,
            rows,
            pagination,
        })
    }
}
