//! Property tests for pagination and correlation invariants.

use chartform_common::CellValue;
use chartform_transform::{
    CorrelationHeatmapParams, CorrelationHeatmapTransformer, DataTableParams,
    DataTableTransformer, Pagination, Table, Transformer,
};
use proptest::prelude::*;

fn single_column(rows: usize) -> Table {
    Table::from_rows(
        ["n"],
        (0..rows as i64).map(|i| vec![CellValue::Int(i)]).collect(),
    )
    .unwrap()
}

fn optional_values(len: usize) -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.8, -1000.0..1000.0f64), len)
}

proptest! {
    #[test]
    fn pagination_window_is_consistent(
        total_rows in 0usize..500,
        page in 1usize..40,
        page_size in 1usize..60,
    ) {
        let p = Pagination::compute(page, page_size, total_rows);
        prop_assert!(p.total_pages >= 1);
        prop_assert!(p.start_index <= p.end_index);
        prop_assert!(p.end_index <= total_rows);
        prop_assert!(p.len() <= page_size);
        prop_assert_eq!(p.has_previous, page > 1);
        if page <= p.total_pages && total_rows > 0 {
            prop_assert_eq!(p.start_index, (page - 1) * page_size);
            prop_assert!(!p.is_empty());
        } else if page > p.total_pages {
            prop_assert!(p.is_empty());
        }
    }

    #[test]
    fn pages_partition_the_rows(total_rows in 0usize..120, page_size in 1usize..25) {
        let table = single_column(total_rows);
        let transformer = DataTableTransformer::default();
        let first = transformer
            .transform(&table, &DataTableParams::new(1, page_size))
            .unwrap();
        let mut seen = 0usize;
        for page in 1..=first.pagination.total_pages {
            let out = transformer
                .transform(&table, &DataTableParams::new(page, page_size))
                .unwrap();
            seen += out.rows.len();
        }
        prop_assert_eq!(seen, total_rows);
    }

    #[test]
    fn correlation_matrix_is_symmetric_and_bounded(
        columns in (3usize..12).prop_flat_map(|rows| prop::collection::vec(optional_values(rows), 2..5)),
    ) {
        let names: Vec<String> = (0..columns.len()).map(|i| format!("m{i}")).collect();
        let rows = columns[0].len();
        let mut table = Table::new(names.clone());
        for row in 0..rows {
            table
                .push_row(columns.iter().map(|col| CellValue::from(col[row])).collect())
                .unwrap();
        }
        // Columns without any value cannot be charted.
        prop_assume!(columns.iter().all(|col| col.iter().any(Option::is_some)));

        let chart = CorrelationHeatmapTransformer::default()
            .transform(&table, &CorrelationHeatmapParams::with_metrics(names))
            .unwrap();
        let n = chart.columns.len();
        for i in 0..n {
            prop_assert_eq!(chart.matrix[i][i], Some(1.0));
            for j in 0..n {
                prop_assert_eq!(chart.matrix[i][j], chart.matrix[j][i]);
                if let Some(r) = chart.matrix[i][j] {
                    prop_assert!((-1.0..=1.0).contains(&r));
                }
            }
        }
    }

    #[test]
    fn affine_copies_correlate_perfectly(
        base in prop::collection::vec(-100i64..100, 3..30),
        scale in 1i64..50,
        shift in -100i64..100,
    ) {
        prop_assume!(base.iter().any(|v| *v != base[0]));
        let table = Table::from_rows(
            ["base", "copy"],
            base.iter()
                .map(|v| vec![CellValue::Int(*v), CellValue::Int(v * scale + shift)])
                .collect(),
        )
        .unwrap();
        let chart = CorrelationHeatmapTransformer::default()
            .transform(&table, &CorrelationHeatmapParams::auto())
            .unwrap();
        let r = chart.matrix[0][1].unwrap();
        prop_assert!((r - 1.0).abs() < 1e-9);
    }
}
