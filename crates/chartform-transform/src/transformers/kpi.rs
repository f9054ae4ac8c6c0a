//! KPI cards: one card per column of a single-row dataset.

use crate::dataset::TabularData;
use crate::error::{Result, TransformationError, ValidationError};
use crate::label::format_label;
use crate::output::{ChartKind, KpiCard, KpiCards};
use crate::sanitize::sanitize;

use super::{Transformer, log_start};

/// Builds [`KpiCards`] from a dataset holding exactly one row.
#[derive(Debug, Clone, Copy, Default)]
pub struct KpiCardsTransformer;

impl Transformer for KpiCardsTransformer {
    type Params = ();
    type Output = KpiCards;

    const KIND: ChartKind = ChartKind::KpiCards;

    fn transform<D>(&self, data: &D, _params: &()) -> Result<KpiCards>
    where
        D: TabularData + ?Sized,
    {
        let shape = log_start(Self::KIND, data);
        match shape.rows {
            0 => {
                return Err(TransformationError::new(
                    Self::KIND,
                    shape,
                    "KPI cards need one row of metrics but the dataset is empty",
                )
                .into());
            }
            1 => {}
            actual => {
                return Err(ValidationError::RowCount {
                    expected: 1,
                    actual,
                }
                .into());
            }
        }

        let data = data
            .column_names()
            .into_iter()
            .map(|key| {
                let value = data.cell(&key, 0).map(|cell| sanitize(&cell)).unwrap_or_default();
                KpiCard {
                    label: format_label(&key),
                    key,
                    value,
                }
            })
            .collect();
        Ok(KpiCards { data })
    }
}
