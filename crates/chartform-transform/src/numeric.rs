//! Numeric column detection and correlation arithmetic.

use chartform_common::CellValue;

use crate::config::MAX_CORRELATION_PRECISION;
use crate::dataset::TabularData;

/// Names of the columns whose present cells all coerce to numbers.
///
/// A column qualifies when it has at least one present cell and every
/// present cell is an integer, a finite float or numeric text. Entirely
/// missing columns are excluded. Order follows the dataset.
pub fn numeric_columns<D>(data: &D) -> Vec<String>
where
    D: TabularData + ?Sized,
{
    data.column_names()
        .into_iter()
        .filter(|name| {
            let numeric = data
                .column_values(name)
                .is_some_and(|cells| is_numeric_column(&cells));
            tracing::trace!(column = %name, numeric, "numeric column detection");
            numeric
        })
        .collect()
}

/// Returns true if `cells` has a present value and every present value is numeric.
pub fn is_numeric_column(cells: &[CellValue]) -> bool {
    let mut present = 0usize;
    for cell in cells.iter().filter(|cell| !cell.is_missing()) {
        if !cell.is_numeric() {
            return false;
        }
        present += 1;
    }
    present > 0
}

/// Coerces each cell to a finite number; anything else becomes `None`.
pub fn coerce_numeric(cells: &[CellValue]) -> Vec<Option<f64>> {
    cells.iter().map(CellValue::as_f64).collect()
}

/// Pearson correlation over pairwise-complete observations.
///
/// Only rows where both sides are present take part. Returns `None` when
/// fewer than two such rows exist or either side is constant over them.
/// The result is clamped to `[-1, 1]`.
pub fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();
    let (first_x, first_y) = *pairs.first()?;
    if pairs.len() < 2
        || pairs.iter().all(|&(a, _)| a == first_x)
        || pairs.iter().all(|&(_, b)| b == first_y)
    {
        return None;
    }

    let mean_x = running_mean(pairs.iter().map(|&(a, _)| a));
    let mean_y = running_mean(pairs.iter().map(|&(_, b)| b));
    let dx: Vec<f64> = pairs.iter().map(|&(a, _)| a - mean_x).collect();
    let dy: Vec<f64> = pairs.iter().map(|&(_, b)| b - mean_y).collect();

    // Deviations are scaled into [-1, 1] before squaring.
    let scale_x = dx.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    let scale_y = dy.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    if scale_x == 0.0 || scale_y == 0.0 || !scale_x.is_finite() || !scale_y.is_finite() {
        return None;
    }

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in dx.iter().zip(&dy) {
        let a = a / scale_x;
        let b = b / scale_y;
        cov += a * b;
        var_x += a * a;
        var_y += b * b;
    }

    let denom = var_x.sqrt() * var_y.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    Some((cov / denom).clamp(-1.0, 1.0))
}

/// Incremental mean. Stays finite for any finite inputs.
fn running_mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut mean = 0.0;
    for (idx, value) in values.enumerate() {
        mean += (value - mean) / (idx + 1) as f64;
    }
    mean
}

/// Rounds to `precision` decimal places, folding `-0.0` into `0.0`.
///
/// Precision is capped at [`MAX_CORRELATION_PRECISION`].
pub fn round_to(value: f64, precision: u32) -> f64 {
    let exponent = i32::try_from(precision.min(MAX_CORRELATION_PRECISION)).unwrap_or(0);
    let factor = 10f64.powi(exponent);
    let rounded = (value * factor).round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}
