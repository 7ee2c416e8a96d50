use std::cmp::Ordering;

use thiserror::Error;

use crate::domain::validation::ViolationKind;
use crate::services::rounding::round2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PercentileError {
    #[error("p no puede ser NaN")]
    NanPercentile,
    #[error("p debe estar entre 0 y 100")]
    PercentileOutOfRange,
    #[error("values no puede estar vacío")]
    EmptyValues,
    #[error("values no puede contener NaN")]
    NanValue,
}

impl PercentileError {
    pub fn kind(&self) -> ViolationKind {
        match self {
            PercentileError::NanPercentile | PercentileError::NanValue => ViolationKind::Type,
            PercentileError::PercentileOutOfRange | PercentileError::EmptyValues => {
                ViolationKind::Range
            }
        }
    }
}

/// Nearest-rank percentile of `values`, rounded to two decimals.
///
/// - `p == 0` => minimum element.
/// - `p == 100` => maximum element.
/// - Otherwise the element at rank `ceil(p/100 * n)`, 1-indexed, of the
///   ascending order. The ceiling of a value in `(0, n]` keeps the rank
///   inside `[1, n]`.
///
/// Selection runs on a sorted copy; the caller's slice is never reordered.
pub fn percentile(p: f64, values: &[f64]) -> Result<f64, PercentileError> {
    if p.is_nan() {
        return Err(PercentileError::NanPercentile);
    }
    if p < 0.0 || p > 100.0 {
        return Err(PercentileError::PercentileOutOfRange);
    }
    if values.is_empty() {
        return Err(PercentileError::EmptyValues);
    }
    if values.iter().any(|value| value.is_nan()) {
        return Err(PercentileError::NanValue);
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let n = sorted.len();

    let selected = if p == 0.0 {
        sorted[0]
    } else if p == 100.0 {
        sorted[n - 1]
    } else {
        let rank = ((p / 100.0) * n as f64).ceil() as usize;
        sorted[rank - 1]
    };

    Ok(round2(selected))
}
