//! projection::core::validation — shared input guards.
//!
//! Purpose
//! -------
//! Centralize the precondition checks of a fit-and-project call so that
//! [`Series`](crate::projection::core::data::Series),
//! [`ProjectionOptions`](crate::projection::core::options::ProjectionOptions),
//! and the fitting code report failures with identical semantics.
//!
//! Conventions
//! -----------
//! - Every guard is pure, allocation-free on success, and returns the first
//!   violation it finds.
//! - Errors are [`ProjectionError`] variants carrying the offending values.
use crate::projection::errors::{ProjectionError, ProjectionResult};
use ndarray::ArrayView1;

/// Parallel inputs must have the same length.
pub fn validate_lengths(periods: usize, values: usize) -> ProjectionResult<()> {
    if periods != values {
        return Err(ProjectionError::LengthMismatch { periods, values });
    }
    Ok(())
}

/// Periods must be strictly increasing.
///
/// Errors
/// ------
/// - `ProjectionError::UnorderedInput { index, previous, current }` for the
///   first `index` with `periods[index] <= periods[index - 1]`.
pub fn validate_periods(periods: &[i64]) -> ProjectionResult<()> {
    for (index, pair) in periods.windows(2).enumerate() {
        let (previous, current) = (pair[0], pair[1]);
        if current <= previous {
            return Err(ProjectionError::UnorderedInput { index: index + 1, previous, current });
        }
    }
    Ok(())
}

/// Values must be finite.
pub fn validate_values(values: ArrayView1<'_, f64>) -> ProjectionResult<()> {
    for (index, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            return Err(ProjectionError::NonFiniteValue { index, value });
        }
    }
    Ok(())
}

/// A degree-`d` fit needs at least `d + 1` observations.
pub fn validate_fit_size(observations: usize, degree: usize) -> ProjectionResult<()> {
    let required = degree.saturating_add(1);
    if observations < required {
        return Err(ProjectionError::InsufficientData { required, actual: observations });
    }
    Ok(())
}

/// The projection horizon must be at least one period.
pub fn validate_horizon(horizon: usize) -> ProjectionResult<()> {
    if horizon == 0 {
        return Err(ProjectionError::invalid_argument("horizon", "must be at least 1"));
    }
    Ok(())
}

/// Confidence levels live strictly inside `(0, 1)`.
pub fn validate_confidence(confidence: f64) -> ProjectionResult<()> {
    if !(confidence.is_finite() && confidence > 0.0 && confidence < 1.0) {
        return Err(ProjectionError::invalid_argument(
            "confidence",
            format!("must lie strictly between 0 and 1, got {confidence}"),
        ));
    }
    Ok(())
}
