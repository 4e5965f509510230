//! Relative growth between two periods.
//!
//! [`ValueSource`] abstracts "something that can report a value for a
//! period" so that [`growth_rate`] works uniformly on a fitted curve, on the
//! raw series, or on a full projection (which prefers passed-through
//! historical values over curve values).
use crate::projection::{
    core::{curve::FittedCurve, data::Series},
    errors::{ProjectionError, ProjectionResult},
};

/// A lookup from period to value.
pub trait ValueSource {
    /// Value reported for `period`.
    ///
    /// # Errors
    /// - `ProjectionError::PeriodNotFound` when the source cannot answer for
    ///   `period`.
    fn value_for_period(&self, period: i64) -> ProjectionResult<f64>;
}

impl ValueSource for FittedCurve {
    /// Curves are defined everywhere.
    fn value_for_period(&self, period: i64) -> ProjectionResult<f64> {
        Ok(self.value_at(period))
    }
}

impl ValueSource for Series {
    /// Only observed periods resolve.
    fn value_for_period(&self, period: i64) -> ProjectionResult<f64> {
        self.value_at(period)
    }
}

/// growth_rate — `(v(to) − v(from)) / v(from)`.
///
/// Errors
/// ------
/// - `ProjectionError::DivisionByZero { period: from_period }` when
///   `v(from) == 0`. No fallback value is substituted.
/// - Any lookup error from `source`.
///
/// Examples
/// --------
/// ```rust
/// # use trend_projector::projection::core::{data::{Observation, Series}, growth::growth_rate};
/// let series = Series::from_observations(&[
///     Observation::new(2022, 320_000.0),
///     Observation::new(2024, 400_000.0),
/// ]).unwrap();
/// assert_eq!(growth_rate(&series, 2022, 2024).unwrap(), 0.25);
/// ```
pub fn growth_rate<S: ValueSource + ?Sized>(
    source: &S, from_period: i64, to_period: i64,
) -> ProjectionResult<f64> {
    let base = source.value_for_period(from_period)?;
    if base == 0.0 {
        return Err(ProjectionError::DivisionByZero { period: from_period });
    }
    let target = source.value_for_period(to_period)?;
    Ok((target - base) / base)
}
