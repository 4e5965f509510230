//! Observation containers for trend projection.
//!
//! Purpose
//! -------
//! Provide the validated input type, [`Series`], consumed by the fit. All
//! structural checks on historical data (equal lengths, finite values,
//! strictly increasing periods) happen once here so the numerics can assume
//! clean input.
//!
//! Invariants & assumptions
//! ------------------------
//! - `periods.len() == values.len()`.
//! - Every value is finite.
//! - `periods` is strictly increasing; spacing may be uneven.
//! - An empty series is representable; fitting it fails with
//!   `InsufficientData` rather than at construction.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the happy path, each rejection branch, and period
//!   lookups.
use crate::projection::{
    core::validation::{validate_lengths, validate_periods, validate_values},
    errors::{ProjectionError, ProjectionResult},
};
use ndarray::{Array1, ArrayView1};

/// One historical `(period, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Calendar period (e.g. a year).
    pub period: i64,
    /// Observed value for the period.
    pub value: f64,
}

impl Observation {
    pub fn new(period: i64, value: f64) -> Self {
        Self { period, value }
    }
}

impl From<(i64, f64)> for Observation {
    fn from((period, value): (i64, f64)) -> Self {
        Self { period, value }
    }
}

/// `Series` — validated, ordered historical observations.
///
/// Fields
/// ------
/// - `periods`: `Vec<i64>`
///   Strictly increasing periods.
/// - `values`: `Array1<f64>`
///   Finite values aligned with `periods`.
///
/// Invariants
/// ----------
/// - See module docs; enforced by every constructor.
///
/// Performance
/// -----------
/// - Validation is a single O(n) pass. Lookups by period are O(log n).
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    periods: Vec<i64>,
    values: Array1<f64>,
}

impl Series {
    /// Build a series from observations already sorted by period.
    ///
    /// Errors
    /// ------
    /// - `ProjectionError::UnorderedInput` if a period does not strictly
    ///   exceed its predecessor.
    /// - `ProjectionError::NonFiniteValue` if any value is NaN or ±∞.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use trend_projector::projection::core::data::{Observation, Series};
    /// let series = Series::from_observations(&[
    ///     Observation::new(2014, 20_000.0),
    ///     Observation::new(2016, 80_000.0),
    /// ]).unwrap();
    /// assert_eq!(series.len(), 2);
    /// assert_eq!(series.last_period(), Some(2016));
    /// ```
    pub fn from_observations(observations: &[Observation]) -> ProjectionResult<Self> {
        let periods: Vec<i64> = observations.iter().map(|o| o.period).collect();
        let values = Array1::from_iter(observations.iter().map(|o| o.value));
        Self::from_parts(periods, values)
    }

    /// Build a series from parallel period / value arrays.
    ///
    /// Errors
    /// ------
    /// - `ProjectionError::LengthMismatch` if the inputs differ in length.
    /// - `ProjectionError::UnorderedInput` / `ProjectionError::NonFiniteValue`
    ///   as for [`Series::from_observations`].
    pub fn from_parts(periods: Vec<i64>, values: Array1<f64>) -> ProjectionResult<Self> {
        validate_lengths(periods.len(), values.len())?;
        validate_periods(&periods)?;
        validate_values(values.view())?;
        Ok(Self { periods, values })
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn periods(&self) -> &[i64] {
        &self.periods
    }

    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Periods as `f64`, the abscissae handed to the solver.
    pub fn abscissae(&self) -> Array1<f64> {
        Array1::from_iter(self.periods.iter().map(|&p| p as f64))
    }

    /// Latest period, or `None` for an empty series.
    pub fn last_period(&self) -> Option<i64> {
        self.periods.last().copied()
    }

    /// Iterate the series as [`Observation`]s in period order.
    pub fn observations(&self) -> impl Iterator<Item = Observation> + '_ {
        self.periods.iter().zip(self.values.iter()).map(|(&period, &value)| Observation { period, value })
    }

    /// Observed value at `period`.
    ///
    /// Errors
    /// ------
    /// - `ProjectionError::PeriodNotFound` if `period` is not in the series.
    pub fn value_at(&self, period: i64) -> ProjectionResult<f64> {
        self.periods
            .binary_search(&period)
            .map(|idx| self.values[idx])
            .map_err(|_| ProjectionError::PeriodNotFound { period })
    }
}
