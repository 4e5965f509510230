//! TrendProjector — fit a polynomial trend and extend it past the last period.
//!
//! Purpose
//! -------
//! Turn a short historical series into a display-ready table: the original
//! observations, untouched, followed by `horizon` consecutive future periods
//! evaluated on a least-squares polynomial.
//!
//! Key behaviors
//! -------------
//! - Validate options and sample size, then fit a [`FittedCurve`].
//! - Generate future periods `last + 1 ..= last + horizon` with unit step,
//!   independent of the historical spacing.
//! - Optionally round projected values to whole units; historical rows are
//!   never recomputed or rounded.
//! - Return a [`Projection`] holding both the rows and the curve so callers
//!   can derive growth rates or intervals without refitting.
//!
//! Invariants & assumptions
//! ------------------------
//! - Output periods are strictly increasing.
//! - `rows[..n]` equal the input observations bit for bit.
//! - The call is all-or-nothing: on error no rows are produced.
//!
//! Conventions
//! -----------
//! - Pure and deterministic; the only side effect is the opt-in fit summary
//!   under the `obs_slog` feature.
//!
//! Testing notes
//! -------------
//! - Unit tests cover row layout, rounding, uneven spacing, precondition
//!   errors, and `Projection` lookups. The reference end-to-end scenario is
//!   exercised in `tests/integration_trend_projection.rs`.
use crate::projection::{
    core::{
        curve::FittedCurve,
        data::{Observation, Series},
        growth::{ValueSource, growth_rate},
        options::ProjectionOptions,
        rows::{ProjectionRow, RowKind},
        validation::validate_horizon,
    },
    errors::{ProjectionError, ProjectionResult},
};

#[cfg(feature = "obs_slog")]
use crate::projection::models::observer::log_fit_summary;

/// `TrendProjector` — stateless fit-and-project entry point.
///
/// Fields
/// ------
/// - `options`: [`ProjectionOptions`]
///   Horizon, degree, rounding, verbosity.
///
/// Notes
/// -----
/// - Holds only configuration, so one projector can be shared across
///   threads and reused for any number of series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrendProjector {
    options: ProjectionOptions,
}

impl TrendProjector {
    pub fn new(options: ProjectionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProjectionOptions {
        &self.options
    }

    /// fit_and_project — fit the trend and append projected rows.
    ///
    /// Parameters
    /// ----------
    /// - `series`: `&Series`
    ///   Validated historical observations; not modified.
    ///
    /// Returns
    /// -------
    /// `ProjectionResult<Projection>`
    ///   `series.len() + horizon` rows and the fitted curve.
    ///
    /// Errors
    /// ------
    /// - `ProjectionError::InvalidArgument`
    ///   If the horizon is zero (options built by hand) or pushes a period
    ///   past `i64::MAX`.
    /// - `ProjectionError::InsufficientData`
    ///   If `series.len() < degree + 1`.
    /// - `ProjectionError::SingularDesign`
    ///   If the design is numerically rank-deficient.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use trend_projector::projection::{TrendProjector, ProjectionOptions, Observation, Series};
    /// let series = Series::from_observations(&[
    ///     Observation::new(2018, 10.0),
    ///     Observation::new(2020, 14.0),
    ///     Observation::new(2022, 20.0),
    /// ]).unwrap();
    /// let projection = TrendProjector::new(ProjectionOptions::default())
    ///     .fit_and_project(&series)
    ///     .unwrap();
    /// assert_eq!(projection.len(), 9);
    /// assert_eq!(projection.rows()[3].period, 2023);
    /// ```
    pub fn fit_and_project(&self, series: &Series) -> ProjectionResult<Projection> {
        let ProjectionOptions { horizon, degree, round_output, .. } = self.options;
        validate_horizon(horizon)?;

        let curve = FittedCurve::fit(series, degree)?;
        let last_period = series.last_period().ok_or(ProjectionError::InsufficientData {
            required: degree + 1,
            actual: 0,
        })?;
        let future = future_periods(last_period, horizon)?;

        let mut rows = Vec::with_capacity(series.len() + horizon);
        rows.extend(series.observations().map(|o| ProjectionRow::historical(o.period, o.value)));
        rows.extend(future.map(|period| {
            let raw = curve.value_at(period);
            ProjectionRow::projected(period, if round_output { raw.round() } else { raw })
        }));

        #[cfg(feature = "obs_slog")]
        if self.options.verbose {
            log_fit_summary(&curve, horizon);
        }

        Ok(Projection { rows, curve })
    }
}

/// Convenience wrapper over [`TrendProjector::fit_and_project`] for raw
/// observation slices.
///
/// Errors
/// ------
/// - `ProjectionError::InvalidArgument` for `horizon == 0`.
/// - `ProjectionError::UnorderedInput` / `ProjectionError::NonFiniteValue`
///   from [`Series::from_observations`].
/// - Everything [`TrendProjector::fit_and_project`] may return.
pub fn fit_and_project(
    observations: &[Observation], horizon: usize, degree: usize, round_output: bool,
) -> ProjectionResult<(Vec<ProjectionRow>, FittedCurve)> {
    let options = ProjectionOptions::new(horizon, degree, round_output, false)?;
    let series = Series::from_observations(observations)?;
    Ok(TrendProjector::new(options).fit_and_project(&series)?.into_parts())
}

/// `Projection` — historical rows, projected rows, and the curve behind them.
///
/// Invariants
/// ----------
/// - `rows` is sorted by strictly increasing period.
/// - All `Historical` rows precede all `Projected` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    rows: Vec<ProjectionRow>,
    curve: FittedCurve,
}

impl Projection {
    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    pub fn curve(&self) -> &FittedCurve {
        &self.curve
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn historical(&self) -> impl Iterator<Item = &ProjectionRow> {
        self.rows.iter().filter(|r| r.kind == RowKind::Historical)
    }

    pub fn projected(&self) -> impl Iterator<Item = &ProjectionRow> {
        self.rows.iter().filter(|r| r.kind == RowKind::Projected)
    }

    /// Row for `period`, if the projection covers it.
    pub fn row(&self, period: i64) -> Option<&ProjectionRow> {
        self.rows.binary_search_by_key(&period, |r| r.period).ok().map(|idx| &self.rows[idx])
    }

    /// Growth between two periods, preferring row values over the curve.
    ///
    /// See [`growth_rate`].
    pub fn growth_rate(&self, from_period: i64, to_period: i64) -> ProjectionResult<f64> {
        growth_rate(self, from_period, to_period)
    }

    pub fn into_parts(self) -> (Vec<ProjectionRow>, FittedCurve) {
        (self.rows, self.curve)
    }
}

impl ValueSource for Projection {
    /// Row value when the period is covered (historical values pass through
    /// unchanged, projected values as emitted); curve value otherwise.
    fn value_for_period(&self, period: i64) -> ProjectionResult<f64> {
        match self.row(period) {
            Some(row) => Ok(row.value),
            None => Ok(self.curve.value_at(period)),
        }
    }
}

// ---- Helper methods ----

fn future_periods(
    last_period: i64, horizon: usize,
) -> ProjectionResult<impl Iterator<Item = i64>> {
    let overflow =
        || ProjectionError::invalid_argument("horizon", "projected periods overflow i64");
    let steps = i64::try_from(horizon).map_err(|_| overflow())?;
    let end = last_period.checked_add(steps).ok_or_else(overflow)?;
    Ok(last_period + 1..=end)
}
