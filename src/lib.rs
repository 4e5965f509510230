//! trend_projector — least-squares polynomial trend projection with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the trend projector to Python dashboards via the
//! `_trend_projector` extension module. Given a short ordered series of
//! `(period, value)` observations, the crate fits a low-degree polynomial by
//! ordinary least squares and extends it over a configurable horizon,
//! returning historical rows unchanged followed by projected rows.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`projection` and `numerics`) as the
//!   public crate surface.
//! - Define the `TrendProjection` `#[pyclass]` and the `#[pymodule]`
//!   initializer when the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner Rust modules; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - Python inputs are validated by the same constructors Rust callers use,
//!   so both surfaces report identical errors.
//!
//! Conventions
//! -----------
//! - Coefficients are highest power first; periods are integers.
//! - Errors from core Rust code are [`ProjectionError`](projection::ProjectionError)
//!   values internally and `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code depends on [`projection`] directly and can ignore the
//!   items guarded by `python-bindings`.
//! - Python code imports `_trend_projector.TrendProjection`, typically from a
//!   thin pure-Python wrapper that renders the rows.
//!
//! Testing notes
//! -------------
//! - Core behavior is covered by unit tests in the inner modules and by
//!   `tests/integration_trend_projection.rs`.
//! - The PyO3 surface is exercised from Python.

pub mod numerics;
pub mod projection;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::{
    projection::{
        core::{curve::FittedCurve, data::Series, growth::growth_rate, rows::ProjectionRow},
        models::{Projection, TrendProjector},
    },
    utils::{build_options, extract_f64_array, extract_periods},
};

/// TrendProjection — Python-facing result of a fit-and-project call.
///
/// Purpose
/// -------
/// Run [`TrendProjector::fit_and_project`] on Python inputs and keep the
/// resulting [`Projection`] for inspection from Python.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `TrendProjection(periods, values, /, horizon=6, degree=2, round_output=True)`:
/// - `periods`: sequence or 1-D array of integers, strictly increasing.
/// - `values`: 1-D array-like of `float64`, same length, finite.
/// - `horizon`: number of future periods, `≥ 1`.
/// - `degree`: polynomial degree, `≥ 0`.
/// - `round_output`: round projected values to whole units.
///
/// Fields
/// ------
/// - `inner`: [`Projection`]
///   Rows and fitted curve from the Rust core.
///
/// Notes
/// -----
/// - Any validation failure raises `ValueError` with the Rust message.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "trend_projector")]
pub struct TrendProjection {
    inner: Projection,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl TrendProjection {
    #[new]
    #[pyo3(
        signature = (periods, values, horizon = 6, degree = 2, round_output = true),
        text_signature = "(periods, values, /, horizon=6, degree=2, round_output=True)"
    )]
    pub fn new<'py>(
        py: Python<'py>, periods: &Bound<'py, PyAny>, values: &Bound<'py, PyAny>, horizon: i64,
        degree: i64, round_output: bool,
    ) -> PyResult<Self> {
        let options = build_options(horizon, degree, round_output)?;
        let periods = extract_periods(periods)?;
        let values = extract_f64_array(py, values)?;
        let values = values.as_array().to_owned();

        let series = Series::from_parts(periods, values)?;
        let inner = TrendProjector::new(options).fit_and_project(&series)?;
        Ok(TrendProjection { inner })
    }

    /// Rows as `(period, value, kind)` tuples, kind in {"Historical", "Projected"}.
    #[getter]
    pub fn rows(&self) -> Vec<(i64, f64, String)> {
        self.inner.rows().iter().map(row_tuple).collect()
    }

    /// Raw-period coefficients, highest power first.
    #[getter]
    pub fn coefficients(&self) -> Vec<f64> {
        self.curve().coefficients().to_vec()
    }

    #[getter]
    pub fn degree(&self) -> usize {
        self.curve().degree()
    }

    #[getter]
    pub fn r_squared(&self) -> f64 {
        self.curve().diagnostics().r_squared
    }

    #[getter]
    pub fn exact_interpolation(&self) -> bool {
        self.curve().is_exact_interpolation()
    }

    /// Curve value at `period` (unrounded).
    pub fn value_at(&self, period: i64) -> f64 {
        self.curve().value_at(period)
    }

    /// Relative growth between two periods, using row values where present.
    pub fn growth_rate(&self, from_period: i64, to_period: i64) -> PyResult<f64> {
        Ok(growth_rate(&self.inner, from_period, to_period)?)
    }

    /// `(lower, estimate, upper)` prediction interval at `period`.
    #[pyo3(signature = (period, confidence = 0.95))]
    pub fn prediction_interval(&self, period: i64, confidence: f64) -> PyResult<(f64, f64, f64)> {
        let pi = self.curve().prediction_interval(period, confidence)?;
        Ok((pi.lower, pi.estimate, pi.upper))
    }
}

#[cfg(feature = "python-bindings")]
impl TrendProjection {
    fn curve(&self) -> &FittedCurve {
        self.inner.curve()
    }
}

#[cfg(feature = "python-bindings")]
fn row_tuple(row: &ProjectionRow) -> (i64, f64, String) {
    (row.period, row.value, row.kind.to_string())
}

/// _trend_projector — PyO3 module initializer for the Python extension.
///
/// Registers [`TrendProjection`] on the `_trend_projector` module. Invoked
/// by Python on import; never called directly.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _trend_projector<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<TrendProjection>()?;
    Ok(())
}
