//! Python-boundary helpers: array extraction and option building.
//!
//! Everything here except [`checked_usize`] is compiled only with the
//! `python-bindings` feature.
use crate::projection::errors::{ProjectionError, ProjectionResult};

#[cfg(feature = "python-bindings")]
use crate::projection::core::options::ProjectionOptions;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Convert a signed count coming from a dynamically typed caller into
/// `usize`, rejecting negatives as [`ProjectionError::InvalidArgument`].
pub fn checked_usize(name: &'static str, value: i64) -> ProjectionResult<usize> {
    usize::try_from(value).map_err(|_| {
        ProjectionError::invalid_argument(name, format!("must be non-negative, got {value}"))
    })
}

/// Accept a 1-D numpy array, a pandas Series (via `to_numpy`), or any
/// sequence of floats.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        return Ok(arr_ro);
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            return Ok(series_ro);
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Accept integer periods from a numpy array, a pandas Series, or a sequence.
#[cfg(feature = "python-bindings")]
pub fn extract_periods(raw_periods: &Bound<'_, PyAny>) -> PyResult<Vec<i64>> {
    if let Ok(arr_ro) = raw_periods.extract::<PyReadonlyArray1<i64>>() {
        return Ok(arr_ro.as_array().to_vec());
    }

    if let Ok(obj) = raw_periods.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<i64>>() {
            return Ok(series_ro.as_array().to_vec());
        }
    }

    raw_periods.extract::<Vec<i64>>().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of int64 periods",
        )
    })
}

/// Build [`ProjectionOptions`] from Python keyword arguments.
///
/// Negative `horizon` / `degree` and `horizon == 0` raise `ValueError`.
#[cfg(feature = "python-bindings")]
pub fn build_options(horizon: i64, degree: i64, round_output: bool) -> PyResult<ProjectionOptions> {
    let horizon = checked_usize("horizon", horizon)?;
    let degree = checked_usize("degree", degree)?;
    Ok(ProjectionOptions::new(horizon, degree, round_output, false)?)
}
