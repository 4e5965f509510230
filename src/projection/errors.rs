//! projection::errors — error taxonomy for trend fitting and projection.
//!
//! Purpose
//! -------
//! Provide a single error enum, [`ProjectionError`], and result alias,
//! [`ProjectionResult`], shared by the data containers, the least-squares
//! solver, and the [`TrendProjector`](crate::projection::models::TrendProjector)
//! entry point.
//!
//! Key behaviors
//! -------------
//! - Encode every precondition failure of a fit-and-project call (too few
//!   observations, bad horizon/degree, unordered periods) as a distinct
//!   variant carrying the offending values.
//! - Attach human-readable `Display` messages so callers can surface the
//!   error without extra context.
//! - Map all variants into Python `ValueError`s when the `python-bindings`
//!   feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Errors are local to a single call; nothing is logged or retried here.
//! - A failed call never returns partial rows or a fallback curve.
//!
//! Testing notes
//! -------------
//! - Unit tests check that payloads are embedded in the `Display` output.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// ProjectionError — failure modes of fitting and projecting a trend.
///
/// Variants
/// --------
/// - `InsufficientData { required, actual }`
///   Fewer observations than `degree + 1`; the fit is underdetermined.
/// - `InvalidArgument { name, reason }`
///   A caller-supplied option is out of range (e.g. `horizon == 0`,
///   negative degree at the Python boundary, confidence outside `(0, 1)`).
/// - `UnorderedInput { index, previous, current }`
///   `periods[index]` is not strictly greater than `periods[index - 1]`.
/// - `DivisionByZero { period }`
///   Growth rate requested from a base period whose value is zero.
/// - `NonFiniteValue { index, value }`
///   An observation value is NaN or ±∞.
/// - `LengthMismatch { periods, values }`
///   Parallel period/value inputs have different lengths.
/// - `SingularDesign { rank, required }`
///   The Vandermonde design lost numerical rank.
/// - `PeriodNotFound { period }`
///   A value lookup asked for a period the source does not hold.
/// - `InsufficientDegreesOfFreedom { observations, parameters }`
///   A residual-variance quantity was requested from an exact fit.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    // ---- Preconditions ----
    InsufficientData { required: usize, actual: usize },
    InvalidArgument { name: &'static str, reason: String },
    UnorderedInput { index: usize, previous: i64, current: i64 },

    // ---- Input data ----
    NonFiniteValue { index: usize, value: f64 },
    LengthMismatch { periods: usize, values: usize },

    // ---- Numerics ----
    SingularDesign { rank: usize, required: usize },
    InsufficientDegreesOfFreedom { observations: usize, parameters: usize },

    // ---- Lookups / derived quantities ----
    DivisionByZero { period: i64 },
    PeriodNotFound { period: i64 },
}

impl ProjectionError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidArgument { name, reason: reason.into() }
    }
}

impl std::error::Error for ProjectionError {}

impl std::fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Preconditions ----
            ProjectionError::InsufficientData { required, actual } => write!(
                f,
                "Insufficient data: need at least {required} observations for this degree, got {actual}"
            ),
            ProjectionError::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument `{name}`: {reason}")
            }
            ProjectionError::UnorderedInput { index, previous, current } => write!(
                f,
                "Periods must be strictly increasing: period {current} at index {index} follows {previous}"
            ),

            // ---- Input data ----
            ProjectionError::NonFiniteValue { index, value } => {
                write!(f, "Value at index {index} must be finite, got {value}")
            }
            ProjectionError::LengthMismatch { periods, values } => write!(
                f,
                "Length mismatch: {periods} periods but {values} values"
            ),

            // ---- Numerics ----
            ProjectionError::SingularDesign { rank, required } => write!(
                f,
                "Design matrix is numerically singular: rank {rank}, need {required}"
            ),
            ProjectionError::InsufficientDegreesOfFreedom { observations, parameters } => write!(
                f,
                "No residual degrees of freedom: {observations} observations for {parameters} coefficients"
            ),

            // ---- Lookups / derived quantities ----
            ProjectionError::DivisionByZero { period } => {
                write!(f, "Growth rate undefined: value at base period {period} is zero")
            }
            ProjectionError::PeriodNotFound { period } => {
                write!(f, "No value available for period {period}")
            }
        }
    }
}

/// Convert a [`ProjectionError`] into a Python `ValueError` with the error message.
#[cfg(feature = "python-bindings")]
impl From<ProjectionError> for PyErr {
    fn from(err: ProjectionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
