//! Configuration for a fit-and-project call.
//!
//! Purpose
//! -------
//! Bundle the caller-chosen knobs of [`TrendProjector`](crate::projection::models::TrendProjector)
//! into a validated value type with documented defaults.
//!
//! Key behaviors
//! -------------
//! - [`ProjectionOptions::new`] validates the horizon; the degree is a
//!   `usize` and therefore non-negative by construction.
//! - [`Default`] reproduces the reference dashboard's settings: six projected
//!   periods, a quadratic trend, whole-unit output.
//!
//! Conventions
//! -----------
//! - `verbose` only has an effect when the crate is built with the
//!   `obs_slog` feature; otherwise the projector never writes anything.
use crate::projection::{core::validation::validate_horizon, errors::ProjectionResult};

/// Number of future periods generated when the caller does not choose one.
pub const DEFAULT_HORIZON: usize = 6;
/// Polynomial degree used when the caller does not choose one.
pub const DEFAULT_DEGREE: usize = 2;

/// Options for fitting and projecting a trend.
///
/// Fields:
/// - `horizon: usize` — number of future periods, `≥ 1`.
/// - `degree: usize` — polynomial degree of the least-squares fit.
/// - `round_output: bool` — round projected values to the nearest integer
///   (ties away from zero). Historical rows are never rounded.
/// - `verbose: bool` — emit a fit summary through slog (feature `obs_slog`).
///
/// Default:
/// - `horizon = 6`, `degree = 2`, `round_output = true`, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    pub horizon: usize,
    pub degree: usize,
    pub round_output: bool,
    pub verbose: bool,
}

impl ProjectionOptions {
    /// Create validated options.
    ///
    /// # Errors
    /// - [`ProjectionError::InvalidArgument`](crate::projection::errors::ProjectionError::InvalidArgument)
    ///   if `horizon == 0`.
    pub fn new(
        horizon: usize, degree: usize, round_output: bool, verbose: bool,
    ) -> ProjectionResult<Self> {
        validate_horizon(horizon)?;
        Ok(Self { horizon, degree, round_output, verbose })
    }

    /// Defaults with a different horizon.
    pub fn with_horizon(horizon: usize) -> ProjectionResult<Self> {
        Self::new(horizon, DEFAULT_DEGREE, true, false)
    }

    /// Number of polynomial coefficients, `degree + 1`.
    pub fn n_coefficients(&self) -> usize {
        self.degree + 1
    }
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self { horizon: DEFAULT_HORIZON, degree: DEFAULT_DEGREE, round_output: true, verbose: false }
    }
}
