//! projection — polynomial trend fitting and forward projection.
//!
//! Purpose
//! -------
//! Provide the crate's main surface: validated historical series in, a table
//! of historical plus projected rows and the fitted curve out. This is the
//! entry point presentation layers (including the Python bindings) call.
//!
//! Key behaviors
//! -------------
//! - [`core`] holds value types ([`Series`], [`ProjectionOptions`],
//!   [`ProjectionRow`], [`FittedCurve`]), validation guards, growth-rate
//!   helpers, and prediction intervals.
//! - [`models`] exposes [`TrendProjector`] and its [`Projection`] result.
//! - [`errors`] defines [`ProjectionError`] / [`ProjectionResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Input periods are strictly increasing integers; values are finite.
//! - Historical rows in every output are the inputs, unchanged.
//! - Projected periods step by one from the last historical period.
//!
//! Conventions
//! -----------
//! - The projection stack performs no I/O, holds no global state, and never
//!   fabricates data to paper over an error. Deciding whether to fall back
//!   to placeholder data belongs to the caller.
//!
//! Downstream usage
//! ----------------
//! ```rust
//! use trend_projector::projection::prelude::*;
//!
//! let observations = [
//!     Observation::new(2014, 20_000.0),
//!     Observation::new(2016, 80_000.0),
//!     Observation::new(2018, 150_000.0),
//!     Observation::new(2020, 250_000.0),
//! ];
//! let series = Series::from_observations(&observations)?;
//! let projection = TrendProjector::new(ProjectionOptions::default()).fit_and_project(&series)?;
//! assert_eq!(projection.projected().count(), 6);
//! # Ok::<(), ProjectionError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests; `tests/integration_trend_projection.rs`
//!   runs the reference national-consumption scenario end to end.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    DEFAULT_DEGREE, DEFAULT_HORIZON, FitDiagnostics, FittedCurve, Observation, PredictionInterval,
    ProjectionOptions, ProjectionRow, RowKind, Series, ValueSource, growth_rate,
};
pub use self::errors::{ProjectionError, ProjectionResult};
pub use self::models::{Projection, TrendProjector, fit_and_project};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::{
        FittedCurve, Observation, Projection, ProjectionError, ProjectionOptions, ProjectionResult,
        ProjectionRow, RowKind, Series, TrendProjector, ValueSource, fit_and_project, growth_rate,
    };
}
