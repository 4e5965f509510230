//! projection::core — data, options, rows, curve, and validation building blocks.
//!
//! Purpose
//! -------
//! Collect the value types and pure helpers that the
//! [`TrendProjector`](crate::projection::models::TrendProjector) composes:
//!
//! - [`data`]: [`Observation`] and the validated [`Series`].
//! - [`options`]: [`ProjectionOptions`] with documented defaults.
//! - [`rows`]: [`ProjectionRow`] / [`RowKind`] output records.
//! - [`curve`]: [`FittedCurve`] and [`FitDiagnostics`].
//! - [`intervals`]: [`PredictionInterval`] on top of a fitted curve.
//! - [`growth`]: the [`ValueSource`] seam and [`growth_rate`].
//! - [`validation`]: shared precondition guards.
//!
//! Conventions
//! -----------
//! - Periods are `i64`, values `f64`; coefficients are highest power first.
//! - Nothing in this subtree performs I/O.

pub mod curve;
pub mod data;
pub mod growth;
pub mod intervals;
pub mod options;
pub mod rows;
pub mod validation;

pub use self::curve::{FitDiagnostics, FittedCurve};
pub use self::data::{Observation, Series};
pub use self::growth::{ValueSource, growth_rate};
pub use self::intervals::PredictionInterval;
pub use self::options::{DEFAULT_DEGREE, DEFAULT_HORIZON, ProjectionOptions};
pub use self::rows::{ProjectionRow, RowKind};
