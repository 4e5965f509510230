//! projection::models — user-facing trend projector.
//!
//! - [`TrendProjector`]: configuration holder with
//!   [`TrendProjector::fit_and_project`].
//! - [`Projection`]: rows plus the fitted curve.
//! - [`fit_and_project`]: one-shot convenience over raw observations.

#[cfg(feature = "obs_slog")]
pub(crate) mod observer;
pub mod trend;

pub use self::trend::{Projection, TrendProjector, fit_and_project};
