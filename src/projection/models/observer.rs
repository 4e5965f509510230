//! Opt-in fit summary logging (feature `obs_slog`).
//!
//! When a [`TrendProjector`](crate::projection::models::TrendProjector) runs
//! with `verbose = true`, one structured record describing the fit is written
//! to stderr through a non-blocking slog terminal drain. Errors are never
//! logged here; they are returned to the caller.
use crate::projection::core::curve::FittedCurve;
use slog::{Drain, Logger, info, o};

/// Terminal logger writing to stderr through an async drain.
fn term_noblock() -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("component" => "trend_projector"))
}

/// Log degree, sample size, rank, RSS, R², and horizon of a completed fit.
pub(crate) fn log_fit_summary(curve: &FittedCurve, horizon: usize) {
    let log = term_noblock();
    let diag = curve.diagnostics();
    info!(log, "fitted polynomial trend";
        "degree" => curve.degree(),
        "n" => diag.n_observations,
        "rank" => diag.rank,
        "rss" => diag.rss,
        "r_squared" => diag.r_squared,
        "exact_interpolation" => diag.exact_interpolation,
        "horizon" => horizon
    );
}
