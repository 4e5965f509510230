//! Project national consumption six years past the last observation and
//! print the table a dashboard would render.
//!
//! Run with `cargo run --example honduras_projection` (add
//! `--features obs_slog` for the fit summary on stderr).
use anyhow::{Context, Result};
use trend_projector::projection::prelude::*;

fn main() -> Result<()> {
    let observations: Vec<Observation> = [
        (2014, 20_000.0),
        (2016, 80_000.0),
        (2018, 150_000.0),
        (2020, 250_000.0),
        (2022, 320_000.0),
        (2024, 390_000.0),
    ]
    .into_iter()
    .map(Observation::from)
    .collect();

    let series = Series::from_observations(&observations).context("building series")?;
    let options = ProjectionOptions { verbose: true, ..ProjectionOptions::default() };
    let projection =
        TrendProjector::new(options).fit_and_project(&series).context("projecting trend")?;

    println!("{:>6}  {:>12}  {}", "period", "value", "kind");
    for row in projection.rows() {
        println!("{:>6}  {:>12.0}  {}", row.period, row.value, row.kind);
    }

    let curve = projection.curve();
    println!();
    println!("coefficients (highest power first): {:?}", curve.coefficients().to_vec());
    println!("R² = {:.4}", curve.diagnostics().r_squared);

    let last = series.last_period().context("series is empty")?;
    let end = last + options.horizon as i64;
    let growth = projection.growth_rate(last, end)?;
    println!("growth {last} → {end}: {:.1}%", growth * 100.0);

    let pi = curve.prediction_interval(end, 0.95)?;
    println!("95% prediction interval for {end}: [{:.0}, {:.0}]", pi.lower, pi.upper);

    Ok(())
}
