//! Integration tests for the polynomial trend projector.
//!
//! Purpose
//! -------
//! - Validate the end-to-end fit-and-project path: from raw observations,
//!   through `Series` validation and the least-squares fit, to the row table,
//!   growth rates, and prediction intervals.
//! - Pin the reference national-consumption scenario (biennial observations
//!   2014–2024, six-year horizon) to values computed in exact arithmetic.
//!
//! Coverage
//! --------
//! - `projection::models`:
//!   - `TrendProjector::fit_and_project` and the free `fit_and_project`.
//!   - `Projection` row access and growth through the `ValueSource` seam.
//! - `projection::core`:
//!   - `FittedCurve` coefficients, diagnostics, and prediction intervals.
//!   - `RowKind` display / parsing as a presentation layer would use it.
//!
//! Exclusions
//! ----------
//! - Low-level numerics (Vandermonde construction, SVD cutoff, binomial
//!   expansion) are covered by unit tests in `numerics`.
//! - Python bindings are tested from Python.
use approx::assert_relative_eq;
use ndarray::array;
use trend_projector::projection::{
    FittedCurve, Observation, ProjectionError, ProjectionOptions, RowKind, Series, TrendProjector,
    fit_and_project, growth_rate,
};

/// Reference series: biennial national consumption, 2014–2024.
fn honduras_observations() -> Vec<Observation> {
    [
        (2014, 20_000.0),
        (2016, 80_000.0),
        (2018, 150_000.0),
        (2020, 250_000.0),
        (2022, 320_000.0),
        (2024, 390_000.0),
    ]
    .into_iter()
    .map(Observation::from)
    .collect()
}

/// Exact least-squares curve values for 2025..=2030 (unrounded).
const HONDURAS_PROJECTED: [f64; 6] = [
    435_955.357_142_857_1,
    477_000.0,
    518_491.071_428_571_4,
    560_428.571_428_571_5,
    602_812.5,
    645_642.857_142_857_2,
];

#[test]
// Purpose
// -------
// Run the reference scenario with default options and check the full table.
//
// Given
// -----
// - Six biennial observations, horizon 6, degree 2, rounding on.
//
// Expect
// ------
// - 12 rows: the six inputs unchanged, then 2025..=2030 projected.
// - Projected values equal the exact fit rounded to whole units.
fn honduras_default_projection_matches_exact_fit() {
    // Arrange
    let obs = honduras_observations();
    let series = Series::from_observations(&obs).unwrap();

    // Act
    let projection = TrendProjector::default().fit_and_project(&series).unwrap();

    // Assert
    assert_eq!(projection.len(), 12);
    let periods: Vec<i64> = projection.rows().iter().map(|r| r.period).collect();
    assert_eq!(
        periods,
        vec![2014, 2016, 2018, 2020, 2022, 2024, 2025, 2026, 2027, 2028, 2029, 2030]
    );

    for (row, o) in projection.rows()[..6].iter().zip(&obs) {
        assert_eq!(row.kind, RowKind::Historical);
        assert_eq!(row.value.to_bits(), o.value.to_bits());
    }

    let projected: Vec<f64> = projection.projected().map(|r| r.value).collect();
    assert_eq!(projected[0], 435_955.0);
    assert_eq!(projected[1], 477_000.0);
    assert_eq!(projected[2], 518_491.0);
    assert_eq!(projected[3], 560_429.0);
    // 2029 sits on a half-unit tie in exact arithmetic.
    assert!(projected[4] == 602_812.0 || projected[4] == 602_813.0, "got {}", projected[4]);
    assert_eq!(projected[5], 645_643.0);
}

#[test]
// Purpose
// -------
// Without rounding, projected rows track the exact curve and the curve
// reports the expected coefficients and goodness of fit.
//
// Given
// -----
// - Reference scenario, rounding off.
//
// Expect
// ------
// - Projected values match exact-arithmetic values to ~1e-9 relative.
// - Raw coefficients ≈ [223.2143, -863196.43, 833090642.86].
// - R² ≈ 0.99597; not an exact interpolation.
fn honduras_unrounded_projection_and_curve_diagnostics() {
    // Arrange
    let options = ProjectionOptions::new(6, 2, false, false).unwrap();
    let series = Series::from_observations(&honduras_observations()).unwrap();

    // Act
    let projection = TrendProjector::new(options).fit_and_project(&series).unwrap();
    let curve: &FittedCurve = projection.curve();

    // Assert
    for (row, expected) in projection.projected().zip(HONDURAS_PROJECTED) {
        assert_relative_eq!(row.value, expected, max_relative = 1e-9);
    }

    let coefficients = curve.coefficients();
    assert_eq!(coefficients.len(), 3);
    assert_relative_eq!(coefficients[0], 223.214_285_714_285_72, max_relative = 1e-6);
    assert_relative_eq!(coefficients[1], -863_196.428_571_428_5, max_relative = 1e-6);
    assert_relative_eq!(coefficients[2], 833_090_642.857_142_8, max_relative = 1e-6);

    let diag = curve.diagnostics();
    assert_eq!(diag.n_observations, 6);
    assert_eq!(diag.rank, 3);
    assert_relative_eq!(diag.rss, 412_142_857.142_857_13, max_relative = 1e-6);
    assert_relative_eq!(diag.r_squared, 0.995_970_576_596_289_5, max_relative = 1e-9);
    assert!(!curve.is_exact_interpolation());

    let fitted_2014 = curve.value_at(2014);
    assert_relative_eq!(fitted_2014, 13_928.571_428_571_43, max_relative = 1e-8);
}

#[test]
// Purpose
// -------
// Growth from the last observation to the end of the horizon, with and
// without rounding.
//
// Given
// -----
// - Reference scenario; growth 2024 → 2030.
//
// Expect
// ------
// - Rounded table: (645643 − 390000) / 390000.
// - Unrounded curve: (645642.857… − 390000) / 390000.
fn honduras_growth_rate_over_horizon() {
    let obs = honduras_observations();

    let (rows, _) = fit_and_project(&obs, 6, 2, true).unwrap();
    let last = rows.last().unwrap();
    assert_eq!(last.period, 2030);
    let rounded = (last.value - 390_000.0) / 390_000.0;
    assert_relative_eq!(rounded, 0.655_494_871_794_871_8, max_relative = 1e-12);

    let series = Series::from_observations(&obs).unwrap();
    let projection = TrendProjector::default().fit_and_project(&series).unwrap();
    assert_relative_eq!(projection.growth_rate(2024, 2030).unwrap(), rounded, max_relative = 1e-12);

    let unrounded = growth_rate(projection.curve(), 2024, 2030).unwrap();
    // Curve at 2024 is the fitted value, not the observation.
    let expected = (HONDURAS_PROJECTED[5] - projection.curve().value_at(2024))
        / projection.curve().value_at(2024);
    assert_relative_eq!(unrounded, expected, max_relative = 1e-9);

    let via_series = growth_rate(&series, 2014, 2024).unwrap();
    assert_relative_eq!(via_series, 18.5);
}

#[test]
// Purpose
// -------
// Prediction intervals widen with distance from the data and bracket the
// point estimate.
//
// Given
// -----
// - Reference scenario; 95% intervals at 2025 and 2030.
//
// Expect
// ------
// - `lower < estimate < upper` for both periods.
// - The 2030 interval is wider than the 2025 interval.
// - A 99% interval is wider than a 95% interval at the same period.
fn honduras_prediction_intervals_widen_with_horizon() {
    let series = Series::from_observations(&honduras_observations()).unwrap();
    let projection = TrendProjector::default().fit_and_project(&series).unwrap();
    let curve = projection.curve();

    let near = curve.prediction_interval(2025, 0.95).unwrap();
    let far = curve.prediction_interval(2030, 0.95).unwrap();
    let wide = curve.prediction_interval(2030, 0.99).unwrap();

    for pi in [&near, &far, &wide] {
        assert!(pi.lower < pi.estimate && pi.estimate < pi.upper, "{pi:?}");
    }
    assert_relative_eq!(far.estimate, HONDURAS_PROJECTED[5], max_relative = 1e-9);
    assert!(far.width() > near.width());
    assert!(wide.width() > far.width());
}

#[test]
// Purpose
// -------
// Data lying exactly on a line is reproduced and extended exactly.
//
// Given
// -----
// - y = 2·x + 1 at x = 1..=5; degree 1; horizon 3; rounding off.
//
// Expect
// ------
// - Projected values 13, 15, 17 (to rounding error).
// - R² = 1.
fn linear_series_is_extended_exactly() {
    let series = Series::from_parts(vec![1, 2, 3, 4, 5], array![3.0, 5.0, 7.0, 9.0, 11.0]).unwrap();
    let options = ProjectionOptions::new(3, 1, false, false).unwrap();

    let projection = TrendProjector::new(options).fit_and_project(&series).unwrap();

    let projected: Vec<(i64, f64)> = projection.projected().map(|r| (r.period, r.value)).collect();
    let expected = [(6, 13.0), (7, 15.0), (8, 17.0)];
    for ((period, value), (exp_period, exp_value)) in projected.into_iter().zip(expected) {
        assert_eq!(period, exp_period);
        assert_relative_eq!(value, exp_value, epsilon = 1e-9);
    }
    assert_relative_eq!(projection.curve().diagnostics().r_squared, 1.0, epsilon = 1e-12);
}

#[test]
// Purpose
// -------
// Exactly `degree + 1` observations give an interpolating fit with no
// residual degrees of freedom.
//
// Given
// -----
// - Three observations, degree 2.
//
// Expect
// ------
// - The fit is flagged as exact and passes through every observation.
// - Prediction intervals report `InsufficientDegreesOfFreedom`.
fn minimal_series_interpolates_exactly() {
    let obs = [Observation::new(2020, 5.0), Observation::new(2021, 7.0), Observation::new(2023, 4.0)];

    let (rows, curve) = fit_and_project(&obs, 2, 2, false).unwrap();

    assert_eq!(rows.len(), 5);
    assert!(curve.is_exact_interpolation());
    for o in &obs {
        assert_relative_eq!(curve.value_at(o.period), o.value, epsilon = 1e-9);
    }
    assert_eq!(
        curve.prediction_interval(2024, 0.95).unwrap_err(),
        ProjectionError::InsufficientDegreesOfFreedom { observations: 3, parameters: 3 }
    );
}

#[test]
// Purpose
// -------
// Precondition failures surface as typed errors and produce no rows.
//
// Given
// -----
// - Two observations at degree 2, an unordered series, a zero horizon, and
//   a NaN value.
//
// Expect
// ------
// - `InsufficientData`, `UnorderedInput`, `InvalidArgument`, and
//   `NonFiniteValue` respectively.
fn precondition_failures_are_reported() {
    let two = [Observation::new(2020, 1.0), Observation::new(2021, 2.0)];
    assert_eq!(
        fit_and_project(&two, 6, 2, true).unwrap_err(),
        ProjectionError::InsufficientData { required: 3, actual: 2 }
    );

    let unordered = [
        Observation::new(2020, 1.0),
        Observation::new(2022, 2.0),
        Observation::new(2021, 3.0),
    ];
    assert!(matches!(
        fit_and_project(&unordered, 6, 1, true),
        Err(ProjectionError::UnorderedInput { index: 2, previous: 2022, current: 2021 })
    ));

    assert!(matches!(
        fit_and_project(&honduras_observations(), 0, 2, true),
        Err(ProjectionError::InvalidArgument { name: "horizon", .. })
    ));

    let with_nan = [
        Observation::new(2020, 1.0),
        Observation::new(2021, f64::NAN),
        Observation::new(2022, 3.0),
    ];
    assert!(matches!(
        fit_and_project(&with_nan, 6, 1, true),
        Err(ProjectionError::NonFiniteValue { index: 1, .. })
    ));
}

#[test]
// Purpose
// -------
// Row kinds render and parse the way a presentation layer expects.
fn row_kinds_render_for_display() {
    let (rows, _) = fit_and_project(&honduras_observations(), 1, 2, true).unwrap();
    let labels: Vec<String> = rows.iter().map(|r| r.kind.to_string()).collect();
    assert_eq!(labels.iter().filter(|l| l.as_str() == "Historical").count(), 6);
    assert_eq!(labels.last().map(String::as_str), Some("Projected"));
    assert_eq!("projected".parse::<RowKind>().unwrap(), RowKind::Projected);
}
