//! Fitted least-squares polynomial for a historical series.
//!
//! Purpose
//! -------
//! Own the result of one polynomial least-squares fit: the coefficients in
//! raw period units (for reporting), the conditioned representation actually
//! used to evaluate the curve, and fit diagnostics.
//!
//! Key behaviors
//! -------------
//! - [`FittedCurve::fit`] validates the sample size, standardizes periods,
//!   solves via [`solve_polynomial`], and computes RSS / R².
//! - [`FittedCurve::value_at`] evaluates the polynomial at any period using
//!   the standardized form, which avoids the cancellation that raw
//!   coefficients of a curve over calendar years suffer from.
//! - [`FittedCurve::coefficients`] exposes `degree + 1` raw coefficients,
//!   highest power first.
//!
//! Invariants & assumptions
//! ------------------------
//! - `coefficients.len() == local.len() == degree + 1`.
//! - `diagnostics.exact_interpolation` is `true` iff the fit used exactly
//!   `degree + 1` observations; this is informational, never an error.
//!
//! Testing notes
//! -------------
//! - Unit tests check the reference quadratic against hand-derived
//!   coefficients, exact interpolation, and the R² / RSS bookkeeping.
use crate::numerics::{
    LeastSquaresSolution, Standardization, expand_standardized, horner, solve_polynomial,
};
use crate::projection::{
    core::{data::Series, validation::validate_fit_size},
    errors::ProjectionResult,
};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Goodness-of-fit summary of a [`FittedCurve`].
///
/// - `n_observations`: number of points used in the fit.
/// - `rank`: numerical rank of the design (always `degree + 1` on success).
/// - `rss`: residual sum of squares.
/// - `r_squared`: coefficient of determination; `1.0` when the observations
///   have no variance.
/// - `exact_interpolation`: `n_observations == degree + 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitDiagnostics {
    pub n_observations: usize,
    pub rank: usize,
    pub rss: f64,
    pub r_squared: f64,
    pub exact_interpolation: bool,
}

/// `FittedCurve` — least-squares polynomial of a fixed degree.
///
/// Fields
/// ------
/// - `degree`: `usize`
///   Polynomial degree.
/// - `coefficients`: `Array1<f64>`
///   Coefficients in raw period units, highest power first.
/// - `local`: `Array1<f64>`
///   Coefficients in the standardized variable `t`, highest power first.
/// - `standardization`: [`Standardization`]
///   Map from periods to `t`.
/// - `xtx_inv`: `Array2<f64>`
///   `(XᵀX)⁻¹` of the standardized design, used for prediction intervals.
/// - `diagnostics`: [`FitDiagnostics`]
///
/// Notes
/// -----
/// - Produced per call and never mutated afterwards; cloning is cheap for
///   the small degrees this crate targets.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedCurve {
    degree: usize,
    coefficients: Array1<f64>,
    local: Array1<f64>,
    standardization: Standardization,
    xtx_inv: Array2<f64>,
    diagnostics: FitDiagnostics,
}

impl FittedCurve {
    /// Fit a degree-`degree` polynomial to `series` by ordinary least squares.
    ///
    /// Errors
    /// ------
    /// - `ProjectionError::InsufficientData` if `series.len() < degree + 1`.
    /// - `ProjectionError::SingularDesign` if the design loses numerical rank
    ///   (only reachable for extreme degrees).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use trend_projector::projection::core::{curve::FittedCurve, data::{Observation, Series}};
    /// let series = Series::from_observations(&[
    ///     Observation::new(0, 1.0),
    ///     Observation::new(1, 3.0),
    ///     Observation::new(2, 5.0),
    /// ]).unwrap();
    /// let line = FittedCurve::fit(&series, 1).unwrap();
    /// assert!((line.value_at(3) - 7.0).abs() < 1e-9);
    /// ```
    pub fn fit(series: &Series, degree: usize) -> ProjectionResult<Self> {
        validate_fit_size(series.len(), degree)?;

        let x = series.abscissae();
        let standardization = Standardization::from_abscissae(x.view());
        let t = x.mapv(|v| standardization.apply(v));

        let LeastSquaresSolution { coefficients: local, rank, xtx_inv } =
            solve_polynomial(t.view(), series.values(), degree)?;

        let coefficients =
            expand_standardized(local.view(), standardization.center, standardization.scale);
        let diagnostics = diagnose(&t, series.values(), local.view(), rank, degree);

        Ok(Self { degree, coefficients, local, standardization, xtx_inv, diagnostics })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Raw-period coefficients, highest power first (`degree + 1` entries).
    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    pub fn diagnostics(&self) -> &FitDiagnostics {
        &self.diagnostics
    }

    /// `true` when the curve passes through every fitted observation by
    /// construction (`n == degree + 1`).
    pub fn is_exact_interpolation(&self) -> bool {
        self.diagnostics.exact_interpolation
    }

    /// Evaluate the curve at `period`.
    pub fn value_at(&self, period: i64) -> f64 {
        horner(self.local.view(), self.standardization.apply(period as f64))
    }

    /// Residuals `y_i − p(x_i)` of `series` against this curve.
    pub fn residuals(&self, series: &Series) -> Array1<f64> {
        Array1::from_iter(series.observations().map(|o| o.value - self.value_at(o.period)))
    }

    /// Standardized basis row `φ(t) = [t^d, …, t, 1]` at `period`.
    pub(crate) fn basis_row(&self, period: i64) -> Array1<f64> {
        let t = self.standardization.apply(period as f64);
        Array1::from_iter((0..=self.degree).map(|j| t.powi((self.degree - j) as i32)))
    }

    pub(crate) fn xtx_inv(&self) -> ArrayView2<'_, f64> {
        self.xtx_inv.view()
    }
}

// ---- Helper methods ----

fn diagnose(
    t: &Array1<f64>, y: ArrayView1<'_, f64>, local: ArrayView1<'_, f64>, rank: usize,
    degree: usize,
) -> FitDiagnostics {
    let n = y.len();
    let mean_y = y.mean().unwrap_or(0.0);
    let rss: f64 = t.iter().zip(y.iter()).map(|(&ti, &yi)| (yi - horner(local, ti)).powi(2)).sum();
    let tss: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();
    let r_squared = if tss > 0.0 { 1.0 - rss / tss } else { 1.0 };

    FitDiagnostics { n_observations: n, rank, rss, r_squared, exact_interpolation: n == degree + 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{core::data::Observation, errors::ProjectionError};
    use approx::assert_relative_eq;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Coefficients of the reference biennial quadratic against values
    //   derived with exact rational arithmetic.
    // - Exact interpolation when n == degree + 1.
    // - RSS / R² bookkeeping and residuals.
    // - Sample-size rejection.
    //
    // They intentionally DO NOT cover:
    // - Row assembly or rounding; see `projection::models::trend`.
    // -------------------------------------------------------------------------

    fn reference_series() -> Series {
        Series::from_observations(&[
            Observation::new(2014, 20_000.0),
            Observation::new(2016, 80_000.0),
            Observation::new(2018, 150_000.0),
            Observation::new(2020, 250_000.0),
            Observation::new(2022, 320_000.0),
            Observation::new(2024, 390_000.0),
        ])
        .unwrap()
    }

    #[test]
    // Purpose
    // -------
    // Verify the quadratic fit of the reference series.
    //
    // Given
    // -----
    // - Exact least-squares solution in u = x − 2019:
    //   p(u) = (3125/14)u² + (267000/7)u + 398125/2.
    //
    // Expect
    // ------
    // - Raw coefficients ≈ [223.2142857, −863196.4285714, 833090642.857143].
    // - p(2030) ≈ 645642.857142857.
    fn fit_reference_series_matches_exact_quadratic() {
        // Arrange
        let series = reference_series();

        // Act
        let curve = FittedCurve::fit(&series, 2).unwrap();

        // Assert
        let c = curve.coefficients();
        assert_eq!(c.len(), 3);
        assert_relative_eq!(c[0], 3125.0 / 14.0, max_relative = 1e-9);
        assert_relative_eq!(c[1], -863_196.428_571_428_5, max_relative = 1e-9);
        assert_relative_eq!(c[2], 833_090_642.857_142_8, max_relative = 1e-9);
        assert_relative_eq!(curve.value_at(2030), 645_642.857_142_857, max_relative = 1e-10);
        assert_eq!(curve.degree(), 2);
        assert!(!curve.is_exact_interpolation());
    }

    #[test]
    // Purpose
    // -------
    // Check RSS and R² for the reference fit.
    //
    // Expect
    // ------
    // - RSS ≈ 412142857.142857, R² ≈ 0.99597057659629.
    // - Residuals sum to ≈ 0 (intercept in the model).
    fn fit_reference_series_reports_rss_and_r_squared() {
        let series = reference_series();
        let curve = FittedCurve::fit(&series, 2).unwrap();
        let diag = curve.diagnostics();

        assert_eq!(diag.n_observations, 6);
        assert_eq!(diag.rank, 3);
        assert_relative_eq!(diag.rss, 412_142_857.142_857_1, max_relative = 1e-8);
        assert_relative_eq!(diag.r_squared, 0.995_970_576_596_289_5, max_relative = 1e-10);

        let residuals = curve.residuals(&series);
        assert_relative_eq!(residuals.sum(), 0.0, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // With n == degree + 1 the polynomial interpolates every input.
    //
    // Given
    // -----
    // - Three unevenly spaced points and degree 2.
    //
    // Expect
    // ------
    // - p(x_i) == y_i within 1e-6 relative error; flagged as exact.
    fn fit_square_system_interpolates_inputs() {
        // Arrange
        let series = Series::from_observations(&[
            Observation::new(2014, 20_000.0),
            Observation::new(2015, 81_000.0),
            Observation::new(2021, 250_000.0),
        ])
        .unwrap();

        // Act
        let curve = FittedCurve::fit(&series, 2).unwrap();

        // Assert
        assert!(curve.is_exact_interpolation());
        for obs in series.observations() {
            assert_relative_eq!(curve.value_at(obs.period), obs.value, max_relative = 1e-6);
        }
        assert_relative_eq!(curve.diagnostics().rss, 0.0, epsilon = 1e-6);
    }

    #[test]
    // Purpose
    // -------
    // A constant series has zero total variance; R² is reported as 1.
    fn fit_constant_series_has_unit_r_squared() {
        let series = Series::from_observations(&[
            Observation::new(1, 5.0),
            Observation::new(2, 5.0),
            Observation::new(3, 5.0),
        ])
        .unwrap();
        let curve = FittedCurve::fit(&series, 0).unwrap();
        assert_relative_eq!(curve.value_at(10), 5.0, epsilon = 1e-12);
        assert_eq!(curve.diagnostics().r_squared, 1.0);
    }

    #[test]
    // Purpose
    // -------
    // Too few observations is rejected before any numerics run.
    fn fit_too_few_points_is_insufficient_data() {
        let series = Series::from_observations(&[Observation::new(2014, 1.0)]).unwrap();
        assert_eq!(
            FittedCurve::fit(&series, 2).unwrap_err(),
            ProjectionError::InsufficientData { required: 3, actual: 1 }
        );
    }
}
