//! Prediction intervals for a fitted trend.
//!
//! Purpose
//! -------
//! Quantify the uncertainty of a curve value at an arbitrary period with the
//! classical OLS prediction interval for a new observation:
//!
//! `ŷ(x) ± t_{1−α/2, n−k} · s · sqrt(1 + φ(x)ᵀ (XᵀX)⁻¹ φ(x))`
//!
//! where `s² = RSS / (n − k)`, `k = degree + 1`, and `φ` is the standardized
//! basis row.
//!
//! Invariants & assumptions
//! ------------------------
//! - Residuals are treated as i.i.d. Gaussian; with six annual points this is
//!   a rough guide, not a calibrated forecast distribution.
//! - At least one residual degree of freedom (`n > k`) is required.
use crate::projection::{
    core::{curve::FittedCurve, validation::validate_confidence},
    errors::{ProjectionError, ProjectionResult},
};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided prediction interval around a curve value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionInterval {
    pub period: i64,
    pub estimate: f64,
    pub lower: f64,
    pub upper: f64,
    pub confidence: f64,
}

impl PredictionInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl FittedCurve {
    /// prediction_interval — OLS prediction interval at `period`.
    ///
    /// Parameters
    /// ----------
    /// - `period`: `i64`
    ///   Any period, inside or beyond the fitted range.
    /// - `confidence`: `f64`
    ///   Two-sided coverage level in `(0, 1)`, e.g. `0.95`.
    ///
    /// Returns
    /// -------
    /// `ProjectionResult<PredictionInterval>`
    ///   Interval centred on the unrounded curve value.
    ///
    /// Errors
    /// ------
    /// - `ProjectionError::InvalidArgument`
    ///   If `confidence` is not strictly inside `(0, 1)`.
    /// - `ProjectionError::InsufficientDegreesOfFreedom`
    ///   If the fit is an exact interpolation (`n == degree + 1`).
    pub fn prediction_interval(
        &self, period: i64, confidence: f64,
    ) -> ProjectionResult<PredictionInterval> {
        validate_confidence(confidence)?;

        let diag = self.diagnostics();
        let parameters = self.degree() + 1;
        if diag.n_observations <= parameters {
            return Err(ProjectionError::InsufficientDegreesOfFreedom {
                observations: diag.n_observations,
                parameters,
            });
        }
        let dof = (diag.n_observations - parameters) as f64;

        let sigma2 = diag.rss / dof;
        let phi = self.basis_row(period);
        let leverage = phi.dot(&self.xtx_inv().dot(&phi));
        let se = (sigma2 * (1.0 + leverage)).sqrt();

        let students_t = StudentsT::new(0.0, 1.0, dof)
            .map_err(|e| ProjectionError::invalid_argument("confidence", e.to_string()))?;
        let quantile = students_t.inverse_cdf(1.0 - (1.0 - confidence) / 2.0);

        let estimate = self.value_at(period);
        let half_width = quantile * se;
        Ok(PredictionInterval {
            period,
            estimate,
            lower: estimate - half_width,
            upper: estimate + half_width,
            confidence,
        })
    }
}
