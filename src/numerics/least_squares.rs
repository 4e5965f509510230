//! numerics::least_squares — SVD-based polynomial least squares.
//!
//! Purpose
//! -------
//! Solve the ordinary least-squares polynomial fit
//! `min_c Σ_i (y_i − Σ_k c_k t_i^{d−k})²` for short series, returning the
//! coefficients together with the pieces needed for downstream inference
//! (numerical rank and `(XᵀX)⁻¹`).
//!
//! Key behaviors
//! -------------
//! - Standardize the abscissae (`t = (x − center) / scale`) before building
//!   the Vandermonde design so that calendar years do not blow up the
//!   condition number.
//! - Build the design in `ndarray`, copy it into a `nalgebra::DMatrix`
//!   (`fill_dmatrix`), and solve with a thin SVD.
//! - Detect numerical rank loss with a relative singular-value cutoff and
//!   report it as [`ProjectionError::SingularDesign`].
//!
//! Invariants & assumptions
//! ------------------------
//! - `x.len() == y.len() ≥ degree + 1`; callers validate this first.
//! - `x` values are distinct (strictly increasing periods), so the design
//!   has full column rank in exact arithmetic.
//!
//! Conventions
//! -----------
//! - Design columns and returned coefficients are ordered highest power
//!   first.
//! - No explicit inverse of `XᵀX` is formed for the solve; `(XᵀX)⁻¹` is
//!   assembled from the right singular vectors only for inference.
use crate::projection::errors::{ProjectionError, ProjectionResult};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2, ArrayView1};

/// Relative singular-value cutoff: `σ_k ≤ RCOND · σ_max` counts as zero.
pub const RCOND: f64 = 1e-12;

/// Affine map `t = (x − center) / scale` applied to periods before fitting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standardization {
    pub center: f64,
    pub scale: f64,
}

impl Standardization {
    /// Centre on the mean and scale by the largest absolute deviation.
    ///
    /// A single-point (or empty) input gets `scale = 1.0`.
    pub fn from_abscissae(x: ArrayView1<'_, f64>) -> Self {
        let center = x.mean().unwrap_or(0.0);
        let spread = x.iter().fold(0.0_f64, |acc, &v| acc.max((v - center).abs()));
        let scale = if spread > 0.0 && spread.is_finite() { spread } else { 1.0 };
        Self { center, scale }
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        (x - self.center) / self.scale
    }
}

/// Output of [`solve_polynomial`].
///
/// - `coefficients`: fitted coefficients in the standardized variable,
///   highest power first.
/// - `rank`: numerical rank of the design.
/// - `xtx_inv`: `(XᵀX)⁻¹` of the standardized design, `k × k`.
#[derive(Debug, Clone, PartialEq)]
pub struct LeastSquaresSolution {
    pub coefficients: Array1<f64>,
    pub rank: usize,
    pub xtx_inv: Array2<f64>,
}

/// Vandermonde design with columns `t^d, t^{d−1}, …, 1`.
pub fn vandermonde(t: ArrayView1<'_, f64>, degree: usize) -> Array2<f64> {
    let k = degree + 1;
    Array2::from_shape_fn((t.len(), k), |(i, j)| t[i].powi((degree - j) as i32))
}

/// solve_polynomial — least-squares polynomial coefficients via thin SVD.
///
/// Parameters
/// ----------
/// - `t`: `ArrayView1<f64>`
///   Standardized abscissae.
/// - `y`: `ArrayView1<f64>`
///   Observed values, same length as `t`.
/// - `degree`: `usize`
///   Polynomial degree; `t.len() ≥ degree + 1` is assumed.
///
/// Returns
/// -------
/// `ProjectionResult<LeastSquaresSolution>`
///
/// Errors
/// ------
/// - `ProjectionError::InsufficientData`
///   Defensive re-check when `t.len() < degree + 1`.
/// - `ProjectionError::SingularDesign`
///   When the design rank (relative cutoff [`RCOND`]) is below `degree + 1`.
///
/// Notes
/// -----
/// - When `t.len() == degree + 1` the design is square and the solution
///   interpolates every point.
pub fn solve_polynomial(
    t: ArrayView1<'_, f64>, y: ArrayView1<'_, f64>, degree: usize,
) -> ProjectionResult<LeastSquaresSolution> {
    let n = t.len();
    let k = degree + 1;
    if n < k {
        return Err(ProjectionError::InsufficientData { required: k, actual: n });
    }

    let design = vandermonde(t, degree);
    let mut design_nalg = DMatrix::<f64>::zeros(n, k);
    fill_dmatrix(&design, &mut design_nalg);
    let rhs = DVector::<f64>::from_iterator(n, y.iter().copied());

    let svd = design_nalg.svd(true, true);
    let sigma_max = svd.singular_values.iter().fold(0.0_f64, |acc, &s| acc.max(s));
    let cutoff = RCOND * sigma_max;
    let rank = svd.rank(cutoff);
    if rank < k {
        return Err(ProjectionError::SingularDesign { rank, required: k });
    }

    let solution = svd
        .solve(&rhs, cutoff)
        .map_err(|_| ProjectionError::SingularDesign { rank, required: k })?;
    let v_t = svd.v_t.as_ref().ok_or(ProjectionError::SingularDesign { rank, required: k })?;

    // (XᵀX)⁻¹ = V Σ⁻² Vᵀ
    let mut xtx_inv = Array2::<f64>::zeros((k, k));
    for (m, &sigma) in svd.singular_values.iter().enumerate() {
        if sigma <= cutoff {
            continue;
        }
        let w = 1.0 / (sigma * sigma);
        for i in 0..k {
            for j in 0..k {
                xtx_inv[[i, j]] += v_t[(m, i)] * v_t[(m, j)] * w;
            }
        }
    }

    Ok(LeastSquaresSolution {
        coefficients: Array1::from_iter(solution.iter().copied()),
        rank,
        xtx_inv,
    })
}

// ---- Helper methods ----

/// Copy an `ndarray` design into a preallocated `nalgebra::DMatrix`.
///
/// Walks column by column to match `DMatrix`'s column-major storage. Shapes
/// must agree; a mismatch is a programming error and panics on indexing.
fn fill_dmatrix(design: &Array2<f64>, design_nalg: &mut DMatrix<f64>) {
    for j in 0..design.ncols() {
        for i in 0..design.nrows() {
            design_nalg[(i, j)] = design[[i, j]];
        }
    }
}
