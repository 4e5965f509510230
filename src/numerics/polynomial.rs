//! numerics::polynomial — evaluation and basis changes for dense polynomials.
//!
//! Coefficient vectors in this module are ordered **highest power first**
//! (`c[0]·x^d + … + c[d]`), matching the layout exposed by
//! [`FittedCurve::coefficients`](crate::projection::core::curve::FittedCurve::coefficients).
use ndarray::{Array1, ArrayView1};

/// Evaluate a polynomial at `x` with Horner's scheme.
///
/// An empty coefficient vector evaluates to `0.0`.
pub fn horner(coefficients: ArrayView1<'_, f64>, x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// expand_standardized — rewrite `p(t)`, `t = (x - center) / scale`, in powers of `x`.
///
/// Purpose
/// -------
/// The solver fits in a centred and scaled variable for conditioning; callers
/// still want the coefficients of the same polynomial in the raw period
/// variable. This helper performs that change of basis exactly (up to
/// floating-point rounding) using the binomial expansion
/// `((x - c)/s)^k = s^{-k} Σ_j C(k, j) x^j (-c)^{k-j}`.
///
/// Parameters
/// ----------
/// - `local`: `ArrayView1<f64>`
///   Coefficients of `p(t)`, highest power first.
/// - `center`: `f64`
///   Shift applied to `x` before scaling.
/// - `scale`: `f64`
///   Strictly positive divisor applied after shifting.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Coefficients of the same polynomial in `x`, highest power first, with
///   the same length as `local`.
///
/// Notes
/// -----
/// - Raw coefficients of a curve fitted to calendar years are large and
///   alternate in sign; they are reported for inspection but evaluation
///   should go through the standardized form.
pub fn expand_standardized(local: ArrayView1<'_, f64>, center: f64, scale: f64) -> Array1<f64> {
    let k = local.len();
    if k == 0 {
        return Array1::zeros(0);
    }
    let degree = k - 1;

    // ascending[j] accumulates the coefficient of x^j.
    let mut ascending = vec![0.0_f64; k];
    for (i, &l) in local.iter().enumerate() {
        let power = degree - i;
        let inv_scale_pow = scale.powi(-(power as i32));
        for (j, slot) in ascending.iter_mut().enumerate().take(power + 1) {
            let shift_pow = (-center).powi((power - j) as i32);
            *slot += l * inv_scale_pow * binomial(power, j) * shift_pow;
        }
    }

    Array1::from_iter(ascending.into_iter().rev())
}

/// Binomial coefficient `C(n, k)` as `f64`.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}
