//! numerics — dense polynomial least squares and polynomial helpers.
//!
//! Purpose
//! -------
//! Hold the small amount of linear algebra the projection stack needs:
//! a conditioned Vandermonde least-squares solve and polynomial evaluation /
//! basis-change helpers. Nothing here knows about periods, rows, or
//! projection options.
//!
//! Conventions
//! -----------
//! - Coefficient vectors are ordered highest power first.
//! - `ndarray` is the array type at module boundaries; `nalgebra` is used
//!   internally for the SVD.
//! - Errors are reported as
//!   [`ProjectionError`](crate::projection::errors::ProjectionError).

pub mod least_squares;
pub mod polynomial;

pub use self::least_squares::{LeastSquaresSolution, RCOND, Standardization, solve_polynomial};
pub use self::polynomial::{expand_standardized, horner};
