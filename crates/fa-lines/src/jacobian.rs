//! Finite difference Jacobian computation.

use crate::error::LineResult;
use nalgebra::{DMatrix, DVector};

/// Compute Jacobian using forward finite differences.
///
/// For each column j, perturbs x[j] upwards by epsilon and computes
/// (f(x+e) - f(x))/epsilon. Perturbing upwards keeps lower-bounded
/// unknowns feasible.
pub fn finite_difference_jacobian<F>(
    x: &DVector<f64>,
    f: F,
    epsilon: f64,
) -> LineResult<DMatrix<f64>>
where
    F: Fn(&DVector<f64>) -> LineResult<DVector<f64>>,
{
    let n = x.len();
    let f_x = f(x)?;
    let m = f_x.len();

    let mut jac = DMatrix::zeros(m, n);

    for j in 0..n {
        let mut x_perturbed = x.clone();
        let dx = epsilon * x[j].abs().max(1.0);
        x_perturbed[j] += dx;

        let f_perturbed = f(&x_perturbed)?;
        let df = (f_perturbed - &f_x) / dx;

        jac.set_column(j, &df);
    }

    Ok(jac)
}
