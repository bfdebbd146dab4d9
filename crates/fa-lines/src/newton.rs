//! Newton solver with lower-bounded unknowns.

use crate::error::{LineError, LineResult};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Newton solver configuration.
#[derive(Clone, Debug)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance for residual norm
    pub abs_tol: f64,
    /// Relative tolerance for residual norm
    pub rel_tol: f64,
    /// Lower bounds on individual unknowns as `(index, min)`
    pub lower_bounds: Vec<(usize, f64)>,
    /// Line search backtracking factor
    pub line_search_beta: f64,
    /// Maximum line search iterations
    pub max_line_search_iters: usize,
    /// Relative step for finite-difference Jacobians
    pub fd_epsilon: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            abs_tol: 1e-6,
            rel_tol: 1e-12,
            lower_bounds: Vec::new(),
            line_search_beta: 0.5,
            max_line_search_iters: 40,
            fd_epsilon: 1e-6,
        }
    }
}

impl NewtonConfig {
    fn within_bounds(&self, x: &DVector<f64>) -> bool {
        self.lower_bounds
            .iter()
            .all(|&(i, min)| x.get(i).is_none_or(|&v| v >= min))
    }
}

/// Newton iteration result.
#[derive(Clone, Debug)]
pub struct NewtonResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Final residual norm
    pub residual_norm: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Converged flag
    pub converged: bool,
}

/// Newton solver with backtracking line search and lower bounds.
///
/// A step is accepted only if it stays within bounds and reduces the
/// residual norm; when no such step is found the solve fails.
pub fn newton_solve<F, J>(
    x0: DVector<f64>,
    residual_fn: F,
    jacobian_fn: J,
    config: &NewtonConfig,
) -> LineResult<NewtonResult>
where
    F: Fn(&DVector<f64>) -> LineResult<DVector<f64>>,
    J: Fn(&DVector<f64>) -> LineResult<DMatrix<f64>>,
{
    if !config.within_bounds(&x0) {
        return Err(LineError::ProblemSetup {
            what: "initial guess violates lower bounds".to_string(),
        });
    }

    let mut x = x0;
    let mut r = residual_fn(&x)?;
    let mut r_norm = r.norm();
    let r0_norm = r_norm;

    if !r_norm.is_finite() {
        return Err(LineError::Numeric {
            what: "non-finite residual at initial guess".to_string(),
        });
    }

    for iter in 0..config.max_iterations {
        // Check convergence
        if r_norm < config.abs_tol || r_norm < config.rel_tol * r0_norm {
            debug!(iterations = iter, residual = r_norm, "newton converged");
            return Ok(NewtonResult {
                x,
                residual_norm: r_norm,
                iterations: iter,
                converged: true,
            });
        }

        // Compute Jacobian
        let jac = jacobian_fn(&x)?;

        // Solve J * dx = -r
        let dx = jac
            .lu()
            .solve(&(-r.clone()))
            .ok_or_else(|| LineError::ConvergenceFailed {
                what: format!("singular Jacobian at iteration {}", iter),
            })?;

        // Backtrack until the step is feasible and reduces the residual
        let mut alpha = 1.0;
        let mut accepted = None;
        for _ in 0..config.max_line_search_iters {
            let x_new = &x + alpha * &dx;
            if config.within_bounds(&x_new) {
                let r_new = residual_fn(&x_new)?;
                let r_new_norm = r_new.norm();
                if r_new_norm < r_norm {
                    accepted = Some((x_new, r_new, r_new_norm));
                    break;
                }
            }
            alpha *= config.line_search_beta;
        }

        let Some((x_new, r_new, r_new_norm)) = accepted else {
            return Err(LineError::ConvergenceFailed {
                what: format!(
                    "line search stagnated at iteration {}, residual = {}",
                    iter, r_norm
                ),
            });
        };

        // Update solution
        x = x_new;
        r = r_new;
        r_norm = r_new_norm;
    }

    Err(LineError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual = {}",
            config.max_iterations, r_norm
        ),
    })
}
