//! Float helpers and argument checks shared by the cable crates.

use crate::FaError;

/// Floating point type of all physical quantities.
pub type Real = f64;

/// Absolute and relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// `a` and `b` agree within `tol.abs`, or within `tol.rel` of the larger.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    diff <= tol.abs || diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FaError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FaError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive, e.g. a section length.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, FaError> {
    match ensure_finite(v, what)? {
        v if v > 0.0 => Ok(v),
        _ => Err(FaError::InvalidArg { what }),
    }
}

/// Finite and not negative, e.g. a diameter or a lumped mass.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, FaError> {
    match ensure_finite(v, what)? {
        v if v >= 0.0 => Ok(v),
        _ => Err(FaError::InvalidArg { what }),
    }
}
