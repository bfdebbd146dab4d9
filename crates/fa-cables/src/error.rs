//! Error types for dynamic cable operations.

use fa_core::error::FaError;
use fa_lines::LineError;
use thiserror::Error;

/// Errors that can occur while building, positioning or solving a cable.
#[derive(Error, Debug)]
pub enum CableError {
    #[error("Configuration error: {what}")]
    Configuration { what: String },

    #[error("Invalid end selector {token:?}: use 'a'/'A'/0/false or 'b'/'B'/1/true")]
    InvalidEndSelector { token: String },

    #[error("Section index {index} out of bounds ({len} sections)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Solver failure: {0}")]
    Solver(#[from] LineError),

    #[error("Core error: {0}")]
    Core(#[from] FaError),
}

pub type CableResult<T> = Result<T, CableError>;

impl CableError {
    pub(crate) fn config(what: impl Into<String>) -> Self {
        CableError::Configuration { what: what.into() }
    }
}

impl From<CableError> for FaError {
    fn from(e: CableError) -> Self {
        match e {
            CableError::Configuration { what } => FaError::Invariant { what },
            CableError::InvalidEndSelector { token: _ } => FaError::InvalidArg {
                what: "end selector",
            },
            CableError::IndexOutOfBounds { index, len } => FaError::IndexOob {
                what: "section",
                index,
                len,
            },
            CableError::Solver(inner) => inner.into(),
            CableError::Core(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solver_errors_pass_through_unchanged() {
        let err: CableError = LineError::ConvergenceFailed {
            what: "line search stagnated".into(),
        }
        .into();
        assert!(matches!(
            &err,
            CableError::Solver(LineError::ConvergenceFailed { what }) if what == "line search stagnated"
        ));
        assert!(err.to_string().contains("Solver failure"));
    }

    #[test]
    fn index_error_maps_to_core_oob() {
        let fa: FaError = CableError::IndexOutOfBounds { index: 4, len: 2 }.into();
        assert!(matches!(
            fa,
            FaError::IndexOob {
                what: "section",
                index: 4,
                len: 2
            }
        ));
    }
}
