//! Error types for line model operations.

use fa_core::error::FaError;
use thiserror::Error;

/// Errors that can occur while building or solving a line model.
#[derive(Error, Debug)]
pub enum LineError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: String },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Unknown line type: {name}")]
    UnknownLineType { name: String },

    #[error("Invalid suspension case selector: {value}")]
    InvalidCase { value: u8 },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Core error: {0}")]
    Core(#[from] FaError),
}

pub type LineResult<T> = Result<T, LineError>;

impl From<LineError> for FaError {
    fn from(e: LineError) -> Self {
        match e {
            LineError::ProblemSetup { what: _ } => FaError::InvalidArg {
                what: "problem setup",
            },
            LineError::ConvergenceFailed { what: _ } => FaError::InvalidArg {
                what: "convergence",
            },
            LineError::UnknownLineType { name: _ } => FaError::InvalidArg { what: "line type" },
            LineError::InvalidCase { value: _ } => FaError::InvalidArg {
                what: "suspension case",
            },
            LineError::Numeric { what: _ } => FaError::InvalidArg { what: "numeric" },
            LineError::Core(inner) => inner,
        }
    }
}
