//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while driving a simulation.
///
/// Degenerate physics (NaN fluxes, diverging coverage) is deliberately NOT an
/// error: it propagates through the arithmetic exactly as the model defines.
/// Only structural failures surface here.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<sndr_fvm::FvmError> for SimError {
    fn from(e: sndr_fvm::FvmError) -> Self {
        SimError::Backend {
            message: e.to_string(),
        }
    }
}
