//! Error types for the finite-volume backend.

use thiserror::Error;

pub type FvmResult<T> = Result<T, FvmError>;

#[derive(Error, Debug)]
pub enum FvmError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Mesh mismatch: field has {field_cells} cells, equation has {eqn_cells}")]
    MeshMismatch {
        field_cells: usize,
        eqn_cells: usize,
    },

    #[error("Numeric error: {what}")]
    Numeric { what: &'static str },
}
