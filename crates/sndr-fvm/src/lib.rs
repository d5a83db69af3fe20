//! sndr-fvm: implicit 1-D finite-volume backend for diffusion fields.
//!
//! Provides:
//! - uniform 1-D cell-centered mesh
//! - cell fields with previous-time tracking and a far-boundary Dirichlet
//!   constraint
//! - an implicit diffusion equation with an updatable boundary-flux source,
//!   advanced one linear sweep at a time (Thomas tridiagonal solve)
//!
//! The crate knows nothing about the electrochemistry; the coupling layer
//! feeds it flux magnitudes and reads back cell values and residuals.

pub mod equation;
pub mod error;
pub mod field;
pub mod mesh;

pub use equation::DiffusionEquation;
pub use error::{FvmError, FvmResult};
pub use field::CellField;
pub use mesh::Grid1d;
