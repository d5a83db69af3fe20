//! sndr-core: stable foundation for the S-NDR electrodeposition simulator.
//!
//! Contains:
//! - params (the immutable physical/numerical parameter set)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use params::Params;
