//! Multiphysics time-stepping engine for the S-NDR copper deposition model.
//!
//! A bulk suppressor and a bulk cupric field diffuse toward a reacting
//! interface; a fractional coverage variable (theta) evolves under nonlinear
//! adsorption/desorption kinetics driven by a ramped potential (eta). The
//! coupling is resolved each time step with a fixed budget of Picard sweeps:
//!
//! - every sweep reads one pre-sweep snapshot of the coupled scalars (Jacobi
//!   discipline, order-independent)
//! - the diffusion fields advance one implicit sweep each through the
//!   `sndr-fvm` backend, with their boundary fluxes refreshed from the
//!   snapshot
//! - theta advances by a closed-form linearized implicit update
//!
//! Discretized operators are assembled once per `(params, mesh, species)`
//! key and reused for the rest of the run. Convergence is by sweep count,
//! never by residual threshold; the per-sweep residual stream is returned so
//! callers can layer their own policy on top.

pub mod cache;
pub mod error;
pub mod kinetics;
pub mod report;
pub mod run;
pub mod schedule;
pub mod state;
pub mod step;
pub mod sweep;
pub mod theta;

// Re-exports for public API
pub use cache::{EquationCache, Species};
pub use error::{SimError, SimResult};
pub use run::{init_state, run};
pub use state::{SimState, TimeSeries};
pub use step::step;
pub use sweep::{Snapshot, SweepReport, sweep};
pub use theta::ThetaPair;
