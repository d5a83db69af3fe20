//! Triangular potential ramp.

use sndr_core::{Params, Real};

/// Instantaneous potential at elapsed time `steps * dt`.
///
/// Ramps up from `v0` at rate `vm` until `tf / 2`, back down symmetrically
/// until `tf`, then holds at `v0`. Continuous at both breakpoints by
/// construction. No consistency checks on `tf`, `vm`, `dt`.
pub fn ramp_eta(params: &Params, steps: usize) -> Real {
    let t = steps as Real * params.dt;
    if t < params.tf / 2.0 {
        params.v0 + params.vm * t
    } else if t < params.tf {
        params.v0 + params.vm * (params.tf - t)
    } else {
        params.v0
    }
}
