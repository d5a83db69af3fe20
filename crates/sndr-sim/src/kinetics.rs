//! Butler-Volmer reaction kinetics.
//!
//! Pure functions of the parameter set, the instantaneous potential, and the
//! interface-adjacent cupric concentration. Degenerate inputs propagate as
//! non-finite values; nothing here guards or clamps.

use sndr_core::{Params, Real};

/// Forward/backward exponential jump term.
///
/// `x = eta n F / (R T)`, returns `exp(alpha x) - exp(-(1 - alpha) x)`.
/// Exactly zero at zero bias.
pub fn eta_jump(params: &Params, eta: Real) -> Real {
    let x = eta * params.n * params.faraday / (params.gas_constant * params.temperature);
    (params.alpha * x).exp() - (-(1.0 - params.alpha) * x).exp()
}

/// Bare-surface deposition rate, scaled by the interface cupric depletion.
pub fn calc_j0(params: &Params, eta: Real, cupric_left: Real) -> Real {
    params.j0 * eta_jump(params, eta) * cupric_left / params.cupric_inf
}

/// Covered-surface deposition rate, scaled by the interface cupric depletion.
pub fn calc_j1(params: &Params, eta: Real, cupric_left: Real) -> Real {
    params.j1 * eta_jump(params, eta) * cupric_left / params.cupric_inf
}
