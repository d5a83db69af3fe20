//! One inner fixed-point (Picard) iteration.
//!
//! Every update rule reads the same pre-sweep [`Snapshot`]; no rule observes
//! another rule's result from the same sweep. This Jacobi discipline is what
//! makes the sweep order-independent and deterministic.

use crate::cache::{EquationCache, Species};
use crate::error::SimResult;
use crate::kinetics::{calc_j0, calc_j1, eta_jump};
use crate::state::SimState;
use crate::theta::{self, ThetaPair};
use sndr_core::{Params, Real};
use tracing::trace;

/// Pre-sweep snapshot of every coupling quantity.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot {
    /// Interface-adjacent suppressor concentration.
    pub sup_left: Real,
    /// Interface-adjacent cupric concentration.
    pub cupric_left: Real,
    pub theta: ThetaPair,
    pub eta: Real,
}

impl Snapshot {
    pub fn capture(state: &SimState) -> Self {
        Self {
            sup_left: state.sup.interface_value(),
            cupric_left: state.cupric.interface_value(),
            theta: state.theta,
            eta: state.eta,
        }
    }
}

/// Boundary flux consumed by the suppressor field: adsorption onto the
/// uncovered fraction of the interface.
pub fn suppressor_flux(params: &Params, snap: &Snapshot) -> Real {
    -params.gamma * params.k_plus * (1.0 - snap.theta.new)
}

/// Boundary flux consumed by the cupric field: deposition through bare and
/// covered surface, with the raw rate constants (the concentration ratio is
/// carried by the implicit source's dependence on the unknown).
pub fn cupric_flux(params: &Params, snap: &Snapshot) -> Real {
    -eta_jump(params, snap.eta) / params.omega / params.cupric_inf
        * (params.j0 * (1.0 - snap.theta.new) + params.j1 * snap.theta.new)
}

/// Per-sweep record of every updated quantity and its residual.
///
/// This is the residual stream surfaced to callers; the core never compares
/// any of these against a tolerance. Pass-through scalars (step index, eta,
/// series) carry a zero residual by definition.
#[derive(Debug, Clone, Copy)]
pub struct SweepReport {
    /// 1-based sweep index within the current step.
    pub sweep: usize,
    pub sup_value: Real,
    pub sup_residual: Real,
    pub cupric_value: Real,
    pub cupric_residual: Real,
    pub theta_value: Real,
    pub theta_residual: Real,
    pub eta: Real,
}

/// Apply every variable's update rule once against a common snapshot and
/// commit the results into the state.
pub fn sweep(
    params: &Params,
    state: &mut SimState,
    cache: &mut EquationCache,
) -> SimResult<SweepReport> {
    let snap = Snapshot::capture(state);

    let sup_eqn = cache.get_or_build(params, &state.mesh, Species::Suppressor);
    sup_eqn.set_flux(suppressor_flux(params, &snap));
    let sup_residual = sup_eqn.sweep(&mut state.sup, params.dt)?;

    let cupric_eqn = cache.get_or_build(params, &state.mesh, Species::Cupric);
    cupric_eqn.set_flux(cupric_flux(params, &snap));
    let cupric_residual = cupric_eqn.sweep(&mut state.cupric, params.dt)?;

    let j0 = calc_j0(params, snap.eta, snap.cupric_left);
    let j1 = calc_j1(params, snap.eta, snap.cupric_left);
    let (theta_next, theta_residual) = theta::update(params, &snap.theta, snap.sup_left, j0, j1);
    state.theta = theta_next;

    state.sweeps += 1;

    let report = SweepReport {
        sweep: state.sweeps,
        sup_value: state.sup.interface_value(),
        sup_residual,
        cupric_value: state.cupric.interface_value(),
        cupric_residual,
        theta_value: state.theta.new,
        theta_residual,
        eta: snap.eta,
    };
    trace!(
        sweep = report.sweep,
        sup_res = report.sup_residual,
        cupric_res = report.cupric_residual,
        theta_res = report.theta_residual,
        "sweep"
    );
    Ok(report)
}
