//! One outer time step.

use crate::cache::EquationCache;
use crate::error::SimResult;
use crate::report;
use crate::schedule::ramp_eta;
use crate::state::SimState;
use crate::sweep::{SweepReport, sweep};
use sndr_core::Params;
use tracing::debug;

/// Advance the simulation one time step.
///
/// Commits every "old" value, recomputes the potential once for this step's
/// elapsed time, then runs the sweep driver exactly `max_sweeps` times with
/// no early exit. Appends exactly one time-series sample, taken from the
/// converged post-sweep values. Returns the step's residual stream.
pub fn step(
    params: &Params,
    state: &mut SimState,
    cache: &mut EquationCache,
) -> SimResult<Vec<SweepReport>> {
    if params.output {
        report::print_step_banner(state.steps);
    }

    state.sup.update_old();
    state.cupric.update_old();
    state.theta.commit();
    state.sweeps = 0;
    state.eta = ramp_eta(params, state.steps);

    let mut reports = Vec::with_capacity(params.max_sweeps);
    for _ in 0..params.max_sweeps {
        let rep = sweep(params, state, cache)?;
        if params.output {
            report::print_sweep_row(&rep);
        }
        reports.push(rep);
    }

    state.steps += 1;
    state.record_sample();

    debug!(
        step = state.steps,
        eta = state.eta,
        theta = state.theta.new,
        "step complete"
    );
    Ok(reports)
}
