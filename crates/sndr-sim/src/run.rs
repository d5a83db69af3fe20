//! Whole-run simulation driver.

use crate::cache::EquationCache;
use crate::error::SimResult;
use crate::schedule::ramp_eta;
use crate::state::{SimState, TimeSeries};
use crate::step::step;
use crate::theta::ThetaPair;
use sndr_core::{Params, Real};
use sndr_fvm::{CellField, Grid1d};
use tracing::debug;

/// Build the initial simulation state: one shared mesh, fields at their
/// initial values with far-field constraints, coverage at `theta_ini`,
/// counters zeroed, potential evaluated at step 0, empty series.
pub fn init_state(params: &Params) -> SimResult<SimState> {
    let mesh = Grid1d::new(params.nx, params.delta / params.nx as Real)?;

    let mut sup = CellField::new(&mesh, params.sup_ini, true);
    sup.constrain_far(params.sup_inf);

    let mut cupric = CellField::new(&mesh, params.cupric_ini, true);
    cupric.constrain_far(params.cupric_inf);

    Ok(SimState {
        mesh,
        sup,
        cupric,
        theta: ThetaPair::uniform(params.theta_ini),
        eta: ramp_eta(params, 0),
        sweeps: 0,
        steps: 0,
        series: TimeSeries::new(),
    })
}

/// Run the entire simulation: exactly `max_steps` steps of `max_sweeps`
/// sweeps each, no early exit. Returns the final state, whose time-series
/// buffers are the externally consumable result.
pub fn run(params: &Params) -> SimResult<SimState> {
    let mut state = init_state(params)?;
    let mut cache = EquationCache::new();

    debug!(
        nx = params.nx,
        max_steps = params.max_steps,
        max_sweeps = params.max_sweeps,
        "starting run"
    );
    for _ in 0..params.max_steps {
        step(params, &mut state, &mut cache)?;
    }
    debug!(
        steps = state.steps,
        builds = cache.build_count(),
        "run finished"
    );
    Ok(state)
}
