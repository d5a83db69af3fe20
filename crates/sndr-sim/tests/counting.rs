//! Integration test: step/sweep bookkeeping.
//!
//! A run with `max_steps = 5`, `max_sweeps = 3` must perform exactly 15
//! sweep invocations, end with a step counter of 5, record exactly one
//! time-series sample per completed step, and assemble each discretized
//! operator exactly once.

use sndr_core::{Params, Real, Tolerances, nearly_equal};
use sndr_sim::{EquationCache, init_state, run, step};

fn small_params() -> Params {
    Params {
        nx: 5,
        max_steps: 5,
        max_sweeps: 3,
        output: false,
        ..Params::default()
    }
}

#[test]
fn fixed_budgets_are_honored_exactly() {
    let params = small_params();
    let mut state = init_state(&params).unwrap();
    let mut cache = EquationCache::new();

    let mut total_sweeps = 0;
    for _ in 0..params.max_steps {
        let reports = step(&params, &mut state, &mut cache).unwrap();
        assert_eq!(reports.len(), 3);
        for (i, rep) in reports.iter().enumerate() {
            assert_eq!(rep.sweep, i + 1);
        }
        total_sweeps += reports.len();
    }

    assert_eq!(state.steps, 5);
    assert_eq!(total_sweeps, 15);
    assert_eq!(state.sweeps, 3);

    assert_eq!(state.series.len(), 5);
    assert_eq!(state.series.sup.len(), 5);
    assert_eq!(state.series.cupric.len(), 5);
    assert_eq!(state.series.theta.len(), 5);
    assert_eq!(state.series.eta.len(), 5);

    // One suppressor and one cupric operator for the whole run.
    assert_eq!(cache.build_count(), 2);
}

#[test]
fn run_driver_matches_manual_stepping() {
    let params = small_params();
    let from_run = run(&params).unwrap();

    let mut state = init_state(&params).unwrap();
    let mut cache = EquationCache::new();
    for _ in 0..params.max_steps {
        step(&params, &mut state, &mut cache).unwrap();
    }

    assert_eq!(from_run.steps, state.steps);
    assert_eq!(from_run.theta, state.theta);
    assert_eq!(from_run.series.theta, state.series.theta);
    assert_eq!(from_run.series.eta, state.series.eta);
}

#[test]
fn potential_ramps_across_recorded_steps() {
    let params = small_params();
    let state = run(&params).unwrap();

    // Early in the default ramp, eta grows linearly with the step index.
    let tol = Tolerances::default();
    for (i, &eta) in state.series.eta.iter().enumerate() {
        let expected = params.v0 + params.vm * (i as Real * params.dt);
        assert!(nearly_equal(eta, expected, tol));
    }
    // Coverage stays a physical fraction under the base parameters.
    for &theta in &state.series.theta {
        assert!((0.0..=1.0).contains(&theta));
    }
}
