//! Simulation state threaded through sweeps and steps.

use crate::theta::ThetaPair;
use sndr_core::Real;
use sndr_fvm::{CellField, Grid1d};

/// Append-only per-quantity sample buffers, one entry per completed step.
///
/// Recorded with converged post-sweep values; read only by the reporting
/// layer, never by the core.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    pub sup: Vec<Real>,
    pub cupric: Vec<Real>,
    pub theta: Vec<Real>,
    pub eta: Vec<Real>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sup: Real, cupric: Real, theta: Real, eta: Real) {
        self.sup.push(sup);
        self.cupric.push(cupric);
        self.theta.push(theta);
        self.eta.push(eta);
    }

    /// Number of completed steps sampled so far.
    pub fn len(&self) -> usize {
        self.theta.len()
    }

    pub fn is_empty(&self) -> bool {
        self.theta.is_empty()
    }
}

/// All coupled quantities of one run.
///
/// Owned by the simulation driver for the run's duration; mutated only at
/// the sweep/step commit points.
#[derive(Debug, Clone)]
pub struct SimState {
    pub mesh: Grid1d,
    /// Bulk suppressor concentration field.
    pub sup: CellField,
    /// Bulk cupric concentration field.
    pub cupric: CellField,
    /// Interface coverage.
    pub theta: ThetaPair,
    /// Potential, recomputed once per step and held fixed across its sweeps.
    pub eta: Real,
    /// Sweeps completed within the current step; resets at step boundaries.
    pub sweeps: usize,
    /// Completed outer steps.
    pub steps: usize,
    pub series: TimeSeries,
}

impl SimState {
    /// Record one time-series sample from the current (post-sweep) values.
    pub fn record_sample(&mut self) {
        let sup = self.sup.interface_value();
        let cupric = self.cupric.interface_value();
        let (theta, eta) = (self.theta.new, self.eta);
        self.series.push(sup, cupric, theta, eta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_appends_in_order() {
        let mut series = TimeSeries::new();
        series.push(1.0, 2.0, 3.0, 4.0);
        series.push(5.0, 6.0, 7.0, 8.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.sup, vec![1.0, 5.0]);
        assert_eq!(series.eta, vec![4.0, 8.0]);
    }
}
