//! Interface coverage (theta) update.
//!
//! Not mesh-based: a single-cell implicit equation advanced by a closed-form
//! linearized update. The `new^2` and `new * j1` terms freeze the previous
//! sweep's iterate as a coefficient, so repeated sweeps form a Picard
//! iteration toward the implicit solution within the current time step.

use sndr_core::{Params, Real};

/// Fractional coverage pair: `old` committed at the step boundary, `new`
/// iterated across sweeps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThetaPair {
    pub new: Real,
    pub old: Real,
}

impl ThetaPair {
    pub fn uniform(value: Real) -> Self {
        Self {
            new: value,
            old: value,
        }
    }

    /// Commit the current iterate as the step-boundary value.
    pub fn commit(&mut self) {
        self.old = self.new;
    }
}

/// One Picard sweep of the coverage equation.
///
/// `sup_left` is the interface-adjacent suppressor concentration; `j0`, `j1`
/// the kinetics rates evaluated from the same pre-sweep snapshot. Returns the
/// updated pair and the absolute change in the iterate. The formula never
/// clamps; stability on `[0, 1]` comes from the fixed point itself.
pub fn update(
    params: &Params,
    theta: &ThetaPair,
    sup_left: Real,
    j0: Real,
    j1: Real,
) -> (ThetaPair, Real) {
    let adsorption = params.k_plus * sup_left;
    let numerator =
        theta.old + params.dt * (adsorption + theta.new * theta.new * params.k_minus * j0);
    let denominator = 1.0 + params.dt * (adsorption + params.k_minus * (j0 + theta.new * j1));
    let next = numerator / denominator;
    let residual = (next - theta.new).abs();
    (
        ThetaPair {
            new: next,
            old: theta.old,
        },
        residual,
    )
}
