//! The immutable parameter set driving a simulation run.
//!
//! Every component receives `Params` by reference and is a pure function of
//! it plus transient state. Defaults are the base S-NDR copper deposition
//! values; a YAML file may override any subset of fields.

use crate::numeric::Real;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Params {
    /// Suppressor diffusion coefficient (m^2/s)
    pub diff_sup: Real,
    /// Cupric ion diffusion coefficient (m^2/s)
    pub diff_cupric: Real,
    /// Far-field cupric concentration (mol/m^3)
    pub cupric_inf: Real,
    /// Far-field suppressor concentration (mol/m^3)
    pub sup_inf: Real,
    /// Domain size (m)
    pub delta: Real,
    /// Suppressor consumption coefficient (mol/m^2)
    pub gamma: Real,
    /// Adsorption rate constant (m^3/mol/s)
    pub k_plus: Real,
    /// Desorption rate constant (1/m)
    pub k_minus: Real,
    /// Exchange current density, bare surface (A/m^2)
    pub j0: Real,
    /// Exchange current density, covered surface (A/m^2)
    pub j1: Real,
    /// Butler-Volmer transfer coefficient
    pub alpha: Real,
    /// Electrons transferred per reaction
    pub n: Real,
    /// Molar volume of copper (m^3/mol)
    pub omega: Real,
    /// Faraday constant (C/mol)
    pub faraday: Real,
    /// Ramp start/rest potential (V)
    pub v0: Real,
    /// Switch potential (V), reserved for hysteresis studies
    pub vs: Real,
    /// Ramp rate (V/s)
    pub vm: Real,
    /// Total ramp time (s)
    pub tf: Real,
    /// Inner fixed-point iterations per time step
    pub max_sweeps: usize,
    /// Outer time steps per run
    pub max_steps: usize,
    /// Initial interface coverage
    pub theta_ini: Real,
    /// Initial bulk suppressor concentration
    pub sup_ini: Real,
    /// Initial bulk cupric concentration
    pub cupric_ini: Real,
    /// Cell count of the 1-D mesh
    pub nx: usize,
    /// Time step (s)
    pub dt: Real,
    /// Emit the per-sweep console table
    pub output: bool,
    /// Temperature (K)
    pub temperature: Real,
    /// Gas constant (J/mol/K)
    pub gas_constant: Real,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            diff_sup: 9.2e-11,
            diff_cupric: 2.65e-10,
            cupric_inf: 240.0,
            sup_inf: 0.01,
            delta: 1e-6,
            gamma: 2.5e-7,
            k_plus: 2300.0,
            k_minus: 3.79e7,
            j0: 20.0,
            j1: 1e-3,
            alpha: 0.4,
            n: 2.0,
            omega: 7.2e-6,
            faraday: 96485.332,
            v0: 0.0,
            vs: -0.325,
            vm: 0.01,
            tf: 65.0,
            max_sweeps: 4,
            max_steps: 400,
            theta_ini: 0.0,
            sup_ini: 0.0,
            cupric_ini: 0.0,
            nx: 100,
            dt: 1e-3,
            output: true,
            temperature: 270.0,
            gas_constant: 8.314,
        }
    }
}

impl Params {
    /// Value hash over every field, used to key per-run caches.
    ///
    /// Floats are hashed by bit pattern, so two parameter sets collide only
    /// when they are bitwise identical.
    pub fn value_hash(&self) -> u64 {
        let mut hasher = std::hash::DefaultHasher::new();
        for v in [
            self.diff_sup,
            self.diff_cupric,
            self.cupric_inf,
            self.sup_inf,
            self.delta,
            self.gamma,
            self.k_plus,
            self.k_minus,
            self.j0,
            self.j1,
            self.alpha,
            self.n,
            self.omega,
            self.faraday,
            self.v0,
            self.vs,
            self.vm,
            self.tf,
            self.theta_ini,
            self.sup_ini,
            self.cupric_ini,
            self.dt,
        ] {
            v.to_bits().hash(&mut hasher);
        }
        self.max_sweeps.hash(&mut hasher);
        self.max_steps.hash(&mut hasher);
        self.nx.hash(&mut hasher);
        self.output.hash(&mut hasher);
        self.temperature.to_bits().hash(&mut hasher);
        self.gas_constant.to_bits().hash(&mut hasher);
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_base_values() {
        let p = Params::default();
        assert_eq!(p.max_sweeps, 4);
        assert_eq!(p.max_steps, 400);
        assert_eq!(p.nx, 100);
        assert_eq!(p.faraday, 96485.332);
        assert!(p.output);
    }

    #[test]
    fn value_hash_distinguishes_params() {
        let a = Params::default();
        let b = Params {
            dt: 2e-3,
            ..Params::default()
        };
        assert_eq!(a.value_hash(), Params::default().value_hash());
        assert_ne!(a.value_hash(), b.value_hash());
    }

    #[test]
    fn partial_yaml_overrides_defaults() {
        let p: Params = serde_yaml::from_str("dt: 0.5\nnx: 10\noutput: false\n").unwrap();
        assert_eq!(p.dt, 0.5);
        assert_eq!(p.nx, 10);
        assert!(!p.output);
        assert_eq!(p.k_plus, 2300.0);
    }
}
