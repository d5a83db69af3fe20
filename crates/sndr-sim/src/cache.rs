//! Per-run memoization of discretized diffusion operators.
//!
//! Operator assembly is the expensive fixed cost; only the boundary-flux
//! magnitude changes between sweeps. The cache is an explicit object owned by
//! the simulation driver and keyed by a value hash of `(params, mesh)` plus
//! the species, so one process can run independent parameter sets without
//! cross-contamination. It is never a process-wide singleton.

use sndr_core::{Params, Real};
use sndr_fvm::{DiffusionEquation, Grid1d};
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// The two diffusing bulk species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Suppressor,
    Cupric,
}

impl Species {
    pub fn diffusivity(self, params: &Params) -> Real {
        match self {
            Species::Suppressor => params.diff_sup,
            Species::Cupric => params.diff_cupric,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    params_hash: u64,
    mesh_hash: u64,
    species: Species,
}

fn mesh_hash(mesh: &Grid1d) -> u64 {
    let mut hasher = std::hash::DefaultHasher::new();
    mesh.cell_count().hash(&mut hasher);
    mesh.cell_width().to_bits().hash(&mut hasher);
    hasher.finish()
}

/// Cache of assembled diffusion equations, one per `(params, mesh, species)`.
#[derive(Debug, Default)]
pub struct EquationCache {
    entries: HashMap<CacheKey, DiffusionEquation>,
    builds: usize,
}

impl EquationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the cached equation for this key, assembling it on first use.
    ///
    /// The returned equation keeps its flux magnitude across calls; callers
    /// refresh it with `set_flux` before each sweep.
    pub fn get_or_build(
        &mut self,
        params: &Params,
        mesh: &Grid1d,
        species: Species,
    ) -> &mut DiffusionEquation {
        let key = CacheKey {
            params_hash: params.value_hash(),
            mesh_hash: mesh_hash(mesh),
            species,
        };
        let builds = &mut self.builds;
        self.entries.entry(key).or_insert_with(|| {
            *builds += 1;
            DiffusionEquation::new(mesh, species.diffusivity(params))
        })
    }

    /// Number of operator assemblies performed so far.
    pub fn build_count(&self) -> usize {
        self.builds
    }

    /// Drop every cached operator, forcing reassembly on next use.
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }
}
