//! Implicit 1-D diffusion equation with a left-boundary reaction flux.
//!
//! Discretizes, per cell `i` of a uniform mesh,
//!
//! ```text
//! (c_i - c_i_old)/dt = D (c_{i+1} - 2 c_i + c_{i-1})/dx^2 + flux c_i / dx
//! ```
//!
//! where the flux source acts on cell 0 only and enters implicitly (it
//! multiplies the unknown, so it lands on the matrix diagonal). The left
//! domain face is no-flux; the right face honors the field's Dirichlet
//! constraint through a half-cell ghost distance. One `sweep` is one linear
//! solve of the frozen-coefficient system via the Thomas algorithm.

use crate::error::{FvmError, FvmResult};
use crate::field::CellField;
use crate::mesh::Grid1d;
use nalgebra::DVector;
use sndr_core::Real;

/// Assembled-once implicit diffusion operator.
///
/// The constant geometry/diffusion coefficients are computed at construction;
/// only the boundary flux magnitude changes between sweeps, via
/// [`DiffusionEquation::set_flux`].
#[derive(Debug, Clone)]
pub struct DiffusionEquation {
    nx: usize,
    dx: Real,
    diff: Real,
    /// Off-diagonal coupling, `-D/dx^2`.
    off_diag: Real,
    /// Diffusion contribution to the diagonal, per cell.
    diag_diff: DVector<Real>,
    /// Current boundary flux magnitude (applied to cell 0).
    flux: Real,
}

impl DiffusionEquation {
    /// Assemble the constant part of the operator for a given mesh and
    /// diffusion coefficient.
    pub fn new(mesh: &Grid1d, diff: Real) -> Self {
        let nx = mesh.cell_count();
        let dx = mesh.cell_width();
        let w = diff / (dx * dx);

        // Interior cells see two faces, end cells one. The far-boundary face
        // term is added at sweep time only when the field is constrained.
        let mut diag_diff = DVector::from_element(nx, 2.0 * w);
        diag_diff[0] = w;
        diag_diff[nx - 1] = w;
        if nx == 1 {
            diag_diff[0] = 0.0;
        }

        Self {
            nx,
            dx,
            diff,
            off_diag: -w,
            diag_diff,
            flux: 0.0,
        }
    }

    /// Update the boundary flux magnitude for the next sweep.
    pub fn set_flux(&mut self, value: Real) {
        self.flux = value;
    }

    pub fn flux(&self) -> Real {
        self.flux
    }

    /// Advance the field one implicit sweep toward convergence.
    ///
    /// The residual is the L2 norm of `A x - b` evaluated at the pre-sweep
    /// iterate, before the solve overwrites the field. It is surfaced but
    /// never compared against a tolerance here.
    pub fn sweep(&self, field: &mut CellField, dt: Real) -> FvmResult<Real> {
        if field.len() != self.nx {
            return Err(FvmError::MeshMismatch {
                field_cells: field.len(),
                eqn_cells: self.nx,
            });
        }

        let n = self.nx;
        let inv_dt = 1.0 / dt;
        let ghost = 2.0 * self.diff / (self.dx * self.dx);

        let mut diag = DVector::from_element(n, 0.0);
        let mut rhs = DVector::from_element(n, 0.0);
        {
            let old = field.old_values();
            for i in 0..n {
                diag[i] = inv_dt + self.diag_diff[i];
                rhs[i] = old[i] * inv_dt;
            }
        }
        // Implicit boundary source on the interface-adjacent cell.
        diag[0] -= self.flux / self.dx;
        if let Some(far) = field.far_constraint() {
            diag[n - 1] += ghost;
            rhs[n - 1] += ghost * far;
        }

        let residual = self.residual_norm(field.values(), &diag, &rhs);

        let solution = thomas_solve(&diag, self.off_diag, &rhs)?;
        field.values_mut().copy_from(&solution);

        Ok(residual)
    }

    /// L2 norm of `A x - b` for the tridiagonal system.
    fn residual_norm(&self, x: &DVector<Real>, diag: &DVector<Real>, rhs: &DVector<Real>) -> Real {
        let n = self.nx;
        let mut acc = 0.0;
        for i in 0..n {
            let mut r = diag[i] * x[i] - rhs[i];
            if i > 0 {
                r += self.off_diag * x[i - 1];
            }
            if i + 1 < n {
                r += self.off_diag * x[i + 1];
            }
            acc += r * r;
        }
        acc.sqrt()
    }
}

/// Solve a symmetric-pattern tridiagonal system with constant off-diagonals.
fn thomas_solve(diag: &DVector<Real>, off: Real, rhs: &DVector<Real>) -> FvmResult<DVector<Real>> {
    let n = diag.len();
    let mut c_prime = DVector::from_element(n, 0.0);
    let mut d_prime = DVector::from_element(n, 0.0);

    if diag[0] == 0.0 {
        return Err(FvmError::Numeric {
            what: "zero pivot in tridiagonal solve",
        });
    }
    c_prime[0] = off / diag[0];
    d_prime[0] = rhs[0] / diag[0];

    for i in 1..n {
        let denom = diag[i] - off * c_prime[i - 1];
        if denom == 0.0 {
            return Err(FvmError::Numeric {
                what: "zero pivot in tridiagonal solve",
            });
        }
        c_prime[i] = off / denom;
        d_prime[i] = (rhs[i] - off * d_prime[i - 1]) / denom;
    }

    let mut x = DVector::from_element(n, 0.0);
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = d_prime[i] - c_prime[i] * x[i + 1];
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh(nx: usize) -> Grid1d {
        Grid1d::new(nx, 1.0 / nx as Real).unwrap()
    }

    #[test]
    fn relaxes_to_far_value_with_no_flux() {
        // No-flux left + Dirichlet right + huge dt: steady state is uniform.
        let mesh = mesh(10);
        let mut field = CellField::new(&mesh, 0.0, true);
        field.constrain_far(1.0);
        let eqn = DiffusionEquation::new(&mesh, 1.0);
        eqn.sweep(&mut field, 1e12).unwrap();
        for i in 0..field.len() {
            assert!((field.value_at(i).unwrap() - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn residual_collapses_after_exact_solve() {
        // The system is linear in the field, so the second sweep with
        // unchanged flux and old values starts from the exact solution.
        let mesh = mesh(20);
        let mut field = CellField::new(&mesh, 0.0, true);
        field.constrain_far(1.0);
        let mut eqn = DiffusionEquation::new(&mesh, 0.5);
        eqn.set_flux(-2.0);
        let first = eqn.sweep(&mut field, 0.1).unwrap();
        let second = eqn.sweep(&mut field, 0.1).unwrap();
        assert!(first > 0.0);
        assert!(second < 1e-9 * first.max(1.0));
    }

    #[test]
    fn negative_flux_depresses_interface() {
        let mesh = mesh(50);
        let mut field = CellField::new(&mesh, 1.0, true);
        field.constrain_far(1.0);
        let mut eqn = DiffusionEquation::new(&mesh, 1.0);
        eqn.set_flux(-5.0);
        eqn.sweep(&mut field, 1e6).unwrap();
        assert!(field.interface_value() < field.far_value());
        assert!(field.interface_value() >= 0.0);
    }

    #[test]
    fn mesh_mismatch_is_an_error() {
        let m5 = mesh(5);
        let m6 = mesh(6);
        let mut field = CellField::new(&m5, 0.0, false);
        let eqn = DiffusionEquation::new(&m6, 1.0);
        assert!(matches!(
            eqn.sweep(&mut field, 1.0),
            Err(FvmError::MeshMismatch { .. })
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn thomas_solution_satisfies_system(
                diag in prop::collection::vec(2.5_f64..10.0, 2..30),
                rhs_vals in prop::collection::vec(-5.0_f64..5.0, 30),
            ) {
                // Diagonally dominant by construction (|off| = 1 < 2.5).
                let n = diag.len();
                let diag = DVector::from_vec(diag);
                let rhs = DVector::from_vec(rhs_vals[..n].to_vec());
                let x = thomas_solve(&diag, -1.0, &rhs).unwrap();
                for i in 0..n {
                    let mut lhs = diag[i] * x[i];
                    if i > 0 {
                        lhs += -1.0 * x[i - 1];
                    }
                    if i + 1 < n {
                        lhs += -1.0 * x[i + 1];
                    }
                    prop_assert!((lhs - rhs[i]).abs() < 1e-8);
                }
            }
        }
    }

    #[test]
    fn untracked_field_uses_current_as_old() {
        let mesh = mesh(4);
        let mut field = CellField::new(&mesh, 2.0, false);
        let eqn = DiffusionEquation::new(&mesh, 1.0);
        // Uniform field, no constraint, no flux: nothing should move.
        eqn.sweep(&mut field, 1.0).unwrap();
        for i in 0..4 {
            assert!((field.value_at(i).unwrap() - 2.0).abs() < 1e-12);
        }
    }
}
