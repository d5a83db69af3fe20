use crate::error::{CoreError, CoreResult};

/// Scalar type shared by the transport fields, kinetics, and reports.
pub type Real = f64;

/// Absolute/relative pair for comparing quantities that span the scales
/// in play here: coverage sits near 1 while fluxes sit near 1e-9.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Passes `v` through unchanged, or names the offending quantity.
pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_handles_coverage_and_flux_scales() {
        let tol = Tolerances::default();
        // Coverage-sized values resolve through the relative branch.
        assert!(nearly_equal(0.9999999, 0.9999999 + 1e-10, tol));
        assert!(!nearly_equal(0.5, 0.5001, tol));
        // Flux-sized values land inside the absolute floor.
        assert!(nearly_equal(1.0e-13, 1.5e-13, tol));
    }

    #[test]
    fn ensure_finite_passes_values_and_names_failures() {
        assert_eq!(ensure_finite(0.73, "coverage").unwrap(), 0.73);
        let err = ensure_finite(Real::NAN, "coverage").unwrap_err();
        assert!(format!("{err}").contains("coverage"));
    }
}
