//! Discretized scalar fields over a 1-D mesh.

use crate::error::{FvmError, FvmResult};
use sndr_core::Real;
use crate::mesh::Grid1d;
use nalgebra::DVector;

/// A cell-centered scalar field.
///
/// Holds the current iterate, an optional previous-time-step copy (committed
/// once per outer step via [`CellField::update_old`]), and an optional
/// Dirichlet constraint pinning the far (rightmost) boundary face.
#[derive(Debug, Clone)]
pub struct CellField {
    values: DVector<Real>,
    old: Option<DVector<Real>>,
    far_constraint: Option<Real>,
}

impl CellField {
    /// Create a field initialized to a uniform value.
    pub fn new(mesh: &Grid1d, initial: Real, track_old: bool) -> Self {
        let values = DVector::from_element(mesh.cell_count(), initial);
        let old = track_old.then(|| values.clone());
        Self {
            values,
            old,
            far_constraint: None,
        }
    }

    /// Pin the far boundary face to a fixed value.
    pub fn constrain_far(&mut self, value: Real) {
        self.far_constraint = Some(value);
    }

    pub fn far_constraint(&self) -> Option<Real> {
        self.far_constraint
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.len() == 0
    }

    pub fn value_at(&self, i: usize) -> FvmResult<Real> {
        if i >= self.values.len() {
            return Err(FvmError::InvalidArg {
                what: "cell index out of range",
            });
        }
        Ok(self.values[i])
    }

    /// Value of the interface-adjacent cell (cell 0).
    pub fn interface_value(&self) -> Real {
        self.values[0]
    }

    /// Value of the far-boundary cell (last cell).
    pub fn far_value(&self) -> Real {
        self.values[self.values.len() - 1]
    }

    /// Commit the current value as the new previous-time value.
    pub fn update_old(&mut self) {
        if let Some(old) = self.old.as_mut() {
            old.copy_from(&self.values);
        }
    }

    pub(crate) fn values(&self) -> &DVector<Real> {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut DVector<Real> {
        &mut self.values
    }

    /// Previous-time values; falls back to the current values when the field
    /// was created without tracking.
    pub(crate) fn old_values(&self) -> &DVector<Real> {
        self.old.as_ref().unwrap_or(&self.values)
    }
}
