//! Uniform 1-D cell-centered mesh.

use crate::error::{FvmError, FvmResult};
use sndr_core::Real;

/// Uniform 1-D mesh; immutable once built.
///
/// Cell 0 is the interface-adjacent cell, cell `nx - 1` the far-boundary
/// cell. Faces sit halfway between cell centers, with half-cell spacing to
/// the two domain boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid1d {
    nx: usize,
    dx: Real,
}

impl Grid1d {
    pub fn new(nx: usize, dx: Real) -> FvmResult<Self> {
        if nx == 0 {
            return Err(FvmError::InvalidArg {
                what: "nx must be positive",
            });
        }
        Ok(Self { nx, dx })
    }

    pub fn cell_count(&self) -> usize {
        self.nx
    }

    pub fn cell_width(&self) -> Real {
        self.dx
    }

    /// Total domain length.
    pub fn length(&self) -> Real {
        self.nx as Real * self.dx
    }

    /// Center coordinate of cell `i`.
    pub fn cell_center(&self, i: usize) -> Real {
        (i as Real + 0.5) * self.dx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry() {
        let mesh = Grid1d::new(4, 0.25).unwrap();
        assert_eq!(mesh.cell_count(), 4);
        assert_eq!(mesh.length(), 1.0);
        assert_eq!(mesh.cell_center(0), 0.125);
        assert_eq!(mesh.cell_center(3), 0.875);
    }

    #[test]
    fn zero_cells_rejected() {
        assert!(Grid1d::new(0, 1.0).is_err());
    }
}
