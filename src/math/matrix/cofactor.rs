use log::debug;

use super::Matrix;
use crate::error::{LinalgError, Result};
use crate::math::Real;

impl<F: Real> Matrix<F> {
    /// Matrix whose entry `(i, j)` is the determinant of `sub_matrix(i, j)`.
    ///
    /// A `1×1` matrix has the single empty minor, whose determinant is `1`.
    pub fn minors_matrix(&self) -> Result<Self> {
        self.require_square()?;
        if self.row_count() == 1 {
            return Ok(Self::identity(1));
        }
        let n = self.row_count();
        let mut minors = Vec::with_capacity(n);
        for i in 0..n {
            let row = (0..n)
                .map(|j| self.sub_matrix(i, j).det())
                .collect::<Result<Vec<F>>>()?;
            minors.push(row);
        }
        Ok(Self::from_rows_unchecked(minors))
    }

    /// Minors with the checkerboard sign `(-1)^(i+j)` applied.
    pub fn cofactors_matrix(&self) -> Result<Self> {
        let minors = self.minors_matrix()?;
        Ok(Self::from_fn(minors.row_count(), minors.column_count(), |i, j| {
            F::alternating(i + j) * minors.get_element(i, j)
        }))
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Self> {
        Ok(self.cofactors_matrix()?.transpose())
    }

    /// Inverse via `adjugate / det`.
    ///
    /// Fails with [`LinalgError::NotSquare`] for rectangular input and with
    /// [`LinalgError::Singular`] when the determinant is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn inverse(&self) -> Result<Self> {
        let det = self.det()?;
        if det == F::zero() {
            return Err(LinalgError::Singular);
        }
        debug!("inverting {}x{} matrix with determinant {det:?}", self.row_count(), self.column_count());
        let mut adj = self.adjugate()?;
        adj.el_divide(det);
        Ok(adj)
    }
}
