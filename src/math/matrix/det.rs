//! Determinant strategies
//!
//! [`CofactorExpansion`] is the reference algorithm: Laplace expansion along
//! row 0, recursing into minors. It performs `O(n!)` work, which is fine for
//! the small matrices the adjugate inverse is meant for and hopeless beyond
//! roughly 10×10. [`LuDecomposition`] computes the same value in `O(n³)` by
//! elimination with partial pivoting; results agree up to rounding.

use log::{debug, trace};

use super::Matrix;
use crate::error::Result;
use crate::math::Real;

/// Algorithm computing the determinant of a square matrix.
pub trait Determinant<F> {
    /// Determinant of `matrix`.
    ///
    /// Fails with [`crate::LinalgError::NotSquare`] for rectangular input.
    fn det(&self, matrix: &Matrix<F>) -> Result<F>;
}

/// Recursive Laplace expansion along the first row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CofactorExpansion;

/// Gaussian elimination with partial pivoting; the determinant is the signed
/// product of the pivots.
#[derive(Debug, Clone, Copy, Default)]
pub struct LuDecomposition;

impl<F: Real> Determinant<F> for CofactorExpansion {
    fn det(&self, matrix: &Matrix<F>) -> Result<F> {
        matrix.require_square()?;
        Ok(expand(matrix))
    }
}

fn expand<F: Real>(m: &Matrix<F>) -> F {
    let n = m.row_count();
    trace!("cofactor expansion of a {n}x{n} matrix");
    match n {
        1 => m.get_element(0, 0),
        2 => m.get_element(0, 0) * m.get_element(1, 1) - m.get_element(0, 1) * m.get_element(1, 0),
        _ => (0..n).fold(F::zero(), |acc, j| {
            acc + F::alternating(j) * m.get_element(0, j) * expand(&m.sub_matrix(0, j))
        }),
    }
}

impl<F: Real> Determinant<F> for LuDecomposition {
    #[allow(clippy::float_cmp)]
    fn det(&self, matrix: &Matrix<F>) -> Result<F> {
        matrix.require_square()?;
        let n = matrix.row_count();
        let mut a = matrix.rows().to_vec();
        let mut det = F::one();

        for k in 0..n {
            let p = (k..n)
                .reduce(|best, i| if a[i][k].abs() > a[best][k].abs() { i } else { best })
                .unwrap_or(k);
            if a[p][k] == F::zero() {
                return Ok(F::zero());
            }
            if p != k {
                a.swap(p, k);
                det = -det;
            }

            let pivot = a[k][k];
            det = det * pivot;
            let (upper, lower) = a.split_at_mut(k + 1);
            let pivot_row = &upper[k];
            for row in lower {
                let factor = row[k] / pivot;
                row.iter_mut()
                    .zip(pivot_row)
                    .skip(k)
                    .for_each(|(x, &u)| *x = *x - factor * u);
            }
        }

        Ok(det)
    }
}

impl<F: Real> Matrix<F> {
    /// Determinant by cofactor expansion.
    ///
    /// Exponential in the matrix size; see [`Matrix::det_with`] for the
    /// `O(n³)` alternative.
    pub fn det(&self) -> Result<F> {
        self.det_with(&CofactorExpansion)
    }

    /// Determinant computed by `strategy`.
    pub fn det_with(&self, strategy: &impl Determinant<F>) -> Result<F> {
        debug!(
            "determinant of a {}x{} matrix via {}",
            self.row_count(),
            self.column_count(),
            std::any::type_name_of_val(strategy)
        );
        strategy.det(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LinalgError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn two_by_two() {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_abs_diff_eq!(m.det().unwrap(), -2.0);
        assert_abs_diff_eq!(m.det_with(&LuDecomposition).unwrap(), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn one_by_one_is_its_entry() {
        assert_abs_diff_eq!(Matrix::from([[-3.5]]).det().unwrap(), -3.5);
    }

    #[test]
    fn three_by_three_expansion() {
        let m = Matrix::from([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_abs_diff_eq!(m.det().unwrap(), -306.0, epsilon = 1e-9);
    }

    #[test]
    fn identity_has_unit_determinant() {
        for n in 1..=6 {
            let id = Matrix::<f64>::identity(n);
            assert_abs_diff_eq!(id.det().unwrap(), 1.0);
            assert_abs_diff_eq!(id.det_with(&LuDecomposition).unwrap(), 1.0);
        }
    }

    #[test]
    fn zero_row_gives_zero() {
        let m = Matrix::from([[1.0, 2.0, 3.0], [0.0, 0.0, 0.0], [7.0, 8.0, 9.0]]);
        assert_abs_diff_eq!(m.det().unwrap(), 0.0);
        assert_abs_diff_eq!(m.det_with(&LuDecomposition).unwrap(), 0.0);
    }

    #[test]
    fn row_swap_flips_sign() {
        let m = Matrix::from([[0.0, 1.0], [1.0, 0.0]]);
        assert_abs_diff_eq!(m.det().unwrap(), -1.0);
        assert_abs_diff_eq!(m.det_with(&LuDecomposition).unwrap(), -1.0);
    }

    #[test]
    fn rectangular_matrix_is_rejected() {
        let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert!(matches!(m.det(), Err(LinalgError::NotSquare { rows: 2, columns: 3 })));
        assert!(matches!(
            m.det_with(&LuDecomposition),
            Err(LinalgError::NotSquare { rows: 2, columns: 3 })
        ));
    }

    #[test]
    fn strategies_agree_on_random_matrices() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
        for n in 1..=6 {
            let m = Matrix::<f64>::rand(n, n, &mut rng);
            let cofactor = m.det().unwrap();
            let lu = m.det_with(&LuDecomposition).unwrap();
            assert_relative_eq!(cofactor, lu, epsilon = 1e-10, max_relative = 1e-9);
        }
    }

    #[test]
    fn transpose_preserves_determinant() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let m = Matrix::<f64>::rand(4, 4, &mut rng);
        assert_relative_eq!(m.det().unwrap(), m.transpose().det().unwrap(), epsilon = 1e-12);
    }
}
