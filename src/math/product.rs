//! Matrix products
//!
//! Every output cell is the dot product of a row of the left operand with a
//! column of the right one. Chained products fold strictly left to right,
//! `((M₁·M₂)·M₃)·…`, without reordering for cost, so a shape mismatch is
//! reported at the first incompatible pair.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{LinalgError, Result};
use super::{Matrix, Real, Vect};

/// Product `a · b`.
///
/// Fails with [`LinalgError::DimensionMismatch`] carrying both shapes when
/// `a.column_count() != b.row_count()`.
pub fn multiply<F: Real>(a: &Matrix<F>, b: &Matrix<F>) -> Result<Matrix<F>> {
    if a.column_count() != b.row_count() {
        return Err(LinalgError::DimensionMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }

    let columns: Vec<Vect<F>> = (0..b.column_count()).map(|j| b.get_column(j)).collect();
    let row_times_columns = |i: usize| -> Result<Vec<F>> {
        let row = a.get_row(i);
        columns.iter().map(|column| row.dot(column)).collect()
    };

    #[cfg(feature = "rayon")]
    let rows = (0..a.row_count())
        .into_par_iter()
        .map(row_times_columns)
        .collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "rayon"))]
    let rows = (0..a.row_count())
        .map(row_times_columns)
        .collect::<Result<Vec<_>>>()?;

    Ok(Matrix::from_rows_unchecked(rows))
}

/// Left-to-right product of two or more matrices.
///
/// Fails with [`LinalgError::InvalidArgument`] when fewer than two matrices
/// are given.
pub fn multiply_all<F: Real>(matrices: &[&Matrix<F>]) -> Result<Matrix<F>> {
    match matrices {
        [first, second, rest @ ..] => rest
            .iter()
            .try_fold(multiply(*first, *second)?, |acc, m| multiply(&acc, *m)),
        _ => Err(LinalgError::InvalidArgument(
            "matrix multiplication needs at least two matrices",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Shape;
    use approx::assert_abs_diff_eq;
    use itertools::iproduct;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn assert_close(a: &Matrix, b: &Matrix, eps: f64) {
        assert_eq!(a.size(), b.size());
        for (i, j) in iproduct!(0..a.row_count(), 0..a.column_count()) {
            assert_abs_diff_eq!(a.get_element(i, j), b.get_element(i, j), epsilon = eps);
        }
    }

    #[test]
    fn rectangular_product() {
        let a = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from([[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]);
        let ab = multiply(&a, &b).unwrap();
        assert_eq!(ab, Matrix::from([[58.0, 64.0], [139.0, 154.0]]));
    }

    #[test]
    fn shape_mismatch_reports_both_operands() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(2, 3);
        match multiply(&a, &b) {
            Err(LinalgError::DimensionMismatch { left, right }) => {
                assert_eq!(left, Shape::Matrix(2, 3));
                assert_eq!(right, Shape::Matrix(2, 3));
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn identity_is_neutral() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        for n in 1..=5 {
            let m = Matrix::<f64>::rand(n, n, &mut rng);
            let id = Matrix::identity(n);
            assert_close(&multiply(&m, &id).unwrap(), &m, 1e-15);
            assert_close(&multiply(&id, &m).unwrap(), &m, 1e-15);
        }
    }

    #[test]
    fn chained_product_folds_left() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(17);
        let a = Matrix::<f64>::rand(2, 3, &mut rng);
        let b = Matrix::<f64>::rand(3, 4, &mut rng);
        let c = Matrix::<f64>::rand(4, 1, &mut rng);
        let chained = multiply_all(&[&a, &b, &c]).unwrap();
        let by_hand = multiply(&multiply(&a, &b).unwrap(), &c).unwrap();
        assert_eq!(chained, by_hand);
        assert_eq!(chained.size(), (2, 1));
    }

    #[test]
    fn chained_product_fails_at_first_bad_pair() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(3, 4);
        let c = Matrix::<f64>::zeros(5, 1);
        match multiply_all(&[&a, &b, &c]) {
            Err(LinalgError::DimensionMismatch { left, right }) => {
                assert_eq!(left, Shape::Matrix(2, 4));
                assert_eq!(right, Shape::Matrix(5, 1));
            }
            other => panic!("expected DimensionMismatch, got {other:?}"),
        }
    }

    #[test]
    fn chained_product_needs_two_matrices() {
        let a = Matrix::<f64>::identity(2);
        assert!(matches!(multiply_all(&[&a]), Err(LinalgError::InvalidArgument(_))));
        assert!(matches!(multiply_all::<f64>(&[]), Err(LinalgError::InvalidArgument(_))));
        assert_eq!(multiply_all(&[&a, &a]).unwrap(), a);
    }
}
