//! Dense row-major matrices
//!
//! A [`Matrix`] owns a rectangular grid of at least one row and one column.
//! Every derived matrix (transpose, minor, row reduction, product) is a fresh
//! allocation: rows and columns come out as copied [`Vect`]s, never views.
//!
//! Scalar arithmetic comes in two flavours. The `el_*` methods mutate in place
//! and hand back `&mut Self` so calls can be chained on one instance, while the
//! `+ - * /` operators consume the matrix and return a new one.

mod cofactor;
mod det;
mod io;
mod rref;

pub use det::{CofactorExpansion, Determinant, LuDecomposition};

use std::ops::{Add, Div, Mul, Sub};

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::error::{LinalgError, Malformed, Result, Shape};
use super::{Real, Vect};

/// Two-dimensional dense grid of real numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<F = f64> {
    rows: Vec<Vec<F>>,
    row_count: usize,
    column_count: usize,
}

impl<F> Matrix<F> {
    /// Create a matrix from its rows.
    ///
    /// Fails with [`LinalgError::MalformedMatrix`] when the grid is empty or
    /// when any row length differs from row 0.
    pub fn new(rows: Vec<Vec<F>>) -> Result<Self> {
        let column_count = rows.first().map_or(0, Vec::len);
        if column_count == 0 {
            return Err(LinalgError::MalformedMatrix(Malformed::Empty));
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != column_count) {
            return Err(LinalgError::MalformedMatrix(Malformed::Ragged {
                row,
                expected: column_count,
                found: r.len(),
            }));
        }
        Ok(Self::from_rows_unchecked(rows))
    }

    /// Build from a grid already known to be rectangular and non-empty.
    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<F>>) -> Self {
        debug_assert!(!rows.is_empty() && rows.iter().all(|r| r.len() == rows[0].len()));
        let row_count = rows.len();
        let column_count = rows[0].len();
        Self {
            rows,
            row_count,
            column_count,
        }
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.row_count, self.column_count)
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    #[inline]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Whether the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.row_count == self.column_count
    }

    /// Whether the matrix has a single column.
    #[inline]
    pub fn is_column(&self) -> bool {
        self.column_count == 1
    }

    /// Whether the matrix has a single row.
    #[inline]
    pub fn is_row(&self) -> bool {
        self.row_count == 1
    }

    /// Rows as slices.
    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Consume the matrix, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<F>> {
        self.rows
    }

    pub(crate) fn shape(&self) -> Shape {
        Shape::Matrix(self.row_count, self.column_count)
    }

    pub(crate) fn require_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(LinalgError::NotSquare {
                rows: self.row_count,
                columns: self.column_count,
            })
        }
    }
}

impl<F: Real> Matrix<F> {
    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn get_element(&self, i: usize, j: usize) -> F {
        self.rows[i][j]
    }

    /// Overwrite the entry at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn set_element(&mut self, i: usize, j: usize, value: F) {
        self.rows[i][j] = value;
    }

    /// `s×s` identity.
    ///
    /// # Panics
    /// Panics if `s == 0`.
    pub fn identity(s: usize) -> Self {
        assert!(s > 0, "identity size must be positive");
        Self::from_fn(s, s, |i, j| if i == j { F::one() } else { F::zero() })
    }

    /// `m×n` matrix of zeros.
    ///
    /// # Panics
    /// Panics if `m == 0` or `n == 0`.
    pub fn zeros(m: usize, n: usize) -> Self {
        assert!(m > 0 && n > 0, "matrix dimensions must be positive");
        Self::from_fn(m, n, |_, _| F::zero())
    }

    /// `m×n` matrix of uniform samples from `[0, 1)`.
    ///
    /// # Panics
    /// Panics if `m == 0` or `n == 0`.
    pub fn rand<R: Rng + ?Sized>(m: usize, n: usize, rng: &mut R) -> Self
    where
        Standard: Distribution<F>,
    {
        assert!(m > 0 && n > 0, "matrix dimensions must be positive");
        Self::from_fn(m, n, |_, _| Standard.sample(rng))
    }

    pub(crate) fn from_fn(m: usize, n: usize, mut f: impl FnMut(usize, usize) -> F) -> Self {
        Self::from_rows_unchecked((0..m).map(|i| (0..n).map(|j| f(i, j)).collect()).collect())
    }

    /// Add `n` to every entry in place.
    pub fn el_add(&mut self, n: F) -> &mut Self {
        self.apply(|x| x + n)
    }

    /// Subtract `n` from every entry in place.
    pub fn el_subtract(&mut self, n: F) -> &mut Self {
        self.apply(|x| x - n)
    }

    /// Multiply every entry by `n` in place.
    pub fn el_multiply(&mut self, n: F) -> &mut Self {
        self.apply(|x| x * n)
    }

    /// Divide every entry by `n` in place. Division by zero gives infinities or NaN.
    pub fn el_divide(&mut self, n: F) -> &mut Self {
        self.apply(|x| x / n)
    }

    fn apply(&mut self, f: impl Fn(F) -> F) -> &mut Self {
        self.rows.iter_mut().flatten().for_each(|x| *x = f(*x));
        self
    }

    /// New matrix with `f` applied to every entry.
    pub fn map(&self, f: impl Fn(F) -> F) -> Self {
        Self::from_rows_unchecked(
            self.rows
                .iter()
                .map(|row| row.iter().map(|&x| f(x)).collect())
                .collect(),
        )
    }

    /// `Mᵀ`, with `Mᵀ[i][j] = M[j][i]`.
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.column_count, self.row_count, |i, j| self.rows[j][i])
    }

    /// Copy of row `r`.
    ///
    /// # Panics
    /// Panics if `r >= self.row_count()`.
    pub fn get_row(&self, r: usize) -> Vect<F> {
        Vect::new(self.rows[r].clone())
    }

    /// Copy of column `c`.
    ///
    /// # Panics
    /// Panics if `c >= self.column_count()`.
    pub fn get_column(&self, c: usize) -> Vect<F> {
        self.rows.iter().map(|row| row[c]).collect()
    }

    /// Horizontal concatenation `[self | m]`.
    pub fn augment(&self, m: &Self) -> Result<Self> {
        if self.row_count != m.row_count {
            return Err(LinalgError::DimensionMismatch {
                left: self.shape(),
                right: m.shape(),
            });
        }
        Ok(Self::from_rows_unchecked(
            self.rows
                .iter()
                .zip(&m.rows)
                .map(|(a, b)| a.iter().chain(b).copied().collect())
                .collect(),
        ))
    }

    /// Minor matrix obtained by deleting row `r` and column `c`.
    ///
    /// # Panics
    /// Panics if the matrix has a single row or column, or if `r`/`c` are out of range.
    pub fn sub_matrix(&self, r: usize, c: usize) -> Self {
        assert!(
            self.row_count > 1 && self.column_count > 1,
            "cannot take a minor of a {}x{} matrix",
            self.row_count,
            self.column_count
        );
        assert!(r < self.row_count && c < self.column_count, "minor index out of range");
        Self::from_rows_unchecked(
            self.rows
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != r)
                .map(|(_, row)| {
                    row.iter()
                        .enumerate()
                        .filter(|&(j, _)| j != c)
                        .map(|(_, &x)| x)
                        .collect()
                })
                .collect(),
        )
    }

    /// Fraction of entries that are exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn sparsity(&self) -> F {
        let zeros = self.rows.iter().flatten().filter(|&&x| x == F::zero()).count();
        F::from_count(zeros) / F::from_count(self.row_count * self.column_count)
    }

    /// Whether at least half of the entries are zero.
    pub fn is_sparse(&self) -> bool {
        self.sparsity() >= half()
    }

    /// Fraction of entries that are non-zero.
    pub fn density(&self) -> F {
        F::one() - self.sparsity()
    }

    /// Whether at least half of the entries are non-zero.
    pub fn is_dense(&self) -> bool {
        self.density() >= half()
    }
}

fn half<F: Real>() -> F {
    F::one() / (F::one() + F::one())
}

impl<F> TryFrom<Vec<Vec<F>>> for Matrix<F> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<F>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl<F: Real, const M: usize, const N: usize> From<[[F; N]; M]> for Matrix<F> {
    /// # Panics
    /// Panics if `M == 0` or `N == 0`.
    fn from(grid: [[F; N]; M]) -> Self {
        assert!(M > 0 && N > 0, "matrix dimensions must be positive");
        Self::from_rows_unchecked(grid.into_iter().map(Vec::from).collect())
    }
}

impl<F: Real> Add<F> for Matrix<F> {
    type Output = Self;

    fn add(mut self, n: F) -> Self {
        self.el_add(n);
        self
    }
}

impl<F: Real> Sub<F> for Matrix<F> {
    type Output = Self;

    fn sub(mut self, n: F) -> Self {
        self.el_subtract(n);
        self
    }
}

impl<F: Real> Mul<F> for Matrix<F> {
    type Output = Self;

    fn mul(mut self, n: F) -> Self {
        self.el_multiply(n);
        self
    }
}

impl<F: Real> Div<F> for Matrix<F> {
    type Output = Self;

    fn div(mut self, n: F) -> Self {
        self.el_divide(n);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vect;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn sample() -> Matrix {
        Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
    }

    #[test]
    fn construction_records_shape() {
        let m = sample();
        assert_eq!(m.size(), (2, 3));
        assert!(!m.is_square());
        assert!(Matrix::<f64>::identity(3).is_square());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Matrix::new(vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::MalformedMatrix(Malformed::Ragged { row: 1, expected: 2, found: 3 })
        ));
    }

    #[test]
    fn empty_grids_are_rejected() {
        for rows in [vec![], vec![Vec::<f64>::new()]] {
            assert!(matches!(
                Matrix::new(rows),
                Err(LinalgError::MalformedMatrix(Malformed::Empty))
            ));
        }
    }

    #[test]
    fn transpose_swaps_indices() {
        let t = sample().transpose();
        assert_eq!(t, Matrix::from([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn rows_and_columns_are_copies() {
        let mut m = sample();
        let row = m.get_row(1);
        let column = m.get_column(2);
        m.set_element(1, 2, 0.0);
        assert_eq!(row, vect![4.0, 5.0, 6.0]);
        assert_eq!(column, vect![3.0, 6.0]);
        assert_eq!(m.get_element(1, 2), 0.0);
    }

    #[test]
    fn clone_does_not_alias() {
        let m = sample();
        let mut c = m.clone();
        c.el_add(1.0);
        assert_eq!(m.get_element(0, 0), 1.0);
        assert_eq!(c.get_element(0, 0), 2.0);
    }

    #[test]
    fn in_place_scalar_ops_chain() {
        let mut m = sample();
        m.el_add(1.0).el_multiply(2.0).el_subtract(4.0).el_divide(2.0);
        assert_eq!(m, Matrix::from([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]));
    }

    #[test]
    fn operator_forms_leave_nothing_shared() {
        let m = sample();
        let doubled = m.clone() * 2.0;
        assert_eq!(doubled, m.map(|x| 2.0 * x));
        assert_eq!((m.clone() + 1.0) - 1.0, m);
        assert!((m / 0.0).get_element(0, 0).is_infinite());
    }

    #[test]
    fn augment_concatenates_columns() {
        let a = sample();
        let b = Matrix::from([[7.0], [8.0]]);
        let ab = a.augment(&b).unwrap();
        assert_eq!(ab.size(), (2, 4));
        assert_eq!(ab.get_row(1), vect![4.0, 5.0, 6.0, 8.0]);

        let err = a.augment(&Matrix::<f64>::identity(3)).unwrap_err();
        assert!(matches!(
            err,
            LinalgError::DimensionMismatch { left: Shape::Matrix(2, 3), right: Shape::Matrix(3, 3) }
        ));
    }

    #[test]
    fn sub_matrix_drops_row_and_column() {
        let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(m.sub_matrix(1, 1), Matrix::from([[1.0, 3.0], [7.0, 9.0]]));
        assert_eq!(m.sub_matrix(0, 2), Matrix::from([[4.0, 5.0], [7.0, 8.0]]));
    }

    #[test]
    #[should_panic(expected = "cannot take a minor")]
    fn sub_matrix_of_a_row_panics() {
        let _ = Matrix::from([[1.0, 2.0]]).sub_matrix(0, 0);
    }

    #[test]
    fn generators() {
        assert_eq!(Matrix::<f64>::identity(2), Matrix::from([[1.0, 0.0], [0.0, 1.0]]));
        assert_eq!(Matrix::<f64>::zeros(2, 3).sparsity(), 1.0);

        let mut a = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(3);
        let m = Matrix::<f64>::rand(4, 5, &mut a);
        assert_eq!(m.size(), (4, 5));
        assert_eq!(m, Matrix::rand(4, 5, &mut b));
        assert!(m.rows().iter().flatten().all(|x| (0.0..1.0).contains(x)));
    }

    #[test]
    fn sparsity_and_density() {
        let m = Matrix::from([[1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(m.sparsity(), 0.75);
        assert_eq!(m.density(), 0.25);
        assert!(m.is_sparse());
        assert!(!m.is_dense());
        assert!(Matrix::from([[1.0, 0.0]]).is_dense());
    }

    #[test]
    fn row_and_column_shapes() {
        assert!(Matrix::from([[1.0, 2.0]]).is_row());
        assert!(Matrix::from([[1.0], [2.0]]).is_column());
        assert!(!sample().is_row());
    }
}
