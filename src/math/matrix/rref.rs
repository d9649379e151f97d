use log::trace;

use super::Matrix;
use crate::math::Real;

impl<F: Real> Matrix<F> {
    /// Row-reduced echelon form by Gauss-Jordan elimination with partial pivoting.
    ///
    /// The pivot for column `k` is the candidate row with the largest absolute
    /// value in that column. A column whose best candidate is exactly zero has
    /// no pivot and is skipped, leaving a free column, so rank-deficient input
    /// is handled without special cases.
    ///
    /// In the result every pivot is `1`, is the only non-zero entry of its
    /// column, and pivots move strictly down and to the right. `self` is left
    /// untouched.
    #[allow(clippy::float_cmp)]
    pub fn rref(&self) -> Self {
        let mut m = self.rows.clone();
        let (rows, columns) = self.size();
        let (mut h, mut k) = (0, 0);

        while h < rows && k < columns {
            let i_max = (h..rows)
                .reduce(|best, i| if m[i][k].abs() > m[best][k].abs() { i } else { best })
                .unwrap_or(h);

            if m[i_max][k] == F::zero() {
                trace!("rref: no pivot in column {k}");
                k += 1;
                continue;
            }

            if i_max != h {
                trace!("rref: swapping rows {h} and {i_max} for column {k}");
                m.swap(h, i_max);
            }

            let s = m[h][k].recip();
            m[h].iter_mut().for_each(|x| *x = *x * s);
            // Floating-point reciprocal can leave the pivot a hair off 1.
            m[h][k] = F::one();

            let pivot_row = m[h].clone();
            for (i, row) in m.iter_mut().enumerate() {
                if i == h {
                    continue;
                }
                let t = row[k];
                if t == F::zero() {
                    continue;
                }
                row.iter_mut()
                    .zip(&pivot_row)
                    .for_each(|(x, &p)| *x = *x - t * p);
                row[k] = F::zero();
            }

            h += 1;
            k += 1;
        }

        Self::from_rows_unchecked(m)
    }
}
