use std::ops::Mul;

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result, Shape};
use super::{Coords, Matrix, Real};

/// Fixed-length ordered sequence of real numbers.
///
/// Binary operations (`plus`, `minus`, `dot`) require both operands to have
/// the same dimension and report [`LinalgError::DimensionMismatch`] otherwise.
/// Degenerate numeric cases are not guarded: normalizing a zero vector
/// yields NaNs, as plain floating-point division would.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vect<F = f64> {
    data: Vec<F>,
}

impl<F> Vect<F> {
    /// Create a vector from its elements.
    pub fn new(data: Vec<F>) -> Self {
        Self { data }
    }

    /// Number of elements.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[F] {
        &self.data
    }

    /// Consume the vector, returning its elements.
    pub fn into_inner(self) -> Vec<F> {
        self.data
    }

    fn dims_match(&self, v: &Self) -> Result<()> {
        if self.dim() == v.dim() {
            Ok(())
        } else {
            Err(LinalgError::DimensionMismatch {
                left: Shape::Vector(self.dim()),
                right: Shape::Vector(v.dim()),
            })
        }
    }
}

impl<F: Real> Vect<F> {
    /// Element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.dim()`.
    #[inline]
    pub fn get_element(&self, pos: usize) -> F {
        self.data[pos]
    }

    /// Overwrite the element at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= self.dim()`.
    #[inline]
    pub fn set_element(&mut self, pos: usize, value: F) {
        self.data[pos] = value;
    }

    /// Euclidean norm `sqrt(Σ xᵢ²)`.
    pub fn magnitude(&self) -> F {
        self.data
            .iter()
            .fold(F::zero(), |acc, &x| acc + x * x)
            .sqrt()
    }

    /// Angle `atan2(y, x)` of a 2-dimensional vector, in radians.
    ///
    /// Returns NaN for any other dimension.
    pub fn angle(&self) -> F {
        match self.data.as_slice() {
            &[x, y] => y.atan2(x),
            _ => F::nan(),
        }
    }

    /// Element-wise sum.
    pub fn plus(&self, v: &Self) -> Result<Self> {
        self.dims_match(v)?;
        Ok(self.zip_with(v, |a, b| a + b))
    }

    /// Element-wise difference `self - v`.
    pub fn minus(&self, v: &Self) -> Result<Self> {
        self.dims_match(v)?;
        Ok(self.zip_with(v, |a, b| a - b))
    }

    /// Multiply every element by `alpha`.
    pub fn scale(&self, alpha: F) -> Self {
        self.map(|x| x * alpha)
    }

    /// Unit vector in the direction of `self`.
    ///
    /// A zero vector has no direction; its elements come back as NaN.
    pub fn norm(&self) -> Self {
        self.scale(self.magnitude().recip())
    }

    /// Dot product `Σ xᵢ·yᵢ`.
    pub fn dot(&self, v: &Self) -> Result<F> {
        self.dims_match(v)?;
        Ok(self
            .data
            .iter()
            .zip(&v.data)
            .fold(F::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product of two vectors in R³.
    pub fn cross(&self, v: &Self) -> Result<Self> {
        match (self.data.as_slice(), v.data.as_slice()) {
            (&[a1, a2, a3], &[b1, b2, b3]) => Ok(Self::new(vec![
                a2 * b3 - b2 * a3,
                a3 * b1 - b3 * a1,
                a1 * b2 - b1 * a2,
            ])),
            _ => Err(LinalgError::DimensionError {
                required: 3,
                found: if self.dim() == 3 { v.dim() } else { self.dim() },
            }),
        }
    }

    /// Apply `f` to every element.
    pub fn map(&self, f: impl Fn(F) -> F) -> Self {
        self.data.iter().map(|&x| f(x)).collect()
    }

    /// Polar, spherical and cylindrical views of this vector.
    pub fn coords(&self) -> Coords<'_, F> {
        Coords::new(self)
    }

    /// Reinterpret as an `n×1` matrix.
    ///
    /// Fails with [`LinalgError::MalformedMatrix`] for an empty vector.
    pub fn to_column(&self) -> Result<Matrix<F>> {
        Matrix::new(self.data.iter().map(|&x| vec![x]).collect())
    }

    /// Reinterpret as a `1×n` matrix.
    ///
    /// Fails with [`LinalgError::MalformedMatrix`] for an empty vector.
    pub fn to_row(&self) -> Result<Matrix<F>> {
        Matrix::new(vec![self.data.clone()])
    }

    /// Vector of `dim` uniform samples from `[0, 1)`.
    pub fn rand<R: Rng + ?Sized>(dim: usize, rng: &mut R) -> Self
    where
        Standard: Distribution<F>,
    {
        (0..dim).map(|_| Standard.sample(rng)).collect()
    }

    /// Vector of `dim` zeros.
    pub fn zeros(dim: usize) -> Self {
        Self::new(vec![F::zero(); dim])
    }

    /// Zero vector with a single `1` at `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= dim`.
    pub fn one_hot(dim: usize, pos: usize) -> Self {
        let mut v = Self::zeros(dim);
        v.set_element(pos, F::one());
        v
    }

    fn zip_with(&self, v: &Self, f: impl Fn(F, F) -> F) -> Self {
        self.data
            .iter()
            .zip(&v.data)
            .map(|(&a, &b)| f(a, b))
            .collect()
    }
}

impl<F: Real> Mul<F> for Vect<F> {
    type Output = Self;

    fn mul(self, alpha: F) -> Self {
        self.scale(alpha)
    }
}

impl<F> From<Vec<F>> for Vect<F> {
    fn from(data: Vec<F>) -> Self {
        Self::new(data)
    }
}

impl<F> FromIterator<F> for Vect<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<F> IntoIterator for Vect<F> {
    type Item = F;
    type IntoIter = std::vec::IntoIter<F>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<F> AsRef<[F]> for Vect<F> {
    fn as_ref(&self) -> &[F] {
        &self.data
    }
}

/// Build a [`Vect`] from a list of elements, like `vec!`.
#[macro_export]
macro_rules! vect {
    ($($x:expr),* $(,)?) => {
        $crate::Vect::new(vec![$($x),*])
    };
}
