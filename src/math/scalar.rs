//! Scalar and coordinate traits
//!
//! Every vector and matrix in this crate stores real numbers. Rather than
//! hard-coding `f64`, the containers are generic over any `num_traits::Float`
//! that can also be built from integer counts, so `f32` grids work the same
//! way as `f64` ones.

use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// Real scalar field of vectors and matrices.
pub trait Real: Float + FromPrimitive + Debug + Send + Sync + 'static {
    /// Convert `usize` to the scalar field.
    /// Panics on overflow.
    #[inline(always)]
    fn from_count(u: usize) -> Self {
        <Self as FromPrimitive>::from_usize(u).expect("usize-to-float conversion failed")
    }

    /// `(-1)^k` without going through `powi`.
    #[inline(always)]
    fn alternating(k: usize) -> Self {
        if k % 2 == 0 { Self::one() } else { -Self::one() }
    }
}

impl<F> Real for F where F: Float + FromPrimitive + Debug + Send + Sync + 'static {}

/// Coordinate representation with a fixed number of components.
///
/// `N` is the number of coordinates.
pub trait Projective<const N: usize> {
    /// Scalar type of each coordinate.
    type BaseType;

    /// Project the element onto its coordinate representation.
    fn to_array(self) -> [Self::BaseType; N];

    /// Reconstruct the element from coordinates.
    fn from_array(array: [Self::BaseType; N]) -> Self;
}
