use serde::{Deserialize, Serialize};

use crate::error::{LinalgError, Result};
use super::{Projective, Real, Vect};

/// Polar coordinates `(r, θ)` of a planar vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar<F> {
    /// Distance from the origin.
    pub r: F,
    /// Angle from the positive x-axis, in radians.
    pub theta: F,
}

/// Spherical coordinates `(r, θ, φ)` with θ measured from the z-axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spherical<F> {
    /// Distance from the origin.
    pub r: F,
    /// Polar angle `acos(z / r)`.
    pub theta: F,
    /// Azimuth `atan2(y, x)`.
    pub phi: F,
}

/// Cylindrical coordinates `(ρ, θ, z)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylindrical<F> {
    /// Distance from the z-axis.
    pub rho: F,
    /// Azimuth `atan2(y, x)`.
    pub theta: F,
    /// Height, copied from the vector.
    pub z: F,
}

/// Read-only coordinate conversions over a borrowed [`Vect`].
#[derive(Debug, Clone, Copy)]
pub struct Coords<'a, F> {
    vector: &'a Vect<F>,
}

impl<'a, F: Real> Coords<'a, F> {
    /// View `vector` in other coordinate systems.
    pub fn new(vector: &'a Vect<F>) -> Self {
        Self { vector }
    }

    /// Polar form of a 2-dimensional vector.
    pub fn to_polar(&self) -> Result<Polar<F>> {
        self.require(2)?;
        Ok(Polar {
            r: self.vector.magnitude(),
            theta: self.vector.angle(),
        })
    }

    /// Spherical form of a 3-dimensional vector.
    ///
    /// At the origin `z / r` is `0 / 0`, so `theta` is NaN.
    pub fn to_spherical(&self) -> Result<Spherical<F>> {
        let [x, y, z] = self.xyz()?;
        let r = self.vector.magnitude();
        Ok(Spherical {
            r,
            theta: (z / r).acos(),
            phi: y.atan2(x),
        })
    }

    /// Cylindrical form of a 3-dimensional vector.
    pub fn to_cylindrical(&self) -> Result<Cylindrical<F>> {
        let [x, y, z] = self.xyz()?;
        Ok(Cylindrical {
            rho: x.hypot(y),
            theta: y.atan2(x),
            z,
        })
    }

    fn require(&self, dim: usize) -> Result<()> {
        if self.vector.dim() == dim {
            Ok(())
        } else {
            Err(LinalgError::DimensionError {
                required: dim,
                found: self.vector.dim(),
            })
        }
    }

    fn xyz(&self) -> Result<[F; 3]> {
        match self.vector.as_slice() {
            &[x, y, z] => Ok([x, y, z]),
            _ => Err(LinalgError::DimensionError {
                required: 3,
                found: self.vector.dim(),
            }),
        }
    }
}

impl<F> Projective<2> for Polar<F> {
    type BaseType = F;

    #[inline(always)]
    fn to_array(self) -> [F; 2] {
        [self.r, self.theta]
    }

    #[inline(always)]
    fn from_array([r, theta]: [F; 2]) -> Self {
        Self { r, theta }
    }
}

impl<F> Projective<3> for Spherical<F> {
    type BaseType = F;

    #[inline(always)]
    fn to_array(self) -> [F; 3] {
        [self.r, self.theta, self.phi]
    }

    #[inline(always)]
    fn from_array([r, theta, phi]: [F; 3]) -> Self {
        Self { r, theta, phi }
    }
}

impl<F> Projective<3> for Cylindrical<F> {
    type BaseType = F;

    #[inline(always)]
    fn to_array(self) -> [F; 3] {
        [self.rho, self.theta, self.z]
    }

    #[inline(always)]
    fn from_array([rho, theta, z]: [F; 3]) -> Self {
        Self { rho, theta, z }
    }
}
