mod scalar;
mod vect;
mod coords;
mod matrix;
mod product;

pub use scalar::{Projective, Real};
pub use vect::Vect;
pub use coords::{Coords, Cylindrical, Polar, Spherical};
pub use matrix::{CofactorExpansion, Determinant, LuDecomposition, Matrix};
pub use product::{multiply, multiply_all};
