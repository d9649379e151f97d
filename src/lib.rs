//! Dense linear algebra over real numbers.
//!
//! [`Vect`] and [`Matrix`] own their data; every derived value (row, column,
//! minor, transpose, product, row reduction) is a new allocation. Fallible
//! operations return [`LinalgError`] so callers can match on what went wrong,
//! while floating-point edge cases such as dividing by a zero magnitude are
//! left to IEEE semantics and surface as infinities or NaN.
//!
//! ```rust
//! use mora::{Matrix, multiply, vect};
//!
//! let m: Matrix = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
//! assert_eq!(m.det().unwrap(), -2.0);
//!
//! let product = multiply(&m, &m.inverse().unwrap()).unwrap();
//! assert!((product.get_element(0, 0) - 1.0).abs() < 1e-12);
//!
//! assert_eq!(vect![1.0, 2.0, 3.0].cross(&vect![1.0, 4.0, 5.0]).unwrap(), vect![-2.0, -2.0, 2.0]);
//! ```

mod error;
mod math;
mod seed;
mod display;

pub use error::{LinalgError, Malformed, Result, Shape};
pub use math::*;
pub use seed::{SEED_ENV, Seed};
pub use rand;
