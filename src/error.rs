use std::error::Error as StdError;
use std::fmt;

/// Shape of an operand, reported by dimension mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A vector with the given dimension.
    Vector(usize),
    /// A matrix with the given `(rows, columns)`.
    Matrix(usize, usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Vector(dim) => write!(f, "dim({dim})"),
            Shape::Matrix(rows, columns) => write!(f, "{rows}x{columns}"),
        }
    }
}

/// Why a grid could not become a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformed {
    /// No rows, or rows without entries.
    Empty,
    /// Row `row` has `found` entries while row 0 has `expected`.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
}

/// Errors raised by vector and matrix operations.
#[derive(Debug)]
pub enum LinalgError {
    /// Operand sizes are incompatible for the requested operation.
    DimensionMismatch {
        /// Shape of the receiver or left operand.
        left: Shape,
        /// Shape of the argument or right operand.
        right: Shape,
    },
    /// A fixed-dimension operation got a vector of another dimension.
    DimensionError {
        /// Dimension the operation is defined for.
        required: usize,
        /// Dimension of the offending vector.
        found: usize,
    },
    /// Square-only operation invoked on a rectangular matrix.
    NotSquare {
        /// Row count of the matrix.
        rows: usize,
        /// Column count of the matrix.
        columns: usize,
    },
    /// Inverse requested on a matrix with zero determinant.
    Singular,
    /// Construction from a non-rectangular or empty grid.
    MalformedMatrix(Malformed),
    /// A call argument violates its precondition.
    InvalidArgument(&'static str),
    /// Reading or writing a matrix file failed.
    Io(std::io::Error),
    /// A matrix file is not valid CSV.
    Csv(csv::Error),
}

/// Crate-wide result alias.
pub type Result<T, E = LinalgError> = std::result::Result<T, E>;

impl fmt::Display for LinalgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinalgError::DimensionMismatch { left, right } => {
                write!(f, "dimension mismatch: {left} is incompatible with {right}")
            }
            LinalgError::DimensionError { required, found } => {
                write!(f, "vector must be in R^{required}, got dim({found})")
            }
            LinalgError::NotSquare { rows, columns } => {
                write!(f, "matrix must be square, got {rows}x{columns}")
            }
            LinalgError::Singular => write!(f, "matrix is singular (zero determinant)"),
            LinalgError::MalformedMatrix(Malformed::Empty) => {
                write!(f, "matrix must have at least one row and one column")
            }
            LinalgError::MalformedMatrix(Malformed::Ragged { row, expected, found }) => write!(
                f,
                "row {row} has {found} entries but row 0 has {expected}"
            ),
            LinalgError::InvalidArgument(reason) => write!(f, "invalid argument: {reason}"),
            LinalgError::Io(e) => write!(f, "I/O error: {e}"),
            LinalgError::Csv(e) => write!(f, "CSV parsing error: {e}"),
        }
    }
}

impl StdError for LinalgError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            LinalgError::Io(e) => Some(e),
            LinalgError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LinalgError {
    fn from(e: std::io::Error) -> Self {
        LinalgError::Io(e)
    }
}

impl From<csv::Error> for LinalgError {
    fn from(e: csv::Error) -> Self {
        LinalgError::Csv(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_reports_both_shapes() {
        let e = LinalgError::DimensionMismatch {
            left: Shape::Matrix(2, 3),
            right: Shape::Matrix(2, 2),
        };
        assert_eq!(e.to_string(), "dimension mismatch: 2x3 is incompatible with 2x2");

        let e = LinalgError::DimensionMismatch {
            left: Shape::Vector(2),
            right: Shape::Vector(3),
        };
        assert_eq!(e.to_string(), "dimension mismatch: dim(2) is incompatible with dim(3)");
    }

    #[test]
    fn io_errors_keep_their_source() {
        let e: LinalgError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(e.source().is_some());
        assert!(LinalgError::Singular.source().is_none());
    }
}
