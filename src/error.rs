//! Error type shared by all fallible matrix operations.
//!
//! Every validation failure is surfaced synchronously to the caller as a
//! [`MatrixError`] kind; no operation retries internally, and mutating
//! methods validate before touching the receiver, so a returned error
//! always leaves the matrix unchanged.

use thiserror::Error;

/// Errors from matrix construction, access, and linear-algebra operations.
///
/// ```
/// use dynmat::{Matrix, MatrixError};
///
/// let err = Matrix::<f64>::new(0, 3).unwrap_err();
/// assert_eq!(err, MatrixError::InvalidDimension { nrows: 0, ncols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// A requested dimension is zero (construction or resize).
    #[error("invalid dimensions {nrows}x{ncols}: rows and columns must be at least 1")]
    InvalidDimension {
        /// Requested number of rows.
        nrows: usize,
        /// Requested number of columns.
        ncols: usize,
    },

    /// Element access outside the matrix bounds.
    #[error("index ({row}, {col}) is out of bounds for a {nrows}x{ncols} matrix")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the matrix.
        nrows: usize,
        /// Number of columns in the matrix.
        ncols: usize,
    },

    /// Incompatible shapes for an elementwise operation or multiplication.
    #[error("dimension mismatch: {}x{} is incompatible with {}x{}", .left.0, .left.1, .right.0, .right.1)]
    DimensionMismatch {
        /// Shape of the left operand as `(rows, cols)`.
        left: (usize, usize),
        /// Shape of the right operand as `(rows, cols)`.
        right: (usize, usize),
    },

    /// Determinant, complements, or inverse requested on a non-square matrix.
    #[error("the {nrows}x{ncols} matrix is not square")]
    NotSquare {
        /// Number of rows.
        nrows: usize,
        /// Number of columns.
        ncols: usize,
    },

    /// Complements (and therefore the inverse) are undefined for a 1x1 matrix.
    #[error("cannot compute complements for a matrix smaller than 2x2")]
    SizeTooSmall,

    /// Inverse requested when the determinant is numerically zero.
    #[error("the matrix is singular: the determinant is numerically zero")]
    SingularMatrix,

    /// Copy-construction from the same instance.
    ///
    /// Safe Rust cannot alias a `&mut` destination with its source, so this
    /// kind is never produced by this crate's own operations; it exists so
    /// callers matching on the full taxonomy have a stable variant for the
    /// aliasing case.
    #[error("self-assignment is not allowed")]
    SelfAssignment,
}

/// A specialized `Result` type for matrix operations.
pub type Result<T> = core::result::Result<T, MatrixError>;
