pub mod aliases;
mod ops;
mod square;

pub use aliases::*;

use crate::error::{MatrixError, Result};
use crate::traits::{FloatScalar, Scalar};
use core::ops::{Index, IndexMut};

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage; element `(row, col)` lives at
/// `data[row * ncols + col]`. Dimensions are validated at construction and
/// resize time: a matrix always has at least one row and one column.
///
/// Fallible operations return [`MatrixError`]; the arithmetic operators
/// (`+`, `-`, `*`, and their assigning forms) are the panicking convenience
/// surface over the same loops.
///
/// # Examples
///
/// ```
/// use dynmat::Matrix;
///
/// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let id: Matrix<f64> = Matrix::eye(3).unwrap();
/// assert_eq!(id[(0, 0)], 1.0);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix with every element zero.
    ///
    /// Fails with [`MatrixError::InvalidDimension`] if either dimension is
    /// zero.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::<f64>::new(2, 3).unwrap();
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    ///
    /// assert!(Matrix::<f64>::new(0, 3).is_err());
    /// ```
    pub fn new(nrows: usize, ncols: usize) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension { nrows, ncols });
        }
        Ok(Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        })
    }

    /// Create a matrix filled with a given value.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64).unwrap();
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension { nrows, ncols });
        }
        Ok(Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        })
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let id: Matrix<f64> = Matrix::eye(3).unwrap();
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        Ok(m)
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Fails with [`MatrixError::InvalidDimension`] on a zero dimension.
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension { nrows, ncols });
        }
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Ok(Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 }).unwrap();
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(MatrixError::InvalidDimension { nrows, ncols });
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Ok(Self { data, nrows, ncols })
    }
}

impl<T: Scalar> Default for Matrix<T> {
    /// A `3 x 3` zero matrix.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::<f64>::default();
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(2, 2)], 0.0);
    /// ```
    fn default() -> Self {
        Self {
            data: vec![T::zero(); 9],
            nrows: 3,
            ncols: 3,
        }
    }
}

// ── Dimensions & element access ─────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(())
    }

    /// Bounds-checked element access.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(*m.at(1, 0).unwrap(), 3.0);
    /// assert!(m.at(1, 10).is_err());
    /// ```
    pub fn at(&self, row: usize, col: usize) -> Result<&T> {
        self.check_bounds(row, col)?;
        Ok(&self.data[row * self.ncols + col])
    }

    /// Bounds-checked mutable element access.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let mut m = Matrix::<f64>::new(2, 2).unwrap();
    /// *m.at_mut(0, 1).unwrap() = 5.0;
    /// assert_eq!(m[(0, 1)], 5.0);
    /// ```
    pub fn at_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        self.check_bounds(row, col)?;
        Ok(&mut self.data[row * self.ncols + col])
    }
}

// ── Resizing ────────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Change the number of rows, keeping the overlapping top rows.
    ///
    /// Shrinking discards the bottom rows; enlarging appends zero rows.
    /// Fails with [`MatrixError::InvalidDimension`] when `nrows` is zero.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let mut m = Matrix::fill(3, 2, 1.0_f64).unwrap();
    /// m.set_rows(4).unwrap();
    /// assert_eq!(m.nrows(), 4);
    /// assert_eq!(m[(2, 1)], 1.0);
    /// assert_eq!(m[(3, 1)], 0.0);
    /// ```
    pub fn set_rows(&mut self, nrows: usize) -> Result<()> {
        if nrows == 0 {
            return Err(MatrixError::InvalidDimension {
                nrows,
                ncols: self.ncols,
            });
        }
        let mut next = Self::new(nrows, self.ncols)?;
        let keep = self.nrows.min(nrows);
        next.data[..keep * self.ncols].copy_from_slice(&self.data[..keep * self.ncols]);
        *self = next;
        Ok(())
    }

    /// Change the number of columns, keeping the overlapping left columns.
    ///
    /// Shrinking discards the right columns; enlarging appends zero columns.
    /// Fails with [`MatrixError::InvalidDimension`] when `ncols` is zero.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let mut m = Matrix::fill(3, 3, 1.0_f64).unwrap();
    /// m.set_cols(2).unwrap();
    /// assert_eq!(m.ncols(), 2);
    /// assert_eq!(m[(2, 1)], 1.0);
    /// ```
    pub fn set_cols(&mut self, ncols: usize) -> Result<()> {
        if ncols == 0 {
            return Err(MatrixError::InvalidDimension {
                nrows: self.nrows,
                ncols,
            });
        }
        let mut next = Self::new(self.nrows, ncols)?;
        let keep = self.ncols.min(ncols);
        for i in 0..self.nrows {
            for j in 0..keep {
                next.data[i * ncols + j] = self.data[i * self.ncols + j];
            }
        }
        *self = next;
        Ok(())
    }
}

// ── Approximate equality ────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Elementwise comparison with an absolute tolerance of `1e-7`.
    ///
    /// Returns `false` immediately if the shapes differ. Total and
    /// side-effect free; the derived `PartialEq` remains exact.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let a = Matrix::fill(2, 2, 1.0_f64).unwrap();
    /// let b = Matrix::fill(2, 2, 1.0 + 1e-9).unwrap();
    /// assert!(a.approx_eq(&b));
    ///
    /// let c = Matrix::fill(2, 3, 1.0_f64).unwrap();
    /// assert!(!a.approx_eq(&c));
    /// ```
    pub fn approx_eq(&self, other: &Self) -> bool {
        if self.nrows != other.nrows || self.ncols != other.ncols {
            return false;
        }
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(&a, &b)| (a - b).abs() < T::tolerance())
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}
