//! Square-matrix operations: determinant by cofactor (Laplace) expansion,
//! the complement (cofactor) matrix, and inversion via the adjugate.
//!
//! The determinant is deliberately the textbook recursive expansion along
//! the first row — exponential in the matrix size, exact for the small
//! matrices this type targets. There is no elimination-based fast path.

use num_traits::Signed;

use crate::error::{MatrixError, Result};
use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Sub-matrix with `row` and `col` deleted, relative order preserved.
    /// Only called on square matrices of size >= 2.
    fn minor(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.nrows - 1) * (self.ncols - 1));
        for i in 0..self.nrows {
            if i == row {
                continue;
            }
            for j in 0..self.ncols {
                if j == col {
                    continue;
                }
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Matrix {
            data,
            nrows: self.nrows - 1,
            ncols: self.ncols - 1,
        }
    }
}

// Cofactor expansion alternates signs, so these need a signed element type.
impl<T: Scalar + Signed> Matrix<T> {
    /// Recursive expansion along the first row. Squareness already checked.
    fn det_expansion(&self) -> T {
        if self.nrows == 1 {
            return self.data[0];
        }
        let mut total = T::zero();
        let mut sign = T::one();
        for j in 0..self.ncols {
            total = total + sign * self.data[j] * self.minor(0, j).det_expansion();
            sign = -sign;
        }
        total
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Fails with [`MatrixError::NotSquare`] on a rectangular matrix. The
    /// `1 x 1` determinant is the sole element.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[
    ///     1.0_f64, 8.0, 7.0,
    ///     6.0, 5.0, 4.0,
    ///     3.0, 2.0, 1.0,
    /// ]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), 24.0);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.det_expansion())
    }

    /// Matrix of algebraic complements (cofactors).
    ///
    /// Entry `(i, j)` is `(-1)^(i+j)` times the determinant of the minor
    /// excluding row `i` and column `j`. Fails with
    /// [`MatrixError::NotSquare`] on a rectangular matrix and
    /// [`MatrixError::SizeTooSmall`] on a `1 x 1` matrix, for which
    /// cofactors are undefined.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[
    ///     1.0_f64, 2.0, 5.0,
    ///     2.0, 4.0, 0.0,
    ///     3.0, 2.0, 1.0,
    /// ]).unwrap();
    /// let c = m.cofactor_matrix().unwrap();
    /// assert_eq!(c[(0, 0)], 4.0);
    /// assert_eq!(c[(2, 0)], -20.0);
    /// ```
    pub fn cofactor_matrix(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        if self.nrows == 1 {
            return Err(MatrixError::SizeTooSmall);
        }
        let n = self.nrows;
        let mut out = Self::new(n, n)?;
        for i in 0..n {
            for j in 0..n {
                let det = self.minor(i, j).det_expansion();
                out.data[i * n + j] = if (i + j) % 2 == 0 { det } else { -det };
            }
        }
        Ok(out)
    }
}

impl<T: Scalar> Matrix<T> {
    /// Sum of diagonal elements.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(m.trace(), 5.0);
    /// ```
    pub fn trace(&self) -> T {
        let n = self.nrows.min(self.ncols);
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + self.data[i * self.ncols + i];
        }
        sum
    }

    /// Sum of all elements.
    pub fn sum(&self) -> T {
        let mut s = T::zero();
        for &x in &self.data {
            s = s + x;
        }
        s
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Inverse via the adjugate: transpose of the cofactor matrix scaled by
    /// the reciprocal determinant.
    ///
    /// Fails with [`MatrixError::NotSquare`] on a rectangular matrix and
    /// [`MatrixError::SingularMatrix`] when `|det| <= 1e-7`. A `1 x 1`
    /// non-singular matrix fails with [`MatrixError::SizeTooSmall`] through
    /// the cofactor step, even though `1/a` is well defined.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let m = Matrix::from_rows(3, 3, &[
    ///     1.0_f64, 2.0, -1.0,
    ///     -2.0, 0.0, 1.0,
    ///     1.0, -1.0, 0.0,
    /// ]).unwrap();
    /// let inv = m.inverse().unwrap();
    /// let expected = Matrix::from_rows(3, 3, &[
    ///     1.0, 1.0, 2.0,
    ///     1.0, 1.0, 1.0,
    ///     2.0, 3.0, 4.0,
    /// ]).unwrap();
    /// assert!(inv.approx_eq(&expected));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det.abs() <= T::tolerance() {
            return Err(MatrixError::SingularMatrix);
        }
        let mut adjugate = self.cofactor_matrix()?.transpose();
        adjugate.scale(T::one() / det);
        Ok(adjugate)
    }
}
