use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{MatrixError, Result};
use crate::traits::Scalar;

use super::Matrix;

// ── Checked in-place operations ─────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    fn check_same_shape(&self, rhs: &Self) -> Result<()> {
        if self.nrows != rhs.nrows || self.ncols != rhs.ncols {
            return Err(MatrixError::DimensionMismatch {
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(())
    }

    /// Elementwise in-place addition.
    ///
    /// Validates shapes before mutating; on
    /// [`MatrixError::DimensionMismatch`] the receiver is unchanged.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let mut a = Matrix::fill(2, 2, 1.0_f64).unwrap();
    /// let b = Matrix::fill(2, 2, 2.0).unwrap();
    /// a.try_add_assign(&b).unwrap();
    /// assert_eq!(a[(0, 0)], 3.0);
    /// ```
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
        Ok(())
    }

    /// Elementwise in-place subtraction.
    ///
    /// Validates shapes before mutating; on
    /// [`MatrixError::DimensionMismatch`] the receiver is unchanged.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        self.check_same_shape(rhs)?;
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
        Ok(())
    }

    /// Multiply every element by `factor` in place.
    ///
    /// Total: NaN and infinite factors pass straight through.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let mut m = Matrix::fill(2, 2, 3.0_f64).unwrap();
    /// m.scale(2.0);
    /// assert_eq!(m[(1, 1)], 6.0);
    /// ```
    pub fn scale(&mut self, factor: T) {
        for x in self.data.iter_mut() {
            *x = *x * factor;
        }
    }

    /// Replace `self` with the matrix product `self * rhs`.
    ///
    /// Fails with [`MatrixError::DimensionMismatch`] when
    /// `self.ncols() != rhs.nrows()`, leaving the receiver unchanged. On
    /// success the receiver has shape `self.nrows() x rhs.ncols()`.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let mut a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::from_rows(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();
    /// a.try_mul_assign(&b).unwrap();
    /// assert_eq!(a[(0, 0)], 19.0);
    /// assert_eq!(a[(1, 1)], 50.0);
    /// ```
    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<()> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                left: (self.nrows, self.ncols),
                right: (rhs.nrows, rhs.ncols),
            });
        }
        *self = self.mul_impl(rhs);
        Ok(())
    }

    /// Standard product loop; shared dimension accumulated left to right.
    /// Caller has already checked `self.ncols == rhs.nrows`.
    fn mul_impl(&self, rhs: &Self) -> Self {
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for j in 0..p {
                let mut acc = T::zero();
                for k in 0..n {
                    acc = acc + self.data[i * n + k] * rhs.data[k * p + j];
                }
                data[i * p + j] = acc;
            }
        }
        Matrix {
            data,
            nrows: m,
            ncols: p,
        }
    }

    /// Transpose: `(M x N)` → `(N x M)`. Does not mutate the source.
    ///
    /// ```
    /// use dynmat::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let t = a.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t.ncols(), 2);
    /// assert_eq!(t[(1, 0)], 2.0);
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.nrows * self.ncols);
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self.data[i * self.ncols + j]);
            }
        }
        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} += {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} -= {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        -&self
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        self.mul_impl(rhs)
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

impl<T: Scalar> MulAssign<&Matrix<T>> for Matrix<T> {
    fn mul_assign(&mut self, rhs: &Matrix<T>) {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} *= {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        *self = self.mul_impl(rhs);
    }
}

impl<T: Scalar> MulAssign for Matrix<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.mul_assign(&rhs);
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.scale(rhs);
    }
}

// ── scalar * matrix (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Scalar division: matrix / scalar ─────────────────────────────────

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        let data = self.data.iter().map(|&x| x / rhs).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}
