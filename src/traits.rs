use core::fmt::Debug;
use num_traits::{Float, Num, One, Signed, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by the tolerance-based operations: approximate equality
/// ([`approx_eq`](crate::Matrix::approx_eq)) and the singularity check in
/// [`inverse`](crate::Matrix::inverse).
pub trait FloatScalar: Scalar + Float + Signed {
    /// Absolute-difference tolerance.
    ///
    /// Two elements compare equal when `|a - b| < tolerance()`, and a
    /// determinant with `|det| <= tolerance()` is treated as zero.
    fn tolerance() -> Self;
}

/// Concrete impls for real floats.
macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline]
                fn tolerance() -> Self {
                    1e-7
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
