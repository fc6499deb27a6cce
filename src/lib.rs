//! # dynmat
//!
//! Dense heap-allocated matrix type with runtime dimensions and the classic
//! small-matrix linear-algebra surface: elementwise arithmetic, scalar
//! scaling, matrix multiplication, transpose, algebraic complements,
//! determinant by cofactor expansion, and inversion via the adjugate.
//!
//! Determinants are computed by exact recursive Laplace expansion — simple
//! and deterministic, intended for small matrices. There is no sparse
//! storage, no elimination-based fast path, and no parallelism.
//!
//! ## Quick start
//!
//! ```
//! use dynmat::Matrix;
//!
//! let mut a = Matrix::<f64>::new(2, 2).unwrap();
//! *a.at_mut(0, 0).unwrap() = 4.0;
//! *a.at_mut(0, 1).unwrap() = 7.0;
//! *a.at_mut(1, 0).unwrap() = 2.0;
//! *a.at_mut(1, 1).unwrap() = 6.0;
//!
//! let inv = a.inverse().unwrap();
//! let id: Matrix<f64> = Matrix::eye(2).unwrap();
//! assert!((&a * &inv).approx_eq(&id));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — The [`Matrix<T>`] type: row-major `Vec<T>` storage with
//!   validated runtime dimensions, checked element access, resizing that
//!   keeps the overlapping sub-rectangle, approximate equality, the full
//!   operator surface (`+ - * /` with all ref/value combinations and the
//!   assigning forms), transpose, determinant, complements, and inverse.
//!   [`Matrixf64`] and friends are element-type aliases.
//!
//! - [`error`] — The [`MatrixError`] taxonomy and crate [`Result`] alias.
//!   Checked methods (`try_add_assign`, `try_mul_assign`, `at`, …) return
//!   typed errors and validate before mutating; the operators are the
//!   panicking convenience surface over the same loops.
//!
//! - [`traits`] — Element traits: [`Scalar`] (any numeric element, blanket
//!   impl over `num-traits`) and [`FloatScalar`] (real floats, carrying the
//!   `1e-7` comparison/singularity tolerance).
//!
//! ## Concurrency
//!
//! `Matrix<T>` is a plain owned value: `Send`/`Sync` follow from `T`, there
//! is no interior mutability, and sharing an instance across threads is the
//! caller's synchronization problem.

pub mod error;
pub mod matrix;
pub mod traits;

pub use error::{MatrixError, Result};
pub use matrix::aliases::{Matrixf32, Matrixf64, Matrixi32, Matrixi64, Matrixu32, Matrixu64};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
