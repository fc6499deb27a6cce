//! Integration tests exercising the public API end to end: construction,
//! resizing, element access, arithmetic operators, and the square-matrix
//! operations.

use dynmat::{Matrix, MatrixError, Matrixf64};

fn filled(nrows: usize, ncols: usize, row_major: &[f64]) -> Matrixf64 {
    Matrix::from_rows(nrows, ncols, row_major).unwrap()
}

#[test]
fn default_and_sized_construction() {
    let d = Matrixf64::default();
    assert_eq!(d.nrows(), 3);
    assert_eq!(d.ncols(), 3);

    let m = Matrix::<f64>::new(1, 1).unwrap();
    assert_eq!(m.nrows(), 1);
    assert_eq!(m.ncols(), 1);
    assert_eq!(m[(0, 0)], 0.0);
}

#[test]
fn construction_rejects_zero_dimensions() {
    assert!(matches!(
        Matrix::<f64>::new(0, 0),
        Err(MatrixError::InvalidDimension { .. })
    ));
    assert!(Matrix::<f64>::new(3, 0).is_err());
}

#[test]
fn clone_matches_source() {
    let a = filled(3, 3, &[1.0; 9]);
    let b = a.clone();
    assert_eq!(b.nrows(), 3);
    assert_eq!(b.ncols(), 3);
    assert!(a.approx_eq(&b));
}

#[test]
fn equality_matching_and_differing() {
    let ones = filled(3, 3, &[1.0; 9]);
    let twos = filled(3, 3, &[2.0; 9]);
    let narrow = filled(3, 2, &[1.0; 6]);

    assert!(ones.approx_eq(&filled(3, 3, &[1.0; 9])));
    assert!(!ones.approx_eq(&twos));
    assert!(!ones.approx_eq(&narrow));
}

#[test]
fn sum_method_and_operators() {
    let ones = filled(3, 3, &[1.0; 9]);
    let twos = filled(3, 3, &[2.0; 9]);

    let mut m = ones.clone();
    m.try_add_assign(&ones).unwrap();
    assert!(m.approx_eq(&twos));

    assert!((&ones + &ones).approx_eq(&twos));

    let mut op = ones.clone();
    op += &ones;
    assert!(op.approx_eq(&twos));
}

#[test]
fn sum_rejects_mismatched_shapes() {
    let mut a = filled(3, 3, &[1.0; 9]);
    let b = filled(3, 2, &[2.0; 6]);
    assert!(matches!(
        a.try_add_assign(&b),
        Err(MatrixError::DimensionMismatch { .. })
    ));
}

#[test]
fn sub_method_and_operators() {
    let ones = filled(3, 3, &[1.0; 9]);
    let zeros = Matrix::<f64>::new(3, 3).unwrap();

    let mut m = ones.clone();
    m.try_sub_assign(&ones).unwrap();
    assert!(m.approx_eq(&zeros));

    assert!((&ones - &ones).approx_eq(&zeros));

    let mut op = ones.clone();
    op -= &ones;
    assert!(op.approx_eq(&zeros));
}

#[test]
fn add_then_subtract_round_trips() {
    let a = filled(2, 3, &[1.5, -2.0, 0.25, 9.0, 4.0, -7.5]);
    let b = filled(2, 3, &[0.5, 3.0, -1.25, 2.0, -4.0, 6.5]);
    let round_trip = (&a + &b) - &b;
    assert!(round_trip.approx_eq(&a));
}

#[test]
fn scalar_multiplication() {
    let ones = filled(3, 3, &[1.0; 9]);
    let twos = filled(3, 3, &[2.0; 9]);

    let mut m = ones.clone();
    m.scale(2.0);
    assert!(m.approx_eq(&twos));

    assert!((&ones * 2.0).approx_eq(&twos));
    assert!((2.0 * &ones).approx_eq(&twos));

    let mut op = ones.clone();
    op *= 2.0;
    assert!(op.approx_eq(&twos));
}

#[test]
fn matrix_multiplication_method_and_operators() {
    let a = filled(3, 2, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    let b = filled(2, 3, &[1.0, -1.0, 1.0, 2.0, 3.0, 4.0]);
    let expected = filled(3, 3, &[9.0, 11.0, 17.0, 12.0, 13.0, 22.0, 15.0, 15.0, 27.0]);

    let mut m = a.clone();
    m.try_mul_assign(&b).unwrap();
    assert!(m.approx_eq(&expected));

    assert!((&a * &b).approx_eq(&expected));

    let mut op = a.clone();
    op *= &b;
    assert!(op.approx_eq(&expected));
}

#[test]
fn multiplication_rejects_incompatible_shapes() {
    let mut a = filled(3, 3, &[1.0; 9]);
    let b = filled(2, 2, &[1.0; 4]);
    assert_eq!(
        a.try_mul_assign(&b).unwrap_err(),
        MatrixError::DimensionMismatch {
            left: (3, 3),
            right: (2, 2),
        }
    );
}

#[test]
fn transpose_swaps_shape() {
    let a = filled(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    let t = a.transpose();
    assert!(t.approx_eq(&filled(3, 2, &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0])));
    assert!(t.transpose().approx_eq(&a));
}

#[test]
fn determinant_examples() {
    let m = filled(3, 3, &[1.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    assert!((m.determinant().unwrap() - 24.0).abs() < 1e-12);

    let single = filled(1, 1, &[1.0]);
    assert_eq!(single.determinant().unwrap(), 1.0);

    let rect = Matrix::<f64>::new(3, 2).unwrap();
    assert!(matches!(
        rect.determinant(),
        Err(MatrixError::NotSquare { .. })
    ));
}

#[test]
fn complements_example() {
    let m = filled(3, 3, &[1.0, 2.0, 5.0, 2.0, 4.0, 0.0, 3.0, 2.0, 1.0]);
    let expected = filled(3, 3, &[4.0, -2.0, -8.0, 8.0, -14.0, 4.0, -20.0, 10.0, 0.0]);
    assert!(m.cofactor_matrix().unwrap().approx_eq(&expected));

    let single = filled(1, 1, &[1.0]);
    assert_eq!(
        single.cofactor_matrix().unwrap_err(),
        MatrixError::SizeTooSmall
    );
}

#[test]
fn inverse_example() {
    let m = filled(3, 3, &[1.0, 2.0, -1.0, -2.0, 0.0, 1.0, 1.0, -1.0, 0.0]);
    let expected = filled(3, 3, &[1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 2.0, 3.0, 4.0]);
    assert!(m.inverse().unwrap().approx_eq(&expected));
}

#[test]
fn inverse_of_singular_matrix() {
    let m = filled(3, 3, &[9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
    assert_eq!(m.inverse().unwrap_err(), MatrixError::SingularMatrix);
}

#[test]
fn element_access_bounds() {
    let mut m = Matrix::<f64>::new(3, 3).unwrap();
    *m.at_mut(1, 2).unwrap() = 8.0;
    assert_eq!(*m.at(1, 2).unwrap(), 8.0);

    assert!(matches!(
        m.at(1, 10),
        Err(MatrixError::IndexOutOfBounds { .. })
    ));
    assert!(m.at_mut(10, 1).is_err());
}

#[test]
fn resize_columns_keeps_left_columns() {
    let mut m = filled(3, 3, &[1.0; 9]);
    m.set_cols(2).unwrap();
    assert!(m.approx_eq(&filled(3, 2, &[1.0; 6])));

    m.set_cols(3).unwrap();
    let expected = filled(3, 3, &[1.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 0.0]);
    assert!(m.approx_eq(&expected));
}

#[test]
fn resize_rows_keeps_top_rows() {
    let mut m = filled(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    m.set_rows(3).unwrap();
    assert!(m.approx_eq(&filled(3, 2, &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0])));

    m.set_rows(1).unwrap();
    assert!(m.approx_eq(&filled(1, 2, &[1.0, 2.0])));

    assert!(m.set_rows(0).is_err());
}
