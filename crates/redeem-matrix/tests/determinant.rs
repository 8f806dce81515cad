//! Integration tests for determinants, minors and cofactors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redeem_matrix::Matrix;

fn m(rows: usize, cols: usize, values: &[f64]) -> Matrix {
    Matrix::from_values(rows, cols, values).unwrap()
}

/// Random square matrix with small integer entries, so determinants are exact.
fn integer_square(n: usize, rng: &mut StdRng) -> Matrix {
    let values: Vec<f64> = (0..n * n).map(|_| rng.gen_range(-9..=9) as f64).collect();
    m(n, n, &values)
}

/// Embed `b` in the lower-right corner of an order n+1 matrix with
/// `scale` in the top-left corner and zeros elsewhere.
fn bordered(scale: f64, b: &Matrix) -> Matrix {
    let n = b.nrows() + 1;
    let mut out = Matrix::zeros(n, n);
    out[(0, 0)] = scale;
    for i in 0..b.nrows() {
        for j in 0..b.ncols() {
            out[(i + 1, j + 1)] = b[(i, j)];
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Closed forms
// ---------------------------------------------------------------------------

#[test]
fn small_order_examples() {
    assert_eq!(m(1, 1, &[-3.5]).determinant(), -3.5);
    assert_eq!(m(2, 2, &[1.0, 2.0, 3.0, 4.0]).determinant(), -2.0);
    assert_eq!(
        m(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]).determinant(),
        -3.0
    );
}

#[test]
fn non_square_determinant_is_zero() {
    assert_eq!(Matrix::ones(2, 3).determinant(), 0.0);
    assert_eq!(Matrix::ones(4, 1).determinant(), 0.0);
}

#[test]
fn empty_square_determinant_is_one() {
    assert_eq!(Matrix::zeros(0, 0).determinant(), 1.0);
}

#[test]
fn identity_determinant_is_one() {
    for n in 0..=7 {
        assert_eq!(Matrix::identity(n).determinant(), 1.0, "order {}", n);
    }
}

// ---------------------------------------------------------------------------
// Laplace expansion
// ---------------------------------------------------------------------------

#[test]
fn order_four_and_five_fixtures() {
    let a = m(
        4,
        4,
        &[
            1.0, 0.0, 2.0, -1.0, //
            3.0, 0.0, 0.0, 5.0, //
            2.0, 1.0, 4.0, -3.0, //
            1.0, 0.0, 5.0, 0.0,
        ],
    );
    assert_eq!(a.determinant(), 30.0);

    let b = m(
        4,
        4,
        &[
            0.0, 2.0, 1.0, 3.0, //
            1.0, 0.0, 0.0, 4.0, //
            0.0, 5.0, 2.0, 1.0, //
            2.0, 1.0, 3.0, 0.0,
        ],
    );
    assert_eq!(b.determinant(), -42.0);

    let c = m(
        5,
        5,
        &[
            2.0, -1.0, 0.0, 3.0, 1.0, //
            1.0, 4.0, 2.0, 0.0, -2.0, //
            0.0, 3.0, 5.0, 1.0, 2.0, //
            4.0, 0.0, 1.0, 2.0, 3.0, //
            1.0, 1.0, 1.0, 1.0, 0.0,
        ],
    );
    assert_eq!(c.determinant(), 12.0);
}

#[test]
fn bordered_matrix_reduces_to_sarrus() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..25 {
        let inner = Matrix::random(3, 3, &mut rng);
        // expansion picks up exactly one term: 1 * cofactor(0, 0) = det(inner)
        assert_eq!(bordered(1.0, &inner).determinant(), inner.determinant());
    }
    let inner = m(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
    assert_eq!(bordered(2.0, &inner).determinant(), -6.0);
}

#[test]
fn row_swap_flips_sign() {
    let mut rng = StdRng::seed_from_u64(9);
    for n in 2..=5 {
        let a = integer_square(n, &mut rng);
        let mut b = a.clone();
        b.swap_rows(0, n - 1);
        assert_eq!(b.determinant(), -a.determinant());
    }
}

#[test]
fn transpose_preserves_determinant() {
    let mut rng = StdRng::seed_from_u64(21);
    for n in 1..=5 {
        let a = integer_square(n, &mut rng);
        assert_eq!(a.transpose().determinant(), a.determinant());
    }
}

// ---------------------------------------------------------------------------
// Singularity
// ---------------------------------------------------------------------------

#[test]
fn zero_row_is_singular() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in 1..=5 {
        let mut a = Matrix::random(n, n, &mut rng);
        let r = rng.gen_range(0..n);
        for j in 0..n {
            a[(r, j)] = 0.0;
        }
        assert!(a.is_singular(), "order {} with zero row {}", n, r);
    }
}

#[test]
fn repeated_row_is_singular() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in 2..=5 {
        let mut a = integer_square(n, &mut rng);
        for j in 0..n {
            a[(n - 1, j)] = a[(0, j)];
        }
        assert!(a.is_singular(), "order {}", n);
    }
}

#[test]
fn identity_is_not_singular() {
    assert!(!Matrix::identity(4).is_singular());
}

// ---------------------------------------------------------------------------
// Minor / cofactor
// ---------------------------------------------------------------------------

#[test]
fn minor_and_cofactor_signs() {
    let a = m(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]);
    // delete row 0, col 1 -> [[4, 6], [7, 10]]
    assert_eq!(a.minor(0, 1), -2.0);
    assert_eq!(a.cofactor(0, 1), 2.0);
    // delete row 1, col 1 -> [[1, 3], [7, 10]]
    assert_eq!(a.minor(1, 1), -11.0);
    assert_eq!(a.cofactor(1, 1), -11.0);
}

#[test]
fn minor_returns_zero_for_degenerate_input() {
    assert_eq!(Matrix::ones(2, 3).minor(0, 0), 0.0);
    assert_eq!(m(1, 1, &[5.0]).minor(0, 0), 0.0);
    let a = m(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(a.minor(2, 0), 0.0);
    assert_eq!(a.minor(0, 2), 0.0);
    assert_eq!(a.cofactor(0, 2), 0.0);
}
