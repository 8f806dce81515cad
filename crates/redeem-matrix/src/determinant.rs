//! Determinants by closed form for small orders and Laplace expansion above.
//!
//! Orders 1 to 3 use explicit formulas. Larger orders expand along the first
//! column, recursing through [`Matrix::cofactor`]. The recursion allocates a
//! fresh submatrix per term and is exponential in the order, so it is only
//! suitable for small matrices.
use log::trace;

use crate::matrix::Matrix;

impl Matrix {
    /// Determinant of a square matrix.
    ///
    /// Non-square matrices have determinant `0.0`. The `0 x 0` matrix has
    /// determinant `1.0`.
    ///
    /// ```
    /// # use redeem_matrix::Matrix;
    /// let a = Matrix::from_values(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a.determinant(), -2.0);
    /// ```
    pub fn determinant(&self) -> f64 {
        if !self.is_square() {
            return 0.0;
        }
        match self.ncols() {
            0 => 1.0,
            1 => det_1(self),
            2 => det_2(self),
            3 => det_3(self),
            n => det_laplace(self, n),
        }
    }

    /// Determinant of `self` with row `i` and column `j` removed.
    ///
    /// Returns `0.0` instead of an error when `self` is not square, has order
    /// one or less, or `i`/`j` is out of range.
    pub fn minor(&self, i: usize, j: usize) -> f64 {
        if !self.is_square() || self.ncols() <= 1 || i >= self.nrows() || j >= self.ncols() {
            return 0.0;
        }
        match self.delete_row(i).and_then(|m| m.delete_col(j)) {
            Ok(sub) => sub.determinant(),
            Err(_) => 0.0,
        }
    }

    /// Signed minor: `(-1)^(i + j) * minor(i, j)`.
    pub fn cofactor(&self, i: usize, j: usize) -> f64 {
        let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(i, j)
    }

    /// True when `|determinant| <= f64::EPSILON`.
    pub fn is_singular(&self) -> bool {
        self.determinant().abs() <= f64::EPSILON
    }
}

fn det_1(a: &Matrix) -> f64 {
    a[(0, 0)]
}

fn det_2(a: &Matrix) -> f64 {
    let (a00, a01) = (a[(0, 0)], a[(0, 1)]);
    let (a10, a11) = (a[(1, 0)], a[(1, 1)]);
    a00 * a11 - a01 * a10
}

// Rule of Sarrus. The term order is fixed so results are reproducible bit for bit.
fn det_3(m: &Matrix) -> f64 {
    let (a, b, c) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (d, e, f) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (g, h, i) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);
    a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
}

fn det_laplace(a: &Matrix, n: usize) -> f64 {
    trace!("Laplace expansion of order {}", n);
    let mut acc = 0.0;
    for i in 0..n {
        let v = a[(i, 0)];
        // zero terms contribute nothing, skip the recursive minor
        if v == 0.0 {
            continue;
        }
        acc += v * a.cofactor(i, 0);
    }
    acc
}
