//! Scalar, elementwise and matrix products.
//!
//! Every operation exists in an allocating form that leaves its inputs alone
//! and an in-place form that mutates the receiver. Allocating forms are a
//! clone followed by the in-place form.
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use log::debug;

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// Multiply every entry by `k`, returning a new matrix.
    pub fn scale(&self, k: f64) -> Matrix {
        let mut out = self.clone();
        out.scale_inplace(k);
        out
    }

    pub fn scale_inplace(&mut self, k: f64) {
        for v in self.as_mut_slice() {
            *v *= k;
        }
    }

    /// Elementwise sum. Fails with [`MatrixError::ShapeMismatch`] unless both
    /// operands have the same order.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.add_inplace(other)?;
        Ok(out)
    }

    /// Elementwise difference, `self - other`.
    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        let mut out = self.clone();
        out.sub_inplace(other)?;
        Ok(out)
    }

    /// Add `other` into `self`. On a shape mismatch `self` is left untouched.
    pub fn add_inplace(&mut self, other: &Matrix) -> Result<()> {
        self.zip_inplace(other, "add", |a, b| a + b)
    }

    /// Subtract `other` from `self`. On a shape mismatch `self` is left untouched.
    pub fn sub_inplace(&mut self, other: &Matrix) -> Result<()> {
        self.zip_inplace(other, "sub", |a, b| a - b)
    }

    fn zip_inplace<F>(&mut self, other: &Matrix, op: &'static str, f: F) -> Result<()>
    where
        F: Fn(f64, f64) -> f64,
    {
        if !self.same_order(other) {
            return Err(MatrixError::ShapeMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        for (a, &b) in self.as_mut_slice().iter_mut().zip(other.as_slice()) {
            *a = f(*a, b);
        }
        Ok(())
    }

    /// Matrix product `self * other`.
    ///
    /// Requires `self.ncols() == other.nrows()`. The result is
    /// `self.nrows() x other.ncols()`, each entry a plain running sum over the
    /// shared dimension.
    ///
    /// ```
    /// # use redeem_matrix::Matrix;
    /// let a = Matrix::from_values(1, 2, &[1.0, 2.0]).unwrap();
    /// let b = Matrix::from_values(2, 1, &[3.0, 4.0]).unwrap();
    /// assert_eq!(a.mul(&b).unwrap()[(0, 0)], 11.0);
    /// ```
    pub fn mul(&self, other: &Matrix) -> Result<Matrix> {
        if !self.can_multiply(other) {
            return Err(MatrixError::ShapeMismatch {
                op: "mul",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        debug!(
            "Multiplying {}x{} by {}x{}",
            self.nrows(),
            self.ncols(),
            other.nrows(),
            other.ncols()
        );

        let mut out = Matrix::zeros(self.nrows(), other.ncols());
        for i in 0..out.nrows() {
            for j in 0..out.ncols() {
                for k in 0..self.ncols() {
                    out[(i, j)] += self[(i, k)] * other[(k, j)];
                }
            }
        }
        Ok(out)
    }
}

// Operator forms panic on incompatible shapes, like indexing out of bounds.
// Use the named methods to get a `Result` instead.

impl<'a, 'b> Add<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn add(self, rhs: &'b Matrix) -> Self::Output {
        match Matrix::add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Sub<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &'b Matrix) -> Self::Output {
        match Matrix::sub(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a, 'b> Mul<&'b Matrix> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &'b Matrix) -> Self::Output {
        match Matrix::mul(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'a> Mul<f64> for &'a Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale_inplace(rhs);
    }
}

impl<'a> Neg for &'a Matrix {
    type Output = Matrix;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}
