//! Shape predicates, tolerance equality and row/column transforms.
use crate::error::{Axis, MatrixError, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// True when both matrices have the same number of rows and columns.
    pub fn same_order(&self, other: &Matrix) -> bool {
        self.shape() == other.shape()
    }

    /// True when `self * other` is defined.
    pub fn can_multiply(&self, other: &Matrix) -> bool {
        self.ncols() == other.nrows()
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Compare two matrices entry by entry with an absolute tolerance of
    /// `f64::EPSILON`.
    ///
    /// A matrix always equals itself. A pair is only rejected when its
    /// difference is greater than the tolerance, so matching infinities and
    /// any pair involving NaN are accepted. The tolerance is absolute, so
    /// entries of large magnitude that differ only in their last bits compare
    /// unequal.
    pub fn equals(&self, other: &Matrix) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if !self.same_order(other) {
            return false;
        }
        // reject only on a difference known to exceed epsilon, so NaN
        // differences (equal infinities, NaN entries) do not count
        !self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .any(|(a, b)| (a - b).abs() > f64::EPSILON)
    }

    /// The `ncols() x nrows()` matrix with `(i, j) = self(j, i)`.
    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::zeros(self.ncols(), self.nrows());
        for i in 0..t.nrows() {
            for j in 0..t.ncols() {
                t[(i, j)] = self[(j, i)];
            }
        }
        t
    }

    /// Row vector of `self(i, i)` for `i` in `0..min(rows, cols)`.
    pub fn diagonal(&self) -> Matrix {
        let dim = self.nrows().min(self.ncols());
        let mut diag = Matrix::zeros(1, dim);
        for i in 0..dim {
            diag[(0, i)] = self[(i, i)];
        }
        diag
    }

    /// Sum of the diagonal entries.
    pub fn trace(&self) -> f64 {
        let dim = self.nrows().min(self.ncols());
        (0..dim).map(|i| self[(i, i)]).sum()
    }

    /// Copy row `r` out as a `1 x ncols()` matrix.
    pub fn row(&self, r: usize) -> Result<Matrix> {
        self.check_index(Axis::Row, r)?;
        Matrix::from_values(1, self.ncols(), self.row_slice(r))
    }

    /// Copy column `c` out as an `nrows() x 1` matrix.
    pub fn col(&self, c: usize) -> Result<Matrix> {
        self.check_index(Axis::Col, c)?;
        let values: Vec<f64> = (0..self.nrows()).map(|i| self[(i, c)]).collect();
        Matrix::from_shape_vec((self.nrows(), 1), values)
    }

    /// A copy of `self` without row `r`; remaining rows keep their order.
    pub fn delete_row(&self, r: usize) -> Result<Matrix> {
        self.check_index(Axis::Row, r)?;
        let mut data = Vec::with_capacity((self.nrows() - 1) * self.ncols());
        for i in (0..self.nrows()).filter(|&i| i != r) {
            data.extend_from_slice(self.row_slice(i));
        }
        Matrix::from_shape_vec((self.nrows() - 1, self.ncols()), data)
    }

    /// A copy of `self` without column `c`; remaining columns keep their order.
    pub fn delete_col(&self, c: usize) -> Result<Matrix> {
        self.check_index(Axis::Col, c)?;
        let mut data = Vec::with_capacity(self.nrows() * (self.ncols() - 1));
        for i in 0..self.nrows() {
            let row = self.row_slice(i);
            data.extend_from_slice(&row[..c]);
            data.extend_from_slice(&row[c + 1..]);
        }
        Matrix::from_shape_vec((self.nrows(), self.ncols() - 1), data)
    }

    /// Swap rows `r1` and `r2` in place.
    ///
    /// Does nothing when the indices are equal or either one is out of range.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) {
        let rows = self.nrows();
        if r1 >= rows || r2 >= rows || r1 == r2 {
            return;
        }
        let (lo, hi) = (r1.min(r2), r1.max(r2));
        let mut upper = self.row_slice(lo).to_vec();
        let lower = self.row_slice_mut(hi);
        upper.swap_with_slice(lower);
        self.row_slice_mut(lo).copy_from_slice(&upper);
    }

    /// Swap columns `c1` and `c2` in place.
    ///
    /// Does nothing when the indices are equal or either one is out of range.
    pub fn swap_cols(&mut self, c1: usize, c2: usize) {
        let (rows, cols) = self.shape();
        if c1 >= cols || c2 >= cols || c1 == c2 {
            return;
        }
        let data = self.as_mut_slice();
        for i in 0..rows {
            data.swap(i * cols + c1, i * cols + c2);
        }
    }

    /// Replace every entry `v` with `f(v)`.
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(f64) -> f64,
    {
        for v in self.as_mut_slice() {
            *v = f(*v);
        }
    }

    /// Allocating counterpart of [`Matrix::map`].
    pub fn mapv<F>(&self, f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        let mut out = self.clone();
        out.map(f);
        out
    }

    pub fn fill(&mut self, value: f64) {
        self.as_mut_slice().fill(value);
    }

    fn check_index(&self, axis: Axis, index: usize) -> Result<()> {
        let len = match axis {
            Axis::Row => self.nrows(),
            Axis::Col => self.ncols(),
        };
        if index >= len {
            return Err(MatrixError::IndexOutOfBounds { axis, index, len });
        }
        Ok(())
    }
}

impl PartialEq for Matrix {
    /// Tolerance equality, see [`Matrix::equals`].
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
