//! Storage and construction for the dense [`Matrix`] type.
//!
//! A `Matrix` owns a single row-major `Vec<f64>` whose length is always
//! `rows * cols`. Shape never changes after construction; operations that
//! add or remove rows and columns return a new value.
use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::{MatrixError, Result};

#[derive(Clone, Debug)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

/// Allocate a `rows x cols` buffer filled with `value`, reporting overflow
/// and allocator refusal instead of aborting.
fn try_alloc(rows: usize, cols: usize, value: f64) -> Result<Vec<f64>> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::Allocation { rows, cols })?;
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| MatrixError::Allocation { rows, cols })?;
    data.resize(len, value);
    Ok(data)
}

/// `rows * cols`, panicking like `Vec` does when the product overflows.
fn checked_len(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(len) => len,
        None => panic!("capacity overflow: {}x{} matrix", rows, cols),
    }
}

impl Matrix {
    /// Allocate a `rows x cols` matrix whose contents are unspecified.
    ///
    /// The buffer is currently zero-filled, but callers should overwrite every
    /// entry before reading it. This is the only constructor that reports
    /// allocation failure as an error; the convenience fills below follow
    /// `Vec` and abort on out-of-memory.
    pub fn empty(rows: usize, cols: usize) -> Result<Self> {
        let data = try_alloc(rows, cols, 0.0)?;
        Ok(Self { data, rows, cols })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatrixError::ValueCount {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build a matrix from exactly `rows * cols` values given in row-major order.
    ///
    /// ```
    /// # use redeem_matrix::Matrix;
    /// let a = Matrix::from_values(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(a[(1, 0)], 3.0);
    /// assert!(Matrix::from_values(2, 2, &[1.0, 2.0, 3.0]).is_err());
    /// ```
    pub fn from_values(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        Self::from_shape_vec((rows, cols), values.to_vec())
    }

    /// Build a matrix from a list of rows, rejecting ragged input.
    ///
    /// An empty list yields a `0 x 0` matrix.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::ValueCount {
                    rows: nrows,
                    cols: ncols,
                    len: data.len() + row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Self::from_shape_vec((nrows, ncols), data)
    }

    /// Panics on `rows * cols` overflow and aborts on out-of-memory, like `vec!`.
    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            data: vec![value; checked_len(rows, cols)],
            rows,
            cols,
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 0.0)
    }

    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 1.0)
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut eye = Self::zeros(n, n);
        for i in 0..n {
            eye[(i, i)] = 1.0;
        }
        eye
    }

    /// A `rows x cols` matrix of uniform samples from `[0, 1)`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let data = (0..checked_len(rows, cols))
            .map(|_| rng.gen::<f64>())
            .collect();
        Self { data, rows, cols }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored entries, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row < self.rows && col < self.cols {
            Some(&self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row < self.rows && col < self.cols {
            let offset = self.offset(row, col);
            Some(&mut self.data[offset])
        } else {
            None
        }
    }

    /// Borrow row `row` as a slice. Panics if `row >= nrows()`.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [f64] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}
