//! Conversions to and from serde and `ndarray`.
//!
//! Serialized matrices are `{ "rows": m, "cols": n, "data": [...] }` with
//! `data` in row-major order. Deserialization checks that `data` holds exactly
//! `rows * cols` values.
use ndarray::Array2;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::matrix::Matrix;

#[derive(serde::Serialize)]
struct MatrixRef<'a> {
    rows: usize,
    cols: usize,
    data: &'a [f64],
}

#[derive(serde::Deserialize)]
struct MatrixParts {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Serialize for Matrix {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        MatrixRef {
            rows: self.nrows(),
            cols: self.ncols(),
            data: self.as_slice(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = MatrixParts::deserialize(deserializer)?;
        Matrix::from_shape_vec((parts.rows, parts.cols), parts.data).map_err(de::Error::custom)
    }
}

impl From<&Array2<f64>> for Matrix {
    fn from(value: &Array2<f64>) -> Self {
        let (rows, cols) = value.dim();
        let mut out = Matrix::zeros(rows, cols);
        for (dst, src) in out.as_mut_slice().iter_mut().zip(value.iter()) {
            *dst = *src;
        }
        out
    }
}

impl From<&Matrix> for Array2<f64> {
    fn from(value: &Matrix) -> Self {
        value.to_ndarray()
    }
}

impl Matrix {
    pub fn to_ndarray(&self) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(i, j)| self[(i, j)])
    }
}
