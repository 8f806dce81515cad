//! Induced and entrywise matrix norms.
use crate::config::NormKind;
use crate::matrix::Matrix;

impl Matrix {
    /// Maximum over columns of the absolute column sum. `0.0` when empty.
    pub fn norm_1(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mut max_sum = 0.0;
        for j in 0..self.ncols() {
            let sum: f64 = (0..self.nrows()).map(|i| self[(i, j)].abs()).sum();
            if sum > max_sum {
                max_sum = sum;
            }
        }
        max_sum
    }

    /// Maximum over rows of the absolute row sum. `0.0` when empty.
    pub fn norm_inf(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let mut max_sum = 0.0;
        for i in 0..self.nrows() {
            let sum: f64 = self.row_slice(i).iter().map(|v| v.abs()).sum();
            if sum > max_sum {
                max_sum = sum;
            }
        }
        max_sum
    }

    pub fn norm_frobenius(&self) -> f64 {
        self.as_slice().iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn norm(&self, kind: NormKind) -> f64 {
        match kind {
            NormKind::One => self.norm_1(),
            NormKind::Infinity => self.norm_inf(),
            NormKind::Frobenius => self.norm_frobenius(),
        }
    }
}
