#![allow(clippy::needless_range_loop)]
//! Dense matrix storage backed by faer.
//!
//! Wraps faer's column-major `Mat<f64>` with the row-addressed
//! operations the solver needs: element access, row swaps, and
//! matrix-vector products for residual checks.

use faer::Mat;

/// A dense matrix wrapper around faer's `Mat<f64>`.
///
/// Callers address elements as (row, column); the column-major
/// layout underneath is an implementation detail of faer.
#[derive(Debug, Clone)]
pub struct DenseMatrix {
    inner: Mat<f64>,
}

impl DenseMatrix {
    /// Create a new dense matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            inner: Mat::zeros(nrows, ncols),
        }
    }

    /// Create an identity matrix of size n x n.
    pub fn identity(n: usize) -> Self {
        let inner = Mat::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 });
        Self { inner }
    }

    /// Create a dense matrix from a flat slice in row-major order.
    pub fn from_row_major(nrows: usize, ncols: usize, data: &[f64]) -> Self {
        assert_eq!(data.len(), nrows * ncols);
        let inner = Mat::from_fn(nrows, ncols, |i, j| data[i * ncols + j]);
        Self { inner }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    /// Get element at (row, col). Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.inner.read(row, col)
    }

    /// Set element at (row, col). Panics when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.inner.write(row, col, value);
    }

    /// Exchange rows x and y element-wise.
    pub fn swap_rows(&mut self, x: usize, y: usize) {
        if x == y {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = self.inner.read(x, j);
            self.inner.write(x, j, self.inner.read(y, j));
            self.inner.write(y, j, tmp);
        }
    }

    /// Matrix-vector product: self * v -> result vector.
    pub fn mat_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(self.ncols(), v.len());
        let n = self.nrows();
        let mut result = vec![0.0; n];
        for j in 0..self.ncols() {
            let vj = v[j];
            for i in 0..n {
                result[i] += self.inner.read(i, j) * vj;
            }
        }
        result
    }
}

impl std::fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.nrows() {
            for j in 0..self.ncols() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:.6}", self.inner.read(i, j))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = DenseMatrix::zeros(3, 4);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(2, 3), 0.0);
    }

    #[test]
    fn test_identity() {
        let m = DenseMatrix::identity(3);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 1), 0.0);
        assert_eq!(m.get(1, 1), 1.0);
        assert_eq!(m.get(2, 2), 1.0);
    }

    #[test]
    fn test_from_row_major() {
        let m = DenseMatrix::from_row_major(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 0), 1.0);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
        assert_eq!(m.get(1, 2), 6.0);
    }

    #[test]
    fn test_swap_rows_involution() {
        let orig = DenseMatrix::from_row_major(3, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        let mut m = orig.clone();
        m.swap_rows(0, 2);
        assert_eq!(m.get(0, 0), 7.0);
        assert_eq!(m.get(2, 0), 1.0);
        m.swap_rows(0, 2);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), orig.get(i, j));
            }
        }
    }

    #[test]
    fn test_swap_rows_same_row() {
        let mut m = DenseMatrix::from_row_major(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.swap_rows(1, 1);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.get(1, 1), 4.0);
    }

    #[test]
    fn test_mat_vec() {
        let m = DenseMatrix::from_row_major(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let result = m.mat_vec(&[0.8, 1.4]);
        assert!((result[0] - 3.0).abs() < 1e-12);
        assert!((result[1] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_display() {
        let m = DenseMatrix::from_row_major(1, 2, &[1.0, -2.5]);
        assert_eq!(format!("{}", m), "1.000000 -2.500000\n");
    }
}
