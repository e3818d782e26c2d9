//! The linear system `Ax = b` as a single owned structure.
//!
//! Holds the n x n coefficient matrix together with its right-hand
//! side. Elimination mutates both in place; row swaps keep the
//! matrix rows and rhs entries paired.

use crate::error::ElimError;
use crate::matrix::DenseMatrix;

/// A dense square system of n equations in n unknowns.
#[derive(Debug, Clone)]
pub struct LinearSystem {
    n: usize,
    matrix: DenseMatrix,
    rhs: Vec<f64>,
}

impl LinearSystem {
    /// Build a system from a flat value stream in reading order:
    /// row 0's n coefficients then its rhs entry, row 1's, and so on.
    ///
    /// Construction is atomic: either a complete system is returned or
    /// an error, never a partially filled one. Values beyond the
    /// required n^2 + n are ignored.
    pub fn from_tokens(n: usize, values: &[f64]) -> Result<Self, ElimError> {
        if n == 0 {
            return Err(ElimError::InvalidDimension);
        }
        let expected = n * n + n;
        if values.len() < expected {
            return Err(ElimError::TruncatedInput {
                expected,
                got: values.len(),
            });
        }

        let mut matrix = DenseMatrix::zeros(n, n);
        let mut rhs = Vec::with_capacity(n);
        for i in 0..n {
            let row = &values[i * (n + 1)..];
            for j in 0..n {
                matrix.set(i, j, row[j]);
            }
            rhs.push(row[n]);
        }

        Ok(Self { n, matrix, rhs })
    }

    /// Build a system from an already-assembled matrix and rhs.
    pub fn from_parts(matrix: DenseMatrix, rhs: Vec<f64>) -> Result<Self, ElimError> {
        let n = matrix.nrows();
        if n == 0 {
            return Err(ElimError::InvalidDimension);
        }
        assert_eq!(matrix.ncols(), n, "coefficient matrix must be square");
        assert_eq!(rhs.len(), n, "rhs length must match dimension");
        Ok(Self { n, matrix, rhs })
    }

    /// System dimension n.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Coefficient at (row, col).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }

    /// Set coefficient at (row, col).
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.matrix.set(i, j, value);
    }

    /// Right-hand-side entry for row i.
    pub fn rhs(&self, i: usize) -> f64 {
        self.rhs[i]
    }

    /// Set the right-hand-side entry for row i.
    pub fn set_rhs(&mut self, i: usize, value: f64) {
        self.rhs[i] = value;
    }

    /// The coefficient matrix.
    pub fn matrix(&self) -> &DenseMatrix {
        &self.matrix
    }

    /// The right-hand side.
    pub fn rhs_vec(&self) -> &[f64] {
        &self.rhs
    }

    /// Exchange equations x and y: coefficient rows and rhs entries
    /// move together, so the system stays consistent.
    pub fn swap_rows(&mut self, x: usize, y: usize) {
        self.matrix.swap_rows(x, y);
        self.rhs.swap(x, y);
    }

    /// Residual `A*x - b` for a candidate solution, for verification.
    pub fn residual(&self, x: &[f64]) -> Vec<f64> {
        let ax = self.matrix.mat_vec(x);
        ax.iter().zip(self.rhs.iter()).map(|(a, b)| a - b).collect()
    }
}

impl std::fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.n {
            for j in 0..self.n {
                write!(f, "{:.6} ", self.matrix.get(i, j))?;
            }
            writeln!(f, "{:.6} ", self.rhs[i])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tokens() {
        // 2x2 system: [[2,1],[1,3]], b = [3,5]
        let sys = LinearSystem::from_tokens(2, &[2.0, 1.0, 3.0, 1.0, 3.0, 5.0]).unwrap();
        assert_eq!(sys.dim(), 2);
        assert_eq!(sys.get(0, 0), 2.0);
        assert_eq!(sys.get(0, 1), 1.0);
        assert_eq!(sys.get(1, 0), 1.0);
        assert_eq!(sys.get(1, 1), 3.0);
        assert_eq!(sys.rhs(0), 3.0);
        assert_eq!(sys.rhs(1), 5.0);
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = LinearSystem::from_tokens(0, &[]).unwrap_err();
        assert_eq!(err, ElimError::InvalidDimension);
    }

    #[test]
    fn test_truncated_input_rejected() {
        let err = LinearSystem::from_tokens(2, &[2.0, 1.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            ElimError::TruncatedInput {
                expected: 6,
                got: 3
            }
        );
    }

    #[test]
    fn test_swap_rows_involution() {
        let orig = LinearSystem::from_tokens(2, &[2.0, 1.0, 3.0, 1.0, 3.0, 5.0]).unwrap();
        let mut sys = orig.clone();
        sys.swap_rows(0, 1);
        assert_eq!(sys.get(0, 0), 1.0);
        assert_eq!(sys.rhs(0), 5.0);
        sys.swap_rows(0, 1);
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(sys.get(i, j), orig.get(i, j));
            }
            assert_eq!(sys.rhs(i), orig.rhs(i));
        }
    }

    #[test]
    fn test_residual() {
        let sys = LinearSystem::from_tokens(2, &[2.0, 1.0, 3.0, 1.0, 3.0, 5.0]).unwrap();
        let r = sys.residual(&[0.8, 1.4]);
        assert!(r[0].abs() < 1e-12);
        assert!(r[1].abs() < 1e-12);
    }

    #[test]
    fn test_display_format() {
        let sys = LinearSystem::from_tokens(1, &[2.0, 4.0]).unwrap();
        assert_eq!(format!("{}", sys), "2.000000 4.000000 \n");
    }
}
