//! Determinant by recursive cofactor expansion.
//!
//! Expands along rows over a shrinking submatrix addressed with a
//! cyclic column index `(j + 1) mod n`, reproducing the reference
//! scheme exactly, including the sign flip applied to 2x2 blocks
//! that wrap around the last column.

use crate::system::LinearSystem;

/// Determinant of the coefficient matrix, read-only.
///
/// O(n!) in the dimension; intended as a diagnostic for single-digit
/// n, not as a building block for larger systems.
pub fn determinant(system: &LinearSystem) -> f64 {
    let n = system.dim();
    if n == 1 {
        return system.get(0, 0);
    }
    det_rec(system, 0, 0, n)
}

/// Cofactor expansion of the size-m submatrix anchored at (i, j).
///
/// Column indices are absolute and wrap modulo the full dimension.
fn det_rec(system: &LinearSystem, i: usize, j: usize, m: usize) -> f64 {
    let n = system.dim();

    if m == 2 {
        let mut d = system.get(i, j) * system.get(i + 1, (j + 1) % n)
            - system.get(i + 1, j) * system.get(i, (j + 1) % n);
        if j + 1 == n {
            d = -d;
        }
        return d;
    }

    let mut acc = 0.0;
    let mut sign = 1.0;
    for jj in j..m {
        acc += sign * system.get(i, jj) * det_rec(system, i + 1, (jj + 1) % n, m - 1);
        sign = -sign;
    }
    acc
}
