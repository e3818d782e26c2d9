//! Gaussian elimination with partial pivoting and back-substitution.
//!
//! Pivoting picks the first nonzero entry at or below the diagonal,
//! not the largest in magnitude; zero tests are exact. This matches
//! the reference behavior the solver reproduces, except that an
//! exhausted pivot search is reported as [`ElimError::SingularMatrix`]
//! instead of silently reusing a stale pivot.

use tracing::debug;

use crate::error::ElimError;
use crate::system::LinearSystem;

/// Hook into the solver's progress, one callback per event.
///
/// Drives the step-by-step reporting in the CLI; the unit type is
/// the no-op observer.
pub trait SolveObserver {
    /// An elimination step is starting with the given pivot value.
    fn on_step(&mut self, _step: usize, _pivot: f64) {}

    /// Rows `from` and `to` were exchanged to move the pivot in place.
    fn on_swap(&mut self, _from: usize, _to: usize) {}

    /// Row `row` was zeroed out below the pivot using `multiplier`,
    /// leaving the system in the given intermediate state.
    fn on_row_eliminated(&mut self, _row: usize, _multiplier: f64, _system: &LinearSystem) {}
}

impl SolveObserver for () {}

/// Solve `Ax = b` in place, discarding progress events.
pub fn solve(system: &mut LinearSystem) -> Result<Vec<f64>, ElimError> {
    solve_with(system, &mut ())
}

/// Solve `Ax = b` in place, reporting progress to `observer`.
///
/// Reduces the system to upper-triangular form by row elimination,
/// then back-substitutes. The solution vector is returned with index
/// i holding the i-th unknown; the system itself is left in its
/// eliminated (triangular) state.
pub fn solve_with(
    system: &mut LinearSystem,
    observer: &mut impl SolveObserver,
) -> Result<Vec<f64>, ElimError> {
    eliminate(system, observer)?;
    back_substitute(system)
}

/// Reduce the system to upper-triangular form.
fn eliminate(
    system: &mut LinearSystem,
    observer: &mut impl SolveObserver,
) -> Result<(), ElimError> {
    let n = system.dim();

    for k in 0..n.saturating_sub(1) {
        let pivot_row = find_pivot(system, k)?;
        let pivot = system.get(pivot_row, k);
        debug!(step = k, pivot, pivot_row, "elimination step");
        observer.on_step(k, pivot);

        if pivot_row != k {
            system.swap_rows(pivot_row, k);
            observer.on_swap(pivot_row, k);
        }

        let diag = system.get(k, k);
        if diag == 0.0 {
            return Err(ElimError::SingularMatrix { step: k });
        }

        for i in (k + 1)..n {
            let m = system.get(i, k) / diag;
            let rhs_update = system.rhs(i) - m * system.rhs(k);
            system.set_rhs(i, rhs_update);
            for j in k..n {
                let updated = system.get(i, j) - m * system.get(k, j);
                system.set(i, j, updated);
            }
            observer.on_row_eliminated(i, m, system);
        }
    }

    Ok(())
}

/// First row at or below `k` whose column-k entry is nonzero.
fn find_pivot(system: &LinearSystem, k: usize) -> Result<usize, ElimError> {
    let n = system.dim();
    for i in k..n {
        if system.get(i, k) != 0.0 {
            return Ok(i);
        }
    }
    Err(ElimError::SingularMatrix { step: k })
}

/// Solve an upper-triangular system from the last equation upward.
fn back_substitute(system: &LinearSystem) -> Result<Vec<f64>, ElimError> {
    let n = system.dim();
    let mut result = vec![0.0; n];

    for k in (0..n).rev() {
        let mut acc = system.rhs(k);
        for j in (k + 1)..n {
            acc -= result[j] * system.get(k, j);
        }
        let diag = system.get(k, k);
        if diag == 0.0 {
            return Err(ElimError::SingularMatrix { step: k });
        }
        result[k] = acc / diag;
    }

    Ok(result)
}
