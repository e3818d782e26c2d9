//! Error types shared across the solver.

use thiserror::Error;

/// Failures during system construction or solving.
///
/// All variants are terminal for the current solve: no retry is
/// attempted and no partial result is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElimError {
    #[error("System dimension must be positive")]
    InvalidDimension,

    #[error("Truncated input: expected {expected} values, got {got}")]
    TruncatedInput { expected: usize, got: usize },

    #[error("Matrix is singular (no usable pivot at step {step})")]
    SingularMatrix { step: usize },
}
