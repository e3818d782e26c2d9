//! meg-core: dense linear system solver.
//!
//! Implements Gaussian elimination with partial pivoting,
//! back-substitution, and a determinant by recursive cofactor
//! expansion, over a faer-backed dense matrix.

pub mod det;
pub mod error;
pub mod matrix;
pub mod solve;
pub mod system;

pub use det::determinant;
pub use error::ElimError;
pub use matrix::DenseMatrix;
pub use solve::{solve, solve_with, SolveObserver};
pub use system::LinearSystem;
