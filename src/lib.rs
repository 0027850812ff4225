//! # fibmatrix
//!
//! Fibonacci numbers via binary exponentiation of the 2x2 Q-matrix
//! `[[1,1],[1,0]]`, in O(log n) big-integer matrix multiplications.
//!
//! Since Q^n = [[F(n+1), F(n)], [F(n), F(n-1)]], raising Q to the n-th
//! power and reading the [0][1] entry yields F(n).

pub mod iterator;
pub mod matrix;
pub mod matrix_ops;
pub mod power;

// Re-exports
pub use iterator::FibIterator;
pub use matrix::Matrix;
pub use matrix_ops::matrix_multiply;
pub use power::matrix_power;

use num_bigint::BigUint;
use tracing::debug;

/// Compute F(n) via Q-matrix binary exponentiation.
///
/// The result is arbitrary precision; there is no upper bound on `n`
/// beyond memory. Pure function, no hidden state.
///
/// # Example
/// ```
/// assert_eq!(fibmatrix::fibonacci(10).to_string(), "55");
/// assert_eq!(fibmatrix::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigUint {
    let result = matrix_power(&Matrix::fibonacci_q(), n);
    debug!(n, result_bits = result.b.bits(), "matrix exponentiation done");
    result.b
}
