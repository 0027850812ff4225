//! Binary matrix exponentiation.
//!
//! Computes mat^n in O(log n) multiplications by recursive squaring,
//! the matrix lift of scalar binary exponentiation:
//! a^n = (a^(n/2))^2 when n is even, a * (a^(n/2))^2 when n is odd.

use crate::matrix::Matrix;
use crate::matrix_ops::matrix_multiply;

/// Compute `mat^n` by recursive squaring.
///
/// `mat^0` is the identity matrix. Matrix multiplication is associative
/// but not commutative, so the odd case composes as `(mat * r) * r` with
/// the base on the left.
///
/// Recursion depth is the bit length of `n`, at most 64.
#[must_use]
pub fn matrix_power(mat: &Matrix, n: u64) -> Matrix {
    if n == 0 {
        return Matrix::identity();
    }
    if n == 1 {
        return mat.clone();
    }

    let r = matrix_power(mat, n / 2);

    if n % 2 == 0 {
        matrix_multiply(&r, &r)
    } else {
        matrix_multiply(&matrix_multiply(mat, &r), &r)
    }
}
