//! Matrix multiplication for 2x2 big-integer matrices.

use crate::matrix::Matrix;

/// Multiply two 2x2 matrices: `c[i][j] = sum_k x[i][k] * y[k][j]`.
///
/// Row-by-column product over `BigUint`. Inputs are borrowed and left
/// untouched; a fresh matrix is returned.
#[must_use]
pub fn matrix_multiply(x: &Matrix, y: &Matrix) -> Matrix {
    Matrix {
        a: &x.a * &y.a + &x.b * &y.c,
        b: &x.a * &y.b + &x.b * &y.d,
        c: &x.c * &y.a + &x.d * &y.c,
        d: &x.c * &y.b + &x.d * &y.d,
    }
}
