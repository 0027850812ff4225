//! 2x2 matrix type for Q-matrix exponentiation.

use num_bigint::BigUint;

/// 2x2 matrix of `BigUint` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigUint, // [0][0]
    pub b: BigUint, // [0][1]
    pub c: BigUint, // [1][0]
    pub d: BigUint, // [1][1]
}

impl Matrix {
    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            a: BigUint::from(1u32),
            b: BigUint::ZERO,
            c: BigUint::ZERO,
            d: BigUint::from(1u32),
        }
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    ///
    /// Q^n = [[F(n+1), F(n)], [F(n), F(n-1)]], so the n-th power's
    /// `b` entry is F(n).
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self {
            a: BigUint::from(1u32),
            b: BigUint::from(1u32),
            c: BigUint::from(1u32),
            d: BigUint::ZERO,
        }
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_matrix() {
        let m = Matrix::identity();
        assert!(m.is_identity());
    }

    #[test]
    fn fibonacci_q_matrix() {
        let q = Matrix::fibonacci_q();
        assert_eq!(q.a, BigUint::from(1u32));
        assert_eq!(q.b, BigUint::from(1u32));
        assert_eq!(q.c, BigUint::from(1u32));
        assert_eq!(q.d, BigUint::ZERO);
        assert!(!q.is_identity());
    }

    #[test]
    fn clone_is_equal() {
        let q = Matrix::fibonacci_q();
        assert_eq!(q.clone(), q);
    }
}
