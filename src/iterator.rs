//! Iterative Fibonacci reference using the additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Lazy iterator over the Fibonacci sequence, yielding F(0), F(1), F(2), ...
///
/// Runs in O(n) big-integer additions. Serves as the linear-time
/// cross-check for the matrix exponentiation path.
///
/// # Example
/// ```
/// use fibmatrix::FibIterator;
/// let fibs: Vec<_> = FibIterator::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug)]
pub struct FibIterator {
    curr: BigUint,
    next: BigUint,
}

impl FibIterator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            curr: BigUint::zero(),
            next: BigUint::one(),
        }
    }
}

impl Default for FibIterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibIterator {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let val = self.curr.clone();
        let sum = &self.curr + &self.next;
        self.curr = std::mem::replace(&mut self.next, sum);
        Some(val)
    }
}
