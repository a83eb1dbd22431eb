//! Smallest-divisor and primality primitives.
//!
//! Deterministic trial division, O(√n). This is the cost floor for the whole
//! codec; see the crate-level performance note.

use num_bigint::BigUint;
use num_integer::{Integer, Roots};
use num_traits::{One, Zero};

/// Whether `n` is prime.
///
/// Returns `false` for n < 2. Trial-divides by 2 and every odd number up to
/// √n, so this is exact but only acceptable for moderate magnitudes.
#[must_use]
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n < &two {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }
    let limit = n.sqrt();
    let mut candidate = BigUint::from(3u32);
    while candidate <= limit {
        if (n % &candidate).is_zero() {
            return false;
        }
        candidate += 2u32;
    }
    true
}

/// Smallest divisor of `n` greater than 1.
///
/// Returns 2 for even `n`; otherwise trial-divides by odd numbers from 3 up
/// to √n. Returns `n` itself when no divisor is found (`n` is prime).
///
/// # Errors
///
/// Returns [`ChainError::InvalidInput`] for n ≤ 1, where a smallest divisor
/// does not exist.
///
/// [`ChainError::InvalidInput`]: crate::ChainError::InvalidInput
pub fn smallest_divisor(n: &BigUint) -> Result<BigUint, crate::ChainError> {
    if n <= &BigUint::one() {
        return Err(crate::ChainError::InvalidInput {
            reason: format!("smallest_divisor is undefined for {n}"),
        });
    }
    if n.is_even() {
        return Ok(BigUint::from(2u32));
    }
    let limit = n.sqrt();
    let mut candidate = BigUint::from(3u32);
    while candidate <= limit {
        if (n % &candidate).is_zero() {
            return Ok(candidate);
        }
        candidate += 2u32;
    }
    Ok(n.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn is_prime_small_values() {
        assert!(!is_prime(&big(0)));
        assert!(!is_prime(&big(1)));
        assert!(is_prime(&big(2)));
        assert!(is_prime(&big(3)));
        assert!(!is_prime(&big(4)));
        assert!(is_prime(&big(5)));
        assert!(!is_prime(&big(9)));
    }

    #[test]
    fn is_prime_97() {
        assert!(is_prime(&big(97)));
    }

    #[test]
    fn is_prime_perfect_square_of_prime() {
        // 97^2 — the √n bound must be inclusive.
        assert!(!is_prime(&big(9409)));
    }

    #[test]
    fn smallest_divisor_even() {
        assert_eq!(smallest_divisor(&big(2)).unwrap(), big(2));
        assert_eq!(smallest_divisor(&big(100)).unwrap(), big(2));
    }

    #[test]
    fn smallest_divisor_odd_composite() {
        assert_eq!(smallest_divisor(&big(9)).unwrap(), big(3));
        assert_eq!(smallest_divisor(&big(35)).unwrap(), big(5));
        assert_eq!(smallest_divisor(&big(9409)).unwrap(), big(97));
    }

    #[test]
    fn smallest_divisor_prime_returns_self() {
        assert_eq!(smallest_divisor(&big(97)).unwrap(), big(97));
        assert_eq!(smallest_divisor(&big(13751)).unwrap(), big(13751));
    }

    #[test]
    fn smallest_divisor_rejects_zero_and_one() {
        assert!(matches!(
            smallest_divisor(&big(0)),
            Err(crate::ChainError::InvalidInput { .. })
        ));
        assert!(matches!(
            smallest_divisor(&big(1)),
            Err(crate::ChainError::InvalidInput { .. })
        ));
    }

    #[test]
    fn smallest_divisor_divides_input() {
        for n in 2u64..200 {
            let n = big(n);
            let d = smallest_divisor(&n).unwrap();
            assert!((&n % &d).is_zero(), "{d} does not divide {n}");
        }
    }
}
