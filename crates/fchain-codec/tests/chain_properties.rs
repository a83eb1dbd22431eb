//! Property-based tests for the factor-chain codec.
//!
//! Validates the codec's algebraic laws over randomly drawn inputs:
//! 1. Round trip: `decode(encode(n)) == n`
//! 2. Divisor product: the recorded divisors multiply back to n
//! 3. Ω law: chain length minus the terminal step equals the number of
//!    prime factors with multiplicity
//! 4. Every recorded divisor is prime (smallest divisors always are)

use fchain_codec::{decode, encode, from_base256, is_prime, to_base256, Chain, Step};
use num_bigint::BigUint;
use num_traits::One;
use proptest::prelude::*;

/// Naive Ω(n) by repeated division, independent of the codec under test.
fn omega_reference(mut n: u64) -> usize {
    let mut count = 0;
    let mut d = 2;
    while d * d <= n {
        while n % d == 0 {
            n /= d;
            count += 1;
        }
        d += 1;
    }
    if n > 1 {
        count += 1;
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip(n in 2u64..=2_000_000) {
        let n = BigUint::from(n);
        let chain = encode(&n).unwrap();
        prop_assert_eq!(decode(&chain).unwrap(), n);
    }

    #[test]
    fn prop_divisor_product(n in 2u64..=2_000_000) {
        let n = BigUint::from(n);
        let chain = encode(&n).unwrap();
        let product: BigUint = chain.divisors().product();
        prop_assert_eq!(product, n);
    }

    #[test]
    fn prop_omega_law(n in 2u64..=2_000_000) {
        let chain = encode(&BigUint::from(n)).unwrap();
        prop_assert_eq!(chain.len() - 1, omega_reference(n));
        prop_assert_eq!(chain.omega(), omega_reference(n));
    }

    #[test]
    fn prop_divisors_are_prime_and_ordered(n in 2u64..=500_000) {
        let chain = encode(&BigUint::from(n)).unwrap();
        let divisors: Vec<&BigUint> = chain.divisors().collect();
        for pair in divisors.windows(2) {
            prop_assert!(pair[0] <= pair[1], "divisors not non-decreasing");
        }
        for d in divisors {
            prop_assert!(is_prime(d), "recorded divisor {d} is not prime");
        }
    }

    #[test]
    fn prop_terminal_step_is_one_none(n in 2u64..=500_000) {
        let chain = encode(&BigUint::from(n)).unwrap();
        let terminal = chain.steps().last().unwrap();
        prop_assert!(terminal.value.is_one());
        prop_assert!(terminal.divisor.is_none());
    }

    #[test]
    fn prop_base256_round_trip(n in 0u64..=u64::MAX) {
        let n = BigUint::from(n);
        let bytes = to_base256(&n);
        prop_assert!(!bytes.is_empty());
        // Minimal: no leading zero byte except for the value 0 itself.
        if bytes.len() > 1 {
            prop_assert_ne!(bytes[0], 0);
        }
        prop_assert_eq!(from_base256(&bytes).unwrap(), n);
    }

    #[test]
    fn prop_decode_ignores_step_values(n in 2u64..=100_000) {
        // Decode is a fold over divisors only; corrupting a non-terminal
        // value field must not change the result.
        let n = BigUint::from(n);
        let chain = encode(&n).unwrap();
        let mut steps: Vec<Step> = chain.steps().to_vec();
        if steps.len() > 1 {
            steps[0].value = BigUint::from(999_999_999u64);
        }
        prop_assert_eq!(decode(&Chain::from_steps(steps)).unwrap(), n);
    }
}
