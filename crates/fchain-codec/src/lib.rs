//! Factor-chain integer codec.
//!
//! Represents a positive integer as the ordered sequence of
//! (value, smallest-divisor) steps produced by repeated division until 1 is
//! reached, and reconstructs the integer from that sequence.
//!
//! # Overview
//!
//! ```text
//! divisor    (smallest-divisor / primality primitives — trial division)
//!     ↑ used by
//! chain      (encode: divide down to 1; decode: multiplicative fold)
//!
//! base256    (minimal big-endian integer bytes + text parsing)
//! estimate   (bit-length-derived resource bounds, logging hook only)
//! ```
//!
//! The chain recorded by [`encode`] is the prime factorization of the input
//! with multiplicity, in smallest-divisor-first order, closed by a terminal
//! `(1, None)` step. [`decode`] multiplies the recorded divisors back
//! together; `decode(encode(n)) == n` holds exactly for any `BigUint` the
//! divisor finder can factor in available time.
//!
//! # Performance
//!
//! The divisor finder is deterministic trial division and costs O(√n). That
//! bounds practical input magnitude; callers that accept untrusted integers
//! should impose their own limit rather than expect this crate to degrade
//! gracefully on a 300-digit semiprime.
//!
//! # Examples
//!
//! ```
//! use fchain_codec::{decode, encode};
//! use num_bigint::BigUint;
//!
//! let n = BigUint::from(13751u32);
//! let chain = encode(&n).unwrap();
//! assert_eq!(decode(&chain).unwrap(), n);
//! ```

#![forbid(unsafe_code)]

mod base256;
mod chain;
mod divisor;
mod error;
mod estimate;

pub use base256::{from_base256, parse_integer, to_base256};
pub use chain::{decode, encode, Chain, Step};
pub use divisor::{is_prime, smallest_divisor};
pub use error::ChainError;
pub use estimate::{ResourceEstimate, SIMULATED_QUBIT_CAP};
