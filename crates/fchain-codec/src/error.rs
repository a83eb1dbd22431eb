//! Factor-chain error types.

use thiserror::Error;

/// Errors produced by the factor-chain codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Input outside the codec's domain (n < 2 to encode, n ≤ 1 to the
    /// divisor finder, malformed integer text or empty byte input).
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// A chain that could not have been produced by `encode`.
    #[error("malformed chain: {reason}")]
    MalformedChain {
        /// Which structural rule the chain violated.
        reason: String,
    },
}
