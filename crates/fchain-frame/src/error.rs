//! Frame and pipeline error types.

use fchain_codec::ChainError;
use thiserror::Error;

/// Errors produced by the frame codec and the file pipeline.
///
/// A size-factor mismatch is deliberately absent: it is advisory metadata,
/// surfaced as a warning by [`check_size_factors`], never as an error.
///
/// [`check_size_factors`]: crate::check_size_factors
#[derive(Debug, Error)]
pub enum FrameError {
    /// The source ended before the declared header fields were read.
    #[error("truncated frame: needed {needed} bytes, got {got}")]
    TruncatedFrame {
        /// Bytes required to satisfy the read.
        needed: usize,
        /// Bytes actually available.
        got: usize,
    },

    /// A header field does not fit the fixed 4-byte width.
    #[error("header field {index} value {value} exceeds the 4-byte field range")]
    ValueTooLarge {
        /// Zero-based position of the offending field.
        index: usize,
        /// The value that did not fit.
        value: u64,
    },

    /// Input rejected before any encoding happened.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// Error bridged from the factor-chain codec.
    #[error(transparent)]
    Chain(#[from] ChainError),

    /// Underlying file or stream I/O failure. Surfaced immediately; the
    /// pipeline performs no retries.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
