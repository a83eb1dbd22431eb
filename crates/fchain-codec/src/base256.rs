//! Base-256 integer serialization and integer text parsing.
//!
//! The on-disk integer format is the minimal big-endian unsigned byte
//! sequence: `ceil(bit_length / 8)` bytes, with exactly one `0x00` byte for
//! the value zero.

use num_bigint::BigUint;

use crate::error::ChainError;

/// Serialize `n` as minimal big-endian bytes.
///
/// Zero serializes to a single `0x00` byte; no other value carries a
/// leading zero byte.
#[must_use]
pub fn to_base256(n: &BigUint) -> Vec<u8> {
    n.to_bytes_be()
}

/// Parse minimal big-endian bytes back to an integer.
///
/// # Errors
///
/// Returns [`ChainError::InvalidInput`] for an empty slice — the format has
/// a one-byte minimum, so an empty input is a truncation, not a zero.
pub fn from_base256(bytes: &[u8]) -> Result<BigUint, ChainError> {
    if bytes.is_empty() {
        return Err(ChainError::InvalidInput {
            reason: "base-256 integer must be at least one byte".into(),
        });
    }
    Ok(BigUint::from_bytes_be(bytes))
}

/// Parse an integer from decimal or `0x`-prefixed hexadecimal text.
///
/// Surrounding whitespace is ignored. This is the boundary that replaces
/// interactive stdin parsing; the core never reads input itself.
///
/// # Errors
///
/// Returns [`ChainError::InvalidInput`] when the text is not a valid
/// integer in either base.
pub fn parse_integer(text: &str) -> Result<BigUint, ChainError> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(trimmed.as_bytes(), 10),
    };
    parsed.ok_or_else(|| ChainError::InvalidInput {
        reason: format!("not a valid integer: {trimmed:?}"),
    })
}
