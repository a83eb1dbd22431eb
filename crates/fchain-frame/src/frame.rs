//! Integer-header frame codec.
//!
//! A frame is N fixed-width (4-byte, big-endian, unsigned) header fields
//! followed by the raw payload to end of stream. How many fields there are
//! and what they mean is a caller configuration expressed as a
//! [`FrameLayout`] over [`FieldRole`]s — one codec instead of a
//! hand-duplicated format per header shape.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::error::FrameError;

/// Width of one header field in bytes.
pub const FIELD_WIDTH: usize = 4;

/// Meaning assigned to one header field position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldRole {
    /// Smallest divisor `p` of the transformed payload length.
    SizeFactorP,
    /// Cofactor `q` with `p * q == payload length`.
    SizeFactorQ,
    /// Number of non-terminal factor-chain steps in the payload.
    StepCount,
    /// True pre-padding input length; decode truncates to it.
    OriginalLen,
}

/// Declared header shape: an ordered list of field roles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameLayout {
    roles: Vec<FieldRole>,
}

impl FrameLayout {
    /// Layout with an explicit role list.
    #[must_use]
    pub fn new(roles: Vec<FieldRole>) -> Self {
        Self { roles }
    }

    /// The bare `[p, q]` layout. Requires chunk-aligned input at encode
    /// time, since nothing records the pre-padding length.
    #[must_use]
    pub fn size_factors() -> Self {
        Self::new(vec![FieldRole::SizeFactorP, FieldRole::SizeFactorQ])
    }

    /// The `[p, q, original_len]` layout. Default; round-trips inputs of
    /// any length.
    #[must_use]
    pub fn size_factors_with_len() -> Self {
        Self::new(vec![
            FieldRole::SizeFactorP,
            FieldRole::SizeFactorQ,
            FieldRole::OriginalLen,
        ])
    }

    /// The `[p, q, step_count]` layout used by the integer-file pipeline.
    #[must_use]
    pub fn chain() -> Self {
        Self::new(vec![
            FieldRole::SizeFactorP,
            FieldRole::SizeFactorQ,
            FieldRole::StepCount,
        ])
    }

    /// Roles in declaration order.
    #[must_use]
    pub fn roles(&self) -> &[FieldRole] {
        &self.roles
    }

    /// Number of header fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.roles.len()
    }

    /// Header length in bytes.
    #[must_use]
    pub fn header_len(&self) -> usize {
        self.roles.len() * FIELD_WIDTH
    }

    /// Position of `role`, if the layout carries it.
    #[must_use]
    pub fn index_of(&self, role: FieldRole) -> Option<usize> {
        self.roles.iter().position(|r| *r == role)
    }
}

impl Default for FrameLayout {
    fn default() -> Self {
        Self::size_factors_with_len()
    }
}

/// Write header fields then the payload.
///
/// Each field is written as a 4-byte big-endian unsigned integer in slice
/// order, then the payload verbatim.
///
/// # Errors
///
/// Returns [`FrameError::ValueTooLarge`] when a field exceeds `u32::MAX`,
/// or [`FrameError::Io`] on a sink failure.
pub fn write_frame(
    sink: &mut impl Write,
    fields: &[u64],
    payload: &[u8],
) -> Result<(), FrameError> {
    for (index, &value) in fields.iter().enumerate() {
        let Ok(narrow) = u32::try_from(value) else {
            return Err(FrameError::ValueTooLarge { index, value });
        };
        sink.write_all(&narrow.to_be_bytes())?;
    }
    sink.write_all(payload)?;
    Ok(())
}

/// Read exactly `field_count` header fields, then the rest of the source as
/// payload.
///
/// # Errors
///
/// Returns [`FrameError::TruncatedFrame`] when the source holds fewer bytes
/// than the declared header needs, or [`FrameError::Io`] on a read failure.
pub fn read_frame(
    source: &mut impl Read,
    field_count: usize,
) -> Result<(Vec<u64>, Vec<u8>), FrameError> {
    let mut buf = Vec::new();
    source.read_to_end(&mut buf)?;

    let needed = field_count * FIELD_WIDTH;
    if buf.len() < needed {
        return Err(FrameError::TruncatedFrame {
            needed,
            got: buf.len(),
        });
    }

    let fields = buf[..needed]
        .chunks_exact(FIELD_WIDTH)
        .map(|field| u64::from(u32::from_be_bytes([field[0], field[1], field[2], field[3]])))
        .collect();
    Ok((fields, buf[needed..].to_vec()))
}

/// Advisory consistency check: does `p * q` equal the payload length?
///
/// Factor derivation is metadata, not a structural guarantee of the format;
/// a mismatch is logged at warn level and reported in the return value, but
/// never raised as an error.
pub fn check_size_factors(p: u64, q: u64, payload_len: usize) -> bool {
    let product = u128::from(p) * u128::from(q);
    let matches = product == payload_len as u128;
    if !matches {
        tracing::warn!(
            p,
            q,
            payload_len,
            "size factors do not match payload length"
        );
    }
    matches
}
