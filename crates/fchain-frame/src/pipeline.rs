//! Whole-file encode/decode pipeline.
//!
//! Raw-byte path: file bytes → chunked transform → size-factor header →
//! frame → optional compression. Integer path: base-256 integer file →
//! factor chain → length-prefixed divisor records → frame → optional
//! compression. Decoding reverses each path exactly and fails closed:
//! a corrupt frame yields an error, never partially reconstructed output.
//!
//! Everything is synchronous and whole-buffer; each call owns its input
//! and output buffers exclusively.

use std::fs;
use std::path::Path;

use fchain_codec::{
    decode, encode, from_base256, smallest_divisor, to_base256, Chain, ResourceEstimate, Step,
};
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::compress::{Compressor, Passthrough, Zstd};
use crate::error::FrameError;
use crate::frame::{check_size_factors, read_frame, write_frame, FieldRole, FrameLayout};
use crate::transform::{transform, CHUNK_SIZE};

/// Pipeline configuration.
///
/// Replaces the original system's interactive prompt/choice dispatch: every
/// knob is an explicit field, and the pipeline functions are pure in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Transform chunk width in bytes. Must be non-zero.
    pub chunk_size: usize,
    /// Header shape for the raw-byte path.
    pub layout: FrameLayout,
    /// zstd level for the outer compression stage, or `None` to store
    /// frames uncompressed.
    pub zstd_level: Option<i32>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            layout: FrameLayout::default(),
            zstd_level: None,
        }
    }
}

impl PipelineConfig {
    fn compressor(&self) -> Box<dyn Compressor> {
        match self.zstd_level {
            Some(level) => Box::new(Zstd { level }),
            None => Box::new(Passthrough),
        }
    }

    fn validate(&self) -> Result<(), FrameError> {
        if self.chunk_size == 0 {
            return Err(FrameError::InvalidInput {
                reason: "chunk size must be non-zero".into(),
            });
        }
        Ok(())
    }
}

/// Derive the `(p, q)` size-factor pair for a payload length.
///
/// `p` is the smallest divisor of `len` and `q = len / p`, so `p * q ==
/// len`. The lengths 0 and 1 sit outside the divisor finder's domain and
/// map to `(0, 0)` and `(1, 1)`.
///
/// # Errors
///
/// Returns [`FrameError::Chain`] if the divisor finder rejects the length;
/// unreachable for the lengths this module produces.
pub fn size_factors(len: u64) -> Result<(u64, u64), FrameError> {
    match len {
        0 => Ok((0, 0)),
        1 => Ok((1, 1)),
        _ => {
            let p = smallest_divisor(&BigUint::from(len))?;
            let p = p.to_u64().ok_or_else(|| FrameError::InvalidInput {
                reason: format!("size factor does not fit in u64 for length {len}"),
            })?;
            Ok((p, len / p))
        }
    }
}

fn header_fields(
    layout: &FrameLayout,
    p: u64,
    q: u64,
    step_count: u64,
    original_len: u64,
) -> Vec<u64> {
    layout
        .roles()
        .iter()
        .map(|role| match role {
            FieldRole::SizeFactorP => p,
            FieldRole::SizeFactorQ => q,
            FieldRole::StepCount => step_count,
            FieldRole::OriginalLen => original_len,
        })
        .collect()
}

fn advisory_factor_check(layout: &FrameLayout, fields: &[u64], payload_len: usize) {
    if let (Some(pi), Some(qi)) = (
        layout.index_of(FieldRole::SizeFactorP),
        layout.index_of(FieldRole::SizeFactorQ),
    ) {
        check_size_factors(fields[pi], fields[qi], payload_len);
    }
}

/// Encode a file: transform, frame with derived size factors, optionally
/// compress, and write the artifact to `dst`.
///
/// # Errors
///
/// Returns [`FrameError::InvalidInput`] when the layout has no
/// `OriginalLen` field and the input length is not chunk-aligned (the
/// transform would not be invertible), [`FrameError::ValueTooLarge`] when
/// a header field overflows 4 bytes, or [`FrameError::Io`] on file I/O.
pub fn encode_file(cfg: &PipelineConfig, src: &Path, dst: &Path) -> Result<(), FrameError> {
    cfg.validate()?;
    let raw = fs::read(src)?;

    let records_original_len = cfg.layout.index_of(FieldRole::OriginalLen).is_some();
    if !records_original_len && raw.len() % cfg.chunk_size != 0 {
        return Err(FrameError::InvalidInput {
            reason: format!(
                "input length {} is not a multiple of chunk size {} and the \
                 layout does not record the original length",
                raw.len(),
                cfg.chunk_size
            ),
        });
    }

    let payload = transform(&raw, cfg.chunk_size);
    let (p, q) = size_factors(payload.len() as u64)?;
    let fields = header_fields(&cfg.layout, p, q, 0, raw.len() as u64);

    let mut framed = Vec::with_capacity(cfg.layout.header_len() + payload.len());
    write_frame(&mut framed, &fields, &payload)?;
    fs::write(dst, cfg.compressor().compress(&framed)?)?;

    tracing::debug!(
        input_len = raw.len(),
        payload_len = payload.len(),
        p,
        q,
        compressed = cfg.zstd_level.is_some(),
        "encoded file frame"
    );
    Ok(())
}

/// Decode a file artifact produced by [`encode_file`] with the same
/// configuration.
///
/// The size-factor check is advisory: a mismatch logs a warning and
/// decoding continues. Structural failures (truncated header, inconsistent
/// recorded length) fail closed.
///
/// # Errors
///
/// Returns [`FrameError::TruncatedFrame`] when the header or the recorded
/// original length cannot be satisfied, or [`FrameError::Io`] on file I/O
/// and decompression failures.
pub fn decode_file(cfg: &PipelineConfig, src: &Path, dst: &Path) -> Result<(), FrameError> {
    cfg.validate()?;
    let stored = fs::read(src)?;
    let framed = cfg.compressor().decompress(&stored)?;

    let (fields, payload) = read_frame(&mut framed.as_slice(), cfg.layout.field_count())?;
    advisory_factor_check(&cfg.layout, &fields, payload.len());

    let restored = transform(&payload, cfg.chunk_size);
    let output = match cfg.layout.index_of(FieldRole::OriginalLen) {
        Some(index) => {
            let len = usize::try_from(fields[index]).map_err(|_| FrameError::InvalidInput {
                reason: format!("recorded length {} does not fit in memory", fields[index]),
            })?;
            if len > restored.len() {
                return Err(FrameError::TruncatedFrame {
                    needed: len,
                    got: restored.len(),
                });
            }
            restored[..len].to_vec()
        }
        None => restored,
    };

    fs::write(dst, &output)?;
    tracing::debug!(output_len = output.len(), "decoded file frame");
    Ok(())
}

/// Encode an integer file: parse the base-256 integer, factor-chain encode
/// it, and frame the divisor records under a `[p, q, step_count]` header.
///
/// Each non-terminal step is stored as a u32 big-endian length followed by
/// the divisor's base-256 bytes; the terminal step is implicit.
///
/// # Errors
///
/// Returns [`FrameError::Chain`] for an empty integer file or a value
/// below 2, [`FrameError::ValueTooLarge`] when a header field or divisor
/// record overflows its width, or [`FrameError::Io`] on file I/O.
pub fn encode_integer_file(
    cfg: &PipelineConfig,
    src: &Path,
    dst: &Path,
) -> Result<(), FrameError> {
    let n = from_base256(&fs::read(src)?)?;
    ResourceEstimate::for_value(&n).log();

    let chain = encode(&n)?;
    let mut payload = Vec::new();
    for (index, divisor) in chain.divisors().enumerate() {
        let bytes = to_base256(divisor);
        let len = u32::try_from(bytes.len()).map_err(|_| FrameError::ValueTooLarge {
            index,
            value: bytes.len() as u64,
        })?;
        payload.extend_from_slice(&len.to_be_bytes());
        payload.extend_from_slice(&bytes);
    }

    let (p, q) = size_factors(payload.len() as u64)?;
    let layout = FrameLayout::chain();
    let fields = header_fields(&layout, p, q, chain.omega() as u64, 0);

    let mut framed = Vec::with_capacity(layout.header_len() + payload.len());
    write_frame(&mut framed, &fields, &payload)?;
    fs::write(dst, cfg.compressor().compress(&framed)?)?;

    tracing::debug!(
        value = %n,
        steps = chain.omega(),
        payload_len = payload.len(),
        "encoded integer frame"
    );
    Ok(())
}

/// Decode an integer artifact produced by [`encode_integer_file`] and write
/// the recovered integer back as base-256 bytes.
///
/// # Errors
///
/// Returns [`FrameError::TruncatedFrame`] when the payload ends inside a
/// divisor record, [`FrameError::Chain`] when the reconstructed chain is
/// malformed, or [`FrameError::Io`] on file I/O and decompression failures.
pub fn decode_integer_file(
    cfg: &PipelineConfig,
    src: &Path,
    dst: &Path,
) -> Result<(), FrameError> {
    let stored = fs::read(src)?;
    let framed = cfg.compressor().decompress(&stored)?;

    let layout = FrameLayout::chain();
    let (fields, payload) = read_frame(&mut framed.as_slice(), layout.field_count())?;
    advisory_factor_check(&layout, &fields, payload.len());

    let step_index = layout
        .index_of(FieldRole::StepCount)
        .ok_or_else(|| FrameError::InvalidInput {
            reason: "integer frame layout has no step count field".into(),
        })?;
    let step_count = fields[step_index];

    let mut divisors = Vec::new();
    let mut cursor = 0usize;
    for _ in 0..step_count {
        let needed = cursor + 4;
        if payload.len() < needed {
            return Err(FrameError::TruncatedFrame {
                needed,
                got: payload.len(),
            });
        }
        let len = u32::from_be_bytes([
            payload[cursor],
            payload[cursor + 1],
            payload[cursor + 2],
            payload[cursor + 3],
        ]) as usize;
        cursor += 4;

        let needed = cursor + len;
        if payload.len() < needed {
            return Err(FrameError::TruncatedFrame {
                needed,
                got: payload.len(),
            });
        }
        divisors.push(from_base256(&payload[cursor..cursor + len])?);
        cursor += len;
    }

    // Rebuild the chain bottom-up: each step's value is the product of the
    // divisors from that step onward.
    let mut steps = vec![Step {
        value: BigUint::one(),
        divisor: None,
    }];
    let mut acc = BigUint::one();
    for divisor in divisors.into_iter().rev() {
        acc *= &divisor;
        steps.insert(
            0,
            Step {
                value: acc.clone(),
                divisor: Some(divisor),
            },
        );
    }

    let n = decode(&Chain::from_steps(steps))?;
    fs::write(dst, to_base256(&n))?;
    tracing::debug!(value = %n, steps = step_count, "decoded integer frame");
    Ok(())
}
