//! Byte-stream framing and transform layer for factor-chain artifacts.
//!
//! # Overview
//!
//! ```text
//! transform   (fixed complement transform over 4-byte chunks, zero-padded)
//! frame       (role-parameterized fixed-width integer header + payload)
//! compress    (opaque Compressor boundary — zstd or passthrough)
//!     ↑ composed by
//! pipeline    (whole-file encode/decode: transform → factor header →
//!              frame → optional compression, and the integer-file variant)
//! ```
//!
//! # Wire format
//!
//! ```text
//! FRAME
//!   Bytes 0..4N:  N header fields (u32 BE), roles fixed by FrameLayout
//!   Bytes 4N..:   payload, verbatim, to end of stream
//!
//! CHAIN PAYLOAD (integer-file pipeline)
//!   Per non-terminal step: u32 BE divisor length, then that many
//!   base-256 divisor bytes. Terminal step implicit; StepCount header
//!   field drives decoding.
//! ```
//!
//! The header's size-factor pair `(p, q)` is advisory metadata: decoding
//! checks `p * q` against the payload length and warns on mismatch, but the
//! format itself only guarantees field count and width.
//!
//! The byte transform is involutive per byte but invertible at the buffer
//! level only when the input length is chunk-aligned; the default frame
//! layout therefore persists the true pre-padding length in an
//! `OriginalLen` header field, and layouts without it require aligned
//! input at encode time rather than corrupting the tail silently.
//!
//! The transform is a fixed public complement, not encryption, and the
//! compression boundary is opaque: any lossless, order-preserving
//! `Compressor` fits.

#![forbid(unsafe_code)]

mod compress;
mod error;
mod frame;
mod pipeline;
mod transform;

pub use compress::{compress_file, decompress_file, Compressor, Passthrough, Zstd};
pub use error::FrameError;
pub use frame::{
    check_size_factors, read_frame, write_frame, FieldRole, FrameLayout, FIELD_WIDTH,
};
pub use pipeline::{
    decode_file, decode_integer_file, encode_file, encode_integer_file, size_factors,
    PipelineConfig,
};
pub use transform::{padded_len, transform, transform_default, CHUNK_SIZE};
