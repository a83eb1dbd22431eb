//! Opaque compression boundary.
//!
//! The pipeline only needs a lossless, order-preserving
//! `compress`/`decompress` pair; it never assumes a specific algorithm.
//! [`Zstd`] is the shipped backend, [`Passthrough`] the identity.

use std::fs;
use std::io;
use std::path::Path;

/// Upper bound on a single decompressed buffer, to keep a hostile artifact
/// from ballooning memory.
const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;

/// A lossless, order-preserving byte-buffer compressor.
pub trait Compressor {
    /// Compress a whole buffer.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` from the underlying backend.
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;

    /// Invert [`Compressor::compress`] exactly.
    ///
    /// # Errors
    ///
    /// Returns an `io::Error` when the input is not a valid compressed
    /// stream or exceeds the decompressed-size bound.
    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

/// zstd backend.
#[derive(Clone, Copy, Debug)]
pub struct Zstd {
    /// Compression level, as understood by zstd (0 = backend default).
    pub level: i32,
}

impl Default for Zstd {
    fn default() -> Self {
        Self { level: 3 }
    }
}

impl Compressor for Zstd {
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        zstd::bulk::compress(data, self.level)
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        zstd::bulk::decompress(data, MAX_DECOMPRESSED_BYTES)
    }
}

/// Identity backend for uncompressed artifacts.
#[derive(Clone, Copy, Debug, Default)]
pub struct Passthrough;

impl Compressor for Passthrough {
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn decompress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}

/// Compress a whole file from `src` to `dst`.
///
/// # Errors
///
/// Returns an `io::Error` from reading, compressing, or writing.
pub fn compress_file(
    compressor: &dyn Compressor,
    src: &Path,
    dst: &Path,
) -> io::Result<()> {
    let data = fs::read(src)?;
    fs::write(dst, compressor.compress(&data)?)
}

/// Decompress a whole file from `src` to `dst`.
///
/// # Errors
///
/// Returns an `io::Error` from reading, decompressing, or writing.
pub fn decompress_file(
    compressor: &dyn Compressor,
    src: &Path,
    dst: &Path,
) -> io::Result<()> {
    let data = fs::read(src)?;
    fs::write(dst, compressor.decompress(&data)?)
}
