//! Chunked complement transform.
//!
//! Partitions a buffer into fixed-size chunks, zero-pads the last chunk to
//! full width, and complements every byte (`b ^ 0xFF`), padding included.
//! Padding bytes therefore appear as `0xFF` in the transformed stream.
//!
//! The transform is involutive per byte, so applying it twice to a
//! chunk-aligned buffer is the identity. When padding was added the double
//! application returns the original bytes followed by a zeroed tail, and
//! the original length must be persisted out of band to recover the exact
//! input — the frame layer's `OriginalLen` field exists for this.

/// Chunk width in bytes. Fixed across all frame variants.
pub const CHUNK_SIZE: usize = 4;

/// Length of `len` bytes after padding up to a multiple of `chunk_size`.
///
/// `chunk_size` must be non-zero.
#[must_use]
pub fn padded_len(len: usize, chunk_size: usize) -> usize {
    debug_assert!(chunk_size > 0, "chunk size must be non-zero");
    len.div_ceil(chunk_size) * chunk_size
}

/// Apply the chunked complement transform.
///
/// The output length is `padded_len(data.len(), chunk_size)`; chunk order
/// is preserved. `chunk_size` must be non-zero.
#[must_use]
pub fn transform(data: &[u8], chunk_size: usize) -> Vec<u8> {
    debug_assert!(chunk_size > 0, "chunk size must be non-zero");
    let mut out = Vec::with_capacity(padded_len(data.len(), chunk_size));
    for chunk in data.chunks(chunk_size) {
        for &byte in chunk {
            out.push(byte ^ 0xFF);
        }
        // Zero padding, complemented.
        out.resize(out.len() + (chunk_size - chunk.len()), 0xFF);
    }
    out
}

/// [`transform`] with the fixed [`CHUNK_SIZE`].
#[must_use]
pub fn transform_default(data: &[u8]) -> Vec<u8> {
    transform(data, CHUNK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_len_rounds_up() {
        assert_eq!(padded_len(0, 4), 0);
        assert_eq!(padded_len(1, 4), 4);
        assert_eq!(padded_len(4, 4), 4);
        assert_eq!(padded_len(5, 4), 8);
        assert_eq!(padded_len(8, 4), 8);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(transform_default(&[]).is_empty());
    }

    #[test]
    fn complements_every_byte() {
        let out = transform_default(&[0x00, 0x0F, 0xF0, 0xFF]);
        assert_eq!(out, vec![0xFF, 0xF0, 0x0F, 0x00]);
    }

    #[test]
    fn pads_last_chunk_with_complemented_zeros() {
        let out = transform_default(&[0x12, 0x34]);
        assert_eq!(out, vec![0xED, 0xCB, 0xFF, 0xFF]);
    }

    #[test]
    fn aligned_double_transform_is_identity() {
        let data: Vec<u8> = (0..64).collect();
        assert_eq!(transform_default(&transform_default(&data)), data);
    }

    #[test]
    fn unaligned_double_transform_zeroes_the_tail() {
        let data = vec![0xAB, 0xCD, 0xEF];
        let twice = transform_default(&transform_default(&data));
        assert_eq!(twice.len(), 4);
        assert_eq!(&twice[..3], data.as_slice());
        assert_eq!(twice[3], 0x00);
    }

    #[test]
    fn chunk_size_one_never_pads() {
        let data = vec![0x01, 0x02, 0x03];
        assert_eq!(transform(&transform(&data, 1), 1), data);
    }
}
