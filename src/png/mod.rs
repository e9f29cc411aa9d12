#![forbid(unsafe_code)]

//! Holds all the tools for taking apart PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! The general format of a PNG is an 8 byte signature followed by "chunks".
//! Each chunk is a 4 byte big-endian length, a 4 byte type tag, that many bytes
//! of data, and then a CRC-32 of the type and data. The chunk stream ends with
//! an `IEND` chunk.
//!
//! ## Automatic Decoding
//!
//! Call [`decode_png`] and you get back the validated [`IHDR`] along with the
//! decompressed (but still *filtered*) image bytes.
//!
//! ## Step By Step
//!
//! 1) [`ChunkSequence::decode`] checks the signature and reads every chunk up
//!    to and including `IEND`. Any chunk with a bad CRC stops the decode.
//! 2) [`ChunkSequence::header`] validates the first chunk as the [`IHDR`].
//! 3) [`ChunkSequence::compressed_stream`] joins all the `IDAT` payloads, in
//!    order, into one zlib stream.
//! 4) [`inflate_compressed_stream`] decompresses that stream.
//!
//! ## Unlike Other Decoders
//!
//! Section 13.2 of the PNG spec lets decoders ignore errors that don't affect
//! critical data. This module is strict instead: a bad signature, a bad CRC
//! on *any* chunk, or a truncated record is an error. Chunk ordering rules
//! beyond "`IHDR` first, `IEND` last" are not enforced, and ancillary chunks
//! are carried along without being interpreted.
//!
//! The decompressed output is what the image data chunks hold after inflate:
//! one filter-type byte at the start of each scanline followed by the filtered
//! scanline. Reversing the filters is not done here.

use core::fmt::{Debug, Write};

use alloc::vec::Vec;

use crate::{ByteCursor, PngError, PngResult};

mod chunk_type;
pub use chunk_type::*;

mod crc32;
pub use crc32::*;

mod chunk;
pub use chunk::*;

mod chunk_sequence;
pub use chunk_sequence::*;

mod ihdr;
pub use ihdr::*;

mod idat;
pub use idat::*;

mod config;
pub use config::*;

mod inflate;
pub use inflate::*;

mod png_chunk;
pub use png_chunk::*;


/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Checks if the PNG's initial 8 bytes are correct.
#[inline]
#[must_use]
pub const fn is_png_header_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// The output of a full decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPng {
  /// The validated image header.
  pub header: IHDR,
  /// The decompressed image data, still filtered.
  pub pixel_stream: Vec<u8>,
}

/// Decodes PNG bytes using the default [`PngDecodeConfig`].
#[inline]
pub fn decode_png(png: &[u8]) -> PngResult<DecodedPng> {
  decode_png_with_config(png, &PngDecodeConfig::default())
}

/// Decodes PNG bytes into the header and the decompressed image data.
///
/// ## Failure
/// Any of the [`PngError`] cases. Nothing partial is returned: either the
/// whole thing validated and decompressed, or you get the first error hit.
pub fn decode_png_with_config(png: &[u8], config: &PngDecodeConfig) -> PngResult<DecodedPng> {
  let chunks = ChunkSequence::decode(png)?;
  let header = chunks.header()?;
  let compressed = chunks.compressed_stream()?;
  // the payloads are all copied out by now
  drop(chunks);
  let expected = header.zlib_decompression_requirement();
  let pixel_stream = inflate_compressed_stream(&compressed, expected, config)?;
  if pixel_stream.len() != expected {
    log::warn!("png: header implies {} decompressed bytes, got {}", expected, pixel_stream.len());
  }
  log::debug!(
    "png: decoded {}x{} {:?}/{}, {} -> {} bytes",
    header.width,
    header.height,
    header.color_type,
    header.bit_depth,
    compressed.len(),
    pixel_stream.len()
  );
  Ok(DecodedPng { header, pixel_stream })
}
