use alloc::collections::TryReserveError;

use miniz_oxide::inflate::TINFLStatus;

use crate::png::{ChunkType, PngColorType};

/// An error from decoding a PNG data stream.
///
/// Every one of these is final for the decode attempt that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PngError {
  /// The first 8 bytes aren't the PNG signature (or there aren't 8 bytes).
  BadSignature,

  /// A chunk record runs past the end of the input.
  TruncatedInput,

  /// A chunk's declared CRC doesn't match the CRC of its type and data.
  ChecksumMismatch {
    /// The type of the chunk that failed.
    chunk_ty: ChunkType,
    /// The CRC stored in the data stream.
    declared: u32,
    /// The CRC computed from the chunk bytes.
    actual: u32,
  },

  /// The input ended on a chunk boundary without ever reaching `IEND`.
  UnterminatedStream,

  /// The first chunk isn't an `IHDR`.
  MissingHeader,

  /// The `IHDR` payload is shorter than 13 bytes. Shows the actual length.
  HeaderTooShort(usize),

  /// Width or height is 0, or more than `2^31-1`.
  InvalidDimension {
    /// declared width
    width: u32,
    /// declared height
    height: u32,
  },

  /// Bit depth isn't one of 1, 2, 4, 8, or 16.
  InvalidBitDepth(u8),

  /// Color type isn't one of 0, 2, 3, 4, or 6.
  InvalidColorMode(u8),

  /// The bit depth is legal on its own, but not with this color type.
  IncompatibleColorDepth {
    /// declared color type
    color_type: PngColorType,
    /// declared bit depth
    bit_depth: u8,
  },

  /// Compression method isn't 0.
  UnsupportedCompression(u8),

  /// Filter method isn't 0.
  UnsupportedFilter(u8),

  /// Interlace method isn't 0 or 1.
  InvalidInterlace(u8),

  /// There were no `IDAT` chunks at all.
  EmptyPixelData,

  /// The inflate step stopped with something other than success.
  DecompressionFailed(TINFLStatus),

  /// The decompressed output would grow past the configured ceiling.
  DecompressedSizeLimit(usize),

  /// A `PLTE` chunk's length isn't a multiple of 3, or it has 0 or more than
  /// 256 entries. Shows the payload length in bytes.
  InvalidPalette(usize),

  /// The allocator couldn't give us enough space.
  AllocationFailed,
}

/// Shorthand for results in this crate.
pub type PngResult<T> = Result<T, PngError>;

impl From<TryReserveError> for PngError {
  #[inline]
  fn from(_: TryReserveError) -> Self {
    Self::AllocationFailed
  }
}

impl core::fmt::Display for PngError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::BadSignature => write!(f, "not a PNG signature"),
      Self::TruncatedInput => write!(f, "chunk data runs past the end of the input"),
      Self::ChecksumMismatch { chunk_ty, declared, actual } => {
        write!(f, "CRC mismatch in {chunk_ty} chunk: declared {declared:08X}, actual {actual:08X}")
      }
      Self::UnterminatedStream => write!(f, "input ended before the IEND chunk"),
      Self::MissingHeader => write!(f, "first chunk is not IHDR"),
      Self::HeaderTooShort(len) => write!(f, "IHDR payload must be 13 bytes, got {len}"),
      Self::InvalidDimension { width, height } => {
        write!(f, "illegal image dimensions: {width} by {height}")
      }
      Self::InvalidBitDepth(d) => write!(f, "illegal bit depth: {d}"),
      Self::InvalidColorMode(c) => write!(f, "illegal color type: {c}"),
      Self::IncompatibleColorDepth { color_type, bit_depth } => {
        write!(f, "bit depth {bit_depth} is not allowed with color type {color_type:?}")
      }
      Self::UnsupportedCompression(m) => write!(f, "unsupported compression method: {m}"),
      Self::UnsupportedFilter(m) => write!(f, "unsupported filter method: {m}"),
      Self::InvalidInterlace(m) => write!(f, "illegal interlace method: {m}"),
      Self::EmptyPixelData => write!(f, "no IDAT chunks present"),
      Self::DecompressionFailed(status) => write!(f, "zlib decompression failed: {status:?}"),
      Self::DecompressedSizeLimit(max) => {
        write!(f, "decompressed data exceeds the {max} byte limit")
      }
      Self::InvalidPalette(len) => write!(f, "illegal PLTE length: {len} bytes"),
      Self::AllocationFailed => write!(f, "allocation failed"),
    }
  }
}

impl core::error::Error for PngError {}
