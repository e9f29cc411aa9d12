use super::*;

use alloc::boxed::Box;

use miniz_oxide::inflate::{
  core::{
    decompress,
    inflate_flags::{
      TINFL_FLAG_IGNORE_ADLER32, TINFL_FLAG_PARSE_ZLIB_HEADER,
      TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF,
    },
    DecompressorOxide,
  },
  TINFLStatus,
};

/// Deflate can't expand data by more than about this factor.
const DEFLATE_MAX_RATIO: usize = 1032;

/// Decompresses the joined `IDAT` data.
///
/// The output size isn't known ahead of time. `size_hint` (normally
/// [`IHDR::zlib_decompression_requirement`]) is used as the starting buffer
/// size, but it's clamped by what the compressed data could possibly expand
/// to and by the config's ceiling. When inflate runs out of room the buffer
/// doubles, and at the end it's cut down to the bytes actually written.
///
/// ## Failure
/// * [`PngError::DecompressionFailed`] for any inflate status other than
///   done, including input that ends mid-stream.
/// * [`PngError::DecompressedSizeLimit`] if the output needs to grow past
///   `config.max_decompressed_len`.
/// * [`PngError::AllocationFailed`]
pub fn inflate_compressed_stream(
  compressed: &[u8], size_hint: usize, config: &PngDecodeConfig,
) -> PngResult<Vec<u8>> {
  let max_len = config.max_decompressed_len;
  let start_len =
    size_hint.min(compressed.len().saturating_mul(DEFLATE_MAX_RATIO)).min(max_len).max(1);
  let mut out: Vec<u8> = Vec::new();
  out.try_reserve_exact(start_len)?;
  out.resize(start_len, 0);

  let flags = TINFL_FLAG_PARSE_ZLIB_HEADER
    | TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF
    | if config.check_adler32 { 0 } else { TINFL_FLAG_IGNORE_ADLER32 };
  let mut r = Box::<DecompressorOxide>::default();
  let mut in_pos = 0;
  let mut out_pos = 0;
  loop {
    let (status, input_read, bytes_written) =
      decompress(&mut r, &compressed[in_pos..], &mut out, out_pos, flags);
    in_pos += input_read;
    out_pos += bytes_written;
    match status {
      TINFLStatus::Done => {
        out.truncate(out_pos);
        if in_pos < compressed.len() {
          log::warn!("png: {} bytes after the end of the zlib stream", compressed.len() - in_pos);
        }
        return Ok(out);
      }
      TINFLStatus::HasMoreOutput => {
        if out.len() >= max_len {
          return Err(PngError::DecompressedSizeLimit(max_len));
        }
        let new_len = out.len().saturating_mul(2).min(max_len);
        log::trace!("png: growing inflate output {} -> {}", out.len(), new_len);
        out.try_reserve_exact(new_len - out.len())?;
        out.resize(new_len, 0);
      }
      other => return Err(PngError::DecompressionFailed(other)),
    }
  }
}
