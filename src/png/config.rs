use super::*;

/// Knobs for [`decode_png_with_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PngDecodeConfig {
  /// The decompressed image data can't grow past this many bytes.
  ///
  /// Going over gives [`PngError::DecompressedSizeLimit`].
  pub max_decompressed_len: usize,
  /// Check the Adler-32 at the end of the zlib stream.
  pub check_adler32: bool,
}
impl PngDecodeConfig {
  /// 256 MiB
  pub const DEFAULT_MAX_DECOMPRESSED_LEN: usize = 256 * 1024 * 1024;
}
impl Default for PngDecodeConfig {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { max_decompressed_len: Self::DEFAULT_MAX_DECOMPRESSED_LEN, check_adler32: true }
  }
}
