use super::*;

/// A parsed view of a [`Chunk`].
///
/// Only the critical chunks get a structured form. Everything else is
/// `Other` with the type tag, and the bytes are still on the [`Chunk`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(nonstandard_style)]
pub enum PngChunk<'b> {
  /// Image Header
  IHDR(IHDR),
  /// Palette, as `[r, g, b]` entries.
  PLTE(&'b [[u8; 3]]),
  /// Image Data
  IDAT(&'b [u8]),
  /// Image End
  IEND,
  /// Any other chunk type.
  Other(ChunkType),
}
impl<'b> TryFrom<&'b Chunk> for PngChunk<'b> {
  type Error = PngError;
  #[inline]
  fn try_from(chunk: &'b Chunk) -> Result<Self, Self::Error> {
    Ok(match chunk.chunk_ty() {
      ChunkType::IHDR => PngChunk::IHDR(IHDR::from_chunk(chunk)?),
      ChunkType::PLTE => {
        let data = chunk.data();
        match bytemuck::try_cast_slice::<u8, [u8; 3]>(data) {
          Ok(entries) if (1..=256).contains(&entries.len()) => PngChunk::PLTE(entries),
          _ => return Err(PngError::InvalidPalette(data.len())),
        }
      }
      ChunkType::IDAT => PngChunk::IDAT(chunk.data()),
      ChunkType::IEND => PngChunk::IEND,
      other => PngChunk::Other(other),
    })
  }
}
