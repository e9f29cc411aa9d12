use super::*;

/// Every chunk of a PNG, in the order they appeared, ending with `IEND`.
///
/// The only way to get one of these is [`ChunkSequence::decode`], so it's
/// never empty and the last chunk is always `IEND`. Nothing after the `IEND`
/// is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSequence {
  chunks: Vec<Chunk>,
}
impl ChunkSequence {
  /// Checks the signature and reads chunks until the `IEND` chunk.
  ///
  /// ## Failure
  /// * [`PngError::BadSignature`] if the first 8 bytes are wrong. No chunks
  ///   are looked at in that case.
  /// * [`PngError::UnterminatedStream`] if the input runs out, between
  ///   chunks, before an `IEND` shows up.
  /// * Anything [`Chunk::read_from`] can give.
  pub fn decode(png: &[u8]) -> PngResult<Self> {
    if !is_png_header_correct(png) {
      return Err(PngError::BadSignature);
    }
    let mut cursor = ByteCursor::new(png);
    cursor.advance(PNG_SIGNATURE.len())?;
    let mut chunks: Vec<Chunk> = Vec::new();
    loop {
      if cursor.is_empty() {
        return Err(PngError::UnterminatedStream);
      }
      let chunk = Chunk::read_from(&mut cursor)?;
      let chunk_ty = chunk.chunk_ty();
      if chunk_ty.is_critical()
        && ![ChunkType::IHDR, ChunkType::PLTE, ChunkType::IDAT, ChunkType::IEND].contains(&chunk_ty)
      {
        log::warn!("png: unknown critical chunk {}", chunk_ty);
      }
      chunks.try_reserve(1)?;
      chunks.push(chunk);
      if chunk_ty == ChunkType::IEND {
        break;
      }
    }
    if !cursor.is_empty() {
      log::warn!("png: ignoring {} bytes after IEND", cursor.remaining());
    }
    log::debug!("png: read {} chunks", chunks.len());
    Ok(Self { chunks })
  }

  /// All the chunks, in stream order.
  #[inline]
  #[must_use]
  pub fn chunks(&self) -> &[Chunk] {
    &self.chunks
  }

  /// Iterates the chunks in stream order.
  #[inline]
  pub fn iter(&self) -> core::slice::Iter<'_, Chunk> {
    self.chunks.iter()
  }

  /// The number of chunks, including `IEND`.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.chunks.len()
  }

  /// Always `false`, there's at least the `IEND`.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.chunks.is_empty()
  }

  /// The very first chunk.
  #[inline]
  #[must_use]
  pub fn first(&self) -> Option<&Chunk> {
    self.chunks.first()
  }

  /// The `IEND` chunk that ended the stream.
  #[inline]
  #[must_use]
  pub fn terminator(&self) -> Option<&Chunk> {
    self.chunks.last()
  }

  /// Validates the first chunk as the image header.
  ///
  /// This looks at the first chunk by position. If that chunk isn't an `IHDR`
  /// you get [`PngError::MissingHeader`], even if an `IHDR` shows up later.
  pub fn header(&self) -> PngResult<IHDR> {
    let first = self.first().ok_or(PngError::MissingHeader)?;
    IHDR::from_chunk(first)
  }

  /// All the `IDAT` data joined into one zlib stream, see
  /// [`aggregate_idat`].
  #[inline]
  pub fn compressed_stream(&self) -> PngResult<Vec<u8>> {
    aggregate_idat(&self.chunks)
  }
}
impl<'a> IntoIterator for &'a ChunkSequence {
  type Item = &'a Chunk;
  type IntoIter = core::slice::Iter<'a, Chunk>;
  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    self.chunks.iter()
  }
}
