use super::*;

/// A single chunk record, with its own copy of the data.
///
/// A `Chunk` only exists after its CRC was checked, so the data is known to
/// match `declared_crc`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
  pub(crate) length: u32,
  pub(crate) chunk_ty: ChunkType,
  pub(crate) data: Vec<u8>,
  pub(crate) declared_crc: u32,
}
impl Debug for Chunk {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Chunk")
      .field("chunk_ty", &self.chunk_ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}
impl Chunk {
  /// Reads one chunk record at the cursor.
  ///
  /// On success the cursor has moved forward by `12 + length` bytes.
  ///
  /// ## Failure
  /// * [`PngError::TruncatedInput`] if any field runs past the end of the
  ///   input.
  /// * [`PngError::ChecksumMismatch`] if the CRC is wrong.
  /// * [`PngError::AllocationFailed`] if the data can't be copied out.
  ///
  /// The cursor is left at the start of whichever field failed. A failure
  /// can't be resumed from, the whole decode should stop.
  pub fn read_from(cursor: &mut ByteCursor<'_>) -> PngResult<Self> {
    let start = cursor.position();
    let length = cursor.read_u32_be()?;
    let chunk_ty = ChunkType(cursor.read_array::<4>()?);
    let data = cursor.read_slice(length as usize)?;
    let declared_crc = cursor.peek_u32_be()?;
    let actual = chunk_crc(chunk_ty, data);
    if actual != declared_crc {
      log::debug!("png: bad CRC on {} chunk at offset {}", chunk_ty, start);
      return Err(PngError::ChecksumMismatch { chunk_ty, declared: declared_crc, actual });
    }
    cursor.advance(4)?;
    let mut owned = Vec::new();
    owned.try_reserve_exact(data.len())?;
    owned.extend_from_slice(data);
    log::trace!("png: {} chunk, {} bytes, at offset {}", chunk_ty, length, start);
    Ok(Self { length, chunk_ty, data: owned, declared_crc })
  }

  /// The declared data length.
  #[inline]
  #[must_use]
  pub const fn length(&self) -> u32 {
    self.length
  }
  /// The type tag.
  #[inline]
  #[must_use]
  pub const fn chunk_ty(&self) -> ChunkType {
    self.chunk_ty
  }
  /// The chunk's data bytes.
  #[inline]
  #[must_use]
  pub fn data(&self) -> &[u8] {
    &self.data
  }
  /// The CRC that was stored in the data stream.
  #[inline]
  #[must_use]
  pub const fn declared_crc(&self) -> u32 {
    self.declared_crc
  }
  /// Computes the CRC of the type and data again.
  #[inline]
  #[must_use]
  pub fn compute_actual_crc(&self) -> u32 {
    chunk_crc(self.chunk_ty, &self.data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw_chunk(ty: [u8; 4], data: &[u8]) -> Vec<u8> {
    let mut v = Vec::new();
    v.extend_from_slice(&(data.len() as u32).to_be_bytes());
    v.extend_from_slice(&ty);
    v.extend_from_slice(data);
    v.extend_from_slice(&chunk_crc(ChunkType(ty), data).to_be_bytes());
    v
  }

  #[test]
  fn test_read_one_chunk() {
    let mut bytes = raw_chunk(*b"tEXt", b"Title\0hello");
    bytes.extend_from_slice(&[0xFF; 3]);
    let mut c = ByteCursor::new(&bytes);
    let chunk = Chunk::read_from(&mut c).unwrap();
    assert_eq!(chunk.chunk_ty(), ChunkType(*b"tEXt"));
    assert_eq!(chunk.length(), 11);
    assert_eq!(chunk.data(), b"Title\0hello");
    assert_eq!(chunk.declared_crc(), chunk.compute_actual_crc());
    assert_eq!(c.position(), 12 + 11);
  }

  #[test]
  fn test_read_empty_chunk() {
    let bytes = raw_chunk(*b"IEND", &[]);
    let mut c = ByteCursor::new(&bytes);
    let chunk = Chunk::read_from(&mut c).unwrap();
    assert_eq!(chunk.chunk_ty(), ChunkType::IEND);
    assert!(chunk.data().is_empty());
    assert!(c.is_empty());
  }

  #[test]
  fn test_bad_crc_stops_at_crc_field() {
    let mut bytes = raw_chunk(*b"IDAT", &[1, 2, 3]);
    let last = bytes.len() - 1;
    bytes[last] ^= 1;
    let mut c = ByteCursor::new(&bytes);
    match Chunk::read_from(&mut c) {
      Err(PngError::ChecksumMismatch { chunk_ty, declared, actual }) => {
        assert_eq!(chunk_ty, ChunkType::IDAT);
        assert_ne!(declared, actual);
      }
      other => panic!("expected a checksum mismatch, got {other:?}"),
    }
    assert_eq!(c.position(), 8 + 3);
  }

  #[test]
  fn test_length_past_end_is_truncated() {
    let mut bytes = raw_chunk(*b"IDAT", &[9; 10]);
    // claim more data than exists
    bytes[0..4].copy_from_slice(&u32::MAX.to_be_bytes());
    let mut c = ByteCursor::new(&bytes);
    assert_eq!(Chunk::read_from(&mut c), Err(PngError::TruncatedInput));
    assert_eq!(c.position(), 8);
  }

  #[test]
  fn test_every_truncation_point() {
    let bytes = raw_chunk(*b"IDAT", &[7; 20]);
    for cut in 0..bytes.len() {
      let mut c = ByteCursor::new(&bytes[..cut]);
      assert_eq!(Chunk::read_from(&mut c), Err(PngError::TruncatedInput), "cut at {cut}");
      assert!(c.position() <= cut);
    }
  }
}
