use super::*;

/// The CRC-32 of a chunk: computed over the type bytes then the data bytes.
///
/// The length field isn't part of the checksum.
#[inline]
#[must_use]
pub fn chunk_crc(chunk_ty: ChunkType, data: &[u8]) -> u32 {
  let mut hasher = crc32fast::Hasher::new();
  hasher.update(&chunk_ty.0);
  hasher.update(data);
  hasher.finalize()
}

#[test]
fn test_chunk_crc_known_values() {
  // every well-formed PNG ends with these 12 bytes
  assert_eq!(chunk_crc(ChunkType::IEND, &[]), 0xAE42_6082);
  // same as hashing the joined bytes
  let data = [1_u8, 2, 3, 4, 5];
  let mut joined = Vec::new();
  joined.extend_from_slice(b"IDAT");
  joined.extend_from_slice(&data);
  assert_eq!(chunk_crc(ChunkType::IDAT, &data), crc32fast::hash(&joined));
}
