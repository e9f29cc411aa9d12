use super::*;

/// The four byte type tag of a chunk.
///
/// Chunk types are meant to be ascii letters, and the case of each letter is a
/// property bit (bit 5 of each byte).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkType(pub [u8; 4]);
#[allow(nonstandard_style)]
impl ChunkType {
  /// Image header
  pub const IHDR: Self = Self(*b"IHDR");
  /// Palette
  pub const PLTE: Self = Self(*b"PLTE");
  /// Image data
  pub const IDAT: Self = Self(*b"IDAT");
  /// Image trailer
  pub const IEND: Self = Self(*b"IEND");

  /// Uppercase first letter: decoders must understand this chunk to show the
  /// image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 32) == 0
  }
  /// Uppercase second letter: the type is part of the PNG standard (or registered).
  #[inline]
  #[must_use]
  pub const fn is_public(self) -> bool {
    (self.0[1] & 32) == 0
  }
  /// Uppercase third letter. Lowercase here is reserved for future use.
  #[inline]
  #[must_use]
  pub const fn is_reserved_bit_valid(self) -> bool {
    (self.0[2] & 32) == 0
  }
  /// Lowercase fourth letter: editors may copy this chunk even if they've
  /// changed critical chunks.
  #[inline]
  #[must_use]
  pub const fn is_safe_to_copy(self) -> bool {
    (self.0[3] & 32) != 0
  }
}
impl Debug for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('\"')?;
    core::fmt::Display::fmt(self, f)?;
    f.write_char('\"')
  }
}
impl core::fmt::Display for ChunkType {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // non-ascii bytes still print, they just print as odd characters
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl From<[u8; 4]> for ChunkType {
  #[inline]
  #[must_use]
  fn from(bytes: [u8; 4]) -> Self {
    Self(bytes)
  }
}

#[test]
fn test_chunk_type_property_bits() {
  assert!(ChunkType::IHDR.is_critical());
  assert!(ChunkType::IDAT.is_public());
  assert!(!ChunkType::IEND.is_safe_to_copy());
  let text = ChunkType(*b"tEXt");
  assert!(!text.is_critical());
  assert!(text.is_public());
  assert!(text.is_reserved_bit_valid());
  assert!(text.is_safe_to_copy());
  let private = ChunkType(*b"prVt");
  assert!(!private.is_public());
}

#[test]
fn test_chunk_type_fmt() {
  extern crate std;
  use std::format;
  assert_eq!(format!("{}", ChunkType::IDAT), "IDAT");
  assert_eq!(format!("{:?}", ChunkType::IEND), "\"IEND\"");
}
