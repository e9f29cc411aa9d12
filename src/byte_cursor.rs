#![forbid(unsafe_code)]

//! A forward-only read position over a borrowed byte slice.

use crate::{PngError, PngResult};

/// Tracks how far into a byte slice we've read.
///
/// Every read checks the requested span against the end of the slice first.
/// A read that doesn't fit gives [`PngError::TruncatedInput`] and leaves the
/// position where it was, so after a failure the cursor is sitting at the
/// start of the field that couldn't be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteCursor<'b> {
  bytes: &'b [u8],
  pos: usize,
}
impl<'b> ByteCursor<'b> {
  /// Starts a cursor at offset 0.
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, pos: 0 }
  }

  /// The current offset into the slice.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.pos
  }

  /// How many bytes are left after the current offset.
  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> usize {
    self.bytes.len() - self.pos
  }

  /// If there's nothing left to read.
  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.remaining() == 0
  }

  /// Looks at the next `len` bytes without moving.
  #[inline]
  pub fn peek_slice(&self, len: usize) -> PngResult<&'b [u8]> {
    let end = self.pos.checked_add(len).ok_or(PngError::TruncatedInput)?;
    self.bytes.get(self.pos..end).ok_or(PngError::TruncatedInput)
  }

  /// Reads the next `len` bytes as a sub-slice of the input.
  #[inline]
  pub fn read_slice(&mut self, len: usize) -> PngResult<&'b [u8]> {
    let out = self.peek_slice(len)?;
    self.pos += len;
    Ok(out)
  }

  /// Looks at the next `N` bytes as an array without moving.
  #[inline]
  pub fn peek_array<const N: usize>(&self) -> PngResult<[u8; N]> {
    let slice = self.peek_slice(N)?;
    let mut out = [0_u8; N];
    out.copy_from_slice(slice);
    Ok(out)
  }

  /// Reads the next `N` bytes as an array.
  #[inline]
  pub fn read_array<const N: usize>(&mut self) -> PngResult<[u8; N]> {
    let out = self.peek_array::<N>()?;
    self.pos += N;
    Ok(out)
  }

  /// Looks at the next 4 bytes as a big-endian `u32` without moving.
  ///
  /// All multi-byte integers in PNG are big-endian, so this is the one place
  /// the byte order gets handled.
  #[inline]
  pub fn peek_u32_be(&self) -> PngResult<u32> {
    self.peek_array::<4>().map(u32::from_be_bytes)
  }

  /// Reads the next 4 bytes as a big-endian `u32`.
  #[inline]
  pub fn read_u32_be(&mut self) -> PngResult<u32> {
    self.read_array::<4>().map(u32::from_be_bytes)
  }

  /// Reads a single byte.
  #[inline]
  pub fn read_u8(&mut self) -> PngResult<u8> {
    self.read_array::<1>().map(|[u]| u)
  }

  /// Moves forward `len` bytes, or fails without moving.
  #[inline]
  pub fn advance(&mut self, len: usize) -> PngResult<()> {
    self.read_slice(len).map(|_| ())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_reads_advance_exactly() {
    let bytes = [0, 0, 1, 2, b'a', b'b', 9];
    let mut c = ByteCursor::new(&bytes);
    assert_eq!(c.read_u32_be(), Ok(258));
    assert_eq!(c.position(), 4);
    assert_eq!(c.read_array::<2>(), Ok(*b"ab"));
    assert_eq!(c.remaining(), 1);
    assert_eq!(c.read_u8(), Ok(9));
    assert!(c.is_empty());
  }

  #[test]
  fn test_short_read_leaves_position() {
    let bytes = [1, 2, 3];
    let mut c = ByteCursor::new(&bytes);
    c.advance(1).unwrap();
    assert_eq!(c.read_u32_be(), Err(PngError::TruncatedInput));
    assert_eq!(c.position(), 1);
    assert_eq!(c.read_slice(usize::MAX), Err(PngError::TruncatedInput));
    assert_eq!(c.position(), 1);
    assert_eq!(c.read_slice(2), Ok(&[2_u8, 3][..]));
  }

  #[test]
  fn test_peek_does_not_move() {
    let bytes = [0xAB, 0xCD, 0xEF, 0x01];
    let c = ByteCursor::new(&bytes);
    assert_eq!(c.peek_u32_be(), Ok(0xABCD_EF01));
    assert_eq!(c.position(), 0);
  }
}
