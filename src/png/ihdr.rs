use super::*;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// The number of channels in this type of color.
  #[inline]
  #[must_use]
  pub const fn channel_count(self) -> usize {
    match self {
      Self::Y => 1,
      Self::RGB => 3,
      Self::Index => 1,
      Self::YA => 2,
      Self::RGBA => 4,
    }
  }

  /// The bit depths allowed with this color type.
  #[inline]
  #[must_use]
  pub const fn allowed_bit_depths(self) -> &'static [u8] {
    match self {
      Self::Y => &[1, 2, 4, 8, 16],
      Self::Index => &[1, 2, 4, 8],
      Self::RGB | Self::YA | Self::RGBA => &[8, 16],
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(PngError::InvalidColorMode(value)),
    })
  }
}

/// The only compression method PNG has: zlib/deflate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngCompressionMethod {
  /// Zlib wrapped deflate
  Deflate = 0,
}
impl TryFrom<u8> for PngCompressionMethod {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Self::Deflate),
      _ => Err(PngError::UnsupportedCompression(value)),
    }
  }
}

/// The only filter method PNG has: a per-scanline choice of five filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngFilterMethod {
  /// Adaptive filtering
  Adaptive = 0,
}
impl TryFrom<u8> for PngFilterMethod {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Self::Adaptive),
      _ => Err(PngError::UnsupportedFilter(value)),
    }
  }
}

/// How the scanlines are ordered in the decompressed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngInterlaceMethod {
  /// Plain top to bottom.
  NoInterlace = 0,
  /// Seven reduced images, see [`reduced_image_dimensions`].
  Adam7 = 1,
}
impl TryFrom<u8> for PngInterlaceMethod {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Self::NoInterlace),
      1 => Ok(Self::Adam7),
      _ => Err(PngError::InvalidInterlace(value)),
    }
  }
}

/// Image Header
///
/// Only a validated header can be constructed by this crate: the dimensions
/// are non-zero and the color type / bit depth pair is legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// always deflate
  pub compression_method: PngCompressionMethod,
  /// always adaptive
  pub filter_method: PngFilterMethod,
  /// if the image data is stored interlaced.
  pub interlace_method: PngInterlaceMethod,
}

/// The fixed size of the `IHDR` payload.
pub const IHDR_LEN: usize = 13;

/// PNG doesn't allow dimensions that won't fit in an `i32`.
const MAX_DIMENSION: u32 = i32::MAX as u32;

impl IHDR {
  /// Validates a chunk as the image header.
  ///
  /// The chunk has to be an `IHDR` chunk, otherwise this gives
  /// [`PngError::MissingHeader`].
  #[inline]
  pub fn from_chunk(chunk: &Chunk) -> PngResult<Self> {
    if chunk.chunk_ty() != ChunkType::IHDR {
      return Err(PngError::MissingHeader);
    }
    Self::try_from(chunk.data())
  }

  /// If the image data is stored as seven interlaced passes.
  #[inline]
  #[must_use]
  pub const fn is_interlaced(&self) -> bool {
    matches!(self.interlace_method, PngInterlaceMethod::Adam7)
  }

  /// Bits used by one pixel: bit depth times channel count.
  #[inline]
  #[must_use]
  pub const fn bits_per_pixel(&self) -> usize {
    (self.bit_depth as usize) * self.color_type.channel_count()
  }

  /// Bytes in one filtered line of an image `width` pixels wide: the filter
  /// type byte plus the packed pixels, rounded up to a whole byte.
  #[inline]
  #[must_use]
  pub const fn bytes_per_filterline(&self, width: u32) -> usize {
    let bits = self.bits_per_pixel().saturating_mul(width as usize);
    1 + bits / 8 + (bits % 8 != 0) as usize
  }

  /// Gets the number of bytes the image data should decompress to.
  ///
  /// Interlaced images add up all seven reduced images. The math saturates,
  /// so an absurd header gives `usize::MAX` rather than wrapping around.
  #[must_use]
  pub fn zlib_decompression_requirement(&self) -> usize {
    let temp_bytes_for_image = |width: u32, height: u32| -> usize {
      if width == 0 || height == 0 {
        0
      } else {
        self.bytes_per_filterline(width).saturating_mul(height as usize)
      }
    };
    if self.is_interlaced() {
      reduced_image_dimensions(self.width, self.height)
        .iter()
        .skip(1)
        .fold(0_usize, |total, &(w, h)| total.saturating_add(temp_bytes_for_image(w, h)))
    } else {
      temp_bytes_for_image(self.width, self.height)
    }
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = PngError;
  /// Validates the 13 byte `IHDR` payload.
  ///
  /// Extra bytes past the first 13 are ignored.
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    if data.len() < IHDR_LEN {
      return Err(PngError::HeaderTooShort(data.len()));
    } else if data.len() > IHDR_LEN {
      log::warn!("png: IHDR has {} extra bytes", data.len() - IHDR_LEN);
    }
    let mut c = ByteCursor::new(data);
    let width = c.read_u32_be()?;
    let height = c.read_u32_be()?;
    let [bit_depth, color_type, compression_method, filter_method, interlace_method] =
      c.read_array::<5>()?;
    if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
      return Err(PngError::InvalidDimension { width, height });
    }
    if ![1, 2, 4, 8, 16].contains(&bit_depth) {
      return Err(PngError::InvalidBitDepth(bit_depth));
    }
    let color_type = PngColorType::try_from(color_type)?;
    if !color_type.allowed_bit_depths().contains(&bit_depth) {
      return Err(PngError::IncompatibleColorDepth { color_type, bit_depth });
    }
    Ok(Self {
      width,
      height,
      bit_depth,
      color_type,
      compression_method: PngCompressionMethod::try_from(compression_method)?,
      filter_method: PngFilterMethod::try_from(filter_method)?,
      interlace_method: PngInterlaceMethod::try_from(interlace_method)?,
    })
  }
}

/// Given the dimensions of the full PNG image, computes the size of each
/// reduced image.
///
/// Index 0 is the full image, indexes 1 through 7 are the Adam7 passes. A pass
/// can be 0 wide or 0 tall for small images, and then it's skipped entirely
/// in the data stream.
#[must_use]
pub const fn reduced_image_dimensions(full_width: u32, full_height: u32) -> [(u32, u32); 8] {
  // (x_start, y_start, x_step, y_step) of each pass
  const PASSES: [(u32, u32, u32, u32); 7] = [
    (0, 0, 8, 8),
    (4, 0, 8, 8),
    (0, 4, 4, 8),
    (2, 0, 4, 4),
    (0, 2, 2, 4),
    (1, 0, 2, 2),
    (0, 1, 1, 2),
  ];
  const fn pass_len(full: u32, start: u32, step: u32) -> u32 {
    if full <= start {
      0
    } else {
      let span = full - start;
      span / step + (span % step != 0) as u32
    }
  }
  let mut out = [(full_width, full_height); 8];
  let mut i = 0;
  while i < 7 {
    let (x0, y0, dx, dy) = PASSES[i];
    out[i + 1] = (pass_len(full_width, x0, dx), pass_len(full_height, y0, dy));
    i += 1;
  }
  out
}
