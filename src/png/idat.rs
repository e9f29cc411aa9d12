use super::*;

/// Joins the data of every `IDAT` chunk, in order, into one buffer.
///
/// All the `IDAT` chunks together form a single zlib stream. The total size is
/// added up first and exactly that much is allocated.
///
/// ## Failure
/// * [`PngError::EmptyPixelData`] if there are no `IDAT` chunks.
/// * [`PngError::AllocationFailed`] if the total can't be allocated.
pub fn aggregate_idat(chunks: &[Chunk]) -> PngResult<Vec<u8>> {
  let mut idat_count = 0_usize;
  let mut total = 0_usize;
  let mut last_idat: Option<usize> = None;
  let mut contiguous = true;
  for (i, chunk) in chunks.iter().enumerate().filter(|(_, c)| c.chunk_ty() == ChunkType::IDAT) {
    idat_count += 1;
    total = total.checked_add(chunk.data().len()).ok_or(PngError::AllocationFailed)?;
    if let Some(prev) = last_idat {
      contiguous &= prev + 1 == i;
    }
    last_idat = Some(i);
  }
  if idat_count == 0 {
    return Err(PngError::EmptyPixelData);
  }
  if !contiguous {
    log::warn!("png: IDAT chunks are not consecutive");
  }
  let mut out = Vec::new();
  out.try_reserve_exact(total)?;
  for chunk in chunks.iter().filter(|c| c.chunk_ty() == ChunkType::IDAT) {
    out.extend_from_slice(chunk.data());
  }
  log::debug!("png: {} IDAT chunks, {} compressed bytes", idat_count, total);
  Ok(out)
}
