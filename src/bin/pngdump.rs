use pngstream::png::*;

use std::path::Path;

fn main() {
  let path = std::env::args().nth(1).unwrap_or_else(|| String::from("basn6a08.png"));
  if let Err(e) = dump_a_png_file(&path) {
    eprintln!("{path}: {e}");
    std::process::exit(1);
  }
}

fn dump_a_png_file<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
  let bytes = std::fs::read(path)?;

  let chunks = ChunkSequence::decode(&bytes)?;
  for chunk in &chunks {
    match PngChunk::try_from(chunk) {
      Ok(PngChunk::IDAT(data)) => println!("IDAT: {} bytes", data.len()),
      Ok(PngChunk::PLTE(entries)) => println!("PLTE: {} entries", entries.len()),
      Ok(png_chunk) => println!("{png_chunk:?}"),
      Err(e) => println!("{:?}: {e}", chunk.chunk_ty()),
    }
  }
  drop(chunks);

  let DecodedPng { header, pixel_stream } = decode_png(&bytes)?;
  println!("Header: {header:?}");
  println!("Decompressed: {} bytes", pixel_stream.len());

  // one sample per `width * 4` bytes, the filter bytes included
  let step = (header.width as usize).saturating_mul(4).max(1);
  let samples: Vec<u8> = pixel_stream.iter().step_by(step).copied().collect();
  println!("{samples:?}");
  Ok(())
}
