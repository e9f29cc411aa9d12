use pngstream::png::*;
use pngstream::PngError;
use walkdir::WalkDir;

#[test]
fn test_ChunkSequence_no_panics() {
  // iter ALL files in the test folder, even non-png files shouldn't panic it.
  for entry in WalkDir::new("tests/").into_iter().filter_map(|e| e.ok()) {
    println!("{}", entry.path().display());
    let v = match std::fs::read(entry.path()) {
      Ok(v) => v,
      Err(e) => {
        println!("Error reading file: {e:?}");
        continue;
      }
    };
    let _ = ChunkSequence::decode(&v);
    let _ = decode_png(&v);
  }
  // even totally random data should never panic the decoder!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    assert_eq!(decode_png(&v), Err(PngError::BadSignature));
  }
  // random data after a correct signature gets a little further in
  for _ in 0..50 {
    let mut v = Vec::from(PNG_SIGNATURE);
    v.extend(super::rand_bytes(1024));
    assert!(decode_png(&v).is_err());
  }
}

#[test]
fn test_decode_gradient_rgba8() {
  let bytes = std::fs::read("tests/data/gradient_rgba8.png").unwrap();
  assert!(is_png_header_correct(&bytes));

  let seq = ChunkSequence::decode(&bytes).unwrap();
  let types: Vec<ChunkType> = seq.iter().map(Chunk::chunk_ty).collect();
  assert_eq!(
    types,
    [ChunkType::IHDR, ChunkType(*b"tEXt"), ChunkType::IDAT, ChunkType::IDAT, ChunkType::IEND]
  );
  for chunk in &seq {
    assert_eq!(chunk.declared_crc(), chunk.compute_actual_crc());
  }

  let DecodedPng { header, pixel_stream } = decode_png(&bytes).unwrap();
  assert_eq!((header.width, header.height), (32, 32));
  assert_eq!(header.color_type, PngColorType::RGBA);
  assert_eq!(header.bit_depth, 8);
  assert!(!header.is_interlaced());
  assert_eq!(pixel_stream.len(), 32 * (1 + 32 * 4));
  assert_eq!(pixel_stream.len(), header.zlib_decompression_requirement());

  // every line is filter type 0, so the pixels are right there
  let line_len = 1 + 32 * 4;
  for (y, line) in pixel_stream.chunks_exact(line_len).enumerate() {
    assert_eq!(line[0], 0);
    for (x, px) in line[1..].chunks_exact(4).enumerate() {
      assert_eq!(px, [(x * 8) as u8, (y * 8) as u8, ((x + y) * 4) as u8, 255]);
    }
  }
}

#[test]
fn test_decode_gradient_with_tight_limit() {
  let bytes = std::fs::read("tests/data/gradient_rgba8.png").unwrap();
  let config = PngDecodeConfig { max_decompressed_len: 1024, ..Default::default() };
  assert_eq!(decode_png_with_config(&bytes, &config), Err(PngError::DecompressedSizeLimit(1024)));
}
