#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for taking apart the PNG container.
//!
//! This validates the signature, walks the length-prefixed chunk records
//! (checking each CRC-32), validates the image header, and turns the image
//! data chunks into one decompressed byte stream. It does *not* unfilter the
//! scanlines or touch color, that's left to whoever consumes the output.
//!
//! ```no_run
//! let bytes: &[u8] = unimplemented!("data from somewhere");
//! let decoded = pngstream::png::decode_png(bytes)?;
//! println!("{}x{}", decoded.header.width, decoded.header.height);
//! # Ok::<(), pngstream::PngError>(())
//! ```

extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod byte_cursor;
pub use byte_cursor::*;

pub mod error;
pub use error::*;

pub mod png;
