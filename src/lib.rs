//! Huffman coding file compressor.
//!
//! Version 0.1.0
//!
//! Each input is compressed on its own: the bytes are counted, a Huffman tree is built from the
//! counts, and the tree is stored ahead of the encoded data so the file can be restored without
//! any shared state. A CRC32 of the original bytes closes every compressed file.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> huffzip -z test.txt`
//!
//! This will compress the file and create the file test.txt.comp.
//! The original file is kept.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::compress_bytes;
pub use compression::decompress::decompress_bytes;
pub use error::{HuffError, Result};
