//! The compression module manages both directions of huffzip.
//!
//! Compression happens in the following steps:
//! - Frequency count: Count every byte value in the input.
//! - Tree build: Merge the two lightest nodes until one tree is left.
//! - Code table: Record the path to every leaf.
//! - Tree serialization: Store the tree shape and symbols in preorder.
//! - Encoding: Replace every byte with its code.
//! - Container: Write header, tree, data and the CRC of the input.
//!
//! Decompression follows the inverse of the compression process.
//! - Container: Split the file into tree and data, checking the header.
//! - Tree deserialization: Rebuild the tree.
//! - Decoding: Walk the tree bit by bit.
//! - CRC: Compare the restored bytes with the stored checksum.
//!

pub mod compress;
pub mod container;
pub mod decompress;
