//! The tools module provides the helper functions around the Huffman core of huffzip.
//!
//! The tools are:
//! - cli: Command line interface for huffzip.
//! - crc: CRC32 checksum stored in the trailer of each compressed file.
//! - data_out: Output file names and safe (temp file and rename) writing.
//! - freq_count: Frequency count of the input bytes.
//!
pub mod cli;
pub mod crc;
pub mod data_out;
pub mod freq_count;
