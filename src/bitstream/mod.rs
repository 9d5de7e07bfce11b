//! The bitstream module forms the I/O subsystem of huffzip.
//!
//! A compressed file holds two bitstreams, the serialized tree and the encoded data. Each one is
//! built in a BitBuffer and written out as its packed bytes. On the way back in, the bytes are
//! turned into a BitBuffer again and read with a BitReader (the tree) or walked bit by bit (the
//! data).
//!
pub mod bitbuffer;
pub mod bitreader;
