//! The huffman module builds the code for a file and uses it to encode and decode the data.
//!
//! huffzip uses one static Huffman tree per file, built from a count of every byte value in the
//! whole input. The tree is stored in the compressed file ahead of the data so the decoder can
//! rebuild it without the counts.
//!
//! - node: the tree itself.
//! - queue: ascending, insertion-stable priority queue used while building.
//! - tree: builds the tree from a histogram.
//! - code_table: the path to every leaf, used for encoding.
//! - tree_codec: stores the tree in a bitstream and reads it back.
//! - stream_codec: encodes and decodes the data bitstream.
//!

pub mod code_table;
pub mod node;
pub mod queue;
pub mod stream_codec;
pub mod tree;
pub mod tree_codec;
