//! Writes the tree into a bitstream and reads it back.
//!
//! The tree is written in preorder. A leaf is a 1 bit followed by its symbol (8 bits, most
//! significant first). An internal node is a 0 bit followed by its left subtree and then its
//! right subtree. Weights are not written; decoding does not need them.

use log::trace;

use super::node::{Node, NodeData};
use crate::bitstream::bitbuffer::BitBuffer;
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};

const LEAF: bool = true;
const INTERNAL: bool = false;

/// Deepest node a tree built from 256 symbols can have. Anything deeper is corrupt.
pub const MAX_DEPTH: usize = 255;

/// Bits needed to serialize a tree with `leaves` leaves: 9 per leaf, 1 per internal node.
pub fn serialized_len(leaves: usize) -> usize {
    (leaves * 10).saturating_sub(1)
}

/// Append the preorder encoding of the tree to `bits`.
pub fn serialize_tree(root: &Node, bits: &mut BitBuffer) {
    match &root.node_data {
        NodeData::Kids(left, right) => {
            bits.append_bit(INTERNAL);
            serialize_tree(left, bits);
            serialize_tree(right, bits);
        }
        NodeData::Leaf(symbol) => {
            bits.append_bit(LEAF);
            bits.append_bits(*symbol as u32, 8);
        }
    }
}

/// Rebuild a tree from its preorder encoding. Every bit of `bits` must belong to the tree.
pub fn deserialize_tree(bits: &BitBuffer) -> Result<Node> {
    let mut br = BitReader::new(bits);
    let root = read_node(&mut br, 0)?;
    if br.remaining() > 0 {
        return Err(HuffError::corrupt(format!(
            "{} unused bits follow the tree at {}",
            br.remaining(),
            br.loc()
        )));
    }
    trace!("Read tree of {} leaves from {} bits", root.leaf_count(), bits.len());
    Ok(root)
}

fn read_node(br: &mut BitReader<'_>, depth: usize) -> Result<Node> {
    if depth > MAX_DEPTH {
        return Err(HuffError::corrupt(format!(
            "tree is nested more than {} levels deep",
            MAX_DEPTH
        )));
    }
    match br.bit() {
        // Leaf
        Some(true) => {
            let symbol = br.byte().ok_or_else(|| {
                HuffError::corrupt(format!(
                    "tree ends inside a leaf symbol at bit {}",
                    br.position()
                ))
            })?;
            Ok(Node::leaf(symbol, 0))
        }
        // Internal node
        Some(false) => {
            let left = read_node(br, depth + 1)?;
            let right = read_node(br, depth + 1)?;
            Ok(Node::merge(left, right))
        }
        None => Err(HuffError::corrupt(format!(
            "tree ends at bit {} where a node should start",
            br.position()
        ))),
    }
}
