//! Encodes bytes into the data bitstream and decodes them back out.
//!
//! Encoding appends each byte's code from the code table. Decoding starts at the root and
//! follows one child per bit (0 left, 1 right). Reaching a leaf emits its symbol and starts
//! over at the root. A stream that stops anywhere but the root was cut off mid code.

use log::trace;

use super::code_table::CodeTable;
use super::node::{Node, NodeData};
use crate::bitstream::bitbuffer::BitBuffer;
use crate::error::{HuffError, Result};

/// Append the code of every byte in `data` to `bits`.
pub fn encode(data: &[u8], table: &CodeTable, bits: &mut BitBuffer) -> Result<()> {
    for &byte in data {
        let code = table.get(byte).ok_or(HuffError::MissingCode(byte))?;
        code.iter().for_each(|&bit| bits.append_bit(bit));
    }
    trace!("Encoded {} bytes into {} bits", data.len(), bits.len());
    Ok(())
}

/// Decode the first `valid_bits` bits of `bits` by walking the tree from `root`.
pub fn decode(root: &Node, bits: &BitBuffer, valid_bits: usize) -> Result<Vec<u8>> {
    if valid_bits > bits.len() {
        return Err(HuffError::corrupt(format!(
            "{} data bits expected but only {} present",
            valid_bits,
            bits.len()
        )));
    }

    // A root that is a leaf gave its symbol a one bit code: every bit is one symbol.
    if let NodeData::Leaf(symbol) = root.node_data {
        return Ok(vec![symbol; valid_bits]);
    }

    // Every code is at least one bit, so the output is never longer than the bit count.
    let mut out = Vec::with_capacity(valid_bits);
    let mut node = root;
    // Bits consumed since the last symbol we emitted
    let mut pending = 0;

    for bit in bits.iter().take(valid_bits) {
        if let NodeData::Kids(left, right) = &node.node_data {
            node = if bit { &**right } else { &**left };
            pending += 1;
        }
        if let NodeData::Leaf(symbol) = node.node_data {
            out.push(symbol);
            node = root;
            pending = 0;
        }
    }

    if pending > 0 {
        return Err(HuffError::TruncatedCode(pending));
    }
    trace!("Decoded {} bits into {} bytes", valid_bits, out.len());
    Ok(out)
}
