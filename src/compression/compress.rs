use std::fs;

use log::{debug, info, trace};

use super::container::Container;
use crate::bitstream::bitbuffer::BitBuffer;
use crate::error::Result;
use crate::huffman_coding::code_table::CodeTable;
use crate::huffman_coding::stream_codec::encode;
use crate::huffman_coding::tree::build_tree;
use crate::huffman_coding::tree_codec::{serialize_tree, serialized_len};
use crate::tools::cli::{HzOpts, Output};
use crate::tools::crc::do_crc;
use crate::tools::data_out::{compressed_name, write_file, write_stdout};
use crate::tools::freq_count::freqs;

/// Compress a complete input. The tree is built from the byte counts of `data` and stored with
/// the encoded data and a CRC of the input.
pub fn compress_bytes(data: &[u8]) -> Result<Container> {
    let freqs = freqs(data);
    let crc = do_crc(0, data);

    // An empty input has no symbols to build a tree from. Store an empty container.
    let root = match build_tree(&freqs) {
        Some(root) => root,
        None => {
            debug!("Input is empty, writing an empty tree and no data");
            return Ok(Container {
                tree: BitBuffer::new(0),
                data: BitBuffer::new(0),
                crc,
            });
        }
    };

    let table = CodeTable::from_tree(&root);
    for (symbol, _) in table.sorted() {
        trace!(
            "Symbol {:#04x} ({} times) code {}",
            symbol,
            freqs[symbol as usize],
            table.code_string(symbol).unwrap_or_default()
        );
    }

    let mut tree = BitBuffer::new(serialized_len(root.leaf_count()));
    serialize_tree(&root, &mut tree);

    let mut bits = BitBuffer::new(table.encoded_len(&freqs) as usize);
    encode(data, &table, &mut bits)?;

    debug!(
        "Tree is {} bits, data is {} bits, crc is {:08x}",
        tree.len(),
        bits.len(),
        crc
    );
    Ok(Container {
        tree,
        data: bits,
        crc,
    })
}

/// Compress every file named in opts (HzOpts).
pub fn compress(opts: &HzOpts) -> Result<()> {
    for fname in &opts.files {
        compress_file(fname, opts)?;
    }
    Ok(())
}

fn compress_file(fname: &str, opts: &HzOpts) -> Result<()> {
    info!("Compressing {}", fname);
    let data = fs::read(fname)?;
    let out = compress_bytes(&data)?.to_bytes();

    info!("Original size: {} bytes", data.len());
    info!("Compressed size: {} bytes", out.len());
    info!("Space saving: {:.2}%", saving(data.len(), out.len()));

    match opts.output {
        Output::Stdout => write_stdout(&out),
        Output::File => write_file(
            &compressed_name(fname, &opts.suffix),
            &out,
            opts.force_overwrite,
        ),
    }
}

/// Percentage of the original size saved by compression, never below zero.
fn saving(original: usize, compressed: usize) -> f64 {
    if original == 0 || compressed >= original {
        return 0.0;
    }
    (original - compressed) as f64 / original as f64 * 100.0
}
