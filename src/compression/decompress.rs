use std::fs;

use log::{debug, info};

use super::container::Container;
use crate::error::{HuffError, Result};
use crate::huffman_coding::stream_codec::decode;
use crate::huffman_coding::tree_codec::deserialize_tree;
use crate::tools::cli::{HzOpts, Output};
use crate::tools::crc::do_crc;
use crate::tools::data_out::{decompressed_name, write_file, write_stdout};

/// Restore the original bytes from the bytes of a compressed file.
pub fn decompress_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
    let container = Container::from_bytes(bytes)?;

    let out = if container.tree.is_empty() {
        Vec::new()
    } else {
        let root = deserialize_tree(&container.tree)?;
        debug!(
            "Tree has {} leaves, decoding {} data bits",
            root.leaf_count(),
            container.data.len()
        );
        decode(&root, &container.data, container.data.len())?
    };

    // Truncation can still end on a code boundary. The CRC catches it.
    let computed = do_crc(0, &out);
    if computed != container.crc {
        return Err(HuffError::ChecksumMismatch {
            stored: container.crc,
            computed,
        });
    }
    Ok(out)
}

/// Decompress every file named in opts (HzOpts).
pub fn decompress(opts: &HzOpts) -> Result<()> {
    for fname in &opts.files {
        decompress_file(fname, opts)?;
    }
    Ok(())
}

fn decompress_file(fname: &str, opts: &HzOpts) -> Result<()> {
    // Check the name before reading anything
    let out_name = decompressed_name(fname, &opts.suffix)?;
    info!("Decompressing {} to {}", fname, out_name);

    let out = decompress_bytes(&fs::read(fname)?)?;
    info!("Restored {} bytes", out.len());

    match opts.output {
        Output::Stdout => write_stdout(&out),
        Output::File => write_file(&out_name, &out, opts.force_overwrite),
    }
}

/// Check that every file named in opts (HzOpts) decompresses cleanly. Nothing is written.
pub fn test(opts: &HzOpts) -> Result<()> {
    for fname in &opts.files {
        let out = decompress_bytes(&fs::read(fname)?)?;
        info!("{}: ok, {} bytes", fname, out.len());
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compression::compress::compress_bytes;
    use crate::compression::container::TRAILER_SIZE;
    use crate::huffman_coding::node::NodeData;

    fn round_trip(data: &[u8]) -> Vec<u8> {
        decompress_bytes(&compress_bytes(data).unwrap().to_bytes()).unwrap()
    }

    /// Repeatable bytes with a skewed distribution
    fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                let r = (state >> 16) as u8;
                if r < 128 {
                    r % 8
                } else {
                    r
                }
            })
            .collect()
    }

    /// Drop the last byte of the data section
    fn without_last_data_byte(compressed: &[u8]) -> Vec<u8> {
        let mut short = compressed.to_vec();
        short.remove(short.len() - TRAILER_SIZE - 1);
        short
    }

    #[test]
    fn round_trip_test() {
        assert_eq!(round_trip(&[]), Vec::<u8>::new());
        assert_eq!(round_trip(b"x"), b"x".to_vec());
        assert_eq!(round_trip(&[0x41; 1000]), vec![0x41; 1000]);

        let all: Vec<u8> = (0..=255).collect();
        assert_eq!(round_trip(&all), all);

        let text = b"BZIP2 is a block-oriented approach to compress data.";
        assert_eq!(round_trip(text), text.to_vec());

        for seed in 1..6 {
            let data = noise(5000, seed);
            assert_eq!(round_trip(&data), data);
        }
    }

    #[test]
    fn single_symbol_tree_test() {
        let compressed = compress_bytes(&[0x41; 1000]).unwrap();
        let root = deserialize_tree(&compressed.tree).unwrap();
        assert_eq!(root.leaf_count(), 2);
        match &root.node_data {
            NodeData::Kids(_, right) => assert_eq!(right.node_data, NodeData::Leaf(0x41)),
            NodeData::Leaf(_) => panic!("root should not be a leaf"),
        }
        let out = decompress_bytes(&compressed.to_bytes()).unwrap();
        assert_eq!(out.len(), 1000);
        assert!(out.iter().all(|&b| b == 0x41));
    }

    #[test]
    fn truncated_data_test() {
        let mut inputs = vec![
            vec![0x41; 1000],
            b"abracadabra, abracadabra, abracadabra".to_vec(),
            (0..=255).collect::<Vec<u8>>(),
        ];
        inputs.extend((1..4).map(|seed| noise(777, seed)));

        for data in inputs {
            let compressed = compress_bytes(&data).unwrap().to_bytes();
            let short = without_last_data_byte(&compressed);
            assert!(decompress_bytes(&short).is_err());
        }
    }

    #[test]
    fn truncated_file_test() {
        let compressed = compress_bytes(b"cut the last byte off").unwrap().to_bytes();
        for len in 0..compressed.len() {
            assert!(decompress_bytes(&compressed[..len]).is_err());
        }
    }

    #[test]
    fn checksum_test() {
        let mut compressed = compress_bytes(&[0x41; 64]).unwrap().to_bytes();
        let last = compressed.len() - 1;
        compressed[last] ^= 0x01;
        assert!(matches!(
            decompress_bytes(&compressed),
            Err(HuffError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn mid_code_test() {
        // 'c' is 0, 'a' is 10, 'b' is 11. End the data on the first bit of 'a'.
        let mut container = compress_bytes(b"abcc").unwrap();
        container.data = crate::bitstream::bitbuffer::BitBuffer::new(1);
        container.data.append_bit(true);
        assert!(matches!(
            decompress_bytes(&container.to_bytes()),
            Err(HuffError::TruncatedCode(1))
        ));
    }
}
