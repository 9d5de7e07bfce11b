//! Layout of a compressed file.
//!
//! | Size | Field |
//! |---|---|
//! | 4 bytes, little endian | bits in the tree section |
//! | 1 byte | valid bits in the final data byte (1-8, 0 for an empty input) |
//! | `ceil(tree bits / 8)` bytes | serialized tree |
//! | everything up to the trailer | encoded data |
//! | 4 bytes, big endian | CRC32 of the original bytes |
//!
//! An empty input is stored as an empty tree, no data and a final byte count of 0.
//!
//! The CRC trailer makes these files unreadable by decoders that treat everything after the
//! tree as data. Files without the trailer fail the header checks or the CRC comparison.

use crate::bitstream::bitbuffer::BitBuffer;
use crate::error::{HuffError, Result};

/// Bytes ahead of the tree section
pub const HEADER_SIZE: usize = 5;
/// Bytes after the data section
pub const TRAILER_SIZE: usize = 4;

/// The sections of a compressed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// Serialized tree. Empty only for an empty input.
    pub tree: BitBuffer,
    /// Encoded data.
    pub data: BitBuffer,
    /// CRC32 of the original bytes.
    pub crc: u32,
}

impl Container {
    /// Pack the sections into the bytes of a compressed file.
    pub fn to_bytes(&self) -> Vec<u8> {
        let tree_bytes = self.tree.as_bytes();
        let data_bytes = self.data.as_bytes();
        let mut out =
            Vec::with_capacity(HEADER_SIZE + tree_bytes.len() + data_bytes.len() + TRAILER_SIZE);

        // The tree never needs more than 2559 bits, so this cannot truncate
        out.extend_from_slice(&(self.tree.len() as u32).to_le_bytes());
        out.push(self.data.last_byte_bits());
        out.extend_from_slice(tree_bytes);
        out.extend_from_slice(data_bytes);
        out.extend_from_slice(&self.crc.to_be_bytes());
        out
    }

    /// Split the bytes of a compressed file into its sections, checking that the header agrees
    /// with the amount of data present.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE + TRAILER_SIZE {
            return Err(HuffError::corrupt(format!(
                "file is {} bytes, too short for the {} byte header and {} byte trailer",
                bytes.len(),
                HEADER_SIZE,
                TRAILER_SIZE
            )));
        }
        let tree_bits = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        let last_bits = bytes[4];
        let tail = bytes.len() - TRAILER_SIZE;
        let crc = u32::from_be_bytes([
            bytes[tail],
            bytes[tail + 1],
            bytes[tail + 2],
            bytes[tail + 3],
        ]);

        let body = &bytes[HEADER_SIZE..tail];
        let tree_bytes = (tree_bits + 7) / 8;
        if body.len() < tree_bytes {
            return Err(HuffError::corrupt(format!(
                "tree section needs {} bytes but only {} remain",
                tree_bytes,
                body.len()
            )));
        }
        let (tree_part, data_part) = body.split_at(tree_bytes);

        let data_bits = match (tree_bits, last_bits, data_part.len()) {
            // Empty input
            (0, 0, 0) => 0,
            (0, _, _) => {
                return Err(HuffError::corrupt("file has no tree but claims to hold data"))
            }
            (_, 1..=8, 0) => {
                return Err(HuffError::corrupt(format!(
                    "data section is empty but its final byte should hold {} bits",
                    last_bits
                )))
            }
            (_, 1..=8, n) => (n - 1) * 8 + last_bits as usize,
            _ => {
                return Err(HuffError::corrupt(format!(
                    "final data byte claims {} valid bits",
                    last_bits
                )))
            }
        };

        let tree = BitBuffer::from_bytes(tree_part.to_vec(), tree_bits)
            .ok_or_else(|| HuffError::corrupt("tree section is truncated"))?;
        let data = BitBuffer::from_bytes(data_part.to_vec(), data_bits)
            .ok_or_else(|| HuffError::corrupt("data section is truncated"))?;
        Ok(Self { tree, data, crc })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Container {
        let mut tree = BitBuffer::new(19);
        tree.append_bit(false);
        tree.append_bit(true);
        tree.append_bits(0x00, 8);
        tree.append_bit(true);
        tree.append_bits(0x41, 8);
        let mut data = BitBuffer::new(10);
        data.append_bits(0b11_1111_1111, 10);
        Container {
            tree,
            data,
            crc: 0x1234_5678,
        }
    }

    #[test]
    fn layout_test() {
        let bytes = sample().to_bytes();
        assert_eq!(
            bytes,
            vec![
                19, 0, 0, 0, // tree bits
                2, // valid bits in the last data byte
                0b0100_0000, 0b0010_1000, 0b0010_0000, // tree
                0xff, 0b1100_0000, // data
                0x12, 0x34, 0x56, 0x78, // crc
            ]
        );
        assert_eq!(Container::from_bytes(&bytes).unwrap(), sample());
    }

    #[test]
    fn empty_test() {
        let empty = Container {
            tree: BitBuffer::new(0),
            data: BitBuffer::new(0),
            crc: 0,
        };
        let bytes = empty.to_bytes();
        assert_eq!(bytes, vec![0; HEADER_SIZE + TRAILER_SIZE]);
        assert_eq!(Container::from_bytes(&bytes).unwrap(), empty);
    }

    #[test]
    fn too_short_test() {
        assert!(matches!(
            Container::from_bytes(&[0, 0, 0, 0, 0, 0, 0, 0]),
            Err(HuffError::Corrupt(_))
        ));
    }

    #[test]
    fn tree_longer_than_file_test() {
        let mut bytes = sample().to_bytes();
        bytes[0] = 200;
        assert!(matches!(
            Container::from_bytes(&bytes),
            Err(HuffError::Corrupt(_))
        ));
    }

    #[test]
    fn bad_last_bits_test() {
        let mut bytes = sample().to_bytes();
        bytes[4] = 9;
        assert!(Container::from_bytes(&bytes).is_err());
        bytes[4] = 0;
        assert!(Container::from_bytes(&bytes).is_err());
    }

    #[test]
    fn missing_data_test() {
        let mut container = sample();
        container.data = BitBuffer::new(0);
        let mut bytes = container.to_bytes();
        // Claim a full last byte that is not there
        bytes[4] = 8;
        assert!(matches!(
            Container::from_bytes(&bytes),
            Err(HuffError::Corrupt(_))
        ));
    }

    #[test]
    fn data_without_tree_test() {
        let bytes = [0, 0, 0, 0, 8, 0xff, 0, 0, 0, 0];
        assert!(Container::from_bytes(&bytes).is_err());
    }
}
