//! BitBuffer: the growable bit container behind every bitstream huffzip writes or reads.
//!
//! Bits are packed most significant bit first. Appending never moves or removes bits that are
//! already there, and the unused low bits of the final byte are always zero, so the packed bytes
//! can be written to a file as they are.

/// Append-only sequence of bits, randomly readable by bit index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    /// Packed bits. Always exactly `ceil(len / 8)` bytes long.
    bytes: Vec<u8>,
    /// Count of bits appended so far.
    len: usize,
}

impl BitBuffer {
    /// Create an empty BitBuffer with room for at least `capacity_hint` bits. The hint only
    /// sizes the first allocation; the buffer grows as needed after that.
    pub fn new(capacity_hint: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((capacity_hint + 7) / 8),
            len: 0,
        }
    }

    /// Rebuild a BitBuffer holding `len` bits from packed bytes (as read back from a file).
    /// Returns None if there are not enough bytes to hold `len` bits. Extra bytes are dropped and
    /// the padding bits of the last byte are cleared.
    pub fn from_bytes(mut bytes: Vec<u8>, len: usize) -> Option<Self> {
        let needed = (len + 7) / 8;
        if bytes.len() < needed {
            return None;
        }
        bytes.truncate(needed);
        let used = len % 8;
        if used > 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= 0xff_u8 << (8 - used);
            }
        }
        Some(Self { bytes, len })
    }

    /// Append one bit at the end of the buffer.
    pub fn append_bit(&mut self, bit: bool) {
        let offset = self.len % 8;
        // Start a new byte when the last one is full
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            self.bytes[self.len / 8] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// Append the low `count` bits of `value`, most significant bit first.
    pub fn append_bits(&mut self, value: u32, count: u8) {
        debug_assert!(count <= 32);
        for shift in (0..count).rev() {
            self.append_bit((value >> shift) & 1 == 1);
        }
    }

    /// Return the bit at `index`. The index must be less than `len()`.
    pub fn get_bit(&self, index: usize) -> bool {
        debug_assert!(
            index < self.len,
            "bit index {} out of range for {} bits",
            index,
            self.len
        );
        self.bytes[index / 8] & (0x80 >> (index % 8)) != 0
    }

    /// Number of bits appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The packed bytes, `ceil(len / 8)` of them, zero padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of meaningful bits in the final byte: 1-8, or 0 if the buffer is empty.
    pub fn last_byte_bits(&self) -> u8 {
        match self.len % 8 {
            0 if self.len > 0 => 8,
            used => used as u8,
        }
    }

    /// Iterate over the bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |index| self.get_bit(index))
    }

    /// Debugging function to return the number of bytes.bits held so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.len / 8, self.len % 8)
    }
}

#[cfg(test)]
mod test {
    use super::BitBuffer;

    #[test]
    fn append_bit_test() {
        let mut bb = BitBuffer::new(8);
        for bit in [true, false, false, false, false, false, false, true] {
            bb.append_bit(bit);
        }
        assert_eq!(bb.as_bytes(), &[0b1000_0001]);
        assert_eq!(bb.len(), 8);
        assert_eq!(bb.last_byte_bits(), 8);
    }

    #[test]
    fn grows_past_hint_test() {
        let mut bb = BitBuffer::new(1);
        for _ in 0..3 {
            bb.append_bits(0xff, 8);
        }
        bb.append_bit(true);
        assert_eq!(bb.as_bytes(), &[0xff, 0xff, 0xff, 0x80]);
        assert_eq!(bb.len(), 25);
        assert_eq!("[3.1]", &bb.loc());
    }

    #[test]
    fn append_bits_test() {
        let mut bb = BitBuffer::new(16);
        bb.append_bit(true);
        bb.append_bits('A' as u32, 8);
        assert_eq!(bb.len(), 9);
        // 1 01000001 -> 10100000 1(0000000)
        assert_eq!(bb.as_bytes(), &[0b1010_0000, 0b1000_0000]);
        assert_eq!(bb.last_byte_bits(), 1);
    }

    #[test]
    fn get_bit_test() {
        let mut bb = BitBuffer::new(0);
        bb.append_bits(0b1011_0010_1, 9);
        let bits: Vec<bool> = bb.iter().collect();
        assert_eq!(
            bits,
            vec![true, false, true, true, false, false, true, false, true]
        );
        assert!(bb.get_bit(0));
        assert!(!bb.get_bit(1));
        assert!(bb.get_bit(8));
    }

    #[test]
    fn padding_is_zero_test() {
        let mut bb = BitBuffer::new(0);
        bb.append_bit(true);
        bb.append_bit(true);
        bb.append_bit(false);
        assert_eq!(bb.as_bytes(), &[0b1100_0000]);
        assert_eq!(bb.last_byte_bits(), 3);
    }

    #[test]
    fn empty_test() {
        let bb = BitBuffer::new(100);
        assert!(bb.is_empty());
        assert_eq!(bb.as_bytes(), &[] as &[u8]);
        assert_eq!(bb.last_byte_bits(), 0);
    }

    #[test]
    fn from_bytes_test() {
        // Garbage in the padding bits and an extra trailing byte
        let bb = BitBuffer::from_bytes(vec![0xff, 0b1011_1111, 0x55], 11).unwrap();
        assert_eq!(bb.len(), 11);
        assert_eq!(bb.as_bytes(), &[0xff, 0b1010_0000]);

        let mut same = BitBuffer::new(11);
        same.append_bits(0b1111_1111_101, 11);
        assert_eq!(bb, same);
    }

    #[test]
    fn from_bytes_too_short_test() {
        assert!(BitBuffer::from_bytes(vec![0xff], 9).is_none());
        assert!(BitBuffer::from_bytes(vec![], 0).is_some());
    }
}
