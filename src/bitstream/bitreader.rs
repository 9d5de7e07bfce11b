//! BitReader: a module for reading a BitBuffer from front to back.
//!
//! The reader keeps a cursor that only moves forward. Every read returns an Option so the caller
//! can tell a clean value from running off the end of the buffer.
//!

use super::bitbuffer::BitBuffer;

/// Reads bits, small integers and bytes from a BitBuffer.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a BitBuffer,
    cursor: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit.
    pub fn new(buffer: &'a BitBuffer) -> Self {
        Self { buffer, cursor: 0 }
    }

    /// Return the next bit as Option<bool> (true for 1), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<bool> {
        if self.cursor >= self.buffer.len() {
            return None;
        }
        let bit = self.buffer.get_bit(self.cursor);
        self.cursor += 1;
        Some(bit)
    }

    /// Return Option<u32> of the next n bits (most significant first), or None if fewer than n
    /// bits are left. Nothing is consumed when None is returned.
    pub fn bint(&mut self, n: usize) -> Option<u32> {
        debug_assert!(n <= 32);
        if self.remaining() < n {
            return None;
        }
        let mut result = 0_u32;
        for _ in 0..n {
            result = result << 1 | self.buffer.get_bit(self.cursor) as u32;
            self.cursor += 1;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there are fewer than 8 bits left. This is
    /// a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Count of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Count of bits not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Debugging function. Report current position as bytes.bits.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor / 8, self.cursor % 8)
    }
}
