//! Error handling for huffzip.
//!
//! Every stage of compression and decompression reports failures through [`HuffError`].
//! Nothing is retried. The first error aborts the run.

use thiserror::Error;

/// Main error type for huffzip
#[derive(Error, Debug)]
pub enum HuffError {
    /// Opening, reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The compressed input is malformed or truncated
    #[error("Corrupt compressed data: {0}")]
    Corrupt(String),

    /// The data bits ran out part way through a code
    #[error("Compressed data ended in the middle of a code, {0} bits after the last symbol")]
    TruncatedCode(usize),

    /// The decoded bytes do not match the checksum stored with them
    #[error("Checksum mismatch: stored {stored:08x}, computed {computed:08x}")]
    ChecksumMismatch {
        /// CRC read from the compressed file
        stored: u32,
        /// CRC of the bytes we decoded
        computed: u32,
    },

    /// A byte had no code. The table and the input it was built from disagree.
    #[error("Symbol {0:#04x} has no entry in the code table")]
    MissingCode(u8),

    /// Decompression input without the compressed file suffix
    #[error("{0} does not end in .{1}, refusing to decompress")]
    BadExtension(String, String),

    /// The output file is already there and we were not told to overwrite it
    #[error("Output file {0} already exists (use --force to overwrite)")]
    OutputExists(String),
}

impl HuffError {
    /// Shorthand for a [`HuffError::Corrupt`] with the given message.
    pub fn corrupt<S: Into<String>>(msg: S) -> Self {
        HuffError::Corrupt(msg.into())
    }
}

/// Result type used throughout huffzip
pub type Result<T> = std::result::Result<T, HuffError>;
