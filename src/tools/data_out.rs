//! Output file naming and writing.
//!
//! Files are written to a temporary file in the target directory first and renamed over the
//! target once every byte is on disk. A failed run never leaves a half written file behind.

use std::io::{self, Write};
use std::path::Path;

use log::debug;
use tempfile::NamedTempFile;

use crate::error::{HuffError, Result};

/// Name of the compressed file for `input`: the input name plus `.suffix`.
pub fn compressed_name(input: &str, suffix: &str) -> String {
    format!("{}.{}", input, suffix)
}

/// Name of the restored file for `input`, which must end in `.suffix`.
pub fn decompressed_name(input: &str, suffix: &str) -> Result<String> {
    let ext = format!(".{}", suffix);
    match input.strip_suffix(&ext) {
        Some(stem) if !stem.is_empty() => Ok(stem.to_string()),
        _ => Err(HuffError::BadExtension(input.to_string(), suffix.to_string())),
    }
}

/// Write `data` to `fname`, replacing an existing file only when `force` is set.
pub fn write_file(fname: &str, data: &[u8], force: bool) -> Result<()> {
    let path = Path::new(fname);
    if path.exists() && !force {
        return Err(HuffError::OutputExists(fname.to_string()));
    }
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| HuffError::Io(e.error))?;
    debug!("Wrote {} bytes to {}", data.len(), fname);
    Ok(())
}

/// Write `data` to standard output.
pub fn write_stdout(data: &[u8]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(data)?;
    handle.flush()?;
    Ok(())
}
