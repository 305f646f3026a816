//! Whole-file load and save.
//!
//! No buffering strategy, no atomic rename and no encoding negotiation: the
//! file is read in one go and written back with truncate.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum FileError {
    Read { path: PathBuf, source: io::Error },
    Write { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Read { path, source } => {
                write!(f, "failed to read file {}: {}", path.display(), source)
            }
            FileError::Write { path, source } => {
                write!(f, "failed to write file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Read { source, .. } | FileError::Write { source, .. } => Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, FileError>;

/// Read the whole file. Content that is not valid UTF-8 is a read error, so a
/// later save can never write back anything but the bytes that were loaded.
pub fn load_file(path: &Path) -> Result<String> {
    let read_error = |source: io::Error| FileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let bytes = std::fs::read(path).map_err(read_error)?;
    String::from_utf8(bytes)
        .map_err(|err| read_error(io::Error::new(io::ErrorKind::InvalidData, err.utf8_error())))
}

/// Overwrite `path` with `text`, truncating whatever was there.
pub fn save_file(path: &Path, text: &str) -> Result<()> {
    let write = || -> io::Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    };

    write().map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/file.rs"]
mod tests;
