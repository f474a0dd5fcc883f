// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::errors::Result;

pub mod mock;

/// Abstract filesystem interface used to read the input table.
pub trait FileSystem: Send + Sync + Debug {
    /// Open `path` for reading. A missing or unreadable file is an
    /// [`RhobatchError::IoError`](crate::errors::RhobatchError::IoError).
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>>;

    fn is_file(&self, path: &Path) -> bool;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>> {
        let file = fs::File::open(path).map_err(|e| with_path(e, "opening", path))?;
        Ok(Box::new(file))
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

/// Keep the error kind, add which file the operation was about.
pub(crate) fn with_path(err: io::Error, action: &str, path: &Path) -> io::Error {
    io::Error::new(err.kind(), format!("{action} {}: {err}", path.display()))
}
