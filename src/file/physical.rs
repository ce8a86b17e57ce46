//! Physical file backend for memory-mapped I/O.
//!
//! This module provides the [`crate::file::physical::Physical`] backend that implements the
//! [`crate::file::Backend`] trait for accessing SF files on disk through a read-only memory
//! mapping. The mapping keeps the file alive for as long as the backend exists and releases
//! it on drop, on every exit path of a parse.
//!
//! # Error Handling
//!
//! ```rust,ignore
//! use sfscope::file::Physical;
//!
//! match Physical::new("nonexistent.sf") {
//!     Ok(physical) => println!("mapped {} bytes", physical.len()),
//!     Err(e) => println!("Failed to open file: {}", e),
//! }
//! ```

use super::Backend;
use crate::{Error::InvalidPath, Result};

use memmap2::Mmap;
use std::{fs, io, path::Path};

/// A file backend that uses memory-mapped I/O for efficient access to files on disk.
#[derive(Debug)]
pub struct Physical {
    /// Memory-mapped file data
    data: Mmap,
}

impl Physical {
    /// Create a new physical file backend by memory-mapping the specified file.
    ///
    /// # Arguments
    /// * `path` - Path to the SF file on disk. Accepts `&Path`, `&str`, `String`, or `PathBuf`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidPath`] if the path does not name a regular file, or if
    /// the file cannot be opened or mapped.
    pub fn new(path: impl AsRef<Path>) -> Result<Physical> {
        let file = fs::File::open(path).map_err(InvalidPath)?;
        if !file.metadata().map_err(InvalidPath)?.is_file() {
            return Err(InvalidPath(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }

        // SAFETY: the mapping is read-only and never outlives `Physical`.
        let mmap = unsafe { Mmap::map(&file) }.map_err(InvalidPath)?;

        Ok(Physical { data: mmap })
    }
}

impl Backend for Physical {
    fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
