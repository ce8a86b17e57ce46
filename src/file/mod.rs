//! Byte source abstraction for SF parsing.
//!
//! This module abstracts over the places an SF file can come from (a path on disk, or a
//! buffer already in memory) and hands out bounds-checked access to the raw bytes. The
//! format logic in [`crate::sf`] only ever sees a byte slice through a
//! [`crate::file::parser::Parser`], so it behaves identically for both sources.
//!
//! # Key Components
//!
//! ## Core Types
//! - [`crate::file::File`] - Owner of one data source for the lifetime of a parse
//! - [`crate::file::Backend`] - Trait for different data sources (disk files, memory buffers)
//!
//! ## Parsing Infrastructure
//! - [`crate::file::parser::Parser`] - Cursor-based reader used by every pipeline stage
//! - [`crate::file::io`] - Low-level primitive decoding
//!
//! ## Backend Implementations
//! - `Physical` - Memory-mapped file backend for disk access
//! - `Memory` - In-memory buffer backend
//!
//! # Examples
//!
//! ```rust,no_run
//! use sfscope::File;
//! use std::path::Path;
//!
//! let file = File::from_file(Path::new("sample.sf"))?;
//! let mut parser = file.parser();
//! let magic = parser.read_le::<u8>()?;
//! println!("magic: {magic:#04x}, {} bytes", file.len());
//! # Ok::<(), sfscope::Error>(())
//! ```

pub mod io;
pub mod parser;

mod memory;
mod physical;

use std::path::Path;

use crate::{file::parser::Parser, Result};
use memory::Memory;
use physical::Physical;

/// Backend trait for file data sources.
///
/// A backend owns the bytes of one source and releases any operating system resources
/// (file handles, mappings) when dropped.
pub trait Backend: Send + Sync {
    /// Returns the entire data buffer.
    fn data(&self) -> &[u8];

    /// Returns the total length of the data.
    fn len(&self) -> usize;
}

/// A loaded SF byte source.
///
/// `File` is acquired once per parse and dropped at the end of it, which closes the
/// underlying handle on the success path and on every failure path alike.
pub struct File {
    data: Box<dyn Backend>,
}

impl File {
    /// Loads a file from disk using memory-mapped I/O.
    ///
    /// # Arguments
    /// * `file` - Path to the file on disk.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidPath`] if the file cannot be opened or mapped.
    pub fn from_file(file: &Path) -> Result<File> {
        let backend = Physical::new(file)?;
        log::debug!("mapped {} ({} bytes)", file.display(), backend.len());

        Ok(File::load(backend))
    }

    /// Loads a file from an owned memory buffer.
    ///
    /// Any buffer, including an empty one, is a valid byte source; whether it is a valid SF
    /// file is decided by the parser.
    ///
    /// # Arguments
    /// * `data` - The bytes to take ownership of.
    #[must_use]
    pub fn from_mem(data: Vec<u8>) -> File {
        File::load(Memory::new(data))
    }

    fn load<T: Backend + 'static>(data: T) -> File {
        File {
            data: Box::new(data),
        }
    }

    /// Returns the total size of the source in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the source holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    /// Returns the raw data of the loaded file.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.data.data()
    }

    /// Creates a fresh [`Parser`] positioned at offset 0.
    #[must_use]
    pub fn parser(&self) -> Parser<'_> {
        Parser::new(self.data.data())
    }
}
