//! The SF section container format.
//!
//! An SF file is a 6-byte header followed by a table of fixed-size section records:
//!
//! | Offset            | Size | Field                  |
//! |-------------------|------|------------------------|
//! | 0                 | 1    | magic (`'s'`)          |
//! | 1                 | 2    | header size (unused)   |
//! | 3                 | 2    | version (`u16`)        |
//! | 5                 | 1    | section count (`u8`)   |
//! | 6 + 32·i          | 20   | section\[i\].name      |
//! | 6 + 32·i + 20     | 4    | section\[i\].type      |
//! | 6 + 32·i + 24     | 4    | section\[i\].offset    |
//! | 6 + 32·i + 28     | 4    | section\[i\].size      |
//!
//! Parsing runs as three gated stages, each of which can stop the pipeline with exactly one
//! error:
//!
//! 1. [`FileHeader::read`] - magic, version and section count
//! 2. [`SectionTable::validate`] - type codes of every record, without output
//! 3. [`SectionTable::read`] - full decode of every record, in file order
//!
//! Section payloads are never read. Offsets and sizes are reported as stored.

pub mod header;
pub mod report;
pub mod section;
pub mod table;

use std::path::Path;

use crate::{file::File, Result};
use header::FileHeader;
use report::SfReport;
use table::SectionTable;

/// Sentinel value of the first byte.
pub const MAGIC: u8 = b's';
/// Lowest accepted format version.
pub const MIN_VERSION: u16 = 42;
/// Highest accepted format version.
pub const MAX_VERSION: u16 = 101;
/// Lowest accepted section count.
pub const MIN_SECTIONS: u8 = 2;
/// Highest accepted section count.
pub const MAX_SECTIONS: u8 = 20;
/// Size of the file header; the section table starts here.
pub const HEADER_SIZE: usize = 1 + 2 + 2 + 1;
/// Size of the fixed name field of a section record.
pub const SECTION_NAME_LEN: usize = 20;
/// Size of one section record.
pub const SECTION_HEADER_SIZE: usize = SECTION_NAME_LEN + 4 + 4 + 4;

/// Entry point for parsing SF files.
///
/// Every call acquires its own source and parser and shares nothing with other calls, so
/// parses may run concurrently from any number of threads.
///
/// # Examples
///
/// ```rust,no_run
/// use sfscope::SfFile;
///
/// let report = SfFile::from_path("sample.sf")?;
/// for section in &report.sections {
///     println!("{}: {} ({} bytes)", section.index, section.name, section.size);
/// }
/// # Ok::<(), sfscope::Error>(())
/// ```
pub struct SfFile;

impl SfFile {
    /// Parse the SF file at `path`.
    ///
    /// The file is mapped for the duration of the call and released before it returns.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidPath`] if the file cannot be opened, and otherwise the
    /// error of the first stage that rejects the data.
    pub fn from_path(path: impl AsRef<Path>) -> Result<SfReport> {
        let file = File::from_file(path.as_ref())?;
        SfFile::parse(&file)
    }

    /// Parse an SF file held in memory.
    ///
    /// # Errors
    /// Returns the error of the first stage that rejects the data.
    pub fn from_mem(data: Vec<u8>) -> Result<SfReport> {
        SfFile::parse(&File::from_mem(data))
    }

    /// Run the three parse stages over a loaded source.
    ///
    /// # Errors
    /// Returns the error of the first stage that rejects the data.
    pub fn parse(file: &File) -> Result<SfReport> {
        SfFile::run_stages(file).inspect_err(|e| log::warn!("rejected: {e}"))
    }

    fn run_stages(file: &File) -> Result<SfReport> {
        let mut parser = file.parser();

        let header = FileHeader::read(&mut parser)?;
        log::debug!(
            "header accepted: version={} sections={}",
            header.version,
            header.section_count
        );

        SectionTable::validate(&mut parser, &header)?;
        log::debug!("section table pre-scan passed");

        let table = SectionTable::read(&mut parser, &header)?;
        log::debug!("reported {} sections", table.len());

        Ok(SfReport::new(header, &table))
    }
}
