//! SF file header.
//!
//! The header occupies the first [`HEADER_SIZE`] bytes of every SF file and must validate
//! completely before any section record is looked at.
//!
//! # Layout
//!
//! | Offset | Size | Field                        |
//! |--------|------|------------------------------|
//! | 0      | 1    | magic (`'s'`)                |
//! | 1      | 2    | header size (not validated)  |
//! | 3      | 2    | version (`u16`)              |
//! | 5      | 1    | section count (`u8`)         |

use std::ops::RangeInclusive;

use crate::{
    file::parser::Parser,
    sf::{HEADER_SIZE, MAGIC, MAX_SECTIONS, MAX_VERSION, MIN_SECTIONS, MIN_VERSION},
    Error, Result,
};

/// Accepted values of [`FileHeader::version`].
pub const VERSION_RANGE: RangeInclusive<u16> = MIN_VERSION..=MAX_VERSION;

/// Accepted values of [`FileHeader::section_count`].
pub const SECTION_COUNT_RANGE: RangeInclusive<u8> = MIN_SECTIONS..=MAX_SECTIONS;

/// The validated file-level header of an SF file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// Sentinel byte, always [`MAGIC`] once validated
    pub magic: u8,
    /// Declared header size, carried as-is
    pub header_size: u16,
    /// Format version, within [`VERSION_RANGE`]
    pub version: u16,
    /// Number of section records following the header, within [`SECTION_COUNT_RANGE`]
    pub section_count: u8,
}

impl FileHeader {
    /// Read and validate the header from a parser positioned at the start of the file.
    ///
    /// Fields are checked in file order and the first failing field decides the error;
    /// a field cut short by the end of the data fails the same way as an invalid value.
    ///
    /// # Errors
    /// - [`Error::BadMagic`] if the first byte is missing or not [`MAGIC`]
    /// - [`Error::BadVersion`] if the version is truncated or outside [`VERSION_RANGE`]
    /// - [`Error::BadSectionCount`] if the count is truncated or outside [`SECTION_COUNT_RANGE`]
    pub fn read(parser: &mut Parser) -> Result<FileHeader> {
        let magic = parser
            .read_le::<u8>()
            .map_err(|e| e.truncated_as(Error::BadMagic))?;
        if magic != MAGIC {
            return Err(Error::BadMagic);
        }

        // A truncated header size leaves nothing to read the version from
        let header_size = parser
            .read_le::<u16>()
            .map_err(|e| e.truncated_as(Error::BadVersion))?;

        let version = parser
            .read_le::<u16>()
            .map_err(|e| e.truncated_as(Error::BadVersion))?;
        if !VERSION_RANGE.contains(&version) {
            return Err(Error::BadVersion);
        }

        let section_count = parser
            .read_le::<u8>()
            .map_err(|e| e.truncated_as(Error::BadSectionCount))?;
        if !SECTION_COUNT_RANGE.contains(&section_count) {
            return Err(Error::BadSectionCount);
        }

        debug_assert_eq!(parser.pos(), HEADER_SIZE);

        Ok(FileHeader {
            magic,
            header_size,
            version,
            section_count,
        })
    }

    /// Number of section records as a `usize`.
    #[must_use]
    pub fn sections(&self) -> usize {
        usize::from(self.section_count)
    }
}
