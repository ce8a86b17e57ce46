//! SF section table: validation pre-scan and reporting pass.
//!
//! The table is read twice. [`SectionTable::validate`] walks every record and checks only
//! the type codes, producing nothing. [`SectionTable::read`] then walks the table again from
//! the start and decodes each record in full. Nothing is reported unless the pre-scan has
//! accepted every record, including the last one, so a late invalid section can never leave
//! earlier sections half-reported.

use std::ops::Index;

use crate::{
    file::parser::Parser,
    sf::{
        header::FileHeader,
        section::{SectionHeader, SectionType},
        HEADER_SIZE, SECTION_NAME_LEN,
    },
    Error, Result,
};

/// Bytes of the offset and size fields that follow a record's type code.
const TYPE_TRAILER_LEN: usize = 4 + 4;

/// The validated, ordered section table of an SF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTable {
    sections: Vec<SectionHeader>,
}

impl SectionTable {
    /// Pre-scan all `header.section_count` records, checking each type code.
    ///
    /// The parser is repositioned to the start of the table first. On return its position
    /// is unspecified; callers must reseek before reading again.
    ///
    /// # Errors
    /// Returns [`Error::BadSectionType`] at the first record whose type is not whitelisted,
    /// or whose fields are cut short by the end of the data. Later records are not read.
    pub fn validate(parser: &mut Parser, header: &FileHeader) -> Result<()> {
        SectionTable::scan(parser, header).map_err(|e| e.truncated_as(Error::BadSectionType))
    }

    fn scan(parser: &mut Parser, header: &FileHeader) -> Result<()> {
        parser.seek(HEADER_SIZE)?;

        for index in 0..header.sections() {
            parser.advance_by(SECTION_NAME_LEN)?;

            let code = parser.read_le::<u32>()?;
            if !SectionType::is_valid(code) {
                log::debug!("section {} has invalid type {code}", index + 1);
                return Err(Error::BadSectionType);
            }

            parser.advance_by(TYPE_TRAILER_LEN)?;
        }

        Ok(())
    }

    /// Decode all `header.section_count` records in file order.
    ///
    /// Intended to run after [`SectionTable::validate`] has accepted the same data. Each
    /// record's type is checked again while decoding.
    ///
    /// # Errors
    /// Returns [`Error::BadSectionType`] if any record fails to decode.
    pub fn read(parser: &mut Parser, header: &FileHeader) -> Result<SectionTable> {
        parser
            .seek(HEADER_SIZE)
            .map_err(|e| e.truncated_as(Error::BadSectionType))?;

        let sections = (0..header.sections())
            .map(|_| SectionHeader::read(parser))
            .collect::<Result<Vec<_>>>()?;

        Ok(SectionTable { sections })
    }

    /// Number of sections in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if the table holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate the sections in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, SectionHeader> {
        self.sections.iter()
    }

    /// Get the section at the 0-based `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SectionHeader> {
        self.sections.get(index)
    }
}

impl Index<usize> for SectionTable {
    type Output = SectionHeader;

    fn index(&self, index: usize) -> &Self::Output {
        &self.sections[index]
    }
}

impl<'a> IntoIterator for &'a SectionTable {
    type Item = &'a SectionHeader;
    type IntoIter = std::slice::Iter<'a, SectionHeader>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
