//! Section records of the SF section table.
//!
//! Each record is [`SECTION_HEADER_SIZE`] bytes, laid out as a fixed-width name, a type
//! code, an offset and a size. Only the type code carries validation rules.

use std::fmt;

use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::{
    file::parser::Parser,
    sf::{SECTION_HEADER_SIZE, SECTION_NAME_LEN},
    Error, Result,
};

/// The closed set of section type codes an SF file may contain.
///
/// The codes are opaque identifiers; no ordering or numeric relationship between them is
/// implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
#[repr(u32)]
pub enum SectionType {
    /// Section type code 23
    Code23 = 23,
    /// Section type code 60
    Code60 = 60,
    /// Section type code 88
    Code88 = 88,
}

impl SectionType {
    /// Returns true if `code` belongs to the section type whitelist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfscope::SectionType;
    ///
    /// assert!(SectionType::is_valid(60));
    /// assert!(!SectionType::is_valid(59));
    /// ```
    #[must_use]
    pub fn is_valid(code: u32) -> bool {
        SectionType::iter().any(|ty| ty.code() == code)
    }

    /// The numeric code of this type as stored in the file.
    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for SectionType {
    type Error = Error;

    fn try_from(code: u32) -> Result<Self> {
        SectionType::iter()
            .find(|ty| ty.code() == code)
            .ok_or(Error::BadSectionType)
    }
}

impl fmt::Display for SectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Fixed-width section name as stored in the file.
///
/// The stored bytes may or may not contain a NUL terminator. Textual access always stops at
/// the first NUL, or after [`SECTION_NAME_LEN`] bytes when there is none, so a name can never
/// extend into the fields that follow it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionName {
    /// Raw bytes, plus one byte that is always zero
    raw: [u8; SECTION_NAME_LEN + 1],
}

impl SectionName {
    /// Create a name from the raw field bytes.
    #[must_use]
    pub fn new(field: [u8; SECTION_NAME_LEN]) -> Self {
        let mut raw = [0_u8; SECTION_NAME_LEN + 1];
        raw[..SECTION_NAME_LEN].copy_from_slice(&field);
        raw[SECTION_NAME_LEN] = 0;
        SectionName { raw }
    }

    /// The name bytes up to, but not including, the first NUL.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        let end = self
            .raw
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(SECTION_NAME_LEN);
        &self.raw[..end]
    }

    /// The name as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// All [`SECTION_NAME_LEN`] bytes of the field as read from the file.
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw[..SECTION_NAME_LEN]
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Debug for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionName({:?})", self.to_string_lossy())
    }
}

/// One decoded record of the section table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    /// Section name
    pub name: SectionName,
    /// Whitelisted section type
    pub section_type: SectionType,
    /// Offset of the section data; stored, not validated
    pub offset: u32,
    /// Length of the section data in bytes; not checked against the file length
    pub size: u32,
}

impl SectionHeader {
    /// Read one full record from the parser's current position.
    ///
    /// # Errors
    /// Returns [`Error::BadSectionType`] if the type code is not whitelisted or if the record
    /// is truncated.
    pub fn read(parser: &mut Parser) -> Result<SectionHeader> {
        let start = parser.pos();
        let record = SectionHeader::read_fields(parser)
            .map_err(|e| e.truncated_as(Error::BadSectionType))?;
        debug_assert_eq!(parser.pos() - start, SECTION_HEADER_SIZE);
        Ok(record)
    }

    fn read_fields(parser: &mut Parser) -> Result<SectionHeader> {
        let name = SectionName::new(parser.read_fixed::<SECTION_NAME_LEN>()?);
        let section_type = SectionType::try_from(parser.read_le::<u32>()?)?;
        let offset = parser.read_le::<u32>()?;
        let size = parser.read_le::<u32>()?;

        Ok(SectionHeader {
            name,
            section_type,
            offset,
            size,
        })
    }
}

/// Number of whitelisted section types.
pub const SECTION_TYPE_COUNT: usize = SectionType::COUNT;
