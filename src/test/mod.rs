//! Builders for crafted SF files used across unit tests.

use crate::sf::{MAGIC, SECTION_HEADER_SIZE, SECTION_NAME_LEN};

/// Encode one section record. Names longer than the field are cut to fit.
pub fn section_record(name: &str, section_type: u32, offset: u32, size: u32) -> Vec<u8> {
    let mut field = [0_u8; SECTION_NAME_LEN];
    let len = name.len().min(SECTION_NAME_LEN);
    field[..len].copy_from_slice(&name.as_bytes()[..len]);
    raw_section_record(field, section_type, offset, size)
}

/// Encode one section record with the name field given byte for byte.
pub fn raw_section_record(
    name: [u8; SECTION_NAME_LEN],
    section_type: u32,
    offset: u32,
    size: u32,
) -> Vec<u8> {
    let mut record = Vec::with_capacity(SECTION_HEADER_SIZE);
    record.extend_from_slice(&name);
    record.extend_from_slice(&section_type.to_le_bytes());
    record.extend_from_slice(&offset.to_le_bytes());
    record.extend_from_slice(&size.to_le_bytes());
    record
}

/// Assembles an SF file from a header and a list of section records.
///
/// The section count defaults to the number of records added.
pub struct SfBuilder {
    magic: u8,
    header_size: u16,
    version: u16,
    section_count: Option<u8>,
    records: Vec<Vec<u8>>,
}

impl SfBuilder {
    pub fn new() -> Self {
        SfBuilder {
            magic: MAGIC,
            header_size: 6,
            version: 50,
            section_count: None,
            records: Vec::new(),
        }
    }

    pub fn magic(mut self, magic: u8) -> Self {
        self.magic = magic;
        self
    }

    pub fn header_size(mut self, header_size: u16) -> Self {
        self.header_size = header_size;
        self
    }

    pub fn version(mut self, version: u16) -> Self {
        self.version = version;
        self
    }

    pub fn section_count(mut self, count: u8) -> Self {
        self.section_count = Some(count);
        self
    }

    pub fn section(mut self, name: &str, section_type: u32, offset: u32, size: u32) -> Self {
        self.records
            .push(section_record(name, section_type, offset, size));
        self
    }

    pub fn raw_section(
        mut self,
        name: [u8; SECTION_NAME_LEN],
        section_type: u32,
        offset: u32,
        size: u32,
    ) -> Self {
        self.records
            .push(raw_section_record(name, section_type, offset, size));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let count = self
            .section_count
            .unwrap_or_else(|| u8::try_from(self.records.len()).unwrap_or(u8::MAX));

        let mut data = vec![self.magic];
        data.extend_from_slice(&self.header_size.to_le_bytes());
        data.extend_from_slice(&self.version.to_le_bytes());
        data.push(count);
        for record in &self.records {
            data.extend_from_slice(record);
        }
        data
    }
}
