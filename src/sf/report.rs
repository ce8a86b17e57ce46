//! Line-oriented rendering of a parse outcome.
//!
//! A successful parse renders as
//!
//! ```text
//! SUCCESS
//! version=<version>
//! nr_sections=<count>
//! section1: <name> <type> <size>
//! ...
//! ```
//!
//! and a failed one as `ERROR` followed by a kind-specific message. [`render`] is the only
//! place that picks between the two, so success and error lines never mix.

use std::fmt;

use crate::{
    sf::{
        header::FileHeader,
        section::{SectionName, SectionType},
        table::SectionTable,
    },
    Error, Result,
};

/// First line of every successful report.
pub const SUCCESS_TOKEN: &str = "SUCCESS";

/// First line of every failure report.
pub const ERROR_TOKEN: &str = "ERROR";

/// One reported section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRecord {
    /// 1-based position of the section in the table
    pub index: usize,
    /// Section name
    pub name: SectionName,
    /// Section type
    pub section_type: SectionType,
    /// Declared section size in bytes
    pub size: u32,
}

impl fmt::Display for SectionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "section{}: {} {} {}",
            self.index, self.name, self.section_type, self.size
        )
    }
}

/// The result of a successful parse: the validated header and every section, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfReport {
    /// Validated file header
    pub header: FileHeader,
    /// One record per section, ordered by index
    pub sections: Vec<SectionRecord>,
}

impl SfReport {
    pub(crate) fn new(header: FileHeader, table: &SectionTable) -> Self {
        let sections = table
            .iter()
            .enumerate()
            .map(|(i, section)| SectionRecord {
                index: i + 1,
                name: section.name,
                section_type: section.section_type,
                size: section.size,
            })
            .collect();

        SfReport { header, sections }
    }

    /// Format version from the header.
    #[must_use]
    pub fn version(&self) -> u16 {
        self.header.version
    }

    /// Number of sections from the header.
    #[must_use]
    pub fn section_count(&self) -> u8 {
        self.header.section_count
    }
}

impl fmt::Display for SfReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUCCESS_TOKEN}")?;
        writeln!(f, "version={}", self.header.version)?;
        writeln!(f, "nr_sections={}", self.header.section_count)?;
        for section in &self.sections {
            writeln!(f, "{section}")?;
        }
        Ok(())
    }
}

/// Display adapter rendering an [`Error`] as a failure report.
pub struct ErrorReport<'a>(pub &'a Error);

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{ERROR_TOKEN}")?;
        writeln!(f, "{}", self.0)
    }
}

/// Render a parse outcome as the complete text a caller should print.
///
/// # Examples
///
/// ```rust
/// use sfscope::{render, SfFile};
///
/// let output = render(&SfFile::from_mem(b"x".to_vec()));
/// assert_eq!(output, "ERROR\nwrong magic\n");
/// ```
#[must_use]
pub fn render(outcome: &Result<SfReport>) -> String {
    match outcome {
        Ok(report) => report.to_string(),
        Err(error) => ErrorReport(error).to_string(),
    }
}
