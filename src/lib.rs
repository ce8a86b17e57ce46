// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]
//#![deny(unsafe_code)]
// - 'file/physical.rs' uses mmap to map a file into memory

//! # sfscope
//!
//! A strict, validating reader for the SF binary container format: a one-byte magic, a
//! version field, a section count and a table of fixed-size section records. `sfscope`
//! checks every structural rule before it reports anything, and reports each failure as
//! exactly one classified error.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sfscope::prelude::*;
//!
//! let report = SfFile::from_path("sample.sf")?;
//! println!("version {}, {} sections", report.version(), report.section_count());
//! # Ok::<(), sfscope::Error>(())
//! ```
//!
//! ### Printing the standard report
//!
//! ```rust,no_run
//! use sfscope::{render, SfFile};
//!
//! print!("{}", render(&SfFile::from_path("sample.sf")));
//! ```
//!
//! ## Architecture
//!
//! - [`file`] - Byte sources (memory-mapped files, memory buffers) and the [`Parser`]
//! - [`sf`] - The SF format: header validation, section table pre-scan, section reporting
//! - [`Error`] and [`Result`] - Classified failures
//!
//! ### Validation pipeline
//!
//! 1. **Header** - magic `'s'`, version in `42..=101`, section count in `2..=20`
//! 2. **Pre-scan** - every section type code must be one of `23`, `60`, `88`
//! 3. **Report** - every section is decoded in file order
//!
//! A stage runs only after the previous one has accepted the input, and the pre-scan covers
//! the whole table before the first section is reported. Output is therefore all-or-nothing.
//!
//! ## Thread Safety
//!
//! Parsing holds no global state. Every [`SfFile`] call owns its source and cursor, so
//! independent parses may run in parallel.

#[macro_use]
pub(crate) mod error;

/// Byte sources and low-level reading.
pub mod file;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust,no_run
/// use sfscope::prelude::*;
///
/// let report = SfFile::from_path("sample.sf")?;
/// let first: &SectionRecord = &report.sections[0];
/// println!("{first}");
/// # Ok::<(), sfscope::Error>(())
/// ```
pub mod prelude;

/// SF format definitions, validation stages and reporting.
pub mod sf;

/// `sfscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `sfscope` Error type
///
/// # Example
///
/// ```rust,no_run
/// use sfscope::{Error, SfFile};
///
/// match SfFile::from_path("sample.sf") {
///     Ok(report) => println!("{} sections", report.sections.len()),
///     Err(Error::BadSectionType) => println!("unsupported section type"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::{Error, ErrorKind};

/// Main entry point for parsing SF files.
///
/// See [`sf::SfFile`] for details.
pub use sf::SfFile;

/// Parse results and their line-oriented rendering.
pub use sf::report::{render, ErrorReport, SectionRecord, SfReport};

/// Decoded SF structures.
pub use sf::{
    header::FileHeader,
    section::{SectionHeader, SectionName, SectionType},
    table::SectionTable,
};

/// Provides access to low-level file and memory parsing utilities.
///
/// # Example
///
/// ```rust
/// use sfscope::Parser;
/// let data = [0x32, 0x00];
/// let mut parser = Parser::new(&data);
/// assert_eq!(parser.read_le::<u16>()?, 50);
/// # Ok::<(), sfscope::Error>(())
/// ```
pub use file::{parser::Parser, File};
