//! # sfscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! sfscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all sfscope operations
pub use crate::{Error, ErrorKind};

/// The result type used throughout sfscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Main entry point for SF parsing
pub use crate::SfFile;

/// Low-level file parsing utilities
pub use crate::{File, Parser};

// ================================================================================================
// SF Structures and Reports
// ================================================================================================

/// Decoded header and section table
pub use crate::{FileHeader, SectionHeader, SectionName, SectionTable, SectionType};

/// Parse results and rendering
pub use crate::{render, ErrorReport, SectionRecord, SfReport};

/// Format constants
pub use crate::sf::{
    HEADER_SIZE, MAGIC, MAX_SECTIONS, MAX_VERSION, MIN_SECTIONS, MIN_VERSION, SECTION_HEADER_SIZE,
    SECTION_NAME_LEN,
};
