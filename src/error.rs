use strum::{EnumCount, EnumIter};
use thiserror::Error;

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds {
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure of the parse pipeline is terminal and reported exactly once. Each pipeline
/// stage owns one failure kind and folds truncated input into that kind, so a caller only
/// ever observes one of the five classified variants below. [`Error::OutOfBounds`] is the
/// low-level reader failure that the stages translate; it does not escape
/// [`crate::SfFile`].
///
/// # Error Categories
///
/// ## Source Errors
/// - [`Error::InvalidPath`] - The file could not be opened or mapped
///
/// ## Header Errors
/// - [`Error::BadMagic`] - First byte is not the SF sentinel
/// - [`Error::BadVersion`] - Version missing or outside the accepted range
/// - [`Error::BadSectionCount`] - Section count missing or outside the accepted range
///
/// ## Section Table Errors
/// - [`Error::BadSectionType`] - A section type is not whitelisted, or the table is truncated
///
/// # Examples
///
/// ```rust,no_run
/// use sfscope::{Error, SfFile};
///
/// match SfFile::from_path("sample.sf") {
///     Ok(report) => print!("{report}"),
///     Err(Error::InvalidPath(io_err)) => eprintln!("cannot open: {io_err}"),
///     Err(e) => eprintln!("rejected: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The source could not be opened or read at all.
    ///
    /// Wraps the underlying I/O error from opening or memory-mapping the file.
    #[error("Invalid file")]
    InvalidPath(#[source] std::io::Error),

    /// The first byte is missing or does not equal the `'s'` sentinel.
    #[error("wrong magic")]
    BadMagic,

    /// The version field is missing, truncated, or outside the accepted range.
    #[error("wrong version")]
    BadVersion,

    /// The section count is missing, truncated, or outside the accepted range.
    #[error("wrong sect_nr")]
    BadSectionCount,

    /// A section type is not part of the whitelist, or a field of the section
    /// table was truncated.
    #[error("wrong sect_types")]
    BadSectionType,

    /// An out of bound access was attempted while reading the source.
    ///
    /// Raised by the [`crate::Parser`] primitives. The pipeline stages reclassify it
    /// before it reaches a caller.
    ///
    /// # Fields
    ///
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Out of Bound read would have occurred! - {file}:{line}")]
    OutOfBounds {
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },
}

/// Classification of an [`Error`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount)]
pub enum ErrorKind {
    /// See [`Error::InvalidPath`]
    InvalidPath,
    /// See [`Error::BadMagic`]
    BadMagic,
    /// See [`Error::BadVersion`]
    BadVersion,
    /// See [`Error::BadSectionCount`]
    BadSectionCount,
    /// See [`Error::BadSectionType`]
    BadSectionType,
    /// See [`Error::OutOfBounds`]
    OutOfBounds,
}

impl Error {
    /// Returns the [`ErrorKind`] of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPath(_) => ErrorKind::InvalidPath,
            Error::BadMagic => ErrorKind::BadMagic,
            Error::BadVersion => ErrorKind::BadVersion,
            Error::BadSectionCount => ErrorKind::BadSectionCount,
            Error::BadSectionType => ErrorKind::BadSectionType,
            Error::OutOfBounds { .. } => ErrorKind::OutOfBounds,
        }
    }

    /// Replaces a low-level [`Error::OutOfBounds`] with the stage-specific `kind`,
    /// passing every other error through unchanged.
    pub(crate) fn truncated_as(self, kind: Error) -> Error {
        match self {
            Error::OutOfBounds { .. } => kind,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::{EnumCount, IntoEnumIterator};

    use super::*;

    #[test]
    fn messages_are_unique_per_kind() {
        let errors = [
            Error::InvalidPath(std::io::Error::from(std::io::ErrorKind::NotFound)),
            Error::BadMagic,
            Error::BadVersion,
            Error::BadSectionCount,
            Error::BadSectionType,
        ];

        let messages: HashSet<String> = errors.iter().map(ToString::to_string).collect();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn kind_covers_every_variant() {
        assert_eq!(ErrorKind::COUNT, ErrorKind::iter().count());
        assert_eq!(Error::BadMagic.kind(), ErrorKind::BadMagic);
        assert_eq!(out_of_bounds_error!().kind(), ErrorKind::OutOfBounds);
        assert_eq!(
            Error::InvalidPath(std::io::Error::from(std::io::ErrorKind::PermissionDenied)).kind(),
            ErrorKind::InvalidPath
        );
    }

    #[test]
    fn truncation_is_reclassified() {
        let err = out_of_bounds_error!().truncated_as(Error::BadVersion);
        assert!(matches!(err, Error::BadVersion));

        let err = Error::BadMagic.truncated_as(Error::BadVersion);
        assert!(matches!(err, Error::BadMagic));
    }
}
