//! Low-level byte stream parser for SF structure decoding.
//!
//! This module provides the [`crate::file::parser::Parser`] type, a cursor-based binary data
//! parser used by the header and section table stages. Every operation validates data
//! availability before touching the buffer, so truncated or hostile input surfaces as
//! [`crate::Error::OutOfBounds`] rather than a panic.
//!
//! # Key Components
//!
//! ## Navigation Methods
//! - [`crate::file::parser::Parser::seek`] - Move to specific position
//! - [`crate::file::parser::Parser::advance_by`] - Move forward by specified bytes
//! - [`crate::file::parser::Parser::pos`] - Get current position
//!
//! ## Data Access Methods
//! - [`crate::file::parser::Parser::read_le`] - Read primitive types (little-endian)
//! - [`crate::file::parser::Parser::read_bytes`] - Borrow a run of raw bytes
//! - [`crate::file::parser::Parser::read_fixed`] - Copy a fixed-width field
//!
//! # Usage Examples
//!
//! ```rust
//! use sfscope::Parser;
//!
//! let data = [b's', 0x00, 0x00, 0x32, 0x00, 0x02];
//! let mut parser = Parser::new(&data);
//!
//! assert_eq!(parser.read_le::<u8>()?, b's');
//! parser.advance_by(2)?;
//! assert_eq!(parser.read_le::<u16>()?, 50);
//! assert_eq!(parser.read_le::<u8>()?, 2);
//! assert_eq!(parser.remaining(), 0);
//! # Ok::<(), sfscope::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, SfIO},
    Result,
};

/// A generic binary data parser for reading SF structures.
///
/// `Parser` maintains an internal position cursor over a borrowed byte slice. It owns no
/// buffers of its own, so any number of parsers may run over the same data independently.
pub struct Parser<'a> {
    /// The binary data being parsed
    data: &'a [u8],
    /// Current position within the data buffer
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new [`crate::file::parser::Parser`] from a byte slice.
    ///
    /// # Arguments
    /// * `data` - The byte slice to read from
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Returns the length of the underlying data buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the parser has no data.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Move the current position to the specified index.
    ///
    /// # Arguments
    /// * `pos` - The position to move the cursor to
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if position is at or beyond the data length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfscope::Parser;
    /// let data = [0x01, 0x02, 0x03, 0x04];
    /// let mut parser = Parser::new(&data);
    ///
    /// parser.seek(2)?;
    /// assert_eq!(parser.pos(), 2);
    /// assert_eq!(parser.read_le::<u8>()?, 0x03);
    /// assert!(parser.seek(4).is_err());
    /// # Ok::<(), sfscope::Error>(())
    /// ```
    pub fn seek(&mut self, pos: usize) -> Result<()> {
        if pos >= self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = pos;
        Ok(())
    }

    /// Move the position forward by the specified number of bytes.
    ///
    /// # Arguments
    /// * `step` - Amount of bytes to advance
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if advancing by step would exceed the data length.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        let Some(end) = self.position.checked_add(step) else {
            return Err(out_of_bounds_error!());
        };

        if end > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position = end;
        Ok(())
    }

    /// Get the current position of the parser within the data buffer.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes left between the cursor and the end of the data.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.position)
    }

    /// Read a type `T` from the current position in little-endian format and advance the position.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if reading would exceed the data length.
    pub fn read_le<T: SfIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Borrow the next `length` bytes and advance the position past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `length` bytes remain.
    pub fn read_bytes(&mut self, length: usize) -> Result<&'a [u8]> {
        let start = self.position;
        self.advance_by(length)?;
        Ok(&self.data[start..self.position])
    }

    /// Copy the next `N` bytes into a fixed-size array and advance the position past them.
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `N` bytes remain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sfscope::Parser;
    /// let data = *b"name\0rest";
    /// let mut parser = Parser::new(&data);
    ///
    /// let field: [u8; 5] = parser.read_fixed()?;
    /// assert_eq!(&field, b"name\0");
    /// assert_eq!(parser.pos(), 5);
    /// # Ok::<(), sfscope::Error>(())
    /// ```
    pub fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N)?;
        let mut field = [0_u8; N];
        field.copy_from_slice(bytes);
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn sequential_reads() {
        #[rustfmt::skip]
        let data = [
            0x73,                   // u8
            0x10, 0x00,             // u16 = 16
            0x2A, 0x00, 0x00, 0x00, // u32 = 42
        ];
        let mut parser = Parser::new(&data);

        assert_eq!(parser.len(), 7);
        assert!(!parser.is_empty());
        assert_eq!(parser.read_le::<u8>().unwrap(), 0x73);
        assert_eq!(parser.read_le::<u16>().unwrap(), 16);
        assert_eq!(parser.read_le::<u32>().unwrap(), 42);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn seek_boundaries() {
        let data = [0_u8; 8];
        let mut parser = Parser::new(&data);

        assert!(parser.seek(7).is_ok());
        assert_eq!(parser.pos(), 7);
        assert!(matches!(parser.seek(8), Err(Error::OutOfBounds { .. })));
        assert_eq!(parser.pos(), 7);

        let mut empty = Parser::new(&[]);
        assert!(empty.is_empty());
        assert!(empty.seek(0).is_err());
    }

    #[test]
    fn advance_by_boundaries() {
        let data = [0_u8; 4];
        let mut parser = Parser::new(&data);

        assert!(parser.advance_by(4).is_ok());
        assert_eq!(parser.remaining(), 0);
        assert!(parser.advance_by(0).is_ok());
        assert!(matches!(
            parser.advance_by(1),
            Err(Error::OutOfBounds { .. })
        ));

        let mut parser = Parser::new(&data);
        parser.advance_by(1).unwrap();
        assert!(matches!(
            parser.advance_by(usize::MAX),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(parser.pos(), 1);
    }

    #[test]
    fn read_bytes_and_fixed() {
        let data = *b"abcdefgh";
        let mut parser = Parser::new(&data);

        assert_eq!(parser.read_bytes(3).unwrap(), b"abc");
        let fixed: [u8; 4] = parser.read_fixed().unwrap();
        assert_eq!(&fixed, b"defg");
        assert!(matches!(
            parser.read_fixed::<2>(),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(parser.pos(), 7);
    }

    #[test]
    fn short_read_fails() {
        let mut parser = Parser::new(&[0x01]);
        assert!(matches!(
            parser.read_le::<u16>(),
            Err(Error::OutOfBounds { .. })
        ));
        assert_eq!(parser.pos(), 0);
    }
}
