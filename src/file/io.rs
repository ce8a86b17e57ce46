//! Low-level byte order and safe reading utilities for SF parsing.
//!
//! This module provides endian-aware, bounds-checked reading of fixed-width primitives from
//! byte buffers. Every multi-byte integer in an SF file is stored in the byte order of the
//! little-endian host that produced it, so decoding is little-endian regardless of the
//! platform this crate runs on.
//!
//! # Key Components
//!
//! - [`crate::file::io::SfIO`] - Trait defining the byte conversion for each field width
//! - [`crate::file::io::read_le_at`] - Read a value at an offset and advance the offset
//!
//! # Examples
//!
//! ```rust,ignore
//! use sfscope::file::io::read_le_at;
//!
//! let data = [0x32, 0x00, 0x02];
//! let mut offset = 0;
//! let version: u16 = read_le_at(&data, &mut offset)?;
//! assert_eq!(version, 50);
//!
//! let count: u8 = read_le_at(&data, &mut offset)?;
//! assert_eq!(count, 2);
//! assert_eq!(offset, 3);
//! # Ok::<(), sfscope::Error>(())
//! ```

use crate::Result;

/// Trait for implementing type-specific safe binary data reading operations.
///
/// Each implementation defines a `Bytes` associated type that represents the fixed-size
/// byte array required for that particular type (e.g., `[u8; 4]` for `u32`).
pub trait SfIO: Sized {
    /// Associated type representing the byte array type for this numeric type.
    type Bytes: Sized + for<'a> TryFrom<&'a [u8]>;

    /// Read T from a byte buffer in little-endian
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_sf_io {
    ($($ty:ty),*) => {
        $(
            impl SfIO for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }
            }
        )*
    };
}

// The SF layout only stores u8, u16 and u32 fields
impl_sf_io!(u8, u16, u32);

/// Safely reads a value of type `T` in little-endian byte order from `data` at `offset`.
///
/// The offset is advanced by the size of `T` on success and left untouched on failure.
///
/// # Errors
/// Returns [`crate::Error::OutOfBounds`] if there are insufficient bytes.
pub fn read_le_at<T: SfIO>(data: &[u8], offset: &mut usize) -> Result<T> {
    let type_len = std::mem::size_of::<T>();
    let Some(end) = offset.checked_add(type_len) else {
        return Err(out_of_bounds_error!());
    };

    if end > data.len() {
        return Err(out_of_bounds_error!());
    }

    let Ok(read) = data[*offset..end].try_into() else {
        return Err(out_of_bounds_error!());
    };

    *offset = end;

    Ok(T::from_le_bytes(read))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn read_le_at_field_widths() {
        for start in [0_usize, 4] {
            let mut offset = start;
            let value = read_le_at::<u8>(&TEST_BUFFER, &mut offset).unwrap();
            assert_eq!(usize::from(value), start + 1);
            assert_eq!(offset, start + 1);
        }

        let mut offset = 0;
        let value = read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(value, 0x0201);

        let mut offset = 0;
        let value = read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(value, 0x0403_0201);
    }

    #[test]
    fn read_le_at_advances() {
        let mut offset = 0;
        let version = read_le_at::<u16>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(version, 0x0201);
        assert_eq!(offset, 2);

        let code = read_le_at::<u32>(&TEST_BUFFER, &mut offset).unwrap();
        assert_eq!(code, 0x0605_0403);
        assert_eq!(offset, 6);
    }

    #[test]
    fn read_le_at_out_of_bounds_keeps_offset() {
        let mut offset = 6;
        let result = read_le_at::<u32>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(offset, 6);

        let mut offset = usize::MAX;
        let result = read_le_at::<u8>(&TEST_BUFFER, &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn read_le_at_empty() {
        let mut offset = 0;
        let result = read_le_at::<u8>(&[], &mut offset);
        assert!(matches!(result, Err(Error::OutOfBounds { .. })));
        assert_eq!(offset, 0);
    }
}
