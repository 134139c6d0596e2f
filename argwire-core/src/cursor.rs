//! Shared read cursor for decode sessions.

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// Offset into a byte sequence marking where the next decode begins.
///
/// The position never decreases. A failed read leaves it where it was.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadCursor {
    position: usize,
}

impl ReadCursor {
    /// Creates a cursor at offset 0.
    #[must_use]
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Creates a cursor at an arbitrary offset.
    ///
    /// # Arguments
    /// * `position` - Offset the next read starts from
    #[must_use]
    pub const fn at(position: usize) -> Self {
        Self { position }
    }

    /// Returns the current offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes left in `data` after the cursor.
    #[must_use]
    pub fn remaining(&self, data: &[u8]) -> usize {
        data.len().saturating_sub(self.position)
    }

    /// Returns the next `len` bytes without advancing.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if fewer than `len` bytes remain.
    pub fn peek<'a>(&self, data: &'a [u8], len: usize) -> Result<&'a [u8]> {
        let available = self.remaining(data);
        if len > available || self.position > data.len() {
            return Err(Error::MalformedInput {
                offset: self.position,
                required: len,
                available,
            });
        }
        Ok(&data[self.position..self.position + len])
    }

    /// Returns the next `len` bytes and advances past them.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if fewer than `len` bytes remain.
    pub fn take<'a>(&mut self, data: &'a [u8], len: usize) -> Result<&'a [u8]> {
        let bytes = self.peek(data, len)?;
        self.position += len;
        Ok(bytes)
    }

    /// Reads one scalar and advances past it.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if fewer than `T::WIDTH` bytes remain.
    pub fn read_scalar<T: Scalar>(&mut self, data: &[u8]) -> Result<T> {
        let bytes = self.take(data, T::WIDTH)?;
        Ok(T::read_le(bytes))
    }

    /// Moves the cursor forward to `position`.
    ///
    /// # Errors
    /// Returns [`Error::MisalignedDecode`] if `position` is behind the cursor
    /// or past the end of `data`.
    pub fn advance_to(&mut self, data: &[u8], position: usize) -> Result<()> {
        if position < self.position || position > data.len() {
            return Err(Error::MisalignedDecode {
                start: self.position,
                end: position,
                limit: data.len(),
            });
        }
        self.position = position;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_advances() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = ReadCursor::new();
        assert_eq!(cursor.take(&data, 2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(&data), 3);
    }

    #[test]
    fn test_take_short_leaves_position() {
        let data = [1u8, 2, 3];
        let mut cursor = ReadCursor::new();
        cursor.take(&data, 2).unwrap();

        let result = cursor.take(&data, 4);
        assert_eq!(
            result,
            Err(Error::MalformedInput {
                offset: 2,
                required: 4,
                available: 1,
            })
        );
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_read_scalar() {
        let data = [0xEF, 0xBE, 0xAD, 0xDE, 0x01];
        let mut cursor = ReadCursor::new();
        assert_eq!(cursor.read_scalar::<u32>(&data).unwrap(), 0xDEAD_BEEF);
        assert_eq!(cursor.read_scalar::<u8>(&data).unwrap(), 1);
        assert!(cursor.read_scalar::<u8>(&data).is_err());
    }

    #[test]
    fn test_cursor_past_end_reports_malformed() {
        let data = [0u8; 2];
        let cursor = ReadCursor::at(5);
        assert!(matches!(
            cursor.peek(&data, 0),
            Err(Error::MalformedInput { offset: 5, .. })
        ));
    }

    #[test]
    fn test_peek_does_not_advance() {
        let data = [9u8, 8];
        let cursor = ReadCursor::new();
        assert_eq!(cursor.peek(&data, 1).unwrap(), &[9]);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_to_rejects_backwards_and_overrun() {
        let data = [0u8; 8];
        let mut cursor = ReadCursor::new();
        cursor.advance_to(&data, 4).unwrap();
        assert!(matches!(
            cursor.advance_to(&data, 2),
            Err(Error::MisalignedDecode { .. })
        ));
        assert!(matches!(
            cursor.advance_to(&data, 9),
            Err(Error::MisalignedDecode { .. })
        ));
        assert_eq!(cursor.position(), 4);
    }
}
