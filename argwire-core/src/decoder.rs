//! Decoding sessions.
//!
//! A [`Decoder`] borrows one encoded message and owns the single read cursor
//! for it. Every `next_*` call starts at the cursor and advances it, so calls
//! must mirror the producer's encode order exactly.

use crate::array::decode_array;
use crate::cursor::ReadCursor;
use crate::error::{Error, Result};
use crate::record::{Serializable, decode_object_array};
use crate::scalar::Scalar;

/// Decoding session over a borrowed message.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    cursor: ReadCursor,
}

impl<'a> Decoder<'a> {
    /// Wraps an encoded message with the cursor at offset 0.
    ///
    /// # Arguments
    /// * `data` - Bytes produced by an [`crate::Encoder`]
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            cursor: ReadCursor::new(),
        }
    }

    /// Returns the whole message.
    #[must_use]
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the cursor offset.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cursor.remaining(self.data)
    }

    /// Returns true if the cursor has reached the end of the message.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Reads the next scalar.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if fewer than `T::WIDTH` bytes remain.
    pub fn next_scalar<T: Scalar>(&mut self) -> Result<T> {
        let offset = self.position();
        let value = self.cursor.read_scalar::<T>(self.data)?;
        tracing::trace!("Decoded {} at offset {}", T::KIND, offset);
        Ok(value)
    }

    /// Reads the next `u32`.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if fewer than 4 bytes remain.
    pub fn next_u32(&mut self) -> Result<u32> {
        self.next_scalar::<u32>()
    }

    /// Reads the next length-prefixed scalar array.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if the count or payload is truncated.
    pub fn next_array<T: Scalar>(&mut self) -> Result<Vec<T>> {
        let offset = self.position();
        let values = decode_array::<T>(&mut self.cursor, self.data)?;
        tracing::trace!(
            "Decoded {}-array of {} elements at offset {}",
            T::KIND,
            values.len(),
            offset
        );
        Ok(values)
    }

    /// Reads records from the cursor to the end of the message.
    ///
    /// # Errors
    /// Returns [`Error::MisalignedDecode`] if a record breaks the byte-length
    /// contract, or any error a record's `deserialize` raises.
    pub fn next_object_array<T: Serializable + Default>(&mut self) -> Result<Vec<T>> {
        let offset = self.position();
        let records = decode_object_array::<T>(&mut self.cursor, self.data)?;
        tracing::trace!(
            "Decoded object-array of {} records at offset {}",
            records.len(),
            offset
        );
        Ok(records)
    }

    /// Ends the session, checking that the whole message was consumed.
    ///
    /// # Errors
    /// Returns [`Error::TrailingBytes`] if unread bytes remain.
    pub fn finish(self) -> Result<()> {
        let remaining = self.remaining();
        if remaining > 0 {
            return Err(Error::TrailingBytes { remaining });
        }
        tracing::debug!("Decoder finished: {} bytes consumed", self.data.len());
        Ok(())
    }
}
