//! Append-only byte buffer for encoding sessions.
//!
//! [`ByteBuffer`] collects framed output in call order. Appending is the only
//! mutator while a session is running; [`ByteBuffer::clear`] starts a new one.

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// Owned, growable byte sequence with an optional size ceiling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
    limit: Option<usize>,
}

impl ByteBuffer {
    /// Creates an empty, unbounded buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            limit: None,
        }
    }

    /// Creates an empty buffer with reserved capacity and an optional ceiling.
    ///
    /// # Arguments
    /// * `capacity` - Bytes to reserve up front
    /// * `limit` - Maximum length the buffer may reach, if any
    #[must_use]
    pub fn with_capacity(capacity: usize, limit: Option<usize>) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            limit,
        }
    }

    /// Returns the buffer contents.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of bytes written.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the configured ceiling, if any.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Checks that `additional` more bytes fit under the ceiling.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] if the ceiling would be crossed.
    pub fn ensure_room(&self, additional: usize) -> Result<()> {
        let required = self.data.len().saturating_add(additional);
        match self.limit {
            Some(limit) if required > limit => Err(Error::CapacityExceeded { required, limit }),
            _ => Ok(()),
        }
    }

    /// Appends raw bytes.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] if the ceiling would be crossed.
    pub fn put_bytes(&mut self, src: &[u8]) -> Result<()> {
        self.ensure_room(src.len())?;
        self.data.extend_from_slice(src);
        Ok(())
    }

    /// Appends a scalar in its fixed-width encoding.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] if the ceiling would be crossed.
    pub fn put_scalar<T: Scalar>(&mut self, value: T) -> Result<()> {
        self.ensure_room(T::WIDTH)?;
        value.write_le(&mut self.data);
        Ok(())
    }

    /// Discards the contents, keeping the allocation for the next session.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the buffer and returns the encoded bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
