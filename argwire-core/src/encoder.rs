//! Encoding sessions.
//!
//! An [`Encoder`] owns the output buffer for one message. Values are appended
//! in call order through the dispatcher [`Encoder::add`]; the peer decodes
//! them in the same order with a [`crate::Decoder`].
//!
//! # Example
//! ```
//! use argwire_core::{Decoder, Encoder};
//!
//! let mut encoder = Encoder::new();
//! encoder.add(42u32)?;
//! encoder.add(&[1u16, 2, 3])?;
//! let bytes = encoder.finish();
//!
//! let mut decoder = Decoder::new(&bytes);
//! assert_eq!(decoder.next_u32()?, 42);
//! assert_eq!(decoder.next_array::<u16>()?, vec![1, 2, 3]);
//! decoder.finish()?;
//! # Ok::<(), argwire_core::Error>(())
//! ```

use crate::array::encode_array;
use crate::buffer::ByteBuffer;
use crate::error::{Error, Result};
use crate::record::{Serializable, encode_object_array, encode_object_array_checked};
use crate::scalar::Scalar;
use crate::value::{ScalarArray, ScalarValue, Value};
use std::any::Any;

/// Settings for an encoding session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Bytes reserved when the session starts.
    pub initial_capacity: usize,
    /// Ceiling on the encoded message size, if any.
    pub max_message_size: Option<usize>,
    /// Check each record's byte-length contract while encoding object arrays.
    pub verify_records: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_message_size: None,
            verify_records: cfg!(debug_assertions),
        }
    }
}

/// Builder for configuring and creating an encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderBuilder {
    config: EncoderConfig,
}

impl EncoderBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of bytes reserved up front.
    #[must_use]
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Sets the maximum encoded message size.
    #[must_use]
    pub fn max_message_size(mut self, size: usize) -> Self {
        self.config.max_message_size = Some(size);
        self
    }

    /// Enables or disables record length verification.
    #[must_use]
    pub fn verify_records(mut self, verify: bool) -> Self {
        self.config.verify_records = verify;
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Builds the encoder.
    #[must_use]
    pub fn build(self) -> Encoder {
        Encoder::with_config(self.config)
    }
}

/// Owned encoding session for one message.
#[derive(Debug, Clone)]
pub struct Encoder {
    buffer: ByteBuffer,
    config: EncoderConfig,
    values: usize,
    records_appended: bool,
}

impl Encoder {
    /// Creates an encoder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    /// Creates an encoder with the given settings.
    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            buffer: ByteBuffer::with_capacity(config.initial_capacity, config.max_message_size),
            config,
            values: 0,
            records_appended: false,
        }
    }

    /// Returns a builder for a configured encoder.
    #[must_use]
    pub fn builder() -> EncoderBuilder {
        EncoderBuilder::new()
    }

    /// Returns the session settings.
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Appends a value, routing it to the codec its shape selects.
    ///
    /// Scalars are written bare, scalar arrays with a single `u32` count, and
    /// record arrays as unprefixed concatenations. A failed call leaves the
    /// buffer unchanged.
    ///
    /// # Errors
    /// Returns [`Error::LengthOverflow`], [`Error::CapacityExceeded`],
    /// [`Error::RecordLengthMismatch`], or an error raised by a record.
    pub fn add<'v>(&mut self, value: impl Into<Value<'v>>) -> Result<()> {
        let value = value.into();
        self.warn_if_sealed(value.shape());
        let offset = self.buffer.len();

        match value {
            Value::Scalar(scalar) => self.put_scalar_value(scalar)?,
            Value::ScalarArray(array) => self.put_scalar_array(array)?,
            Value::ObjectArray(records) => {
                records.encode_records(&mut self.buffer, self.config.verify_records)?;
                self.records_appended = true;
            }
        }

        self.values += 1;
        tracing::trace!(
            "Appended {} ({} bytes) at offset {}",
            value.shape(),
            self.buffer.len() - offset,
            offset
        );
        Ok(())
    }

    /// Appends a value of a type only known at runtime.
    ///
    /// Recognizes the eight fixed-width integer types, plus `Vec` and boxed
    /// slices of them. Record arrays are not discoverable through type
    /// erasure; pass them to [`Encoder::add`] via [`Value::records`].
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedType`] for any other type, plus any error
    /// [`Encoder::add`] returns.
    pub fn add_any<T: Any>(&mut self, value: &T) -> Result<()> {
        let any = value as &dyn Any;

        macro_rules! try_shapes {
            ($($ty:ty),*) => {
                $(
                    if let Some(v) = any.downcast_ref::<$ty>() {
                        return self.add(*v);
                    }
                    if let Some(v) = any.downcast_ref::<Vec<$ty>>() {
                        return self.add(v.as_slice());
                    }
                    if let Some(v) = any.downcast_ref::<Box<[$ty]>>() {
                        return self.add(&**v);
                    }
                )*
            };
        }

        try_shapes!(u8, i8, u16, i16, u32, i32, u64, i64);

        Err(Error::UnsupportedType {
            type_name: std::any::type_name::<T>(),
        })
    }

    /// Appends one scalar.
    ///
    /// # Errors
    /// Returns [`Error::CapacityExceeded`] if the ceiling would be crossed.
    pub fn add_scalar<T: Scalar>(&mut self, value: T) -> Result<()> {
        self.warn_if_sealed("scalar");
        self.buffer.put_scalar(value)?;
        self.values += 1;
        Ok(())
    }

    /// Appends a length-prefixed scalar array.
    ///
    /// # Errors
    /// See [`encode_array`].
    pub fn add_array<T: Scalar>(&mut self, values: &[T]) -> Result<()> {
        self.warn_if_sealed("scalar-array");
        encode_array(values, &mut self.buffer)?;
        self.values += 1;
        Ok(())
    }

    /// Appends an object array of records.
    ///
    /// # Errors
    /// See [`encode_object_array`] and [`encode_object_array_checked`].
    pub fn add_records<T: Serializable + Default>(&mut self, records: &[T]) -> Result<()> {
        self.warn_if_sealed("object-array");
        if self.config.verify_records {
            encode_object_array_checked(records, &mut self.buffer)?;
        } else {
            encode_object_array(records, &mut self.buffer)?;
        }
        self.values += 1;
        self.records_appended = true;
        Ok(())
    }

    /// Returns the number of bytes encoded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if nothing has been encoded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the number of values appended.
    #[must_use]
    pub const fn value_count(&self) -> usize {
        self.values
    }

    /// Returns the encoded bytes so far.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_slice()
    }

    /// Starts a new session, keeping the allocation and settings.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.values = 0;
        self.records_appended = false;
    }

    /// Ends the session and returns the encoded message.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        tracing::debug!(
            "Encoder finished: {} values, {} bytes",
            self.values,
            self.buffer.len()
        );
        self.buffer.into_vec()
    }

    fn warn_if_sealed(&self, shape: &str) {
        if self.records_appended {
            tracing::warn!(
                "Appending {} after an object array at offset {}; the peer will decode it as records",
                shape,
                self.buffer.len()
            );
        }
    }

    fn put_scalar_value(&mut self, value: ScalarValue) -> Result<()> {
        match value {
            ScalarValue::U8(v) => self.buffer.put_scalar(v),
            ScalarValue::I8(v) => self.buffer.put_scalar(v),
            ScalarValue::U16(v) => self.buffer.put_scalar(v),
            ScalarValue::I16(v) => self.buffer.put_scalar(v),
            ScalarValue::U32(v) => self.buffer.put_scalar(v),
            ScalarValue::I32(v) => self.buffer.put_scalar(v),
            ScalarValue::U64(v) => self.buffer.put_scalar(v),
            ScalarValue::I64(v) => self.buffer.put_scalar(v),
        }
    }

    fn put_scalar_array(&mut self, array: ScalarArray<'_>) -> Result<()> {
        match array {
            ScalarArray::U8(v) => encode_array(v, &mut self.buffer),
            ScalarArray::I8(v) => encode_array(v, &mut self.buffer),
            ScalarArray::U16(v) => encode_array(v, &mut self.buffer),
            ScalarArray::I16(v) => encode_array(v, &mut self.buffer),
            ScalarArray::U32(v) => encode_array(v, &mut self.buffer),
            ScalarArray::I32(v) => encode_array(v, &mut self.buffer),
            ScalarArray::U64(v) => encode_array(v, &mut self.buffer),
            ScalarArray::I64(v) => encode_array(v, &mut self.buffer),
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
