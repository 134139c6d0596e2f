//! Self-describing records and the object-array codec.
//!
//! A record type owns its byte layout through [`Serializable`]. An object
//! array is the back-to-back concatenation of its records' encodings with no
//! count and no separators, so it always runs to the end of the message.

use crate::array::{decode_array, encode_array};
use crate::buffer::ByteBuffer;
use crate::cursor::ReadCursor;
use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// Capability of a value to write its own encoding and rebuild itself from one.
///
/// # Contract
/// `deserialize` must consume exactly the bytes `serialize_into` produced.
/// Object arrays have no framing of their own, so a record that reads a
/// different amount desynchronizes every record after it.
///
/// # Example
/// ```
/// use argwire_core::{Result, Serializable};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Serializable for Point {
///     fn serialize_into(&self, out: &mut Vec<u8>) -> Result<()> {
///         self.x.serialize_into(out)?;
///         self.y.serialize_into(out)
///     }
///
///     fn deserialize(&mut self, data: &[u8], offset: usize) -> Result<usize> {
///         let offset = self.x.deserialize(data, offset)?;
///         self.y.deserialize(data, offset)
///     }
/// }
///
/// let bytes = Point { x: 1, y: -1 }.serialize().unwrap();
/// let mut decoded = Point::default();
/// assert_eq!(decoded.deserialize(&bytes, 0).unwrap(), 8);
/// assert_eq!(decoded, Point { x: 1, y: -1 });
/// ```
pub trait Serializable {
    /// Appends this value's encoding to `out`.
    ///
    /// # Errors
    /// Returns an error if a field cannot be framed, e.g. an oversized array.
    fn serialize_into(&self, out: &mut Vec<u8>) -> Result<()>;

    /// Rebuilds this value in place from `data[offset..]`.
    ///
    /// # Returns
    /// The offset immediately past this value's encoding.
    ///
    /// # Errors
    /// Returns [`Error::MalformedInput`] if `data` ends before the value does.
    fn deserialize(&mut self, data: &[u8], offset: usize) -> Result<usize>;

    /// Returns this value's encoding as a fresh vector.
    ///
    /// # Errors
    /// Propagates errors from [`Serializable::serialize_into`].
    fn serialize(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.serialize_into(&mut out)?;
        Ok(out)
    }
}

macro_rules! impl_scalar_record {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serializable for $ty {
                #[inline]
                fn serialize_into(&self, out: &mut Vec<u8>) -> Result<()> {
                    Scalar::write_le(*self, out);
                    Ok(())
                }

                #[inline]
                fn deserialize(&mut self, data: &[u8], offset: usize) -> Result<usize> {
                    let mut cursor = ReadCursor::at(offset);
                    *self = cursor.read_scalar::<$ty>(data)?;
                    Ok(cursor.position())
                }
            }
        )*
    };
}

impl_scalar_record!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Scalar vectors nest inside records using the length-prefixed array layout.
impl<T: Scalar> Serializable for Vec<T> {
    fn serialize_into(&self, out: &mut Vec<u8>) -> Result<()> {
        let mut framed = ByteBuffer::new();
        encode_array(self, &mut framed)?;
        out.extend_from_slice(framed.as_slice());
        Ok(())
    }

    fn deserialize(&mut self, data: &[u8], offset: usize) -> Result<usize> {
        let mut cursor = ReadCursor::at(offset);
        *self = decode_array::<T>(&mut cursor, data)?;
        Ok(cursor.position())
    }
}

/// Type-erased view over a sequence of records, used by the dispatcher.
///
/// Implemented for vectors, arrays, boxed slices and slice references of any
/// `Serializable + Default` type.
pub trait RecordArray {
    /// Returns the number of records.
    fn record_count(&self) -> usize;

    /// Appends every record to `out`, optionally checking each record's
    /// byte-length contract first.
    ///
    /// # Errors
    /// See [`encode_object_array`] and [`encode_object_array_checked`].
    fn encode_records(&self, out: &mut ByteBuffer, verify: bool) -> Result<()>;
}

fn encode_slice<T: Serializable + Default>(
    records: &[T],
    out: &mut ByteBuffer,
    verify: bool,
) -> Result<()> {
    if verify {
        encode_object_array_checked(records, out)
    } else {
        encode_object_array(records, out)
    }
}

impl<T: Serializable + Default> RecordArray for Vec<T> {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn encode_records(&self, out: &mut ByteBuffer, verify: bool) -> Result<()> {
        encode_slice(self, out, verify)
    }
}

impl<T: Serializable + Default, const N: usize> RecordArray for [T; N] {
    fn record_count(&self) -> usize {
        N
    }

    fn encode_records(&self, out: &mut ByteBuffer, verify: bool) -> Result<()> {
        encode_slice(self, out, verify)
    }
}

impl<T: Serializable + Default> RecordArray for Box<[T]> {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn encode_records(&self, out: &mut ByteBuffer, verify: bool) -> Result<()> {
        encode_slice(self, out, verify)
    }
}

impl<T: Serializable + Default> RecordArray for &[T] {
    fn record_count(&self) -> usize {
        self.len()
    }

    fn encode_records(&self, out: &mut ByteBuffer, verify: bool) -> Result<()> {
        encode_slice(self, out, verify)
    }
}

/// Appends the concatenated encodings of `records` to `out`.
///
/// Nothing is written if the call fails.
///
/// # Errors
/// Returns [`Error::EmptyRecord`] for a record that encodes to zero bytes,
/// propagates record serialization errors, or returns
/// [`Error::CapacityExceeded`] if `out` has a ceiling the records would cross.
pub fn encode_object_array<T: Serializable>(records: &[T], out: &mut ByteBuffer) -> Result<()> {
    let mut scratch = Vec::new();
    for (index, record) in records.iter().enumerate() {
        stage_record(record, index, &mut scratch)?;
    }
    out.put_bytes(&scratch)
}

/// Like [`encode_object_array`], but decodes every fresh encoding into a
/// default instance and checks that it consumes exactly what was produced.
///
/// # Errors
/// Returns [`Error::RecordLengthMismatch`] for a record that consumes a
/// different number of bytes, plus any error [`encode_object_array`] returns.
pub fn encode_object_array_checked<T: Serializable + Default>(
    records: &[T],
    out: &mut ByteBuffer,
) -> Result<()> {
    let mut scratch = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let start = scratch.len();
        let produced = stage_record(record, index, &mut scratch)?;

        let mut probe = T::default();
        let consumed = probe.deserialize(&scratch[start..], 0)?;
        if consumed != produced {
            return Err(Error::RecordLengthMismatch { produced, consumed });
        }
    }
    out.put_bytes(&scratch)
}

/// Serializes one record onto `scratch` and returns its encoded width.
fn stage_record<T: Serializable>(record: &T, index: usize, scratch: &mut Vec<u8>) -> Result<usize> {
    let start = scratch.len();
    record.serialize_into(scratch)?;
    match scratch.len() - start {
        0 => Err(Error::EmptyRecord { index }),
        produced => Ok(produced),
    }
}

/// Decodes records from the cursor to the end of `data`.
///
/// The element count is discovered by exhaustion. On success the cursor sits
/// at `data.len()`; on failure it is left where it was.
///
/// # Errors
/// Returns [`Error::MisalignedDecode`] if a record reports an end offset that
/// does not move forward or runs past `data`, and propagates any error from
/// the record's own `deserialize`.
pub fn decode_object_array<T: Serializable + Default>(
    cursor: &mut ReadCursor,
    data: &[u8],
) -> Result<Vec<T>> {
    let mut local = *cursor;
    let mut records = Vec::new();

    while local.position() < data.len() {
        let start = local.position();
        let mut record = T::default();
        let end = record.deserialize(data, start)?;
        if end <= start {
            return Err(Error::MisalignedDecode {
                start,
                end,
                limit: data.len(),
            });
        }
        local.advance_to(data, end)?;
        records.push(record);
    }

    *cursor = local;
    Ok(records)
}

/// Decodes a whole byte span as one object array, starting at offset 0.
///
/// # Errors
/// See [`decode_object_array`].
pub fn decode_object_array_from<T: Serializable + Default>(data: &[u8]) -> Result<Vec<T>> {
    decode_object_array(&mut ReadCursor::new(), data)
}
