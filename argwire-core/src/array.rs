//! Length-prefixed arrays of fixed-width scalars.
//!
//! # Wire Format
//! ```text
//! +0: count    (u32, 4 bytes)
//! +4: elements (count * size_of::<T>() bytes, no padding)
//! ```

use crate::buffer::ByteBuffer;
use crate::cursor::ReadCursor;
use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// Size of the array count field in bytes.
pub const LENGTH_FIELD_SIZE: usize = 4;

/// Returns the encoded size of an array of `len` elements of `T`.
///
/// # Errors
/// Returns [`Error::LengthOverflow`] if `len` does not fit the count field.
pub fn encoded_array_len<T: Scalar>(len: usize) -> Result<usize> {
    if u32::try_from(len).is_err() {
        return Err(Error::LengthOverflow { len });
    }
    len.checked_mul(T::WIDTH)
        .and_then(|payload| payload.checked_add(LENGTH_FIELD_SIZE))
        .ok_or(Error::LengthOverflow { len })
}

/// Appends `values` to `out` as a length-prefixed array.
///
/// Nothing is written if the call fails.
///
/// # Errors
/// Returns [`Error::LengthOverflow`] if there are more than `u32::MAX`
/// elements, or [`Error::CapacityExceeded`] if `out` has a ceiling that the
/// array would cross.
pub fn encode_array<T: Scalar>(values: &[T], out: &mut ByteBuffer) -> Result<()> {
    let total = encoded_array_len::<T>(values.len())?;
    out.ensure_room(total)?;
    out.put_scalar(values.len() as u32)?;
    for &value in values {
        out.put_scalar(value)?;
    }
    Ok(())
}

/// Encodes `values` into a fresh byte vector.
///
/// # Errors
/// Returns [`Error::LengthOverflow`] if there are more than `u32::MAX` elements.
pub fn encode_array_to_vec<T: Scalar>(values: &[T]) -> Result<Vec<u8>> {
    let mut out = ByteBuffer::with_capacity(encoded_array_len::<T>(values.len())?, None);
    encode_array(values, &mut out)?;
    Ok(out.into_vec())
}

/// Decodes a length-prefixed array at the cursor and advances past it.
///
/// The cursor only moves if the whole array is present.
///
/// # Errors
/// Returns [`Error::MalformedInput`] if the count field or the payload runs
/// past the end of `data`.
pub fn decode_array<T: Scalar>(cursor: &mut ReadCursor, data: &[u8]) -> Result<Vec<T>> {
    let mut local = *cursor;
    let count = local.read_scalar::<u32>(data)? as usize;
    if count == 0 {
        *cursor = local;
        return Ok(Vec::new());
    }

    let payload_len = count.checked_mul(T::WIDTH).ok_or(Error::MalformedInput {
        offset: local.position(),
        required: usize::MAX,
        available: local.remaining(data),
    })?;
    let payload = local.take(data, payload_len)?;
    let values = payload.chunks_exact(T::WIDTH).map(T::read_le).collect();

    *cursor = local;
    Ok(values)
}
