//! Fixed-width integer codec.
//!
//! Every scalar is written as exactly `size_of::<T>()` bytes in little-endian
//! order with no tag. This module provides:
//! - [`ScalarKind`] describing the supported integer types
//! - [`Scalar`] implemented for `u8`..`i64`
//! - [`encode_scalar`] / [`decode_scalar`] as the standalone codec pair

use crate::error::{Error, Result};

/// Fixed-width integer kinds understood by the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    I64,
}

impl ScalarKind {
    /// Returns the encoded width in bytes.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::U64 | Self::I64 => 8,
        }
    }

    /// Returns the Rust type name for this kind.
    #[must_use]
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
        }
    }

    /// Returns true if this is a signed integer kind.
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.rust_type())
    }
}

/// A fixed-width integer that can be written to and read from the wire.
pub trait Scalar: Copy + Sized + 'static {
    /// Kind tag used in diagnostics.
    const KIND: ScalarKind;

    /// Encoded width in bytes.
    const WIDTH: usize = Self::KIND.width();

    /// Appends the little-endian encoding of `self` to `out`.
    fn write_le(self, out: &mut Vec<u8>);

    /// Reads a value from the first `WIDTH` bytes of `bytes`.
    ///
    /// # Panics
    /// Panics if `bytes` is shorter than `WIDTH`. Callers check the length first.
    fn read_le(bytes: &[u8]) -> Self;
}

macro_rules! impl_scalar {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$kind;

                #[inline(always)]
                fn write_le(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                #[inline(always)]
                fn read_le(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$ty>()];
                    raw.copy_from_slice(&bytes[..std::mem::size_of::<$ty>()]);
                    <$ty>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_scalar! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
}

/// Encodes a scalar into exactly `T::WIDTH` bytes.
#[must_use]
pub fn encode_scalar<T: Scalar>(value: T) -> Vec<u8> {
    let mut out = Vec::with_capacity(T::WIDTH);
    value.write_le(&mut out);
    out
}

/// Decodes a scalar from a slice of exactly `T::WIDTH` bytes.
///
/// # Errors
/// Returns [`Error::MalformedInput`] if `bytes` is not exactly `T::WIDTH` long.
pub fn decode_scalar<T: Scalar>(bytes: &[u8]) -> Result<T> {
    if bytes.len() != T::WIDTH {
        return Err(Error::MalformedInput {
            offset: 0,
            required: T::WIDTH,
            available: bytes.len(),
        });
    }
    Ok(T::read_le(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_kind_width() {
        assert_eq!(ScalarKind::U8.width(), 1);
        assert_eq!(ScalarKind::I16.width(), 2);
        assert_eq!(ScalarKind::U32.width(), 4);
        assert_eq!(ScalarKind::I64.width(), 8);
    }

    #[test]
    fn test_scalar_width_matches_size_of() {
        assert_eq!(<u8 as Scalar>::WIDTH, std::mem::size_of::<u8>());
        assert_eq!(<i16 as Scalar>::WIDTH, std::mem::size_of::<i16>());
        assert_eq!(<u32 as Scalar>::WIDTH, std::mem::size_of::<u32>());
        assert_eq!(<i64 as Scalar>::WIDTH, std::mem::size_of::<i64>());
    }

    #[test]
    fn test_scalar_kind_signedness() {
        assert!(ScalarKind::I32.is_signed());
        assert!(!ScalarKind::U32.is_signed());
        assert_eq!(ScalarKind::U64.to_string(), "u64");
    }

    #[test]
    fn test_encode_u32_little_endian() {
        assert_eq!(encode_scalar(0x1234_5678u32), vec![0x78, 0x56, 0x34, 0x12]);
    }

    #[test]
    fn test_encode_negative_i16() {
        assert_eq!(encode_scalar(-2i16), vec![0xFE, 0xFF]);
    }

    #[test]
    fn test_decode_scalar_roundtrip_extremes() {
        assert_eq!(decode_scalar::<u8>(&encode_scalar(u8::MAX)), Ok(u8::MAX));
        assert_eq!(decode_scalar::<i8>(&encode_scalar(i8::MIN)), Ok(i8::MIN));
        assert_eq!(decode_scalar::<u64>(&encode_scalar(u64::MAX)), Ok(u64::MAX));
        assert_eq!(decode_scalar::<i64>(&encode_scalar(i64::MIN)), Ok(i64::MIN));
    }

    #[test]
    fn test_decode_scalar_undersized() {
        let result = decode_scalar::<u32>(&[1, 2, 3]);
        assert_eq!(
            result,
            Err(Error::MalformedInput {
                offset: 0,
                required: 4,
                available: 3,
            })
        );
    }

    #[test]
    fn test_decode_scalar_oversized() {
        let result = decode_scalar::<u16>(&[1, 2, 3]);
        assert!(matches!(result, Err(Error::MalformedInput { .. })));
    }
}
