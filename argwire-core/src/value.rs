//! Closed set of value shapes the dispatcher can encode.
//!
//! [`Value`] replaces shape guessing at runtime: the variant picks the codec,
//! so routing is decided by the compiler. `From` conversions cover integers,
//! scalar slices, vectors and arrays; [`Value::records`] wraps record arrays.

use crate::record::RecordArray;
use crate::scalar::ScalarKind;

/// A single fixed-width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarValue {
    /// Unsigned 8-bit integer.
    U8(u8),
    /// Signed 8-bit integer.
    I8(i8),
    /// Unsigned 16-bit integer.
    U16(u16),
    /// Signed 16-bit integer.
    I16(i16),
    /// Unsigned 32-bit integer.
    U32(u32),
    /// Signed 32-bit integer.
    I32(i32),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// Signed 64-bit integer.
    I64(i64),
}

impl ScalarValue {
    /// Returns the kind of this scalar.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::U8(_) => ScalarKind::U8,
            Self::I8(_) => ScalarKind::I8,
            Self::U16(_) => ScalarKind::U16,
            Self::I16(_) => ScalarKind::I16,
            Self::U32(_) => ScalarKind::U32,
            Self::I32(_) => ScalarKind::I32,
            Self::U64(_) => ScalarKind::U64,
            Self::I64(_) => ScalarKind::I64,
        }
    }
}

/// A borrowed homogeneous array of fixed-width integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarArray<'a> {
    /// Array of `u8`.
    U8(&'a [u8]),
    /// Array of `i8`.
    I8(&'a [i8]),
    /// Array of `u16`.
    U16(&'a [u16]),
    /// Array of `i16`.
    I16(&'a [i16]),
    /// Array of `u32`.
    U32(&'a [u32]),
    /// Array of `i32`.
    I32(&'a [i32]),
    /// Array of `u64`.
    U64(&'a [u64]),
    /// Array of `i64`.
    I64(&'a [i64]),
}

impl ScalarArray<'_> {
    /// Returns the element kind.
    #[must_use]
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::U8(_) => ScalarKind::U8,
            Self::I8(_) => ScalarKind::I8,
            Self::U16(_) => ScalarKind::U16,
            Self::I16(_) => ScalarKind::I16,
            Self::U32(_) => ScalarKind::U32,
            Self::I32(_) => ScalarKind::I32,
            Self::U64(_) => ScalarKind::U64,
            Self::I64(_) => ScalarKind::I64,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::U32(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::U64(v) => v.len(),
            Self::I64(v) => v.len(),
        }
    }

    /// Returns true if the array has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A value handed to the encoder, tagged with the codec that frames it.
#[derive(Clone, Copy)]
pub enum Value<'a> {
    /// Fixed-width integer, no framing.
    Scalar(ScalarValue),
    /// Length-prefixed scalar array.
    ScalarArray(ScalarArray<'a>),
    /// Unprefixed record array, runs to the end of the message.
    ObjectArray(&'a dyn RecordArray),
}

impl<'a> Value<'a> {
    /// Wraps a record collection for object-array encoding.
    ///
    /// # Arguments
    /// * `records` - A `Vec`, array, boxed slice or slice reference of records
    #[must_use]
    pub fn records<R: RecordArray + 'a>(records: &'a R) -> Self {
        Self::ObjectArray(records)
    }

    /// Returns a short name for the shape, used in logs.
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::ScalarArray(_) => "scalar-array",
            Self::ObjectArray(_) => "object-array",
        }
    }
}

impl std::fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            Self::ScalarArray(v) => f.debug_tuple("ScalarArray").field(v).finish(),
            Self::ObjectArray(r) => f
                .debug_struct("ObjectArray")
                .field("records", &r.record_count())
                .finish(),
        }
    }
}

macro_rules! impl_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ScalarValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Self::Scalar(ScalarValue::$variant(value))
                }
            }

            impl<'a> From<&'a [$ty]> for ScalarArray<'a> {
                fn from(values: &'a [$ty]) -> Self {
                    Self::$variant(values)
                }
            }

            impl<'a> From<&'a [$ty]> for Value<'a> {
                fn from(values: &'a [$ty]) -> Self {
                    Self::ScalarArray(ScalarArray::$variant(values))
                }
            }

            impl<'a> From<&'a Vec<$ty>> for Value<'a> {
                fn from(values: &'a Vec<$ty>) -> Self {
                    Self::ScalarArray(ScalarArray::$variant(values))
                }
            }

            impl<'a, const N: usize> From<&'a [$ty; N]> for Value<'a> {
                fn from(values: &'a [$ty; N]) -> Self {
                    Self::ScalarArray(ScalarArray::$variant(values))
                }
            }
        )*
    };
}

impl_value_from! {
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
}

impl<'a> From<ScalarArray<'a>> for Value<'a> {
    fn from(values: ScalarArray<'a>) -> Self {
        Self::ScalarArray(values)
    }
}

impl From<ScalarValue> for Value<'_> {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_conversion() {
        let value: Value<'_> = 7u16.into();
        assert!(matches!(value, Value::Scalar(ScalarValue::U16(7))));
        assert_eq!(value.shape(), "scalar");
    }

    #[test]
    fn test_array_conversions() {
        let vec = vec![1i32, 2, 3];
        let arr = [1u8; 5];

        let from_vec: Value<'_> = (&vec).into();
        let from_arr: Value<'_> = (&arr).into();
        let from_slice: Value<'_> = vec.as_slice().into();

        match from_vec {
            Value::ScalarArray(a) => {
                assert_eq!(a.kind(), ScalarKind::I32);
                assert_eq!(a.len(), 3);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(from_arr, Value::ScalarArray(ScalarArray::U8(s)) if s.len() == 5));
        assert!(matches!(from_slice, Value::ScalarArray(ScalarArray::I32(_))));
    }

    #[test]
    fn test_records_value() {
        let records = vec![1u32, 2];
        let value = Value::records(&records);
        assert_eq!(value.shape(), "object-array");
        assert!(format!("{value:?}").contains("records: 2"));
    }

    #[test]
    fn test_scalar_value_kind() {
        assert_eq!(ScalarValue::from(-1i64).kind(), ScalarKind::I64);
        assert!(ScalarArray::from(&[][..] as &[u16]).is_empty());
    }
}
