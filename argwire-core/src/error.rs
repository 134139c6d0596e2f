//! Error types for argwire encode/decode operations.

use thiserror::Error;

/// Core error type for argwire operations.
///
/// Every variant is fatal for the call that raised it. Sessions are left
/// exactly as they were before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The dispatcher was handed a value whose shape it cannot encode.
    #[error("unsupported type: {type_name} has no wire encoding")]
    UnsupportedType {
        /// Fully qualified name of the rejected type.
        type_name: &'static str,
    },

    /// A decode needed more bytes than remain, or a scalar slice had the wrong width.
    #[error(
        "malformed input at offset {offset}: required {required} bytes, available {available} bytes"
    )]
    MalformedInput {
        /// Offset at which the read was attempted.
        offset: usize,
        /// Number of bytes the read needed.
        required: usize,
        /// Number of bytes actually available.
        available: usize,
    },

    /// A record reported an end offset that does not lie in `(start, limit]`.
    #[error("misaligned decode: record at {start} reported end {end}, buffer limit {limit}")]
    MisalignedDecode {
        /// Offset the record started decoding from.
        start: usize,
        /// End offset returned by the record.
        end: usize,
        /// Length of the buffer being decoded.
        limit: usize,
    },

    /// A record consumed a different number of bytes than it produced.
    #[error("record length mismatch: produced {produced} bytes, consumed {consumed} bytes")]
    RecordLengthMismatch {
        /// Bytes written by `serialize_into`.
        produced: usize,
        /// Bytes consumed by `deserialize` on the same encoding.
        consumed: usize,
    },

    /// A record in an object array encoded to zero bytes.
    ///
    /// Object arrays carry no count, so such a record could never be read back.
    #[error("empty record: record {index} of the object array encoded to 0 bytes")]
    EmptyRecord {
        /// Position of the record within the array.
        index: usize,
    },

    /// An array is too long for the 4-byte length field.
    #[error("length overflow: {len} elements do not fit a u32 length field")]
    LengthOverflow {
        /// Element count that was rejected.
        len: usize,
    },

    /// Appending would grow the message past the configured ceiling.
    #[error("capacity exceeded: message would need {required} bytes, limit is {limit} bytes")]
    CapacityExceeded {
        /// Total message size the append would produce.
        required: usize,
        /// Configured maximum message size.
        limit: usize,
    },

    /// The decoder was finished with unread bytes left.
    #[error("trailing bytes: {remaining} bytes left unread")]
    TrailingBytes {
        /// Number of unread bytes.
        remaining: usize,
    },
}

/// Result type alias for argwire operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_malformed_input() {
        let err = Error::MalformedInput {
            offset: 12,
            required: 8,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("malformed input"));
        assert!(msg.contains("12"));
        assert!(msg.contains("8"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_error_display_unsupported_type() {
        let err = Error::UnsupportedType {
            type_name: "alloc::string::String",
        };
        assert!(err.to_string().contains("String"));
    }

    #[test]
    fn test_error_display_misaligned_decode() {
        let err = Error::MisalignedDecode {
            start: 4,
            end: 4,
            limit: 16,
        };
        let msg = err.to_string();
        assert!(msg.contains("misaligned decode"));
        assert!(msg.contains("limit 16"));
    }

    #[test]
    fn test_error_display_empty_record() {
        let msg = Error::EmptyRecord { index: 2 }.to_string();
        assert!(msg.contains("empty record"));
        assert!(msg.contains("record 2"));
    }

    #[test]
    fn test_error_equality() {
        let a = Error::TrailingBytes { remaining: 2 };
        let b = Error::TrailingBytes { remaining: 2 };
        assert_eq!(a, b);
        assert_ne!(a, Error::TrailingBytes { remaining: 3 });
    }
}
