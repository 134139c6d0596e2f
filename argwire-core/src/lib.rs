//! # argwire Core
//!
//! Flat binary marshaling for values crossing a host/guest call boundary.
//!
//! This crate provides:
//! - A fixed-width integer codec ([`scalar`])
//! - An append-only output buffer and a shared read cursor
//! - Length-prefixed scalar arrays ([`array`])
//! - Self-describing record arrays via [`Serializable`] ([`record`])
//! - A closed [`Value`] type that routes each value to its codec
//! - [`Encoder`] / [`Decoder`] sessions that own one message's state
//!
//! The wire format carries no tags or schema: producer and consumer agree on
//! the sequence of values out-of-band and decode in encode order.

pub mod array;
pub mod buffer;
pub mod cursor;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod record;
pub mod scalar;
pub mod value;

pub use array::{LENGTH_FIELD_SIZE, decode_array, encode_array, encode_array_to_vec};
pub use buffer::ByteBuffer;
pub use cursor::ReadCursor;
pub use decoder::Decoder;
pub use encoder::{Encoder, EncoderBuilder, EncoderConfig};
pub use error::{Error, Result};
pub use record::{
    RecordArray, Serializable, decode_object_array, decode_object_array_from,
    encode_object_array, encode_object_array_checked,
};
pub use scalar::{Scalar, ScalarKind, decode_scalar, encode_scalar};
pub use value::{ScalarArray, ScalarValue, Value};
