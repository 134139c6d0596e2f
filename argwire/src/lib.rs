//! # argwire
//!
//! Flat binary marshaling for values crossing a host/guest call boundary.
//!
//! argwire turns fixed-width integers, arrays of them, and arrays of
//! user-defined records into one byte sequence, and decodes it back on the
//! other side in the same order.
//!
//! ## Wire Format
//!
//! ```text
//! scalar        size_of::<T>() bytes, little-endian, no tag
//! scalar array  u32 count, then count * size_of::<T>() bytes
//! object array  records back to back, no count; runs to end of message
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use argwire::prelude::*;
//!
//! #[derive(Debug, Default, PartialEq, Serializable)]
//! struct Fill {
//!     order_id: u64,
//!     qty: i32,
//! }
//!
//! let fills = vec![Fill { order_id: 1, qty: 10 }, Fill { order_id: 2, qty: -4 }];
//!
//! let mut encoder = Encoder::new();
//! encoder.add(7u32)?;
//! encoder.add(&[1u16, 2, 3])?;
//! encoder.add(Value::records(&fills))?;
//! let bytes = encoder.finish();
//!
//! let mut decoder = Decoder::new(&bytes);
//! assert_eq!(decoder.next_u32()?, 7);
//! assert_eq!(decoder.next_array::<u16>()?, vec![1, 2, 3]);
//! assert_eq!(decoder.next_object_array::<Fill>()?, fills);
//! decoder.finish()?;
//! # Ok::<(), argwire::Error>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Codecs, sessions, errors
//! - [`Serializable`] derive - record layouts from struct fields

pub mod prelude;

/// Codecs, sessions and error types.
pub mod core {
    pub use argwire_core::*;
}

// Re-export commonly used items at the crate root
pub use argwire_core::{
    Decoder, Encoder, EncoderBuilder, EncoderConfig, Error, RecordArray, Result, Scalar,
    ScalarArray, ScalarKind, ScalarValue, Serializable, Value,
};

pub use argwire_derive::Serializable;
