//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```
//! use argwire::prelude::*;
//! ```

// Sessions
pub use argwire_core::decoder::Decoder;
pub use argwire_core::encoder::{Encoder, EncoderBuilder, EncoderConfig};

// Values and records
pub use argwire_core::record::{RecordArray, Serializable};
pub use argwire_core::scalar::Scalar;
pub use argwire_core::value::Value;
pub use argwire_derive::Serializable;

// Errors
pub use argwire_core::error::{Error, Result};
