//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use pincer_form::prelude::*;
//! ```

pub use crate::{
    ArrayEncoding, BoolEncoding, DataEncoding, DateEncoding, EncoderConfig, Error, FormEncoder,
    KeyEncoding, Result, SpaceEncoding, Timestamp, to_bytes, to_string,
};
