//! Configurable URL-encoded form and query string encoder for pincer.
//!
//! Any [`serde::Serialize`] value with a keyed top level (a struct or a map)
//! can be encoded. Nested values use bracketed keys:
//!
//! ```
//! use pincer_form::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Address { city: String }
//!
//! #[derive(Serialize)]
//! struct Signup {
//!     name: String,
//!     address: Address,
//!     roles: Vec<&'static str>,
//! }
//!
//! let signup = Signup {
//!     name: "Ada Lovelace".to_string(),
//!     address: Address { city: "London".to_string() },
//!     roles: vec!["admin", "dev"],
//! };
//! assert_eq!(
//!     to_string(&signup).expect("encode"),
//!     "address[city]=London&name=Ada%20Lovelace&roles[]=admin&roles[]=dev"
//! );
//! ```
//!
//! Encoding happens in two passes:
//! - [`ValueEncoder`], [`KeyedContainer`], and [`OrderedContainer`] walk the
//!   value and write [`Component`] nodes into a tree
//! - [`FormSerializer`] flattens the tree into `key=value` segments
//!
//! Formatting is selected through [`EncoderConfig`]: arrays, booleans,
//! binary data, timestamps (see [`Timestamp`]), key casing, and spaces.

mod component;
mod config;
mod encoder;
mod error;
mod path;
pub mod prelude;
mod serializer;
mod strategy;
pub mod timestamp;
mod traversal;

pub use component::{Component, ComponentKind};
pub use config::{EncoderConfig, EncoderConfigBuilder, QUERY_ENCODE_SET};
pub use encoder::{FormEncoder, to_bytes, to_string};
pub use error::{Error, Result};
pub use path::{CodingPath, PathSegment};
pub use serializer::FormSerializer;
pub use strategy::{
    ArrayEncoding, ArrayKeyEncoder, BoolEncoding, DataEncoder, DataEncoding, DateEncoder,
    DateEncoding, KeyEncoder, KeyEncoding, SpaceEncoding,
};
pub use timestamp::Timestamp;
pub use traversal::{KeyedContainer, OrderedContainer, ValueEncoder};

// Re-export for custom encode sets
pub use percent_encoding;
