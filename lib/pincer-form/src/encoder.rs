//! Top-level encoding entry points.

use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::{CodingPath, Component, EncoderConfig, FormSerializer, Result, ValueEncoder};

/// URL-encoded form encoder.
///
/// Each call builds and discards its own tree, so one encoder can be shared
/// freely across threads.
///
/// # Example
///
/// ```
/// use pincer_form::{ArrayEncoding, EncoderConfig, FormEncoder};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Search {
///     q: String,
///     tags: Vec<String>,
/// }
///
/// let encoder = FormEncoder::new(
///     EncoderConfig::builder()
///         .array_encoding(ArrayEncoding::NoBrackets)
///         .build(),
/// );
/// let search = Search {
///     q: "rust lang".to_string(),
///     tags: vec!["http".to_string(), "async".to_string()],
/// };
/// let query = encoder.encode(&search).expect("encode");
/// assert_eq!(query, "q=rust%20lang&tags=async&tags=http");
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormEncoder {
    config: EncoderConfig,
}

impl FormEncoder {
    /// Create an encoder with the given configuration.
    #[must_use]
    pub const fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// The encoder's configuration.
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Build the intermediate tree for `value` without serializing it.
    ///
    /// # Errors
    ///
    /// Returns an error if traversal fails (absent values, failing
    /// strategies, or `Serialize` errors).
    pub fn encode_to_component<T: ?Sized + Serialize>(&self, value: &T) -> Result<Component> {
        let mut tree = Component::default();
        ValueEncoder::new(&mut tree, &self.config, CodingPath::root()).encode(value)?;
        Ok(tree)
    }

    /// Encode `value` as a query string.
    ///
    /// # Errors
    ///
    /// Returns an error if traversal fails or the root is not keyed.
    pub fn encode<T: ?Sized + Serialize>(&self, value: &T) -> Result<String> {
        let tree = self.encode_to_component(value)?;
        let query = FormSerializer::new(&self.config).serialize(&tree)?;
        debug!(root = %tree.kind(), length = query.len(), "encoded form");
        Ok(query)
    }

    /// Encode `value` as form body bytes.
    ///
    /// # Errors
    ///
    /// Same as [`FormEncoder::encode`].
    pub fn encode_to_bytes<T: ?Sized + Serialize>(&self, value: &T) -> Result<Bytes> {
        self.encode(value).map(|query| Bytes::from(query.into_bytes()))
    }
}

/// Encode a value as a query string using the default configuration.
///
/// # Errors
///
/// Returns an error if traversal fails or the root is not keyed.
///
/// # Example
///
/// ```
/// use pincer_form::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Login { username: String, remember: bool }
///
/// let login = Login { username: "alice".to_string(), remember: true };
/// assert_eq!(to_string(&login).expect("encode"), "remember=1&username=alice");
/// ```
pub fn to_string<T: ?Sized + Serialize>(value: &T) -> Result<String> {
    FormEncoder::default().encode(value)
}

/// Encode a value as form body bytes using the default configuration.
///
/// # Errors
///
/// Returns an error if traversal fails or the root is not keyed.
pub fn to_bytes<T: ?Sized + Serialize>(value: &T) -> Result<Bytes> {
    FormEncoder::default().encode_to_bytes(value)
}
