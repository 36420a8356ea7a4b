//! Flattening of a finished [`Component`] tree into `key=value&...` text.

use percent_encoding::utf8_percent_encode;
use tracing::trace;

use crate::{Component, EncoderConfig, Error, Result};

/// Renders a keyed tree as a URL-encoded query string.
///
/// Names pass through the key strategy and are escaped one at a time, so
/// the structural brackets of `parent[child]` and `list[]` stay literal.
#[derive(Debug, Clone, Copy)]
pub struct FormSerializer<'c> {
    config: &'c EncoderConfig,
}

impl<'c> FormSerializer<'c> {
    /// Create a serializer for the given configuration.
    #[must_use]
    pub const fn new(config: &'c EncoderConfig) -> Self {
        Self { config }
    }

    /// Serialize a tree whose root must be keyed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRootObject`] for any other root.
    pub fn serialize(&self, root: &Component) -> Result<String> {
        match root {
            Component::Keyed(entries) => {
                let segments = entries
                    .iter()
                    .map(|(name, child)| self.serialize_component(child, &self.escape_key(name)))
                    .collect();
                Ok(self.join(segments))
            }
            other => Err(Error::InvalidRootObject(other.kind())),
        }
    }

    /// Segments for `component` stored under the already-escaped `key`.
    fn serialize_component(&self, component: &Component, key: &str) -> String {
        match component {
            Component::Scalar(text) => format!("{key}={}", self.escape(text)),
            Component::Sequence(items) => {
                let segments = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let element_key = self.config.array_encoding.encode(key, index);
                        self.serialize_component(item, &element_key)
                    })
                    .collect();
                self.join(segments)
            }
            Component::Keyed(entries) => {
                let segments = entries
                    .iter()
                    .map(|(name, child)| {
                        let child_key = format!("{key}[{}]", self.escape_key(name));
                        self.serialize_component(child, &child_key)
                    })
                    .collect();
                self.join(segments)
            }
        }
    }

    /// Join one nesting level, sorting it first when alphabetizing.
    fn join(&self, mut segments: Vec<String>) -> String {
        segments.retain(|segment| !segment.is_empty());
        if self.config.alphabetize_key_value_pairs {
            segments.sort();
        }
        segments.join("&")
    }

    fn escape_key(&self, name: &str) -> String {
        self.escape(&self.config.key_encoding.encode(name))
    }

    /// Percent-escape `text`, always escaping spaces, then apply the space
    /// strategy.
    #[must_use]
    pub fn escape(&self, text: &str) -> String {
        let mut escaped = utf8_percent_encode(text, self.config.encode_set).to_string();
        if escaped.contains(' ') {
            escaped = escaped.replace(' ', "%20");
        }
        trace!(input_len = text.len(), output_len = escaped.len(), "escaped text");
        self.config.space_encoding.encode(&escaped)
    }
}
