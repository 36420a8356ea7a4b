//! Encoder configuration types.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use crate::{ArrayEncoding, BoolEncoding, DataEncoding, DateEncoding, KeyEncoding, SpaceEncoding};

/// Characters percent-escaped in keys and values by default.
///
/// Everything but ASCII alphanumerics, the unreserved marks `- . _ ~`, and
/// the query-safe `?` and `/`.
pub const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'?')
    .remove(b'/');

/// Configuration for the form encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Sort sibling segments at every nesting level.
    pub alphabetize_key_value_pairs: bool,
    /// Key format of sequence elements.
    pub array_encoding: ArrayEncoding,
    /// Boolean format.
    pub bool_encoding: BoolEncoding,
    /// Binary data format.
    pub data_encoding: DataEncoding,
    /// Timestamp format.
    pub date_encoding: DateEncoding,
    /// Key casing.
    pub key_encoding: KeyEncoding,
    /// Space format.
    pub space_encoding: SpaceEncoding,
    /// Characters that are percent-escaped. Spaces are always escaped.
    pub encode_set: &'static AsciiSet,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            alphabetize_key_value_pairs: true,
            array_encoding: ArrayEncoding::default(),
            bool_encoding: BoolEncoding::default(),
            data_encoding: DataEncoding::default(),
            date_encoding: DateEncoding::default(),
            key_encoding: KeyEncoding::default(),
            space_encoding: SpaceEncoding::default(),
            encode_set: QUERY_ENCODE_SET,
        }
    }
}

impl EncoderConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> EncoderConfigBuilder {
        EncoderConfigBuilder::default()
    }
}

/// Builder for [`EncoderConfig`].
#[derive(Debug, Clone, Default)]
pub struct EncoderConfigBuilder {
    alphabetize_key_value_pairs: Option<bool>,
    array_encoding: Option<ArrayEncoding>,
    bool_encoding: Option<BoolEncoding>,
    data_encoding: Option<DataEncoding>,
    date_encoding: Option<DateEncoding>,
    key_encoding: Option<KeyEncoding>,
    space_encoding: Option<SpaceEncoding>,
    encode_set: Option<&'static AsciiSet>,
}

impl EncoderConfigBuilder {
    /// Set whether sibling segments are sorted.
    #[must_use]
    pub fn alphabetize_key_value_pairs(mut self, alphabetize: bool) -> Self {
        self.alphabetize_key_value_pairs = Some(alphabetize);
        self
    }

    /// Set the array encoding.
    #[must_use]
    pub fn array_encoding(mut self, encoding: ArrayEncoding) -> Self {
        self.array_encoding = Some(encoding);
        self
    }

    /// Set the boolean encoding.
    #[must_use]
    pub fn bool_encoding(mut self, encoding: BoolEncoding) -> Self {
        self.bool_encoding = Some(encoding);
        self
    }

    /// Set the binary data encoding.
    #[must_use]
    pub fn data_encoding(mut self, encoding: DataEncoding) -> Self {
        self.data_encoding = Some(encoding);
        self
    }

    /// Set the timestamp encoding.
    #[must_use]
    pub fn date_encoding(mut self, encoding: DateEncoding) -> Self {
        self.date_encoding = Some(encoding);
        self
    }

    /// Set the key encoding.
    #[must_use]
    pub fn key_encoding(mut self, encoding: KeyEncoding) -> Self {
        self.key_encoding = Some(encoding);
        self
    }

    /// Set the space encoding.
    #[must_use]
    pub fn space_encoding(mut self, encoding: SpaceEncoding) -> Self {
        self.space_encoding = Some(encoding);
        self
    }

    /// Set the characters that are percent-escaped.
    #[must_use]
    pub fn encode_set(mut self, set: &'static AsciiSet) -> Self {
        self.encode_set = Some(set);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> EncoderConfig {
        let defaults = EncoderConfig::default();
        EncoderConfig {
            alphabetize_key_value_pairs: self
                .alphabetize_key_value_pairs
                .unwrap_or(defaults.alphabetize_key_value_pairs),
            array_encoding: self.array_encoding.unwrap_or(defaults.array_encoding),
            bool_encoding: self.bool_encoding.unwrap_or(defaults.bool_encoding),
            data_encoding: self.data_encoding.unwrap_or(defaults.data_encoding),
            date_encoding: self.date_encoding.unwrap_or(defaults.date_encoding),
            key_encoding: self.key_encoding.unwrap_or(defaults.key_encoding),
            space_encoding: self.space_encoding.unwrap_or(defaults.space_encoding),
            encode_set: self.encode_set.unwrap_or(defaults.encode_set),
        }
    }
}
