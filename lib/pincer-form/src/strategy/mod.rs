//! Formatting strategies selected by [`EncoderConfig`](crate::EncoderConfig).
//!
//! Each strategy is a plain value: it holds no state and formats the same
//! input the same way every time.

mod key;

use std::fmt::{self, Write as _};
use std::sync::Arc;

use base64::Engine;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::{Error, Result};

pub use key::{KeyEncoder, KeyEncoding};

/// Function type for [`ArrayEncoding::Custom`].
pub type ArrayKeyEncoder = Arc<dyn Fn(&str, usize) -> String + Send + Sync>;

/// Function type for [`DataEncoding::Custom`].
pub type DataEncoder = Arc<dyn Fn(&[u8]) -> Result<String> + Send + Sync>;

/// Function type for [`DateEncoding::Custom`].
pub type DateEncoder = Arc<dyn Fn(&DateTime<Utc>) -> Result<String> + Send + Sync>;

/// How the key of each sequence element is written.
#[derive(Clone, Default)]
pub enum ArrayEncoding {
    /// `key[]=1&key[]=2`
    #[default]
    Brackets,
    /// `key=1&key=2`
    NoBrackets,
    /// `key[0]=1&key[1]=2`
    IndexInBrackets,
    /// Element keys are produced by the given function from the escaped
    /// parent key and the element index.
    Custom(ArrayKeyEncoder),
}

impl fmt::Debug for ArrayEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Brackets => f.write_str("Brackets"),
            Self::NoBrackets => f.write_str("NoBrackets"),
            Self::IndexInBrackets => f.write_str("IndexInBrackets"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl ArrayEncoding {
    /// Create a custom array encoding.
    pub fn custom(encoder: impl Fn(&str, usize) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(encoder))
    }

    /// Key used for the element at `index` of the sequence stored under `key`.
    #[must_use]
    pub fn encode(&self, key: &str, index: usize) -> String {
        match self {
            Self::Brackets => format!("{key}[]"),
            Self::NoBrackets => key.to_string(),
            Self::IndexInBrackets => format!("{key}[{index}]"),
            Self::Custom(encoder) => encoder(key, index),
        }
    }
}

/// How booleans are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoolEncoding {
    /// `1` and `0`.
    #[default]
    Numeric,
    /// `true` and `false`.
    Literal,
}

impl BoolEncoding {
    /// Text for `value`.
    #[must_use]
    pub const fn encode(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::Numeric, true) => "1",
            (Self::Numeric, false) => "0",
            (Self::Literal, true) => "true",
            (Self::Literal, false) => "false",
        }
    }
}

/// How binary data is written.
#[derive(Clone, Default)]
pub enum DataEncoding {
    /// Encode the bytes as a sequence of numbers.
    DeferredToData,
    /// Standard base64 with padding.
    #[default]
    Base64,
    /// Bytes are passed to the given function.
    Custom(DataEncoder),
}

impl fmt::Debug for DataEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeferredToData => f.write_str("DeferredToData"),
            Self::Base64 => f.write_str("Base64"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl DataEncoding {
    /// Create a custom data encoding.
    pub fn custom(encoder: impl Fn(&[u8]) -> Result<String> + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(encoder))
    }

    /// Text for `data`, or `None` when the bytes should be encoded
    /// structurally.
    ///
    /// # Errors
    ///
    /// Propagates the error of a custom encoder.
    pub fn encode(&self, data: &[u8]) -> Result<Option<String>> {
        match self {
            Self::DeferredToData => Ok(None),
            Self::Base64 => Ok(Some(
                base64::engine::general_purpose::STANDARD.encode(data),
            )),
            Self::Custom(encoder) => encoder(data).map(Some),
        }
    }
}

/// How timestamps are written.
#[derive(Clone, Default)]
pub enum DateEncoding {
    /// Use the timestamp's own serialization (RFC 3339 text with full
    /// precision).
    #[default]
    DeferredToDate,
    /// Seconds since the Unix epoch, e.g. `1000000000` or `1000000000.5`.
    SecondsSince1970,
    /// Milliseconds since the Unix epoch.
    MillisecondsSince1970,
    /// RFC 3339 with whole seconds and a `Z` designator.
    Iso8601,
    /// A `chrono` format string.
    Formatted(String),
    /// Timestamps are passed to the given function.
    Custom(DateEncoder),
}

impl fmt::Debug for DateEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeferredToDate => f.write_str("DeferredToDate"),
            Self::SecondsSince1970 => f.write_str("SecondsSince1970"),
            Self::MillisecondsSince1970 => f.write_str("MillisecondsSince1970"),
            Self::Iso8601 => f.write_str("Iso8601"),
            Self::Formatted(format) => f.debug_tuple("Formatted").field(format).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl DateEncoding {
    /// Create a custom date encoding.
    pub fn custom(
        encoder: impl Fn(&DateTime<Utc>) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        Self::Custom(Arc::new(encoder))
    }

    /// Text for `date`, or `None` when the timestamp should use its own
    /// serialization.
    ///
    /// # Errors
    ///
    /// Fails on an invalid format string or a failing custom encoder.
    #[allow(clippy::cast_precision_loss)]
    pub fn encode(&self, date: &DateTime<Utc>) -> Result<Option<String>> {
        let micros = date.timestamp_micros() as f64;
        match self {
            Self::DeferredToDate => Ok(None),
            Self::SecondsSince1970 => Ok(Some((micros / 1_000_000.0).to_string())),
            Self::MillisecondsSince1970 => Ok(Some((micros / 1_000.0).to_string())),
            Self::Iso8601 => Ok(Some(date.to_rfc3339_opts(SecondsFormat::Secs, true))),
            Self::Formatted(format) => {
                let mut text = String::new();
                write!(text, "{}", date.format(format))
                    .map_err(|_| Error::custom(format!("invalid date format '{format}'")))?;
                Ok(Some(text))
            }
            Self::Custom(encoder) => encoder(date).map(Some),
        }
    }
}

/// How spaces are written after percent-escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpaceEncoding {
    /// `%20`
    #[default]
    PercentEscaped,
    /// `+`
    PlusReplaced,
}

impl SpaceEncoding {
    /// Remap escaped spaces in already percent-escaped text.
    #[must_use]
    pub fn encode(self, escaped: &str) -> String {
        match self {
            Self::PercentEscaped => escaped.to_string(),
            Self::PlusReplaced => escaped.replace("%20", "+"),
        }
    }
}
