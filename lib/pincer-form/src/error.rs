//! Error types for pincer-form.

use derive_more::{Display, Error};

use crate::{CodingPath, ComponentKind};

/// Main error type for form encoding.
///
/// Every error is fatal to the encode call that raised it: no partial output
/// is ever returned.
#[derive(Debug, Display, Error)]
pub enum Error {
    /// The finished tree does not have a keyed root.
    #[display("invalid root object: expected keyed, found {_0}")]
    InvalidRootObject(#[error(not(source))] ComponentKind),

    /// A value with no form representation (e.g. `None` or `()`).
    #[display("unsupported value: cannot encode {value} at '{path}'")]
    UnsupportedValue {
        /// Short description of the rejected value.
        value: &'static str,
        /// Location of the rejected value.
        #[error(not(source))]
        path: CodingPath,
    },

    /// A single-value container was asked to encode more than once.
    #[display("protocol violation: value already encoded at '{path}'")]
    ProtocolViolation {
        /// Location of the container.
        #[error(not(source))]
        path: CodingPath,
    },

    /// A timestamp payload that is not RFC 3339 text.
    #[display("invalid timestamp '{text}' at '{path}'")]
    InvalidTimestamp {
        /// The rejected payload.
        text: String,
        /// Location of the timestamp.
        #[error(not(source))]
        path: CodingPath,
    },

    /// Error raised by a `Serialize` implementation or a custom strategy.
    #[display("{_0}")]
    Custom(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an unsupported-value error.
    #[must_use]
    pub fn unsupported_value(value: &'static str, path: &CodingPath) -> Self {
        Self::UnsupportedValue {
            value,
            path: path.clone(),
        }
    }

    /// Create a protocol-violation error.
    #[must_use]
    pub fn protocol_violation(path: &CodingPath) -> Self {
        Self::ProtocolViolation { path: path.clone() }
    }

    /// Create a custom error.
    #[must_use]
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// Returns `true` if this is an unsupported-value error.
    #[must_use]
    pub const fn is_unsupported_value(&self) -> bool {
        matches!(self, Self::UnsupportedValue { .. })
    }

    /// Returns `true` if this is a protocol-violation error.
    #[must_use]
    pub const fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::ProtocolViolation { .. })
    }

    /// Returns `true` if the root of the encoded tree was not keyed.
    #[must_use]
    pub const fn is_invalid_root(&self) -> bool {
        matches!(self, Self::InvalidRootObject(_))
    }

    /// Coding path attached to the error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&CodingPath> {
        match self {
            Self::UnsupportedValue { path, .. }
            | Self::ProtocolViolation { path }
            | Self::InvalidTimestamp { path, .. } => Some(path),
            Self::InvalidRootObject(_) | Self::Custom(_) => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PathSegment;

    #[test]
    fn error_display() {
        let err = Error::InvalidRootObject(ComponentKind::Sequence);
        assert_eq!(
            err.to_string(),
            "invalid root object: expected keyed, found sequence"
        );

        let path = CodingPath::from(vec![
            PathSegment::from("user"),
            PathSegment::from("tags"),
            PathSegment::from(2_usize),
        ]);
        let err = Error::unsupported_value("none", &path);
        assert_eq!(
            err.to_string(),
            "unsupported value: cannot encode none at 'user.tags[2]'"
        );

        let err = Error::protocol_violation(&CodingPath::root());
        assert_eq!(
            err.to_string(),
            "protocol violation: value already encoded at '.'"
        );
    }

    #[test]
    fn error_predicates() {
        let path = CodingPath::root();
        assert!(Error::unsupported_value("unit", &path).is_unsupported_value());
        assert!(Error::protocol_violation(&path).is_protocol_violation());
        assert!(Error::InvalidRootObject(ComponentKind::Scalar).is_invalid_root());
        assert!(!Error::custom("boom").is_invalid_root());
    }

    #[test]
    fn error_path() {
        let path = CodingPath::from(vec![PathSegment::from("when")]);
        let err = Error::InvalidTimestamp {
            text: "yesterday".to_string(),
            path: path.clone(),
        };
        assert_eq!(err.path(), Some(&path));
        assert!(Error::custom("boom").path().is_none());
    }

    #[test]
    fn serde_custom_error() {
        let err = <Error as serde::ser::Error>::custom("field rejected");
        assert_eq!(err.to_string(), "field rejected");
    }
}
