//! Timestamp support.
//!
//! Serde has no timestamp type, so timestamps that should follow
//! [`DateEncoding`](crate::DateEncoding) are wrapped in [`Timestamp`] (or
//! annotated with [`serialize`]). Other serializers see a plain RFC 3339
//! string.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use pincer_form::{DateEncoding, EncoderConfig, FormEncoder, Timestamp};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Event {
//!     name: String,
//!     at: Timestamp,
//! }
//!
//! let event = Event {
//!     name: "launch".to_string(),
//!     at: Timestamp(Utc.timestamp_opt(1_000_000_000, 0).unwrap()),
//! };
//! let encoder = FormEncoder::new(
//!     EncoderConfig::builder()
//!         .date_encoding(DateEncoding::SecondsSince1970)
//!         .build(),
//! );
//! assert_eq!(encoder.encode(&event).expect("encode"), "at=1000000000&name=launch");
//! ```

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Newtype-struct name the encoder recognises as a timestamp.
pub(crate) const TIMESTAMP_TOKEN: &str = "$pincer_form::private::Timestamp";

/// A UTC timestamp encoded with the configured [`DateEncoding`](crate::DateEncoding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl From<DateTime<Utc>> for Timestamp {
    fn from(date: DateTime<Utc>) -> Self {
        Self(date)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_newtype_struct(TIMESTAMP_TOKEN, &self.0)
    }
}

/// `serialize_with` helper for `DateTime<Utc>` fields.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Event {
///     #[serde(serialize_with = "pincer_form::timestamp::serialize")]
///     at: DateTime<Utc>,
/// }
/// ```
///
/// # Errors
///
/// Returns the serializer's error.
pub fn serialize<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    Timestamp(*date).serialize(serializer)
}
