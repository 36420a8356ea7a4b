//! Generic traversal turning a `Serialize` value into [`Component`] writes.
//!
//! Three containers cooperate, all anchored on the same tree:
//! - [`ValueEncoder`] encodes one value at its coding path
//! - [`KeyedContainer`] encodes named children (structs, maps, variants)
//! - [`OrderedContainer`] encodes positional children (sequences, tuples)
//!
//! A container only owns its coding path; every write goes through
//! [`Component::set_value`].

mod keyed;
mod ordered;
mod single;

use serde::Serialize;

use crate::{CodingPath, Component, EncoderConfig, Error, Result};

pub use keyed::KeyedContainer;
pub use ordered::OrderedContainer;
pub use single::ValueEncoder;

/// Encode `value` into a scratch tree and return its text.
///
/// Used where a value must collapse to a single scalar (map keys and
/// timestamp payloads). `what` names the value in errors reported at `path`.
pub(crate) fn encode_to_text<T>(
    config: &EncoderConfig,
    value: &T,
    path: &CodingPath,
    what: &'static str,
) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut scratch = Component::default();
    ValueEncoder::new(&mut scratch, config, CodingPath::root())
        .encode(value)
        .map_err(|err| match err {
            Error::UnsupportedValue { value, .. } => Error::unsupported_value(value, path),
            other => other,
        })?;

    match scratch {
        Component::Scalar(text) => Ok(text),
        Component::Sequence(_) | Component::Keyed(_) => Err(Error::unsupported_value(what, path)),
    }
}
