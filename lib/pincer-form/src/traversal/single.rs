//! Single-value container.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::ser::{self, SerializeSeq as _};
use tracing::trace;

use super::{KeyedContainer, OrderedContainer, encode_to_text};
use crate::timestamp::TIMESTAMP_TOKEN;
use crate::{CodingPath, Component, DateEncoding, EncoderConfig, Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Consumed,
}

/// Encodes exactly one value at a coding path.
///
/// `serde::Serializer` is implemented for `&mut ValueEncoder`, so a value
/// can be handed the same container twice; the second attempt fails with
/// [`Error::ProtocolViolation`]. A container is consumed by its first
/// attempt whether or not that attempt succeeds.
///
/// # Example
///
/// ```
/// use pincer_form::{CodingPath, Component, EncoderConfig, ValueEncoder};
///
/// let config = EncoderConfig::default();
/// let mut tree = Component::default();
/// let mut encoder = ValueEncoder::new(&mut tree, &config, CodingPath::root().appending("q"));
///
/// encoder.encode("rust").unwrap();
/// assert!(encoder.encode("again").unwrap_err().is_protocol_violation());
/// assert_eq!(tree.get("q").and_then(Component::as_scalar), Some("rust"));
/// ```
#[derive(Debug)]
pub struct ValueEncoder<'a> {
    tree: &'a mut Component,
    config: &'a EncoderConfig,
    path: CodingPath,
    state: State,
}

impl<'a> ValueEncoder<'a> {
    /// Create a fresh container writing into `tree` at `path`.
    #[must_use]
    pub fn new(tree: &'a mut Component, config: &'a EncoderConfig, path: CodingPath) -> Self {
        Self {
            tree,
            config,
            path,
            state: State::Fresh,
        }
    }

    /// Location this container writes to.
    #[must_use]
    pub const fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Returns `true` once an encode attempt has been made.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.state == State::Consumed
    }

    /// Encode `value` at this container's path.
    ///
    /// # Errors
    ///
    /// Fails on a second call, on absent values anywhere inside `value`, and
    /// on errors raised by strategies or by `value`'s `Serialize` impl.
    pub fn encode<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn consume(&mut self) -> Result<()> {
        if self.state == State::Consumed {
            return Err(Error::protocol_violation(&self.path));
        }
        self.state = State::Consumed;
        Ok(())
    }

    fn write(&mut self, text: impl Into<String>) -> Result<()> {
        trace!(path = %self.path, "writing scalar");
        self.tree
            .set_value(Component::Scalar(text.into()), self.path.segments());
        Ok(())
    }

    fn encode_scalar(&mut self, text: impl Into<String>) -> Result<()> {
        self.consume()?;
        self.write(text)
    }

    fn reject(&mut self, value: &'static str) -> Result<()> {
        self.consume()?;
        Err(Error::unsupported_value(value, &self.path))
    }

    /// Fresh container on the same tree and path, for composite fallbacks.
    fn fresh(&mut self) -> ValueEncoder<'_> {
        ValueEncoder::new(&mut *self.tree, self.config, self.path.clone())
    }

    fn keyed(&mut self) -> KeyedContainer<'_> {
        KeyedContainer::new(&mut *self.tree, self.config, self.path.clone())
    }

    fn ordered(&mut self) -> OrderedContainer<'_> {
        OrderedContainer::new(&mut *self.tree, self.config, self.path.clone())
    }

    fn encode_timestamp<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.consume()?;
        if matches!(self.config.date_encoding, DateEncoding::DeferredToDate) {
            return self.fresh().encode(value);
        }

        let text = encode_to_text(self.config, value, &self.path, "timestamp")?;
        let date = DateTime::parse_from_rfc3339(&text)
            .map_err(|_| Error::InvalidTimestamp {
                text: text.clone(),
                path: self.path.clone(),
            })?
            .with_timezone(&Utc);

        match self.config.date_encoding.encode(&date)? {
            Some(encoded) => self.write(encoded),
            None => self.fresh().encode(value),
        }
    }
}

impl<'a, 'b> ser::Serializer for &'b mut ValueEncoder<'a> {
    type Ok = ();
    type Error = Error;
    type SerializeSeq = OrderedContainer<'b>;
    type SerializeTuple = OrderedContainer<'b>;
    type SerializeTupleStruct = OrderedContainer<'b>;
    type SerializeTupleVariant = OrderedContainer<'b>;
    type SerializeMap = KeyedContainer<'b>;
    type SerializeStruct = KeyedContainer<'b>;
    type SerializeStructVariant = KeyedContainer<'b>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        let text = self.config.bool_encoding.encode(v);
        self.encode_scalar(text)
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.encode_scalar(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.encode_scalar(v)
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.encode_scalar(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.consume()?;
        match self.config.data_encoding.encode(v)? {
            Some(text) => self.write(text),
            None => {
                let mut elements = self.ordered();
                for byte in v {
                    elements.serialize_element(byte)?;
                }
                elements.end()
            }
        }
    }

    fn serialize_none(self) -> Result<()> {
        self.reject("none")
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.reject("unit")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.reject("unit struct")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.encode_scalar(variant)
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        name: &'static str,
        value: &T,
    ) -> Result<()> {
        if name == TIMESTAMP_TOKEN {
            self.encode_timestamp(value)
        } else {
            value.serialize(self)
        }
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()> {
        self.consume()?;
        self.keyed().encode(variant, value)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.consume()?;
        Ok(self.ordered())
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.consume()?;
        let path = self.path.appending(variant);
        Ok(OrderedContainer::new(&mut *self.tree, self.config, path))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.consume()?;
        Ok(self.keyed())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.consume()?;
        Ok(self.keyed())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.consume()?;
        let path = self.path.appending(variant);
        Ok(KeyedContainer::new(&mut *self.tree, self.config, path))
    }
}
