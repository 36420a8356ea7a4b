//! Keyed container for structs, maps, and struct variants.

use serde::Serialize;
use serde::ser;

use super::{ValueEncoder, encode_to_text};
use crate::{CodingPath, Component, EncoderConfig, Error, Result};

/// Field name `serde_json` uses for arbitrary-precision numbers.
///
/// A number serialized this way is a one-field struct; its text is written
/// at the struct's own path so it stays a single scalar.
const NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Encodes named children below a coding path.
#[derive(Debug)]
pub struct KeyedContainer<'a> {
    tree: &'a mut Component,
    config: &'a EncoderConfig,
    path: CodingPath,
    pending_key: Option<String>,
}

impl<'a> KeyedContainer<'a> {
    /// Create a container writing into `tree` below `path`.
    #[must_use]
    pub fn new(tree: &'a mut Component, config: &'a EncoderConfig, path: CodingPath) -> Self {
        Self {
            tree,
            config,
            path,
            pending_key: None,
        }
    }

    /// Location of the keyed node.
    #[must_use]
    pub const fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Encode `value` under `name`.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while encoding `value`.
    pub fn encode<T: ?Sized + Serialize>(&mut self, name: &str, value: &T) -> Result<()> {
        let path = self.path.appending(name);
        ValueEncoder::new(&mut *self.tree, self.config, path).encode(value)
    }

    fn encode_field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<()> {
        if key == NUMBER_TOKEN {
            ValueEncoder::new(&mut *self.tree, self.config, self.path.clone()).encode(value)
        } else {
            self.encode(key, value)
        }
    }
}

impl ser::SerializeStruct for KeyedContainer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.encode_field(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeStructVariant for KeyedContainer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.encode(key, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeMap for KeyedContainer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<()> {
        let name = encode_to_text(self.config, key, &self.path, "map key")?;
        self.pending_key = Some(name);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let Some(name) = self.pending_key.take() else {
            return Err(Error::custom("map value serialized before its key"));
        };
        self.encode(&name, value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
