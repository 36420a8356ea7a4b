//! Ordered container for sequences and tuples.

use serde::Serialize;
use serde::ser;

use super::ValueEncoder;
use crate::{CodingPath, Component, EncoderConfig, Error, Result};

/// Encodes positional children below a coding path.
///
/// Elements are addressed by a running count, so writes only ever append.
#[derive(Debug)]
pub struct OrderedContainer<'a> {
    tree: &'a mut Component,
    config: &'a EncoderConfig,
    path: CodingPath,
    count: usize,
}

impl<'a> OrderedContainer<'a> {
    /// Create a container writing into `tree` below `path`.
    #[must_use]
    pub fn new(tree: &'a mut Component, config: &'a EncoderConfig, path: CodingPath) -> Self {
        Self {
            tree,
            config,
            path,
            count: 0,
        }
    }

    /// Location of the sequence node.
    #[must_use]
    pub const fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Number of elements encoded so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Encode `value` as the next element.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while encoding `value`.
    pub fn encode_next<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        let path = self.path.appending(self.count);
        self.count += 1;
        ValueEncoder::new(&mut *self.tree, self.config, path).encode(value)
    }
}

impl ser::SerializeSeq for OrderedContainer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode_next(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTuple for OrderedContainer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode_next(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleStruct for OrderedContainer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode_next(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl ser::SerializeTupleVariant for OrderedContainer<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<()> {
        self.encode_next(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}
