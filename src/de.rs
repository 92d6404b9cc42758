//! NSV deserialization through serde.
//!
//! This module provides the [`Deserializer`] that reads NSV text into Rust
//! values shaped like tables.
//!
//! ## Overview
//!
//! The document is decoded with [`crate::loads_with_options`] and then
//! presented to serde as a sequence of rows, each row a sequence of string
//! cells. Targets follow the same shapes the serializer writes:
//!
//! - **Document**: `Vec<_>`, tuples, arrays
//! - **Row**: `Vec<String>`, tuples, tuple structs, structs (fields filled
//!   by position)
//! - **Cell**: `String`, `char`, unit enum variants by name, `Option<_>`
//!   (always `Some`), newtype wrappers
//!
//! A row with more cells than its target has fields is an error. Cells are
//! never parsed into numbers or booleans.
//!
//! ## Usage
//!
//! ```rust
//! use nsv::from_str;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Contact {
//!     name: String,
//!     email: String,
//! }
//!
//! let contacts: Vec<Contact> = from_str("Ada\nada@example.com\n\nLinus\n\\\n\n").unwrap();
//! assert_eq!(contacts[1], Contact { name: "Linus".into(), email: String::new() });
//! ```

use crate::codec::loads_with_options;
use crate::options::NsvOptions;
use crate::{Error, Result, Row};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// The NSV deserializer.
///
/// Created via [`Deserializer::from_str`] or [`Deserializer::with_options`].
pub struct Deserializer<'de> {
    input: &'de str,
    options: NsvOptions,
}

impl<'de> Deserializer<'de> {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(input: &'de str) -> Self {
        Deserializer::with_options(input, NsvOptions::default())
    }

    pub fn with_options(input: &'de str, options: NsvOptions) -> Self {
        Deserializer { input, options }
    }
}

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let table = loads_with_options(self.input, &self.options);
        let mut rows = RowsAccess::new(table);
        let value = visitor.visit_seq(&mut rows)?;
        rows.end("document", "rows")?;
        Ok(value)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

/// Walks a decoded table row by row.
struct RowsAccess {
    iter: std::vec::IntoIter<Row>,
    taken: usize,
}

impl RowsAccess {
    fn new(table: Vec<Row>) -> Self {
        RowsAccess {
            iter: table.into_iter(),
            taken: 0,
        }
    }

    fn end(&self, container: &str, items: &str) -> Result<()> {
        trailing(container, items, self.taken, self.iter.len())
    }
}

impl<'de> de::SeqAccess<'de> for RowsAccess {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(row) => {
                self.taken += 1;
                seed.deserialize(RowDeserializer::new(row)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct RowDeserializer {
    cells: Row,
}

impl RowDeserializer {
    fn new(cells: Row) -> Self {
        RowDeserializer { cells }
    }
}

impl<'de> de::Deserializer<'de> for RowDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut cells = CellsAccess::new(self.cells);
        let value = visitor.visit_seq(&mut cells)?;
        cells.end()?;
        Ok(value)
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

struct CellsAccess {
    iter: std::vec::IntoIter<String>,
    taken: usize,
}

impl CellsAccess {
    fn new(cells: Row) -> Self {
        CellsAccess {
            iter: cells.into_iter(),
            taken: 0,
        }
    }

    fn end(&self) -> Result<()> {
        trailing("row", "cells", self.taken, self.iter.len())
    }
}

impl<'de> de::SeqAccess<'de> for CellsAccess {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(cell) => {
                self.taken += 1;
                seed.deserialize(CellDeserializer::new(cell)).map(Some)
            }
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

fn trailing(container: &str, items: &str, taken: usize, left: usize) -> Result<()> {
    if left == 0 {
        Ok(())
    } else {
        Err(Error::custom(format!(
            "{} has {} {} but only {} were expected",
            container,
            taken + left,
            items,
            taken
        )))
    }
}

struct CellDeserializer {
    cell: String,
}

impl CellDeserializer {
    fn new(cell: String) -> Self {
        CellDeserializer { cell }
    }
}

impl<'de> de::Deserializer<'de> for CellDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.cell)
    }

    fn deserialize_char<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        let mut chars = self.cell.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => visitor.visit_char(ch),
            _ => Err(de::Error::invalid_value(
                de::Unexpected::Str(&self.cell),
                &"a single character",
            )),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_enum(self.cell.into_deserializer())
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}
