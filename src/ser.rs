//! NSV serialization through serde.
//!
//! This module provides the [`Serializer`] that writes Rust values shaped like
//! tables into NSV text.
//!
//! ## Overview
//!
//! Values map onto the three NSV levels:
//!
//! - **Document**: any sequence (`Vec`, slice, array, tuple)
//! - **Row**: a sequence, tuple, tuple struct, or struct. Struct field values
//!   are written in declaration order and field names are not written.
//! - **Cell**: `str`, `String`, `char`, unit enum variants (written as the
//!   variant name), and newtype wrappers around any of these
//!
//! Cells are never converted from other types: numbers, booleans, and `None`
//! are rejected with [`Error::UnsupportedType`].
//!
//! ## Usage
//!
//! ```rust
//! use nsv::to_string;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Contact {
//!     name: String,
//!     email: String,
//! }
//!
//! let contacts = vec![
//!     Contact { name: "Ada".into(), email: "ada@example.com".into() },
//!     Contact { name: "Linus".into(), email: String::new() },
//! ];
//! let nsv = to_string(&contacts).unwrap();
//! assert_eq!(nsv, "Ada\nada@example.com\n\nLinus\n\\\n\n");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use nsv::Serializer;
//! use serde::Serialize;
//!
//! let mut serializer = Serializer::new();
//! vec![vec!["a", "b"]].serialize(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), "a\nb\n\n");
//! ```

use crate::escape::escape_into;
use crate::{Error, Result};
use serde::ser::{self, Impossible, Serialize};

/// The NSV serializer.
///
/// Collects the document into an in-memory string; see [`crate::Writer`] for
/// row-at-a-time output.
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    pub fn new() -> Self {
        Serializer {
            output: String::with_capacity(256),
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

fn not_a_document(found: &str) -> Error {
    Error::unsupported_type(&format!(
        "an NSV document must be a sequence of rows, found {}",
        found
    ))
}

fn not_a_row(found: &str) -> Error {
    Error::unsupported_type(&format!(
        "an NSV row must be a sequence or struct of cells, found {}",
        found
    ))
}

fn not_a_cell(found: &str) -> Error {
    Error::unsupported_type(&format!("an NSV cell must be a string, found {}", found))
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = DocumentSerializer<'a>;
    type SerializeTuple = DocumentSerializer<'a>;
    type SerializeTupleStruct = DocumentSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Impossible<(), Error>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<()> {
        Err(not_a_document("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<()> {
        Err(not_a_document("i8"))
    }

    fn serialize_i16(self, _v: i16) -> Result<()> {
        Err(not_a_document("i16"))
    }

    fn serialize_i32(self, _v: i32) -> Result<()> {
        Err(not_a_document("i32"))
    }

    fn serialize_i64(self, _v: i64) -> Result<()> {
        Err(not_a_document("i64"))
    }

    fn serialize_u8(self, _v: u8) -> Result<()> {
        Err(not_a_document("u8"))
    }

    fn serialize_u16(self, _v: u16) -> Result<()> {
        Err(not_a_document("u16"))
    }

    fn serialize_u32(self, _v: u32) -> Result<()> {
        Err(not_a_document("u32"))
    }

    fn serialize_u64(self, _v: u64) -> Result<()> {
        Err(not_a_document("u64"))
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(not_a_document("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(not_a_document("f64"))
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(not_a_document("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<()> {
        Err(not_a_document("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(not_a_document("bytes"))
    }

    fn serialize_none(self) -> Result<()> {
        Err(not_a_document("None"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Err(not_a_document("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<()> {
        Err(not_a_document(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        Err(not_a_document(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_document(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(DocumentSerializer { ser: self })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(DocumentSerializer { ser: self })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(DocumentSerializer { ser: self })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_document(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_a_document("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(not_a_document(name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_document(variant))
    }
}

/// Writes the rows of a document.
pub struct DocumentSerializer<'a> {
    ser: &'a mut Serializer,
}

impl<'a> DocumentSerializer<'a> {
    fn push_row<T>(&mut self, row: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        row.serialize(RowSerializer {
            output: &mut self.ser.output,
        })
    }
}

impl<'a> ser::SerializeSeq for DocumentSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_row(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a> ser::SerializeTuple for DocumentSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_row(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<'a> ser::SerializeTupleStruct for DocumentSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_row(value)
    }

    fn end(self) -> Result<()> {
        Ok(())
    }
}

/// Serializes one row into the document output.
struct RowSerializer<'a> {
    output: &'a mut String,
}

impl<'a> ser::Serializer for RowSerializer<'a> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = CellsSerializer<'a>;
    type SerializeTuple = CellsSerializer<'a>;
    type SerializeTupleStruct = CellsSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = CellsSerializer<'a>;
    type SerializeStructVariant = Impossible<(), Error>;

    fn serialize_bool(self, _v: bool) -> Result<()> {
        Err(not_a_row("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<()> {
        Err(not_a_row("i8"))
    }

    fn serialize_i16(self, _v: i16) -> Result<()> {
        Err(not_a_row("i16"))
    }

    fn serialize_i32(self, _v: i32) -> Result<()> {
        Err(not_a_row("i32"))
    }

    fn serialize_i64(self, _v: i64) -> Result<()> {
        Err(not_a_row("i64"))
    }

    fn serialize_u8(self, _v: u8) -> Result<()> {
        Err(not_a_row("u8"))
    }

    fn serialize_u16(self, _v: u16) -> Result<()> {
        Err(not_a_row("u16"))
    }

    fn serialize_u32(self, _v: u32) -> Result<()> {
        Err(not_a_row("u32"))
    }

    fn serialize_u64(self, _v: u64) -> Result<()> {
        Err(not_a_row("u64"))
    }

    fn serialize_f32(self, _v: f32) -> Result<()> {
        Err(not_a_row("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<()> {
        Err(not_a_row("f64"))
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(not_a_row("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<()> {
        Err(not_a_row("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(not_a_row("bytes"))
    }

    fn serialize_none(self) -> Result<()> {
        Err(not_a_row("None"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        Err(not_a_row("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<()> {
        Err(not_a_row(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        Err(not_a_row(variant))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_row(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(CellsSerializer {
            output: self.output,
        })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(CellsSerializer {
            output: self.output,
        })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(CellsSerializer {
            output: self.output,
        })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_row(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_a_row("map"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(CellsSerializer {
            output: self.output,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_row(variant))
    }
}

/// Writes the cells of one row, then its separator line.
pub struct CellsSerializer<'a> {
    output: &'a mut String,
}

impl<'a> CellsSerializer<'a> {
    fn push_cell<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let cell = value.serialize(CellSerializer)?;
        escape_into(&cell, self.output);
        self.output.push('\n');
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.output.push('\n');
        Ok(())
    }
}

impl<'a> ser::SerializeSeq for CellsSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_cell(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeTuple for CellsSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_cell(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleStruct for CellsSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_cell(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

impl<'a> ser::SerializeStruct for CellsSerializer<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, _key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push_cell(value)
    }

    fn end(self) -> Result<()> {
        self.finish()
    }
}

/// Turns a single value into cell text.
struct CellSerializer;

impl ser::Serializer for CellSerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(not_a_cell("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String> {
        Err(not_a_cell("i8"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String> {
        Err(not_a_cell("i16"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String> {
        Err(not_a_cell("i32"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        Err(not_a_cell("i64"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String> {
        Err(not_a_cell("u8"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String> {
        Err(not_a_cell("u16"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String> {
        Err(not_a_cell("u32"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        Err(not_a_cell("u64"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(not_a_cell("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(not_a_cell("f64"))
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(not_a_cell("bytes"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(not_a_cell("None"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(not_a_cell("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        Err(not_a_cell(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(not_a_cell(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(not_a_cell("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(not_a_cell("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(not_a_cell(name))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(not_a_cell(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(not_a_cell("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(not_a_cell(name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(not_a_cell(variant))
    }
}

#[cfg(test)]
mod tests {
    use crate::{dumps, to_string, Error};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Pair(String, char);

    #[derive(Serialize)]
    enum Status {
        Active,
        Retired,
    }

    #[derive(Serialize)]
    struct Employee {
        name: String,
        status: Status,
        note: Option<String>,
    }

    #[test]
    fn test_matches_dumps() {
        let table = vec![vec!["a", "", "x\ny"], vec![], vec!["\\"]];
        assert_eq!(to_string(&table).unwrap(), dumps(&table));
    }

    #[test]
    fn test_tuple_rows() {
        let rows = vec![("a", 'b'), ("", 'c')];
        assert_eq!(to_string(&rows).unwrap(), "a\nb\n\n\\\nc\n\n");
        let pairs = [Pair("k".into(), 'v')];
        assert_eq!(to_string(&pairs).unwrap(), "k\nv\n\n");
    }

    #[test]
    fn test_struct_rows_write_values_in_order() {
        let staff = vec![
            Employee {
                name: "Ada".into(),
                status: Status::Active,
                note: Some("lead".into()),
            },
            Employee {
                name: "Bob".into(),
                status: Status::Retired,
                note: Some(String::new()),
            },
        ];
        assert_eq!(
            to_string(&staff).unwrap(),
            "Ada\nActive\nlead\n\nBob\nRetired\n\\\n\n"
        );
    }

    #[test]
    fn test_rejects_non_string_cells() {
        let rows = vec![vec![1, 2]];
        assert!(matches!(to_string(&rows), Err(Error::UnsupportedType(_))));
        let missing = vec![vec![None::<String>]];
        assert!(matches!(to_string(&missing), Err(Error::UnsupportedType(_))));
    }

    #[test]
    fn test_rejects_non_sequence_document() {
        assert!(matches!(to_string("text"), Err(Error::UnsupportedType(_))));
        assert!(matches!(to_string(&vec!["flat"]), Err(Error::UnsupportedType(_))));
    }
}
