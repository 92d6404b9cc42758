//! # nsv
//!
//! Reading and writing NSV (Newline-Separated Values), a line-oriented format
//! for tables of string cells.
//!
//! ## What is NSV?
//!
//! NSV writes one cell per line and ends every row with an empty line. Only
//! two things are escaped, backslashes and newlines, plus the empty cell,
//! which is written as a lone backslash. Diffs stay clean and every line can
//! be decoded on its own.
//!
//! ## Key Features
//!
//! - **Total Grammar**: Every string decodes; the codec itself never fails
//! - **Streaming**: [`Reader`] accepts input in chunks of any size and emits
//!   rows as soon as they are complete
//! - **Lift/Unlift**: Fold a whole document into a single row and back, for
//!   nesting documents to any depth
//! - **Serde Compatible**: Write and read `Vec<MyRow>` via `#[derive(Serialize, Deserialize)]`
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nsv = "0.1"
//! ```
//!
//! ### Whole Documents
//!
//! ```rust
//! use nsv::{dumps, loads};
//!
//! let text = dumps(vec![vec!["id", "name"], vec!["1", ""], vec!["2", "multi\nline"]]);
//! assert_eq!(text, "id\nname\n\n1\n\\\n\n2\nmulti\\nline\n\n");
//!
//! let table = loads(&text);
//! assert_eq!(table[2][1], "multi\nline");
//! ```
//!
//! ### Streaming
//!
//! ```rust
//! use nsv::{Reader, Writer};
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_row(["a", "b"]).unwrap();
//! writer.write_row(["c"]).unwrap();
//! let bytes = writer.into_inner();
//! let text = std::str::from_utf8(&bytes).unwrap();
//!
//! let mut reader = Reader::new();
//! let mut rows = Vec::new();
//! for chunk in text.as_bytes().chunks(3) {
//!     rows.extend(reader.feed(std::str::from_utf8(chunk).unwrap()));
//! }
//! rows.extend(reader.finalize());
//! assert_eq!(rows, vec![vec!["a", "b"], vec!["c"]]);
//! ```
//!
//! ### Lifting
//!
//! ```rust
//! use nsv::{dumps, lift, loads, unlift};
//!
//! let matrix = dumps(vec![vec!["1", "2"], vec!["3", "4"]]);
//! let folded = lift(&matrix);
//! assert_eq!(loads(&folded).len(), 1);
//! assert_eq!(unlift(&folded).unwrap(), matrix);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Decoding**: O(n), single pass; the default backend jumps between line
//!   terminators with `memchr`
//! - **Parallel decoding**: with the `parallel` feature, large inputs are split
//!   at row boundaries and decoded on the rayon pool
//! - **Encoding**: O(n); cells without backslashes or newlines are copied as-is
//!
//! ## Format Reference
//!
//! See the [`format`] module for the complete wire format.

pub mod codec;
pub mod de;
pub mod error;
pub mod escape;
pub mod format;
pub mod lift;
pub mod macros;
pub mod options;
pub mod reader;
pub mod ser;
pub mod writer;

pub use codec::{dumps, dumps_into, loads, loads_with_options};
pub use de::Deserializer;
pub use error::{Error, Result};
pub use escape::{escape, escape_into, escape_rows, unescape, unescape_rows};
pub use lift::{lift, lift_rows, spill, unlift, unlift_rows, unspill};
pub use options::{Backend, NsvOptions};
pub use reader::{Reader, ReaderState, Rows};
pub use ser::Serializer;
pub use writer::Writer;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io;

/// A single cell value.
pub type Cell = String;

/// An ordered sequence of cells.
pub type Row = Vec<Cell>;

/// An ordered sequence of rows.
pub type Table = Vec<Row>;

/// Reads a complete NSV document from an I/O source.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let table = nsv::load(Cursor::new("a\nb\n\n")).unwrap();
/// assert_eq!(table, vec![vec!["a", "b"]]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Utf8`] if the bytes
/// are not valid UTF-8.
pub fn load<R>(mut reader: R) -> Result<Table>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = std::str::from_utf8(&bytes)?;
    Ok(loads(text))
}

/// Writes rows to an I/O sink as NSV.
///
/// # Examples
///
/// ```rust
/// let mut out = Vec::new();
/// nsv::dump(vec![vec!["a", "b"]], &mut out).unwrap();
/// assert_eq!(out, b"a\nb\n\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn dump<I, R, C, W>(rows: I, writer: W) -> Result<()>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
    W: io::Write,
{
    let mut writer = Writer::new(writer);
    writer.write_rows(rows)?;
    writer.flush()
}

/// Serialize any `T: Serialize` shaped as rows of string cells to an NSV string.
///
/// # Examples
///
/// ```rust
/// use nsv::to_string;
///
/// let rows = vec![("alice", "admin"), ("bob", "")];
/// assert_eq!(to_string(&rows).unwrap(), "alice\nadmin\n\nbob\n\\\n\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] if the value is not a sequence of rows
/// of string cells.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new();
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize any `T: Serialize` to a writer in NSV format.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(mut writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let nsv_string = to_string(value)?;
    writer.write_all(nsv_string.as_bytes())?;
    Ok(())
}

/// Deserialize an instance of type `T` from a string of NSV text.
///
/// # Examples
///
/// ```rust
/// use nsv::from_str;
///
/// let rows: Vec<(String, String)> = from_str("alice\nadmin\n\nbob\n\\\n\n").unwrap();
/// assert_eq!(rows[1], ("bob".to_string(), String::new()));
/// ```
///
/// # Errors
///
/// Returns an error if the rows cannot be mapped onto `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    let mut deserializer = Deserializer::from_str(s);
    T::deserialize(&mut deserializer)
}

/// Deserialize an instance of type `T` from an I/O stream of NSV.
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid UTF-8, or the
/// rows cannot be mapped onto `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    from_slice(&bytes)
}

/// Deserialize an instance of type `T` from bytes of NSV text.
///
/// # Errors
///
/// Returns [`Error::Utf8`] if the bytes are not valid UTF-8, or an error if
/// the rows cannot be mapped onto `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    let s = std::str::from_utf8(v)?;
    from_str(s)
}
