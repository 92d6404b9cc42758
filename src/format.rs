//! NSV Format Reference
//!
//! This module documents the NSV (Newline-Separated Values) wire format as
//! implemented by this library. The format is versionless: text written by
//! any conforming implementation must read back identically in any other.
//!
//! # Overview
//!
//! NSV stores a table (rows of string cells) as plain lines. It exists for
//! the cases where CSV is awkward: diffs stay line-oriented, and escaping
//! never depends on quoting state.
//!
//! ## Design Philosophy
//!
//! - **One cell per line**: a change to one cell is a one-line diff
//! - **Local escaping**: every line decodes on its own, without context
//! - **Total grammar**: every string is a valid document; nothing is rejected
//! - **Foldable**: a document can be stored as a single row of another document
//!
//! # Core Syntax
//!
//! ```text
//! name            <- cell
//! email           <- cell
//!                 <- empty line: end of row
//! Ada             <- cell
//! \               <- empty cell
//!                 <- end of row
//! ```
//!
//! **Rules**:
//! - The line terminator is `\n` only. `\r` is ordinary cell content.
//! - Every cell is written as one line followed by `\n`.
//! - Every row, including the last one, is followed by one empty line.
//! - A row with no cells is just the empty line.
//! - An empty table is the empty string.
//!
//! # Escaping
//!
//! | Cell content | Line |
//! |--------------|------|
//! | empty cell | `\` |
//! | `\` | `\\` |
//! | newline | `\n` (backslash, letter n) |
//! | anything else | unchanged |
//!
//! The escape is applied character by character, so `a\b` is written
//! `a\\b` and a cell starting with a backslash gains exactly one more in
//! front. An escaped line is never empty and never contains a raw newline.
//!
//! When decoding, `\\` and `\n` are the only escape pairs. Any other
//! backslash pair, and a backslash at the end of a line, is kept as written.
//!
//! # Decoding Rules
//!
//! - A `\n` with nothing since the previous terminator (or at the very start
//!   of the input) ends the current row, even if the row has no cells.
//! - Any other `\n` ends a cell.
//! - At end of input, unterminated text becomes the last cell, and a row
//!   with at least one cell is emitted even without its closing empty line.
//!
//! ```text
//! ""          -> []
//! "\n"        -> [[]]
//! "\n\na\n"   -> [[], [], ["a"]]
//! "a\nb"      -> [["a", "b"]]
//! ```
//!
//! # Lift
//!
//! `lift` splits a document into its raw lines (keeping the empty piece after
//! a final terminator) and writes them as the cells of a single row:
//!
//! ```text
//! a               a
//! b               b
//!        lift     \
//! c      ---->    c
//!                 \
//!                 \
//!
//! ```
//!
//! Each level escapes the previous level's backslashes again, so deeply
//! lifted text grows, but every level decodes back with `unlift`.
//!
//! # Limitations
//!
//! - **Types**: every cell is a string; numbers and booleans are not parsed
//! - **Comments**: not supported in the format
//! - **Encoding**: input must already be valid UTF-8 text

// This module contains only documentation; no implementation code
