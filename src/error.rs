//! Error types for NSV reading and writing.
//!
//! The NSV grammar is total: every string decodes to some table, so the codec
//! itself never fails. Errors only come from the edges of the crate:
//!
//! - **I/O Errors**: reading from or writing to a stream failed
//! - **Encoding Errors**: bytes handed to the crate were not valid UTF-8
//! - **Shape Errors**: `unlift` was given a document that is not a single row
//! - **Serde Errors**: a value could not be mapped onto rows of string cells
//!
//! I/O and UTF-8 errors carry the original error value unmodified.
//!
//! ## Examples
//!
//! ```rust
//! use nsv::{unlift, Error};
//!
//! let result = unlift("a\n\nb\n\n");
//! assert!(matches!(result, Err(Error::NotSingleRow { rows: 2 })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors surfaced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 in NSV input: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// `unlift` input did not decode to exactly one row
    #[error("Expected a lifted document with exactly one row, found {rows} rows")]
    NotSingleRow { rows: usize },

    /// Value shape that has no NSV representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error for values that cannot be written as NSV cells or rows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsv::Error;
    ///
    /// let err = Error::unsupported_type("i32 cell");
    /// assert!(err.to_string().contains("i32 cell"));
    /// ```
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use nsv::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
