//! Incremental NSV writing.
//!
//! [`Writer`] sends each row to its sink as soon as it is written; nothing is
//! held back between rows.
//!
//! ```rust
//! use nsv::Writer;
//!
//! let mut writer = Writer::new(Vec::new());
//! writer.write_row(["a", "", "c"]).unwrap();
//! writer.write_row(Vec::<&str>::new()).unwrap();
//! assert_eq!(writer.into_inner(), b"a\n\\\nc\n\n\n");
//! ```

use crate::codec::push_row;
use crate::Result;
use std::io;

/// Streaming NSV encoder over an [`io::Write`] sink.
#[derive(Debug)]
pub struct Writer<W> {
    inner: W,
    line: String,
    rows_written: usize,
}

impl<W: io::Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Writer {
            inner,
            line: String::new(),
            rows_written: 0,
        }
    }

    /// Writes one row followed by its blank separator line.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the sink fails.
    pub fn write_row<R, C>(&mut self, row: R) -> Result<()>
    where
        R: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        self.line.clear();
        push_row(row, &mut self.line);
        self.inner.write_all(self.line.as_bytes())?;
        self.rows_written += 1;
        Ok(())
    }

    /// Writes every row in order.
    ///
    /// # Errors
    ///
    /// Stops at the first sink failure; rows before it have been written.
    pub fn write_rows<I, R, C>(&mut self, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        for row in rows {
            self.write_row(row)?;
        }
        Ok(())
    }

    /// Flushes the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Number of rows written so far.
    #[must_use]
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
