//! Incremental NSV reading.
//!
//! [`Reader`] is a resumable state machine: text arrives in chunks of any
//! size, split at any character boundary, and rows come out as soon as their
//! closing blank line has been seen. A row is never emitted early, because
//! the next chunk could still extend its last cell.
//!
//! ```rust
//! use nsv::Reader;
//!
//! let mut reader = Reader::new();
//! assert!(reader.feed("a\nb").is_empty());
//! assert_eq!(reader.feed("\n\nc"), vec![vec!["a", "b"]]);
//! assert_eq!(reader.finalize(), Some(vec!["c".to_string()]));
//! ```
//!
//! [`Rows`] drives a `Reader` from any [`BufRead`] source and yields rows one
//! at a time.

use crate::escape::unescape;
use crate::options::Backend;
use crate::{Error, Result, Row};
use std::collections::VecDeque;
use std::io::BufRead;
use std::mem;

/// Where the reader stands relative to the last line terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReaderState {
    /// At the start of a line: nothing buffered since the last terminator.
    /// A terminator here is an empty line and closes the pending row.
    AfterTerminator,
    /// Inside a cell line: a terminator here completes the cell.
    AccumulatingCell,
}

/// Resumable NSV decoder.
///
/// A session owns its buffers exclusively; use one `Reader` per input stream.
#[derive(Debug, Clone)]
pub struct Reader {
    cell: String,
    row: Row,
    backend: Backend,
    rows_emitted: usize,
}

impl Default for Reader {
    fn default() -> Self {
        Reader::with_backend(Backend::auto())
    }
}

impl Reader {
    /// Creates a reader using the process-wide backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with an explicit scanning backend.
    #[must_use]
    pub fn with_backend(backend: Backend) -> Self {
        Reader {
            cell: String::new(),
            row: Vec::new(),
            backend,
            rows_emitted: 0,
        }
    }

    /// Feeds a chunk and returns the rows it completed.
    pub fn feed(&mut self, chunk: &str) -> Vec<Row> {
        let mut rows = Vec::new();
        self.feed_into(chunk, &mut rows);
        rows
    }

    /// Feeds a chunk, appending completed rows to `out`.
    pub fn feed_into<E>(&mut self, chunk: &str, out: &mut E)
    where
        E: Extend<Row>,
    {
        match self.backend {
            Backend::Reference => self.scan_chars(chunk, out),
            Backend::Accelerated | Backend::Parallel => self.scan_lines(chunk, out),
        }
    }

    /// Ends the session and returns the dangling row, if any.
    ///
    /// Unterminated text is taken as the row's last cell, and the row is
    /// returned when it holds at least one cell. The reader is reset
    /// afterwards and can start a new session.
    pub fn finalize(&mut self) -> Option<Row> {
        if !self.cell.is_empty() {
            let cell = unescape(&self.cell).into_owned();
            self.row.push(cell);
            self.cell.clear();
        }
        let row = mem::take(&mut self.row);
        tracing::debug!(
            rows = self.rows_emitted + usize::from(!row.is_empty()),
            dangling = !row.is_empty(),
            "finalized NSV reader session"
        );
        self.rows_emitted = 0;
        if row.is_empty() {
            None
        } else {
            Some(row)
        }
    }

    /// Returns the current state of the line machine.
    #[must_use]
    pub fn state(&self) -> ReaderState {
        if self.cell.is_empty() {
            ReaderState::AfterTerminator
        } else {
            ReaderState::AccumulatingCell
        }
    }

    /// Number of completed cells waiting for their row to close.
    #[must_use]
    pub fn pending_cells(&self) -> usize {
        self.row.len()
    }

    /// Returns `true` when nothing is buffered, so `finalize` would return `None`.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.cell.is_empty() && self.row.is_empty()
    }

    /// Number of rows emitted since the session started.
    #[must_use]
    pub fn rows_emitted(&self) -> usize {
        self.rows_emitted
    }

    #[must_use]
    pub fn backend(&self) -> Backend {
        self.backend
    }

    fn scan_chars<E: Extend<Row>>(&mut self, chunk: &str, out: &mut E) {
        for ch in chunk.chars() {
            if ch == '\n' {
                self.end_line(out);
            } else {
                self.cell.push(ch);
            }
        }
    }

    fn scan_lines<E: Extend<Row>>(&mut self, chunk: &str, out: &mut E) {
        let mut rest = chunk;
        while let Some(pos) = memchr::memchr(b'\n', rest.as_bytes()) {
            let line = &rest[..pos];
            if self.cell.is_empty() {
                // Whole line is inside this chunk, skip the copy.
                if line.is_empty() {
                    self.emit_row(out);
                } else {
                    self.row.push(unescape(line).into_owned());
                }
            } else {
                self.cell.push_str(line);
                self.end_line(out);
            }
            rest = &rest[pos + 1..];
        }
        self.cell.push_str(rest);
    }

    fn end_line<E: Extend<Row>>(&mut self, out: &mut E) {
        if self.cell.is_empty() {
            self.emit_row(out);
        } else {
            let cell = unescape(&self.cell).into_owned();
            self.row.push(cell);
            self.cell.clear();
        }
    }

    fn emit_row<E: Extend<Row>>(&mut self, out: &mut E) {
        let row = mem::take(&mut self.row);
        tracing::trace!(cells = row.len(), "row complete");
        self.rows_emitted += 1;
        out.extend(Some(row));
    }
}

/// Iterator over the rows of an NSV stream.
///
/// Input is read one line at a time, so a multi-byte character is never
/// split, and each line is checked for UTF-8 before it reaches the decoder.
/// The first error ends iteration.
///
/// # Examples
///
/// ```rust
/// use nsv::Rows;
/// use std::io::Cursor;
///
/// let rows: Vec<_> = Rows::new(Cursor::new("a\nb\n\nc\n"))
///     .collect::<nsv::Result<_>>()
///     .unwrap();
/// assert_eq!(rows, vec![vec!["a", "b"], vec!["c"]]);
/// ```
pub struct Rows<R> {
    inner: R,
    reader: Reader,
    ready: VecDeque<Row>,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> Rows<R> {
    pub fn new(inner: R) -> Self {
        Rows::with_reader(inner, Reader::new())
    }

    /// Uses a caller-configured [`Reader`] for the session.
    pub fn with_reader(inner: R, reader: Reader) -> Self {
        Rows {
            inner,
            reader,
            ready: VecDeque::new(),
            buf: Vec::new(),
            done: false,
        }
    }

    /// Reads the next complete row.
    ///
    /// Same as [`Iterator::next`].
    pub fn next_row(&mut self) -> Option<Result<Row>> {
        loop {
            if let Some(row) = self.ready.pop_front() {
                return Some(Ok(row));
            }
            if self.done {
                return None;
            }

            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    return self.reader.finalize().map(Ok);
                }
                Ok(_) => match std::str::from_utf8(&self.buf) {
                    Ok(line) => self.reader.feed_into(line, &mut self.ready),
                    Err(e) => return Some(Err(self.fail(Error::from(e)))),
                },
                Err(e) => return Some(Err(self.fail(Error::from(e)))),
            }
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fail(&mut self, err: Error) -> Error {
        tracing::debug!(error = %err, "NSV row stream stopped");
        self.done = true;
        self.ready.clear();
        err
    }
}

impl<R: BufRead> Iterator for Rows<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row()
    }
}

impl<R: BufRead> std::iter::FusedIterator for Rows<R> {}
