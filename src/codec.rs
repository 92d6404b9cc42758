//! Whole-document encoding and decoding.
//!
//! [`loads`] runs the same [`Reader`] used for streaming over the complete
//! input and then finalizes it, so a document that ends without a closing
//! blank line still yields its last row, exactly as a streaming session
//! would.
//!
//! ```rust
//! use nsv::{dumps, loads};
//!
//! let text = dumps([["a", "b"], ["", "x\ny"]]);
//! assert_eq!(text, "a\nb\n\n\\\nx\\ny\n\n");
//! assert_eq!(loads(&text), vec![vec!["a", "b"], vec!["", "x\ny"]]);
//! assert_eq!(loads("a\nb"), vec![vec!["a", "b"]]);
//! ```

use crate::escape::escape_into;
use crate::options::{Backend, NsvOptions};
use crate::reader::Reader;
use crate::Table;

/// Decodes a complete NSV string into a table.
///
/// Never fails: every string is valid NSV.
#[must_use]
pub fn loads(text: &str) -> Table {
    loads_with_options(text, &NsvOptions::default())
}

/// Decodes a complete NSV string with explicit options.
#[must_use]
pub fn loads_with_options(text: &str, options: &NsvOptions) -> Table {
    if options.backend == Backend::Parallel && text.len() >= options.parallel_threshold {
        return parallel::loads(text, options.parallel_threshold);
    }
    decode_complete(text, options.backend)
}

/// Feeds `text` to a fresh session and finalizes it.
///
/// This is the one decoding path for complete input.
pub(crate) fn decode_complete(text: &str, backend: Backend) -> Table {
    let mut reader = Reader::with_backend(backend);
    let mut table = Vec::new();
    reader.feed_into(text, &mut table);
    table.extend(reader.finalize());
    table
}

/// Encodes rows of cells as an NSV string.
///
/// Accepts any iterable of iterables of string-like cells.
///
/// ```rust
/// use nsv::dumps;
///
/// let table = vec![vec!["x".to_string()], vec![]];
/// assert_eq!(dumps(&table), "x\n\n\n");
/// assert_eq!(dumps(Vec::<Vec<String>>::new()), "");
/// ```
#[must_use]
pub fn dumps<I, R, C>(rows: I) -> String
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let mut out = String::new();
    dumps_into(rows, &mut out);
    out
}

/// Appends the NSV encoding of `rows` to `out`.
pub fn dumps_into<I, R, C>(rows: I, out: &mut String)
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    for row in rows {
        push_row(row, out);
    }
}

/// Appends one row: each escaped cell on its own line, then the blank separator line.
pub(crate) fn push_row<R, C>(row: R, out: &mut String)
where
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    for cell in row {
        escape_into(cell.as_ref(), out);
        out.push('\n');
    }
    out.push('\n');
}

/// Byte offsets just past each row separator that lies at or after the
/// chunk targets, so every piece starts at the beginning of a line.
///
/// A `'\n'` directly after another `'\n'` always ends a row, whatever came
/// before it, which lets the split happen without decoding.
#[cfg_attr(not(feature = "parallel"), allow(dead_code))]
pub(crate) fn row_boundaries(text: &str, pieces: usize) -> Vec<usize> {
    let bytes = text.as_bytes();
    let step = (bytes.len() / pieces.max(1)).max(1);
    let mut cuts = Vec::with_capacity(pieces);
    let mut from = step;
    while from < bytes.len() {
        match memchr::memmem::find(&bytes[from - 1..], b"\n\n") {
            Some(offset) => {
                let cut = from - 1 + offset + 2;
                if cut >= bytes.len() {
                    break;
                }
                cuts.push(cut);
                from = (cut + step).max(cut + 1);
            }
            None => break,
        }
    }
    cuts
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::{decode_complete, row_boundaries};
    use crate::options::Backend;
    use crate::Table;
    use rayon::prelude::*;

    pub(super) fn loads(text: &str, threshold: usize) -> Table {
        let pieces = (text.len() / threshold.max(1)).clamp(1, rayon::current_num_threads() * 4);
        let cuts = row_boundaries(text, pieces);
        if cuts.is_empty() {
            return decode_complete(text, Backend::Accelerated);
        }

        let mut segments = Vec::with_capacity(cuts.len() + 1);
        let mut start = 0;
        for cut in cuts {
            segments.push(&text[start..cut]);
            start = cut;
        }
        segments.push(&text[start..]);
        tracing::debug!(
            bytes = text.len(),
            segments = segments.len(),
            "decoding NSV in parallel"
        );

        let tables: Vec<Table> = segments
            .into_par_iter()
            .map(|segment| decode_complete(segment, Backend::Accelerated))
            .collect();
        tables.into_iter().flatten().collect()
    }
}

#[cfg(not(feature = "parallel"))]
mod parallel {
    use super::decode_complete;
    use crate::options::Backend;
    use crate::Table;

    pub(super) fn loads(text: &str, _threshold: usize) -> Table {
        decode_complete(text, Backend::Accelerated)
    }
}
