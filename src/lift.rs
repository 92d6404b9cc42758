//! Dimension folding.
//!
//! [`lift`] takes the raw lines of an NSV document and writes them as the
//! cells of a single new row, so the result is again an NSV document, with one
//! dimension folded away. [`unlift`] reverses it. Lifting again escapes the
//! escapes of the previous level; every backslash doubles at each level and
//! each level stays decodable.
//!
//! ```rust
//! use nsv::{dumps, lift, loads, unlift};
//!
//! let inner = dumps(vec![vec!["a", "b"], vec!["c"]]);
//! let outer = lift(&inner);
//! assert_eq!(loads(&outer), vec![vec!["a", "b", "", "c", "", ""]]);
//! assert_eq!(unlift(&outer).unwrap(), inner);
//! ```
//!
//! The sequence-level operators [`spill`] and [`unspill`] do the same folding
//! on in-memory sequences without any escaping; [`lift_rows`] and
//! [`unlift_rows`] combine them with cell escaping.

use crate::codec::{dumps, loads};
use crate::escape::{escape_rows, unescape_rows};
use crate::{Error, Result, Table};
use std::iter;

/// Folds an NSV document into a one-row NSV document whose cells are its lines.
///
/// The input is split on every `'\n'`, keeping the empty piece after a
/// trailing terminator, so joining the cells with `'\n'` gives the input back.
#[must_use]
pub fn lift(text: &str) -> String {
    dumps(iter::once(text.split('\n')))
}

/// Recovers the document folded by [`lift`].
///
/// # Errors
///
/// Returns [`Error::NotSingleRow`] when `text` does not decode to exactly one
/// row, which no output of [`lift`] does.
pub fn unlift(text: &str) -> Result<String> {
    let mut table = loads(text);
    if table.len() != 1 {
        return Err(Error::NotSingleRow { rows: table.len() });
    }
    let lines = table.swap_remove(0);
    Ok(lines.join("\n"))
}

/// Collapses one dimension by writing `marker` after every inner sequence.
///
/// Purely structural: items are not escaped, so `marker` must not occur among
/// them for [`unspill`] to recover the input.
///
/// ```rust
/// use nsv::spill;
///
/// assert_eq!(spill(vec![vec![1, 2], vec![], vec![3]], 0), vec![1, 2, 0, 0, 3, 0]);
/// ```
#[must_use]
pub fn spill<I, R, T>(seqseq: I, marker: T) -> Vec<T>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Clone,
{
    let mut seq = Vec::new();
    for inner in seqseq {
        seq.extend(inner);
        seq.push(marker.clone());
    }
    seq
}

/// Recovers a dimension by splitting at every `marker`.
///
/// Items after the last marker form an unterminated group and are dropped.
///
/// ```rust
/// use nsv::unspill;
///
/// assert_eq!(unspill(vec![1, 2, 0, 3, 0, 4], &0), vec![vec![1, 2], vec![3]]);
/// ```
#[must_use]
pub fn unspill<I, T>(seq: I, marker: &T) -> Vec<Vec<T>>
where
    I: IntoIterator<Item = T>,
    T: PartialEq,
{
    let mut seqseq = Vec::new();
    let mut inner = Vec::new();
    for item in seq {
        if item == *marker {
            seqseq.push(std::mem::take(&mut inner));
        } else {
            inner.push(item);
        }
    }
    seqseq
}

/// Escapes a table and flattens it into lines, one empty line after each row.
///
/// Writing each returned line followed by `'\n'` produces [`dumps`] output.
#[must_use]
pub fn lift_rows<I, R, C>(rows: I) -> Vec<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    spill(escape_rows(rows), String::new())
}

/// Inverse of [`lift_rows`].
#[must_use]
pub fn unlift_rows<I, C>(lines: I) -> Table
where
    I: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let lines = lines.into_iter().map(|line| line.as_ref().to_string());
    unescape_rows(unspill(lines, &String::new()))
}
