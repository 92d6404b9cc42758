//! Cell escaping.
//!
//! Every cell is written as exactly one non-empty line. Two rewrites make that
//! possible:
//!
//! - the empty cell is written as a lone backslash, because an empty line is
//!   reserved for the row separator;
//! - backslashes are doubled and embedded newlines become the two characters
//!   `\n`, so the line never contains a raw terminator.
//!
//! ```rust
//! use nsv::{escape, unescape};
//!
//! assert_eq!(escape(""), "\\");
//! assert_eq!(escape("\\x"), "\\\\x");
//! assert_eq!(escape("a\nb"), "a\\nb");
//! assert_eq!(unescape("\\"), "");
//! assert_eq!(unescape("a\\nb"), "a\nb");
//! ```
//!
//! [`unescape`] accepts every line. Unknown escape pairs such as `\t` and a
//! dangling trailing backslash are kept verbatim.

use std::borrow::Cow;

/// Line that encodes the empty cell.
pub const EMPTY_CELL: &str = "\\";

/// Escapes a cell into its single-line form.
///
/// Returns a borrowed value when the cell needs no rewriting.
#[must_use]
pub fn escape(cell: &str) -> Cow<'_, str> {
    if cell.is_empty() {
        return Cow::Borrowed(EMPTY_CELL);
    }
    if !needs_escape(cell) {
        return Cow::Borrowed(cell);
    }
    let mut line = String::with_capacity(cell.len() + 8);
    push_escaped(cell, &mut line);
    Cow::Owned(line)
}

/// Appends the escaped form of `cell` to `out`.
///
/// Equivalent to `out.push_str(&escape(cell))` without the intermediate allocation.
#[inline]
pub fn escape_into(cell: &str, out: &mut String) {
    if cell.is_empty() {
        out.push_str(EMPTY_CELL);
    } else if !needs_escape(cell) {
        out.push_str(cell);
    } else {
        push_escaped(cell, out);
    }
}

/// Decodes a line produced by [`escape`] back into the cell.
#[must_use]
pub fn unescape(line: &str) -> Cow<'_, str> {
    if line == EMPTY_CELL {
        return Cow::Borrowed("");
    }
    if memchr::memchr(b'\\', line.as_bytes()).is_none() {
        return Cow::Borrowed(line);
    }

    let mut cell = String::with_capacity(line.len());
    let mut chars = line.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            cell.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => cell.push('\n'),
            Some('\\') => cell.push('\\'),
            Some(other) => {
                cell.push('\\');
                cell.push(other);
            }
            None => cell.push('\\'),
        }
    }
    Cow::Owned(cell)
}

/// Escapes every cell of every row.
#[must_use]
pub fn escape_rows<I, R, C>(rows: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| escape(cell.as_ref()).into_owned())
                .collect()
        })
        .collect()
}

/// Unescapes every line of every row.
#[must_use]
pub fn unescape_rows<I, R, C>(rows: I) -> Vec<Vec<String>>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|line| unescape(line.as_ref()).into_owned())
                .collect()
        })
        .collect()
}

#[inline]
fn needs_escape(cell: &str) -> bool {
    memchr::memchr2(b'\\', b'\n', cell.as_bytes()).is_some()
}

fn push_escaped(cell: &str, out: &mut String) {
    for ch in cell.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        assert_eq!(escape(""), "\\");
        assert_eq!(unescape("\\"), "");
    }

    #[test]
    fn test_no_special_chars_borrows() {
        assert!(matches!(escape("hello"), Cow::Borrowed("hello")));
        assert!(matches!(unescape("hello"), Cow::Borrowed("hello")));
    }

    #[test]
    fn test_backslashes() {
        assert_eq!(escape("\\"), "\\\\");
        assert_eq!(escape("a\\b"), "a\\\\b");
        assert_eq!(escape("\\\\"), "\\\\\\\\");
        assert_eq!(escape("\\\\\\"), "\\\\\\\\\\\\");
    }

    #[test]
    fn test_newlines() {
        assert_eq!(escape("\n"), "\\n");
        assert_eq!(escape("a\nb"), "a\\nb");
        assert_eq!(escape("\n\n\n"), "\\n\\n\\n");
    }

    #[test]
    fn test_backslash_and_newline_combinations() {
        assert_eq!(escape("\\n"), "\\\\n");
        assert_eq!(escape("\\\n"), "\\\\\\n");
        assert_eq!(escape("\\\n\\\n"), "\\\\\\n\\\\\\n");
        assert_eq!(escape("\\a\nb\\"), "\\\\a\\nb\\\\");
        assert_eq!(escape("\n\\\n\\"), "\\n\\\\\\n\\\\");
    }

    #[test]
    fn test_leading_backslash_gains_one() {
        let escaped = escape("\\path");
        assert_eq!(escaped, "\\\\path");
        assert_eq!(escaped.len(), "\\path".len() + 1);
    }

    #[test]
    fn test_unescape_unknown_sequences_pass_through() {
        assert_eq!(unescape("a\\tb"), "a\\tb");
        assert_eq!(unescape("trailing\\"), "trailing\\");
        assert_eq!(unescape("\\x"), "\\x");
    }

    #[test]
    fn test_roundtrip() {
        let cases = [
            "",
            "\\",
            "\n",
            "\\n",
            "\\\n",
            "a\\b\nc",
            "\\\\\\",
            "\n\n\n",
            "test\\ \n end",
            "ünïcødé\n✓",
        ];
        for cell in cases {
            assert_eq!(unescape(&escape(cell)), cell, "cell {:?}", cell);
        }
    }

    #[test]
    fn test_backslash_runs_roundtrip() {
        for n in 0..32 {
            let cell = "\\".repeat(n);
            assert_eq!(unescape(&escape(&cell)), cell);
        }
    }

    #[test]
    fn test_escaped_line_is_never_empty_nor_multiline() {
        for cell in ["", "\n", "\n\n", "x\n", "\\"] {
            let line = escape(cell);
            assert!(!line.is_empty());
            assert!(!line.contains('\n'));
        }
    }

    #[test]
    fn test_escape_into_matches_escape() {
        let mut out = String::new();
        for cell in ["", "plain", "a\\b", "x\ny"] {
            out.clear();
            escape_into(cell, &mut out);
            assert_eq!(out, escape(cell));
        }
    }

    #[test]
    fn test_rows_mapping() {
        let rows = vec![vec!["", "g"], vec!["a\nb"]];
        let escaped = escape_rows(&rows);
        assert_eq!(escaped, vec![vec!["\\", "g"], vec!["a\\nb"]]);
        assert_eq!(unescape_rows(&escaped), rows);
    }
}
