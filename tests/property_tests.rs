//! Property-based tests for the codec guarantees
//!
//! The alphabets below are kept small and biased toward backslashes and
//! newlines so that escape runs and blank-line runs show up often.

use nsv::{
    dumps, escape, lift, loads, loads_with_options, unescape, unlift, Backend, NsvOptions, Reader,
    Table,
};
use proptest::prelude::*;
use proptest::sample::Index;

const BACKENDS: [Backend; 3] = [Backend::Reference, Backend::Accelerated, Backend::Parallel];

fn cell() -> impl Strategy<Value = String> {
    "[ab\\\\\n\r]{0,6}"
}

fn table() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec(cell(), 0..5), 0..8)
}

fn text() -> impl Strategy<Value = String> {
    "[ab\\\\\n]{0,48}"
}

fn feed_split(backend: Backend, text: &str, at: usize) -> Table {
    let mut reader = Reader::with_backend(backend);
    let mut rows = reader.feed(&text[..at]);
    rows.extend(reader.feed(&text[at..]));
    rows.extend(reader.finalize());
    rows
}

proptest! {
    #[test]
    fn prop_cell_escape_roundtrip(cell in cell()) {
        let escaped = escape(&cell);
        prop_assert!(!escaped.is_empty());
        prop_assert!(!escaped.contains('\n'));
        prop_assert_eq!(unescape(&escaped), cell.as_str());
    }

    #[test]
    fn prop_backslash_runs(run in 0usize..12, tail in "[a\n]{0,2}") {
        let cell = format!("{}{}", "\\".repeat(run), tail);
        let escaped = escape(&cell);
        prop_assert_eq!(unescape(&escaped), cell.as_str());
    }

    #[test]
    fn prop_table_roundtrip(table in table()) {
        prop_assert_eq!(loads(&dumps(&table)), table);
    }

    #[test]
    fn prop_canonical_text_roundtrip(table in table()) {
        let text = dumps(&table);
        prop_assert_eq!(dumps(loads(&text)), text);
    }

    #[test]
    fn prop_chunked_reader_matches_loads(text in text(), split in any::<Index>()) {
        let at = split.index(text.len() + 1);
        let expected = loads(&text);
        for backend in BACKENDS {
            prop_assert_eq!(feed_split(backend, &text, at), expected.clone());
        }
    }

    #[test]
    fn prop_backends_agree(text in text()) {
        let expected = loads_with_options(&text, &NsvOptions::new().with_backend(Backend::Reference));
        for backend in BACKENDS {
            let options = NsvOptions::new()
                .with_backend(backend)
                .with_parallel_threshold(0);
            prop_assert_eq!(loads_with_options(&text, &options), expected.clone());
        }
    }

    #[test]
    fn prop_lift_is_one_row(text in text()) {
        let lifted = lift(&text);
        prop_assert_eq!(loads(&lifted).len(), 1);
        prop_assert_eq!(unlift(&lifted).unwrap(), text);
    }

    #[test]
    fn prop_lift_twice(table in table()) {
        let inner = dumps(&table);
        let outer = lift(&lift(&inner));
        prop_assert_eq!(unlift(&unlift(&outer).unwrap()).unwrap(), inner);
    }
}
