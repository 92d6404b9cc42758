use nsv::{dumps, loads, nsv, Backend, Reader, ReaderState, Rows, Writer};
use std::io::{BufReader, Cursor};

fn read_all(text: &str) -> Vec<Vec<String>> {
    Rows::new(Cursor::new(text.as_bytes().to_vec()))
        .collect::<nsv::Result<_>>()
        .unwrap()
}

fn feed_chunks(reader: &mut Reader, chunks: &[&str]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for chunk in chunks {
        rows.extend(reader.feed(chunk));
    }
    rows.extend(reader.finalize());
    rows
}

#[test]
fn test_complete_rows_only() {
    assert_eq!(read_all("a\nb\n\nc\nd\n\n"), nsv![["a", "b"], ["c", "d"]]);
}

#[test]
fn test_incomplete_row_at_eof() {
    assert_eq!(read_all("a\nb\n\nc\nd"), nsv![["a", "b"], ["c", "d"]]);
    assert_eq!(read_all("x\ny\nz"), nsv![["x", "y", "z"]]);
}

#[test]
fn test_empty_rows() {
    assert_eq!(
        read_all("\n\na\n\n\n\nb\n\n"),
        nsv![[], [], ["a"], [], [], ["b"]]
    );
    assert_eq!(read_all("\n\n\n\n"), nsv![[], [], [], []]);
    assert!(read_all("").is_empty());
}

#[test]
fn test_escaped_content() {
    assert_eq!(
        read_all("normal\n\\\n\nline1\\nline2\nback\\\\slash\n\n"),
        nsv![["normal", ""], ["line1\nline2", "back\\slash"]]
    );
}

#[test]
fn test_incremental_iteration() {
    let mut rows = Rows::new(Cursor::new("row1a\nrow1b\n\nrow2a\nrow2b\n\nrow3a\nrow3b\n\n"));
    assert_eq!(rows.next_row().unwrap().unwrap(), vec!["row1a", "row1b"]);
    assert_eq!(rows.next_row().unwrap().unwrap(), vec!["row2a", "row2b"]);
    assert_eq!(rows.next_row().unwrap().unwrap(), vec!["row3a", "row3b"]);
    assert!(rows.next_row().is_none());
}

#[test]
fn test_tiny_buffer_source() {
    let text = dumps(nsv![["a long first cell", ""], [], ["x\ny", "\\z"]]);
    let source = BufReader::with_capacity(2, Cursor::new(text.clone().into_bytes()));
    let rows: Vec<Vec<String>> = Rows::new(source).collect::<nsv::Result<_>>().unwrap();
    assert_eq!(rows, loads(&text));
}

#[test]
fn test_large_dataset_streaming() {
    let mut writer = Writer::new(Vec::new());
    for i in 0..10_000 {
        writer
            .write_row([format!("row{}_cell1", i), format!("row{}_cell2", i)])
            .unwrap();
    }
    assert_eq!(writer.rows_written(), 10_000);

    let mut count = 0;
    for row in Rows::new(Cursor::new(writer.into_inner())) {
        let row = row.unwrap();
        assert_eq!(row.len(), 2);
        assert!(row[0].starts_with("row"));
        count += 1;
    }
    assert_eq!(count, 10_000);
}

#[test]
fn test_writer_reader_roundtrip() {
    let original = nsv![
        ["normal", "text"],
        ["", "empty", ""],
        ["multi\nline", "value"],
        ["back\\slash", "end"],
        [],
        ["a"],
        [],
        [],
    ];
    let mut writer = Writer::new(Vec::new());
    writer.write_rows(&original).unwrap();
    writer.flush().unwrap();
    assert_eq!(read_all(std::str::from_utf8(writer.get_ref()).unwrap()), original);
}

#[test]
fn test_loads_and_reader_agree() {
    let cases = [
        "a\nb\n\n",
        "a\nb\n\nc\nd\n\n",
        "\n\na\n\n\n\nb\n\n",
        "",
        "\n\n",
        "a\nb",
        "a\nb\n\nc\nd",
        "\\",
        "tail\\",
    ];
    for text in cases {
        for backend in [Backend::Reference, Backend::Accelerated, Backend::Parallel] {
            let mut reader = Reader::with_backend(backend);
            assert_eq!(feed_chunks(&mut reader, &[text]), loads(text), "text {:?}", text);
        }
        assert_eq!(read_all(text), loads(text), "text {:?}", text);
    }
}

#[test]
fn test_every_split_point() {
    let text = "a\\\\b\nc\\nd\n\n\\\n\n\nlast";
    let expected = loads(text);
    for backend in [Backend::Reference, Backend::Accelerated] {
        for i in 0..=text.len() {
            for j in i..=text.len() {
                let mut reader = Reader::with_backend(backend);
                let rows = feed_chunks(&mut reader, &[&text[..i], &text[i..j], &text[j..]]);
                assert_eq!(rows, expected, "split at {} and {}", i, j);
            }
        }
    }
}

#[test]
fn test_state_transitions() {
    let mut reader = Reader::new();
    assert_eq!(reader.state(), ReaderState::AfterTerminator);
    reader.feed("ab");
    assert_eq!(reader.state(), ReaderState::AccumulatingCell);
    reader.feed("\n");
    assert_eq!(reader.state(), ReaderState::AfterTerminator);
    assert_eq!(reader.pending_cells(), 1);
    assert!(!reader.is_clean());
    assert_eq!(reader.feed("\n"), nsv![["ab"]]);
    assert!(reader.is_clean());
}

#[test]
fn test_independent_sessions() {
    let mut left = Reader::new();
    let mut right = Reader::new();
    left.feed("l1\n");
    right.feed("r1\nr2\n\n");
    assert_eq!(left.feed("\n"), nsv![["l1"]]);
    assert_eq!(right.finalize(), None);
}
