//! Writing rows to a file-like sink and reading them back incrementally.
//!
//! Run with: cargo run --example streaming

use nsv::{Reader, Rows, Writer};
use std::error::Error;
use std::io::Cursor;

fn main() -> Result<(), Box<dyn Error>> {
    let mut writer = Writer::new(Vec::new());
    writer.write_row(["timestamp", "level", "message"])?;
    for i in 0..5 {
        let message = format!("event {}\nwith detail", i);
        writer.write_row([format!("2024-01-0{}", i + 1).as_str(), "info", message.as_str()])?;
    }
    writer.flush()?;
    println!("Wrote {} rows", writer.rows_written());
    let bytes = writer.into_inner();

    println!("\nReading with Rows:");
    for row in Rows::new(Cursor::new(&bytes)) {
        println!("  {:?}", row?);
    }

    println!("\nFeeding 7-byte chunks into a Reader:");
    let text = std::str::from_utf8(&bytes)?;
    let mut reader = Reader::new();
    let mut start = 0;
    while start < text.len() {
        let mut end = (start + 7).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        for row in reader.feed(&text[start..end]) {
            println!("  complete row after byte {}: {:?}", end, row);
        }
        start = end;
    }
    if let Some(row) = reader.finalize() {
        println!("  dangling row: {:?}", row);
    }
    println!("Emitted {} rows", reader.rows_emitted());

    Ok(())
}
