//! Encoding and decoding whole NSV documents.
//!
//! Run with: cargo run --example simple

use nsv::{dumps, escape, loads, nsv};

fn main() {
    let table = nsv![
        ["id", "name", "notes"],
        ["1", "Ada", ""],
        ["2", "Linus", "likes\nnewlines"],
        ["3", "Grace", "C:\\path"],
        [],
    ];

    let text = dumps(&table);
    println!("Encoded ({} bytes):", text.len());
    print!("{}", text);
    println!("---");
    println!("{:?}\n", text);

    let decoded = loads(&text);
    assert_eq!(decoded, table);
    for (i, row) in decoded.iter().enumerate() {
        println!("Row {}: {:?}", i, row);
    }

    println!("\nCell escapes:");
    for cell in ["", "plain", "a\\b", "two\nlines"] {
        println!("  {:<12?} -> {:?}", cell, escape(cell));
    }
}
