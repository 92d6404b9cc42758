//! Folding a table down to a single cell and back.
//!
//! Run with: cargo run --example lift

use nsv::{dumps, lift, loads, nsv, unlift};
use std::error::Error;

fn show(title: &str, text: &str) {
    println!("{}", "=".repeat(60));
    println!("{}", title);
    println!("{}", "=".repeat(60));
    println!("{:?}\n", text);
    for (i, row) in loads(text).iter().enumerate() {
        println!("  Row {}: {:?}", i, row);
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    let table = nsv![["a", "b", "c"], ["d", "e", "f"], ["", "g", ""]];

    let level0 = dumps(&table);
    show("Level 0: the original table", &level0);

    let level1 = lift(&level0);
    show("Level 1: every line of level 0 is a cell of one row", &level1);

    let level2 = lift(&level1);
    show("Level 2: lifted again", &level2);

    let back = unlift(&unlift(&level2)?)?;
    assert_eq!(back, level0);
    assert_eq!(loads(&back), table);
    println!("Unlifted twice, recovered the original {} rows", table.len());

    Ok(())
}
