//! Reading and writing typed records through serde.
//!
//! Run with: cargo run --example records

use serde::{Deserialize, Serialize};
use std::error::Error;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
enum Status {
    Active,
    Inactive,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Contact {
    name: String,
    email: String,
    status: Status,
    address: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let contacts = vec![
        Contact {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            status: Status::Active,
            address: "12 St James's Square\nLondon".to_string(),
        },
        Contact {
            name: "Charles Babbage".to_string(),
            email: String::new(),
            status: Status::Inactive,
            address: "1 Dorset Street\nMarylebone\nLondon".to_string(),
        },
    ];

    let text = nsv::to_string(&contacts)?;
    println!("Serialized:\n{}", text);

    let back: Vec<Contact> = nsv::from_str(&text)?;
    assert_eq!(back, contacts);
    println!("Deserialized {} contacts:", back.len());
    for contact in &back {
        println!("  {:#?}", contact);
    }

    Ok(())
}
