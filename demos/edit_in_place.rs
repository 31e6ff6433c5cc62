//! Editing a properties file without disturbing its layout.
//!
//! Run with: cargo run --example edit_in_place

use properties_edit::{from_str, to_writer, FormatOptions, Properties, Separator};
use std::error::Error;
use std::io;

const SETTINGS: &str = "\
# Server settings
server.host = localhost
server.port : 8080

! Legacy switch, scheduled for removal
legacy.mode=true

# Search path
paths = /usr/bin:\\
        /usr/local/bin
";

fn main() -> Result<(), Box<dyn Error>> {
    let mut props = from_str(SETTINGS)?;

    // Read the decoded view
    println!("Decoded values:");
    for (key, value) in &props {
        println!("  {key} -> {value}");
    }
    println!("Comment of paths: {:?}\n", props.comment("paths")?);

    // Change one value; the spacing around ':' is kept
    props.put("server.port", "9090");

    // Rewrite a comment; the block's '#' marker is reused
    props.set_comment("server.host", ["Server settings", "Bind address"])?;

    // Drop a key together with its comment
    props.remove("legacy.mode");

    // New keys go at the end
    props.put("server.name", "demo \u{2603}");

    println!("Edited document:");
    to_writer(io::stdout().lock(), &props)?;
    println!("\n");

    // Options only shape text the document generates
    let options = FormatOptions::new().with_separator(Separator::SpacedEquals);
    let mut fresh = Properties::with_options(options);
    fresh.put("greeting", "hello world");
    fresh.set_comment("greeting", ["Generated"])?;
    println!("Fresh document:\n{fresh}");

    Ok(())
}
