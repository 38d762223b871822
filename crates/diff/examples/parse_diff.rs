use anyhow::Result;
use std::env;
use std::fs;
use std::io::{self, Read};

use line_diff::parse_diff;

/// Summarise the hunks of a unified diff read from a file or stdin
fn main() -> Result<()> {
    env_logger::init();

    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let hunks = parse_diff(&text)?;
    for hunk in &hunks {
        println!(
            "{}  (-{} +{}, {} context)",
            hunk.header,
            hunk.removed_lines(),
            hunk.added_lines(),
            hunk.context_lines()
        );
    }
    println!("{} hunks", hunks.len());

    Ok(())
}
