use line_diff::{diff, split_with_line_separators, TextDiff};

fn main() {
    env_logger::init();

    // Example text with mixed line endings
    let unix_text = "Line 1\nLine 2\nLine 3\n";
    let windows_text = "Line 1\r\nLine 2\r\nLine 3\r\n";
    let mac_text = "Line 1\rLine 2\rLine 3\r";
    let mixed_text = "Line 1\nLine 2\r\nLine 3\r";

    println!("=== Demonstrating line ending handling ===\n");

    println!("1. Splitting keeps every terminator:");
    for text in [unix_text, windows_text, mac_text, mixed_text] {
        println!("   {:?}", split_with_line_separators(text));
    }

    // Terminators are part of a line, so these differ on every changed ending
    println!("\n2. Diffing unix against mixed line endings:");
    println!("{}", TextDiff::unified_diff(unix_text, mixed_text, 3));

    println!("\n3. Diffing windows against mac line endings:");
    println!("{}", TextDiff::unified_diff(windows_text, mac_text, 3));

    // A missing final newline is a change too
    println!("\n4. Missing newline at end of file:");
    println!("{}", diff("First line\nLast line", "First line\nLast line\n", 3, false));

    println!("\n5. Trailing whitespace, with and without trimming:");
    let spaced = "value = 1   \nother = 2\n";
    let changed = "value = 1   \nother = 3\n";
    println!("{}", diff(spaced, changed, 1, false).replace(' ', "·"));
    println!("{}", diff(spaced, changed, 1, true).replace(' ', "·"));
}
