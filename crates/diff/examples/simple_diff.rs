use line_diff::{LineKind, TextDiff};

fn main() {
    env_logger::init();

    // Two sample texts to compare
    let text1 = "This is the first line.\nHere is the second line.\nAnd the third line.";
    let text2 = "This is the first line.\nThis is a completely different second line.\nAnd the third line.\nPlus a new fourth line.";

    // Generate a unified diff
    println!("Unified diff:");
    println!("{}", TextDiff::unified_diff(text1, text2, 1));

    // Print every line with its kind
    println!("\nTagged lines:");
    for (i, line) in TextDiff::diff_lines(text1, text2).iter().enumerate() {
        let color = match line.kind {
            LineKind::Removed => "\x1b[31m",
            LineKind::Added => "\x1b[32m",
            LineKind::Common => "\x1b[37m",
        };
        println!("    Line {}: {}{}\x1b[0m {:?}", i, color, line.kind, line.text);
    }

    // Show example of comparing different file versions
    println!("\nExample of comparing different versions of a file:");
    let file1 = r#"fn main() {
    println!("Hello, world!");
}
"#;

    let file2 = r#"fn main() {
    // Add a greeting with name
    let name = "Rust";
    println!("Hello, {}!", name);
}
"#;

    let hunks = TextDiff::configure().context_lines(1).hunks(file1, file2);
    for hunk in &hunks {
        println!("{}", hunk);
    }

    println!("\nDiff statistics:");
    println!("  Total hunks: {}", hunks.len());
    println!(
        "  Added lines: {}",
        hunks.iter().map(|h| h.added_lines()).sum::<usize>()
    );
    println!(
        "  Removed lines: {}",
        hunks.iter().map(|h| h.removed_lines()).sum::<usize>()
    );
}
