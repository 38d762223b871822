use line_diff::{Hunk, HunkRange};

#[test]
fn test_range_rendering() {
    // Single lines drop the count, empty sides keep an explicit zero
    assert_eq!(HunkRange::new(7, 1).to_string(), "7");
    assert_eq!(HunkRange::new(6, 0).to_string(), "6,0");
    assert_eq!(HunkRange::new(7, 12).to_string(), "7,12");
}

#[test]
fn test_hunk_creation() {
    let hunk = Hunk::new(
        HunkRange::new(0, 0),
        HunkRange::new(1, 2),
        "+a\n+b".to_string(),
    );

    assert_eq!(hunk.header, "@@ -0,0 +1,2 @@");
    assert_eq!(hunk.original_start, 0);
    assert_eq!(hunk.original_lines, 0);
    assert_eq!(hunk.new_start, 1);
    assert_eq!(hunk.new_lines, 2);
    assert_eq!(hunk.added_lines(), 2);
    assert_eq!(hunk.removed_lines(), 0);
    assert_eq!(hunk.body_lines().collect::<Vec<_>>(), vec!["+a", "+b"]);
    assert_eq!(hunk.to_string(), "@@ -0,0 +1,2 @@\n+a\n+b");
}
