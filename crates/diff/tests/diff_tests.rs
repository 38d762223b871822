use line_diff::{diff, diff_lines, DiffConfig, LineKind, TaggedLine, TextDiff};
use pretty_assertions::assert_eq;

#[test]
fn test_identical_texts() {
    assert!(diff_lines("same\n", "same\n").is_empty());
    assert_eq!(diff("same\n", "same\n", 3, false), "");
    assert_eq!(TextDiff::unified_diff("", "", 3), "");
}

#[test]
fn test_pure_line_insert() {
    let unified = diff("a\nb\nc\n", "a\nb\nX\nc\n", 1, false);

    insta::assert_snapshot!(unified, @r"
@@ -2,2 +2,3 @@
 b
+X
 c
");
}

#[test]
fn test_deletion_at_start_without_context() {
    let unified = diff("x\na\n", "a\n", 0, false);

    assert_eq!(unified, "@@ -1 +0,0 @@\n-x");
}

#[test]
fn test_insertion_without_context() {
    // An empty side points at the line before the change
    assert_eq!(diff("a\nc\n", "a\nb\nc\n", 0, false), "@@ -1,0 +2 @@\n+b");
    assert_eq!(diff("b\n", "a\nb\n", 0, false), "@@ -0,0 +1 @@\n+a");
}

#[test]
fn test_deletion_in_the_middle() {
    assert_eq!(
        diff("a\nb\nc\n", "a\nc\n", 1, false),
        "@@ -1,3 +1,2 @@\n a\n-b\n c"
    );
}

#[test]
fn test_modified_line_uses_default_context() {
    let old = "1\n2\n3\n4\n5\n6\n7\n8\n9\n";
    let new = "1\n2\n3\n4\nfive\n6\n7\n8\n9\n";

    insta::assert_snapshot!(TextDiff::unified_diff(old, new, 3), @r"
@@ -2,7 +2,7 @@
 2
 3
 4
-5
+five
 6
 7
 8
");
}

#[test]
fn test_diff_lines_tags() {
    let tagged = diff_lines("a\nb\nc\n", "a\nX\nc\nd\n");

    assert_eq!(
        tagged,
        vec![
            TaggedLine::new("a\n", LineKind::Common),
            TaggedLine::new("b\n", LineKind::Removed),
            TaggedLine::new("X\n", LineKind::Added),
            TaggedLine::new("c\n", LineKind::Common),
            TaggedLine::new("d\n", LineKind::Added),
        ]
    );
}

#[test]
fn test_configured_diff_matches_free_function() {
    let old = "alpha\nbeta  \ngamma\n";
    let new = "alpha\nbeta\ngamma\ndelta\n";

    let config = DiffConfig::default().context_lines(2).trim_ends(true);

    assert_eq!(config.unified_diff(old, new), diff(old, new, 2, true));
    assert_eq!(
        TextDiff::configure().context_lines(2).unified_diff(old, new),
        diff(old, new, 2, false)
    );
}

#[test]
fn test_formatting_is_deterministic() {
    let old = "fn main() {\n    println!(\"Hello, world!\");\n}\n";
    let new = "fn main() {\n    let name = \"Rust\";\n    println!(\"Hello, {}!\", name);\n}\n";

    let first = diff(old, new, 3, false);
    let second = diff(old, new, 3, false);

    assert_eq!(first, second);
    assert_eq!(
        first,
        "@@ -1,3 +1,4 @@\n fn main() {\n-    println!(\"Hello, world!\");\n+    let name = \"Rust\";\n+    println!(\"Hello, {}!\", name);\n }"
    );
}

#[test]
fn test_hunk_statistics() {
    let hunks = DiffConfig::default().hunks("a\nb\nc\n", "a\nX\nY\nc\n");

    assert_eq!(hunks.len(), 1);
    assert_eq!(hunks[0].context_lines(), 2);
    assert_eq!(hunks[0].removed_lines(), 1);
    assert_eq!(hunks[0].added_lines(), 2);
    assert_eq!(hunks[0].original_lines, 3);
    assert_eq!(hunks[0].new_lines, 4);
}
