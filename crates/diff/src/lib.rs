// Line diff library
// Computes LCS line diffs, renders them as unified diff hunks and parses them back

mod diff_hunk;
mod format;
mod lcs;
mod lines;
mod parse;
mod text_diff;

pub use diff_hunk::{Hunk, HunkRange};
pub use format::{diff, render_line, DiffConfig, DEFAULT_CONTEXT_LINES};
pub use lcs::{diff_line_slices, diff_lines, LineKind, TaggedLine};
pub use lines::{split_with_line_separators, text_lines};
pub use parse::parse_diff;
pub use text_diff::TextDiff;
