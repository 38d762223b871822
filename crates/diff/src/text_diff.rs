use anyhow::Result;

use crate::diff_hunk::Hunk;
use crate::format::DiffConfig;
use crate::lcs::{self, TaggedLine};
use crate::lines;
use crate::parse;

/// Wrapper around text diff operations
pub struct TextDiff;

impl TextDiff {
    /// Start building a diff with non-default options
    pub fn configure() -> DiffConfig {
        DiffConfig::default()
    }

    /// Split text into lines, terminators included
    pub fn split_lines(text: &str) -> Vec<&str> {
        lines::split_with_line_separators(text)
    }

    /// Tag every line of both texts as common, added or removed
    pub fn diff_lines<'a>(old_text: &'a str, new_text: &'a str) -> Vec<TaggedLine<'a>> {
        lcs::diff_lines(old_text, new_text)
    }

    /// Generate a unified diff string (hunks only, no file headers)
    pub fn unified_diff(old_text: &str, new_text: &str, context_lines: usize) -> String {
        Self::configure()
            .context_lines(context_lines)
            .unified_diff(old_text, new_text)
    }

    /// Read hunks back out of a unified diff
    pub fn parse(diff_text: &str) -> Result<Vec<Hunk>> {
        parse::parse_diff(diff_text)
    }
}
