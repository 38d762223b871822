use derive_more::Display;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One side of a hunk header: where the hunk starts and how many lines it spans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HunkRange {
    /// The starting line as displayed in the header (1-based, 0 for empty sides)
    pub start: usize,

    /// The number of lines
    pub count: usize,
}

impl HunkRange {
    /// Create a new range from start and count
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }
}

/// Renders the range the way a unified diff header spells it:
/// `N` for a single line, `N,0` for none, `N,count` otherwise.
impl fmt::Display for HunkRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.count {
            1 => write!(f, "{}", self.start),
            count => write!(f, "{},{}", self.start, count),
        }
    }
}

/// A hunk of a unified diff, either rendered by the formatter or read back
/// by the parser
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}\n{}", header, content)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hunk {
    /// First line of the hunk in the original file
    pub original_start: usize,

    /// Number of original lines the hunk spans (context and removed)
    pub original_lines: usize,

    /// First line of the hunk in the new file
    pub new_start: usize,

    /// Number of new lines the hunk spans (context and added)
    pub new_lines: usize,

    /// The `@@ ... @@` header line, without its newline
    pub header: String,

    /// Body lines joined by `\n`, without a trailing newline
    pub content: String,
}

impl Hunk {
    /// Create a hunk from its ranges, generating the header
    pub fn new(original: HunkRange, new: HunkRange, content: String) -> Self {
        Self {
            original_start: original.start,
            original_lines: original.count,
            new_start: new.start,
            new_lines: new.count,
            header: format!("@@ -{} +{} @@", original, new),
            content,
        }
    }

    /// The original side of the header
    pub fn original_range(&self) -> HunkRange {
        HunkRange::new(self.original_start, self.original_lines)
    }

    /// The new side of the header
    pub fn new_range(&self) -> HunkRange {
        HunkRange::new(self.new_start, self.new_lines)
    }

    /// Iterate over the body lines, prefixes included
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines()
    }

    /// Get the number of added lines in this hunk
    pub fn added_lines(&self) -> usize {
        self.count_prefixed('+')
    }

    /// Get the number of removed lines in this hunk
    pub fn removed_lines(&self) -> usize {
        self.count_prefixed('-')
    }

    /// Get the number of context lines in this hunk
    pub fn context_lines(&self) -> usize {
        self.count_prefixed(' ')
    }

    fn count_prefixed(&self, prefix: char) -> usize {
        self.body_lines()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}
