use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::lines::text_lines;

/// Which side(s) of the diff a line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LineKind {
    /// The line exists in both versions
    #[display(fmt = "Common")]
    Common,

    /// The line only exists in the new version
    #[display(fmt = "Added")]
    Added,

    /// The line only exists in the original version
    #[display(fmt = "Removed")]
    Removed,
}

impl LineKind {
    /// The character a unified diff puts in front of a line of this kind
    pub fn prefix(self) -> char {
        match self {
            LineKind::Common => ' ',
            LineKind::Added => '+',
            LineKind::Removed => '-',
        }
    }

    /// Whether the line is part of the original text
    pub fn in_original(self) -> bool {
        self != LineKind::Added
    }

    /// Whether the line is part of the new text
    pub fn in_new(self) -> bool {
        self != LineKind::Removed
    }
}

/// A line of input, terminator included, tagged with its diff kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaggedLine<'a> {
    pub text: &'a str,
    pub kind: LineKind,
}

impl<'a> TaggedLine<'a> {
    pub fn new(text: &'a str, kind: LineKind) -> Self {
        Self { text, kind }
    }
}

/// Diff two texts line by line.
///
/// Both texts are split with [`text_lines`], so an empty text has no lines.
pub fn diff_lines<'a>(original: &'a str, new: &'a str) -> Vec<TaggedLine<'a>> {
    diff_line_slices(&text_lines(original), &text_lines(new))
}

/// Diff two line sequences using a longest common subsequence.
///
/// Lines compare by their full text including terminators. Returns an empty
/// vector when the sequences are identical. When several alignments are
/// equally long, additions are preferred while walking back from the end,
/// which puts removals before additions in the output.
///
/// Time and memory are both O(n·m) in the line counts.
pub fn diff_line_slices<'a>(original: &[&'a str], new: &[&'a str]) -> Vec<TaggedLine<'a>> {
    if original == new {
        return Vec::new();
    }

    let table = LcsTable::build(original, new);

    let mut tagged = Vec::with_capacity(original.len().max(new.len()));
    let (mut i, mut j) = (original.len(), new.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && original[i - 1] == new[j - 1] {
            tagged.push(TaggedLine::new(original[i - 1], LineKind::Common));
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            tagged.push(TaggedLine::new(new[j - 1], LineKind::Added));
            j -= 1;
        } else {
            tagged.push(TaggedLine::new(original[i - 1], LineKind::Removed));
            i -= 1;
        }
    }

    tagged.reverse();

    log::debug!(
        "diffed {} against {} lines into {} tagged lines (lcs length {})",
        original.len(),
        new.len(),
        tagged.len(),
        table.get(original.len(), new.len())
    );

    tagged
}

/// Row-major `(n+1)×(m+1)` table of prefix LCS lengths
struct LcsTable {
    columns: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build(original: &[&str], new: &[&str]) -> Self {
        let columns = new.len() + 1;
        let mut table = Self {
            columns,
            cells: vec![0; (original.len() + 1) * columns],
        };

        for i in 1..=original.len() {
            for j in 1..=new.len() {
                let value = if original[i - 1] == new[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.cells[i * columns + j] = value;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.columns + j]
    }
}
