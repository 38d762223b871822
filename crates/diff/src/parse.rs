use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::{Captures, Regex};

use crate::diff_hunk::Hunk;

/// ASCII digits and whitespace only; anything else is a body line
static HUNK_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^@@(?-u:\s)*-([0-9]+)(?:,([0-9]+))?(?-u:\s)*\+([0-9]+)(?:,([0-9]+))?(?-u:\s)*@@",
    )
    .expect("hardcoded hunk regex")
});

/// Parse the hunks out of unified diff text.
///
/// Lines before the first `@@` header are ignored, and every other line
/// belongs to the hunk above it. Lengths omitted from a header default to 1.
/// A hunk with no body lines is dropped. Anything that is not a header is
/// taken as body text, so malformed input never fails; the only error is a
/// header number too large for `usize`.
pub fn parse_diff(diff_text: &str) -> Result<Vec<Hunk>> {
    let mut hunks = Vec::new();
    let mut current: Option<Hunk> = None;
    let mut body: Vec<&str> = Vec::new();

    for line in diff_text.lines() {
        if let Some(captures) = HUNK_HEADER_RE.captures(line) {
            if let Some(hunk) = current.take() {
                push_hunk(&mut hunks, hunk, &mut body);
            }
            current = Some(parse_header(line, &captures)?);
        } else if current.is_some() {
            body.push(line);
        } else {
            log::trace!("ignoring line outside of any hunk: {:?}", line);
        }
    }

    if let Some(hunk) = current {
        push_hunk(&mut hunks, hunk, &mut body);
    }

    log::debug!("parsed {} hunks", hunks.len());
    Ok(hunks)
}

fn push_hunk(hunks: &mut Vec<Hunk>, mut hunk: Hunk, body: &mut Vec<&str>) {
    if body.is_empty() {
        log::trace!("dropping hunk without body: {}", hunk.header);
        return;
    }
    hunk.content = body.join("\n");
    body.clear();
    hunks.push(hunk);
}

fn parse_header(line: &str, captures: &Captures) -> Result<Hunk> {
    let number = |index: usize| -> Result<usize> {
        match captures.get(index) {
            Some(m) => m
                .as_str()
                .parse()
                .with_context(|| format!("invalid line number in hunk header {:?}", line)),
            None => Ok(1),
        }
    };

    Ok(Hunk {
        original_start: number(1)?,
        original_lines: number(2)?,
        new_start: number(3)?,
        new_lines: number(4)?,
        header: line.to_string(),
        content: String::new(),
    })
}
