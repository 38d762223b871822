use crate::diff_hunk::{Hunk, HunkRange};
use crate::lcs::{diff_line_slices, LineKind, TaggedLine};
use crate::lines::{strip_line_terminator, text_lines};

/// Default number of context lines around each change
pub const DEFAULT_CONTEXT_LINES: usize = 3;

/// Options for rendering a unified diff
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    context_lines: usize,
    trim_ends: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            context_lines: DEFAULT_CONTEXT_LINES,
            trim_ends: false,
        }
    }
}

impl DiffConfig {
    /// Set the number of unchanged lines shown on each side of a change
    pub fn context_lines(mut self, context_lines: usize) -> Self {
        self.context_lines = context_lines;
        self
    }

    /// Strip trailing whitespace from every rendered body line
    pub fn trim_ends(mut self, trim_ends: bool) -> Self {
        self.trim_ends = trim_ends;
        self
    }

    /// Group the line diff of two texts into hunks
    pub fn hunks(&self, original: &str, new: &str) -> Vec<Hunk> {
        let original_lines = text_lines(original);
        let new_lines = text_lines(new);
        let tagged = diff_line_slices(&original_lines, &new_lines);

        let hunks = group_hunks(
            &tagged,
            original_lines.len(),
            new_lines.len(),
            self.context_lines,
            self.trim_ends,
        );
        log::debug!("grouped {} tagged lines into {} hunks", tagged.len(), hunks.len());
        hunks
    }

    /// Render the diff of two texts as unified diff hunks.
    ///
    /// Returns an empty string when the texts are identical.
    pub fn unified_diff(&self, original: &str, new: &str) -> String {
        let mut output = String::new();
        for hunk in self.hunks(original, new) {
            output.push_str(&hunk.header);
            output.push('\n');
            output.push_str(&hunk.content);
            output.push('\n');
        }
        output.truncate(output.trim_end().len());
        output
    }
}

/// Render the diff of two texts as unified diff hunks with `window_size`
/// context lines around each change
pub fn diff(original: &str, new: &str, window_size: usize, trim_ends: bool) -> String {
    DiffConfig::default()
        .context_lines(window_size)
        .trim_ends(trim_ends)
        .unified_diff(original, new)
}

/// Render one tagged line as a hunk body line.
///
/// Returns the line without a newline, and how many original and new lines
/// it accounts for.
pub fn render_line(kind: LineKind, raw: &str, trim_ends: bool) -> (String, usize, usize) {
    let mut text = strip_line_terminator(raw);
    if trim_ends {
        text = text.trim_end();
    }

    let mut rendered = String::with_capacity(text.len() + 1);
    rendered.push(kind.prefix());
    rendered.push_str(text);

    (
        rendered,
        usize::from(kind.in_original()),
        usize::from(kind.in_new()),
    )
}

/// Body and line counts of the hunk being rendered
#[derive(Debug, Default)]
struct HunkBuilder {
    body: Vec<String>,
    original_lines: usize,
    new_lines: usize,
}

impl HunkBuilder {
    fn push(&mut self, (rendered, original_delta, new_delta): (String, usize, usize)) {
        self.body.push(rendered);
        self.original_lines += original_delta;
        self.new_lines += new_delta;
    }

    /// `start` values are the 1-based lines the window starts at; sides whose
    /// file has no lines at all always display 0
    fn finish(
        self,
        original_start: usize,
        new_start: usize,
        original_total: usize,
        new_total: usize,
    ) -> Hunk {
        let original = HunkRange::new(
            display_start(original_start, self.original_lines, original_total),
            self.original_lines,
        );
        let new = HunkRange::new(
            display_start(new_start, self.new_lines, new_total),
            self.new_lines,
        );
        Hunk::new(original, new, self.body.join("\n"))
    }
}

fn display_start(start: usize, lines_in_hunk: usize, lines_in_file: usize) -> usize {
    if lines_in_file == 0 {
        0
    } else if lines_in_hunk == 0 {
        start.saturating_sub(1)
    } else {
        start
    }
}

/// Index of the first non-common line at or after `from`
fn next_change(tagged: &[TaggedLine], from: usize) -> Option<usize> {
    tagged
        .iter()
        .skip(from)
        .position(|line| line.kind != LineKind::Common)
        .map(|offset| from + offset)
}

/// End (exclusive) of the run of non-common lines starting at `start`
fn change_run_end(tagged: &[TaggedLine], start: usize) -> usize {
    tagged[start..]
        .iter()
        .position(|line| line.kind == LineKind::Common)
        .map_or(tagged.len(), |offset| start + offset)
}

fn group_hunks(
    tagged: &[TaggedLine],
    original_total: usize,
    new_total: usize,
    window_size: usize,
    trim_ends: bool,
) -> Vec<Hunk> {
    let mut hunks = Vec::new();
    let mut processed = 0;

    while let Some(change_start) = next_change(tagged, processed) {
        let mut change_end = change_run_end(tagged, change_start);
        let window_start = change_start.saturating_sub(window_size);
        let mut window_end = (change_end + window_size).min(tagged.len());

        // Absorb following changes whose context overlaps this window
        while let Some(next_start) = next_change(tagged, change_end) {
            if next_start.saturating_sub(window_size) > window_end {
                break;
            }
            change_end = change_run_end(tagged, next_start);
            window_end = (change_end + window_size).min(tagged.len());
        }

        let before = &tagged[..window_start];
        let original_start = 1 + before.iter().filter(|line| line.kind.in_original()).count();
        let new_start = 1 + before.iter().filter(|line| line.kind.in_new()).count();

        let mut builder = HunkBuilder::default();
        for line in &tagged[window_start..window_end] {
            builder.push(render_line(line.kind, line.text, trim_ends));
        }

        let hunk = builder.finish(original_start, new_start, original_total, new_total);
        log::trace!(
            "hunk {} covers tagged lines {}..{}",
            hunk.header,
            window_start,
            window_end
        );
        hunks.push(hunk);

        processed = window_end;
    }

    hunks
}
