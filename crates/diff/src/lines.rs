/// Split text into lines, keeping each line's terminator attached.
///
/// Recognises `\r\n`, `\n` and `\r`, with `\r\n` taking precedence so a
/// Windows line ending is never split in two. A final line without a
/// terminator is returned as is, which is how a missing newline at end of
/// file stays visible to the diff. Empty input yields a single empty line.
///
/// Concatenating the result always reproduces `text`.
pub fn split_with_line_separators(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return vec![""];
    }

    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut line_start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let terminator_len = match bytes[pos] {
            b'\r' if bytes.get(pos + 1) == Some(&b'\n') => 2,
            b'\r' | b'\n' => 1,
            _ => 0,
        };

        if terminator_len == 0 {
            pos += 1;
            continue;
        }

        pos += terminator_len;
        lines.push(&text[line_start..pos]);
        line_start = pos;
    }

    if line_start < text.len() {
        lines.push(&text[line_start..]);
    }

    lines
}

/// Lines of a whole file, where empty text means zero lines rather than one
/// degenerate empty line.
pub fn text_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        split_with_line_separators(text)
    }
}

/// Strip a single trailing line terminator, if any.
pub(crate) fn strip_line_terminator(line: &str) -> &str {
    line.strip_suffix("\r\n")
        .or_else(|| line.strip_suffix('\n'))
        .or_else(|| line.strip_suffix('\r'))
        .unwrap_or(line)
}
