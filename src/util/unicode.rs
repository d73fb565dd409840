use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_display_width).sum()
}

/// Truncate to `max_cells` terminal cells, appending `…` if anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    let budget = max_cells - 1; // room for '…'
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = grapheme_display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary after `byte_offset`, or None at end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let step = s[byte_offset..]
        .graphemes(true)
        .next()
        .map_or(0, |g| g.len());
    Some(byte_offset + step)
}

/// Byte offset of the grapheme boundary before `byte_offset`, or None at start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset == 0 {
        return None;
    }
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// Start of the word left of `byte_offset` (whitespace-delimited)
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let prefix = &s[..byte_offset.min(s.len())];
    let trimmed = prefix.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => i + trimmed[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

/// (line, byte offset within that line) for a byte offset in multi-line text
pub fn offset_to_line_col(s: &str, byte_offset: usize) -> (usize, usize) {
    let clamped = byte_offset.min(s.len());
    let before = &s[..clamped];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    (line, clamped - line_start)
}

/// Greedy word wrap to `width` cells. Words wider than a line are truncated.
/// Explicit newlines start a new line.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    for paragraph in s.split('\n') {
        let mut current = String::new();
        let mut current_w = 0;
        for word in paragraph.split_whitespace() {
            let word = truncate_to_width(word, width);
            let ww = display_width(&word);
            if current.is_empty() {
                current = word;
                current_w = ww;
            } else if current_w + 1 + ww <= width {
                current.push(' ');
                current.push_str(&word);
                current_w += 1 + ww;
            } else {
                lines.push(std::mem::take(&mut current));
                current = word;
                current_w = ww;
            }
        }
        lines.push(current);
    }
    lines
}

fn grapheme_display_width(g: &str) -> usize {
    if g == "\t" {
        return 4;
    }
    UnicodeWidthStr::width(g)
}
