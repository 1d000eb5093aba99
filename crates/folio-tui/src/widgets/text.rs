//! Width-aware text helpers shared by the section widgets

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Greedy word wrap by display width
///
/// Words wider than `width` are split across lines. Always returns at least
/// one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_to_width(word, width);
            let last = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = display_width(&last);
            current = last;
            continue;
        }

        let needed = if current.is_empty() { word_width } else { current_width + 1 + word_width };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if !current.is_empty() {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn split_to_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for ch in word.chars() {
        let w = ch.width().unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

/// Pack labelled tags into rows no wider than `width`
///
/// Each tag occupies its label width plus `padding`; tags on a row are
/// separated by `gap` columns. A tag wider than the row gets a row of its own.
pub fn flow<'a>(tags: &'a [String], width: usize, padding: usize, gap: usize) -> Vec<Vec<&'a str>> {
    let mut rows: Vec<Vec<&str>> = Vec::new();
    let mut row: Vec<&str> = Vec::new();
    let mut row_width = 0;

    for tag in tags {
        let tag_width = display_width(tag) + padding;
        let needed = if row.is_empty() { tag_width } else { row_width + gap + tag_width };
        if needed > width && !row.is_empty() {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        row_width = if row.is_empty() { tag_width } else { row_width + gap + tag_width };
        row.push(tag.as_str());
    }

    if !row.is_empty() {
        rows.push(row);
    }
    rows
}

/// Truncate to `max` display columns, ending with an ellipsis when cut
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
