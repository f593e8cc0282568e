//! # Fixed-Width Layout Utilities
//!
//! Text layout for a character-cell print head: greedy word wrap,
//! two-column justification and separator lines. Both the command
//! generator and the HTML totals block build their lines here, so the
//! browser preview matches the paper output column for column.
//!
//! Widths are counted in characters, not bytes — receipts are routinely
//! Cyrillic and a byte count would wrap them at half width.

/// Column budget of a 58mm thermal printer: 32 characters per line.
///
/// This is a physical-device constant, deliberately not configurable per
/// call — every item-list and totals block is laid out against it.
pub const PRINT_WIDTH: usize = 32;

/// Greedy word-wrap of `text` into lines of at most `width` characters.
///
/// Words are split on single spaces. A word is appended to the current
/// line when `current + " " + word` still fits; otherwise the line is
/// flushed. A single word longer than `width` is force-cut at the
/// boundary, the remainder carrying over as the new current line.
///
/// Text that already fits is returned unchanged as a single line.
pub fn line_wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 || char_len(text) <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let current_len = char_len(&current);
        let word_len = char_len(word);

        if current.is_empty() {
            if word_len <= width {
                current.push_str(word);
            } else {
                current = force_split(word, width, &mut lines);
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_len <= width {
                current.push_str(word);
            } else {
                current = force_split(word, width, &mut lines);
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Cut an oversized word into full-width chunks, returning the remainder.
fn force_split(word: &str, width: usize, lines: &mut Vec<String>) -> String {
    let mut rest: String = word.to_string();
    while char_len(&rest) > width {
        let head: String = rest.chars().take(width).collect();
        rest = rest.chars().skip(width).collect();
        lines.push(head);
    }
    rest
}

/// Lay out `left` flush-left and `right` flush-right on one line of
/// exactly `width` characters.
///
/// When the two sides do not fit, the right-hand content wins: `right`
/// is never truncated before `left`. If `right` alone is at least
/// `width` characters it is cut to `width` and `left` is dropped
/// entirely; otherwise `left` is cut to the remaining columns.
pub fn justify(left: &str, right: &str, width: usize) -> String {
    let left_len = char_len(left);
    let right_len = char_len(right);

    if right_len >= width {
        return right.chars().take(width).collect();
    }
    if left_len + right_len >= width {
        let keep = width - right_len;
        let truncated: String = left.chars().take(keep).collect();
        return format!("{}{}", truncated, right);
    }
    format!(
        "{}{}{}",
        left,
        " ".repeat(width - left_len - right_len),
        right
    )
}

/// A separator line: `ch` repeated `width` times.
pub fn separator_line(width: usize, ch: char) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Currency formatting for the command path: `$` plus two fixed decimals,
/// no digit grouping.
///
/// The HTML path's `{{total}}`/`{{change}}` tokens use grouped formatting
/// instead; the asymmetry matches the device output and is pinned by test.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
