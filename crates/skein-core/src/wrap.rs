//! Word-wrap layout for passage prose.
//!
//! Pure layout only; drawing belongs to the frontend. Text is reflowed as
//! one continuous stream of characters: embedded newlines get no special
//! treatment, so multi-paragraph prose wraps the same as a single line.

/// Wrap width used by the player for passage prose.
pub const LINE_WIDTH: usize = 50;

/// Reflow `text` into lines of at most `max_width` characters.
///
/// Each line breaks at the last space that fits, and the breaking space is
/// consumed. A run of non-space characters longer than `max_width` is cut
/// at exactly `max_width`, and the character after the cut is skipped,
/// identical to the space-consuming rule. Counts Unicode scalar values;
/// `max_width` must be positive.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    debug_assert!(max_width > 0);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        if chars.len() - start <= max_width {
            lines.push(chars[start..].iter().collect());
            break;
        }
        let mut end = start + max_width;
        while chars[end] != ' ' && end != start {
            end -= 1;
        }
        if end == start {
            end = start + max_width;
        }
        lines.push(chars[start..end].iter().collect());
        start = end + 1;
    }
    lines
}
