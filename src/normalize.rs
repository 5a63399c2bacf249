//! Strip incidental indentation from comments written as indented literal blocks
//!
//! Comments are usually written inline in migration code, indented to match the
//! surrounding source:
//!
//! ```
//! let comment = pgcomment::normalize_comment("
//!     This is my comment.
//!
//!     And here's another line.
//! ");
//! assert_eq!(comment, "This is my comment.\n\nAnd here's another line.");
//! ```
//!
//! Two rules apply. Empty lines (no characters at all, not even whitespace) are
//! removed from the start and end. Then the whitespace in front of the first
//! line of text, the lede, is removed once from the start of every line that
//! begins with it. Lines indented differently are left alone, so the first line
//! of text must carry the indentation you want stripped.

/// Whitespace as understood for lede detection; tabs and spaces are not interchangeable.
fn is_lede_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}

/// Normalise a comment string, removing leading/trailing empty lines and the common lede.
pub fn normalize_comment(comment: &str) -> String {
    let trimmed = comment.trim_start_matches('\n').trim_end_matches('\n');

    let lede_len = trimmed.len() - trimmed.trim_start_matches(is_lede_whitespace).len();
    let lede = &trimmed[..lede_len];
    if lede.is_empty() {
        return trimmed.to_string();
    }

    let mut out = String::with_capacity(trimmed.len());
    let mut rest = trimmed;
    let mut at_line_start = true;

    while let Some(c) = rest.chars().next() {
        if at_line_start && rest.starts_with(lede) {
            rest = &rest[lede.len()..];
            at_line_start = lede.ends_with('\n');
            continue;
        }

        out.push(c);
        rest = &rest[c.len_utf8()..];
        at_line_start = c == '\n';
    }

    // A whitespace-only last line collapses to nothing once its lede is gone
    let len = out.trim_end_matches('\n').len();
    out.truncate(len);
    out
}
