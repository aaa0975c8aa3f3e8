//! Collapse a multi-line formula into a single line.
//!
//! Formulas are easier to write spread across several indented lines, but the
//! spreadsheet function bar only takes one. Every line is trimmed and the
//! pieces are joined back together with no separator.

/// Characters that end a line. Covers `\n`, `\r` (and so `\r\n`) plus the
/// vertical tab, form feed, file/group/record separators, NEL and the
/// Unicode line and paragraph separators.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace stripped from either end of a line: `char::is_whitespace`
/// plus the unit separator (U+001F).
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || c == '\u{1f}'
}

/// Flatten `text` into one line.
///
/// Leading and trailing whitespace is stripped from each line, whitespace
/// inside a line is kept, and the lines are concatenated in order.
///
/// ```ignore
/// assert_eq!(flatten("  LEN(A5) \n + 2 "), "LEN(A5)+ 2");
/// ```
pub fn flatten(text: &str) -> String {
    text.split(is_line_boundary)
        .map(|line| line.trim_matches(is_strippable))
        .collect()
}
