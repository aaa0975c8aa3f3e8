//! Cell reference tokens.
//!
//! A reference token is one to three uppercase letters followed by one to
//! five decimal digits (`A5`, `AB123`, `ABC12345`). Digits are any Unicode
//! decimal digit, so `A٥` is a token too. Matching is case-sensitive, so
//! `a5` is left alone.
//!
//! # Examples
//!
//! ```ignore
//! let refs = find_references("SUM(A5,B10)");
//! assert_eq!(refs[1].split(), ("B", "10"));
//! assert_eq!(refs[1].span(), (6, 9));
//! ```

use regex::Regex;
use std::sync::OnceLock;

pub(crate) fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Z]{1,3}\d{1,5}").expect("reference token regex must compile")
    })
}

/// A reference token found in a formula, with its byte span.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ReferenceToken<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> ReferenceToken<'a> {
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte range `(start, end)` of the token in the formula it was found in.
    pub fn span(&self) -> (usize, usize) {
        (self.start, self.start + self.text.len())
    }

    /// Split into the column letters and the row digits.
    pub fn split(&self) -> (&'a str, &'a str) {
        let boundary = self
            .text
            .find(|c: char| !c.is_ascii_uppercase())
            .unwrap_or(self.text.len());
        self.text.split_at(boundary)
    }

    pub fn column(&self) -> &'a str {
        self.split().0
    }

    pub fn row(&self) -> &'a str {
        self.split().1
    }
}

/// Find every reference token in `equation`, left to right.
///
/// Matches never overlap and repeated references are all reported.
pub fn find_references(equation: &str) -> Vec<ReferenceToken<'_>> {
    reference_re()
        .find_iter(equation)
        .map(|m| ReferenceToken {
            text: m.as_str(),
            start: m.start(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(equation: &str) -> Vec<&str> {
        find_references(equation)
            .iter()
            .map(|r| r.as_str())
            .collect()
    }

    #[test]
    fn test_find_references_in_order_with_duplicates() {
        assert_eq!(texts("SUM(A5,B10,A5)"), vec!["A5", "B10", "A5"]);
    }

    #[test]
    fn test_find_references_spans() {
        let refs = find_references("SUM(A5,B10)");
        assert_eq!(refs[0].span(), (4, 6));
        assert_eq!(refs[1].span(), (7, 10));
    }

    #[test]
    fn test_split_widest_token() {
        let refs = find_references("ABC12345");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].split(), ("ABC", "12345"));
        assert_eq!(refs[0].column(), "ABC");
        assert_eq!(refs[0].row(), "12345");
    }

    #[test]
    fn test_lowercase_is_not_a_reference() {
        assert!(find_references("LEN(a5)").is_empty());
        assert!(find_references("aB5").iter().all(|r| r.as_str() == "B5"));
    }

    #[test]
    fn test_leftmost_match_in_long_runs() {
        assert_eq!(texts("ABCD12"), vec!["BCD12"]);
        assert_eq!(texts("A123456"), vec!["A12345"]);
    }

    #[test]
    fn test_functions_without_digits_are_ignored() {
        assert!(find_references("ROW()+COLUMN()").is_empty());
    }

    #[test]
    fn test_unicode_decimal_digits_are_rows() {
        let refs = find_references("LEN(A\u{0665})+B\u{0967}\u{0968}");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].split(), ("A", "\u{0665}"));
        assert_eq!(refs[1].column(), "B");
        assert_eq!(refs[1].row(), "\u{0967}\u{0968}");
        assert_eq!(refs[0].span(), (4, 7));
    }
}
