//! Rewriting relative references into `INDIRECT` lookups.
//!
//! Web spreadsheets cannot lock cells, so one stray copy and paste shifts
//! every relative reference in a formula. Rewriting `A5` as
//! `INDIRECT(CONCAT("A", ROW()))` pins the column and reads the row from the
//! cell the formula sits in, which survives being pasted down a column.
//!
//! - [`Mode::Row`]: `A5` → `INDIRECT(CONCAT("A", ROW()))`
//! - [`Mode::Column`]: `A5` → `INDIRECT(CONCAT(COLUMN(), "5"))`

use super::mode::{InvalidModeError, Mode};
use super::reference::{ReferenceToken, find_references};

/// Build the `INDIRECT` expression that replaces a single token.
pub fn indirect_reference(token: &ReferenceToken<'_>, mode: Mode) -> String {
    match mode {
        Mode::Row => format!("INDIRECT(CONCAT(\"{}\", ROW()))", token.column()),
        Mode::Column => format!("INDIRECT(CONCAT(COLUMN(), \"{}\"))", token.row()),
    }
}

/// Replace every reference token in `equation` with its `INDIRECT` form.
///
/// The output is rebuilt in one pass from the token spans, so a replacement
/// is never scanned again and text between tokens is copied untouched.
pub fn rewrite_references(equation: &str, mode: Mode) -> String {
    let tokens = find_references(equation);
    log::debug!(
        "rewriting {} reference(s) in {} mode",
        tokens.len(),
        mode
    );
    if tokens.is_empty() {
        return equation.to_string();
    }

    let mut out = String::with_capacity(equation.len() + tokens.len() * 32);
    let mut last = 0;
    for token in &tokens {
        let (start, end) = token.span();
        out.push_str(&equation[last..start]);
        out.push_str(&indirect_reference(token, mode));
        last = end;
    }
    out.push_str(&equation[last..]);
    out
}

/// Like [`rewrite_references`], with the mode given as text (`row` or `col`).
pub fn rewrite_references_with(equation: &str, mode: &str) -> Result<String, InvalidModeError> {
    let mode: Mode = mode.parse()?;
    Ok(rewrite_references(equation, mode))
}
