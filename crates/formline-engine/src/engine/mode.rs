use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which axis of a reference is computed from the cell holding the formula.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// Keep the column literal, take the row from `ROW()`.
    #[default]
    Row,
    /// Keep the row literal, take the column from `COLUMN()`.
    Column,
}

/// A mode selector that is neither `row` nor `col`.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
#[error("invalid mode \"{value}\": options are \"row\" or \"col\"")]
pub struct InvalidModeError {
    pub value: String,
}

impl FromStr for Mode {
    type Err = InvalidModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("row") {
            Ok(Mode::Row)
        } else if trimmed.eq_ignore_ascii_case("col") || trimmed.eq_ignore_ascii_case("column") {
            Ok(Mode::Column)
        } else {
            Err(InvalidModeError {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Row => write!(f, "row"),
            Mode::Column => write!(f, "col"),
        }
    }
}
