//! Where formula text comes from: a file, stdin, or a string given inline.

mod path;

pub use path::normalize_dropped_path;

use crate::error::{FormlineError, Result};
use formline_engine::flatten;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const MAX_FORMULA_FILE_BYTES: u64 = 1_048_576; // 1 MiB

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormulaSource {
    File(PathBuf),
    Stdin,
    Inline(String),
}

impl FormulaSource {
    /// Interpret a command-line argument; `-` means stdin.
    pub fn from_arg(arg: &str) -> FormulaSource {
        if arg == "-" {
            FormulaSource::Stdin
        } else {
            FormulaSource::File(PathBuf::from(arg))
        }
    }
}

fn read_formula_file(path: &Path) -> Result<String> {
    let meta = std::fs::metadata(path)?;
    if meta.len() > MAX_FORMULA_FILE_BYTES {
        return Err(FormlineError::FileTooLarge {
            path: path.to_path_buf(),
            size: meta.len(),
            max: MAX_FORMULA_FILE_BYTES,
        });
    }
    let content = std::fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

fn read_limited<R: Read>(reader: R) -> Result<String> {
    let mut content = String::new();
    reader
        .take(MAX_FORMULA_FILE_BYTES + 1)
        .read_to_string(&mut content)?;
    if content.len() as u64 > MAX_FORMULA_FILE_BYTES {
        return Err(FormlineError::FileTooLarge {
            path: PathBuf::from("<stdin>"),
            size: content.len() as u64,
            max: MAX_FORMULA_FILE_BYTES,
        });
    }
    Ok(content)
}

/// Read the raw (unflattened) formula text from `source`.
pub fn read_formula_source(source: &FormulaSource) -> Result<String> {
    match source {
        FormulaSource::File(path) => read_formula_file(path),
        FormulaSource::Stdin => read_limited(std::io::stdin().lock()),
        FormulaSource::Inline(text) => Ok(text.clone()),
    }
}

/// Read a formula file and flatten it to one line.
pub fn format_from_file(path: &Path) -> Result<String> {
    Ok(flatten(&read_formula_file(path)?))
}
