//! Error types for formline core.

use std::path::PathBuf;

use thiserror::Error;

use formline_engine::InvalidModeError;

/// Errors that can occur while reading and converting a formula
#[derive(Error, Debug)]
pub enum FormlineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Refusing to read {}: file too large ({} bytes, max {})", .path.display(), .size, .max)]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("No file path given")]
    EmptyPath,

    #[error(transparent)]
    InvalidMode(#[from] InvalidModeError),

    #[error("Unexpected end of input")]
    UnexpectedEof,
}

pub type Result<T> = std::result::Result<T, FormlineError>;
