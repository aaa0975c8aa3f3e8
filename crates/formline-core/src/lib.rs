//! formline-core - Formula sources and the flatten/rewrite pipeline.

pub mod convert;
pub mod error;
pub mod source;

pub use convert::convert;
pub use error::{FormlineError, Result};
pub use source::{
    FormulaSource, MAX_FORMULA_FILE_BYTES, format_from_file, normalize_dropped_path,
    read_formula_source,
};

pub use formline_engine::{InvalidModeError, Mode};
