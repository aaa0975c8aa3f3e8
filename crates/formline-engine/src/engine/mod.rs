//! Formula transformation API.
//!
//! This module provides the two text transformations formline is built on:
//!
//! - [`flatten`] - Collapse a multi-line formula into one line for the function bar
//! - [`ReferenceToken`], [`find_references`] - Locate A1-style references in a formula
//! - [`rewrite_references`] - Turn relative references into `INDIRECT(...)` lookups
//! - [`Mode`] - Which axis of each reference is computed from the current cell

mod flatten;
mod mode;
mod reference;
mod rewrite;

pub use flatten::flatten;
pub use mode::{InvalidModeError, Mode};
pub use reference::{ReferenceToken, find_references};
pub use rewrite::{indirect_reference, rewrite_references, rewrite_references_with};
