//! Field specification input for apigen.
//!
//! Turns whatever the user supplied (a preset name, an inline
//! `key:type,...` list, or nothing at all) into one canonical
//! [`FieldMap`](apigen_core::FieldMap).

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod inline;
mod preset;
mod source;

pub use error::{Error, Result};
pub use inline::parse_inline;
pub use preset::{DEFAULT_PRESETS_DIR, Preset};
pub use source::{FieldSource, Normalized, normalize, resource_name};
