//! Core types for the apigen scaffolding generator.
//!
//! This crate holds the language-agnostic vocabulary shared by every other
//! apigen crate: semantic field types, resource naming, the fixed set of
//! route operations, and the rules for writing generated files to disk.

mod field;
mod file;
mod naming;
mod operation;

// Field specification
pub use field::{FieldMap, FieldType};
// File operations
pub use file::{File, FileRules, GeneratedFile, Overwrite, WriteResult};
// Naming
pub use naming::{ResourceNames, capitalize};
// Route operations
pub use operation::{Guard, HttpMethod, Operation};
