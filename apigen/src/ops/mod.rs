//! Core operations.
//!
//! Business logic for the apigen command, separated from CLI argument
//! parsing and output rendering.

pub mod generate;

pub use generate::{GenerateOptions, generate};
