//! Shared code generation utilities for apigen.
//!
//! This crate provides the language-agnostic pieces target generators are
//! built from (e.g., `apigen-codegen-express`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Target abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use language::{
    GenerateResult, LanguageCodegen, LineOutcome, PreviewFile, Registration, TypeMapper,
};
