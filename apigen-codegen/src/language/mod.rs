//! Target-specific abstractions.
//!
//! This module provides traits and types for target code generation:
//! - [`LanguageCodegen`] - Main trait for target code generators
//! - [`TypeMapper`] - Trait for projecting semantic field types onto target types
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{
    GenerateResult, LanguageCodegen, LineOutcome, PreviewFile, Registration, TypeMapper,
};
