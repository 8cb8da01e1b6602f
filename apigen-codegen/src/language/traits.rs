//! Target-agnostic code generation traits.

use std::path::Path;

use apigen_core::FieldType;
use eyre::Result;

/// Trait for target-specific code generators.
///
/// Implement this trait to add support for scaffolding resources for a new
/// server stack.
pub trait LanguageCodegen {
    /// Target identifier (e.g., "express")
    fn target(&self) -> &'static str;

    /// File extension for generated source files (e.g., "js")
    fn file_extension(&self) -> &'static str;

    /// Render every file without writing to disk.
    ///
    /// Files that are merged into existing content (the route aggregator)
    /// are previewed as they would look after the merge.
    fn preview(&self, output_dir: &Path) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written this run, relative to the output directory
    pub written: Vec<String>,
    /// Create-once files left untouched because they already existed
    pub skipped: Vec<String>,
    /// What happened to the route aggregator
    pub registration: Option<Registration>,
}

/// Route registration into the shared aggregator file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Aggregator path, relative to the output directory
    pub aggregator: String,
    /// Whether the aggregator was created from its bootstrap template this run
    pub bootstrapped: bool,
    /// Outcome for the import line
    pub import: LineOutcome,
    /// Outcome for the registration line
    pub route: LineOutcome,
}

/// Outcome of merging one line into a sentinel-delimited document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Inserted immediately before its sentinel.
    Inserted,
    /// Already present verbatim; left alone.
    AlreadyPresent,
    /// The sentinel was not found; nothing was inserted.
    MissingSentinel,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for projecting semantic field types onto target type tokens.
///
/// Projections are total: any tag outside the semantic set maps to
/// [`TypeMapper::fallback_type`]. Every generated field is required; there
/// is no optional-field concept.
pub trait TypeMapper {
    /// The target schema library (e.g., "mongoose", "joi")
    fn target(&self) -> &'static str;

    /// Map a field type to a target type token
    fn map_field_type(&self, field_type: &FieldType) -> &'static str;

    /// Token used for unrecognized tags (the text type)
    fn fallback_type(&self) -> &'static str;
}
