//! Generate command report data structures.

use std::path::PathBuf;

use apigen_codegen::language::{LineOutcome, Registration};
use apigen_codegen_express::{IMPORTS_SENTINEL, ROUTES_SENTINEL};

use super::output::{Output, Report};

/// Report data from generating one resource.
#[derive(Debug)]
pub struct GenerateReport {
    /// Capitalized resource name (e.g., "Item").
    pub model: String,

    /// Mount point of the resource's routes.
    pub api_path: String,

    /// Where the fields came from.
    pub fields: FieldSummary,

    /// Non-fatal findings from reading the field inputs.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Origin of the generated schema.
#[derive(Debug)]
pub enum FieldSummary {
    Preset { name: String, count: usize },
    Inline { count: usize },
    /// Built-in `name`/`status` schema.
    Default,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written this run.
    pub written: Vec<String>,
    /// Create-once files that already existed.
    pub skipped: Vec<String>,
    /// Aggregator outcome.
    pub registration: Option<Registration>,
    /// Import line for the aggregator, shown when it could not be inserted.
    pub import_line: String,
    /// Mount line for the aggregator, shown when it could not be inserted.
    pub route_line: String,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path.
    pub path: String,
    /// File content.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn fields_description(&self) -> String {
        match &self.fields {
            FieldSummary::Preset { name, count } => format!("{count} from preset '{name}'"),
            FieldSummary::Inline { count } => format!("{count} from --fields"),
            FieldSummary::Default => "default schema (name, status)".to_string(),
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Resource", &format!("{} ({})", self.model, self.api_path));
        out.key_value("Fields", &self.fields_description());
        out.key_value("Output", &written.output_dir.display().to_string());

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if !written.skipped.is_empty() {
            out.newline();
            out.section("Skipped (already exist)");
            for path in &written.skipped {
                out.list_item(path);
            }
        }

        if let Some(registration) = &written.registration {
            out.newline();
            self.render_registration(out, registration, written);
        }
    }

    fn render_registration(
        &self,
        out: &mut dyn Output,
        registration: &Registration,
        written: &WrittenResult,
    ) {
        let aggregator = &registration.aggregator;
        if registration.bootstrapped {
            out.key_value("Created", aggregator);
        }

        let lines = [
            (registration.import, IMPORTS_SENTINEL, &written.import_line),
            (registration.route, ROUTES_SENTINEL, &written.route_line),
        ];
        for (outcome, sentinel, line) in lines {
            if outcome == LineOutcome::MissingSentinel {
                out.warning(&format!(
                    "{aggregator} has no '{sentinel}' marker; add this line yourself: {line}"
                ));
            }
        }

        match (registration.import, registration.route) {
            (LineOutcome::AlreadyPresent, LineOutcome::AlreadyPresent) => {
                out.key_value("Routes", &format!("already registered in {aggregator}"));
            }
            (LineOutcome::MissingSentinel, LineOutcome::MissingSentinel) => {}
            _ => out.key_value("Routes", &format!("registered in {aggregator}")),
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", preview.files.len()));
    }
}
