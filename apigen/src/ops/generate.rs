//! Generate operation - scaffold one resource.

use std::path::Path;

use apigen_codegen::LanguageCodegen;
use apigen_codegen_express::Generator;
use apigen_manifest::{FieldSource, Normalized};
use eyre::{Context, Result};

use crate::reports::{
    FieldSummary, GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult,
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Project directory generated files are written into.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(resource: &str, input: Normalized, opts: GenerateOptions) -> Result<GenerateReport> {
    let fields = match &input.source {
        FieldSource::Preset(name) => FieldSummary::Preset {
            name: name.clone(),
            count: input.fields.len(),
        },
        FieldSource::Inline(_) if !input.fields.is_empty() => FieldSummary::Inline {
            count: input.fields.len(),
        },
        _ => FieldSummary::Default,
    };

    let generator = Generator::new(resource, input.fields);
    let registration = generator.registration();

    let result = if opts.dry_run {
        let files = generator
            .preview(opts.output_dir)
            .wrap_err("Failed to preview generated files")?
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let gen_result = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to generate resource")?;

        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: gen_result.written,
            skipped: gen_result.skipped,
            registration: gen_result.registration,
            import_line: registration.import,
            route_line: registration.route,
        })
    };

    Ok(GenerateReport {
        model: generator.names().model.clone(),
        api_path: generator.names().api_path(),
        fields,
        warnings: input.warnings,
        result,
    })
}
