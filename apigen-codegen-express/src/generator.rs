//! Express resource generator.

use std::path::{Path, PathBuf};

use apigen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile, Registration};
use apigen_core::{FieldMap, File, GeneratedFile, ResourceNames, WriteResult};
use eyre::{Context, Result};

use crate::{
    aggregator::{MergeOutcome, RouteRegistration, merge},
    files::{
        AppJs, AuthMiddleware, ControllerJs, EnvExample, ModelJs, PackageJson, RoutesJs,
        SwaggerJs, ValidateMiddleware, ValidatorJs,
    },
};

/// Generates one REST resource into an Express project.
///
/// Every run rewrites the resource's four source files, creates the shared
/// project files that are still missing, and registers the resource's
/// router in `app.js`. Running it again for the same resource is safe.
pub struct Generator {
    names: ResourceNames,
    fields: FieldMap,
}

impl LanguageCodegen for Generator {
    fn target(&self) -> &'static str {
        "express"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn preview(&self, output_dir: &Path) -> Result<Vec<PreviewFile>> {
        self.preview_files(output_dir)
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl Generator {
    pub fn new(resource: &str, fields: FieldMap) -> Self {
        Self {
            names: ResourceNames::new(resource),
            fields,
        }
    }

    pub fn names(&self) -> &ResourceNames {
        &self.names
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Lines this resource adds to the aggregator.
    pub fn registration(&self) -> RouteRegistration {
        RouteRegistration::new(&self.names)
    }

    /// Model, controller, validator and routes; overwritten on every run.
    fn resource_files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        vec![
            Box::new(ModelJs::new(&self.names, &self.fields)),
            Box::new(ControllerJs::new(&self.names)),
            Box::new(ValidatorJs::new(&self.names, &self.fields)),
            Box::new(RoutesJs::new(&self.names, &self.fields)),
        ]
    }

    /// Shared project files; created once.
    fn bootstrap_files(&self) -> Vec<Box<dyn GeneratedFile>> {
        vec![
            Box::new(SwaggerJs),
            Box::new(AuthMiddleware),
            Box::new(ValidateMiddleware),
            Box::new(EnvExample),
            Box::new(PackageJson::new()),
        ]
    }

    fn preview_files(&self, output_dir: &Path) -> Result<Vec<PreviewFile>> {
        let mut files: Vec<PreviewFile> = self
            .resource_files()
            .iter()
            .map(|file| preview(file.as_ref()))
            .collect();

        // Create-once files only show up when they would be written
        files.extend(
            self.bootstrap_files()
                .iter()
                .filter(|file| !file.path(output_dir).exists())
                .map(|file| preview(file.as_ref())),
        );

        let (_, merged) = self.merged_aggregator(output_dir)?;
        files.push(PreviewFile {
            path: relative_path(&AppJs),
            content: merged.text,
        });

        Ok(files)
    }

    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();

        for file in &self.resource_files() {
            record(&mut result, file.as_ref(), file.write(output_dir)?);
        }

        for file in &self.bootstrap_files() {
            record(&mut result, file.as_ref(), file.write(output_dir)?);
        }

        result.registration = Some(self.register_routes(output_dir)?);
        Ok(result)
    }

    /// Bootstrap `app.js` if needed, then merge this resource's lines in.
    fn register_routes(&self, output_dir: &Path) -> Result<Registration> {
        let bootstrapped = AppJs.write(output_dir)? == WriteResult::Written;
        let (path, merged) = self.merged_aggregator(output_dir)?;

        if merged.changed() {
            File::new(path, merged.text).write()?;
        }

        Ok(Registration {
            aggregator: relative_path(&AppJs),
            bootstrapped,
            import: merged.import,
            route: merged.route,
        })
    }

    /// The aggregator after merging, computed from the file on disk or from
    /// the bootstrap template when there is none yet.
    fn merged_aggregator(&self, output_dir: &Path) -> Result<(PathBuf, MergeOutcome)> {
        let path = AppJs.path(output_dir);
        let current = if path.exists() {
            std::fs::read_to_string(&path)
                .wrap_err_with(|| format!("failed to read '{}'", path.display()))?
        } else {
            AppJs.render()
        };

        let merged = merge(&current, &self.registration());
        Ok((path, merged))
    }
}

fn relative_path(file: &dyn GeneratedFile) -> String {
    file.path(Path::new("")).display().to_string()
}

fn preview(file: &dyn GeneratedFile) -> PreviewFile {
    PreviewFile {
        path: relative_path(file),
        content: file.render(),
    }
}

fn record(result: &mut GenerateResult, file: &dyn GeneratedFile, outcome: WriteResult) {
    let path = relative_path(file);
    match outcome {
        WriteResult::Written => result.written.push(path),
        WriteResult::Skipped => result.skipped.push(path),
    }
}
