use std::path::PathBuf;

use apigen_manifest::{DEFAULT_PRESETS_DIR, normalize, resource_name};
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{GenerateOptions, generate},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Resource name, singular (e.g., "item")
    pub resource: Option<String>,

    /// Inline field list (e.g., "name:string,price:number")
    #[arg(long, value_name = "NAME:TYPE,...")]
    pub fields: Option<String>,

    /// Load fields from <presets-dir>/<PRESET>.json (takes precedence over --fields)
    #[arg(long)]
    pub preset: Option<String>,

    /// Directory preset files are looked up in
    #[arg(long, default_value = DEFAULT_PRESETS_DIR)]
    pub presets_dir: PathBuf,

    /// Project directory to generate into (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let resource = resource_name(self.resource.as_deref()).unwrap_or_exit();
        let input = normalize(
            &self.presets_dir,
            self.preset.as_deref(),
            self.fields.as_deref(),
        )
        .unwrap_or_exit();

        let report = generate(
            resource,
            input,
            GenerateOptions {
                output_dir: &self.output,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
