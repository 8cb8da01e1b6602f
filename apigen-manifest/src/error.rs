use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for field specification input (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("missing required argument <RESOURCE>")]
    #[diagnostic(
        code(apigen::usage),
        help("usage: apigen <resource> [--fields=name:string,price:number | --preset=<name>]")
    )]
    Usage,

    #[error("preset file not found: '{path}'")]
    #[diagnostic(
        code(apigen::preset_not_found),
        help("add '{name}.json' to the presets directory, mapping field names to types")
    )]
    PresetNotFound { name: String, path: PathBuf },

    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preset '{name}'")]
    #[diagnostic(
        code(apigen::invalid_preset),
        help("a preset is a flat JSON object mapping field names to \"string\", \"number\" or \"boolean\"")
    )]
    InvalidPreset {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid preset content")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an invalid preset error pointing at the location serde_json reported.
    pub fn invalid_preset(
        name: impl Into<String>,
        source: serde_json::Error,
        src: &str,
        filename: &str,
    ) -> Box<Self> {
        // serde_json reports 1-based lines and columns; line 0 means no position
        let span = (source.line() > 0).then(|| {
            let offset =
                SourceOffset::from_location(src, source.line(), source.column().max(1));
            SourceSpan::new(offset, 0)
        });
        Box::new(Error::InvalidPreset {
            name: name.into(),
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}
