//! Field source selection and normalization.

use std::path::Path;

use apigen_core::FieldMap;

use crate::{Error, Preset, Result, parse_inline};

/// Where the field specification of a run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSource {
    /// A named preset document.
    Preset(String),
    /// An inline `key:type,...` list.
    Inline(String),
    /// Nothing given: renderers use their built-in default schema.
    Default,
}

impl FieldSource {
    /// Pick a source from the two optional inputs.
    ///
    /// A preset takes precedence over inline fields. When both are given the
    /// inline list is ignored and a warning is returned alongside the source.
    pub fn select(preset: Option<&str>, inline: Option<&str>) -> (Self, Option<String>) {
        match (preset, inline) {
            (Some(preset), Some(_)) => (
                Self::Preset(preset.to_string()),
                Some(format!(
                    "--fields ignored because --preset was given (using preset '{preset}')"
                )),
            ),
            (Some(preset), None) => (Self::Preset(preset.to_string()), None),
            (None, Some(inline)) => (Self::Inline(inline.to_string()), None),
            (None, None) => (Self::Default, None),
        }
    }
}

/// Outcome of normalizing a field source.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub source: FieldSource,
    pub fields: FieldMap,
    /// Non-fatal findings (ignored inputs, unrecognized type tags).
    pub warnings: Vec<String>,
}

/// Turn the user's field inputs into one canonical [`FieldMap`].
///
/// Only a missing or unparsable preset is an error; inline text never
/// fails. Unrecognized type tags are kept and reported as warnings, and
/// render as text downstream.
pub fn normalize(
    presets_dir: impl AsRef<Path>,
    preset: Option<&str>,
    inline: Option<&str>,
) -> Result<Normalized> {
    let (source, warning) = FieldSource::select(preset, inline);
    let mut warnings: Vec<String> = warning.into_iter().collect();

    let fields = match &source {
        FieldSource::Preset(name) => Preset::open(presets_dir, name)?.into_fields(),
        FieldSource::Inline(raw) => parse_inline(raw),
        FieldSource::Default => FieldMap::new(),
    };

    warnings.extend(fields.unrecognized().map(|(name, ty)| {
        if ty.as_str().is_empty() {
            format!("field '{name}' has no type, defaulting to string")
        } else {
            format!("field '{name}' has unknown type '{ty}', defaulting to string")
        }
    }));

    Ok(Normalized {
        source,
        fields,
        warnings,
    })
}

/// Validate the required resource name argument.
pub fn resource_name(name: Option<&str>) -> Result<&str> {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(Box::new(Error::Usage)),
    }
}

#[cfg(test)]
mod tests {
    use apigen_core::FieldType;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_select_precedence() {
        assert_eq!(
            FieldSource::select(Some("blog"), None),
            (FieldSource::Preset("blog".to_string()), None)
        );
        assert_eq!(
            FieldSource::select(None, Some("a:string")),
            (FieldSource::Inline("a:string".to_string()), None)
        );
        assert_eq!(FieldSource::select(None, None), (FieldSource::Default, None));

        let (source, warning) = FieldSource::select(Some("blog"), Some("a:string"));
        assert_eq!(source, FieldSource::Preset("blog".to_string()));
        assert!(warning.unwrap().contains("--fields ignored"));
    }

    #[test]
    fn test_normalize_default_is_empty() {
        let temp = TempDir::new().unwrap();
        let normalized = normalize(temp.path(), None, None).unwrap();

        assert_eq!(normalized.source, FieldSource::Default);
        assert!(normalized.fields.is_empty());
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_normalize_inline() {
        let temp = TempDir::new().unwrap();
        let normalized = normalize(temp.path(), None, Some("price:number,active:boolean")).unwrap();

        assert_eq!(normalized.fields.len(), 2);
        assert_eq!(normalized.fields.get("active"), Some(&FieldType::Boolean));
        assert!(normalized.warnings.is_empty());
    }

    #[test]
    fn test_normalize_preset_wins() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("user.json"), r#"{"email": "string"}"#).unwrap();

        let normalized = normalize(temp.path(), Some("user"), Some("price:number")).unwrap();

        assert_eq!(normalized.source, FieldSource::Preset("user".to_string()));
        assert_eq!(normalized.fields.len(), 1);
        assert!(normalized.fields.get("price").is_none());
        assert_eq!(normalized.warnings.len(), 1);
    }

    #[test]
    fn test_normalize_missing_preset() {
        let temp = TempDir::new().unwrap();
        let err = normalize(temp.path(), Some("ghost"), None).unwrap_err();
        assert!(matches!(*err, Error::PresetNotFound { .. }));
    }

    #[test]
    fn test_normalize_warns_on_unrecognized() {
        let temp = TempDir::new().unwrap();
        let normalized = normalize(temp.path(), None, Some("born:date,note")).unwrap();

        assert_eq!(
            normalized.warnings,
            [
                "field 'born' has unknown type 'date', defaulting to string",
                "field 'note' has no type, defaulting to string",
            ]
        );
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name(Some("item")).unwrap(), "item");
        assert!(matches!(*resource_name(None).unwrap_err(), Error::Usage));
        assert!(matches!(*resource_name(Some("  ")).unwrap_err(), Error::Usage));
    }
}
