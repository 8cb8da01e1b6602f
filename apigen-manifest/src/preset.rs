use std::path::{Path, PathBuf};

use apigen_core::FieldMap;

use crate::{Error, Result};

/// Directory presets are looked up in, relative to the working directory.
pub const DEFAULT_PRESETS_DIR: &str = "presets";

/// A named field specification loaded from `<dir>/<name>.json`.
#[derive(Debug, Clone)]
pub struct Preset {
    name: String,
    path: PathBuf,
    fields: FieldMap,
}

impl Preset {
    /// Resolve the file a preset name refers to.
    pub fn path_for(dir: impl AsRef<Path>, name: &str) -> PathBuf {
        dir.as_ref().join(format!("{name}.json"))
    }

    /// Open and parse a preset by name.
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Result<Self> {
        let path = Self::path_for(dir, name);
        if !path.exists() {
            return Err(Box::new(Error::PresetNotFound {
                name: name.to_string(),
                path,
            }));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let fields = Self::parse(name, &content, &filename)?;

        Ok(Self {
            name: name.to_string(),
            path,
            fields,
        })
    }

    /// Parse preset content. Tags are taken as-is; unknown tags are not an error.
    pub fn parse(name: &str, content: &str, filename: &str) -> Result<FieldMap> {
        serde_json::from_str(content)
            .map_err(|e| Error::invalid_preset(name, e, content, filename))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use apigen_core::FieldType;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_preset() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("blog.json"),
            r#"{ "title": "string", "views": "number", "published": "boolean" }"#,
        )
        .unwrap();

        let preset = Preset::open(temp.path(), "blog").unwrap();

        assert_eq!(preset.name(), "blog");
        assert_eq!(preset.path(), temp.path().join("blog.json"));
        let names: Vec<_> = preset.fields().iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["title", "views", "published"]);
        assert_eq!(preset.fields().get("views"), Some(&FieldType::Number));
    }

    #[test]
    fn test_missing_preset() {
        let temp = TempDir::new().unwrap();

        let err = Preset::open(temp.path(), "nope").unwrap_err();

        match *err {
            Error::PresetNotFound { name, path } => {
                assert_eq!(name, "nope");
                assert_eq!(path, temp.path().join("nope.json"));
            }
            other => panic!("expected PresetNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_tags_pass_through() {
        let fields = Preset::parse("p", r#"{"born": "date"}"#, "p.json").unwrap();
        assert_eq!(
            fields.get("born"),
            Some(&FieldType::Unrecognized("date".to_string()))
        );
    }

    #[test]
    fn test_non_string_tag_is_invalid() {
        let err = Preset::parse("p", "{\n  \"price\": 5\n}", "p.json").unwrap_err();
        match *err {
            Error::InvalidPreset { name, span, .. } => {
                assert_eq!(name, "p");
                assert!(span.is_some());
            }
            other => panic!("expected InvalidPreset, got {other:?}"),
        }
    }

    #[test]
    fn test_not_an_object_is_invalid() {
        let err = Preset::parse("p", r#"["title"]"#, "p.json").unwrap_err();
        assert!(matches!(*err, Error::InvalidPreset { .. }));
    }
}
