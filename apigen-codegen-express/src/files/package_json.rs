//! package.json generator.

use std::path::{Path, PathBuf};

use apigen_core::{FileRules, GeneratedFile};

const DEFAULT_NAME: &str = "generated-api";
const DEFAULT_VERSION: &str = "1.0.0";

/// Runtime packages the generated sources import.
const RUNTIME_DEPENDENCIES: [(&str, &str); 8] = [
    ("cors", "^2.8.5"),
    ("dotenv", "^16.4.5"),
    ("express", "^4.19.2"),
    ("joi", "^17.13.3"),
    ("jsonwebtoken", "^9.0.2"),
    ("mongoose", "^8.5.1"),
    ("swagger-jsdoc", "^6.2.8"),
    ("swagger-ui-express", "^5.0.1"),
];

/// The dependency manifest of the generated project. Created once; later
/// runs never touch a user's package.json.
pub struct PackageJson {
    name: String,
    version: String,
    dependencies: Vec<Dependency>,
    dev_dependencies: Vec<Dependency>,
}

impl PackageJson {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            version: DEFAULT_VERSION.to_string(),
            dependencies: RUNTIME_DEPENDENCIES
                .iter()
                .map(|&(name, version)| Dependency::new(name, version))
                .collect(),
            dev_dependencies: vec![Dependency::new("nodemon", "^3.1.4")],
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_dependency(mut self, dep: impl Into<Dependency>) -> Self {
        self.dependencies.push(dep.into());
        self
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    fn render_dependencies(deps: &[Dependency]) -> String {
        deps.iter()
            .map(|d| format!("    \"{}\": \"{}\"", d.name, d.version))
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

impl Default for PackageJson {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedFile for PackageJson {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("package.json")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        format!(
            r#"{{
  "name": "{}",
  "version": "{}",
  "type": "module",
  "main": "app.js",
  "scripts": {{
    "start": "node app.js",
    "dev": "nodemon app.js"
  }},
  "dependencies": {{
{}
  }},
  "devDependencies": {{
{}
  }}
}}
"#,
            self.name,
            self.version,
            Self::render_dependencies(&self.dependencies),
            Self::render_dependencies(&self.dev_dependencies),
        )
    }
}

/// An npm package and its version range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl<N: Into<String>, V: Into<String>> From<(N, V)> for Dependency {
    fn from((name, version): (N, V)) -> Self {
        Self::new(name, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_generated_imports() {
        let pkg = PackageJson::new();
        let names: Vec<_> = pkg.dependencies().iter().map(|d| d.name.as_str()).collect();
        for required in ["express", "mongoose", "joi", "jsonwebtoken", "swagger-jsdoc"] {
            assert!(names.contains(&required), "missing {required}");
        }
    }

    #[test]
    fn test_render() {
        let content = PackageJson::new()
            .with_name("shop-api")
            .with_dependency(("helmet", "^7.1.0"))
            .render();

        assert!(content.starts_with("{\n  \"name\": \"shop-api\",\n"));
        assert!(content.contains("  \"type\": \"module\",\n"));
        assert!(content.contains("    \"swagger-ui-express\": \"^5.0.1\",\n    \"helmet\": \"^7.1.0\"\n  },"));
        assert!(content.contains("  \"devDependencies\": {\n    \"nodemon\": \"^3.1.4\"\n  }\n}\n"));
    }

    #[test]
    fn test_created_once() {
        assert_eq!(PackageJson::new().rules(), FileRules::create_once());
    }
}
