//! CodeFile abstraction for structured JavaScript file generation.
//!
//! Organizes a generated module into an imports section followed by body
//! elements separated by blank lines.

use apigen_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of a JavaScript module.
///
/// # Example
///
/// ```ignore
/// let file = CodeFile::new()
///     .import(Import::new("joi").default("Joi"))
///     .add(RawCode::new("export const itemSchema = Joi.object({});"))
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an import statement.
    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add imports from an iterator.
    pub fn imports(mut self, imports: impl IntoIterator<Item = Import>) -> Self {
        self.imports.extend(imports);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with 2-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVASCRIPT)
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}

/// A raw code fragment that implements Renderable.
///
/// Useful for adding fixed template text to a CodeFile body.
#[derive(Debug, Clone)]
pub struct RawCode(String);

impl RawCode {
    /// Create a new raw code fragment.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .lines()
            .map(|line| {
                if line.is_empty() {
                    CodeFragment::Blank
                } else {
                    CodeFragment::Line(line.to_string())
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_imports_then_body() {
        let file = CodeFile::new()
            .import(Import::new("mongoose").default("mongoose"))
            .add(RawCode::new("const a = 1;"))
            .add(RawCode::new("export default a;"));

        assert_eq!(
            file.render(),
            "import mongoose from 'mongoose';\n\nconst a = 1;\n\nexport default a;\n"
        );
    }

    #[test]
    fn test_raw_code_keeps_blank_lines() {
        let file = CodeFile::new().add(RawCode::new("a;\n\nb;"));
        assert_eq!(file.render(), "a;\n\nb;\n");
    }
}
