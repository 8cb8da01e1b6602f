//! swagger-jsdoc comment blocks.

use apigen_codegen::{CodeFragment, Renderable};

/// A `/** @swagger ... */` block holding an OpenAPI YAML fragment.
///
/// Lines are added with an explicit nesting depth; each level is two
/// spaces of YAML indentation.
#[derive(Debug, Clone)]
pub struct SwaggerDoc {
    lines: Vec<String>,
}

impl SwaggerDoc {
    pub fn new() -> Self {
        Self {
            lines: vec!["@swagger".to_string()],
        }
    }

    /// Add a YAML line at the given depth.
    pub fn line(mut self, depth: usize, text: impl AsRef<str>) -> Self {
        self.lines
            .push(format!("{}{}", "  ".repeat(depth), text.as_ref()));
        self
    }

    /// Add several lines produced elsewhere, shifted by `depth`.
    pub fn lines(mut self, depth: usize, lines: impl IntoIterator<Item = (usize, String)>) -> Self {
        for (inner, text) in lines {
            self = self.line(depth + inner, text);
        }
        self
    }

    /// The YAML lines, without the comment markup.
    pub fn yaml(&self) -> &[String] {
        &self.lines[1..]
    }
}

impl Default for SwaggerDoc {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for SwaggerDoc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::doc_block(self.lines.clone())]
    }
}

#[cfg(test)]
mod tests {
    use apigen_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_render_tags_block() {
        let doc = SwaggerDoc::new()
            .line(0, "tags:")
            .line(1, "name: Items")
            .line(1, "description: Manage Items");

        let mut builder = CodeBuilder::javascript();
        builder.emit(&doc);

        assert_eq!(
            builder.build(),
            "/**\n * @swagger\n * tags:\n *   name: Items\n *   description: Manage Items\n */\n"
        );
    }

    #[test]
    fn test_nested_lines() {
        let doc = SwaggerDoc::new()
            .line(0, "/api/items:")
            .lines(1, vec![(0, "get:".to_string()), (1, "summary: x".to_string())]);
        assert_eq!(doc.yaml(), ["/api/items:", "  get:", "    summary: x"]);
    }
}
