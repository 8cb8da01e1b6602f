//! Exported Express request handler.

use apigen_codegen::{CodeFragment, Renderable};

/// An exported `async (req, res) => { ... }` handler.
#[derive(Debug, Clone)]
pub struct Handler {
    name: String,
    body: Vec<String>,
}

impl Handler {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Renderable for Handler {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            format!("export const {} = async (req, res) => {{", self.name),
            self.body.iter().map(CodeFragment::line).collect(),
            Some("};".to_string()),
        )]
    }
}
