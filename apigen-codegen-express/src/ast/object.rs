//! JavaScript object literal builder.

use apigen_codegen::{CodeFragment, Renderable};

/// Builder for JavaScript object literals.
///
/// Values are raw expressions unless added with [`JsObject::string`].
/// Rendered either inline (`{ a: 1, b: 2 }`) or, through [`Renderable`], as
/// the `key: value,` lines of a multi-line literal whose braces the caller
/// provides.
#[derive(Debug, Clone, Default)]
pub struct JsObject {
    properties: Vec<(String, String)>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a raw expression value.
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Add a property with a single-quoted string value.
    pub fn string(self, key: impl Into<String>, value: impl AsRef<str>) -> Self {
        let quoted = format!("'{}'", value.as_ref());
        self.raw(key, quoted)
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render on one line.
    pub fn inline(&self) -> String {
        if self.properties.is_empty() {
            return "{}".to_string();
        }
        let props = self
            .properties
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {props} }}")
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|(k, v)| CodeFragment::line(format!("{k}: {v},")))
            .collect()
    }
}
