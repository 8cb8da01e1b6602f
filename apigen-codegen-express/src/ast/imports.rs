//! ES module import builder.

use apigen_codegen::{CodeFragment, Renderable};

/// Builder for ES module import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Import several named exports.
    pub fn named_all(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.named.extend(names.into_iter().map(Into::into));
        self
    }

    /// Render the import as a single line (no trailing newline).
    pub fn build(&self) -> String {
        match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {} from '{}';", def, self.from),
            (Some(def), false) => format!(
                "import {}, {{ {} }} from '{}';",
                def,
                self.named.join(", "),
                self.from
            ),
            (None, false) => format!(
                "import {{ {} }} from '{}';",
                self.named.join(", "),
                self.from
            ),
            (None, true) => format!("import '{}';", self.from),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import() {
        let i = Import::new("../models/item.model.js").default("Item").build();
        assert_eq!(i, "import Item from '../models/item.model.js';");
    }

    #[test]
    fn test_named_import() {
        let i = Import::new("./auth.js")
            .named("verifyToken")
            .named("isAdmin")
            .build();
        assert_eq!(i, "import { verifyToken, isAdmin } from './auth.js';");
    }

    #[test]
    fn test_default_and_named_import() {
        let i = Import::new("express")
            .default("express")
            .named_all(["Router", "json"])
            .build();
        assert_eq!(i, "import express, { Router, json } from 'express';");
    }

    #[test]
    fn test_side_effect_import() {
        let i = Import::new("dotenv/config").build();
        assert_eq!(i, "import 'dotenv/config';");
    }
}
