//! Aggregator bootstrap template.

use std::path::{Path, PathBuf};

use apigen_core::{FileRules, GeneratedFile};

use crate::{
    aggregator::{IMPORTS_SENTINEL, ROUTES_SENTINEL},
    ast::Import,
    code_file::{CodeFile, RawCode},
};

/// `app.js`: the server entry point every route manifest is registered in.
///
/// Only written when absent. Route lines are added afterwards by
/// [`merge`](crate::merge), so the template carries both sentinels and no
/// routes.
pub struct AppJs;

impl GeneratedFile for AppJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("app.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .imports([
                Import::new("dotenv/config"),
                Import::new("express").default("express"),
                Import::new("cors").default("cors"),
                Import::new("mongoose").default("mongoose"),
                Import::new("swagger-ui-express").default("swaggerUi"),
                Import::new("./utils/swagger.js").default("swaggerSpec"),
            ])
            .add(RawCode::new(
                "const app = express();\nconst PORT = process.env.PORT || 5000;",
            ))
            .add(RawCode::new("app.use(cors());\napp.use(express.json());"))
            .add(RawCode::new(
                "app.use('/api-docs', swaggerUi.serve, swaggerUi.setup(swaggerSpec));",
            ))
            .add(RawCode::new(format!("{IMPORTS_SENTINEL}\n{ROUTES_SENTINEL}")))
            .add(RawCode::new(
                "mongoose
  .connect(process.env.MONGO_URI)
  .then(() => {
    app.listen(PORT, () => {
      console.log(`Server running on http://localhost:${PORT}`);
    });
  })
  .catch((err) => {
    console.error('MongoDB connection failed:', err.message);
    process.exit(1);
  });",
            ))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_has_each_sentinel_once() {
        let content = AppJs.render();
        assert_eq!(content.matches(IMPORTS_SENTINEL).count(), 1);
        assert_eq!(content.matches(ROUTES_SENTINEL).count(), 1);
        assert!(
            content.contains(&format!("\n{IMPORTS_SENTINEL}\n{ROUTES_SENTINEL}\n")),
            "sentinels must sit on their own lines"
        );
    }

    #[test]
    fn test_template_has_no_routes() {
        let content = AppJs.render();
        assert!(!content.contains("Routes from"));
        assert!(content.starts_with("import 'dotenv/config';\nimport express from 'express';\n"));
    }
}
