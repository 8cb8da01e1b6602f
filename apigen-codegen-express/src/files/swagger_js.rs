//! swagger-jsdoc descriptor generator.

use std::path::{Path, PathBuf};

use apigen_codegen::CodeFragment;
use apigen_core::{FileRules, GeneratedFile};

use crate::{
    ast::{Import, JsObject},
    code_file::{CodeFile, RawCode},
};

const TITLE: &str = "Generated API";
const VERSION: &str = "1.0.0";
const DESCRIPTION: &str = "Auto-generated Swagger docs";

/// `utils/swagger.js`: builds the OpenAPI document from the `@swagger`
/// blocks of every route manifest.
pub struct SwaggerJs;

impl SwaggerJs {
    fn info() -> JsObject {
        JsObject::new()
            .string("title", TITLE)
            .string("version", VERSION)
            .string("description", DESCRIPTION)
    }

    fn bearer_auth() -> JsObject {
        JsObject::new()
            .string("type", "http")
            .string("scheme", "bearer")
            .string("bearerFormat", "JWT")
    }

    fn options() -> CodeFragment {
        let definition = vec![
            CodeFragment::line("openapi: '3.0.0',"),
            CodeFragment::line(format!("info: {},", Self::info().inline())),
            CodeFragment::block(
                "components: {",
                vec![CodeFragment::block(
                    "securitySchemes: {",
                    vec![CodeFragment::line(format!(
                        "bearerAuth: {},",
                        Self::bearer_auth().inline()
                    ))],
                    Some("},".to_string()),
                )],
                Some("},".to_string()),
            ),
            CodeFragment::line("security: [{ bearerAuth: [] }],"),
        ];

        CodeFragment::block(
            "const options = {",
            vec![
                CodeFragment::block("definition: {", definition, Some("},".to_string())),
                CodeFragment::line("apis: ['./routes/*.js'],"),
            ],
            Some("};".to_string()),
        )
    }
}

impl GeneratedFile for SwaggerJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("utils").join("swagger.js")
    }

    fn rules(&self) -> FileRules {
        FileRules::create_once()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(Import::new("swagger-jsdoc").default("swaggerJSDoc"))
            .add(Self::options())
            .add(RawCode::new(
                "const swaggerSpec = swaggerJSDoc(options);\nexport default swaggerSpec;",
            ))
            .render()
    }
}
