//! Mongoose model generator.

use std::path::{Path, PathBuf};

use apigen_codegen::{CodeFragment, Renderable, TypeMapper};
use apigen_core::{FieldMap, FileRules, GeneratedFile, ResourceNames};

use crate::{
    ast::{Import, JsObject},
    code_file::{CodeFile, RawCode},
    shape::{DEFAULT_STATUS_VALUES, SchemaShape, quoted_list},
    type_mapper::MongooseTypeMapper,
};

/// `models/<name>.model.js`: the persistence schema of a resource.
pub struct ModelJs<'a> {
    names: &'a ResourceNames,
    fields: &'a FieldMap,
}

impl<'a> ModelJs<'a> {
    pub fn new(names: &'a ResourceNames, fields: &'a FieldMap) -> Self {
        Self { names, fields }
    }

    /// One `name: { type, required }` declaration per field.
    fn declarations(&self) -> JsObject {
        match SchemaShape::of(self.fields) {
            SchemaShape::Declared(fields) => {
                fields.iter().fold(JsObject::new(), |obj, (name, ty)| {
                    let decl = JsObject::new()
                        .raw("type", MongooseTypeMapper.map_field_type(ty))
                        .raw("required", "true");
                    obj.raw(name, decl.inline())
                })
            }
            SchemaShape::Default => JsObject::new()
                .raw(
                    "name",
                    JsObject::new()
                        .raw("type", "String")
                        .raw("required", "true")
                        .inline(),
                )
                .raw(
                    "status",
                    JsObject::new()
                        .raw("type", "String")
                        .raw("enum", format!("[{}]", quoted_list(&DEFAULT_STATUS_VALUES)))
                        .string("default", DEFAULT_STATUS_VALUES[0])
                        .inline(),
                ),
        }
    }
}

impl GeneratedFile for ModelJs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("models").join(format!("{}.model.js", self.names.var))
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        let schema_ident = self.names.schema_ident();
        let schema = CodeFragment::block(
            format!("const {schema_ident} = new mongoose.Schema({{"),
            self.declarations().to_fragments(),
            Some("}, { timestamps: true });".to_string()),
        );

        CodeFile::new()
            .import(Import::new("mongoose").default("mongoose"))
            .add(schema)
            .add(RawCode::new(format!(
                "export default mongoose.model('{}', {schema_ident});",
                self.names.model
            )))
            .render()
    }
}
