//! Joi validator generator.

use std::path::{Path, PathBuf};

use apigen_codegen::{CodeFragment, Renderable, TypeMapper};
use apigen_core::{FieldMap, FileRules, GeneratedFile, ResourceNames};

use crate::{
    ast::{Import, JsObject},
    code_file::CodeFile,
    shape::{DEFAULT_STATUS_VALUES, SchemaShape, quoted_list},
    type_mapper::JoiTypeMapper,
};

/// `validators/<name>.validator.js`: the request body schema of a resource.
pub struct ValidatorJs<'a> {
    names: &'a ResourceNames,
    fields: &'a FieldMap,
}

impl<'a> ValidatorJs<'a> {
    pub fn new(names: &'a ResourceNames, fields: &'a FieldMap) -> Self {
        Self { names, fields }
    }

    fn rules_object(&self) -> JsObject {
        match SchemaShape::of(self.fields) {
            SchemaShape::Declared(fields) => {
                fields.iter().fold(JsObject::new(), |obj, (name, ty)| {
                    obj.raw(name, format!("{}.required()", JoiTypeMapper.map_field_type(ty)))
                })
            }
            // status is the one optional field the generator ever emits
            SchemaShape::Default => JsObject::new()
                .raw("name", "Joi.string().required()")
                .raw(
                    "status",
                    format!(
                        "Joi.string().valid({}).optional()",
                        quoted_list(&DEFAULT_STATUS_VALUES)
                    ),
                ),
        }
    }
}

impl GeneratedFile for ValidatorJs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("validators")
            .join(format!("{}.validator.js", self.names.var))
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        let schema = CodeFragment::block(
            format!("export const {} = Joi.object({{", self.names.schema_ident()),
            self.rules_object().to_fragments(),
            Some("});".to_string()),
        );

        CodeFile::new()
            .import(Import::new("joi").default("Joi"))
            .add(schema)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_fields() {
        let names = ResourceNames::new("item");
        let fields = FieldMap::new()
            .with("price", "number")
            .with("active", "boolean")
            .with("title", "string");

        insta::assert_snapshot!(ValidatorJs::new(&names, &fields).render(), @r"
import Joi from 'joi';

export const itemSchema = Joi.object({
  price: Joi.number().required(),
  active: Joi.boolean().required(),
  title: Joi.string().required(),
});
");
    }

    #[test]
    fn test_default_schema() {
        let names = ResourceNames::new("product");

        insta::assert_snapshot!(ValidatorJs::new(&names, &FieldMap::new()).render(), @r"
import Joi from 'joi';

export const productSchema = Joi.object({
  name: Joi.string().required(),
  status: Joi.string().valid('active', 'inactive').optional(),
});
");
    }

    #[test]
    fn test_unknown_type_is_string() {
        let names = ResourceNames::new("x");
        let fields = FieldMap::new().with("a", "float");
        let content = ValidatorJs::new(&names, &fields).render();
        assert!(content.contains("  a: Joi.string().required(),\n"));
    }
}
