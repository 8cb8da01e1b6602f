//! Controller generator.

use std::path::{Path, PathBuf};

use apigen_core::{FileRules, GeneratedFile, Operation, ResourceNames};

use crate::{
    ast::{Handler, Import, JsObject},
    code_file::CodeFile,
};

/// `controllers/<name>.controller.js`: one handler per [`Operation`].
///
/// The handlers do not depend on the resource's fields, so every resource
/// gets the same five handlers with only its names substituted.
pub struct ControllerJs<'a> {
    names: &'a ResourceNames,
}

impl<'a> ControllerJs<'a> {
    pub fn new(names: &'a ResourceNames) -> Self {
        Self { names }
    }

    fn handler(&self, op: Operation) -> Handler {
        let model = &self.names.model;
        let handler = Handler::new(op.handler_name(self.names));

        match op {
            Operation::List => handler
                .body_line(format!("const data = await {model}.find();"))
                .body_line("res.json(data);"),
            Operation::Get => {
                let not_found = JsObject::new().string("message", format!("{model} not found"));
                handler
                    .body_line(format!("const data = await {model}.findById(req.params.id);"))
                    .body_line(format!(
                        "if (!data) return res.status(404).json({});",
                        not_found.inline()
                    ))
                    .body_line("res.json(data);")
            }
            Operation::Create => handler
                .body_line(format!("const data = await {model}.create(req.body);"))
                .body_line(format!(
                    "res.status({}).json(data);",
                    op.success_status()
                )),
            // No existence check; responds with the updated document (or null)
            Operation::Update => {
                let options = JsObject::new().raw("new", "true");
                handler
                    .body_line(format!(
                        "const data = await {model}.findByIdAndUpdate(req.params.id, req.body, {});",
                        options.inline()
                    ))
                    .body_line("res.json(data);")
            }
            Operation::Delete => {
                let deleted = JsObject::new().string("message", format!("{model} deleted"));
                handler
                    .body_line(format!("await {model}.findByIdAndDelete(req.params.id);"))
                    .body_line(format!("res.json({});", deleted.inline()))
            }
        }
    }
}

impl GeneratedFile for ControllerJs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("controllers")
            .join(format!("{}.controller.js", self.names.var))
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .import(
                Import::new(format!("../models/{}.model.js", self.names.var))
                    .default(&self.names.model),
            )
            .add_all(Operation::ALL.map(|op| self.handler(op)))
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_controller() {
        let names = ResourceNames::new("item");

        insta::assert_snapshot!(ControllerJs::new(&names).render(), @r"
import Item from '../models/item.model.js';

export const getAllItems = async (req, res) => {
  const data = await Item.find();
  res.json(data);
};

export const getItem = async (req, res) => {
  const data = await Item.findById(req.params.id);
  if (!data) return res.status(404).json({ message: 'Item not found' });
  res.json(data);
};

export const createItem = async (req, res) => {
  const data = await Item.create(req.body);
  res.status(201).json(data);
};

export const updateItem = async (req, res) => {
  const data = await Item.findByIdAndUpdate(req.params.id, req.body, { new: true });
  res.json(data);
};

export const deleteItem = async (req, res) => {
  await Item.findByIdAndDelete(req.params.id);
  res.json({ message: 'Item deleted' });
};
");
    }

    #[test]
    fn test_path() {
        let names = ResourceNames::new("order");
        assert_eq!(
            ControllerJs::new(&names).path(Path::new(".")),
            Path::new("./controllers/order.controller.js")
        );
    }
}
