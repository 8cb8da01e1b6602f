//! Route manifest generator.

use std::path::{Path, PathBuf};

use apigen_codegen::{CodeFragment, Renderable, TypeMapper};
use apigen_core::{FieldMap, FileRules, GeneratedFile, Guard, Operation, ResourceNames};

use crate::{
    ast::{Import, RouteCall, SwaggerDoc},
    code_file::{CodeFile, RawCode},
    shape::{DEFAULT_STATUS_VALUES, SchemaShape},
    type_mapper::OpenApiTypeMapper,
};

const ROUTER: &str = "router";

/// `routes/<name>.routes.js`: an Express router binding the five
/// operations, each preceded by its swagger-jsdoc block.
pub struct RoutesJs<'a> {
    names: &'a ResourceNames,
    fields: &'a FieldMap,
}

impl<'a> RoutesJs<'a> {
    pub fn new(names: &'a ResourceNames, fields: &'a FieldMap) -> Self {
        Self { names, fields }
    }

    fn imports(&self) -> Vec<Import> {
        let var = &self.names.var;
        vec![
            Import::new("express").default("express"),
            Import::new(format!("../controllers/{var}.controller.js"))
                .named_all(Operation::ALL.map(|op| op.handler_name(self.names))),
            Import::new("../middlewares/auth.middleware.js").named_all(["verifyToken", "isAdmin"]),
            Import::new("../middlewares/validate.middleware.js").default("validate"),
            Import::new(format!("../validators/{var}.validator.js"))
                .named(self.names.schema_ident()),
        ]
    }

    fn guard_expr(&self, guard: Guard) -> String {
        match guard {
            Guard::Authenticate => "verifyToken".to_string(),
            Guard::Authorize => "isAdmin".to_string(),
            Guard::Validate => format!("validate({})", self.names.schema_ident()),
        }
    }

    fn route(&self, op: Operation) -> RouteCall {
        let call = RouteCall::new(ROUTER, op.method(), op.route_path());
        op.guards()
            .into_iter()
            .fold(call, |call, guard| call.then(self.guard_expr(guard)))
            .then(op.handler_name(self.names))
    }

    fn tags_doc(&self) -> SwaggerDoc {
        let tag = self.names.tag();
        SwaggerDoc::new()
            .line(0, "tags:")
            .line(1, format!("name: {tag}"))
            .line(1, format!("description: Manage {tag}"))
    }

    fn summary(&self, op: Operation) -> String {
        let model = &self.names.model;
        match op {
            Operation::List => format!("Get all {}", self.names.tag()),
            Operation::Get => format!("Get {model} by id"),
            Operation::Create => format!("Create {model}"),
            Operation::Update => format!("Update {model}"),
            Operation::Delete => format!("Delete {model}"),
        }
    }

    fn success_description(&self, op: Operation) -> String {
        let model = &self.names.model;
        match op {
            Operation::List => format!("List of {}", self.names.tag()),
            Operation::Get => format!("The {model}"),
            Operation::Create => format!("{model} created"),
            Operation::Update => format!("{model} updated"),
            Operation::Delete => format!("{model} deleted"),
        }
    }

    /// Object schema of the request body, relative to `schema:`.
    fn body_schema(&self) -> Vec<(usize, String)> {
        let mut lines = vec![(0, "type: object".to_string())];
        let mut required = Vec::new();
        lines.push((0, "properties:".to_string()));

        match SchemaShape::of(self.fields) {
            SchemaShape::Declared(fields) => {
                for (name, ty) in fields.iter() {
                    lines.push((1, format!("{name}:")));
                    lines.push((2, format!("type: {}", OpenApiTypeMapper.map_field_type(ty))));
                    required.push(name.to_string());
                }
            }
            SchemaShape::Default => {
                lines.push((1, "name:".to_string()));
                lines.push((2, "type: string".to_string()));
                lines.push((1, "status:".to_string()));
                lines.push((2, "type: string".to_string()));
                lines.push((2, format!("enum: [{}]", DEFAULT_STATUS_VALUES.join(", "))));
                required.push("name".to_string());
            }
        }

        lines.push((0, format!("required: [{}]", required.join(", "))));
        lines
    }

    fn operation_doc(&self, op: Operation) -> SwaggerDoc {
        let path = if op.takes_id() {
            format!("{}/{{id}}:", self.names.api_path())
        } else {
            format!("{}:", self.names.api_path())
        };

        let mut doc = SwaggerDoc::new()
            .line(0, path)
            .line(1, format!("{}:", op.method().as_str()))
            .line(2, format!("summary: {}", self.summary(op)))
            .line(2, format!("tags: [{}]", self.names.tag()))
            .line(2, "security:")
            .line(3, "- bearerAuth: []");

        if op.takes_id() {
            doc = doc
                .line(2, "parameters:")
                .line(3, "- in: path")
                .line(4, "name: id")
                .line(4, "required: true")
                .line(4, "schema:")
                .line(5, "type: string");
        }

        if op.validates_body() {
            doc = doc
                .line(2, "requestBody:")
                .line(3, "required: true")
                .line(3, "content:")
                .line(4, "application/json:")
                .line(5, "schema:")
                .lines(6, self.body_schema());
        }

        doc = doc
            .line(2, "responses:")
            .line(3, format!("{}:", op.success_status()))
            .line(4, format!("description: {}", self.success_description(op)));

        for (status, description) in self.failure_responses(op) {
            doc = doc
                .line(3, format!("{status}:"))
                .line(4, format!("description: {description}"));
        }

        doc
    }

    /// Error responses, in status order.
    fn failure_responses(&self, op: Operation) -> Vec<(u16, String)> {
        let mut responses = Vec::new();
        for guard in op.guards() {
            match guard {
                Guard::Validate => responses.push((400, "Invalid request body".to_string())),
                Guard::Authenticate => responses.push((401, "Missing or invalid token".to_string())),
                Guard::Authorize => responses.push((403, "Admin access required".to_string())),
            }
        }
        if op == Operation::Get {
            responses.push((404, format!("{} not found", self.names.model)));
        }
        responses.sort_by_key(|(status, _)| *status);
        responses
    }

    fn binding(&self, op: Operation) -> CodeFragment {
        let mut fragments = self.operation_doc(op).to_fragments();
        fragments.extend(self.route(op).to_fragments());
        CodeFragment::sequence(fragments)
    }
}

impl GeneratedFile for RoutesJs<'_> {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("routes").join(format!("{}.routes.js", self.names.var))
    }

    fn rules(&self) -> FileRules {
        FileRules::always()
    }

    fn render(&self) -> String {
        CodeFile::new()
            .imports(self.imports())
            .add(RawCode::new(format!("const {ROUTER} = express.Router();")))
            .add(self.tags_doc())
            .add_all(Operation::ALL.map(|op| self.binding(op)))
            .add(RawCode::new(format!("export default {ROUTER};")))
            .render()
    }
}
