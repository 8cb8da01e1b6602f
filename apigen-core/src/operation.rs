//! The fixed set of CRUD operations generated for every resource.

use crate::ResourceNames;

/// HTTP method of a route binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Lower-case method name, as used by router APIs and OpenAPI paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

/// A step a request passes through before reaching its handler.
///
/// Guards always run in declaration order: authenticate, then authorize,
/// then validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Guard {
    /// Caller must present a valid token.
    Authenticate,
    /// Caller must hold elevated privileges.
    Authorize,
    /// Request body must satisfy the validation schema.
    Validate,
}

/// One of the five operations every resource exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// All operations, in the order they are rendered.
    pub const ALL: [Operation; 5] = [
        Operation::List,
        Operation::Get,
        Operation::Create,
        Operation::Update,
        Operation::Delete,
    ];

    pub fn method(&self) -> HttpMethod {
        match self {
            Self::List | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Whether the route addresses a single document by id.
    pub fn takes_id(&self) -> bool {
        matches!(self, Self::Get | Self::Update | Self::Delete)
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Create | Self::Update | Self::Delete)
    }

    /// Whether the request body is checked against the validation schema.
    pub fn validates_body(&self) -> bool {
        matches!(self, Self::Create | Self::Update)
    }

    /// Router-relative path (`/` or `/:id`).
    pub fn route_path(&self) -> &'static str {
        if self.takes_id() { "/:id" } else { "/" }
    }

    /// Status code of a successful response.
    pub fn success_status(&self) -> u16 {
        match self {
            Self::Create => 201,
            _ => 200,
        }
    }

    /// Guards this operation runs, in pipeline order.
    pub fn guards(&self) -> Vec<Guard> {
        let mut guards = vec![Guard::Authenticate];
        if self.is_write() {
            guards.push(Guard::Authorize);
        }
        if self.validates_body() {
            guards.push(Guard::Validate);
        }
        guards
    }

    /// Exported handler name (e.g., "getAllItems", "createItem").
    pub fn handler_name(&self, names: &ResourceNames) -> String {
        match self {
            Self::List => format!("getAll{}", names.tag()),
            Self::Get => format!("get{}", names.model),
            Self::Create => format!("create{}", names.model),
            Self::Update => format!("update{}", names.model),
            Self::Delete => format!("delete{}", names.model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_operations_only_authenticate() {
        assert_eq!(Operation::List.guards(), [Guard::Authenticate]);
        assert_eq!(Operation::Get.guards(), [Guard::Authenticate]);
    }

    #[test]
    fn test_write_operations_pipeline() {
        let full = [Guard::Authenticate, Guard::Authorize, Guard::Validate];
        assert_eq!(Operation::Create.guards(), full);
        assert_eq!(Operation::Update.guards(), full);
        assert_eq!(
            Operation::Delete.guards(),
            [Guard::Authenticate, Guard::Authorize]
        );
    }

    #[test]
    fn test_guards_are_ordered() {
        for op in Operation::ALL {
            let guards = op.guards();
            let mut sorted = guards.clone();
            sorted.sort();
            assert_eq!(guards, sorted, "{op:?}");
        }
    }

    #[test]
    fn test_paths_and_methods() {
        let bindings: Vec<_> = Operation::ALL
            .iter()
            .map(|op| (op.method().as_str(), op.route_path()))
            .collect();
        assert_eq!(
            bindings,
            [
                ("get", "/"),
                ("get", "/:id"),
                ("post", "/"),
                ("put", "/:id"),
                ("delete", "/:id"),
            ]
        );
    }

    #[test]
    fn test_handler_names() {
        let names = ResourceNames::new("item");
        let handlers: Vec<_> = Operation::ALL
            .iter()
            .map(|op| op.handler_name(&names))
            .collect();
        assert_eq!(
            handlers,
            ["getAllItems", "getItem", "createItem", "updateItem", "deleteItem"]
        );
    }

    #[test]
    fn test_success_status() {
        assert_eq!(Operation::Create.success_status(), 201);
        assert_eq!(Operation::Get.success_status(), 200);
    }
}
