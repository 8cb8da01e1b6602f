//! Router method call (`router.get('/', ...)`).

use apigen_codegen::{CodeFragment, Renderable};
use apigen_core::HttpMethod;

/// A route binding on an Express router.
///
/// Arguments after the path are the middleware chain followed by the
/// handler, in the order they run.
#[derive(Debug, Clone)]
pub struct RouteCall {
    router: String,
    method: HttpMethod,
    path: String,
    chain: Vec<String>,
}

impl RouteCall {
    pub fn new(router: impl Into<String>, method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            router: router.into(),
            method,
            path: path.into(),
            chain: Vec::new(),
        }
    }

    /// Append a middleware or handler expression.
    pub fn then(mut self, expr: impl Into<String>) -> Self {
        self.chain.push(expr.into());
        self
    }

    pub fn build(&self) -> String {
        let mut args = vec![format!("'{}'", self.path)];
        args.extend(self.chain.iter().cloned());
        format!(
            "{}.{}({});",
            self.router,
            self.method.as_str(),
            args.join(", ")
        )
    }
}

impl Renderable for RouteCall {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(self.build())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_route() {
        let route = RouteCall::new("router", HttpMethod::Post, "/")
            .then("verifyToken")
            .then("isAdmin")
            .then("createItem");
        assert_eq!(
            route.build(),
            "router.post('/', verifyToken, isAdmin, createItem);"
        );
    }
}
