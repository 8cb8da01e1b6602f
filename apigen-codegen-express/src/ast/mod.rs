//! JavaScript AST nodes used by the file generators.

mod handler;
mod imports;
mod object;
mod route;
mod swagger;

pub use handler::Handler;
pub use imports::Import;
pub use object::JsObject;
pub use route::RouteCall;
pub use swagger::SwaggerDoc;
