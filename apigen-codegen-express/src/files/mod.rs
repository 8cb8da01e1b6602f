//! Express file generators.

mod app_js;
mod controller_js;
mod env_example;
mod middlewares;
mod model_js;
mod package_json;
mod routes_js;
mod swagger_js;
mod validator_js;

pub use app_js::AppJs;
pub use controller_js::ControllerJs;
pub use env_example::EnvExample;
pub use middlewares::{AuthMiddleware, ValidateMiddleware};
pub use model_js::ModelJs;
pub use package_json::{Dependency, PackageJson};
pub use routes_js::RoutesJs;
pub use swagger_js::SwaggerJs;
pub use validator_js::ValidatorJs;
