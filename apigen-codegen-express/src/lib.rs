//! Express resource generator for apigen.
//!
//! Generates a REST resource for an Express server backed by Mongoose,
//! with Joi request validation and swagger-jsdoc route documentation.
//!
//! # Usage
//!
//! ```ignore
//! use apigen_codegen_express::Generator;
//! use apigen_codegen::LanguageCodegen;
//! use apigen_core::FieldMap;
//! use std::path::Path;
//!
//! let fields = FieldMap::new().with("price", "number");
//! let generator = Generator::new("item", fields);
//!
//! // Preview files without writing
//! let files = generator.preview(Path::new("."))?;
//!
//! // Generate files to disk and register the routes in app.js
//! let result = generator.generate(Path::new("."))?;
//! ```
//!
//! # Generated Output
//!
//! Per resource (overwritten on every run):
//!
//! - `models/<name>.model.js` - Mongoose schema and model
//! - `controllers/<name>.controller.js` - CRUD request handlers
//! - `validators/<name>.validator.js` - Joi request body schema
//! - `routes/<name>.routes.js` - Express router with swagger docs
//!
//! Shared (created once, never overwritten):
//!
//! - `app.js` - route aggregator, then merged on every run
//! - `utils/swagger.js`, `middlewares/*.js`, `package.json`, `.env.example`

mod aggregator;
mod code_file;
mod generator;
mod shape;
mod type_mapper;

pub mod ast;
pub mod files;

pub use aggregator::{IMPORTS_SENTINEL, MergeOutcome, ROUTES_SENTINEL, RouteRegistration, merge};
pub use apigen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
pub use code_file::{CodeFile, RawCode};
pub use generator::Generator;
pub use shape::SchemaShape;
pub use type_mapper::{JoiTypeMapper, MongooseTypeMapper, OpenApiTypeMapper};
