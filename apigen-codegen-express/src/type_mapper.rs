//! Type projection tables for the Express target.

use apigen_codegen::TypeMapper;
use apigen_core::FieldType;

/// Projects field types onto Mongoose schema types.
pub struct MongooseTypeMapper;

impl TypeMapper for MongooseTypeMapper {
    fn target(&self) -> &'static str {
        "mongoose"
    }

    fn map_field_type(&self, field_type: &FieldType) -> &'static str {
        match field_type {
            FieldType::Number => "Number",
            FieldType::Boolean => "Boolean",
            FieldType::String => "String",
            FieldType::Unrecognized(_) => self.fallback_type(),
        }
    }

    fn fallback_type(&self) -> &'static str {
        "String"
    }
}

/// Projects field types onto Joi validators.
pub struct JoiTypeMapper;

impl TypeMapper for JoiTypeMapper {
    fn target(&self) -> &'static str {
        "joi"
    }

    fn map_field_type(&self, field_type: &FieldType) -> &'static str {
        match field_type {
            FieldType::Number => "Joi.number()",
            FieldType::Boolean => "Joi.boolean()",
            FieldType::String => "Joi.string()",
            FieldType::Unrecognized(_) => self.fallback_type(),
        }
    }

    fn fallback_type(&self) -> &'static str {
        "Joi.string()"
    }
}

/// Projects field types onto OpenAPI schema types for route documentation.
pub struct OpenApiTypeMapper;

impl TypeMapper for OpenApiTypeMapper {
    fn target(&self) -> &'static str {
        "openapi"
    }

    fn map_field_type(&self, field_type: &FieldType) -> &'static str {
        match field_type {
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::String => "string",
            FieldType::Unrecognized(_) => self.fallback_type(),
        }
    }

    fn fallback_type(&self) -> &'static str {
        "string"
    }
}
