//! Semantic field types and the canonical field map.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// Semantic type of a generated field.
///
/// This is the language-agnostic tag a field specification carries. Target
/// languages project it onto their own type tokens through a `TypeMapper`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    /// Any tag outside the semantic set, including the empty tag.
    ///
    /// Kept verbatim so it can be reported; type projection treats it as text.
    Unrecognized(String),
}

impl FieldType {
    /// Parse a type tag. Total: unknown tags become [`FieldType::Unrecognized`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Get the tag as written in a field specification.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Unrecognized(tag) => tag,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical mapping of field name to semantic type.
///
/// Iteration follows insertion order. Inserting a name that is already
/// present keeps its original position and replaces its type.
///
/// An empty map is meaningful: renderers fall back to their built-in
/// default schema instead of looping over fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(IndexMap<String, FieldType>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, field_type: impl Into<FieldType>) {
        self.0.insert(name.into(), field_type.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        self.insert(name, field_type);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldType> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.0.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Fields whose tag is outside the semantic set.
    pub fn unrecognized(&self) -> impl Iterator<Item = (&str, &FieldType)> {
        self.iter().filter(|(_, ty)| !ty.is_recognized())
    }
}

impl<N, T> FromIterator<(N, T)> for FieldMap
where
    N: Into<String>,
    T: Into<FieldType>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, ty) in iter {
            map.insert(name, ty);
        }
        map
    }
}
