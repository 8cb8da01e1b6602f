use apigen_core::FieldMap;

/// Values the built-in `status` field is restricted to.
pub const DEFAULT_STATUS_VALUES: [&str; 2] = ["active", "inactive"];

/// Which schema an artifact renders.
///
/// An empty field map does not mean "no fields": it selects the built-in
/// `name`/`status` schema, whose enum constraint and default value cannot be
/// expressed as plain field entries. Every renderer handles
/// [`SchemaShape::Default`] as its own case.
#[derive(Debug, Clone, Copy)]
pub enum SchemaShape<'a> {
    /// Fields from a preset or inline list, in declaration order.
    Declared(&'a FieldMap),
    /// The built-in two-field schema.
    Default,
}

impl<'a> SchemaShape<'a> {
    pub fn of(fields: &'a FieldMap) -> Self {
        if fields.is_empty() {
            Self::Default
        } else {
            Self::Declared(fields)
        }
    }
}

/// Quote a list of literals for JavaScript (e.g., `'active', 'inactive'`).
pub(crate) fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("'{v}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
