//! Route registration into the `app.js` aggregator.
//!
//! The aggregator is treated as free text holding two sentinel comments.
//! Each generated line goes immediately before its sentinel unless the
//! document already contains it, so re-running the generator never
//! duplicates a line and earlier insertions keep their order.

use apigen_codegen::language::LineOutcome;
use apigen_core::ResourceNames;

/// Marks where router imports are inserted.
pub const IMPORTS_SENTINEL: &str = "// AUTO-GENERATED-ROUTE-IMPORTS";
/// Marks where router mounts are inserted.
pub const ROUTES_SENTINEL: &str = "// AUTO-GENERATED-ROUTE-USE";

/// The two lines that wire a resource's router into the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRegistration {
    /// `import itemRoutes from './routes/item.routes.js';`
    pub import: String,
    /// `app.use('/api/items', itemRoutes);`
    pub route: String,
}

impl RouteRegistration {
    pub fn new(names: &ResourceNames) -> Self {
        let routes_ident = names.routes_ident();
        Self {
            import: format!(
                "import {routes_ident} from './routes/{}.routes.js';",
                names.var
            ),
            route: format!("app.use('{}', {routes_ident});", names.api_path()),
        }
    }
}

/// Merged aggregator text and what happened to each line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub text: String,
    pub import: LineOutcome,
    pub route: LineOutcome,
}

impl MergeOutcome {
    /// Whether the text differs from the input.
    pub fn changed(&self) -> bool {
        self.import == LineOutcome::Inserted || self.route == LineOutcome::Inserted
    }
}

/// Insert the registration lines into `text`.
///
/// Never fails: a missing sentinel leaves that line out and is reported as
/// [`LineOutcome::MissingSentinel`].
pub fn merge(text: &str, registration: &RouteRegistration) -> MergeOutcome {
    let (text, import) = insert_before_sentinel(text, &registration.import, IMPORTS_SENTINEL);
    let (text, route) = insert_before_sentinel(&text, &registration.route, ROUTES_SENTINEL);
    MergeOutcome {
        text,
        import,
        route,
    }
}

fn insert_before_sentinel(text: &str, line: &str, sentinel: &str) -> (String, LineOutcome) {
    if text.contains(line) {
        return (text.to_string(), LineOutcome::AlreadyPresent);
    }
    let Some(at) = text.find(sentinel) else {
        return (text.to_string(), LineOutcome::MissingSentinel);
    };

    // Reuse the sentinel's indentation so both stay aligned
    let line_start = text[..at].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &text[line_start..at];
    let indent = if prefix.chars().all(char::is_whitespace) {
        prefix
    } else {
        ""
    };

    // Follow the sentinel line's ending so CRLF files stay CRLF
    let newline = if text[at + sentinel.len()..].starts_with("\r\n") {
        "\r\n"
    } else {
        "\n"
    };

    let mut merged = String::with_capacity(text.len() + line.len() + indent.len() + newline.len());
    merged.push_str(&text[..at]);
    merged.push_str(line);
    merged.push_str(newline);
    merged.push_str(indent);
    merged.push_str(&text[at..]);
    (merged, LineOutcome::Inserted)
}
