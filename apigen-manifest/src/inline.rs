//! Inline `key:type[,key:type...]` field lists.

use apigen_core::{FieldMap, FieldType};

/// Parse an inline field list such as `price:number,active:boolean`.
///
/// Never fails. A pair without a `:` or with more than one `:` keeps its
/// name (the text before the first `:`) and gets an empty, unrecognized
/// type, which type projection renders as text. Empty pairs and pairs
/// with an empty name are dropped.
pub fn parse_inline(raw: &str) -> FieldMap {
    raw.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .filter_map(parse_pair)
        .collect()
}

fn parse_pair(pair: &str) -> Option<(String, FieldType)> {
    let mut parts = pair.split(':');
    let name = parts.next().unwrap_or_default().trim();
    if name.is_empty() {
        return None;
    }

    let field_type = match (parts.next(), parts.next()) {
        (Some(tag), None) => FieldType::from_tag(tag.trim()),
        _ => FieldType::Unrecognized(String::new()),
    };

    Some((name.to_string(), field_type))
}
