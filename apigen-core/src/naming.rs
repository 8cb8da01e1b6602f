//! Identifiers derived from a resource name.

/// Upper-case the first character, leaving the rest untouched
/// (e.g., "item" -> "Item", "blogPost" -> "BlogPost").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// The three name forms every artifact is rendered from.
///
/// All derived identifiers come from here so that the four artifacts of a
/// resource always agree with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceNames {
    /// Capitalized singular, used for model and handler identifiers.
    pub model: String,
    /// Lower-case singular, used for file names and variables.
    pub var: String,
    /// `var` plus a fixed `s` suffix, used in URL paths.
    ///
    /// No irregular plurals: "category" becomes "categorys".
    pub plural: String,
}

impl ResourceNames {
    pub fn new(name: &str) -> Self {
        let var = name.to_lowercase();
        let plural = format!("{var}s");
        Self {
            model: capitalize(name),
            var,
            plural,
        }
    }

    /// Documentation tag and list-handler suffix (e.g., "Items").
    pub fn tag(&self) -> String {
        format!("{}s", self.model)
    }

    /// Name of the validation schema export (e.g., "itemSchema").
    pub fn schema_ident(&self) -> String {
        format!("{}Schema", self.var)
    }

    /// Name of the router import in the aggregator (e.g., "itemRoutes").
    pub fn routes_ident(&self) -> String {
        format!("{}Routes", self.var)
    }

    /// Mount point of the resource's router (e.g., "/api/items").
    pub fn api_path(&self) -> String {
        format!("/api/{}", self.plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("item"), "Item");
        assert_eq!(capitalize("blogPost"), "BlogPost");
        assert_eq!(capitalize("Item"), "Item");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_derived_forms() {
        let names = ResourceNames::new("product");
        assert_eq!(names.model, "Product");
        assert_eq!(names.var, "product");
        assert_eq!(names.plural, "products");
        assert_eq!(names.tag(), "Products");
        assert_eq!(names.schema_ident(), "productSchema");
        assert_eq!(names.routes_ident(), "productRoutes");
        assert_eq!(names.api_path(), "/api/products");
    }

    #[test]
    fn test_fixed_suffix_plural() {
        let names = ResourceNames::new("category");
        assert_eq!(names.plural, "categorys");
        assert_eq!(names.api_path(), "/api/categorys");
    }

    #[test]
    fn test_mixed_case_input() {
        let names = ResourceNames::new("blogPost");
        assert_eq!(names.model, "BlogPost");
        assert_eq!(names.var, "blogpost");
        assert_eq!(names.plural, "blogposts");
    }
}
