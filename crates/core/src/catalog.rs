//! Catalog item model — the read-only component definitions users pick from.
//!
//! Catalog items are loaded once per process (built-in set or a JSON file,
//! see `promptloom-catalog`) and never mutated. The bucket references them by
//! id; the composer resolves those references at composition time.

use serde::{Deserialize, Serialize};

/// The category string that switches composition into backend mode.
///
/// Compared for exact equality — a plain string discriminator, not an enum,
/// because catalogs are user-suppliable and carry free-form categories.
pub const BACKEND_CATEGORY: &str = "Backend / Database";

/// A reusable component definition.
///
/// `template` may contain placeholder tokens of the form `[name]`; every name
/// listed in `variables` is expected to appear that way in the template. A
/// listed variable without a matching token is silently unused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique id, referenced by bucket entries.
    pub id: String,

    /// Display name, used verbatim in composed instruction lines.
    pub title: String,

    /// Classification, e.g. "UI / Frontend" or "Backend / Database".
    pub category: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,

    #[serde(default)]
    pub description: String,

    /// The instruction template with `[name]` placeholders.
    pub template: String,

    /// Placeholder names expected in `template`, in substitution order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<String>,

    /// Free-text intents this item serves, used by suggestion matching.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub business_intents: Vec<String>,
}

impl CatalogItem {
    /// Whether this item triggers the backend-flavored document sections.
    pub fn is_backend(&self) -> bool {
        self.category == BACKEND_CATEGORY
    }
}

/// Find the first catalog item with the given id.
pub fn find_item<'a>(items: &'a [CatalogItem], id: &str) -> Option<&'a CatalogItem> {
    items.iter().find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, category: &str) -> CatalogItem {
        CatalogItem {
            id: id.into(),
            title: id.into(),
            category: category.into(),
            subcategory: None,
            description: String::new(),
            template: "A template".into(),
            variables: vec![],
            business_intents: vec![],
        }
    }

    #[test]
    fn find_item_returns_first_match() {
        let mut a = item("card", "UI / Frontend");
        a.title = "First".into();
        let mut b = item("card", "UI / Frontend");
        b.title = "Second".into();
        let items = vec![a, b];

        let found = find_item(&items, "card").unwrap();
        assert_eq!(found.title, "First");
    }

    #[test]
    fn find_item_unknown_id_is_none() {
        let items = vec![item("card", "UI / Frontend")];
        assert!(find_item(&items, "ghost").is_none());
    }

    #[test]
    fn backend_category_is_exact_match() {
        assert!(item("schema", "Backend / Database").is_backend());
        assert!(!item("card", "UI / Frontend").is_backend());
        assert!(!item("odd", "backend / database").is_backend());
    }

    #[test]
    fn optional_fields_omitted_from_json() {
        let json = serde_json::to_string(&item("card", "UI / Frontend")).unwrap();
        assert!(!json.contains("subcategory"));
        assert!(!json.contains("variables"));
        assert!(!json.contains("business_intents"));
    }
}
