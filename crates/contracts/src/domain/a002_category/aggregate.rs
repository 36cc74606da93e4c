use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Category identifier as stored in `categories.json`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl CategoryId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.as_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        i64::from_string(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid category id: {}", e))
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Classification label attachable to an event.
///
/// Only `{id, name}` is kept; any other field in the source payload is
/// dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default, deserialize_with = "crate::domain::common::serde_helpers::null_as_default")]
    pub name: String,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
        }
    }
}

/// Envelope of `GET /categories.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesPayload {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl CategoriesPayload {
    /// Categories in the order they were received
    pub fn into_categories(self) -> Vec<Category> {
        self.categories
    }
}

/// Find the category whose string id equals a `<select>` value.
///
/// Returns `None` for the placeholder option (empty value) and for values
/// that do not belong to any known category.
pub fn find_by_value<'a>(categories: &'a [Category], value: &str) -> Option<&'a Category> {
    let id = CategoryId::from_string(value).ok()?;
    categories.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_keeps_order_and_drops_extra_fields() {
        let json = r#"{
            "categories": [
                { "id": 3, "name": "sports", "color": "green" },
                { "id": 1, "name": "games" },
                { "id": 2, "name": "relaxation" }
            ]
        }"#;
        let payload: CategoriesPayload = serde_json::from_str(json).unwrap();
        let categories = payload.into_categories();
        assert_eq!(
            categories,
            vec![
                Category::new(3, "sports"),
                Category::new(1, "games"),
                Category::new(2, "relaxation"),
            ]
        );
    }

    #[test]
    fn test_missing_name_becomes_empty() {
        let json = r#"{ "categories": [ { "id": 5 }, { "id": 6, "name": null } ] }"#;
        let payload: CategoriesPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.categories[0].name, "");
        assert_eq!(payload.categories[1].name, "");
    }

    #[test]
    fn test_find_by_value() {
        let categories = vec![Category::new(1, "games"), Category::new(2, "sports")];
        assert_eq!(find_by_value(&categories, "2"), Some(&categories[1]));
        assert_eq!(find_by_value(&categories, ""), None);
        assert_eq!(find_by_value(&categories, "9"), None);
        assert_eq!(find_by_value(&categories, "sports"), None);
    }
}
