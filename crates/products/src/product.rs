use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use catalog_core::{Entity, ProductId};

/// A single catalog entry.
///
/// `id`, `name` and `category` are the only fields the catalog interprets.
/// Everything else in the source record (price, description, ...) lands in
/// `attributes` and is written back out unchanged, flattened next to the
/// known fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    #[serde(flatten)]
    attributes: Map<String, JsonValue>,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            attributes: Map::new(),
        }
    }

    /// Attach a pass-through attribute. Keys shadowing `id`, `name` or
    /// `category` are ignored so the record always serializes unambiguously.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let key = key.into();
        if !matches!(key.as_str(), "id" | "name" | "category") {
            self.attributes.insert(key, value.into());
        }
        self
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn attribute(&self, key: &str) -> Option<&JsonValue> {
        self.attributes.get(key)
    }

    /// Case-insensitive exact comparison against `category`.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
