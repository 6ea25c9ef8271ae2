//! Catalog product type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product in the catalog.
///
/// Only `id` and `title` are interpreted by this crate. Everything else the
/// backend sends (price, image, ...) lands in `attributes` and is passed
/// through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title, matched by catalog search.
    pub title: String,
    /// Display attributes, flattened into the JSON object.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Create a product with no display attributes.
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            attributes: Map::new(),
        }
    }

    /// Set a display attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Look up a display attribute.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Numeric `price` attribute, if present.
    pub fn price(&self) -> Option<f64> {
        self.attribute("price").and_then(|v| match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })
    }

    /// `image` attribute, if present.
    pub fn image(&self) -> Option<&str> {
        self.attribute("image").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_attributes_pass_through() {
        let raw = json!({
            "id": "1",
            "title": "Relógio bonito",
            "price": "22.00",
            "image": "https://example.test/watch.jpg",
            "featured": true
        });

        let product: Product = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(product.id, ProductId::new("1"));
        assert_eq!(product.title, "Relógio bonito");
        assert_eq!(product.price(), Some(22.0));
        assert_eq!(product.image(), Some("https://example.test/watch.jpg"));
        assert_eq!(product.attribute("featured"), Some(&json!(true)));

        assert_eq!(serde_json::to_value(&product).unwrap(), raw);
    }

    #[test]
    fn test_product_requires_id() {
        let result = serde_json::from_value::<Product>(json!({ "title": "No id" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_builder() {
        let product = Product::new("2", "Caneca").with_attribute("price", 9.5);
        assert_eq!(product.price(), Some(9.5));
        assert_eq!(product.image(), None);
    }
}
