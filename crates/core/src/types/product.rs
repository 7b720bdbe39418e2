//! Catalog product.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// A purchasable product as supplied by the catalog.
///
/// Products are immutable once built; the cart keeps its own copy of each
/// product it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, unique within a catalog.
    pub id: ProductId,
    /// Display label.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Price,
    /// Opaque reference to display media.
    #[serde(default)]
    pub image_ref: String,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: Price,
        image_ref: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_image() {
        let json = r#"{"id":"9","name":"Pop! Arthas","unit_price":"19.99"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id.as_str(), "9");
        assert_eq!(product.unit_price, Price::from_cents(1999).unwrap());
        assert!(product.image_ref.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_negative_price() {
        let json = r#"{"id":"9","name":"Bad","unit_price":"-1.00"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }
}
