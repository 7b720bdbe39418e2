//! Read-only product catalog.
//!
//! The storefront ships with a fixed list of eight figures. An alternate list
//! can be loaded from JSON (see [`Catalog::from_json`]); either way the catalog
//! never changes after it is built.

use std::collections::HashSet;

use thiserror::Error;

use pop_shop_core::{Price, Product, ProductId};

/// Errors building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog has no products")]
    Empty,
    #[error("duplicate product id in catalog: {0}")]
    DuplicateId(ProductId),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// `(id, name, price in cents, image)` for the built-in catalog.
const DEFAULT_PRODUCTS: &[(&str, &str, i64, &str)] = &[
    ("1", "Pop! Anduin Wrynn", 1499, "pop-anduin.png"),
    ("2", "Pop! Illidan Stormrage", 1499, "pop-illidan.png"),
    ("3", "Pop! Jaina Proudmoore", 1499, "pop-jaina.png"),
    ("4", "Pop! Xalatath", 1499, "pop-xalatath.png"),
    ("5", "Pop! Aleria Windrunner", 1499, "pop-aleria.png"),
    ("6", "Pop! Thrall", 1499, "pop-thrall.png"),
    ("7", "Pop! Sylvanas Windrunner", 2999, "pop-sylvanas.png"),
    ("8", "Pop! The Lich King", 5499, "pop-lichking.png"),
];

/// Immutable list of purchasable products.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for an empty list and
    /// [`CatalogError::DuplicateId`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self { products })
    }

    /// Parse a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if the document is malformed (including
    /// blank ids or negative prices), or any error from [`Catalog::new`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }

    /// All products in display order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false for a constructed catalog; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        // Every built-in row is valid; `test_builtin_rows_are_valid` checks each one.
        let products: Vec<Product> = DEFAULT_PRODUCTS
            .iter()
            .filter_map(|&row| builtin_product(row))
            .collect();
        debug_assert_eq!(
            products.len(),
            DEFAULT_PRODUCTS.len(),
            "built-in catalog row failed validation"
        );
        Self { products }
    }
}

fn builtin_product((id, name, cents, image): (&str, &str, i64, &str)) -> Option<Product> {
    let id = ProductId::parse(id).ok()?;
    let price = Price::from_cents(cents).ok()?;
    Some(Product::new(id, name, price, image))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProductId {
        ProductId::parse(s).unwrap()
    }

    #[test]
    fn test_default_catalog() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 8);

        let lich_king = catalog.get(&id("8")).unwrap();
        assert_eq!(lich_king.name, "Pop! The Lich King");
        assert_eq!(lich_king.unit_price, Price::from_cents(5499).unwrap());

        let sylvanas = catalog.get(&id("7")).unwrap();
        assert_eq!(sylvanas.unit_price, Price::from_cents(2999).unwrap());
    }

    #[test]
    fn test_builtin_rows_are_valid() {
        for &row in DEFAULT_PRODUCTS {
            assert!(builtin_product(row).is_some(), "invalid built-in row: {row:?}");
        }
        let ids: HashSet<&str> = DEFAULT_PRODUCTS.iter().map(|&(id, ..)| id).collect();
        assert_eq!(ids.len(), DEFAULT_PRODUCTS.len());
    }

    #[test]
    fn test_default_catalog_order() {
        let ids: Vec<_> = Catalog::default()
            .products()
            .iter()
            .map(|p| p.id.as_str().to_owned())
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_get_unknown() {
        assert!(Catalog::default().get(&id("99")).is_none());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(Catalog::new(Vec::new()), Err(CatalogError::Empty)));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let product = Product::new(id("1"), "A", Price::ZERO, "");
        let result = Catalog::new(vec![product.clone(), product]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(dup)) if dup.as_str() == "1"));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "a", "name": "Pop! Arthas", "unit_price": "19.99"},
            {"id": "b", "name": "Pop! Garrosh", "unit_price": "24.50", "image_ref": "garrosh.png"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&id("b")).unwrap().image_ref, "garrosh.png");
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Json(_))
        ));
    }
}
