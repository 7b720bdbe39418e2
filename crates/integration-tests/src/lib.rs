//! Integration tests for Pop! Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pop-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Invariants of the cart over long operation sequences
//! - `cart_scenarios` - The documented add / decrement / set / clear scenarios
//! - `checkout_flow` - Session-level shopping and checkout
//!
//! This crate also hosts the fixtures those tests share.

use pop_shop_core::{Price, Product, ProductId};
use pop_shop_storefront::Catalog;

/// Build a product with a price in cents.
///
/// # Panics
///
/// Panics if `id` is blank or `cents` is negative.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn product(id: &str, cents: i64) -> Product {
    Product::new(
        ProductId::parse(id).unwrap(),
        format!("Figure {id}"),
        Price::from_cents(cents).unwrap(),
        format!("{id}.png"),
    )
}

/// Parse a product id.
///
/// # Panics
///
/// Panics if `id` is blank.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn id(id: &str) -> ProductId {
    ProductId::parse(id).unwrap()
}

/// Price from cents.
///
/// # Panics
///
/// Panics if `cents` is negative.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn cents(cents: i64) -> Price {
    Price::from_cents(cents).unwrap()
}

/// The built-in catalog's product by id.
///
/// # Panics
///
/// Panics if the id is not in the default catalog.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn catalog_product(product_id: &str) -> Product {
    Catalog::default().get(&id(product_id)).unwrap().clone()
}
