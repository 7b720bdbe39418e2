//! Per-session storefront state.
//!
//! A [`ShopSession`] is built once when the app starts and handed to the
//! presentation layer. It owns the catalog and the cart; the cart is only
//! reachable read-only from outside, so every change goes through the
//! operations below.

use tracing::instrument;

use pop_shop_core::ProductId;

use crate::cart::{CartChange, CartSnapshot, CartStore};
use crate::catalog::Catalog;
use crate::checkout::{self, Receipt};
use crate::config::StorefrontConfig;
use crate::error::{Result, StorefrontError};

/// Catalog plus cart for one shopping session.
#[derive(Debug, Clone)]
pub struct ShopSession {
    catalog: Catalog,
    cart: CartStore,
}

impl ShopSession {
    /// Start a session with an empty cart.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
        }
    }

    /// Start a session using the catalog named by `config`, or the built-in
    /// catalog when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured catalog file cannot be read or parsed.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)?;
                let catalog = Catalog::from_json(&json)?;
                tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
                catalog
            }
            None => Catalog::default(),
        };
        Ok(Self::new(catalog))
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read-only view of the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Current cart contents and total.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Add one unit of a catalog product.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::UnknownProduct`] if the catalog has no such id.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<CartChange> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StorefrontError::UnknownProduct(product_id.clone()))?;
        Ok(self.cart.add_or_increment(product))
    }

    /// Add one unit to a product already in the cart.
    #[instrument(skip(self))]
    pub fn increment(&mut self, product_id: &ProductId) -> CartChange {
        self.cart.increment_quantity(product_id)
    }

    /// Take one unit off a product, removing it at the last unit.
    #[instrument(skip(self))]
    pub fn decrement_or_remove(&mut self, product_id: &ProductId) -> CartChange {
        self.cart.decrement_or_remove(product_id)
    }

    /// Set a product's quantity, flooring at one.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> CartChange {
        self.cart.set_quantity(product_id, quantity)
    }

    /// Place the order and empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Checkout`] if the cart is empty.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Result<Receipt> {
        Ok(checkout::checkout(&mut self.cart)?)
    }
}

impl Default for ShopSession {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
