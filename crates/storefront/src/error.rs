//! Unified error type for storefront operations.
//!
//! The cart itself never fails; errors come from the collaborators around it
//! (catalog lookups, checkout, configuration).

use thiserror::Error;

use pop_shop_core::{ProductId, ProductIdError};

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// The catalog has no product with this id.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),

    /// A product id could not be parsed from user input.
    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] ProductIdError),

    /// Catalog could not be built.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout was refused.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Reading a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
