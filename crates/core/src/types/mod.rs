//! Core types for Pop! Shop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::{OrderNumber, ProductId, ProductIdError};
pub use price::{Price, PriceError};
pub use product::Product;
pub use quantity::{Quantity, QuantityError};
