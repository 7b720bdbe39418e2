//! Pop! Shop Storefront library.
//!
//! The cart state manager and the collaborators around it:
//!
//! - [`cart`] - `CartStore`, the sole owner of cart state
//! - [`catalog`] - read-only product list
//! - [`checkout`] - mock checkout producing a receipt
//! - [`session`] - explicitly constructed per-session owner of catalog + cart
//! - [`input`] - sanitization of typed quantities
//! - [`config`] - environment-driven settings
//! - [`error`] - unified error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod input;
pub mod session;

pub use cart::{CartChange, CartEntry, CartSnapshot, CartStore};
pub use catalog::Catalog;
pub use checkout::Receipt;
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use session::ShopSession;
