//! Pop! Shop Core - Shared types library.
//!
//! This crate provides the domain types used across all Pop! Shop components:
//! - `storefront` - Catalog, cart state, and mock checkout
//! - `cli` - Terminal storefront
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O and no global state. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, prices, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
