//! Mock checkout.
//!
//! No payment is taken. Checking out captures the cart into a [`Receipt`] and
//! then empties the cart.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use pop_shop_core::{OrderNumber, Price};

use crate::cart::{CartEntry, CartStore};

/// Errors that can occur during checkout.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,
}

/// Record of a completed checkout.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub order_number: OrderNumber,
    pub placed_at: DateTime<Utc>,
    /// Cart entries as they were when the order was placed.
    pub lines: Vec<CartEntry>,
    pub total_price: Price,
    pub item_count: u64,
}

/// Place an order for everything in `cart`, then clear it.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to buy; the cart is
/// left untouched.
pub fn checkout(cart: &mut CartStore) -> Result<Receipt, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let snapshot = cart.snapshot();
    let receipt = Receipt {
        order_number: OrderNumber::generate(),
        placed_at: Utc::now(),
        item_count: snapshot.item_count(),
        total_price: snapshot.total_price,
        lines: snapshot.entries,
    };

    cart.clear();

    info!(
        order_number = %receipt.order_number,
        total = %receipt.total_price,
        items = receipt.item_count,
        "Checkout complete"
    );

    Ok(receipt)
}
