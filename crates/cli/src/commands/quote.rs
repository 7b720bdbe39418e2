//! `pop-shop quote` - build a cart from arguments and print the summary.
//!
//! # Usage
//!
//! ```bash
//! # One Anduin, three Lich Kings
//! pop-shop quote 1 8:3
//! ```

use std::io::Write;

use thiserror::Error;

use pop_shop_core::ProductId;
use pop_shop_storefront::input::parse_quantity_input;
use pop_shop_storefront::{ShopSession, StorefrontError};

use crate::render;

/// Errors parsing a quote item.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("Invalid quantity in '{0}'")]
    InvalidQuantity(String),
    #[error(transparent)]
    Storefront(#[from] StorefrontError),
}

/// One `ID[:QTY]` argument.
#[derive(Debug, PartialEq, Eq)]
pub struct QuoteItem {
    pub product_id: ProductId,
    pub quantity: Option<i64>,
}

impl QuoteItem {
    /// Parse `ID` or `ID:QTY`.
    ///
    /// # Errors
    ///
    /// Returns an error for a blank id or a quantity with no positive value.
    pub fn parse(raw: &str) -> Result<Self, QuoteError> {
        let (id, quantity) = match raw.split_once(':') {
            Some((id, qty)) => {
                let qty = parse_quantity_input(qty)
                    .ok_or_else(|| QuoteError::InvalidQuantity(raw.to_string()))?;
                (id, Some(qty))
            }
            None => (raw, None),
        };

        let product_id = ProductId::parse(id).map_err(StorefrontError::from)?;
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

/// Add every item to the session's cart.
///
/// A repeated id accumulates like repeated taps on "Add to Cart"; an explicit
/// quantity replaces whatever the entry held.
///
/// # Errors
///
/// Returns an error if any product id is not in the catalog.
pub fn fill(session: &mut ShopSession, items: &[QuoteItem]) -> Result<(), QuoteError> {
    for item in items {
        session.add_to_cart(&item.product_id)?;
        if let Some(quantity) = item.quantity {
            session.set_quantity(&item.product_id, quantity);
        }
    }
    Ok(())
}

/// Run the `quote` command.
///
/// # Errors
///
/// Returns an error if an argument is malformed, names an unknown product, or
/// writing to `out` fails.
pub fn run<W: Write>(
    session: &mut ShopSession,
    items: &[String],
    json: bool,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = items
        .iter()
        .map(|raw| QuoteItem::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;
    fill(session, &items)?;

    let snapshot = session.snapshot();
    if json {
        serde_json::to_writer_pretty(&mut *out, &snapshot)?;
        writeln!(out)?;
    } else {
        render::cart(out, &snapshot)?;
    }
    Ok(())
}
