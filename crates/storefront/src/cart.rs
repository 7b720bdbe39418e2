//! In-memory shopping cart.
//!
//! [`CartStore`] is the only owner of cart state. Every mutation goes through
//! one of its operations, and every read of the total recomputes it from the
//! current entries, so the total can never drift from the lines it sums.
//!
//! # Invariants
//!
//! - At most one entry per product id.
//! - Every entry holds at least one unit. An entry that would reach zero is
//!   removed instead.
//! - Entries keep the order in which their product was first added.
//!
//! Operations that name a product id not present in the cart do nothing and
//! report [`CartChange::Unchanged`]; they never fail.

use serde::Serialize;
use tracing::debug;

use pop_shop_core::{Price, Product, ProductId, Quantity};

/// A product and how many units of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartEntry {
    product: Product,
    quantity: Quantity,
}

impl CartEntry {
    /// The product this entry holds.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// The product id this entry is keyed by.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    /// Units of the product in the cart.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// `unit_price * quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.unit_price * self.quantity
    }
}

/// What a cart operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartChange {
    /// A new entry was appended with one unit.
    Added,
    /// An existing entry gained a unit.
    Incremented(Quantity),
    /// An existing entry lost a unit and is still in the cart.
    Decremented(Quantity),
    /// The last unit was taken out and the entry is gone.
    Removed,
    /// An entry's quantity was set (after flooring to one).
    QuantitySet(Quantity),
    /// All entries were dropped.
    Cleared,
    /// Nothing matched; the cart is untouched.
    Unchanged,
}

/// Read-only copy of the cart at one moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSnapshot {
    /// Entries in insertion order.
    pub entries: Vec<CartEntry>,
    /// Sum of all line totals at the time of the snapshot.
    pub total_price: Price,
}

impl CartSnapshot {
    /// Total units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        item_count(&self.entries)
    }

    /// Whether the snapshot holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The session's shopping cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    entries: Vec<CartEntry>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add one unit of `product`.
    ///
    /// A product not yet in the cart is appended with quantity 1. A product
    /// already present gains a unit and keeps its position.
    pub fn add_or_increment(&mut self, product: &Product) -> CartChange {
        if let Some(entry) = self.entry_mut(&product.id) {
            entry.quantity = entry.quantity.incremented();
            debug!(product_id = %product.id, quantity = %entry.quantity, "Incremented cart entry");
            return CartChange::Incremented(entry.quantity);
        }

        self.entries.push(CartEntry {
            product: product.clone(),
            quantity: Quantity::ONE,
        });
        debug!(product_id = %product.id, "Added cart entry");
        CartChange::Added
    }

    /// Add one unit to an entry already in the cart.
    pub fn increment_quantity(&mut self, product_id: &ProductId) -> CartChange {
        let Some(entry) = self.entry_mut(product_id) else {
            debug!(%product_id, "Increment ignored; product not in cart");
            return CartChange::Unchanged;
        };

        entry.quantity = entry.quantity.incremented();
        debug!(%product_id, quantity = %entry.quantity, "Incremented cart entry");
        CartChange::Incremented(entry.quantity)
    }

    /// Take one unit off an entry, removing the entry when it holds the last
    /// unit.
    pub fn decrement_or_remove(&mut self, product_id: &ProductId) -> CartChange {
        let Some((index, entry)) = self
            .entries
            .iter_mut()
            .enumerate()
            .find(|(_, entry)| entry.product.id == *product_id)
        else {
            debug!(%product_id, "Decrement ignored; product not in cart");
            return CartChange::Unchanged;
        };

        if let Some(quantity) = entry.quantity.decremented() {
            entry.quantity = quantity;
            debug!(%product_id, %quantity, "Decremented cart entry");
            CartChange::Decremented(quantity)
        } else {
            self.entries.remove(index);
            debug!(%product_id, "Removed cart entry");
            CartChange::Removed
        }
    }

    /// Set an entry's quantity, flooring anything below one to one.
    ///
    /// Unlike [`decrement_or_remove`](Self::decrement_or_remove), this never
    /// takes an entry out of the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, desired: i64) -> CartChange {
        let Some(entry) = self.entry_mut(product_id) else {
            debug!(%product_id, desired, "Set quantity ignored; product not in cart");
            return CartChange::Unchanged;
        };

        entry.quantity = Quantity::floored(desired);
        debug!(%product_id, desired, quantity = %entry.quantity, "Set cart entry quantity");
        CartChange::QuantitySet(entry.quantity)
    }

    /// Drop every entry.
    pub fn clear(&mut self) -> CartChange {
        let dropped = self.entries.len();
        self.entries.clear();
        debug!(dropped, "Cleared cart");
        CartChange::Cleared
    }

    /// Copy out the current entries together with a freshly computed total.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            entries: self.entries.clone(),
            total_price: self.total_price(),
        }
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Sum of all line totals, computed on every call.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Total units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        item_count(&self.entries)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the cart holds an entry for `product_id`.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.position(product_id).is_some()
    }

    /// Units of `product_id` in the cart, if present.
    #[must_use]
    pub fn quantity_of(&self, product_id: &ProductId) -> Option<Quantity> {
        self.entries
            .iter()
            .find(|entry| entry.product.id == *product_id)
            .map(CartEntry::quantity)
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.product.id == *product_id)
    }

    fn entry_mut(&mut self, product_id: &ProductId) -> Option<&mut CartEntry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.product.id == *product_id)
    }
}

fn item_count(entries: &[CartEntry]) -> u64 {
    entries
        .iter()
        .map(|entry| u64::from(entry.quantity.get()))
        .sum()
}
