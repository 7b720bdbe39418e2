//! Plain-text rendering of catalog and cart views.

use std::io::{self, Write};

use pop_shop_storefront::{CartSnapshot, Catalog, Receipt};

/// Header line with the cart badge, e.g. `Pop! Shop | Cart (3)`.
pub fn header<W: Write>(out: &mut W, store_name: &str, item_count: u64) -> io::Result<()> {
    if item_count > 0 {
        writeln!(out, "{store_name} | Cart ({item_count})")
    } else {
        writeln!(out, "{store_name} | Cart")
    }
}

pub fn catalog<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    for product in catalog.products() {
        writeln!(
            out,
            "{:>4}  {:<28} {:>9}",
            product.id.as_str(),
            product.name,
            product.unit_price.to_string()
        )?;
    }
    Ok(())
}

/// Order summary: one row per entry plus the total.
pub fn cart<W: Write>(out: &mut W, snapshot: &CartSnapshot) -> io::Result<()> {
    if snapshot.is_empty() {
        return writeln!(out, "Your cart is empty.");
    }

    writeln!(out, "Order Summary")?;
    for entry in &snapshot.entries {
        writeln!(
            out,
            "{:>4}  {:<28} x{:<4} {:>9}",
            entry.product_id().as_str(),
            entry.product().name,
            entry.quantity().get(),
            entry.line_total().to_string()
        )?;
    }
    writeln!(out, "Total: {}", snapshot.total_price)
}

pub fn receipt<W: Write>(out: &mut W, receipt: &Receipt) -> io::Result<()> {
    writeln!(out, "Checkout successful")?;
    writeln!(out, "Order {}", receipt.order_number)?;
    for line in &receipt.lines {
        writeln!(
            out,
            "  {} x {}  {}",
            line.product().name,
            line.quantity(),
            line.line_total()
        )?;
    }
    writeln!(out, "Grand Total: {}", receipt.total_price)
}
