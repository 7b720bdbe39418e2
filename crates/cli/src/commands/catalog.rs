//! `pop-shop catalog` - list purchasable products.

use std::io::Write;

use pop_shop_storefront::ShopSession;

use crate::render;

/// Print every product in the session's catalog.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn list<W: Write>(
    session: &ShopSession,
    json: bool,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        serde_json::to_writer_pretty(&mut *out, session.catalog().products())?;
        writeln!(out)?;
    } else {
        render::catalog(out, session.catalog())?;
    }
    Ok(())
}
