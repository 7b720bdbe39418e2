//! Sanitization of free-text quantity input.
//!
//! Quantity fields accept whatever the user types. Before anything reaches
//! [`CartStore::set_quantity`](crate::cart::CartStore::set_quantity) the text is
//! reduced to its digits and turned into a positive integer, or rejected.

/// Parse a typed quantity.
///
/// Non-digit characters are dropped (`"3 pcs"` is `3`, `"-2"` is `2`). Returns
/// `None` when no digits remain, the value overflows, or it is zero.
///
/// ```
/// use pop_shop_storefront::input::parse_quantity_input;
///
/// assert_eq!(parse_quantity_input("12"), Some(12));
/// assert_eq!(parse_quantity_input(" x4 "), Some(4));
/// assert_eq!(parse_quantity_input("0"), None);
/// assert_eq!(parse_quantity_input("abc"), None);
/// ```
#[must_use]
pub fn parse_quantity_input(raw: &str) -> Option<i64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    digits.parse::<i64>().ok().filter(|&n| n > 0)
}
