//! Session-level shopping: catalog lookups, quantity edits, and checkout.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use pop_shop_integration_tests::{cents, id};
use pop_shop_storefront::checkout::CheckoutError;
use pop_shop_storefront::input::parse_quantity_input;
use pop_shop_storefront::{Catalog, ShopSession, StorefrontError};

#[test]
fn test_browse_add_adjust_checkout() {
    let mut session = ShopSession::default();

    session.add_to_cart(&id("6")).unwrap();
    session.add_to_cart(&id("7")).unwrap();
    session.add_to_cart(&id("6")).unwrap();

    // Typed quantity goes through the sanitizer first.
    let typed = parse_quantity_input("4 units").unwrap();
    session.set_quantity(&id("7"), typed);
    session.decrement_or_remove(&id("6"));

    let before = session.snapshot();
    assert_eq!(before.item_count(), 5);
    assert_eq!(before.total_price, cents(1499 + 4 * 2999));

    let receipt = session.checkout().unwrap();
    assert_eq!(receipt.total_price, before.total_price);
    assert_eq!(receipt.item_count, 5);
    assert_eq!(receipt.lines, before.entries);
    assert!(session.cart().is_empty());
    assert_eq!(session.snapshot().total_price, cents(0));
}

#[test]
fn test_checkout_empty_cart_changes_nothing() {
    let mut session = ShopSession::default();
    let err = session.checkout().unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::Checkout(CheckoutError::EmptyCart)
    ));
    assert!(session.cart().is_empty());
}

#[test]
fn test_unknown_catalog_id_rejected() {
    let mut session = ShopSession::default();
    assert!(matches!(
        session.add_to_cart(&id("0")),
        Err(StorefrontError::UnknownProduct(_))
    ));
}

#[test]
fn test_custom_catalog_session() {
    let catalog = Catalog::from_json(
        r#"[{"id": "arthas", "name": "Pop! Arthas", "unit_price": "19.99"}]"#,
    )
    .unwrap();
    let mut session = ShopSession::new(catalog);

    session.add_to_cart(&id("arthas")).unwrap();
    session.add_to_cart(&id("arthas")).unwrap();
    assert_eq!(session.snapshot().total_price, cents(3998));
    assert!(session.add_to_cart(&id("1")).is_err());
}

#[test]
fn test_huge_totals_saturate() {
    let catalog = Catalog::from_json(
        r#"[
            {"id": "big", "name": "Vault", "unit_price": "100000000000000000000"},
            {"id": "small", "name": "Pin", "unit_price": "1.00"}
        ]"#,
    )
    .unwrap();
    let mut session = ShopSession::new(catalog);

    session.add_to_cart(&id("big")).unwrap();
    session.add_to_cart(&id("small")).unwrap();
    session.set_quantity(&id("big"), 1_000_000_000);

    let snapshot = session.snapshot();
    assert_eq!(
        serde_json::to_value(snapshot.total_price).unwrap(),
        "79228162514264337593543950335"
    );
    assert_eq!(snapshot.item_count(), 1_000_000_001);

    let receipt = session.checkout().unwrap();
    assert_eq!(receipt.total_price, snapshot.total_price);
}

#[test]
fn test_receipt_serializes() {
    let mut session = ShopSession::default();
    session.add_to_cart(&id("8")).unwrap();
    let receipt = session.checkout().unwrap();

    let json = serde_json::to_value(&receipt).unwrap();
    assert_eq!(json["total_price"], "54.99");
    assert_eq!(json["item_count"], 1);
    assert_eq!(json["lines"][0]["product"]["name"], "Pop! The Lich King");
    assert!(json["order_number"].is_string());
}
