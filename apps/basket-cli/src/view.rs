//! # Cart Rendering
//!
//! Turns cart snapshots into terminal text. Nothing here mutates the cart.
//!
//! ## Cart Panel
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  🛒 Your cart                                                   │
//! │  1. Mango Cake 120.00 x 2 = 240.00 บาท                          │
//! │  2. Thai Tea Roll 85.00 x 1 = 85.00 บาท                         │
//! │  Total: 325.00 บาท                                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use basket_core::{CatalogEntry, LineItem, Money};

pub const EMPTY_CART: &str = "Your cart is empty.";
pub const CHECKOUT_THANKS: &str = "Thank you for your order! (demo store, nothing was charged)";

/// The badge shown after every change, e.g. `🛒 Cart (3) | Total: 325.00 บาท`.
pub fn badge(total_quantity: u64, total: Money, label: &str) -> String {
    format!("🛒 Cart ({total_quantity}) | Total: {total} {label}")
}

/// The full cart panel: one line per item, then the total.
pub fn cart(items: &[LineItem], total: Money, label: &str) -> String {
    let mut out = String::from("🛒 Your cart\n");

    if items.is_empty() {
        let _ = writeln!(out, "  {EMPTY_CART}");
    }

    for (i, item) in items.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} {} x {} = {} {}",
            i + 1,
            item.name,
            item.unit_price,
            item.quantity,
            item.line_total(),
            label
        );
    }

    let _ = writeln!(out, "  Total: {total} {label}");
    out
}

/// Numbered catalog listing, prices as written in the catalog.
pub fn catalog(entries: &[CatalogEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", i + 1, entry.name(), entry.price_text());
    }
    if entries.is_empty() {
        out.push_str("  (catalog is empty)\n");
    }
    out
}

/// The removal question.
pub fn removal_question(item: &LineItem) -> String {
    format!("Remove \"{}\" from the cart? [y/N] ", item.name)
}

/// Whether an answer to [`removal_question`] means yes.
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "ใช่"
    )
}

pub const HELP: &str = "\
Commands:
  list                    show the catalog
  buy <n>                 add catalog product n to the cart
  add <name> | <price>    add any item, e.g. add Mango Cake | 120 บาท
  inc <line> [n]  (+)     raise a line's quantity
  dec <line> [n]  (-)     lower a line's quantity (asks before removing)
  cart [--json]           show the cart
  checkout                place the (demo) order
  quit                    leave
";

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::CartStore;

    #[test]
    fn test_render_empty_cart() {
        let store = CartStore::new();
        let text = cart(store.snapshot(), store.total_price(), "บาท");
        assert_eq!(text, "🛒 Your cart\n  Your cart is empty.\n  Total: 0.00 บาท\n");
    }

    #[test]
    fn test_render_items() {
        let mut store = CartStore::new();
        store.add("Mango Cake", "120 บาท");
        store.add("Mango Cake", "120 บาท");
        store.add("Party Box", "1,234.50");

        let text = cart(store.snapshot(), store.total_price(), "บาท");
        assert_eq!(
            text,
            "🛒 Your cart\n\
             \x20 1. Mango Cake 120.00 x 2 = 240.00 บาท\n\
             \x20 2. Party Box 1,234.50 x 1 = 1,234.50 บาท\n\
             \x20 Total: 1,474.50 บาท\n"
        );
    }

    #[test]
    fn test_badge() {
        assert_eq!(badge(0, Money::zero(), "บาท"), "🛒 Cart (0) | Total: 0.00 บาท");
        assert_eq!(
            badge(12, Money::from_minor(123450), "THB"),
            "🛒 Cart (12) | Total: 1,234.50 THB"
        );
    }

    #[test]
    fn test_catalog_listing() {
        let entries = vec![CatalogEntry::new("Thai Tea Roll", "85 บาท"), CatalogEntry::default()];
        assert_eq!(catalog(&entries), "  1. Thai Tea Roll (85 บาท)\n  2. สินค้า (0)\n");
        assert_eq!(catalog(&[]), "  (catalog is empty)\n");
    }

    #[test]
    fn test_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(is_yes("ใช่"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("nope"));
    }
}
