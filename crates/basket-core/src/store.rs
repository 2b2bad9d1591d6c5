//! # Cart Store
//!
//! The single source of truth for cart contents.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  View Action              Store Call                 State Change       │
//! │  ───────────              ──────────                 ────────────       │
//! │                                                                         │
//! │  Click "buy" ───────────► add(name, price) ────────► push or qty += 1   │
//! │                                                                         │
//! │  Click "+" ─────────────► change_quantity(i, +1) ──► items[i].qty += 1  │
//! │                                                                         │
//! │  Click "-" at qty 1 ────► change_quantity(i, -1) ──► PendingRemoval     │
//! │                                  │                                      │
//! │                     ┌────────────┴────────────┐                         │
//! │                     ▼                         ▼                         │
//! │               confirm()                  decline()                      │
//! │               items.remove(i)            items[i].qty = 1               │
//! │                                                                         │
//! │  Redraw ────────────────► snapshot() / totals ─────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store never talks to the user. When a quantity would drop to zero it
//! hands back a [`PendingRemoval`] and the view decides, or the view injects a
//! [`RemovalPrompt`] up front.

use tracing::{debug, warn};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::price::parse_price;
use crate::types::{
    CartSummary, CatalogEntry, LineItem, QuantityOutcome, RemovalDecision, RemovalResolution,
};

// =============================================================================
// Removal Prompt
// =============================================================================

/// The confirmation capability a view supplies for destructive changes.
///
/// Return `true` to remove the item, `false` to keep it at quantity 1.
pub trait RemovalPrompt {
    fn confirm_removal(&mut self, item: &LineItem) -> bool;
}

impl<F> RemovalPrompt for F
where
    F: FnMut(&LineItem) -> bool,
{
    fn confirm_removal(&mut self, item: &LineItem) -> bool {
        self(item)
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// In-memory cart for one shopping session.
///
/// ## Invariants
/// - Items keep insertion order
/// - Names are unique (exact match)
/// - Every quantity is at least 1
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartStore { items: Vec::new() }
    }

    /// Adds one unit of `name` priced from free-form text.
    ///
    /// ## Behavior
    /// - Name already in cart: quantity increases by 1, stored price is kept
    /// - Name not in cart: appended with quantity 1
    /// - Unparseable price text: priced at 0
    ///
    /// ```rust
    /// use basket_core::CartStore;
    ///
    /// let mut cart = CartStore::new();
    /// cart.add("Mango Cake", "120 บาท");
    /// cart.add("Mango Cake", "999");
    ///
    /// assert_eq!(cart.snapshot()[0].quantity, 2);
    /// assert_eq!(cart.total_price().to_string(), "240.00");
    /// ```
    pub fn add(&mut self, name: &str, raw_price_text: &str) {
        if let Some(item) = self.items.iter_mut().find(|i| i.name == name) {
            match item.quantity.checked_add(1) {
                Some(quantity) => {
                    item.quantity = quantity;
                    debug!(name = %name, quantity, "item quantity incremented");
                }
                None => warn!(name = %name, "item quantity at maximum, add ignored"),
            }
            return;
        }

        let unit_price = parse_price(raw_price_text);
        debug!(name = %name, unit_price = %unit_price, "item added");
        self.items.push(LineItem::new(name, unit_price));
    }

    /// Adds one unit of a scraped catalog entry.
    ///
    /// Missing names become [`DEFAULT_ITEM_NAME`](crate::DEFAULT_ITEM_NAME),
    /// missing prices become 0.
    pub fn add_entry(&mut self, entry: &CatalogEntry) {
        self.add(entry.name(), entry.price_text());
    }

    /// Changes the quantity of the item at `index` by `delta`.
    ///
    /// ## Returns
    /// - `Updated` when the new quantity is still positive
    /// - `PendingRemovalConfirmation` when it would reach 0 or below; the item
    ///   is untouched until the returned handle is resolved
    ///
    /// ## Errors
    /// - [`CoreError::IndexOutOfRange`] if `index` is not in the current snapshot
    /// - [`CoreError::QuantityOverflow`] if the new quantity does not fit
    ///
    /// ```rust
    /// use basket_core::{CartStore, QuantityChange};
    ///
    /// let mut cart = CartStore::new();
    /// cart.add("A", "50");
    /// cart.add("B", "30");
    ///
    /// match cart.change_quantity(0, -1).unwrap() {
    ///     QuantityChange::PendingRemovalConfirmation(pending) => {
    ///         pending.confirm();
    ///     }
    ///     QuantityChange::Updated { .. } => unreachable!(),
    /// }
    ///
    /// assert_eq!(cart.snapshot()[0].name, "B");
    /// assert_eq!(cart.total_quantity(), 1);
    /// ```
    pub fn change_quantity(&mut self, index: usize, delta: i64) -> CoreResult<QuantityChange<'_>> {
        let current = self
            .items
            .get(index)
            .map(|item| item.quantity)
            .ok_or(CoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })?;

        let requested = i64::from(current).saturating_add(delta);
        if requested <= 0 {
            debug!(index, requested, "quantity would reach zero, awaiting confirmation");
            return Ok(QuantityChange::PendingRemovalConfirmation(PendingRemoval {
                store: self,
                index,
            }));
        }

        let item = &mut self.items[index];
        let quantity = u32::try_from(requested).map_err(|_| CoreError::QuantityOverflow {
            name: item.name.clone(),
            requested,
        })?;
        item.quantity = quantity;
        debug!(name = %item.name, quantity, "item quantity updated");

        Ok(QuantityChange::Updated { quantity })
    }

    /// Changes a quantity and settles any removal through `prompt`.
    ///
    /// ```rust
    /// use basket_core::{CartStore, QuantityOutcome};
    ///
    /// let mut cart = CartStore::new();
    /// cart.add("A", "50");
    ///
    /// let mut keep = |_: &basket_core::LineItem| false;
    /// let outcome = cart.change_quantity_with(0, -1, &mut keep).unwrap();
    ///
    /// assert_eq!(outcome, QuantityOutcome::Reset);
    /// assert_eq!(cart.snapshot()[0].quantity, 1);
    /// ```
    pub fn change_quantity_with<P>(
        &mut self,
        index: usize,
        delta: i64,
        prompt: &mut P,
    ) -> CoreResult<QuantityOutcome>
    where
        P: RemovalPrompt + ?Sized,
    {
        match self.change_quantity(index, delta)? {
            QuantityChange::Updated { quantity } => Ok(QuantityOutcome::Updated { quantity }),
            QuantityChange::PendingRemovalConfirmation(pending) => {
                let decision = RemovalDecision::from(prompt.confirm_removal(pending.item()));
                Ok(pending.resolve(decision).into())
            }
        }
    }

    /// Sum of all quantities, 0 for an empty cart.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price × quantity, 0 for an empty cart.
    pub fn total_price(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Read-only view of the items in insertion order.
    pub fn snapshot(&self) -> &[LineItem] {
        &self.items
    }

    /// Owned copy of the items with totals, for rendering or serialization.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.items.clone(),
            total_quantity: self.total_quantity(),
            total_price: self.total_price(),
        }
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Quantity Change
// =============================================================================

/// Immediate result of [`CartStore::change_quantity`].
#[derive(Debug)]
#[must_use = "a pending removal must be confirmed or declined"]
pub enum QuantityChange<'a> {
    /// The quantity was updated in place.
    Updated { quantity: u32 },
    /// The quantity would reach zero; the caller must ask the user.
    PendingRemovalConfirmation(PendingRemoval<'a>),
}

/// A removal waiting for the user's answer.
///
/// Holds the store mutably, so nothing else can change the cart until the
/// removal is resolved. Dropping it without resolving leaves the item as it
/// was before the change.
#[derive(Debug)]
#[must_use = "call confirm(), decline() or resolve()"]
pub struct PendingRemoval<'a> {
    store: &'a mut CartStore,
    index: usize,
}

impl PendingRemoval<'_> {
    /// The item that would be removed.
    pub fn item(&self) -> &LineItem {
        &self.store.items[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Removes the item; later items shift down one index.
    pub fn confirm(self) -> LineItem {
        let PendingRemoval { store, index } = self;
        let removed = store.items.remove(index);
        debug!(name = %removed.name, index, "item removed");
        removed
    }

    /// Keeps the item with quantity reset to 1.
    pub fn decline(self) {
        let PendingRemoval { store, index } = self;
        let item = &mut store.items[index];
        item.quantity = 1;
        debug!(name = %item.name, "removal declined, quantity reset to 1");
    }

    pub fn resolve(self, decision: RemovalDecision) -> RemovalResolution {
        match decision {
            RemovalDecision::Confirmed => RemovalResolution::Removed(self.confirm()),
            RemovalDecision::Declined => {
                self.decline();
                RemovalResolution::Reset
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_pending(change: QuantityChange<'_>) -> PendingRemoval<'_> {
        match change {
            QuantityChange::PendingRemovalConfirmation(pending) => pending,
            QuantityChange::Updated { quantity } => panic!("expected pending removal, got {quantity}"),
        }
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.total_price().is_zero());
        assert!(cart.snapshot().is_empty());
    }

    #[test]
    fn test_add_same_name_keeps_first_price() {
        let mut cart = CartStore::new();
        cart.add("Mango Cake", "120 บาท");
        cart.add("Mango Cake", "999");

        assert_eq!(
            cart.snapshot(),
            &[LineItem {
                name: "Mango Cake".to_string(),
                unit_price: Money::from_minor(12000),
                quantity: 2,
            }]
        );
        assert_eq!(cart.total_price().minor_units(), 24000);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut cart = CartStore::new();
        cart.add("tea", "10");
        cart.add("Tea", "10");
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_add_malformed_price_is_zero() {
        let mut cart = CartStore::new();
        cart.add("Mystery", "call for price");
        assert!(cart.snapshot()[0].unit_price.is_zero());
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_add_entry_uses_defaults() {
        let mut cart = CartStore::new();
        cart.add_entry(&CatalogEntry::default());
        cart.add_entry(&CatalogEntry::new("Mango Cake\nseasonal", "120 บาท"));

        let items = cart.snapshot();
        assert_eq!(items[0].name, crate::DEFAULT_ITEM_NAME);
        assert!(items[0].unit_price.is_zero());
        assert_eq!(items[1].name, "Mango Cake");
        assert_eq!(items[1].unit_price.minor_units(), 12000);
    }

    #[test]
    fn test_change_quantity_updates_in_place() {
        let mut cart = CartStore::new();
        cart.add("A", "50");
        cart.add("B", "30");

        match cart.change_quantity(0, 2).unwrap() {
            QuantityChange::Updated { quantity } => assert_eq!(quantity, 3),
            QuantityChange::PendingRemovalConfirmation(_) => panic!("unexpected removal"),
        }

        assert_eq!(cart.snapshot()[0].name, "A");
        assert_eq!(cart.total_quantity(), 4);
        assert_eq!(cart.total_price().minor_units(), 18000);
    }

    #[test]
    fn test_remove_confirmed_shifts_indices() {
        let mut cart = CartStore::new();
        cart.add("A", "50");
        cart.add("B", "30");

        let removed = expect_pending(cart.change_quantity(0, -1).unwrap()).confirm();
        assert_eq!(removed.name, "A");

        assert_eq!(cart.snapshot(), &[LineItem::new("B", Money::from_minor(3000))]);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn test_remove_declined_resets_to_one() {
        let mut cart = CartStore::new();
        cart.add("A", "50");
        cart.add("A", "50");
        cart.add("A", "50");

        let pending = expect_pending(cart.change_quantity(0, -10).unwrap());
        assert_eq!(pending.item().quantity, 3);
        assert_eq!(pending.resolve(RemovalDecision::Declined), RemovalResolution::Reset);

        assert_eq!(cart.snapshot()[0].quantity, 1);
    }

    #[test]
    fn test_dropped_pending_leaves_item_unchanged() {
        let mut cart = CartStore::new();
        cart.add("A", "50");

        let _ = cart.change_quantity(0, -1).unwrap();

        assert_eq!(cart.snapshot()[0].quantity, 1);
    }

    #[test]
    fn test_change_quantity_out_of_range() {
        let mut cart = CartStore::new();
        cart.add("A", "50");

        let err = cart.change_quantity(1, 1).unwrap_err();
        assert_eq!(err, CoreError::IndexOutOfRange { index: 1, len: 1 });
        assert_eq!(cart.snapshot()[0].quantity, 1);
    }

    #[test]
    fn test_change_quantity_overflow() {
        let mut cart = CartStore::new();
        cart.add("A", "50");

        let err = cart.change_quantity(0, i64::from(u32::MAX)).unwrap_err();
        assert!(matches!(err, CoreError::QuantityOverflow { .. }));
        assert_eq!(cart.snapshot()[0].quantity, 1);
    }

    #[test]
    fn test_change_quantity_with_prompt() {
        let mut cart = CartStore::new();
        cart.add("A", "50");
        cart.add("B", "30");

        let mut asked = Vec::new();
        let mut prompt = |item: &LineItem| {
            asked.push(item.name.clone());
            true
        };

        let outcome = cart.change_quantity_with(1, 1, &mut prompt).unwrap();
        assert_eq!(outcome, QuantityOutcome::Updated { quantity: 2 });

        let outcome = cart.change_quantity_with(0, -1, &mut prompt).unwrap();
        assert_eq!(
            outcome,
            QuantityOutcome::Removed(LineItem::new("A", Money::from_minor(5000)))
        );
        assert_eq!(asked, vec!["A".to_string()]);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_summary_matches_store() {
        let mut cart = CartStore::new();
        cart.add("A", "50");
        cart.add("B", "30.25");
        cart.add("B", "30.25");

        let summary = cart.summary();
        assert_eq!(summary.items, cart.snapshot());
        assert_eq!(summary.total_quantity, 3);
        assert_eq!(summary.total_price.minor_units(), 11050);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Add(String, String),
            Change(usize, i64, bool),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                ("[A-E]", "[0-9,. ]{0,8}").prop_map(|(n, p)| Op::Add(n, p)),
                (0usize..8, -3i64..4, any::<bool>()).prop_map(|(i, d, c)| Op::Change(i, d, c)),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: distinct-name adds give one line per name and one unit per call.
            #[test]
            fn distinct_adds_count_lines_and_units(
                names in proptest::collection::hash_set("[a-zA-Z ]{1,12}", 0..20)
            ) {
                let mut cart = CartStore::new();
                for name in &names {
                    cart.add(name, "10");
                }
                prop_assert_eq!(cart.total_quantity(), names.len() as u64);
                prop_assert_eq!(cart.snapshot().len(), names.len());
            }

            /// Property: totals always agree with the snapshot and quantities stay positive.
            #[test]
            fn totals_match_snapshot(ops in proptest::collection::vec(op(), 0..40)) {
                let mut cart = CartStore::new();
                for op in ops {
                    match op {
                        Op::Add(name, price) => cart.add(&name, &price),
                        Op::Change(index, delta, confirm) => {
                            let mut prompt = |_: &LineItem| confirm;
                            let _ = cart.change_quantity_with(index, delta, &mut prompt);
                        }
                    }

                    let items = cart.snapshot();
                    let expected_price: Money = items.iter().map(LineItem::line_total).sum();
                    let expected_qty: u64 = items.iter().map(|i| u64::from(i.quantity)).sum();
                    prop_assert_eq!(cart.total_price(), expected_price);
                    prop_assert_eq!(cart.total_quantity(), expected_qty);
                    prop_assert!(items.iter().all(|i| i.quantity >= 1));

                    let mut names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
                    names.sort_unstable();
                    names.dedup();
                    prop_assert_eq!(names.len(), items.len());
                }
            }
        }
    }
}
