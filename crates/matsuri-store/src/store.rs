//! # Store Facade
//!
//! The single mutable store behind an explicit, injected object: the
//! composition root constructs one `Store` at startup and passes it to
//! whoever needs it. No ambient singletons.
//!
//! ## Control Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Facade                                    │
//! │                                                                         │
//! │  UI reads products()/categories() ──► renders the product grid         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  add_to_cart(id) ──► catalog lookup ──► Cart::add (frozen snapshot)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  complete_order(method, received)                                       │
//! │         ├── matsuri_core::build_order (pure, all guards)               │
//! │         ├── ledger append                                              │
//! │         └── cart cleared                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  caller invokes storage.save(store.state())  ← the save observer       │
//! │                                                                         │
//! │  summarize(date) reads ONLY the ledger, never mutates it               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Mutations here are pure in-memory transforms; persistence is invoked
//! by a thin observer at the composition boundary after each mutating
//! operation. That split keeps every method testable without a storage
//! stub.

use chrono::NaiveDate;
use tracing::{debug, info};
use uuid::Uuid;

use matsuri_core::validation::{validate_category_draft, validate_product_draft};
use matsuri_core::{
    build_order, summarize, Cart, Category, CategoryDraft, Money, Order, PaymentMethod, Product,
    ProductDraft, ProductPatch, SalesSummary, StoreState,
};

use crate::error::{StoreError, StoreResult};

/// The store: catalog + order ledger (persisted) and the live cart
/// (transient, reset on restart).
#[derive(Debug, Default)]
pub struct Store {
    state: StoreState,
    cart: Cart,
}

impl Store {
    /// Creates a store from a loaded (or factory-default) state.
    ///
    /// The cart always starts empty: it is deliberately not persisted.
    pub fn new(state: StoreState) -> Self {
        Store {
            state,
            cart: Cart::new(),
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// All products, insertion-ordered. Filtering by availability or
    /// category is the caller's concern.
    pub fn products(&self) -> &[Product] {
        &self.state.products
    }

    /// All categories, insertion-ordered.
    pub fn categories(&self) -> &[Category] {
        &self.state.categories
    }

    /// The full order ledger, insertion-ordered (oldest first).
    pub fn orders(&self) -> &[Order] {
        &self.state.orders
    }

    /// The live cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The persisted aggregate, for the save observer.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Validates a draft, assigns a fresh id, and appends the product.
    pub fn add_product(&mut self, draft: ProductDraft) -> StoreResult<Product> {
        validate_product_draft(&draft).map_err(matsuri_core::CoreError::from)?;

        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            price: draft.price,
            category_id: draft.category_id,
            stock: draft.stock,
            is_available: draft.is_available,
        };

        info!(id = %product.id, name = %product.name, price = %product.price, "Product added");
        self.state.products.push(product.clone());
        Ok(product)
    }

    /// Merges a typed patch into the matching product, preserving
    /// unlisted fields. No-op if the id is absent.
    pub fn update_product(&mut self, product_id: &str, patch: &ProductPatch) {
        match self.state.products.iter_mut().find(|p| p.id == product_id) {
            Some(product) => {
                patch.apply(product);
                info!(id = %product_id, "Product updated");
            }
            None => debug!(id = %product_id, "update_product: unknown id, no-op"),
        }
    }

    /// Removes the matching product. Idempotent: absent ids are a no-op.
    ///
    /// Historical orders are snapshot-isolated, so deleting a product
    /// never alters the ledger.
    pub fn delete_product(&mut self, product_id: &str) {
        let before = self.state.products.len();
        self.state.products.retain(|p| p.id != product_id);

        if self.state.products.len() < before {
            info!(id = %product_id, "Product deleted");
        } else {
            debug!(id = %product_id, "delete_product: unknown id, no-op");
        }
    }

    /// Validates a draft, assigns a fresh id, and appends the category.
    pub fn add_category(&mut self, draft: CategoryDraft) -> StoreResult<Category> {
        validate_category_draft(&draft).map_err(matsuri_core::CoreError::from)?;

        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            color: draft.color,
        };

        info!(id = %category.id, name = %category.name, "Category added");
        self.state.categories.push(category.clone());
        Ok(category)
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of the identified product to the cart, freezing a
    /// snapshot of its current catalog state.
    pub fn add_to_cart(&mut self, product_id: &str) -> StoreResult<()> {
        let product = self
            .state
            .products
            .iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| StoreError::ProductNotFound(product_id.to_string()))?;

        self.cart.add(product);
        debug!(id = %product_id, lines = self.cart.len(), "Added to cart");
        Ok(())
    }

    /// Removes the cart line for `product_id`. No-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &str) {
        self.cart.remove(product_id);
    }

    /// Sets a cart line's quantity; zero or below removes the line.
    pub fn set_cart_quantity(&mut self, product_id: &str, quantity: i64) {
        self.cart.set_quantity(product_id, quantity);
    }

    /// Empties the cart without creating an order.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// The current cart subtotal.
    pub fn cart_subtotal(&self) -> Money {
        self.cart.subtotal()
    }

    // =========================================================================
    // Checkout & Ledger
    // =========================================================================

    /// Completes the current cart as an order.
    ///
    /// On success the order is appended to the ledger, the cart is
    /// cleared, and the order is returned (the caller needs `change` for
    /// display). On failure the cart is untouched and no order exists.
    pub fn complete_order(
        &mut self,
        payment_method: PaymentMethod,
        received: Option<Money>,
    ) -> StoreResult<Order> {
        let order = build_order(&self.cart, payment_method, received)?;

        info!(
            id = %order.id,
            subtotal = %order.subtotal,
            method = order.payment_method.label(),
            items = order.items.len(),
            "Order completed"
        );

        self.state.orders.push(order.clone());
        self.cart.clear();
        Ok(order)
    }

    /// Removes the matching order from the ledger. No-op if absent.
    pub fn cancel_order(&mut self, order_id: &str) {
        let before = self.state.orders.len();
        self.state.orders.retain(|o| o.id != order_id);

        if self.state.orders.len() < before {
            info!(id = %order_id, "Order cancelled");
        } else {
            debug!(id = %order_id, "cancel_order: unknown id, no-op");
        }
    }

    /// Clears the entire order ledger, keeping the catalog.
    pub fn clear_orders(&mut self) {
        let cleared = self.state.orders.len();
        self.state.orders.clear();
        info!(cleared, "Order ledger cleared");
    }

    // =========================================================================
    // Aggregation
    // =========================================================================

    /// Daily sales summary; read-only over the ledger.
    pub fn summarize(&self, date: NaiveDate) -> SalesSummary {
        summarize(&self.state.orders, date)
    }

    /// The day's orders, newest first. Feeds the sales listing and the
    /// CSV export.
    pub fn orders_on(&self, date: NaiveDate) -> Vec<&Order> {
        let mut day: Vec<&Order> = self
            .state
            .orders
            .iter()
            .filter(|o| o.created_at.date_naive() == date)
            .collect();
        day.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        day
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Restores the factory-default catalog and empties the ledger and
    /// the cart, irrespective of prior state.
    pub fn reset_all_data(&mut self) {
        self.state = crate::defaults::default_state();
        self.cart.clear();
        info!("Store reset to factory defaults");
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn fresh_store() -> Store {
        Store::new(defaults::default_state())
    }

    fn draft(name: &str, price: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price: Money::from_yen(price),
            category_id: "food".to_string(),
            stock: None,
            is_available: true,
        }
    }

    #[test]
    fn test_add_product_assigns_fresh_id() {
        let mut store = fresh_store();
        let a = store.add_product(draft("チヂミ", 350)).unwrap();
        let b = store.add_product(draft("チヂミ", 350)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.products().len(), 19);
    }

    #[test]
    fn test_add_product_rejects_invalid_draft() {
        let mut store = fresh_store();
        let err = store.add_product(draft("", 350)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(matsuri_core::CoreError::Validation(_))
        ));
        assert_eq!(store.products().len(), 17);
    }

    #[test]
    fn test_update_product_merges_patch() {
        let mut store = fresh_store();
        let patch = ProductPatch {
            price: Some(Money::from_yen(320)),
            ..Default::default()
        };

        store.update_product("yakisoba", &patch);

        let yakisoba = store.products().iter().find(|p| p.id == "yakisoba").unwrap();
        assert_eq!(yakisoba.price, Money::from_yen(320));
        assert_eq!(yakisoba.name, "焼きそば"); // preserved
    }

    #[test]
    fn test_update_unknown_product_is_noop() {
        let mut store = fresh_store();
        let before = store.state().clone();

        store.update_product("no-such-id", &ProductPatch::default());
        assert_eq!(*store.state(), before);
    }

    #[test]
    fn test_delete_product_is_idempotent() {
        let mut store = fresh_store();
        store.delete_product("yakisoba");
        store.delete_product("yakisoba"); // second call: no-op, no panic
        assert_eq!(store.products().len(), 16);
    }

    #[test]
    fn test_add_to_cart_unknown_id_fails() {
        let mut store = fresh_store();
        let err = store.add_to_cart("no-such-id").unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(_)));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_cash_checkout_through_facade() {
        let mut store = fresh_store();
        store.add_to_cart("yakisoba").unwrap(); // 300
        store.add_to_cart("yakisoba").unwrap(); // 600
        store.add_to_cart("ramune").unwrap(); // 750
        assert_eq!(store.cart_subtotal(), Money::from_yen(750));

        let order = store
            .complete_order(PaymentMethod::Cash, Some(Money::from_yen(1000)))
            .unwrap();

        assert_eq!(order.change, Some(Money::from_yen(250)));
        assert_eq!(store.cart().len(), 0);
        assert_eq!(store.orders().len(), 1);
    }

    #[test]
    fn test_insufficient_payment_preserves_cart_and_ledger() {
        let mut store = fresh_store();
        store.add_to_cart("yakisoba").unwrap();

        let err = store
            .complete_order(PaymentMethod::Cash, Some(Money::from_yen(100)))
            .unwrap_err();

        assert!(matches!(
            err,
            StoreError::Core(matsuri_core::CoreError::InsufficientPayment { .. })
        ));
        assert_eq!(store.cart().len(), 1); // cart kept for retry
        assert!(store.orders().is_empty()); // nothing appended
    }

    #[test]
    fn test_empty_cart_checkout_fails() {
        let mut store = fresh_store();
        let err = store.complete_order(PaymentMethod::PayPay, None).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(matsuri_core::CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_deleting_product_leaves_historical_orders_intact() {
        let mut store = fresh_store();
        store.add_to_cart("yakisoba").unwrap();
        let order = store.complete_order(PaymentMethod::PayPay, None).unwrap();

        store.delete_product("yakisoba");

        let ledgered = &store.orders()[0];
        assert_eq!(ledgered.id, order.id);
        assert_eq!(ledgered.subtotal, Money::from_yen(300));
        assert_eq!(ledgered.items[0].product.name, "焼きそば");
    }

    #[test]
    fn test_price_change_after_checkout_does_not_rewrite_history() {
        let mut store = fresh_store();
        store.add_to_cart("yakisoba").unwrap();
        store.complete_order(PaymentMethod::PayPay, None).unwrap();

        store.update_product(
            "yakisoba",
            &ProductPatch {
                price: Some(Money::from_yen(999)),
                ..Default::default()
            },
        );

        assert_eq!(store.orders()[0].subtotal, Money::from_yen(300));
    }

    #[test]
    fn test_cancel_order() {
        let mut store = fresh_store();
        store.add_to_cart("yakisoba").unwrap();
        let order = store.complete_order(PaymentMethod::PayPay, None).unwrap();

        store.cancel_order(&order.id);
        assert!(store.orders().is_empty());

        store.cancel_order(&order.id); // no-op, no panic
    }

    #[test]
    fn test_clear_orders_keeps_catalog() {
        let mut store = fresh_store();
        store.add_to_cart("yakisoba").unwrap();
        store.complete_order(PaymentMethod::PayPay, None).unwrap();

        store.clear_orders();

        assert!(store.orders().is_empty());
        assert_eq!(store.products().len(), 17);
    }

    #[test]
    fn test_reset_all_data() {
        let mut store = fresh_store();
        store.add_product(draft("チヂミ", 350)).unwrap();
        store.add_to_cart("yakisoba").unwrap();
        store.complete_order(PaymentMethod::Cash, Some(Money::from_yen(500))).unwrap();
        store.add_to_cart("ramune").unwrap();

        store.reset_all_data();

        assert_eq!(store.products().len(), 17);
        assert_eq!(store.categories().len(), 4);
        assert!(store.orders().is_empty());
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_orders_on_sorts_newest_first() {
        let mut store = fresh_store();
        store.add_to_cart("yakisoba").unwrap();
        let first = store.complete_order(PaymentMethod::PayPay, None).unwrap();
        store.add_to_cart("ramune").unwrap();
        let second = store.complete_order(PaymentMethod::PayPay, None).unwrap();

        let today = chrono::Local::now().date_naive();
        let day = store.orders_on(today);

        assert_eq!(day.len(), 2);
        assert_eq!(day[0].id, second.id);
        assert_eq!(day[1].id, first.id);
    }
}
