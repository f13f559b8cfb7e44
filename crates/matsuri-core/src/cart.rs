//! # Cart
//!
//! The transient cart for the order currently being assembled.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Operations                                  │
//! │                                                                         │
//! │  UI Action                 Cart Method              State Change        │
//! │  ─────────                 ───────────              ────────────        │
//! │                                                                         │
//! │  Tap product ────────────► add(&product) ─────────► qty += 1 or push   │
//! │                                                                         │
//! │  Change quantity ────────► set_quantity(id, n) ───► qty = n (n<=0: rm) │
//! │                                                                         │
//! │  Tap remove ─────────────► remove(id) ────────────► line removed       │
//! │                                                                         │
//! │  Checkout done ──────────► clear() ───────────────► empty              │
//! │                                                                         │
//! │  Tender modal ───────────► subtotal() ────────────► (read only)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by product id (adding the same product bumps quantity)
//! - Quantity is always >= 1; a set to zero or below removes the line
//! - The cart is never persisted; it resets with the process

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartItem, Product};

/// The in-progress order's line items, in insertion order.
///
/// All operations are infallible: removing or re-quantifying an absent
/// line is a benign no-op, and adding never rejects (the catalog boundary
/// validates products before they reach the grid).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product to the cart.
    ///
    /// If a line for this product id already exists its quantity is
    /// incremented; otherwise a new line is appended with quantity 1,
    /// freezing a snapshot of the product at this moment. Later catalog
    /// edits do not reach lines already in the cart.
    pub fn add(&mut self, product: &Product) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == product.id)
        {
            item.quantity += 1;
            return;
        }

        self.items.push(CartItem::new(product.clone(), 1));
    }

    /// Removes the line for `product_id`. No-op if absent.
    pub fn remove(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets the quantity of the line for `product_id`.
    ///
    /// A quantity of zero or below is equivalent to [`Cart::remove`]: the
    /// cart never stores a non-positive quantity. No-op if the line is
    /// absent.
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.product.id == product_id)
        {
            item.quantity = quantity;
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Calculates the subtotal (Σ price × quantity).
    ///
    /// Recomputed on demand rather than cached: it is cheap, and a cache
    /// is one more thing that can go stale.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.line_total()).sum()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the lines, insertion-ordered.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}
