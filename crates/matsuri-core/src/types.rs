//! # Domain Types
//!
//! Core domain types used throughout Matsuri POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  items (frozen) │       │
//! │  │  price (¥)      │   │  color          │   │  subtotal       │       │
//! │  │  category_id    │   └─────────────────┘   │  payment_method │       │
//! │  │  is_available   │                         │  created_at     │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CartItem      │   │ PaymentMethod   │   │   StoreState    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  product (snap) │   │  Cash           │   │  products       │       │
//! │  │  quantity ≥ 1   │   │  PayPay         │   │  categories     │       │
//! │  └─────────────────┘   │  OtherElectronic│   │  orders         │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartItem` embeds a full copy of the `Product` taken when the item was
//! added. Completed orders carry those snapshots forever: later catalog
//! edits (price change, delete) never retroactively alter history.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// A product category shown as a colored tab on the sell screen.
///
/// Identity is the opaque `id`, assigned at creation and never reused.
/// `name` and `color` are cosmetic and editable in principle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier, opaque to the UI.
    pub id: String,

    /// Display name (e.g. フード, ドリンク).
    pub name: String,

    /// Display color as a CSS hex string (e.g. "#ef4444").
    pub color: String,
}

/// Fields required to create a new category; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

// =============================================================================
// Product
// =============================================================================

/// A sellable item on the stall's grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier, opaque to the UI.
    pub id: String,

    /// Display name shown on the grid and the receipt.
    pub name: String,

    /// Price in whole yen.
    pub price: Money,

    /// Category this product belongs to. An unknown category id renders
    /// as a fallback in the UI; it is not a hard referential constraint.
    pub category_id: String,

    /// Stock level; `None` means unlimited. Declared for a future
    /// inventory feature, never decremented today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,

    /// Soft availability toggle. `false` hides the product from the
    /// sellable grid without deleting it; fully reversible.
    pub is_available: bool,
}

/// Fields required to create a new product; the id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub price: Money,
    pub category_id: String,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Explicit partial update for a product.
///
/// Every field is optional; unset fields keep their current value. This
/// replaces ad-hoc object spreading with a typed merge (see
/// [`ProductPatch::apply`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category_id: Option<String>,
    pub stock: Option<i64>,
    pub is_available: Option<bool>,
}

impl ProductPatch {
    /// Merges the set fields into `product`, preserving everything else.
    pub fn apply(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category_id) = &self.category_id {
            product.category_id = category_id.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = Some(stock);
        }
        if let Some(is_available) = self.is_available {
            product.is_available = is_available;
        }
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A line item: a frozen product snapshot plus a quantity.
///
/// ## Invariants
/// - `quantity >= 1` always; setting it to zero or below removes the line
/// - one `CartItem` per distinct product id in a live cart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Full product snapshot taken when the item entered the cart.
    pub product: Product,

    /// Quantity in cart (always >= 1).
    pub quantity: i64,
}

impl CartItem {
    /// Creates a new cart line from a product snapshot.
    pub fn new(product: Product, quantity: i64) -> Self {
        CartItem { product, quantity }
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How an order was paid.
///
/// Only cash carries a received amount and change; the electronic methods
/// are confirmed on the customer's device and recorded as a bare tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash; change is computed from the received amount.
    Cash,
    /// PayPay QR payment, confirmed by the operator watching the
    /// customer's screen.
    #[serde(rename = "paypay")]
    PayPay,
    /// Any other electronic payment (IC card, other QR apps).
    OtherElectronic,
}

impl PaymentMethod {
    /// All methods, in report/display order.
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Cash,
        PaymentMethod::PayPay,
        PaymentMethod::OtherElectronic,
    ];

    /// Localized label used on receipts and in the CSV export.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "現金",
            PaymentMethod::PayPay => "PayPay",
            PaymentMethod::OtherElectronic => "その他電子",
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// A completed order in the ledger.
///
/// Orders are immutable once created; the only permitted mutations of the
/// ledger are cancel-by-id and bulk clear. "Editing" an order is
/// unsupported - cancel and re-enter instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier, a UUID v4 assigned at checkout.
    pub id: String,

    /// Line items, frozen snapshots in cart insertion order.
    pub items: Vec<CartItem>,

    /// Sum of line totals at creation time. Equal to
    /// Σ price × quantity over `items` forever, regardless of later
    /// catalog edits.
    pub subtotal: Money,

    /// How the order was paid.
    pub payment_method: PaymentMethod,

    /// Cash only: amount the customer handed over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_amount: Option<Money>,

    /// Cash only: `received_amount - subtotal`, never negative in a
    /// stored order (checkout rejects insufficient payment).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<Money>,

    /// Creation timestamp, local wall-clock. Serialized as ISO 8601.
    pub created_at: DateTime<Local>,
}

impl Order {
    /// Total number of individual items across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Store State
// =============================================================================

/// The persisted aggregate: catalog plus order ledger.
///
/// The live cart is deliberately NOT part of this type - it is transient
/// and resets when the application restarts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

// =============================================================================
// Unit Tests
// =============================================================================
