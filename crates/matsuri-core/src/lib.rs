//! # matsuri-core: Pure Business Logic for Matsuri POS
//!
//! This crate is the **heart** of Matsuri POS. It contains all business
//! logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Matsuri POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Terminal UI (apps/terminal)                     │   │
//! │  │    Product Grid ──► Cart View ──► Tender ──► Sales Report       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  matsuri-store (Store facade)                    │   │
//! │  │    add_to_cart, complete_order, summarize, JSON persistence     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ matsuri-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ checkout  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │build_order│  │   │
//! │  │   │   Order   │  │  (yen)    │  │ CartItem  │  │  guards   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │  summary  │  │ validation│                                 │   │
//! │  │   │ day totals│  │   rules   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE SYSTEM • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Order, PaymentMethod, ...)
//! - [`money`] - whole-yen `Money` with exact integer arithmetic
//! - [`cart`] - the transient cart and its line-item rules
//! - [`checkout`] - cart-to-order conversion with payment guards
//! - [`summary`] - daily sales aggregation over the order ledger
//! - [`error`] - typed domain errors
//! - [`validation`] - business rule validation
//!
//! ## Design Principles
//!
//! 1. **Value transforms**: the only timestamp and id generation live in
//!    [`checkout::build_order`]; everything else is deterministic
//! 2. **No I/O**: file system, network, terminal access is FORBIDDEN here
//! 3. **Integer money**: every amount is whole yen in an i64, never a float
//! 4. **Typed failures**: errors are enum variants with context, never
//!    strings and never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use matsuri_core::Money;
//!
//! // Two portions of yakisoba at ¥300
//! let line_total = Money::from_yen(300).multiply_quantity(2);
//! assert_eq!(line_total.yen(), 600);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod checkout;
pub mod error;
pub mod money;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================
// The flat paths (`matsuri_core::Money`) are the public API; the module
// paths stay available for doc navigation.

pub use cart::Cart;
pub use checkout::build_order;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use summary::{summarize, SalesSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// First hour of the stall's business day (inclusive).
///
/// ## Business Reason
/// The event runs 9:00-18:59. The sales report histogram pre-seeds one
/// bucket per hour in this window so quiet hours render as explicit zeros
/// instead of disappearing from the chart.
pub const OPEN_HOUR: u32 = 9;

/// Last hour of the stall's business day (inclusive).
pub const CLOSE_HOUR: u32 = 18;
