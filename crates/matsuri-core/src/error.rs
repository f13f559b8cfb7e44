//! # Error Types
//!
//! Domain-specific error types for matsuri-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Failure Taxonomy                                    │
//! │                                                                         │
//! │  matsuri-core errors (this file)                                        │
//! │  ├── CoreError        - Checkout and domain rule violations             │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  matsuri-store errors (separate crate)                                  │
//! │  └── StoreError       - Catalog lookups, persistence, CSV export        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Terminal UI          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - `thiserror` derives, no hand-written `Display`/`Error` impls
//! - variants carry their context (amounts, field names), never bare strings
//! - every variant has a message the terminal can show the operator as-is

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by the core.
///
/// These errors represent business rule violations. They should be caught
/// by the presentation layer and translated to user-friendly messages;
/// none of them are fatal and none are retried automatically.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Checkout attempted with no lines in the cart.
    ///
    /// ## When This Occurs
    /// - Operator presses "pay" before scanning anything
    /// - A double-submit lands after the first checkout cleared the cart
    ///
    /// The cart is left untouched; there is nothing to preserve.
    #[error("Cannot complete an order with an empty cart")]
    EmptyCart,

    /// Cash tendered is less than the cart subtotal.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart subtotal: ¥750
    ///      │
    ///      ▼
    /// Operator keys received amount: ¥500
    ///      │
    ///      ▼
    /// InsufficientPayment { subtotal: 750, received: 500 }
    ///      │
    ///      ▼
    /// UI shows "お預かり金額が不足しています" and keeps the cart for retry
    /// ```
    ///
    /// Negative change is a hard rejection at confirmation time: the order
    /// is never created with a negative `change` field.
    #[error("Insufficient payment: received {received}, subtotal {subtotal}")]
    InsufficientPayment { subtotal: Money, received: Money },

    /// Cash checkout attempted without a received amount.
    ///
    /// Non-cash methods omit the amount by design; for cash it is required
    /// so change can be computed.
    #[error("Cash payment requires a received amount")]
    ReceivedAmountRequired,

    /// Input validation failure, lifted into the core error type so
    /// callers handle one error enum per layer.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when operator input does not meet the catalog rules.
/// Used for early validation at the input boundary, before business
/// logic runs. The core never silently coerces bad input.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The field was empty (or whitespace only) but is required.
    #[error("{field} is required")]
    Required { field: String },

    /// The field exceeds its maximum length, counted in characters
    /// rather than bytes (names are Japanese).
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// A numeric field fell outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A numeric field that must be strictly positive was not.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Shorthand for results carrying a [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
