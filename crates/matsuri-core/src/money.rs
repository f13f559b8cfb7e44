//! # Money Module
//!
//! The `Money` type: whole-yen amounts with exact integer arithmetic.
//!
//! ## Why Integer Yen?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NO FLOATS IN THE TILL                                                  │
//! │                                                                         │
//! │  Binary floating point cannot represent most decimal fractions,        │
//! │  and a register that drifts by a fraction of a yen per line is a       │
//! │  register nobody trusts.                                                │
//! │                                                                         │
//! │  Stall prices are whole yen (¥300 yakisoba, ¥150 ramune), so the       │
//! │  smallest currency unit is also the display unit. Every arithmetic     │
//! │  operation stays in i64 and is exact.                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use matsuri_core::money::Money;
//!
//! // Create from yen (preferred)
//! let price = Money::from_yen(350); // たこ焼き
//!
//! // Arithmetic operations
//! let doubled = price * 2;                      // ¥700
//! let total = price + Money::from_yen(150);     // ¥500
//!
//! // NEVER do this:
//! // let bad = Money::from_float(350.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole yen.
///
/// ## Design Decisions
/// - **i64 (signed)**: Subtraction (change calculation) may transiently go
///   negative while the operator is still keying a received amount
/// - **Newtype over i64**: no runtime cost, and the type system keeps
///   raw integers out of monetary positions
/// - **Serde**: serializes as a bare integer, so the persisted blob and
///   the original price fields are interchangeable
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                   Money Flow Through the Till                           │
/// │                                                                         │
/// │  Product.price ──► CartItem line total ──► Cart.subtotal               │
/// │                                               │                         │
/// │  received_amount ─── change = received − subtotal ──► Order            │
/// │                                                                         │
/// │  Every monetary value in the system passes through this type           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole yen.
    ///
    /// ## Example
    /// ```rust
    /// use matsuri_core::money::Money;
    ///
    /// let price = Money::from_yen(300);
    /// assert_eq!(price.yen(), 300);
    /// ```
    #[inline]
    pub const fn from_yen(yen: i64) -> Self {
        Money(yen)
    }

    /// Returns the value in yen.
    #[inline]
    pub const fn yen(&self) -> i64 {
        self.0
    }

    /// The zero amount, ¥0.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True for exactly ¥0.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// True for amounts below zero.
    ///
    /// A negative change amount at confirmation time means the tendered
    /// cash did not cover the subtotal; checkout rejects that case.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use matsuri_core::money::Money;
    ///
    /// // 3 portions of たこ焼き at ¥350
    /// let line_total = Money::from_yen(350).multiply_quantity(3);
    /// assert_eq!(line_total.yen(), 1050);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `¥300` / `-¥250`.
///
/// ## Note
/// This is for logs, error messages, and the terminal UI. The CSV export
/// writes the raw integer instead (spreadsheets want numbers).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}¥{}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Amount plus amount.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// In-place addition (running totals).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Amount minus amount (change calculation).
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// In-place subtraction.
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Unit price times quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators (subtotals, day totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
