//! # Validation Module
//!
//! Input validation utilities for Matsuri POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Where Input Gets Checked                              │
//! │                                                                         │
//! │  Layer 1: Terminal UI                                                   │
//! │  ├── Basic format checks (empty input, not a number)                   │
//! │  └── Immediate operator feedback                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store facade (matsuri-store)                                  │
//! │  └── THIS MODULE: drafts validated before ids are assigned             │
//! │                                                                         │
//! │  Defense in depth: bad input is rejected loudly, never coerced.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use matsuri_core::validation::{validate_product_name, validate_price};
//! use matsuri_core::Money;
//!
//! validate_product_name("焼きそば").unwrap();
//! validate_price(Money::from_yen(300)).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{CategoryDraft, ProductDraft};

/// Result alias for the validators in this module.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a category name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 50 characters
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "category name".to_string(),
        });
    }

    if name.chars().count() > 50 {
        return Err(ValidationError::TooLong {
            field: "category name".to_string(),
            max: 50,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Non-negative; zero is allowed (giveaway items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a keyed-in line quantity.
///
/// ## Rules
/// - Strictly positive. (A zero quantity means "remove the line", which
///   is a cart operation, not a valid input quantity.)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Draft Validators
// =============================================================================

/// Validates a product draft before the store assigns it an id.
///
/// ## Rules
/// - name: non-empty, <= 200 chars
/// - price: non-negative
/// - category: required (referential integrity beyond presence is not
///   enforced; an unknown category renders as a fallback)
pub fn validate_product_draft(draft: &ProductDraft) -> ValidationResult<()> {
    validate_product_name(&draft.name)?;
    validate_price(draft.price)?;

    if draft.category_id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "categoryId".to_string(),
        });
    }

    Ok(())
}

/// Validates a category draft before the store assigns it an id.
pub fn validate_category_draft(draft: &CategoryDraft) -> ValidationResult<()> {
    validate_category_name(&draft.name)?;

    if draft.color.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "color".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
