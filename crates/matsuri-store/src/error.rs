//! # Store Error Types
//!
//! Error types for store, persistence, and export operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  CoreError / io::Error / serde_json::Error / csv::Error                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Terminal UI displays a user-friendly message and keeps running        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note what is NOT here: a corrupt persisted file is not an error. The
//! storage layer heals it silently by falling back to factory defaults
//! (logged at warn), so corruption never propagates to the caller.

use thiserror::Error;

use matsuri_core::CoreError;

/// Store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The product id is not in the catalog.
    ///
    /// ## When This Occurs
    /// - `add_to_cart` with an id that was deleted under the operator
    /// - A stale id from a previous session
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Business rule violation from the core (empty cart, insufficient
    /// payment, validation failure).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Writing the persisted blob failed (permissions, disk full).
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the store state failed.
    #[error("Serialization failed: {0}")]
    Serde(#[from] serde_json::Error),

    /// Writing the CSV export failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Shorthand for results carrying a [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;
