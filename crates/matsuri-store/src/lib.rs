//! # matsuri-store: Store State, Persistence & Export for Matsuri POS
//!
//! This crate owns the in-memory store (catalog + order ledger + live
//! cart) behind an explicit [`Store`] facade, plus the JSON persistence
//! adapter and the daily CSV export.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Matsuri POS Data Flow                              │
//! │                                                                         │
//! │  Terminal UI (apps/terminal)                                            │
//! │       │ owns one Store + one JsonStorage, injected - no singletons      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   matsuri-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────┐   ┌──────────────┐   ┌──────────────────┐   │   │
//! │  │   │    Store     │   │ JsonStorage  │   │     export       │   │   │
//! │  │   │  (store.rs)  │   │ (storage.rs) │   │   (export.rs)    │   │   │
//! │  │   │              │   │              │   │                  │   │   │
//! │  │   │ catalog CRUD │   │ save / load  │   │ day ledger as    │   │   │
//! │  │   │ cart ops     │◄──│ reset        │   │ UTF-8-BOM CSV    │   │   │
//! │  │   │ checkout     │   │ heal corrupt │   │ (quoted cells)   │   │   │
//! │  │   │ summarize    │   └──────────────┘   └──────────────────┘   │   │
//! │  │   └──────────────┘                                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  One JSON file, e.g. ~/.local/share/matsuri-pos/store.json             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The injected store facade (all reads and mutations)
//! - [`storage`] - JSON file persistence with corruption healing
//! - [`defaults`] - Factory-default festival catalog
//! - [`export`] - Daily sales CSV export
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use matsuri_store::{JsonStorage, Store};
//!
//! let storage = JsonStorage::new("path/to/store.json");
//! let mut store = Store::new(storage.load());
//!
//! store.add_to_cart("yakisoba")?;
//! let order = store.complete_order(PaymentMethod::Cash, Some(Money::from_yen(1000)))?;
//! storage.save(store.state())?; // the save observer, at the call site
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod defaults;
pub mod error;
pub mod export;
pub mod storage;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use export::{export_filename, sales_csv, write_sales_csv};
pub use storage::JsonStorage;
pub use store::Store;
