//! # JSON Persistence Adapter
//!
//! Serializes the store state (catalog + ledger, never the cart) to a
//! single JSON file, overwriting the previous content on every save.
//!
//! ## Persistence Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Persistence Adapter                                │
//! │                                                                         │
//! │  save(state) ───► serialize {products, categories, orders} ───► file   │
//! │                   (whole-blob overwrite, no partial writes)             │
//! │                                                                         │
//! │  load() ◄──── file exists, parses cleanly ──── full state              │
//! │        ◄──── file missing ─────────────────── factory defaults         │
//! │        ◄──── file corrupt ─────────────────── factory defaults + warn! │
//! │        ◄──── top-level key absent ──────────── that key's default      │
//! │                                                                         │
//! │  load() NEVER returns an error: corruption is healed by falling        │
//! │  back to defaults. Losing a corrupted blob is the accepted tradeoff    │
//! │  for a till that always comes up ready to sell.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is exactly one writer (single-till model), so a plain overwrite
//! has no read-modify-write race to worry about.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info, warn};

use matsuri_core::{Category, Order, Product, StoreState};

use crate::defaults;
use crate::error::StoreResult;

/// Mirror of [`StoreState`] with optional top-level keys.
///
/// The original persisted blob had no schema version; the only shape
/// handling is at the top level, where an absent key falls back to that
/// key's factory default. Malformed nested entries fail the whole parse
/// and heal to full defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedState {
    products: Option<Vec<Product>>,
    categories: Option<Vec<Category>>,
    orders: Option<Vec<Order>>,
}

/// File-backed persistence for the store state.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates a storage adapter for the given file path.
    ///
    /// Nothing is read or written until [`load`](Self::load) or
    /// [`save`](Self::save) is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonStorage { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Saves the full state, overwriting any previous content.
    ///
    /// Parent directories are created on demand. The live cart is not
    /// part of [`StoreState`] and is therefore never persisted.
    pub fn save(&self, state: &StoreState) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json)?;

        debug!(path = %self.path.display(), orders = state.orders.len(), "State saved");
        Ok(())
    }

    /// Loads the persisted state.
    ///
    /// Never fails: a missing file yields the factory defaults (first
    /// run), and an unparsable file is healed to the defaults with a
    /// warning. Absent top-level keys fall back individually.
    pub fn load(&self) -> StoreState {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No persisted state, starting with factory defaults");
                return defaults::default_state();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read persisted state, falling back to defaults");
                return defaults::default_state();
            }
        };

        match serde_json::from_str::<PersistedState>(&raw) {
            Ok(persisted) => StoreState {
                products: persisted.products.unwrap_or_else(defaults::default_products),
                categories: persisted
                    .categories
                    .unwrap_or_else(defaults::default_categories),
                orders: persisted.orders.unwrap_or_default(),
            },
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Persisted state is corrupt, falling back to defaults");
                defaults::default_state()
            }
        }
    }

    /// Overwrites the persisted state with factory defaults and returns
    /// them. Used for the operator-triggered full reset.
    pub fn reset(&self) -> StoreResult<StoreState> {
        let state = defaults::default_state();
        self.save(&state)?;
        info!(path = %self.path.display(), "Persisted state reset to factory defaults");
        Ok(state)
    }
}
