//! Persistence integration tests: save/load round-trips, first-run
//! defaults, corruption healing, and factory reset against a real
//! filesystem (throwaway temp directories).

use tempfile::TempDir;

use matsuri_core::{Money, PaymentMethod};
use matsuri_store::{defaults, JsonStorage, Store};

fn storage_in(dir: &TempDir) -> JsonStorage {
    JsonStorage::new(dir.path().join("store.json"))
}

#[test]
fn first_run_loads_factory_defaults() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    let state = storage.load();

    assert_eq!(state, defaults::default_state());
    assert_eq!(state.products.len(), 17);
    assert_eq!(state.categories.len(), 4);
    assert!(state.orders.is_empty());
}

#[test]
fn save_then_load_round_trips_catalog_and_ledger() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    let mut store = Store::new(storage.load());
    store.add_to_cart("yakisoba").unwrap();
    store.add_to_cart("yakisoba").unwrap();
    store.add_to_cart("ramune").unwrap();
    let order = store
        .complete_order(PaymentMethod::Cash, Some(Money::from_yen(1000)))
        .unwrap();

    storage.save(store.state()).unwrap();
    let reloaded = storage.load();

    // Same ids, same field values - the full aggregate survives
    assert_eq!(reloaded, *store.state());
    assert_eq!(reloaded.orders.len(), 1);
    assert_eq!(reloaded.orders[0].id, order.id);
    assert_eq!(reloaded.orders[0].subtotal, Money::from_yen(750));
    assert_eq!(reloaded.orders[0].change, Some(Money::from_yen(250)));
    assert_eq!(reloaded.orders[0].created_at, order.created_at);

    // The cart is transient: a store built from the reload starts empty
    let restarted = Store::new(reloaded);
    assert!(restarted.cart().is_empty());
}

#[test]
fn corrupt_file_heals_to_defaults() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    std::fs::write(storage.path(), "{ not valid json !!").unwrap();

    let state = storage.load();
    assert_eq!(state, defaults::default_state());
}

#[test]
fn absent_top_level_keys_fall_back_individually() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    // A blob with only an orders key: catalog keys heal to defaults,
    // the ledger is kept as-is
    std::fs::write(storage.path(), r#"{"orders": []}"#).unwrap();

    let state = storage.load();
    assert_eq!(state.products, defaults::default_products());
    assert_eq!(state.categories, defaults::default_categories());
    assert!(state.orders.is_empty());
}

#[test]
fn empty_collections_round_trip_as_empty() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    // Explicitly empty keys are preserved, not healed to defaults -
    // an operator who deleted every product meant it
    std::fs::write(
        storage.path(),
        r#"{"products": [], "categories": [], "orders": []}"#,
    )
    .unwrap();

    let state = storage.load();
    assert!(state.products.is_empty());
    assert!(state.categories.is_empty());
}

#[test]
fn save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let storage = JsonStorage::new(dir.path().join("nested/deeper/store.json"));

    storage.save(&defaults::default_state()).unwrap();
    assert!(storage.path().exists());
}

#[test]
fn reset_overwrites_persisted_state_with_defaults() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    let mut store = Store::new(storage.load());
    store.add_to_cart("crepe").unwrap();
    store.complete_order(PaymentMethod::PayPay, None).unwrap();
    storage.save(store.state()).unwrap();

    let state = storage.reset().unwrap();

    assert_eq!(state, defaults::default_state());
    assert_eq!(storage.load(), defaults::default_state());
}

#[test]
fn save_overwrites_previous_blob_wholesale() {
    let dir = TempDir::new().unwrap();
    let storage = storage_in(&dir);

    let mut store = Store::new(storage.load());
    store.add_to_cart("tea").unwrap();
    store.complete_order(PaymentMethod::PayPay, None).unwrap();
    storage.save(store.state()).unwrap();

    store.clear_orders();
    storage.save(store.state()).unwrap();

    let reloaded = storage.load();
    assert!(reloaded.orders.is_empty());
}
