//! # Factory Defaults
//!
//! The catalog a fresh till starts with, and the state `reset_all_data`
//! restores. A typical school-festival stall lineup: food, drinks,
//! desserts, and two combo sets.
//!
//! Default entries use readable slug ids instead of UUIDs so the
//! persisted blob stays greppable; ids assigned at runtime are UUIDs.
//! Both are opaque to the rest of the system - only uniqueness matters.

use matsuri_core::{Category, Money, Product, StoreState};

/// The factory-default categories: フード, ドリンク, デザート, セット.
pub fn default_categories() -> Vec<Category> {
    [
        ("food", "フード", "#ef4444"),
        ("drink", "ドリンク", "#3b82f6"),
        ("dessert", "デザート", "#ec4899"),
        ("set", "セット", "#22c55e"),
    ]
    .into_iter()
    .map(|(id, name, color)| Category {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
    })
    .collect()
}

/// The factory-default product grid (17 products across 4 categories).
pub fn default_products() -> Vec<Product> {
    [
        // フード
        ("yakisoba", "焼きそば", 300, "food"),
        ("takoyaki", "たこ焼き（6個）", 350, "food"),
        ("frankfurter", "フランクフルト", 200, "food"),
        ("karaage", "唐揚げ（5個）", 300, "food"),
        ("poteto", "フライドポテト", 250, "food"),
        ("onigiri", "おにぎり", 150, "food"),
        // ドリンク
        ("ramune", "ラムネ", 150, "drink"),
        ("cola", "コーラ", 150, "drink"),
        ("orange", "オレンジジュース", 150, "drink"),
        ("tea", "お茶", 120, "drink"),
        ("water", "水", 100, "drink"),
        // デザート
        ("crepe", "クレープ", 400, "dessert"),
        ("watagashi", "わたがし", 200, "dessert"),
        ("kakigori", "かき氷", 250, "dessert"),
        ("cookie", "手作りクッキー", 150, "dessert"),
        // セット
        ("set_a", "セットA（焼きそば＋ドリンク）", 400, "set"),
        ("set_b", "セットB（たこ焼き＋ドリンク）", 450, "set"),
    ]
    .into_iter()
    .map(|(id, name, price, category_id)| Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_yen(price),
        category_id: category_id.to_string(),
        stock: None,
        is_available: true,
    })
    .collect()
}

/// Factory-default store state: full catalog, empty ledger.
pub fn default_state() -> StoreState {
    StoreState {
        products: default_products(),
        categories: default_categories(),
        orders: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let state = default_state();
        assert_eq!(state.categories.len(), 4);
        assert_eq!(state.products.len(), 17);
        assert!(state.orders.is_empty());
    }

    #[test]
    fn test_default_ids_are_unique() {
        let products = default_products();
        for (i, p) in products.iter().enumerate() {
            assert!(
                products.iter().skip(i + 1).all(|q| q.id != p.id),
                "duplicate product id {}",
                p.id
            );
        }
    }

    #[test]
    fn test_default_products_reference_known_categories() {
        let categories = default_categories();
        for product in default_products() {
            assert!(
                categories.iter().any(|c| c.id == product.category_id),
                "product {} references unknown category {}",
                product.id,
                product.category_id
            );
        }
    }

    #[test]
    fn test_defaults_are_sellable() {
        for product in default_products() {
            assert!(product.is_available);
            assert!(!product.price.is_negative());
            assert_eq!(product.stock, None); // unlimited
        }
    }
}
