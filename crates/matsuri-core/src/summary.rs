//! # Sales Summary
//!
//! Daily sales aggregation over the order ledger.
//!
//! ## Aggregation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     summarize(orders, date)                             │
//! │                                                                         │
//! │  Order Ledger ──► filter: created_at on `date` (local wall-clock)      │
//! │                       │                                                 │
//! │        ┌──────────────┼──────────────────┬─────────────────┐           │
//! │        ▼              ▼                  ▼                 ▼           │
//! │   total_sales    by_payment_method   by_product        by_hour         │
//! │   total_orders   (3 keys, all        (ranked desc      (10 buckets,    │
//! │   total_items    pre-seeded to 0)    by total)         hours 9-18)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Read-only: this module never mutates the ledger. The summary is
//! recomputed from scratch per request; the ledger for one stall-day is
//! small enough that caching would only add staleness bugs.

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Order, PaymentMethod};
use crate::{CLOSE_HOUR, OPEN_HOUR};

// =============================================================================
// Summary Types
// =============================================================================

/// Day totals per payment method.
///
/// All three fields are always present, even when zero, so the report
/// view never has to handle a missing method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentBreakdown {
    pub cash: Money,
    pub paypay: Money,
    pub other_electronic: Money,
}

impl PaymentBreakdown {
    fn add(&mut self, method: PaymentMethod, amount: Money) {
        match method {
            PaymentMethod::Cash => self.cash += amount,
            PaymentMethod::PayPay => self.paypay += amount,
            PaymentMethod::OtherElectronic => self.other_electronic += amount,
        }
    }

    /// Returns the total for a single method.
    pub fn get(&self, method: PaymentMethod) -> Money {
        match method {
            PaymentMethod::Cash => self.cash,
            PaymentMethod::PayPay => self.paypay,
            PaymentMethod::OtherElectronic => self.other_electronic,
        }
    }
}

/// Per-product sales ranking entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: String,
    /// Display name from the most recent snapshot seen for this product.
    pub product_name: String,
    pub quantity: i64,
    pub total: Money,
}

/// One hour of the business day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourBucket {
    /// Local hour of day (9 through 18).
    pub hour: u32,
    pub sales: Money,
    pub orders: u64,
}

/// Aggregated sales for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Σ subtotal over the day's orders.
    pub total_sales: Money,
    /// Number of orders.
    pub total_orders: u64,
    /// Σ quantity over all line items of the day's orders.
    pub total_items: i64,
    pub by_payment_method: PaymentBreakdown,
    /// Ranked descending by total; ties keep first-encounter order.
    pub by_product: Vec<ProductSales>,
    /// Exactly ten buckets, hours 9-18 ascending, present even when zero.
    pub by_hour: Vec<HourBucket>,
}

// =============================================================================
// Aggregation
// =============================================================================

/// Summarizes the ledger for one calendar day.
///
/// An order belongs to the day when its `created_at` falls on `date` in
/// local wall-clock time (the closed interval 00:00:00.000 through
/// 23:59:59.999).
///
/// Orders placed outside 9:00-18:59 still count toward the day totals and
/// the payment/product breakdowns; only the hourly histogram has no
/// bucket for them. The event runs 9-18, so in practice this is the
/// entire day.
pub fn summarize(orders: &[Order], date: NaiveDate) -> SalesSummary {
    let mut by_hour: Vec<HourBucket> = (OPEN_HOUR..=CLOSE_HOUR)
        .map(|hour| HourBucket {
            hour,
            sales: Money::zero(),
            orders: 0,
        })
        .collect();

    let mut total_sales = Money::zero();
    let mut total_orders = 0u64;
    let mut total_items = 0i64;
    let mut by_payment_method = PaymentBreakdown::default();
    let mut by_product: Vec<ProductSales> = Vec::new();

    for order in orders {
        if order.created_at.date_naive() != date {
            continue;
        }

        total_sales += order.subtotal;
        total_orders += 1;
        by_payment_method.add(order.payment_method, order.subtotal);

        let hour = order.created_at.hour();
        if (OPEN_HOUR..=CLOSE_HOUR).contains(&hour) {
            let bucket = &mut by_hour[(hour - OPEN_HOUR) as usize];
            bucket.sales += order.subtotal;
            bucket.orders += 1;
        }

        for item in &order.items {
            total_items += item.quantity;

            match by_product
                .iter_mut()
                .find(|p| p.product_id == item.product.id)
            {
                Some(entry) => {
                    entry.quantity += item.quantity;
                    entry.total += item.line_total();
                    // Last-seen snapshot wins so a renamed product shows
                    // its current label
                    entry.product_name = item.product.name.clone();
                }
                None => by_product.push(ProductSales {
                    product_id: item.product.id.clone(),
                    product_name: item.product.name.clone(),
                    quantity: item.quantity,
                    total: item.line_total(),
                }),
            }
        }
    }

    // Stable sort: equal totals keep their first-encounter order
    by_product.sort_by(|a, b| b.total.cmp(&a.total));

    SalesSummary {
        total_sales,
        total_orders,
        total_items,
        by_payment_method,
        by_product,
        by_hour,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CartItem, Product};
    use chrono::{Local, TimeZone};

    fn product(id: &str, name: &str, price: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_yen(price),
            category_id: "food".to_string(),
            stock: None,
            is_available: true,
        }
    }

    fn order_at(
        date: NaiveDate,
        hour: u32,
        method: PaymentMethod,
        lines: Vec<(Product, i64)>,
    ) -> Order {
        let items: Vec<CartItem> = lines
            .into_iter()
            .map(|(p, qty)| CartItem::new(p, qty))
            .collect();
        let subtotal = items.iter().map(|i| i.line_total()).sum();
        let created_at = Local
            .from_local_datetime(&date.and_hms_opt(hour, 30, 0).unwrap())
            .unwrap();

        Order {
            id: format!("order-{hour}-{method:?}"),
            items,
            subtotal,
            payment_method: method,
            received_amount: None,
            change: None,
            created_at,
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, 10).unwrap()
    }

    #[test]
    fn test_empty_ledger_yields_zeroed_summary() {
        let summary = summarize(&[], day());

        assert_eq!(summary.total_sales, Money::zero());
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.by_payment_method, PaymentBreakdown::default());
        assert!(summary.by_product.is_empty());

        assert_eq!(summary.by_hour.len(), 10);
        for (i, bucket) in summary.by_hour.iter().enumerate() {
            assert_eq!(bucket.hour, 9 + i as u32);
            assert_eq!(bucket.sales, Money::zero());
            assert_eq!(bucket.orders, 0);
        }
    }

    #[test]
    fn test_day_totals() {
        let orders = vec![
            order_at(
                day(),
                10,
                PaymentMethod::Cash,
                vec![(product("a", "焼きそば", 300), 2)],
            ),
            order_at(
                day(),
                12,
                PaymentMethod::PayPay,
                vec![(product("b", "ラムネ", 150), 3)],
            ),
        ];

        let summary = summarize(&orders, day());

        assert_eq!(summary.total_sales, Money::from_yen(1050));
        assert_eq!(summary.total_orders, 2);
        assert_eq!(summary.total_items, 5);
        assert_eq!(summary.by_payment_method.cash, Money::from_yen(600));
        assert_eq!(summary.by_payment_method.paypay, Money::from_yen(450));
        assert_eq!(summary.by_payment_method.other_electronic, Money::zero());
    }

    #[test]
    fn test_orders_on_other_days_are_ignored() {
        let other_day = NaiveDate::from_ymd_opt(2024, 8, 11).unwrap();
        let orders = vec![order_at(
            other_day,
            10,
            PaymentMethod::Cash,
            vec![(product("a", "焼きそば", 300), 1)],
        )];

        let summary = summarize(&orders, day());
        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_sales, Money::zero());
    }

    #[test]
    fn test_hour_buckets() {
        let orders = vec![
            order_at(
                day(),
                9,
                PaymentMethod::Cash,
                vec![(product("a", "焼きそば", 300), 1)],
            ),
            order_at(
                day(),
                9,
                PaymentMethod::Cash,
                vec![(product("a", "焼きそば", 300), 1)],
            ),
            order_at(
                day(),
                18,
                PaymentMethod::PayPay,
                vec![(product("b", "ラムネ", 150), 1)],
            ),
        ];

        let summary = summarize(&orders, day());

        let nine = &summary.by_hour[0];
        assert_eq!(nine.hour, 9);
        assert_eq!(nine.orders, 2);
        assert_eq!(nine.sales, Money::from_yen(600));

        let eighteen = &summary.by_hour[9];
        assert_eq!(eighteen.hour, 18);
        assert_eq!(eighteen.orders, 1);
        assert_eq!(eighteen.sales, Money::from_yen(150));
    }

    #[test]
    fn test_off_hours_order_counts_in_totals_but_no_bucket() {
        let orders = vec![order_at(
            day(),
            20,
            PaymentMethod::Cash,
            vec![(product("a", "焼きそば", 300), 1)],
        )];

        let summary = summarize(&orders, day());

        // In the day totals...
        assert_eq!(summary.total_orders, 1);
        assert_eq!(summary.total_sales, Money::from_yen(300));
        // ...but in no hour bucket
        let bucketed: u64 = summary.by_hour.iter().map(|b| b.orders).sum();
        assert_eq!(bucketed, 0);
    }

    #[test]
    fn test_by_product_ranking_descends_by_total() {
        let orders = vec![
            order_at(
                day(),
                10,
                PaymentMethod::Cash,
                vec![
                    (product("cheap", "お茶", 120), 1),
                    (product("big", "クレープ", 400), 3),
                ],
            ),
            order_at(
                day(),
                11,
                PaymentMethod::Cash,
                vec![(product("cheap", "お茶", 120), 2)],
            ),
        ];

        let summary = summarize(&orders, day());

        assert_eq!(summary.by_product.len(), 2);
        assert_eq!(summary.by_product[0].product_id, "big");
        assert_eq!(summary.by_product[0].total, Money::from_yen(1200));
        assert_eq!(summary.by_product[1].product_id, "cheap");
        assert_eq!(summary.by_product[1].quantity, 3);
        assert_eq!(summary.by_product[1].total, Money::from_yen(360));
    }

    #[test]
    fn test_by_product_ties_keep_encounter_order() {
        let orders = vec![order_at(
            day(),
            10,
            PaymentMethod::Cash,
            vec![
                (product("first", "コーラ", 150), 1),
                (product("second", "ラムネ", 150), 1),
            ],
        )];

        let summary = summarize(&orders, day());

        assert_eq!(summary.by_product[0].product_id, "first");
        assert_eq!(summary.by_product[1].product_id, "second");
    }

    #[test]
    fn test_by_product_uses_last_seen_name() {
        let orders = vec![
            order_at(
                day(),
                10,
                PaymentMethod::Cash,
                vec![(product("a", "焼きそば", 300), 1)],
            ),
            order_at(
                day(),
                11,
                PaymentMethod::Cash,
                vec![(product("a", "特製焼きそば", 300), 1)],
            ),
        ];

        let summary = summarize(&orders, day());
        assert_eq!(summary.by_product[0].product_name, "特製焼きそば");
    }
}
