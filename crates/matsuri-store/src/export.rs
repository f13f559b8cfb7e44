//! # Daily Sales CSV Export
//!
//! Renders one day's orders as a CSV file for the organizer's
//! spreadsheet.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  sales_20240810.csv  (UTF-8 with BOM, every cell quoted)                │
//! │                                                                         │
//! │  "注文ID","日時","商品","数量","小計","決済方法"                          │
//! │  "a3f1...","2024/08/10 12:05:31","焼きそば","2","750","現金"            │
//! │  "","","ラムネ","1","",""            ← same order, continuation row     │
//! │  "9c42...","2024/08/10 12:01:02","かき氷","1","250","PayPay"            │
//! │                                                                         │
//! │  One row per order line item. Order-level cells (id, datetime,          │
//! │  subtotal, payment label) appear only on the order's first row and     │
//! │  stay blank on its continuation rows.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The BOM is there for Excel: without it, a UTF-8 CSV full of Japanese
//! opens as mojibake. Payment methods are rendered as localized labels,
//! not the raw serde tags.

use std::io::Write;

use chrono::NaiveDate;

use matsuri_core::Order;

use crate::error::StoreResult;

/// UTF-8 byte-order mark, prepended so Excel detects the encoding.
const UTF8_BOM: &[u8] = &[0xef, 0xbb, 0xbf];

/// CSV header row (order id, datetime, product, quantity, subtotal,
/// payment method).
const HEADERS: [&str; 6] = ["注文ID", "日時", "商品", "数量", "小計", "決済方法"];

/// Writes the BOM and the CSV for the given orders.
///
/// `orders` is written in the given sequence; pass the result of
/// `Store::orders_on(date)` for the conventional newest-first listing.
pub fn write_sales_csv<W: Write>(mut out: W, orders: &[&Order]) -> StoreResult<()> {
    out.write_all(UTF8_BOM)?;

    let mut wtr = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);

    wtr.write_record(HEADERS)?;

    for order in orders {
        for (index, item) in order.items.iter().enumerate() {
            let first = index == 0;
            wtr.write_record([
                if first { order.id.as_str() } else { "" }.to_string(),
                if first {
                    order.created_at.format("%Y/%m/%d %H:%M:%S").to_string()
                } else {
                    String::new()
                },
                item.product.name.clone(),
                item.quantity.to_string(),
                if first {
                    order.subtotal.yen().to_string()
                } else {
                    String::new()
                },
                if first {
                    order.payment_method.label().to_string()
                } else {
                    String::new()
                },
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Renders the CSV into a byte buffer (BOM included).
pub fn sales_csv(orders: &[&Order]) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_sales_csv(&mut buf, orders)?;
    Ok(buf)
}

/// The conventional export filename for a given day: `sales_YYYYMMDD.csv`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("sales_{}.csv", date.format("%Y%m%d"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use matsuri_core::{CartItem, Money, PaymentMethod, Product};

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

    fn two_line_cash_order() -> Order {
        let items = vec![
            CartItem::new(product("yakisoba", "焼きそば", 300), 2),
            CartItem::new(product("ramune", "ラムネ", 150), 1),
        ];
        Order {
            id: "order-1".to_string(),
            subtotal: items.iter().map(|i| i.line_total()).sum(),
            items,
            payment_method: PaymentMethod::Cash,
            received_amount: Some(Money::from_yen(1000)),
            change: Some(Money::from_yen(250)),
            created_at: Local.with_ymd_and_hms(2024, 8, 10, 12, 5, 31).unwrap(),
        }
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 10).unwrap();
        assert_eq!(export_filename(date), "sales_20240810.csv");
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let order = two_line_cash_order();
        let bytes = sales_csv(&[&order]).unwrap();

        assert_eq!(&bytes[..3], UTF8_BOM);

        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(
            header,
            "\"注文ID\",\"日時\",\"商品\",\"数量\",\"小計\",\"決済方法\""
        );
    }

    #[test]
    fn test_order_fields_only_on_first_item_row() {
        let order = two_line_cash_order();
        let bytes = sales_csv(&[&order]).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3); // header + 2 item rows
        assert_eq!(
            lines[1],
            "\"order-1\",\"2024/08/10 12:05:31\",\"焼きそば\",\"2\",\"750\",\"現金\""
        );
        // Continuation row: blank order-level cells, populated item cells
        assert_eq!(lines[2], "\"\",\"\",\"ラムネ\",\"1\",\"\",\"\"");
    }

    #[test]
    fn test_payment_method_rendered_as_label() {
        let mut order = two_line_cash_order();
        order.payment_method = PaymentMethod::OtherElectronic;
        let bytes = sales_csv(&[&order]).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();

        assert!(text.contains("\"その他電子\""));
        assert!(!text.contains("other_electronic"));
    }

    #[test]
    fn test_empty_day_exports_header_only() {
        let bytes = sales_csv(&[]).unwrap();
        let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
