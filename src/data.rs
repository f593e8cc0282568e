//! # Receipt Preview Data
//!
//! The fixed-shape data record that fills a template at render time:
//! store identity, cashier, line items, totals and payment details.
//!
//! The engine never fetches this record — the embedding page supplies it
//! (from a finished sale or as demo data for the designer preview) and the
//! renderers consume it read-only.

use serde::{Deserialize, Serialize};

/// One sold line item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptItem {
    pub name: String,
    pub quantity: f64,
    /// Unit price.
    pub price: f64,
    /// Extended total (quantity × unit price, discounts applied upstream).
    pub total: f64,
}

impl ReceiptItem {
    pub fn new(name: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            price,
            total: quantity * price,
        }
    }
}

/// One payment applied to the sale (a sale may be split across methods).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    pub method: String,
    pub amount: f64,
}

/// The full data record available to `{{token}}` substitution and to the
/// native `itemList`/`totals` renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReceiptPreviewData {
    pub store_name: String,
    pub store_address: String,
    pub store_phone: String,
    pub cashier_name: String,
    pub receipt_number: String,
    pub date: String,
    pub time: String,
    pub items: Vec<ReceiptItem>,
    pub subtotal: f64,
    pub tax: f64,
    pub discount: f64,
    pub total: f64,
    pub payment_method: String,
    pub payments: Vec<Payment>,
    pub change: f64,
    pub footer_text: String,
    pub qr_code_data: String,
}

impl ReceiptPreviewData {
    /// Demo record used by the designer's live preview when no real sale
    /// is loaded.
    pub fn sample() -> Self {
        Self {
            store_name: "DEMO MARKET".into(),
            store_address: "12 Navoi Street, Tashkent".into(),
            store_phone: "+998 71 200 00 00".into(),
            cashier_name: "Dilnoza".into(),
            receipt_number: "000123".into(),
            date: "2026-08-05".into(),
            time: "14:25".into(),
            items: vec![
                ReceiptItem::new("Mineral water 0.5L", 2.0, 4000.0),
                ReceiptItem::new("Non (flatbread)", 1.0, 3500.0),
                ReceiptItem::new("Chocolate bar with almonds", 3.0, 12000.0),
            ],
            subtotal: 47500.0,
            tax: 0.0,
            discount: 2500.0,
            total: 45000.0,
            payment_method: "Cash".into(),
            payments: vec![
                Payment {
                    method: "Cash".into(),
                    amount: 50000.0,
                },
            ],
            change: 5000.0,
            footer_text: "Thank you for your purchase!".into(),
            qr_code_data: "https://example.uz/receipt/000123".into(),
        }
    }
}
