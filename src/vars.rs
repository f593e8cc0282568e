//! # Template Variable Substitution
//!
//! Expands `{{token}}` placeholders in component text against a
//! [`ReceiptPreviewData`] record. The token set is closed and
//! case-sensitive; anything unrecognized passes through verbatim so a
//! template written for a newer engine still renders.
//!
//! Substitution runs fresh on every render — no caching, by contract.

use crate::data::ReceiptPreviewData;

/// The recognized token names, exactly as they appear between braces.
pub const TEMPLATE_TOKENS: &[&str] = &[
    "storeName",
    "storeAddress",
    "storePhone",
    "cashierName",
    "receiptNumber",
    "date",
    "time",
    "change",
    "footerText",
    "payments",
    "total",
];

/// Replace every occurrence of every recognized `{{token}}` in `text`
/// with its value from `data`. Unrecognized tokens are left as-is.
pub fn expand(text: &str, data: &ReceiptPreviewData) -> String {
    let mut out = text.to_string();
    for (token, value) in variable_values(data) {
        let placeholder = format!("{{{{{}}}}}", token);
        if out.contains(&placeholder) {
            out = out.replace(&placeholder, &value);
        }
    }
    out
}

/// Build the token → value table for one render pass.
fn variable_values(data: &ReceiptPreviewData) -> Vec<(&'static str, String)> {
    vec![
        ("storeName", data.store_name.clone()),
        ("storeAddress", data.store_address.clone()),
        ("storePhone", data.store_phone.clone()),
        ("cashierName", data.cashier_name.clone()),
        ("receiptNumber", data.receipt_number.clone()),
        ("date", data.date.clone()),
        ("time", data.time.clone()),
        ("change", format_grouped(data.change)),
        ("footerText", data.footer_text.clone()),
        ("payments", format_payments(data)),
        ("total", format_grouped(data.total)),
    ]
}

/// One `method: amount UZS` line per payment, newline-joined. A sale
/// recorded without a payments list falls back to its single
/// `paymentMethod` string.
fn format_payments(data: &ReceiptPreviewData) -> String {
    if data.payments.is_empty() {
        return data.payment_method.clone();
    }
    data.payments
        .iter()
        .map(|p| format!("{}: {} UZS", p.method, format_grouped(p.amount)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Grouped decimal formatting for monetary tokens: thousands separated by
/// commas, at most two fraction digits, trailing zeros trimmed.
///
/// `1234.5` → `"1,234.5"`, `1000.0` → `"1,000"`.
pub fn format_grouped(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let int_part = rounded.trunc() as u64;
    let frac = format!("{:.2}", rounded.fract());

    let digits = int_part.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "0.50" -> ".5", "0.00" -> ""
    let frac_trimmed = frac
        .trim_start_matches('0')
        .trim_end_matches('0')
        .trim_end_matches('.');
    let mut out = String::new();
    if negative && (int_part > 0 || !frac_trimmed.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    out.push_str(frac_trimmed);
    out
}
