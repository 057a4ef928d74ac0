//! Transient client-side records. Every entity here is reconstructed from the
//! backend per operation and discarded on navigation; the backend owns the
//! truth.

pub mod material_receipt;
pub mod purchase_order;
pub mod views;
pub mod warehouse_receipt;

pub use material_receipt::{MRLineItem, MaterialReceipt};
pub use purchase_order::{resequence_lines, POLineItem, PurchaseOrder};
pub use views::{ClientSummaryRow, PoFulfillmentRow};
pub use warehouse_receipt::{BoxItem, WarehouseReceipt};

/// Two-decimal display formatting for money and quantity cells. The crate
/// performs no other rounding.
pub fn format_decimal(value: &rust_decimal::Decimal) -> String {
    format!("{:.2}", value)
}

/// Locale-style display formatting for date cells; an absent date renders
/// empty, matching a cell the backend never populated.
pub fn format_date(value: &Option<chrono::DateTime<chrono::Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%m/%d/%Y").to_string(),
        None => String::new(),
    }
}
