use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub po_number: String,
    pub client: String,
    pub destination: String,
    pub vendor: String,
    pub ship_via: String,
    pub notes: String,
    pub lines: Vec<POLineItem>,
}

/// One purchase order line. Line numbers are 1-based and contiguous; removing
/// a line client-side resequences the survivors to 1..N.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct POLineItem {
    pub line_number: u32,
    pub part_id: String,
    pub description: String,
    pub quantity: Decimal,
    pub unit_cost: Decimal,
    /// Aggregated from material receipts by the backend; never entered
    /// client-side.
    pub quantity_received: Decimal,
}

/// Resequences line numbers to 1..N in current order. The form controller
/// runs this after every row removal.
pub fn resequence_lines(lines: &mut [POLineItem]) {
    for (i, line) in lines.iter_mut().enumerate() {
        line.line_number = (i + 1) as u32;
    }
}
