use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the per-client receipt summary report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSummaryRow {
    pub wr_number: String,
    pub received_at: Option<DateTime<Utc>>,
    pub carrier: String,
    pub po_number: String,
    pub box_count: u32,
}

/// One row of the purchase order fulfillment view: ordered vs received
/// quantities per line, aggregated server-side from material receipts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoFulfillmentRow {
    pub line_number: u32,
    pub part_id: String,
    pub description: String,
    pub quantity_ordered: Decimal,
    pub quantity_received: Decimal,
}

impl PoFulfillmentRow {
    pub fn outstanding(&self) -> Decimal {
        self.quantity_ordered - self.quantity_received
    }
}
