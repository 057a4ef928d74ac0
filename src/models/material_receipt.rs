use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A material receipt. Its id is shared with the warehouse receipt it was
/// entered against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialReceipt {
    pub mr_number: String,
    pub entered_by: String,
    pub notes: String,
    pub lines: Vec<MRLineItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MRLineItem {
    pub wr_number: String,
    pub quantity_received: Decimal,
    pub box_number: String,
    /// 1-based line number on the referenced purchase order.
    pub po_line_number: u32,
}
