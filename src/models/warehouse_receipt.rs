use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A warehouse receipt as decoded from the backend. `boxes` is ordered; the
/// backend sends an item count alongside the rows and the two are expected to
/// agree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WarehouseReceipt {
    pub wr_number: String,
    pub client: String,
    pub carrier: String,
    pub tracking_number: String,
    pub received_at: Option<DateTime<Utc>>,
    pub received_by: String,
    pub hazmat: bool,
    pub hazmat_code: String,
    pub notes: String,
    pub po_number: String,
    pub boxes: Vec<BoxItem>,
    /// Photo URLs served from the allow-listed image bucket. Populated by a
    /// separate endpoint, not part of the receipt payload itself.
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

/// One received box. Has no identity beyond its position within the parent
/// receipt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxItem {
    pub number: String,
    pub box_type: String,
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    pub location: String,
    pub weight: Decimal,
}
