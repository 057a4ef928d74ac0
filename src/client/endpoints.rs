//! The backend's fixed endpoint paths, in one place. Paths interpolate ids
//! verbatim after percent-encoding; nothing here is discovered at runtime.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

// Everything a backend id may carry that is not safe inside one path
// segment. Spaces must become %20, not +; this is a path, not a query.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub const CLIENTS: &str = "/clients";
pub const WAREHOUSE_RECEIPTS: &str = "/warehouse-receipts";
pub const PURCHASE_ORDERS: &str = "/purchase-orders";
pub const MATERIAL_RECEIPTS: &str = "/material-receipts";

pub fn warehouse_receipt(id: &str) -> String {
    format!("{}/{}", WAREHOUSE_RECEIPTS, encode(id))
}

pub fn purchase_order(id: &str) -> String {
    format!("{}/{}", PURCHASE_ORDERS, encode(id))
}

pub fn material_receipt(id: &str) -> String {
    format!("{}/{}", MATERIAL_RECEIPTS, encode(id))
}

pub fn photos(wr_id: &str) -> String {
    format!("{}/{}/photos", WAREHOUSE_RECEIPTS, encode(wr_id))
}

pub fn client_summary(client: &str) -> String {
    format!("{}/{}/receipt-summary", CLIENTS, encode(client))
}

pub fn po_fulfillment(po_id: &str) -> String {
    format!("{}/{}/fulfillment", PURCHASE_ORDERS, encode(po_id))
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
