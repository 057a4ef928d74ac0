use serde_json::Value;
use tracing::warn;

use crate::models::{BoxItem, WarehouseReceipt};
use crate::wire::value::*;
use crate::wire::{cells, declared_count};

// Header row mapping (rows[0]).
const WR_NUMBER: usize = 0;
const CLIENT: usize = 1;
const CARRIER: usize = 2;
const TRACKING_NUMBER: usize = 3;
const RECEIVED_AT: usize = 4;
const RECEIVED_BY: usize = 5;
const HAZMAT: usize = 6;
const HAZMAT_CODE: usize = 7;
const NOTES: usize = 8;
const PO_NUMBER: usize = 9;

// Box item row mapping (rows[2..]).
const BOX_NUMBER: usize = 0;
const BOX_TYPE: usize = 1;
const BOX_LENGTH: usize = 2;
const BOX_WIDTH: usize = 3;
const BOX_HEIGHT: usize = 4;
const BOX_LOCATION: usize = 5;
const BOX_WEIGHT: usize = 6;

/// Decodes a warehouse receipt payload. Input shorter than one row yields a
/// default record with no items; the item count row (`rows[1]`) is checked
/// against the actual trailing rows and a mismatch is logged, not rejected.
pub fn decode_warehouse_receipt(rows: &[Value]) -> WarehouseReceipt {
    let header = cells(rows.first());

    let boxes: Vec<BoxItem> = if rows.len() > 2 {
        rows[2..].iter().map(decode_box_item).collect()
    } else {
        Vec::new()
    };

    if let Some(count) = declared_count(rows) {
        if count as usize != boxes.len() {
            warn!(
                declared = count,
                actual = boxes.len(),
                "warehouse receipt item count does not match trailing rows"
            );
        }
    }

    WarehouseReceipt {
        wr_number: str_at(header, WR_NUMBER),
        client: str_at(header, CLIENT),
        carrier: str_at(header, CARRIER),
        tracking_number: str_at(header, TRACKING_NUMBER),
        received_at: date_at(header, RECEIVED_AT),
        received_by: str_at(header, RECEIVED_BY),
        hazmat: yes_no_at(header, HAZMAT),
        hazmat_code: str_at(header, HAZMAT_CODE),
        notes: str_at(header, NOTES),
        po_number: str_at(header, PO_NUMBER),
        boxes,
        photo_urls: Vec::new(),
    }
}

fn decode_box_item(row: &Value) -> BoxItem {
    let c = cells(Some(row));
    BoxItem {
        number: str_at(c, BOX_NUMBER),
        box_type: str_at(c, BOX_TYPE),
        length: decimal_at(c, BOX_LENGTH),
        width: decimal_at(c, BOX_WIDTH),
        height: decimal_at(c, BOX_HEIGHT),
        location: str_at(c, BOX_LOCATION),
        weight: decimal_at(c, BOX_WEIGHT),
    }
}

/// Encodes the receipt payload in the exact wire shape the backend expects.
/// Photo URLs travel on their own endpoint and are not part of this payload.
pub fn encode_warehouse_receipt(wr: &WarehouseReceipt) -> Vec<Value> {
    let header = vec![
        Value::from(wr.wr_number.clone()),
        Value::from(wr.client.clone()),
        Value::from(wr.carrier.clone()),
        Value::from(wr.tracking_number.clone()),
        encode_date(&wr.received_at),
        Value::from(wr.received_by.clone()),
        encode_yes_no(wr.hazmat),
        Value::from(wr.hazmat_code.clone()),
        Value::from(wr.notes.clone()),
        Value::from(wr.po_number.clone()),
    ];

    let mut rows = vec![
        Value::Array(header),
        Value::Array(vec![Value::from(wr.boxes.len() as u64)]),
    ];
    for item in &wr.boxes {
        rows.push(Value::Array(vec![
            Value::from(item.number.clone()),
            Value::from(item.box_type.clone()),
            encode_decimal(&item.length),
            encode_decimal(&item.width),
            encode_decimal(&item.height),
            Value::from(item.location.clone()),
            encode_decimal(&item.weight),
        ]));
    }
    rows
}
