use serde_json::Value;
use tracing::warn;

use crate::models::{POLineItem, PurchaseOrder};
use crate::wire::value::*;
use crate::wire::{cells, declared_count};

// Header row mapping (rows[0]).
const PO_NUMBER: usize = 0;
const CLIENT: usize = 1;
const DESTINATION: usize = 2;
const VENDOR: usize = 3;
const SHIP_VIA: usize = 4;
const NOTES: usize = 5;

// Line item row mapping (rows[2..]). The received quantity is present on
// get-by-id responses and ignored by the backend on create/update.
const LINE_NUMBER: usize = 0;
const PART_ID: usize = 1;
const DESCRIPTION: usize = 2;
const QUANTITY: usize = 3;
const UNIT_COST: usize = 4;
const QUANTITY_RECEIVED: usize = 5;

pub fn decode_purchase_order(rows: &[Value]) -> PurchaseOrder {
    let header = cells(rows.first());

    let lines: Vec<POLineItem> = if rows.len() > 2 {
        rows[2..].iter().map(decode_line).collect()
    } else {
        Vec::new()
    };

    if let Some(count) = declared_count(rows) {
        if count as usize != lines.len() {
            warn!(
                declared = count,
                actual = lines.len(),
                "purchase order line count does not match trailing rows"
            );
        }
    }

    PurchaseOrder {
        po_number: str_at(header, PO_NUMBER),
        client: str_at(header, CLIENT),
        destination: str_at(header, DESTINATION),
        vendor: str_at(header, VENDOR),
        ship_via: str_at(header, SHIP_VIA),
        notes: str_at(header, NOTES),
        lines,
    }
}

fn decode_line(row: &Value) -> POLineItem {
    let c = cells(Some(row));
    POLineItem {
        line_number: u32_at(c, LINE_NUMBER),
        part_id: str_at(c, PART_ID),
        description: str_at(c, DESCRIPTION),
        quantity: decimal_at(c, QUANTITY),
        unit_cost: decimal_at(c, UNIT_COST),
        quantity_received: decimal_at(c, QUANTITY_RECEIVED),
    }
}

pub fn encode_purchase_order(po: &PurchaseOrder) -> Vec<Value> {
    let header = vec![
        Value::from(po.po_number.clone()),
        Value::from(po.client.clone()),
        Value::from(po.destination.clone()),
        Value::from(po.vendor.clone()),
        Value::from(po.ship_via.clone()),
        Value::from(po.notes.clone()),
    ];

    let mut rows = vec![
        Value::Array(header),
        Value::Array(vec![Value::from(po.lines.len() as u64)]),
    ];
    for line in &po.lines {
        rows.push(Value::Array(vec![
            Value::from(line.line_number),
            Value::from(line.part_id.clone()),
            Value::from(line.description.clone()),
            encode_decimal(&line.quantity),
            encode_decimal(&line.unit_cost),
            encode_decimal(&line.quantity_received),
        ]));
    }
    rows
}
