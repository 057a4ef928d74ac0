use serde_json::Value;
use tracing::warn;

use crate::models::{MRLineItem, MaterialReceipt};
use crate::wire::value::*;
use crate::wire::{cells, declared_count};

// Header row mapping (rows[0]).
const MR_NUMBER: usize = 0;
const ENTERED_BY: usize = 1;
const NOTES: usize = 2;

// Line item row mapping (rows[2..]).
const WR_NUMBER: usize = 0;
const QUANTITY_RECEIVED: usize = 1;
const BOX_NUMBER: usize = 2;
const PO_LINE_NUMBER: usize = 3;

pub fn decode_material_receipt(rows: &[Value]) -> MaterialReceipt {
    let header = cells(rows.first());

    let lines: Vec<MRLineItem> = if rows.len() > 2 {
        rows[2..].iter().map(decode_line).collect()
    } else {
        Vec::new()
    };

    if let Some(count) = declared_count(rows) {
        if count as usize != lines.len() {
            warn!(
                declared = count,
                actual = lines.len(),
                "material receipt line count does not match trailing rows"
            );
        }
    }

    MaterialReceipt {
        mr_number: str_at(header, MR_NUMBER),
        entered_by: str_at(header, ENTERED_BY),
        notes: str_at(header, NOTES),
        lines,
    }
}

fn decode_line(row: &Value) -> MRLineItem {
    let c = cells(Some(row));
    MRLineItem {
        wr_number: str_at(c, WR_NUMBER),
        quantity_received: decimal_at(c, QUANTITY_RECEIVED),
        box_number: str_at(c, BOX_NUMBER),
        po_line_number: u32_at(c, PO_LINE_NUMBER),
    }
}

pub fn encode_material_receipt(mr: &MaterialReceipt) -> Vec<Value> {
    let header = vec![
        Value::from(mr.mr_number.clone()),
        Value::from(mr.entered_by.clone()),
        Value::from(mr.notes.clone()),
    ];

    let mut rows = vec![
        Value::Array(header),
        Value::Array(vec![Value::from(mr.lines.len() as u64)]),
    ];
    for line in &mr.lines {
        rows.push(Value::Array(vec![
            Value::from(line.wr_number.clone()),
            encode_decimal(&line.quantity_received),
            Value::from(line.box_number.clone()),
            Value::from(line.po_line_number),
        ]));
    }
    rows
}
