//! Decoders for the flat list payloads: id lists, client names, photo URLs
//! and the two reporting views. These payloads have no header/count rows;
//! every element is one positional row.

use serde_json::Value;

use crate::models::{ClientSummaryRow, PoFulfillmentRow};
use crate::wire::cells;
use crate::wire::value::*;

/// Id and name lists arrive as one-cell rows (`[["WR1"],["WR2"]]`); some
/// endpoints flatten them to bare strings. Empty cells are dropped.
pub fn decode_id_list(rows: &[Value]) -> Vec<String> {
    rows.iter()
        .filter_map(|row| match row {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(_) => {
                let id = str_at(cells(Some(row)), 0);
                (!id.is_empty()).then_some(id)
            }
            _ => None,
        })
        .collect()
}

pub fn decode_photo_urls(rows: &[Value]) -> Vec<String> {
    decode_id_list(rows)
}

// Client summary row mapping.
const SUMMARY_WR_NUMBER: usize = 0;
const SUMMARY_RECEIVED_AT: usize = 1;
const SUMMARY_CARRIER: usize = 2;
const SUMMARY_PO_NUMBER: usize = 3;
const SUMMARY_BOX_COUNT: usize = 4;

pub fn decode_client_summary(rows: &[Value]) -> Vec<ClientSummaryRow> {
    rows.iter()
        .map(|row| {
            let c = cells(Some(row));
            ClientSummaryRow {
                wr_number: str_at(c, SUMMARY_WR_NUMBER),
                received_at: date_at(c, SUMMARY_RECEIVED_AT),
                carrier: str_at(c, SUMMARY_CARRIER),
                po_number: str_at(c, SUMMARY_PO_NUMBER),
                box_count: u32_at(c, SUMMARY_BOX_COUNT),
            }
        })
        .collect()
}

// PO fulfillment row mapping.
const FULFILL_LINE_NUMBER: usize = 0;
const FULFILL_PART_ID: usize = 1;
const FULFILL_DESCRIPTION: usize = 2;
const FULFILL_QUANTITY_ORDERED: usize = 3;
const FULFILL_QUANTITY_RECEIVED: usize = 4;

pub fn decode_po_fulfillment(rows: &[Value]) -> Vec<PoFulfillmentRow> {
    rows.iter()
        .map(|row| {
            let c = cells(Some(row));
            PoFulfillmentRow {
                line_number: u32_at(c, FULFILL_LINE_NUMBER),
                part_id: str_at(c, FULFILL_PART_ID),
                description: str_at(c, FULFILL_DESCRIPTION),
                quantity_ordered: decimal_at(c, FULFILL_QUANTITY_ORDERED),
                quantity_received: decimal_at(c, FULFILL_QUANTITY_RECEIVED),
            }
        })
        .collect()
}
