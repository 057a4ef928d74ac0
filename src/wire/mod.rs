//! Positional-array wire codec.
//!
//! The backend never sends named objects. A record payload is a JSON array
//! whose first element is a flat array of header fields, whose second element
//! carries the item count, and whose remaining elements are positional arrays
//! of item fields. The index-to-field mapping for each record type lives in
//! one place per type, next to its decoder and encoder, and is kept exactly
//! wire-compatible with the backend.
//!
//! Decoding is defensively partial, never all-or-nothing: a missing or
//! wrong-typed cell becomes an empty string, zero or `None`, and a row that is
//! not an array decodes to a default item. Decoders do not return errors.

pub mod lists;
pub mod material_receipt;
pub mod purchase_order;
pub mod value;
pub mod warehouse_receipt;

pub use lists::{
    decode_client_summary, decode_id_list, decode_photo_urls, decode_po_fulfillment,
};
pub use material_receipt::{decode_material_receipt, encode_material_receipt};
pub use purchase_order::{decode_purchase_order, encode_purchase_order};
pub use warehouse_receipt::{decode_warehouse_receipt, encode_warehouse_receipt};

use serde_json::Value;

/// The cells of one positional row. A row that is not an array has no cells;
/// every per-field accessor then yields its default.
pub(crate) fn cells(row: Option<&Value>) -> &[Value] {
    row.and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Reads the declared item count row (`rows[1]`), which arrives as a
/// single-element array like `[2]`.
pub(crate) fn declared_count(rows: &[Value]) -> Option<u64> {
    let row = cells(rows.get(1));
    match row.first() {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}
