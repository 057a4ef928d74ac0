//! Per-page form state controllers.
//!
//! Each controller owns the header fields and row table for one form, with
//! append/remove/edit semantics and a synchronous `validate()` run before
//! submit. Row mutation rebuilds the full array so the rendering layer sees a
//! fresh value, never an aliased edit. Validation errors map field name to
//! message; submission is blocked while the map is non-empty.

pub mod material_receipt;
pub mod purchase_order;
pub mod warehouse_receipt;

pub use material_receipt::{MaterialReceiptForm, MrLineField};
pub use purchase_order::{PoLineField, PurchaseOrderForm};
pub use warehouse_receipt::{BoxField, WarehouseReceiptForm};

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use std::str::FromStr;

pub type FieldErrors = BTreeMap<String, String>;

pub(crate) fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.insert(field.to_string(), format!("{} is required", field));
    }
}

pub(crate) fn require_positive(errors: &mut FieldErrors, field: &str, value: &Decimal) {
    if value <= &Decimal::ZERO {
        errors.insert(field.to_string(), format!("{} must be greater than zero", field));
    }
}

/// Form-input coercion: whatever the user typed, an unparseable number lands
/// as zero and is caught by validation rather than surfaced as a parse error.
pub(crate) fn parse_decimal(value: &str) -> Decimal {
    Decimal::from_str(value.trim()).unwrap_or(Decimal::ZERO)
}
