//! Page-level control flow: mount, fetch, decode, render state, submit.
//!
//! Each flow takes the gateway and notifier as trait objects, mutates a view
//! state owned by the caller, and reports every failure as exactly one
//! notification. Multi-pass fetches are not transactional: a later pass
//! failing leaves earlier passes' data visible; nothing is rolled back or
//! retried.

pub mod po_view;
pub mod receipt_view;
pub mod submit;
pub mod summary;

pub use po_view::{search_purchase_order, PoView};
pub use receipt_view::{search_receipt, ReceiptView};
pub use submit::{
    delete_material_receipt, submit_material_receipt, submit_purchase_order,
    submit_warehouse_receipt, SubmitMode, SubmitResult,
};
pub use summary::load_client_summary;
