//! Printable receipt documents.
//!
//! Fixed-template PDFs built from in-memory form state: a title, a two-column
//! header block, a QR code of the record id, one or two tabular sections and a
//! page-numbered footer. Generation is a pure export: it never mutates
//! application state, and submit success does not depend on it. A QR failure
//! degrades to a text fallback in the same position; the document is still
//! produced.

mod layout;
mod material_receipt;
mod qr;
mod warehouse_receipt;

pub use material_receipt::material_receipt_pdf;
pub use warehouse_receipt::warehouse_receipt_pdf;

use std::path::{Path, PathBuf};

use crate::errors::ClientError;

pub fn warehouse_receipt_file_name(id: &str) -> String {
    format!("warehouse_receipt_{}.pdf", id)
}

pub fn material_receipt_file_name(id: &str) -> String {
    format!("material_receipt_{}.pdf", id)
}

/// Writes a generated document under `dir` and returns the full path.
pub fn write_document(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf, ClientError> {
    let path = dir.join(file_name);
    std::fs::write(&path, bytes).map_err(|e| ClientError::Document(e.to_string()))?;
    Ok(path)
}
