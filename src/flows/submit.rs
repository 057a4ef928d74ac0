use std::path::Path;

use tracing::{info, instrument};

use crate::client::Gateway;
use crate::documents;
use crate::forms::{FieldErrors, MaterialReceiptForm, PurchaseOrderForm, WarehouseReceiptForm};
use crate::notify::{NotificationKind, Notifier};

const VALIDATION_MESSAGE: &str = "Please correct the highlighted fields";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

/// Outcome of a submit attempt. `Invalid` carries the field annotations for
/// the page; the gateway was never called.
#[derive(Debug)]
pub enum SubmitResult<T> {
    Saved(T),
    Invalid(FieldErrors),
    Failed,
}

impl<T> SubmitResult<T> {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitResult::Saved(_))
    }
}

/// Validates and submits a warehouse receipt, then generates the printable
/// document when an output directory is given. Document failure is reported
/// but does not undo the save.
#[instrument(skip_all, fields(id = %form.wr_number, mode = ?mode))]
pub async fn submit_warehouse_receipt(
    gateway: &dyn Gateway,
    notifier: &dyn Notifier,
    form: &WarehouseReceiptForm,
    mode: SubmitMode,
    document_dir: Option<&Path>,
) -> SubmitResult<crate::models::WarehouseReceipt> {
    let errors = form.validate();
    if !errors.is_empty() {
        notifier.notify(NotificationKind::Validation, VALIDATION_MESSAGE);
        return SubmitResult::Invalid(errors);
    }

    let record = form.to_record();
    let saved = match mode {
        SubmitMode::Create => gateway.create_warehouse_receipt(&record).await,
        SubmitMode::Update => gateway.update_warehouse_receipt(&record).await,
    };
    if let Err(e) = saved {
        notifier.notify(e.notification_kind(), &e.to_string());
        return SubmitResult::Failed;
    }
    info!("warehouse receipt saved");

    if let Some(dir) = document_dir {
        match documents::warehouse_receipt_pdf(&record).and_then(|bytes| {
            documents::write_document(
                dir,
                &documents::warehouse_receipt_file_name(&record.wr_number),
                &bytes,
            )
        }) {
            Ok(path) => info!(path = %path.display(), "receipt document written"),
            Err(e) => notifier.notify(e.notification_kind(), &e.to_string()),
        }
    }

    SubmitResult::Saved(record)
}

#[instrument(skip_all, fields(id = %form.po_number, mode = ?mode))]
pub async fn submit_purchase_order(
    gateway: &dyn Gateway,
    notifier: &dyn Notifier,
    form: &PurchaseOrderForm,
    mode: SubmitMode,
) -> SubmitResult<crate::models::PurchaseOrder> {
    let errors = form.validate();
    if !errors.is_empty() {
        notifier.notify(NotificationKind::Validation, VALIDATION_MESSAGE);
        return SubmitResult::Invalid(errors);
    }

    let record = form.to_record();
    let saved = match mode {
        SubmitMode::Create => gateway.create_purchase_order(&record).await,
        SubmitMode::Update => gateway.update_purchase_order(&record).await,
    };
    match saved {
        Ok(()) => {
            info!("purchase order saved");
            SubmitResult::Saved(record)
        }
        Err(e) => {
            notifier.notify(e.notification_kind(), &e.to_string());
            SubmitResult::Failed
        }
    }
}

/// Material receipts are create-only; edits happen by delete and re-enter.
#[instrument(skip_all, fields(id = %form.mr_number))]
pub async fn submit_material_receipt(
    gateway: &dyn Gateway,
    notifier: &dyn Notifier,
    form: &MaterialReceiptForm,
    document_dir: Option<&Path>,
) -> SubmitResult<crate::models::MaterialReceipt> {
    let errors = form.validate();
    if !errors.is_empty() {
        notifier.notify(NotificationKind::Validation, VALIDATION_MESSAGE);
        return SubmitResult::Invalid(errors);
    }

    let record = form.to_record();
    if let Err(e) = gateway.create_material_receipt(&record).await {
        notifier.notify(e.notification_kind(), &e.to_string());
        return SubmitResult::Failed;
    }
    info!("material receipt saved");

    if let Some(dir) = document_dir {
        match documents::material_receipt_pdf(&record).and_then(|bytes| {
            documents::write_document(
                dir,
                &documents::material_receipt_file_name(&record.mr_number),
                &bytes,
            )
        }) {
            Ok(path) => info!(path = %path.display(), "receipt document written"),
            Err(e) => notifier.notify(e.notification_kind(), &e.to_string()),
        }
    }

    SubmitResult::Saved(record)
}

/// Deletes a material receipt; returns whether the backend accepted it.
#[instrument(skip(gateway, notifier))]
pub async fn delete_material_receipt(
    gateway: &dyn Gateway,
    notifier: &dyn Notifier,
    id: &str,
) -> bool {
    match gateway.delete_material_receipt(id).await {
        Ok(()) => true,
        Err(e) => {
            notifier.notify(e.notification_kind(), &e.to_string());
            false
        }
    }
}
