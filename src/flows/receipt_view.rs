use tracing::instrument;

use crate::client::Gateway;
use crate::errors::ClientError;
use crate::models::{PoFulfillmentRow, PurchaseOrder, WarehouseReceipt};
use crate::notify::Notifier;

/// State slices of the warehouse receipt view page, filled in up to three
/// passes: the receipt itself, then its referenced purchase order, then the
/// PO's fulfillment history.
#[derive(Debug, Default)]
pub struct ReceiptView {
    pub receipt: Option<WarehouseReceipt>,
    pub purchase_order: Option<PurchaseOrder>,
    pub fulfillment: Vec<PoFulfillmentRow>,
    pub photos: Vec<String>,
}

impl ReceiptView {
    pub fn clear(&mut self) {
        *self = ReceiptView::default();
    }
}

/// Searches for a warehouse receipt by id and fills the view.
///
/// Previously displayed data is cleared up front; a miss leaves the view
/// empty with exactly one notification. The PO and fulfillment passes are
/// best-effort: their failure keeps the receipt visible and notifies once per
/// failing pass.
#[instrument(skip(gateway, notifier, state))]
pub async fn search_receipt(
    gateway: &dyn Gateway,
    notifier: &dyn Notifier,
    image_bucket_host: &str,
    state: &mut ReceiptView,
    id: &str,
) {
    state.clear();

    let receipt = match gateway.warehouse_receipt(id).await {
        Ok(wr) => wr,
        Err(e) => {
            report(notifier, &e);
            return;
        }
    };
    state.receipt = Some(receipt);

    match gateway.photos(id).await {
        Ok(urls) => {
            state.photos = urls
                .into_iter()
                .filter(|u| allowed_photo(u, image_bucket_host))
                .collect();
        }
        Err(e) => report(notifier, &e),
    }

    let po_number = state
        .receipt
        .as_ref()
        .map(|wr| wr.po_number.clone())
        .unwrap_or_default();
    if po_number.is_empty() {
        return;
    }

    match gateway.purchase_order(&po_number).await {
        Ok(po) => state.purchase_order = Some(po),
        Err(e) => {
            report(notifier, &e);
            return;
        }
    }

    match gateway.po_fulfillment(&po_number).await {
        Ok(rows) => state.fulfillment = rows,
        Err(e) => report(notifier, &e),
    }
}

fn report(notifier: &dyn Notifier, error: &ClientError) {
    notifier.notify(error.notification_kind(), &error.to_string());
}

/// Only photos served from the allow-listed image bucket are rendered.
fn allowed_photo(candidate: &str, host: &str) -> bool {
    url::Url::parse(candidate)
        .ok()
        .map(|u| u.host_str() == Some(host))
        .unwrap_or(false)
}
