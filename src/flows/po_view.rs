use tracing::instrument;

use crate::client::Gateway;
use crate::models::{PoFulfillmentRow, PurchaseOrder};
use crate::notify::Notifier;

/// State of the purchase order view page: the order plus its fulfillment
/// rows aggregated from material receipts.
#[derive(Debug, Default)]
pub struct PoView {
    pub purchase_order: Option<PurchaseOrder>,
    pub fulfillment: Vec<PoFulfillmentRow>,
}

impl PoView {
    pub fn clear(&mut self) {
        *self = PoView::default();
    }
}

/// Searches for a purchase order and fills the view. The fulfillment pass is
/// best-effort; its failure keeps the order visible.
#[instrument(skip(gateway, notifier, state))]
pub async fn search_purchase_order(
    gateway: &dyn Gateway,
    notifier: &dyn Notifier,
    state: &mut PoView,
    id: &str,
) {
    state.clear();

    match gateway.purchase_order(id).await {
        Ok(po) => state.purchase_order = Some(po),
        Err(e) => {
            notifier.notify(e.notification_kind(), &e.to_string());
            return;
        }
    }

    match gateway.po_fulfillment(id).await {
        Ok(rows) => state.fulfillment = rows,
        Err(e) => notifier.notify(e.notification_kind(), &e.to_string()),
    }
}
