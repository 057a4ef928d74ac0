//! Remote gateway client.
//!
//! A thin wrapper over the backend's fixed REST endpoints. Every call is a
//! single request/response: no retry, no batching, no pagination and no
//! authentication header attachment. Failures come back as typed
//! [`ClientError`]s for the caller to surface as one notification.

pub mod endpoints;
mod rest;

pub use rest::RestGateway;

use async_trait::async_trait;

use crate::errors::ClientError;
use crate::models::{
    ClientSummaryRow, MaterialReceipt, PoFulfillmentRow, PurchaseOrder, WarehouseReceipt,
};

/// Seam between page flows and the HTTP layer; tests substitute a scripted
/// implementation.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn client_names(&self) -> Result<Vec<String>, ClientError>;
    async fn warehouse_receipt_ids(&self) -> Result<Vec<String>, ClientError>;
    async fn purchase_order_ids(&self) -> Result<Vec<String>, ClientError>;
    async fn material_receipt_ids(&self) -> Result<Vec<String>, ClientError>;

    async fn warehouse_receipt(&self, id: &str) -> Result<WarehouseReceipt, ClientError>;
    async fn purchase_order(&self, id: &str) -> Result<PurchaseOrder, ClientError>;
    async fn material_receipt(&self, id: &str) -> Result<MaterialReceipt, ClientError>;

    async fn create_warehouse_receipt(&self, wr: &WarehouseReceipt) -> Result<(), ClientError>;
    async fn update_warehouse_receipt(&self, wr: &WarehouseReceipt) -> Result<(), ClientError>;
    async fn create_purchase_order(&self, po: &PurchaseOrder) -> Result<(), ClientError>;
    async fn update_purchase_order(&self, po: &PurchaseOrder) -> Result<(), ClientError>;
    async fn create_material_receipt(&self, mr: &MaterialReceipt) -> Result<(), ClientError>;
    async fn delete_material_receipt(&self, id: &str) -> Result<(), ClientError>;

    async fn photos(&self, wr_id: &str) -> Result<Vec<String>, ClientError>;
    async fn client_summary(&self, client: &str) -> Result<Vec<ClientSummaryRow>, ClientError>;
    async fn po_fulfillment(&self, po_id: &str) -> Result<Vec<PoFulfillmentRow>, ClientError>;
}
