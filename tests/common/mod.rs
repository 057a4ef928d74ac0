//! Shared test fixtures: a scripted in-memory gateway and sample records.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use wms_client::client::Gateway;
use wms_client::errors::ClientError;
use wms_client::models::{
    BoxItem, ClientSummaryRow, MaterialReceipt, PoFulfillmentRow, PurchaseOrder, WarehouseReceipt,
};

/// In-memory gateway scripted per test: canned records, optional pass
/// failures and a log of every call made.
#[derive(Default)]
pub struct ScriptedGateway {
    pub receipts: HashMap<String, WarehouseReceipt>,
    pub purchase_orders: HashMap<String, PurchaseOrder>,
    pub material_receipts: HashMap<String, MaterialReceipt>,
    pub photos: HashMap<String, Vec<String>>,
    pub fulfillment: HashMap<String, Vec<PoFulfillmentRow>>,
    pub summaries: HashMap<String, Vec<ClientSummaryRow>>,
    pub fail_purchase_order: bool,
    pub fail_fulfillment: bool,
    pub fail_photos: bool,
    pub fail_writes: bool,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn server_error() -> ClientError {
        ClientError::Status { status: 500 }
    }
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn client_names(&self) -> Result<Vec<String>, ClientError> {
        self.record("client_names");
        Ok(self.summaries.keys().cloned().collect())
    }

    async fn warehouse_receipt_ids(&self) -> Result<Vec<String>, ClientError> {
        self.record("warehouse_receipt_ids");
        Ok(self.receipts.keys().cloned().collect())
    }

    async fn purchase_order_ids(&self) -> Result<Vec<String>, ClientError> {
        self.record("purchase_order_ids");
        Ok(self.purchase_orders.keys().cloned().collect())
    }

    async fn material_receipt_ids(&self) -> Result<Vec<String>, ClientError> {
        self.record("material_receipt_ids");
        Ok(self.material_receipts.keys().cloned().collect())
    }

    async fn warehouse_receipt(&self, id: &str) -> Result<WarehouseReceipt, ClientError> {
        self.record(&format!("warehouse_receipt:{}", id));
        self.receipts
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn purchase_order(&self, id: &str) -> Result<PurchaseOrder, ClientError> {
        self.record(&format!("purchase_order:{}", id));
        if self.fail_purchase_order {
            return Err(Self::server_error());
        }
        self.purchase_orders
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn material_receipt(&self, id: &str) -> Result<MaterialReceipt, ClientError> {
        self.record(&format!("material_receipt:{}", id));
        self.material_receipts
            .get(id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }

    async fn create_warehouse_receipt(&self, wr: &WarehouseReceipt) -> Result<(), ClientError> {
        self.record(&format!("create_warehouse_receipt:{}", wr.wr_number));
        if self.fail_writes {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn update_warehouse_receipt(&self, wr: &WarehouseReceipt) -> Result<(), ClientError> {
        self.record(&format!("update_warehouse_receipt:{}", wr.wr_number));
        if self.fail_writes {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn create_purchase_order(&self, po: &PurchaseOrder) -> Result<(), ClientError> {
        self.record(&format!("create_purchase_order:{}", po.po_number));
        if self.fail_writes {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn update_purchase_order(&self, po: &PurchaseOrder) -> Result<(), ClientError> {
        self.record(&format!("update_purchase_order:{}", po.po_number));
        if self.fail_writes {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn create_material_receipt(&self, mr: &MaterialReceipt) -> Result<(), ClientError> {
        self.record(&format!("create_material_receipt:{}", mr.mr_number));
        if self.fail_writes {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn delete_material_receipt(&self, id: &str) -> Result<(), ClientError> {
        self.record(&format!("delete_material_receipt:{}", id));
        if self.fail_writes {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn photos(&self, wr_id: &str) -> Result<Vec<String>, ClientError> {
        self.record(&format!("photos:{}", wr_id));
        if self.fail_photos {
            return Err(Self::server_error());
        }
        Ok(self.photos.get(wr_id).cloned().unwrap_or_default())
    }

    async fn client_summary(&self, client: &str) -> Result<Vec<ClientSummaryRow>, ClientError> {
        self.record(&format!("client_summary:{}", client));
        Ok(self.summaries.get(client).cloned().unwrap_or_default())
    }

    async fn po_fulfillment(&self, po_id: &str) -> Result<Vec<PoFulfillmentRow>, ClientError> {
        self.record(&format!("po_fulfillment:{}", po_id));
        if self.fail_fulfillment {
            return Err(Self::server_error());
        }
        Ok(self.fulfillment.get(po_id).cloned().unwrap_or_default())
    }
}

pub fn sample_receipt() -> WarehouseReceipt {
    WarehouseReceipt {
        wr_number: "WR1".to_string(),
        client: "ClientA".to_string(),
        carrier: "UPS".to_string(),
        tracking_number: "1Z999".to_string(),
        received_at: None,
        received_by: "Bob".to_string(),
        hazmat: false,
        hazmat_code: String::new(),
        notes: "n/a".to_string(),
        po_number: "PO1".to_string(),
        boxes: vec![
            BoxItem {
                number: "B1".to_string(),
                box_type: "box".to_string(),
                length: dec!(10),
                width: dec!(10),
                height: dec!(10),
                location: "A1".to_string(),
                weight: dec!(5),
            },
            BoxItem {
                number: "B2".to_string(),
                box_type: "box".to_string(),
                length: dec!(20),
                width: dec!(20),
                height: dec!(20),
                location: "A2".to_string(),
                weight: dec!(7),
            },
        ],
        photo_urls: Vec::new(),
    }
}

pub fn sample_purchase_order() -> PurchaseOrder {
    use wms_client::models::POLineItem;
    PurchaseOrder {
        po_number: "PO1".to_string(),
        client: "ClientA".to_string(),
        destination: "Plant 4".to_string(),
        vendor: "Acme Supply".to_string(),
        ship_via: "Ground".to_string(),
        notes: String::new(),
        lines: vec![POLineItem {
            line_number: 1,
            part_id: "PART-100".to_string(),
            description: "Widget".to_string(),
            quantity: dec!(25),
            unit_cost: dec!(3.50),
            quantity_received: dec!(10),
        }],
    }
}
