use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::{endpoints, Gateway};
use crate::config::AppConfig;
use crate::errors::ClientError;
use crate::models::{
    ClientSummaryRow, MaterialReceipt, PoFulfillmentRow, PurchaseOrder, WarehouseReceipt,
};
use crate::wire;

/// The production [`Gateway`]: `reqwest` against the configured base URL.
#[derive(Clone)]
pub struct RestGateway {
    http: reqwest::Client,
    base_url: String,
}

impl RestGateway {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, ClientError> {
        Self::new(
            &cfg.api_base_url,
            Duration::from_secs(cfg.request_timeout_secs),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a positional-array payload. Any non-2xx status or a body that is
    /// not a JSON array becomes a typed error; a 404 is `NotFound`.
    async fn get_rows(&self, path: &str) -> Result<Vec<Value>, ClientError> {
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Err(ClientError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }
        let body: Value = response.json().await?;
        debug!(%path, "decoded response body");
        match body {
            Value::Array(rows) => Ok(rows),
            other => Err(ClientError::MalformedPayload(format!(
                "expected a JSON array, got {}",
                type_name(&other)
            ))),
        }
    }

    async fn send_rows(
        &self,
        method: reqwest::Method,
        path: &str,
        rows: Vec<Value>,
    ) -> Result<(), ClientError> {
        let response = self
            .http
            .request(method, self.url(path))
            .json(&Value::Array(rows))
            .send()
            .await?;
        check_status(response.status())
    }

    async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(path)).send().await?;
        check_status(response.status())
    }
}

fn check_status(status: reqwest::StatusCode) -> Result<(), ClientError> {
    if status.as_u16() == 404 {
        return Err(ClientError::NotFound(status.to_string()));
    }
    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
        });
    }
    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl Gateway for RestGateway {
    #[instrument(skip(self))]
    async fn client_names(&self) -> Result<Vec<String>, ClientError> {
        Ok(wire::decode_id_list(&self.get_rows(endpoints::CLIENTS).await?))
    }

    #[instrument(skip(self))]
    async fn warehouse_receipt_ids(&self) -> Result<Vec<String>, ClientError> {
        Ok(wire::decode_id_list(
            &self.get_rows(endpoints::WAREHOUSE_RECEIPTS).await?,
        ))
    }

    #[instrument(skip(self))]
    async fn purchase_order_ids(&self) -> Result<Vec<String>, ClientError> {
        Ok(wire::decode_id_list(
            &self.get_rows(endpoints::PURCHASE_ORDERS).await?,
        ))
    }

    #[instrument(skip(self))]
    async fn material_receipt_ids(&self) -> Result<Vec<String>, ClientError> {
        Ok(wire::decode_id_list(
            &self.get_rows(endpoints::MATERIAL_RECEIPTS).await?,
        ))
    }

    #[instrument(skip(self))]
    async fn warehouse_receipt(&self, id: &str) -> Result<WarehouseReceipt, ClientError> {
        let rows = self.get_rows(&endpoints::warehouse_receipt(id)).await?;
        Ok(wire::decode_warehouse_receipt(&rows))
    }

    #[instrument(skip(self))]
    async fn purchase_order(&self, id: &str) -> Result<PurchaseOrder, ClientError> {
        let rows = self.get_rows(&endpoints::purchase_order(id)).await?;
        Ok(wire::decode_purchase_order(&rows))
    }

    #[instrument(skip(self))]
    async fn material_receipt(&self, id: &str) -> Result<MaterialReceipt, ClientError> {
        let rows = self.get_rows(&endpoints::material_receipt(id)).await?;
        Ok(wire::decode_material_receipt(&rows))
    }

    #[instrument(skip(self, wr), fields(id = %wr.wr_number))]
    async fn create_warehouse_receipt(&self, wr: &WarehouseReceipt) -> Result<(), ClientError> {
        self.send_rows(
            reqwest::Method::POST,
            endpoints::WAREHOUSE_RECEIPTS,
            wire::encode_warehouse_receipt(wr),
        )
        .await
    }

    #[instrument(skip(self, wr), fields(id = %wr.wr_number))]
    async fn update_warehouse_receipt(&self, wr: &WarehouseReceipt) -> Result<(), ClientError> {
        self.send_rows(
            reqwest::Method::PUT,
            &endpoints::warehouse_receipt(&wr.wr_number),
            wire::encode_warehouse_receipt(wr),
        )
        .await
    }

    #[instrument(skip(self, po), fields(id = %po.po_number))]
    async fn create_purchase_order(&self, po: &PurchaseOrder) -> Result<(), ClientError> {
        self.send_rows(
            reqwest::Method::POST,
            endpoints::PURCHASE_ORDERS,
            wire::encode_purchase_order(po),
        )
        .await
    }

    #[instrument(skip(self, po), fields(id = %po.po_number))]
    async fn update_purchase_order(&self, po: &PurchaseOrder) -> Result<(), ClientError> {
        self.send_rows(
            reqwest::Method::PUT,
            &endpoints::purchase_order(&po.po_number),
            wire::encode_purchase_order(po),
        )
        .await
    }

    #[instrument(skip(self, mr), fields(id = %mr.mr_number))]
    async fn create_material_receipt(&self, mr: &MaterialReceipt) -> Result<(), ClientError> {
        self.send_rows(
            reqwest::Method::POST,
            endpoints::MATERIAL_RECEIPTS,
            wire::encode_material_receipt(mr),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn delete_material_receipt(&self, id: &str) -> Result<(), ClientError> {
        self.delete(&endpoints::material_receipt(id)).await
    }

    #[instrument(skip(self))]
    async fn photos(&self, wr_id: &str) -> Result<Vec<String>, ClientError> {
        Ok(wire::decode_photo_urls(
            &self.get_rows(&endpoints::photos(wr_id)).await?,
        ))
    }

    #[instrument(skip(self))]
    async fn client_summary(&self, client: &str) -> Result<Vec<ClientSummaryRow>, ClientError> {
        Ok(wire::decode_client_summary(
            &self.get_rows(&endpoints::client_summary(client)).await?,
        ))
    }

    #[instrument(skip(self))]
    async fn po_fulfillment(&self, po_id: &str) -> Result<Vec<PoFulfillmentRow>, ClientError> {
        Ok(wire::decode_po_fulfillment(
            &self.get_rows(&endpoints::po_fulfillment(po_id)).await?,
        ))
    }
}
