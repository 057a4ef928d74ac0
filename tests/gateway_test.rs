//! RestGateway against a stub HTTP backend: happy-path decode, typed failures
//! for every error class, and exact wire payloads on writes.

mod common;

use std::time::Duration;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use wms_client::client::{Gateway, RestGateway};
use wms_client::errors::ClientError;

async fn gateway(server: &MockServer) -> RestGateway {
    RestGateway::new(&server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn get_decodes_a_positional_receipt_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/warehouse-receipts/WR1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            ["WR1", "ClientA", "UPS", "1Z999", 1_700_000_000_000_i64, "Bob", "no", "", "n/a", "PO1"],
            [2],
            ["B1", "box", 10, 10, 10, "A1", 5],
            ["B2", "box", 20, 20, 20, "A2", 7]
        ])))
        .mount(&server)
        .await;

    let wr = gateway(&server).await.warehouse_receipt("WR1").await.unwrap();
    assert_eq!(wr.wr_number, "WR1");
    assert_eq!(wr.boxes.len(), 2);
    assert_eq!(wr.boxes[1].weight, dec!(7));
}

#[tokio::test]
async fn missing_id_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/warehouse-receipts/WR404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = gateway(&server).await.warehouse_receipt("WR404").await.unwrap_err();
    assert_matches!(err, ClientError::NotFound(_));
}

#[tokio::test]
async fn server_failure_is_a_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/purchase-orders/PO1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = gateway(&server).await.purchase_order("PO1").await.unwrap_err();
    assert_matches!(err, ClientError::Status { status: 500 });
}

#[tokio::test]
async fn non_array_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"clients": []})))
        .mount(&server)
        .await;

    let err = gateway(&server).await.client_names().await.unwrap_err();
    assert_matches!(err, ClientError::MalformedPayload(_));
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    // Port 9 is discard; nothing is listening in the test environment.
    let gw = RestGateway::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();
    let err = gw.client_names().await.unwrap_err();
    assert_matches!(err, ClientError::Network(_));
}

#[tokio::test]
async fn create_posts_the_exact_wire_payload() {
    let server = MockServer::start().await;
    let po = common::sample_purchase_order();
    Mock::given(method("POST"))
        .and(path("/purchase-orders"))
        .and(body_json(json!([
            ["PO1", "ClientA", "Plant 4", "Acme Supply", "Ground", ""],
            [1],
            [1, "PART-100", "Widget", 25, 3.5, 10]
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server).await.create_purchase_order(&po).await.unwrap();
}

#[tokio::test]
async fn delete_targets_the_id_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/material-receipts/WR1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    gateway(&server).await.delete_material_receipt("WR1").await.unwrap();
}

#[tokio::test]
async fn id_lists_decode_from_nested_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/warehouse-receipts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([["WR1"], ["WR2"]])))
        .mount(&server)
        .await;

    let ids = gateway(&server).await.warehouse_receipt_ids().await.unwrap();
    assert_eq!(ids, vec!["WR1", "WR2"]);
}

#[tokio::test]
async fn fulfillment_view_decodes_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/purchase-orders/PO1/fulfillment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            [1, "PART-100", "Widget", 25, 10]
        ])))
        .mount(&server)
        .await;

    let rows = gateway(&server).await.po_fulfillment("PO1").await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].outstanding(), dec!(15));
}
