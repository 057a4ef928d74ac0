//! Page flow behavior: multi-pass joins without rollback, cleared state and
//! single notification on a search miss, and validation blocking the gateway.

mod common;

use common::{sample_purchase_order, sample_receipt, ScriptedGateway};

use wms_client::flows::{
    delete_material_receipt, search_purchase_order, search_receipt, submit_warehouse_receipt,
    PoView, ReceiptView, SubmitMode, SubmitResult,
};
use wms_client::forms::{BoxField, WarehouseReceiptForm};
use wms_client::models::PoFulfillmentRow;
use wms_client::notify::{NotificationKind, RecordingNotifier};

const BUCKET: &str = "photos.example.com";

fn scripted_with_wr1() -> ScriptedGateway {
    let mut gw = ScriptedGateway::new();
    gw.receipts.insert("WR1".to_string(), sample_receipt());
    gw.purchase_orders
        .insert("PO1".to_string(), sample_purchase_order());
    gw.fulfillment.insert(
        "PO1".to_string(),
        vec![PoFulfillmentRow {
            line_number: 1,
            part_id: "PART-100".to_string(),
            description: "Widget".to_string(),
            quantity_ordered: rust_decimal_macros::dec!(25),
            quantity_received: rust_decimal_macros::dec!(10),
        }],
    );
    gw.photos.insert(
        "WR1".to_string(),
        vec![
            "https://photos.example.com/wr1/1.jpg".to_string(),
            "https://elsewhere.example.net/wr1/2.jpg".to_string(),
        ],
    );
    gw
}

#[tokio::test]
async fn three_pass_view_loads_receipt_po_and_fulfillment() {
    let gw = scripted_with_wr1();
    let notifier = RecordingNotifier::new();
    let mut view = ReceiptView::default();

    search_receipt(&gw, &notifier, BUCKET, &mut view, "WR1").await;

    assert_eq!(view.receipt.as_ref().unwrap().wr_number, "WR1");
    assert_eq!(view.purchase_order.as_ref().unwrap().po_number, "PO1");
    assert_eq!(view.fulfillment.len(), 1);
    assert_eq!(notifier.count(), 0);
    // Only the allow-listed bucket's photo survives.
    assert_eq!(view.photos, vec!["https://photos.example.com/wr1/1.jpg"]);
}

#[tokio::test]
async fn search_miss_clears_state_and_notifies_exactly_once() {
    let gw = scripted_with_wr1();
    let notifier = RecordingNotifier::new();
    let mut view = ReceiptView::default();

    search_receipt(&gw, &notifier, BUCKET, &mut view, "WR1").await;
    assert!(view.receipt.is_some());

    search_receipt(&gw, &notifier, BUCKET, &mut view, "WR999").await;

    assert!(view.receipt.is_none());
    assert!(view.purchase_order.is_none());
    assert!(view.fulfillment.is_empty());
    assert!(view.photos.is_empty());
    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, NotificationKind::NotFound);
}

#[tokio::test]
async fn failed_second_pass_keeps_first_pass_data_visible() {
    let mut gw = scripted_with_wr1();
    gw.fail_purchase_order = true;
    let notifier = RecordingNotifier::new();
    let mut view = ReceiptView::default();

    search_receipt(&gw, &notifier, BUCKET, &mut view, "WR1").await;

    // No rollback: the receipt stays, the dependent slices stay empty.
    assert!(view.receipt.is_some());
    assert!(view.purchase_order.is_none());
    assert!(view.fulfillment.is_empty());
    assert_eq!(notifier.count(), 1);
    assert_eq!(notifier.events()[0].0, NotificationKind::Server);
}

#[tokio::test]
async fn failed_third_pass_keeps_the_purchase_order() {
    let mut gw = scripted_with_wr1();
    gw.fail_fulfillment = true;
    let notifier = RecordingNotifier::new();
    let mut view = ReceiptView::default();

    search_receipt(&gw, &notifier, BUCKET, &mut view, "WR1").await;

    assert!(view.receipt.is_some());
    assert!(view.purchase_order.is_some());
    assert!(view.fulfillment.is_empty());
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn po_view_loads_order_and_fulfillment() {
    let gw = scripted_with_wr1();
    let notifier = RecordingNotifier::new();
    let mut view = PoView::default();

    search_purchase_order(&gw, &notifier, &mut view, "PO1").await;

    assert!(view.purchase_order.is_some());
    assert_eq!(view.fulfillment.len(), 1);
    assert_eq!(notifier.count(), 0);
}

#[tokio::test]
async fn client_summary_follows_the_session_context() {
    use wms_client::flows::load_client_summary;
    use wms_client::models::ClientSummaryRow;
    use wms_client::session::SessionContext;

    let mut gw = ScriptedGateway::new();
    gw.summaries.insert(
        "ClientA".to_string(),
        vec![ClientSummaryRow {
            wr_number: "WR1".to_string(),
            ..ClientSummaryRow::default()
        }],
    );
    let notifier = RecordingNotifier::new();

    let session = SessionContext::client("alice", "ClientA");
    let rows = load_client_summary(&gw, &notifier, &session).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(notifier.count(), 0);

    // An employee with no client picked gets one validation notification.
    let employee = SessionContext::employee("bob");
    let rows = load_client_summary(&gw, &notifier, &employee).await;
    assert!(rows.is_empty());
    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, NotificationKind::Validation);

    // Picking a client on the page makes the same session load its rows.
    let picked = employee.with_client("ClientA");
    let rows = load_client_summary(&gw, &notifier, &picked).await;
    assert_eq!(rows.len(), 1);
    assert_eq!(notifier.count(), 1);
}

#[tokio::test]
async fn invalid_form_never_reaches_the_gateway() {
    let gw = ScriptedGateway::new();
    let notifier = RecordingNotifier::new();
    let form = WarehouseReceiptForm::new(); // everything blank

    let result = submit_warehouse_receipt(&gw, &notifier, &form, SubmitMode::Create, None).await;

    let SubmitResult::Invalid(errors) = result else {
        panic!("expected a validation failure");
    };
    assert!(errors.contains_key("carrier"));
    assert!(gw.calls().is_empty());
    let events = notifier.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, NotificationKind::Validation);
}

#[tokio::test]
async fn valid_submit_saves_and_writes_the_document() {
    let gw = ScriptedGateway::new();
    let notifier = RecordingNotifier::new();
    let dir = tempfile::tempdir().unwrap();

    let mut form = WarehouseReceiptForm::new();
    form.wr_number = "WR1".to_string();
    form.client = "ClientA".to_string();
    form.carrier = "UPS".to_string();
    form.tracking_number = "1Z999".to_string();
    form.received_by = "Bob".to_string();
    form.edit_cell(0, BoxField::Number, "B1");
    form.edit_cell(0, BoxField::BoxType, "box");
    form.edit_cell(0, BoxField::Location, "A1");
    form.edit_cell(0, BoxField::Weight, "5");

    let result =
        submit_warehouse_receipt(&gw, &notifier, &form, SubmitMode::Create, Some(dir.path())).await;

    assert!(result.is_saved());
    assert_eq!(gw.calls(), vec!["create_warehouse_receipt:WR1"]);
    assert_eq!(notifier.count(), 0);
    let pdf = std::fs::read(dir.path().join("warehouse_receipt_WR1.pdf")).unwrap();
    assert!(pdf.starts_with(b"%PDF"));
}

#[tokio::test]
async fn failed_save_notifies_and_skips_the_document() {
    let mut gw = ScriptedGateway::new();
    gw.fail_writes = true;
    let notifier = RecordingNotifier::new();
    let dir = tempfile::tempdir().unwrap();

    let mut form = WarehouseReceiptForm::new();
    form.wr_number = "WR1".to_string();
    form.client = "ClientA".to_string();
    form.carrier = "UPS".to_string();
    form.tracking_number = "1Z999".to_string();
    form.received_by = "Bob".to_string();
    form.edit_cell(0, BoxField::Number, "B1");
    form.edit_cell(0, BoxField::BoxType, "box");
    form.edit_cell(0, BoxField::Location, "A1");
    form.edit_cell(0, BoxField::Weight, "5");

    let result =
        submit_warehouse_receipt(&gw, &notifier, &form, SubmitMode::Create, Some(dir.path())).await;

    assert!(matches!(result, SubmitResult::Failed));
    assert_eq!(notifier.count(), 1);
    assert!(!dir.path().join("warehouse_receipt_WR1.pdf").exists());
}

#[tokio::test]
async fn delete_reports_backend_rejection() {
    let mut gw = ScriptedGateway::new();
    gw.fail_writes = true;
    let notifier = RecordingNotifier::new();

    assert!(!delete_material_receipt(&gw, &notifier, "WR1").await);
    assert_eq!(notifier.count(), 1);

    let gw_ok = ScriptedGateway::new();
    assert!(delete_material_receipt(&gw_ok, &notifier, "WR1").await);
}
