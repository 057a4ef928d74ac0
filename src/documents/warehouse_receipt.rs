use tracing::warn;

use crate::documents::layout::{DocWriter, CONTENT_W, MARGIN_X};
use crate::documents::qr::qr_png;
use crate::errors::ClientError;
use crate::models::{format_date, format_decimal, WarehouseReceipt};

const BOX_COLS: [f32; 7] = [0.12, 0.14, 0.12, 0.12, 0.12, 0.22, 0.16];
const BOX_HEADERS: [&str; 7] = ["Box", "Type", "Length", "Width", "Height", "Location", "Weight"];

/// Builds the printable warehouse receipt. The QR code encodes the receipt id
/// and degrades to plain text when rendering fails.
pub fn warehouse_receipt_pdf(wr: &WarehouseReceipt) -> Result<Vec<u8>, ClientError> {
    let mut doc = DocWriter::new("Warehouse Receipt")?;

    doc.text_bold(MARGIN_X, doc.y, 18.0, "Warehouse Receipt");
    doc.text(MARGIN_X, doc.y - 7.0, 11.0, &wr.wr_number);

    // QR of the record id in the top-right corner.
    let qr_x = MARGIN_X + CONTENT_W - 28.0;
    let qr_y = doc.y - 24.0;
    let qr_drawn = match qr_png(&wr.wr_number) {
        Ok(png) => doc.embed_png(&png, qr_x, qr_y, 28.0),
        Err(e) => {
            warn!(error = %e, "QR generation failed, using text fallback");
            false
        }
    };
    if !qr_drawn {
        doc.text(qr_x, qr_y + 14.0, 10.0, &wr.wr_number);
    }

    // Two-column header block.
    let mut y = doc.y - 16.0;
    let left = MARGIN_X;
    let right = MARGIN_X + CONTENT_W / 2.0;
    let pairs: [(&str, String); 8] = [
        ("Client", wr.client.clone()),
        ("Carrier", wr.carrier.clone()),
        ("Tracking #", wr.tracking_number.clone()),
        ("Received", format_date(&wr.received_at)),
        ("Received by", wr.received_by.clone()),
        (
            "Hazmat",
            if wr.hazmat {
                format!("yes ({})", wr.hazmat_code)
            } else {
                "no".to_string()
            },
        ),
        ("PO #", wr.po_number.clone()),
        ("Notes", wr.notes.clone()),
    ];
    for (i, (label, value)) in pairs.iter().enumerate() {
        let x = if i % 2 == 0 { left } else { right };
        doc.text_bold(x, y, 9.0, label);
        doc.text(x + 26.0, y, 9.0, value);
        if i % 2 == 1 {
            y -= 6.0;
        }
    }
    doc.y = y - 8.0;

    // Box table.
    doc.table_header(&BOX_COLS, &BOX_HEADERS, 10.0);
    for item in &wr.boxes {
        let cells = vec![
            item.number.clone(),
            item.box_type.clone(),
            format_decimal(&item.length),
            format_decimal(&item.width),
            format_decimal(&item.height),
            item.location.clone(),
            format_decimal(&item.weight),
        ];
        doc.table_row(&BOX_COLS, &BOX_HEADERS, &cells, 8.0);
    }

    doc.finish()
}
