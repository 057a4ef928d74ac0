use tracing::warn;

use crate::documents::layout::{DocWriter, CONTENT_W, MARGIN_X};
use crate::documents::qr::qr_png;
use crate::errors::ClientError;
use crate::models::{format_decimal, MaterialReceipt};

const LINE_COLS: [f32; 4] = [0.28, 0.24, 0.24, 0.24];
const LINE_HEADERS: [&str; 4] = ["WR #", "Qty received", "Box", "PO line"];

pub fn material_receipt_pdf(mr: &MaterialReceipt) -> Result<Vec<u8>, ClientError> {
    let mut doc = DocWriter::new("Material Receipt")?;

    doc.text_bold(MARGIN_X, doc.y, 18.0, "Material Receipt");
    doc.text(MARGIN_X, doc.y - 7.0, 11.0, &mr.mr_number);

    let qr_x = MARGIN_X + CONTENT_W - 28.0;
    let qr_y = doc.y - 24.0;
    let qr_drawn = match qr_png(&mr.mr_number) {
        Ok(png) => doc.embed_png(&png, qr_x, qr_y, 28.0),
        Err(e) => {
            warn!(error = %e, "QR generation failed, using text fallback");
            false
        }
    };
    if !qr_drawn {
        doc.text(qr_x, qr_y + 14.0, 10.0, &mr.mr_number);
    }

    let mut y = doc.y - 16.0;
    doc.text_bold(MARGIN_X, y, 9.0, "Entered by");
    doc.text(MARGIN_X + 26.0, y, 9.0, &mr.entered_by);
    y -= 6.0;
    doc.text_bold(MARGIN_X, y, 9.0, "Notes");
    doc.text(MARGIN_X + 26.0, y, 9.0, &mr.notes);
    doc.y = y - 10.0;

    doc.table_header(&LINE_COLS, &LINE_HEADERS, 10.0);
    for line in &mr.lines {
        let cells = vec![
            line.wr_number.clone(),
            format_decimal(&line.quantity_received),
            line.box_number.clone(),
            line.po_line_number.to_string(),
        ];
        doc.table_row(&LINE_COLS, &LINE_HEADERS, &cells, 8.0);
    }

    doc.finish()
}
