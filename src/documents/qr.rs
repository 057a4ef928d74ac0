use qrcode_generator::QrCodeEcc;

use crate::errors::ClientError;

const QR_PIXELS: usize = 256;

/// Renders the record id as a QR code PNG. Callers fall back to plain text in
/// the same position when this fails.
pub fn qr_png(id: &str) -> Result<Vec<u8>, ClientError> {
    qrcode_generator::to_png_to_vec(id, QrCodeEcc::Medium, QR_PIXELS)
        .map_err(|e| ClientError::Document(format!("QR generation failed: {}", e)))
}
