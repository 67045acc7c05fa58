use base64::{engine::general_purpose::STANDARD as B64, Engine};
use chrono::{DateTime, Utc};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, Luma};
use qrcode::QrCode;

use crate::{error::QrError, models::QRResponse};

/// Turns text into PNG bytes. The handlers only see this trait, so tests can
/// swap in an encoder that fails.
pub trait QrEncoder: Send + Sync {
    fn encode_png(&self, content: &str) -> Result<Vec<u8>, QrError>;
}

/// Library defaults: smallest fitting version, error correction M, quiet zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngQrEncoder;

impl QrEncoder for PngQrEncoder {
    fn encode_png(&self, content: &str) -> Result<Vec<u8>, QrError> {
        // Generate QR code
        let code = QrCode::new(content.as_bytes())?;
        let image = code.render::<Luma<u8>>().build();

        // Convert to PNG bytes
        let mut png_data = Vec::new();
        PngEncoder::new(&mut png_data).write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::L8,
        )?;

        Ok(png_data)
    }
}

/// Naive UTC ISO-8601; the fraction is omitted on whole seconds.
pub fn timestamp_content(now: DateTime<Utc>) -> String {
    let stamp = if now.timestamp_subsec_micros() == 0 {
        now.format("%Y-%m-%dT%H:%M:%S")
    } else {
        now.format("%Y-%m-%dT%H:%M:%S%.6f")
    };
    format!("User QR @ {}", stamp)
}

pub fn generate(encoder: &dyn QrEncoder, content: String) -> Result<QRResponse, QrError> {
    tracing::debug!(len = content.len(), "generating QR code");
    let png_data = encoder.encode_png(&content)?;

    Ok(QRResponse {
        success: true,
        qr_base64: B64.encode(png_data),
        qr_content: content,
    })
}
