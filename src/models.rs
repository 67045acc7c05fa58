use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QRRequest {
    pub email: Option<String>,
}

impl QRRequest {
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// The text to encode. A missing email encodes the empty string.
    pub fn content(self) -> String {
        self.email.unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QRResponse {
    pub success: bool,
    pub qr_base64: String, // base64 encoded PNG
    pub qr_content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

pub const HOME_TEXT: &str =
    "QR Code Generator - Visit /generate_qr to create a QR code with current timestamp.";
