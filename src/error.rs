use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Debug, Error)]
pub enum QrError {
    #[error("failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("failed to render PNG: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Any failure while building a QR response. Always surfaces as a 500.
#[derive(Debug)]
pub struct AppError(pub QrError);

impl<E: Into<QrError>> From<E> for AppError {
    fn from(err: E) -> Self {
        AppError(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("QR generation failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(self.0.to_string())),
        )
            .into_response()
    }
}
