use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    response::Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::{error::AppError, models::*, qr_service, AppState};

pub async fn handle_home() -> &'static str {
    HOME_TEXT
}

pub async fn handle_generate_timestamp(
    State(state): State<Arc<AppState>>,
) -> Result<Json<QRResponse>, AppError> {
    let content = qr_service::timestamp_content(Utc::now());
    let response = qr_service::generate(state.encoder.as_ref(), content)?;
    Ok(Json(response))
}

pub async fn handle_generate_email(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<QRResponse>, AppError> {
    // Unreadable or unparsable bodies share the generation failure path
    let body = body?;
    let content = QRRequest::from_body(&body)?.content();
    let response = qr_service::generate(state.encoder.as_ref(), content)?;
    Ok(Json(response))
}
