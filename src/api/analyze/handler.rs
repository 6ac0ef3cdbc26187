// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze endpoint handler

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, Json};
use tracing::info;

use super::request::{strip_data_uri_prefix, AnalyzeRequest};
use super::response::ResponseEnvelope;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /analyze - Relay a base64-encoded image to the vision service
///
/// Resolves the image payload from one of the three accepted field names,
/// strips any leading data-URI header, forwards the image to the annotate
/// endpoint and relays the upstream response verbatim inside the envelope.
pub async fn analyze_handler(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<ResponseEnvelope>, ApiError> {
    // Unparseable bodies get the envelope too, not axum's plain-text reply
    let Json(request) = body.map_err(|rejection| ApiError::InvalidBody(rejection.body_text()))?;

    let image = request.resolved_image().ok_or(ApiError::MissingInput)?;
    let image = strip_data_uri_prefix(image);

    // Credential check happens before any outbound call
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(ApiError::Misconfigured)?;

    let data = state.vision.annotate(api_key, &image).await?;

    info!("finished serving annotation request");
    Ok(Json(ResponseEnvelope::success(data)))
}
