// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;
use tracing::{error, warn};

use super::analyze::ResponseEnvelope;
use crate::vision::AnnotateError;

/// Client-facing message for server-side failures
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors surfaced by the HTTP API.
///
/// Every variant maps to a well-formed JSON envelope; no failure escapes as
/// a bare transport error.
#[derive(Debug)]
pub enum ApiError {
    /// The request body was not valid JSON of the expected shape
    InvalidBody(String),
    /// None of the accepted image fields were present
    MissingInput,
    /// The upstream credential is not configured in the environment
    Misconfigured,
    /// The outbound annotate call failed
    Upstream(AnnotateError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::MissingInput => StatusCode::BAD_REQUEST,
            ApiError::Misconfigured | ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the uniform response envelope
    pub fn to_envelope(&self) -> ResponseEnvelope {
        match self {
            ApiError::InvalidBody(reason) => ResponseEnvelope::failure(
                "Invalid JSON in request body",
                Some(serde_json::Value::String(reason.clone())),
            ),
            ApiError::MissingInput => ResponseEnvelope::failure(
                "Missing imageBase64/image_base64/image in request body",
                None,
            ),
            // Generic message; the variable name is logged, not leaked
            ApiError::Misconfigured => {
                ResponseEnvelope::failure("Server is not configured for image analysis", None)
            }
            ApiError::Upstream(err) => {
                ResponseEnvelope::failure(INTERNAL_ERROR_MESSAGE, Some(err.detail()))
            }
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidBody(reason) => write!(f, "invalid request body: {}", reason),
            ApiError::MissingInput => {
                write!(f, "Missing imageBase64/image_base64/image in request body")
            }
            ApiError::Misconfigured => write!(f, "vision API key not configured"),
            ApiError::Upstream(err) => write!(f, "upstream annotation failed: {}", err),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AnnotateError> for ApiError {
    fn from(err: AnnotateError) -> Self {
        ApiError::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::InvalidBody(_) | ApiError::MissingInput => {
                warn!("rejected analyze request: {}", self)
            }
            ApiError::Misconfigured => {
                error!("GOOGLE_VISION_API_KEY is not set; rejecting analyze request")
            }
            ApiError::Upstream(err) => error!("error in /analyze: {}", err.detail()),
        }

        (self.status_code(), Json(self.to_envelope())).into_response()
    }
}
