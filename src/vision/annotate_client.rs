// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google Vision annotate client
//!
//! Thin reqwest wrapper around the `images:annotate` endpoint. The response
//! body is relayed as an opaque `serde_json::Value`; this client never
//! reshapes or validates the annotation result.

use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

// --- Vision API serde structs ---

#[derive(Serialize)]
struct AnnotateBatchRequest {
    requests: Vec<AnnotateImageRequest>,
}

#[derive(Serialize)]
struct AnnotateImageRequest {
    image: ImageContent,
    features: Vec<Feature>,
}

#[derive(Serialize)]
struct ImageContent {
    content: String,
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    feature_type: &'static str,
    #[serde(rename = "maxResults", skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

/// Fixed feature list: face detection capped at 5 results, label detection
/// capped at 10, safe-search uncapped.
fn annotation_features() -> Vec<Feature> {
    vec![
        Feature {
            feature_type: "FACE_DETECTION",
            max_results: Some(5),
        },
        Feature {
            feature_type: "LABEL_DETECTION",
            max_results: Some(10),
        },
        Feature {
            feature_type: "SAFE_SEARCH_DETECTION",
            max_results: None,
        },
    ]
}

/// Failure modes of the upstream call.
///
/// Callers pattern-match on these instead of sniffing strings; `Opaque` is
/// the fallback for failures that carry no structure.
#[derive(Debug, thiserror::Error)]
pub enum AnnotateError {
    #[error("request to vision service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("vision service returned status {status}")]
    UpstreamStatus {
        status: StatusCode,
        body: Option<serde_json::Value>,
    },
    #[error("{0}")]
    Opaque(String),
}

impl AnnotateError {
    /// Detail relayed to the caller: the upstream error body when the
    /// failure carried one, else the failure's message text.
    pub fn detail(&self) -> serde_json::Value {
        match self {
            AnnotateError::UpstreamStatus {
                body: Some(body), ..
            } => body.clone(),
            other => serde_json::Value::String(other.to_string()),
        }
    }
}

/// Client for the Google Vision `images:annotate` endpoint
pub struct AnnotateClient {
    client: Client,
    endpoint: String,
}

impl AnnotateClient {
    /// Create a new annotate client for the given endpoint
    pub fn new(endpoint: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!("Vision client configured: endpoint={}", endpoint);

        Ok(Self { client, endpoint })
    }

    /// Get the configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Annotate a base64-encoded image.
    ///
    /// The API key is passed as the `key` query parameter. The call is
    /// awaited to completion; no retries.
    pub async fn annotate(
        &self,
        api_key: &str,
        image_base64: &str,
    ) -> Result<serde_json::Value, AnnotateError> {
        let request = AnnotateBatchRequest {
            requests: vec![AnnotateImageRequest {
                image: ImageContent {
                    content: image_base64.to_string(),
                },
                features: annotation_features(),
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.json::<serde_json::Value>().await.ok();
            debug!("vision service returned {}: {:?}", status, body);
            return Err(AnnotateError::UpstreamStatus { status, body });
        }

        Ok(response.json().await?)
    }
}
