// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Uniform response envelope returned to callers

use serde::{Deserialize, Serialize};

/// The `{ok, data|error}` wrapper every /analyze response is carried in.
///
/// Invariant: `ok == true` iff `data` is present and `error`/`details` are
/// absent, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub ok: bool,

    /// Upstream annotation result, relayed verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,

    /// Client-facing error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Upstream error body or failure message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// Success envelope wrapping the upstream body
    pub fn success(data: serde_json::Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    /// Failure envelope with an optional detail payload
    pub fn failure(error: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(error.into()),
            details,
        }
    }
}
