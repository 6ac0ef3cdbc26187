// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze request types and input normalization

use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Data-URI header some client-side encoders prepend to base64 payloads.
/// Anchored at the start of the string.
const DATA_URI_PREFIX: &str = r"^data:image/[a-zA-Z0-9+]+;base64,";

fn data_uri_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATA_URI_PREFIX).expect("valid data-URI pattern"))
}

/// Strip a leading data-URI header if present, otherwise pass the value
/// through unchanged. Only the first, anchored occurrence is removed; the
/// literal prefix appearing elsewhere in the payload is untouched.
pub fn strip_data_uri_prefix(input: &str) -> Cow<'_, str> {
    data_uri_regex().replace(input, "")
}

/// Request body for POST /analyze.
///
/// The image payload is accepted under three field names; resolution checks
/// them in fixed priority order and the first non-empty value wins.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Primary field name
    #[serde(rename = "imageBase64", default)]
    pub image_base64: Option<String>,

    /// snake_case alias
    #[serde(rename = "image_base64", default)]
    pub image_base64_snake: Option<String>,

    /// Bare alias
    #[serde(default)]
    pub image: Option<String>,
}

impl AnalyzeRequest {
    /// Resolve the image payload: `imageBase64`, then `image_base64`, then
    /// `image`. Empty strings are treated as absent.
    pub fn resolved_image(&self) -> Option<&str> {
        [
            self.image_base64.as_deref(),
            self.image_base64_snake.as_deref(),
            self.image.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
    }
}
