// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Runtime configuration for the relay, read from the environment once at
//! startup and injected into the server state.

use std::env;

/// Default listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default Google Vision annotate endpoint
pub const DEFAULT_VISION_ENDPOINT: &str = "https://vision.googleapis.com/v1/images:annotate";

/// Maximum accepted JSON body size in bytes (base64 payloads are large)
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Relay configuration.
///
/// The API key is optional at startup: a missing key is reported per-request
/// as a server error rather than preventing the process from serving the
/// liveness endpoint.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Google Vision API key, passed to the upstream as a query parameter
    pub api_key: Option<String>,
    /// Upstream annotate endpoint, overridable for testing
    pub endpoint: String,
}

impl RelayConfig {
    /// Build the configuration from `PORT`, `GOOGLE_VISION_API_KEY` and
    /// `GOOGLE_VISION_ENDPOINT`.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let api_key = env::var("GOOGLE_VISION_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        let endpoint = env::var("GOOGLE_VISION_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_VISION_ENDPOINT.to_string());

        Self {
            port,
            api_key,
            endpoint,
        }
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key: None,
            endpoint: DEFAULT_VISION_ENDPOINT.to_string(),
        }
    }
}
