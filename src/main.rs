// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use realitycheck_api::{api, config::RelayConfig, version};
use std::env;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting RealityCheck API...");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!();

    let config = RelayConfig::from_env();
    if config.api_key.is_none() {
        // Not a startup failure: the liveness endpoint still serves, and
        // /analyze reports the misconfiguration per-request
        warn!("GOOGLE_VISION_API_KEY is not set; /analyze will fail until it is configured");
    }

    api::start_server(config).await
}
