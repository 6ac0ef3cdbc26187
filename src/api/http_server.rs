// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::analyze::analyze_handler;
use crate::config::{RelayConfig, MAX_BODY_BYTES};
use crate::vision::AnnotateClient;

/// Liveness string served on GET /
const LIVENESS_MESSAGE: &str = "OK: RealityCheck API is running";

/// Shared per-process state. Everything in here is immutable, so concurrent
/// requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub vision: Arc<AnnotateClient>,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Result<Self> {
        let vision = AnnotateClient::new(&config.endpoint)?;
        Ok(Self {
            config: Arc::new(config),
            vision: Arc::new(vision),
        })
    }
}

/// Build the relay router on top of the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Liveness check
        .route("/", get(liveness_handler))
        // Annotation relay endpoint
        .route("/analyze", post(analyze_handler))
        // Base64 image payloads are large
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn liveness_handler() -> &'static str {
    LIVENESS_MESSAGE
}

/// Bind the listen port and serve until shutdown
pub async fn start_server(config: RelayConfig) -> Result<()> {
    let port = config.port;
    let state = AppState::new(config)?;
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port).parse::<SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("RealityCheck API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
