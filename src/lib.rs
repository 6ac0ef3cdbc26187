// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod version;
pub mod vision;

// Re-export main types
pub use api::{AnalyzeRequest, ApiError, ResponseEnvelope};
pub use config::RelayConfig;
pub use vision::{AnnotateClient, AnnotateError};
