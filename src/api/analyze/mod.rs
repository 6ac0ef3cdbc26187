// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze API endpoint module
//!
//! Provides POST /analyze for relaying base64 images to the vision service.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_handler;
pub use request::AnalyzeRequest;
pub use response::ResponseEnvelope;
