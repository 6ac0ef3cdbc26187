// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upstream vision service integration
//!
//! Provides the Google Vision annotate client used by the `/analyze`
//! endpoint.

pub mod annotate_client;

pub use annotate_client::{AnnotateClient, AnnotateError};
