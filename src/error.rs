// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("Malformed CRD bundle: {0}")]
    MalformedBundle(String),

    #[error("Failed to decode document #{index}: {reason}")]
    Decode { index: usize, reason: String },

    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// The API server rejected a write with 409 (stale resource version or already exists)
    #[error("Resource version conflict for {0}")]
    Conflict(String),

    #[error("Setup failed: {0}")]
    Setup(String),

    #[error("Cancelled while processing {0}")]
    Cancelled(String),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
