// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Management cluster client creation

use crate::error::{BootstrapError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, info};

/// Create a client from the in-cluster environment or the local kubeconfig
pub async fn connect() -> Result<Client> {
    let config = KConfig::infer()
        .await
        .map_err(|e| BootstrapError::Setup(format!("Failed to infer config: {}", e)))?;
    debug!("Using cluster URL {}", config.cluster_url);

    let client = Client::try_from(config)
        .map_err(|e| BootstrapError::Setup(format!("Failed to create client: {}", e)))?;
    info!("Connected to Kubernetes cluster");

    Ok(client)
}
