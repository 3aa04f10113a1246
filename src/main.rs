// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crd_bootstrap::bootstrap;
use crd_bootstrap::config::Config;
use crd_bootstrap::kubernetes::{connect, KubeCrdStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting CRD bootstrap");

    // Load configuration
    let config = Config::from_env()?;
    match &config.bundle_path {
        Some(path) => info!("Installing CRDs from {}", path.display()),
        None => info!("Installing embedded CRDs"),
    }

    // Create Kubernetes client
    let client = connect().await?;
    let store = KubeCrdStore::new(client);

    // Abort in-flight API calls on Ctrl+C
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling CRD bootstrap");
            trigger.cancel();
        }
    });

    let provider = config.bundle_provider();
    let report = bootstrap::run(&*provider, &store, &cancel).await?;

    if let Err(e) = report.into_result() {
        error!("CRD bootstrap failed: {}", e);
        return Err(e.into());
    }

    info!("All CRDs installed");
    Ok(())
}
