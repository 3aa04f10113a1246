// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! CRD reconciler - creates, updates or leaves alone one desired CRD.

use crate::error::{BootstrapError, Result};
use crate::kubernetes::CrdStore;
use crate::ownership::is_externally_managed;
use kube::{api::DynamicObject, ResourceExt};
use std::fmt;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// What reconciling a single CRD did to the cluster
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Created,
    Updated,
    /// Already on the cluster and owned by an external package manager
    SkippedManaged,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Created => write!(f, "created"),
            Outcome::Updated => write!(f, "updated"),
            Outcome::SkippedManaged => write!(f, "skipped (externally managed)"),
        }
    }
}

/// Converge `desired` onto the store with one attempt per store call.
///
/// Ownership is read from the live object, never from `desired`: a
/// managed-by label already on the cluster means someone else owns it.
pub async fn reconcile<S: CrdStore>(
    store: &S,
    mut desired: DynamicObject,
    cancel: &CancellationToken,
) -> Result<Outcome> {
    let name = desired.name_any();

    let Some(existing) = cancellable(cancel, &name, store.get(&name)).await? else {
        info!(crd = %name, "Creating CRD");
        cancellable(cancel, &name, store.create(&desired)).await?;
        return Ok(Outcome::Created);
    };

    // Updates are rejected without the live resource version
    desired.metadata.resource_version = existing.resource_version();

    if is_externally_managed(&existing) {
        info!(crd = %name, "CRD is managed externally, leaving it untouched");
        return Ok(Outcome::SkippedManaged);
    }

    info!(crd = %name, "Updating CRD");
    cancellable(cancel, &name, store.update(&desired)).await?;
    Ok(Outcome::Updated)
}

async fn cancellable<T>(
    cancel: &CancellationToken,
    name: &str,
    call: impl Future<Output = Result<T>>,
) -> Result<T> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(BootstrapError::Cancelled(name.to_string())),
        res = call => res,
    }
}
