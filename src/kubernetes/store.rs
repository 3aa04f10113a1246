// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The object store CRDs are reconciled against

use crate::error::{BootstrapError, Result};
use crate::kubernetes::crd::crd_api;
use kube::{
    api::{DynamicObject, PostParams},
    Api, Client, ResourceExt,
};
use tracing::{debug, instrument};

/// Minimal get/create/update surface needed to converge CRDs.
///
/// `update` must reject an object whose resource version is not the current
/// one for that name.
#[allow(async_fn_in_trait)]
pub trait CrdStore {
    /// Fetch an object by name, `None` if it does not exist
    async fn get(&self, name: &str) -> Result<Option<DynamicObject>>;

    async fn create(&self, obj: &DynamicObject) -> Result<()>;

    async fn update(&self, obj: &DynamicObject) -> Result<()>;
}

/// CRD store backed by the Kubernetes API server
#[derive(Clone)]
pub struct KubeCrdStore {
    api: Api<DynamicObject>,
}

impl KubeCrdStore {
    pub fn new(client: Client) -> Self {
        Self {
            api: crd_api(client),
        }
    }
}

impl CrdStore for KubeCrdStore {
    #[instrument(skip(self))]
    async fn get(&self, name: &str) -> Result<Option<DynamicObject>> {
        let existing = self.api.get_opt(name).await?;
        debug!(found = existing.is_some(), "Fetched CRD");
        Ok(existing)
    }

    #[instrument(skip(self, obj), fields(crd = %obj.name_any()))]
    async fn create(&self, obj: &DynamicObject) -> Result<()> {
        let name = obj.name_any();
        self.api
            .create(&PostParams::default(), obj)
            .await
            .map_err(|e| conflict_or_kube(&name, e))?;
        Ok(())
    }

    // Replace rather than patch so the API server enforces the resource version
    #[instrument(skip(self, obj), fields(crd = %obj.name_any()))]
    async fn update(&self, obj: &DynamicObject) -> Result<()> {
        let name = obj.name_any();
        self.api
            .replace(&name, &PostParams::default(), obj)
            .await
            .map_err(|e| conflict_or_kube(&name, e))?;
        Ok(())
    }
}

fn conflict_or_kube(name: &str, err: kube::Error) -> BootstrapError {
    match err {
        kube::Error::Api(resp) if resp.code == 409 => BootstrapError::Conflict(name.to_string()),
        err => BootstrapError::Kube(err),
    }
}
