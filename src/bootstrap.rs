// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Drives one bootstrap run: load the bundle, split it, then decode and
//! reconcile every document in bundle order.

use crate::bundle::{split, BundleProvider};
use crate::error::Result;
use crate::kubernetes::CrdStore;
use crate::reconcilers::{reconcile, Outcome};
use crate::resource::decode;
use kube::ResourceExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Result of processing one bundle document
#[derive(Debug)]
pub struct Entry {
    /// Position in the bundle
    pub index: usize,
    /// `None` when the document could not be decoded
    pub name: Option<String>,
    pub result: Result<Outcome>,
}

/// Per-document results of a run
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    fn record(&mut self, index: usize, name: Option<String>, result: Result<Outcome>) {
        self.entries.push(Entry {
            index,
            name,
            result,
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of documents that ended with `outcome`
    pub fn count(&self, outcome: Outcome) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.result, Ok(o) if o == outcome))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.entries.iter().filter(|e| e.result.is_err()).count()
    }

    /// Reduce to a single result; the last recorded error wins.
    pub fn into_result(self) -> Result<()> {
        match self.entries.into_iter().rev().find_map(|e| e.result.err()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Install every CRD in the bundle, continuing past per-document failures.
///
/// Only a bundle that cannot be loaded or split aborts the run. Everything
/// else is recorded in the returned [`Report`].
pub async fn run<S: CrdStore>(
    provider: &dyn BundleProvider,
    store: &S,
    cancel: &CancellationToken,
) -> Result<Report> {
    let bundle = provider.load().inspect_err(|e| {
        error!("Failed to load CRD bundle: {}", e);
    })?;

    let documents = split(&bundle).inspect_err(|e| {
        error!("Failed to split CRD bundle: {}", e);
    })?;
    info!("Found {} documents in CRD bundle", documents.len());

    let mut report = Report::default();
    for (index, document) in documents.iter().enumerate() {
        let desired = match decode(index, document) {
            Ok(obj) => obj,
            Err(e) => {
                warn!(document = index, "Skipping undecodable document: {}", e);
                report.record(index, None, Err(e));
                continue;
            }
        };

        let name = desired.name_any();
        info!(crd = %name, "Considering CRD");

        let result = reconcile(store, desired, cancel).await;
        match &result {
            Ok(outcome) => info!(crd = %name, %outcome, "CRD reconciled"),
            Err(e) => error!(crd = %name, "Failed to reconcile CRD: {}", e),
        }
        report.record(index, Some(name), result);
    }

    info!(
        created = report.count(Outcome::Created),
        updated = report.count(Outcome::Updated),
        skipped = report.count(Outcome::SkippedManaged),
        failed = report.failed(),
        "CRD bootstrap finished"
    );

    Ok(report)
}

/// [`run`] reduced to pass/fail
pub async fn install<S: CrdStore>(
    provider: &dyn BundleProvider,
    store: &S,
    cancel: &CancellationToken,
) -> Result<()> {
    run(provider, store, cancel).await?.into_result()
}
