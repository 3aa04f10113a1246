// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sources of the CRD bundle and splitting it into documents.

pub mod split;

pub use split::split;

use crate::error::{BootstrapError, Result};
use std::path::PathBuf;
use tracing::debug;

static EMBEDDED_CRDS: &[u8] = include_bytes!("../../crds/bundle.yaml");

/// Supplies the raw multi-document bundle. Called once per run.
pub trait BundleProvider {
    fn load(&self) -> Result<Vec<u8>>;
}

/// The CRD bundle compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedBundle;

impl BundleProvider for EmbeddedBundle {
    fn load(&self) -> Result<Vec<u8>> {
        debug!("Using embedded CRD bundle ({} bytes)", EMBEDDED_CRDS.len());
        Ok(EMBEDDED_CRDS.to_vec())
    }
}

/// A bundle read from disk
#[derive(Debug, Clone)]
pub struct FileBundle {
    path: PathBuf,
}

impl FileBundle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BundleProvider for FileBundle {
    fn load(&self) -> Result<Vec<u8>> {
        debug!("Reading CRD bundle from {}", self.path.display());
        std::fs::read(&self.path).map_err(|e| {
            BootstrapError::Setup(format!(
                "Failed to read CRD bundle {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

/// A bundle held in memory
impl BundleProvider for &str {
    fn load(&self) -> Result<Vec<u8>> {
        Ok(self.as_bytes().to_vec())
    }
}
