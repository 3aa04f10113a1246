// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::bundle::{BundleProvider, EmbeddedBundle, FileBundle};
use crate::constants::bundle::BUNDLE_PATH_ENV;
use anyhow::{Context, Result};
use std::env::{self, VarError};
use std::path::PathBuf;

/// Bootstrap configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Bundle file to install instead of the compiled-in CRDs
    pub bundle_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_bundle_path_var(env::var(BUNDLE_PATH_ENV))
    }

    fn from_bundle_path_var(var: std::result::Result<String, VarError>) -> Result<Self> {
        let bundle_path = match var {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path.trim())),
            Ok(_) | Err(VarError::NotPresent) => None,
            Err(e) => {
                return Err(e).with_context(|| format!("{} is not valid unicode", BUNDLE_PATH_ENV))
            }
        };

        Ok(Config { bundle_path })
    }

    /// The bundle source selected by this configuration
    pub fn bundle_provider(&self) -> Box<dyn BundleProvider> {
        match &self.bundle_path {
            Some(path) => Box::new(FileBundle::new(path.clone())),
            None => Box::new(EmbeddedBundle),
        }
    }
}
