// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client setup and the CRD object store.

pub mod client;
pub mod crd;
pub mod store;

pub use client::connect;
pub use crd::{crd_api, crd_api_resource};
pub use store::{CrdStore, KubeCrdStore};
