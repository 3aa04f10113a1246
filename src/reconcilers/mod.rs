// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Single-pass reconcilers converging desired objects onto the cluster.

pub mod crd;

pub use crd::{reconcile, Outcome};
