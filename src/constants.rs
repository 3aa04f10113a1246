// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Kubernetes label keys consulted during reconciliation
pub mod labels {
    /// Present on resources owned by an external package manager (e.g. Helm)
    pub const MANAGED_BY: &str = "app.kubernetes.io/managed-by";
}

/// Bundle parsing and loading
pub mod bundle {
    /// Line separating documents in a multi-document YAML stream
    pub const DOCUMENT_SEPARATOR: &str = "---";
    /// Environment variable pointing at a bundle file overriding the embedded one
    pub const BUNDLE_PATH_ENV: &str = "CRD_BUNDLE_PATH";
}

/// API coordinates of CustomResourceDefinition objects
pub mod crd {
    pub const GROUP: &str = "apiextensions.k8s.io";
    pub const VERSION: &str = "v1";
    pub const KIND: &str = "CustomResourceDefinition";
}
