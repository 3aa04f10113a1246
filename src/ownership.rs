// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::labels::MANAGED_BY;
use kube::api::DynamicObject;

/// Check if an external package manager (Helm, Argo, ...) owns this object.
///
/// Only the presence of the label matters, not its value.
pub fn is_externally_managed(obj: &DynamicObject) -> bool {
    obj.metadata
        .labels
        .as_ref()
        .is_some_and(|labels| labels.contains_key(MANAGED_BY))
}
