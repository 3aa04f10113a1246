// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Decoding bundle documents into schema-agnostic objects

use crate::constants::crd::KIND;
use crate::error::{BootstrapError, Result};
use kube::api::DynamicObject;

/// Parse one bundle document into a [`DynamicObject`].
///
/// Anything outside `apiVersion`, `kind` and `metadata` is kept opaque in
/// `data` and sent to the API server untouched. `index` is the position of
/// the document in the bundle and only used for error reporting.
pub fn decode(index: usize, document: &str) -> Result<DynamicObject> {
    let obj: DynamicObject =
        serde_yaml::from_str(document).map_err(|e| decode_error(index, e.to_string()))?;

    let kind = match obj.types.as_ref() {
        Some(types) if !types.api_version.is_empty() && !types.kind.is_empty() => &types.kind,
        _ => return Err(decode_error(index, "missing apiVersion or kind")),
    };

    // Everything is written to the CRD endpoint
    if kind != KIND {
        return Err(decode_error(
            index,
            format!("expected kind {}, found {}", KIND, kind),
        ));
    }

    match obj.metadata.name.as_deref() {
        Some(name) if !name.is_empty() => {}
        _ => return Err(decode_error(index, "missing metadata.name")),
    }

    Ok(obj)
}

fn decode_error(index: usize, reason: impl Into<String>) -> BootstrapError {
    BootstrapError::Decode {
        index,
        reason: reason.into(),
    }
}
