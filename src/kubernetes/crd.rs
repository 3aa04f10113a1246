// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Untyped access to CustomResourceDefinition objects

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{
    api::{ApiResource, DynamicObject},
    Api, Client,
};

/// The API resource for cluster-scoped `CustomResourceDefinition`s
pub fn crd_api_resource() -> ApiResource {
    ApiResource::erase::<CustomResourceDefinition>(&())
}

/// An untyped API handle so bundle objects pass through without a fixed schema
pub fn crd_api(client: Client) -> Api<DynamicObject> {
    Api::all_with(client, &crd_api_resource())
}
