// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities: a mocked Kubernetes API and an in-memory CRD store.

use crate::error::{BootstrapError, Result};
use crate::kubernetes::CrdStore;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::api::DynamicObject;
use kube::client::Body;
use kube::error::ErrorResponse;
use kube::{Client, ResourceExt};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request received by [`MockService`]
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.respond("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.respond("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the exact path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.respond("PUT", path, status, body)
    }

    fn respond(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Requests received so far, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "https://kubernetes.default.svc")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = std::result::Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<std::result::Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let (parts, body) = req.into_parts();
        let method = parts.method.to_string();
        let path = parts.uri.path().to_string();

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let bytes = body.collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                body: serde_json::from_slice(&bytes).ok(),
            });

            // Unmatched requests get a 404
            let (status, body) = response.unwrap_or_else(|| {
                (404, status_json(404, "NotFound", "not found"))
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock CustomResourceDefinition JSON response
pub fn crd_json(name: &str, resource_version: &str, labels: &[(&str, &str)]) -> String {
    let labels: BTreeMap<&str, &str> = labels.iter().copied().collect();
    serde_json::json!({
        "apiVersion": "apiextensions.k8s.io/v1",
        "kind": "CustomResourceDefinition",
        "metadata": {
            "name": name,
            "resourceVersion": resource_version,
            "labels": labels,
            "uid": "test-uid"
        },
        "spec": {
            "group": "example.dev"
        }
    })
    .to_string()
}

/// Create a Status failure response
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// An API server failure as returned by `KubeCrdStore`
pub fn api_error(code: u16, reason: &str, message: &str) -> BootstrapError {
    BootstrapError::Kube(kube::Error::Api(ErrorResponse {
        status: "Failure".to_string(),
        message: message.to_string(),
        reason: reason.to_string(),
        code,
    }))
}

/// In-memory [`CrdStore`] with API-server-like resource version semantics.
#[derive(Default)]
pub struct MemoryStore {
    objects: Mutex<BTreeMap<String, DynamicObject>>,
    last_version: AtomicU64,
    calls: AtomicUsize,
    failing: Mutex<HashSet<String>>,
    failing_writes: Mutex<HashSet<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing object, assigning it a fresh resource version
    pub fn with_object(self, mut obj: DynamicObject) -> Self {
        obj.metadata.resource_version = Some(self.next_version());
        self.objects.lock().unwrap().insert(obj.name_any(), obj);
        self
    }

    /// Make every operation on `name` fail
    pub fn failing_on(self, name: &str) -> Self {
        self.failing.lock().unwrap().insert(name.to_string());
        self
    }

    /// Make create and update of `name` fail while get keeps working
    pub fn failing_writes_on(self, name: &str) -> Self {
        self.failing_writes.lock().unwrap().insert(name.to_string());
        self
    }

    /// Simulate another writer modifying `name`, bumping its resource version
    pub fn touch(&self, name: &str) {
        let version = self.next_version();
        if let Some(obj) = self.objects.lock().unwrap().get_mut(name) {
            obj.metadata.resource_version = Some(version);
        }
    }

    pub fn object(&self, name: &str) -> Option<DynamicObject> {
        self.objects.lock().unwrap().get(name).cloned()
    }

    pub fn count(&self) -> usize {
        self.objects.lock().unwrap().len()
    }

    /// Number of get/create/update calls received
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn next_version(&self) -> String {
        (self.last_version.fetch_add(1, Ordering::SeqCst) + 1).to_string()
    }

    fn enter(&self, name: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.lock().unwrap().contains(name) {
            return Err(api_error(500, "InternalError", &format!("injected failure for {}", name)));
        }
        Ok(())
    }

    fn enter_write(&self, name: &str) -> Result<()> {
        self.enter(name)?;
        if self.failing_writes.lock().unwrap().contains(name) {
            return Err(api_error(500, "InternalError", &format!("injected write failure for {}", name)));
        }
        Ok(())
    }
}

impl CrdStore for MemoryStore {
    async fn get(&self, name: &str) -> Result<Option<DynamicObject>> {
        self.enter(name)?;
        Ok(self.object(name))
    }

    async fn create(&self, obj: &DynamicObject) -> Result<()> {
        let name = obj.name_any();
        self.enter_write(&name)?;

        let mut objects = self.objects.lock().unwrap();
        if objects.contains_key(&name) {
            return Err(BootstrapError::Conflict(name));
        }
        let mut stored = obj.clone();
        stored.metadata.resource_version = Some(self.next_version());
        objects.insert(name, stored);
        Ok(())
    }

    async fn update(&self, obj: &DynamicObject) -> Result<()> {
        let name = obj.name_any();
        self.enter_write(&name)?;

        let mut objects = self.objects.lock().unwrap();
        let Some(current) = objects.get(&name) else {
            return Err(api_error(404, "NotFound", &format!("{} not found", name)));
        };
        if current.resource_version() != obj.resource_version() {
            return Err(BootstrapError::Conflict(name));
        }
        let mut stored = obj.clone();
        stored.metadata.resource_version = Some(self.next_version());
        objects.insert(name, stored);
        Ok(())
    }
}
