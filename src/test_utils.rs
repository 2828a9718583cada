// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Method, Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;
use tracing::debug;

pub const CRD_PATH: &str = "/apis/apiextensions.k8s.io/v1/customresourcedefinitions";
pub const KEEVAKIND_PATH: &str = "/apis/example.keeva.com/v1alpha1/keevakinds";

type ResponseFuture = std::pin::Pin<
    Box<dyn std::future::Future<Output = Result<Response<Body>, tower::BoxError>> + Send>,
>;

fn json_response(status: u16, body: String) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body.into_bytes()))
        .unwrap()
}

/// A mock HTTP service that returns predefined responses based on request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the exact path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    /// Method and path of every request received so far
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
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
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));
        let response = self.find_response(&method, &path);

        Box::pin(async move {
            Ok(match response {
                Some((status, body)) => json_response(status, body),
                // Default 404 for unmatched requests
                None => json_response(404, not_found_json("resource", &path)),
            })
        })
    }
}

/// A stateful stand-in for the API server, covering the CRD and Keevakind endpoints.
///
/// Objects get a fresh `resourceVersion` on every write. Duplicate creates fail
/// with `AlreadyExists`, updates carrying a stale `resourceVersion` fail with
/// `Conflict`. Keevakinds are cluster scoped, so `metadata.namespace` is dropped.
#[derive(Clone, Default)]
pub struct FakeApiServer {
    state: Arc<Mutex<FakeState>>,
}

#[derive(Default)]
struct FakeState {
    crds: HashMap<String, Value>,
    keevakinds: HashMap<String, Value>,
    last_resource_version: u64,
}

impl FakeApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    pub fn crd_names(&self) -> Vec<String> {
        self.state.lock().unwrap().crds.keys().cloned().collect()
    }

    /// The stored Keevakind, as the server would return it
    pub fn keevakind(&self, name: &str) -> Option<Value> {
        self.state.lock().unwrap().keevakinds.get(name).cloned()
    }

    /// Overwrite a stored Keevakind's spec, as another writer would
    pub fn modify_keevakind(&self, name: &str, spec: Value) {
        let mut state = self.state.lock().unwrap();
        let resource_version = state.next_resource_version();
        if let Some(object) = state.keevakinds.get_mut(name) {
            object["spec"] = spec;
            object["metadata"]["resourceVersion"] = Value::from(resource_version);
        }
    }
}

impl FakeState {
    fn next_resource_version(&mut self) -> String {
        self.last_resource_version += 1;
        (1000 + self.last_resource_version).to_string()
    }

    fn handle(&mut self, method: &Method, path: &str, body: &[u8]) -> (u16, String) {
        debug!("Fake API server handling {} {}", method, path);

        if path == CRD_PATH && *method == Method::POST {
            return match serde_json::from_slice::<Value>(body) {
                Ok(crd) => self.create_crd(crd),
                Err(e) => bad_request(&e.to_string()),
            };
        }

        let Some(rest) = path.strip_prefix(KEEVAKIND_PATH) else {
            return (404, not_found_json("path", path));
        };
        match (method, rest.strip_prefix('/')) {
            (&Method::POST, None) if rest.is_empty() => match serde_json::from_slice(body) {
                Ok(object) => self.create_keevakind(object),
                Err(e) => bad_request(&e.to_string()),
            },
            (&Method::GET, Some(name)) => match self.keevakinds.get(name) {
                Some(object) => (200, object.to_string()),
                None => (404, not_found_json("keevakinds.example.keeva.com", name)),
            },
            (&Method::PUT, Some(name)) => match serde_json::from_slice(body) {
                Ok(object) => self.replace_keevakind(name, object),
                Err(e) => bad_request(&e.to_string()),
            },
            _ => (404, not_found_json("path", path)),
        }
    }

    fn create_crd(&mut self, mut crd: Value) -> (u16, String) {
        let Some(name) = object_name(&crd) else {
            return bad_request("metadata.name is required");
        };
        if self.crds.contains_key(&name) {
            return (
                409,
                already_exists_json("customresourcedefinitions.apiextensions.k8s.io", &name),
            );
        }
        crd["metadata"]["resourceVersion"] = Value::from(self.next_resource_version());
        self.crds.insert(name, crd.clone());
        (201, crd.to_string())
    }

    fn create_keevakind(&mut self, mut object: Value) -> (u16, String) {
        let Some(name) = object_name(&object) else {
            return bad_request("metadata.name is required");
        };
        if self.keevakinds.contains_key(&name) {
            return (409, already_exists_json("keevakinds.example.keeva.com", &name));
        }
        let metadata = &mut object["metadata"];
        if let Some(metadata) = metadata.as_object_mut() {
            metadata.remove("namespace");
        }
        metadata["uid"] = Value::from(format!("uid-{}", name));
        metadata["resourceVersion"] = Value::from(self.next_resource_version());
        self.keevakinds.insert(name, object.clone());
        (201, object.to_string())
    }

    fn replace_keevakind(&mut self, name: &str, mut object: Value) -> (u16, String) {
        let Some(stored) = self.keevakinds.get(name) else {
            return (404, not_found_json("keevakinds.example.keeva.com", name));
        };
        let stored_rv = stored["metadata"]["resourceVersion"].clone();
        if object["metadata"]["resourceVersion"] != stored_rv {
            return (
                409,
                status_json(409, "Conflict", &format!(
                    "Operation cannot be fulfilled on keevakinds.example.keeva.com \"{}\": the object has been modified; please apply your changes to the latest version and try again",
                    name
                )),
            );
        }
        let uid = stored["metadata"]["uid"].clone();
        let metadata = &mut object["metadata"];
        if let Some(metadata) = metadata.as_object_mut() {
            metadata.remove("namespace");
        }
        metadata["uid"] = uid;
        metadata["resourceVersion"] = Value::from(self.next_resource_version());
        self.keevakinds.insert(name.to_string(), object.clone());
        (200, object.to_string())
    }
}

fn object_name(object: &Value) -> Option<String> {
    object["metadata"]["name"].as_str().map(str::to_string)
}

fn bad_request(message: &str) -> (u16, String) {
    (400, status_json(400, "BadRequest", message))
}

impl Service<Request<Body>> for FakeApiServer {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = ResponseFuture;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let state = self.state.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await?.to_bytes();
            let (status, body) = state
                .lock()
                .unwrap()
                .handle(&parts.method, parts.uri.path(), &body);
            Ok(json_response(status, body))
        })
    }
}

/// Create a Status failure response body
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}

/// Create a 409 already exists response
pub fn already_exists_json(resource: &str, name: &str) -> String {
    status_json(409, "AlreadyExists", &format!("{} \"{}\" already exists", resource, name))
}

/// A Keevakind as the API server returns it
pub fn keevakind_json(name: &str, resource_version: &str, group: &str) -> String {
    json!({
        "apiVersion": "example.keeva.com/v1alpha1",
        "kind": "Keevakind",
        "metadata": {
            "name": name,
            "resourceVersion": resource_version,
            "uid": "test-uid"
        },
        "spec": {
            "count": 14,
            "group": group,
            "image": "Image-x1y2z",
            "port": 8080
        }
    })
    .to_string()
}
