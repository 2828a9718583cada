// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeevaError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to build client: {0}")]
    ConnectionError(String),

    #[error("Schema registration failed: {0}")]
    SchemaError(#[from] SchemaError),

    #[error("Document mapping failed: {0}")]
    MappingError(#[from] MappingError),

    #[error("Keevakind {name} not found")]
    NotFound { name: String },

    #[error("Keevakind {0} has no resourceVersion, it must be read before it is updated")]
    MissingResourceVersion(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Outcome of declaring the Keevakind type to the cluster
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Keevakind CRD already exists")]
    AlreadyExists,

    #[error("Unexpected error registering Keevakind CRD: {0}")]
    Unexpected(#[source] kube::Error),
}

/// Errors converting an untyped document into a `KeevaKind`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("missing field: {0}")]
    MissingField(String),

    #[error("invalid field: {0}")]
    InvalidField(String),
}

pub type Result<T> = std::result::Result<T, KeevaError>;

/// Returns true if the error is an API error with the reason `AlreadyExists`
pub fn is_already_exists(error: &kube::Error) -> bool {
    matches!(error, kube::Error::Api(response) if response.reason == "AlreadyExists")
}

/// Returns true if the error is an API error with status code 404
pub fn is_not_found(error: &kube::Error) -> bool {
    matches!(error, kube::Error::Api(response) if response.code == 404)
}
