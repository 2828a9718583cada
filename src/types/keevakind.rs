// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

/// A Keevakind custom resource as seen by this program.
///
/// Only the typed form ever reaches domain code; the untyped document form
/// lives in [`crate::mapper`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeevaKind {
    pub name: String,
    pub namespace: String,
    /// Optimistic concurrency token assigned by the API server.
    /// Must be carried forward unchanged from the last read to the next update.
    pub resource_version: Option<String>,
    pub spec: KeevaKindSpec,
    pub status: KeevaKindStatus,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeevaKindSpec {
    pub count: i32,
    pub group: String,
    pub image: String,
    pub port: i32,
}

/// Currently carries no fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeevaKindStatus {}

impl KeevaKind {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, spec: KeevaKindSpec) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            resource_version: None,
            spec,
            status: KeevaKindStatus::default(),
        }
    }

    /// True once the object has been read back from the API server
    pub fn has_resource_version(&self) -> bool {
        self.resource_version
            .as_deref()
            .is_some_and(|rv| !rv.is_empty())
    }
}

impl fmt::Display for KeevaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} (resourceVersion={}, count={}, group={}, image={}, port={})",
            self.namespace,
            self.name,
            self.resource_version.as_deref().unwrap_or("<none>"),
            self.spec.count,
            self.spec.group,
            self.spec.image,
            self.spec.port
        )
    }
}
