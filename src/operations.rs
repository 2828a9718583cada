// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Create, get and update of typed Keevakinds

use crate::error::{KeevaError, Result};
use crate::kubernetes::KeevaKindApi;
use crate::mapper::{from_document, to_document};
use crate::types::KeevaKind;
use tracing::{info, instrument};

/// Create a Keevakind and return it as stored, carrying its new resourceVersion
#[instrument(skip(api, keevakind), fields(name = %keevakind.name))]
pub async fn create(api: &KeevaKindApi, keevakind: &KeevaKind) -> Result<KeevaKind> {
    info!("Creating Keevakind {}", keevakind.name);
    let created = api.create(to_document(keevakind)).await?;
    Ok(from_document(&created, &keevakind.namespace)?)
}

/// Get a Keevakind by name. A missing object is [`KeevaError::NotFound`].
#[instrument(skip(api))]
pub async fn get(api: &KeevaKindApi, name: &str, namespace: &str) -> Result<KeevaKind> {
    info!("Getting Keevakind {}", name);
    let document = api.get(name).await?;
    Ok(from_document(&document, namespace)?)
}

/// Replace a Keevakind.
///
/// `keevakind.resource_version` must be the one most recently read; the API
/// server rejects stale versions with a conflict.
#[instrument(skip(api, keevakind), fields(name = %keevakind.name))]
pub async fn update(api: &KeevaKindApi, keevakind: &KeevaKind) -> Result<()> {
    if !keevakind.has_resource_version() {
        return Err(KeevaError::MissingResourceVersion(keevakind.name.clone()));
    }

    info!("Updating Keevakind {}", keevakind.name);
    api.update(to_document(keevakind)).await?;
    Ok(())
}
