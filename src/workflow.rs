// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The register, create, get, update, get sequence run by the binary

use crate::config::Config;
use crate::constants::defaults;
use crate::error::KeevaError;
use crate::kubernetes::{ensure_schema_registered, KeevaKindApi};
use crate::names::random_name;
use crate::operations;
use crate::types::{KeevaKind, KeevaKindSpec};
use anyhow::{Context, Result};
use kube::Client;
use tracing::{info, warn};

/// What each step of [`run`] observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub created: KeevaKind,
    /// `None` when the created object could not be found again
    pub retrieved: Option<KeevaKind>,
    /// `None` when the update was skipped
    pub updated: Option<KeevaKind>,
}

/// A fresh Keevakind with random name, group and image
pub fn new_keevakind(config: &Config) -> KeevaKind {
    KeevaKind::new(
        random_name(&config.name_prefix, defaults::SUFFIX_LEN),
        config.namespace.clone(),
        KeevaKindSpec {
            count: defaults::COUNT,
            group: random_name("Group-", defaults::SUFFIX_LEN),
            image: random_name("Image-", defaults::SUFFIX_LEN),
            port: defaults::PORT,
        },
    )
}

/// Register the CRD, then create, get, update and get again a single Keevakind.
///
/// Every failure is returned with context; only a missing object after create
/// is tolerated, in which case the update is skipped.
pub async fn run(client: Client, config: &Config) -> Result<RunReport> {
    ensure_schema_registered(&client)
        .await
        .context("Failed to create Keevakind CRD")?;

    let api = KeevaKindApi::new(client);
    run_with_keevakind(&api, new_keevakind(config), config).await
}

async fn run_with_keevakind(
    api: &KeevaKindApi,
    keevakind: KeevaKind,
    config: &Config,
) -> Result<RunReport> {
    let created = operations::create(api, &keevakind)
        .await
        .with_context(|| format!("Failed to create Keevakind {:?}", keevakind))?;

    let mut existing = match operations::get(api, &keevakind.name, &keevakind.namespace).await {
        Ok(existing) => existing,
        Err(KeevaError::NotFound { name }) => {
            warn!("Keevakind {} not found after create, skipping update", name);
            return Ok(RunReport {
                created,
                retrieved: None,
                updated: None,
            });
        }
        Err(e) => {
            return Err(e).with_context(|| {
                format!(
                    "Failed to Get Keevakind {} in namespace {}",
                    keevakind.name, keevakind.namespace
                )
            })
        }
    };
    info!("Retrieved Keevakind {}", existing);

    let retrieved = existing.clone();
    if config.skip_update {
        info!("Skipping update of Keevakind {}", existing.name);
        return Ok(RunReport {
            created,
            retrieved: Some(retrieved),
            updated: None,
        });
    }

    existing.spec.group = config.updated_group.clone();
    operations::update(api, &existing)
        .await
        .with_context(|| format!("Failed to update Keevakind {:?}", existing))?;

    let updated = operations::get(api, &existing.name, &existing.namespace)
        .await
        .with_context(|| format!("Failed to Get Keevakind {} after update", existing.name))?;
    info!("Retrieved Keevakind {}", updated);

    Ok(RunReport {
        created,
        retrieved: Some(retrieved),
        updated: Some(updated),
    })
}
