// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{KeevaError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the configured kubeconfig, or the per-user default
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    info!("Loading client config");
    let kubeconfig = match &config.kubeconfig {
        Some(path) => read_kubeconfig_file(path).await?,
        None => Kubeconfig::read().map_err(|e| {
            KeevaError::ConnectionError(format!("Failed to load kubeconfig: {}", e))
        })?,
    };

    create_client_from_kubeconfig(kubeconfig).await
}

async fn read_kubeconfig_file(path: &Path) -> Result<Kubeconfig> {
    debug!("Reading kubeconfig from {}", path.display());
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        KeevaError::ConnectionError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_kubeconfig(&raw)
}

/// Parse a kubeconfig document
pub fn parse_kubeconfig(raw: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(raw)
        .map_err(|e| KeevaError::ConnectionError(format!("Failed to parse kubeconfig: {}", e)))
}

async fn create_client_from_kubeconfig(kubeconfig: Kubeconfig) -> Result<Client> {
    let client_config = kube::Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| KeevaError::ConnectionError(format!("Failed to create config: {}", e)))?;

    info!("Loading dynamic client for {}", client_config.cluster_url);
    Client::try_from(client_config)
        .map_err(|e| KeevaError::ConnectionError(format!("Failed to create client: {}", e)))
}
