// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Program configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Namespace recorded on created Keevakinds and used when reading them back
    pub namespace: String,
    pub name_prefix: String,
    /// Group written to the Keevakind by the update step
    pub updated_group: String,
    /// Explicit kubeconfig path, otherwise `$KUBECONFIG` or `~/.kube/config`
    pub kubeconfig: Option<PathBuf>,
    pub skip_update: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            namespace: defaults::NAMESPACE.to_string(),
            name_prefix: defaults::NAME_PREFIX.to_string(),
            updated_group: defaults::UPDATED_GROUP.to_string(),
            kubeconfig: None,
            skip_update: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let skip_update = match lookup("KEEVA_SKIP_UPDATE") {
            Some(value) => value
                .parse::<bool>()
                .with_context(|| format!("KEEVA_SKIP_UPDATE must be true or false, got {:?}", value))?,
            None => defaults.skip_update,
        };

        Ok(Config {
            namespace: lookup("KEEVA_NAMESPACE").unwrap_or(defaults.namespace),
            name_prefix: lookup("KEEVA_NAME_PREFIX").unwrap_or(defaults.name_prefix),
            updated_group: lookup("KEEVA_UPDATED_GROUP").unwrap_or(defaults.updated_group),
            kubeconfig: lookup("KEEVA_KUBECONFIG").map(PathBuf::from),
            skip_update,
        })
    }
}
