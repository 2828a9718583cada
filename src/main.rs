// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use keevakind::config::Config;
use keevakind::kubernetes::create_client;
use keevakind::workflow::run;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, defaulting to info
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting keevakind");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, name_prefix={}",
        config.namespace, config.name_prefix
    );

    let client = create_client(&config)
        .await
        .context("Failed to create client")?;

    let report = run(client, &config).await?;
    match report.updated {
        Some(updated) => info!("Finished with Keevakind {}", updated),
        None => info!("Finished without updating Keevakind {}", report.created.name),
    }

    Ok(())
}
