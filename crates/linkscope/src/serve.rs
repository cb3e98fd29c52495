// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `linkscope serve` command implementation.
//!
//! Opens the shared database handle and serves the HTTP API. Storage is
//! opened before the listener: a process that cannot reach its database
//! must not serve requests.

use std::sync::Arc;

use linkscope_config::model::LinkscopeConfig;
use linkscope_core::LinkscopeError;
use linkscope_gateway::auth::AuthConfig;
use linkscope_gateway::server::{GatewayState, ServerConfig, start_server};
use linkscope_storage::Database;
use tracing::{error, info};

/// Runs the `linkscope serve` command.
///
/// Startup order: tracing, database open (fatal on failure), gateway serve.
/// Returns when SIGINT/SIGTERM stops the server.
pub async fn run_serve(config: LinkscopeConfig) -> Result<(), LinkscopeError> {
    init_tracing(&config.service.log_level);

    info!("starting linkscope serve");

    let db = Database::open(&config.storage.database_path, config.storage.wal_mode)
        .await
        .inspect_err(|e| {
            error!(
                error = %e,
                path = config.storage.database_path.as_str(),
                "failed to open database"
            );
        })?;
    info!(
        path = config.storage.database_path.as_str(),
        "database connected"
    );

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    let state = GatewayState {
        db: Arc::new(db),
        auth: AuthConfig {
            api_key: config.gateway.api_key.clone(),
        },
    };

    start_server(&server_config, state).await?;

    info!("linkscope serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "linkscope={log_level},linkscope_gateway={log_level},linkscope_storage={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
