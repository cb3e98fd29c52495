// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Linkscope HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the gateway.

use std::sync::Arc;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use linkscope_core::LinkscopeError;
use linkscope_storage::Database;
use tower_http::cors::CorsLayer;

use crate::auth::{AuthConfig, auth_middleware};
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    /// Shared database handle, injected at startup.
    pub db: Arc<Database>,
    /// Authentication configuration.
    pub auth: AuthConfig,
}

/// Gateway server configuration (mirrors GatewayConfig from linkscope-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the application router.
///
/// The root route is public; every other route sits behind the API-key
/// middleware. CORS is permissive by design: the companion frontend is
/// hosted separately.
pub fn build_router(state: GatewayState) -> Router {
    let auth_state = state.auth.clone();

    // Unauthenticated root route (liveness confirmation).
    let public_routes = Router::new().route("/", get(handlers::get_root));

    // Routes requiring the API key.
    let api_routes = Router::new()
        .route("/add-url", post(handlers::post_add_url))
        .route("/urls", get(handlers::get_urls))
        .route("/delete-urls", post(handlers::post_delete_urls))
        .route("/add-result", post(handlers::post_add_result))
        .route("/delete-results", post(handlers::post_delete_results))
        .route("/results", get(handlers::get_results))
        .route_layer(axum_middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server and serve until SIGINT or SIGTERM.
pub async fn start_server(config: &ServerConfig, state: GatewayState) -> Result<(), LinkscopeError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| LinkscopeError::Gateway {
                message: format!("failed to bind gateway to {addr}: {e}"),
                source: Some(Box::new(e)),
            })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| LinkscopeError::Gateway {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}

/// Resolve when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_debug() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("127.0.0.1"));
        assert!(debug.contains("8080"));
    }
}
