// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API-key authentication middleware for the gateway.
//!
//! Every protected route requires the `X-API-Key` header to match the
//! configured key byte-for-byte. The comparison is not constant-time and
//! there is no rate limiting; the single shared secret is the whole
//! authorization model.

use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::handlers::ErrorResponse;

/// Authentication configuration for the gateway.
#[derive(Clone)]
pub struct AuthConfig {
    /// Expected value of the `X-API-Key` header.
    pub api_key: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &"[redacted]")
            .finish()
    }
}

/// Middleware comparing the `X-API-Key` header against the configured key.
///
/// A mismatch or absent header short-circuits with 401 before the handler
/// runs; on match the request passes through unchanged.
pub async fn auth_middleware(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Response {
    let supplied = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    if supplied == Some(auth.api_key.as_str()) {
        return next.run(request).await;
    }

    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            error: "Invalid or missing API key".to_string(),
        }),
    )
        .into_response()
}
