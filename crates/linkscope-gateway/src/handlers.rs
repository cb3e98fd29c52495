// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the Linkscope JSON API.
//!
//! Each handler maps to exactly one store operation and translates its
//! outcome into an HTTP status: caller errors to 400, store failures to
//! 500. Driver error text is never exposed to the client; it goes to the
//! structured log instead.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use linkscope_core::{LinkscopeError, NewCrawlResult};
use linkscope_storage::queries::{results, urls};

use crate::server::GatewayState;

/// Request body for POST /add-url.
#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    /// The address to queue for crawling.
    pub url: String,
}

/// Request body for POST /delete-urls and POST /delete-results.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    /// Ids to remove; order irrelevant, duplicates harmless.
    pub ids: Vec<i64>,
}

/// Success response body carrying a confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

fn message(text: &str) -> Response {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: text.to_string(),
        }),
    )
        .into_response()
}

fn bad_request(text: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: text.to_string(),
        }),
    )
        .into_response()
}

/// Map a store failure to an HTTP response.
///
/// Caller errors surface their own message with 400. Everything else is a
/// 500 with the generic `public` message; the underlying error is logged,
/// never returned.
fn store_error(err: LinkscopeError, public: &str) -> Response {
    match err {
        LinkscopeError::InvalidInput(error) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
        }
        other => {
            tracing::error!(error = %other, "store operation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: public.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /
///
/// Unauthenticated liveness confirmation; storage reachability was already
/// probed at startup.
pub async fn get_root() -> &'static str {
    "linkscope: database connected"
}

/// POST /add-url
pub async fn post_add_url(
    State(state): State<GatewayState>,
    body: Result<Json<UrlRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return bad_request("Invalid request");
    };
    match urls::insert_url(&state.db, &req.url).await {
        Ok(()) => message("URL saved"),
        Err(e) => store_error(e, "Failed to save URL"),
    }
}

/// GET /urls
pub async fn get_urls(State(state): State<GatewayState>) -> Response {
    match urls::list_urls(&state.db).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => store_error(e, "Failed to fetch URLs"),
    }
}

/// POST /delete-urls
pub async fn post_delete_urls(
    State(state): State<GatewayState>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return bad_request("Invalid request");
    };
    match urls::delete_urls(&state.db, &req.ids).await {
        Ok(()) => message("URLs deleted"),
        Err(e) => store_error(e, "Failed to delete URLs"),
    }
}

/// POST /add-result
pub async fn post_add_result(
    State(state): State<GatewayState>,
    body: Result<Json<NewCrawlResult>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return bad_request("Invalid request");
    };
    match results::insert_result(&state.db, &req).await {
        Ok(()) => message("Result saved"),
        Err(e) => store_error(e, "Failed to save result"),
    }
}

/// POST /delete-results
pub async fn post_delete_results(
    State(state): State<GatewayState>,
    body: Result<Json<DeleteRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(req)) = body else {
        return bad_request("Invalid request");
    };
    match results::delete_results(&state.db, &req.ids).await {
        Ok(()) => message("Results deleted"),
        Err(e) => store_error(e, "Failed to delete results"),
    }
}

/// GET /results
pub async fn get_results(State(state): State<GatewayState>) -> Response {
    match results::list_results(&state.db).await {
        Ok(rows) => (StatusCode::OK, Json(rows)).into_response(),
        Err(e) => store_error(e, "Failed to fetch results"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_request_deserializes() {
        let json = r#"{"url": "https://example.com"}"#;
        let req: UrlRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.url, "https://example.com");
    }

    #[test]
    fn url_request_rejects_missing_field() {
        let json = r#"{}"#;
        assert!(serde_json::from_str::<UrlRequest>(json).is_err());
    }

    #[test]
    fn delete_request_deserializes() {
        let json = r#"{"ids": [1, 2, 3]}"#;
        let req: DeleteRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.ids, vec![1, 2, 3]);
    }

    #[test]
    fn message_response_serializes() {
        let resp = MessageResponse {
            message: "URL saved".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"message":"URL saved"}"#);
    }

    #[test]
    fn error_response_serializes() {
        let resp = ErrorResponse {
            error: "Invalid request".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"error":"Invalid request"}"#);
    }
}
