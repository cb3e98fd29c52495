// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Linkscope backend.

use thiserror::Error;

/// The primary error type used across all Linkscope crates.
#[derive(Debug, Error)]
pub enum LinkscopeError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Caller-supplied input rejected before any statement ran
    /// (empty url, empty id set).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Storage backend errors (database open, statement failure, liveness probe).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Gateway errors (bind failure, server failure).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
