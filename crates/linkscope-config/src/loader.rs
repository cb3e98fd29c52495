// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./linkscope.toml` > `~/.config/linkscope/linkscope.toml`
//! > `/etc/linkscope/linkscope.toml` with environment variable overrides via
//! `LINKSCOPE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::LinkscopeConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/linkscope/linkscope.toml` (system-wide)
/// 3. `~/.config/linkscope/linkscope.toml` (user XDG config)
/// 4. `./linkscope.toml` (local directory)
/// 5. `LINKSCOPE_*` environment variables
pub fn load_config() -> Result<LinkscopeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LinkscopeConfig::default()))
        .merge(Toml::file("/etc/linkscope/linkscope.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("linkscope/linkscope.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("linkscope.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a specific TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<LinkscopeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LinkscopeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LinkscopeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LinkscopeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example,
/// `LINKSCOPE_STORAGE_DATABASE_PATH` must map to `storage.database_path`,
/// not `storage.database.path`.
fn env_provider() -> Env {
    Env::prefixed("LINKSCOPE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: LINKSCOPE_GATEWAY_API_KEY -> "gateway_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("service_", "service.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
