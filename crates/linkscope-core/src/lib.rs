// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Linkscope backend.
//!
//! Provides the error type and the domain types shared by the storage and
//! gateway crates.

pub mod error;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LinkscopeError;
pub use types::{CrawlResult, NewCrawlResult, PendingUrl};
