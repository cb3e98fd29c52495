// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model types for storage entities.
//!
//! The canonical types are defined in `linkscope-core::types` so the
//! gateway can serialize them directly. This module re-exports them for
//! convenience within the storage crate.

pub use linkscope_core::types::{CrawlResult, NewCrawlResult, PendingUrl};
