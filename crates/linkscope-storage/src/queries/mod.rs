// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed store operations for the two persisted collections.

pub mod results;
pub mod urls;
