// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Linkscope JSON API.
//!
//! The gateway is stateless apart from the injected database handle: each
//! route maps to exactly one store operation, with the API-key middleware
//! in front of every route except the public root.

pub mod auth;
pub mod handlers;
pub mod server;
