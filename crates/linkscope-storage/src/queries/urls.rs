// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pending-URL store operations: append, list, bulk remove.

use linkscope_core::LinkscopeError;
use rusqlite::params;

use crate::database::Database;
use crate::models::PendingUrl;

/// Insert a submitted URL.
///
/// The id is assigned by the store and not surfaced to the caller. An empty
/// url is a caller error; no row is written.
pub async fn insert_url(db: &Database, url: &str) -> Result<(), LinkscopeError> {
    if url.is_empty() {
        return Err(LinkscopeError::InvalidInput(
            "url must not be empty".to_string(),
        ));
    }
    let url = url.to_string();
    db.connection()
        .call(move |conn| {
            conn.execute("INSERT INTO urls (url) VALUES (?1)", params![url])?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all pending URLs, most recently submitted first (descending id).
///
/// A row that fails to decode is skipped rather than aborting the listing;
/// partial results are preferred over none.
pub async fn list_urls(db: &Database) -> Result<Vec<PendingUrl>, LinkscopeError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare("SELECT id, url FROM urls ORDER BY id DESC")?;
            let rows = stmt.query_map([], |row| {
                Ok(PendingUrl {
                    id: row.get(0)?,
                    url: row.get(1)?,
                })
            })?;
            let mut urls = Vec::new();
            for row in rows {
                match row {
                    Ok(url) => urls.push(url),
                    Err(e) => tracing::warn!(error = %e, "skipping undecodable urls row"),
                }
            }
            Ok(urls)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete the given url ids in a single statement.
///
/// Delete-if-exists semantics: ids with no matching row are ignored and the
/// call still succeeds. Duplicates are harmless, order is irrelevant. An
/// empty id set is a caller error; no statement is executed.
pub async fn delete_urls(db: &Database, ids: &[i64]) -> Result<(), LinkscopeError> {
    if ids.is_empty() {
        return Err(LinkscopeError::InvalidInput(
            "ids must not be empty".to_string(),
        ));
    }
    let ids = ids.to_vec();
    db.connection()
        .call(move |conn| {
            let placeholders = (1..=ids.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(",");
            let sql = format!("DELETE FROM urls WHERE id IN ({placeholders})");
            conn.execute(&sql, rusqlite::params_from_iter(ids))?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
