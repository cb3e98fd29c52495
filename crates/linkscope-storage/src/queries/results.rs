// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Crawl-result store operations: append, list, bulk remove.

use linkscope_core::LinkscopeError;
use rusqlite::params;

use crate::database::Database;
use crate::models::{CrawlResult, NewCrawlResult};

/// Insert a complete crawl result as submitted by the external analyzer.
///
/// The id and `created_at` timestamp are assigned by the store. No
/// field-level validation beyond what the column types enforce.
pub async fn insert_result(db: &Database, result: &NewCrawlResult) -> Result<(), LinkscopeError> {
    let result = result.clone();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO url_results (url, hostname, title, html_version,
                     h1, h2, h3, h4, h5, h6,
                     internal_links, external_links, inaccessible_links,
                     has_login_form, error, inaccessible_links_list)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16)",
                params![
                    result.url,
                    result.hostname,
                    result.title,
                    result.html_version,
                    result.h1,
                    result.h2,
                    result.h3,
                    result.h4,
                    result.h5,
                    result.h6,
                    result.internal_links,
                    result.external_links,
                    result.inaccessible_links,
                    result.has_login_form,
                    result.error,
                    result.inaccessible_links_list,
                ],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// List all crawl results, all fields, most recently created first
/// (descending id).
///
/// A row that fails to decode is skipped rather than aborting the listing;
/// partial results are preferred over none.
pub async fn list_results(db: &Database) -> Result<Vec<CrawlResult>, LinkscopeError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, url, hostname, title, html_version,
                        h1, h2, h3, h4, h5, h6,
                        internal_links, external_links, inaccessible_links,
                        has_login_form, error, inaccessible_links_list, created_at
                 FROM url_results ORDER BY id DESC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(CrawlResult {
                    id: row.get(0)?,
                    url: row.get(1)?,
                    hostname: row.get(2)?,
                    title: row.get(3)?,
                    html_version: row.get(4)?,
                    h1: row.get(5)?,
                    h2: row.get(6)?,
                    h3: row.get(7)?,
                    h4: row.get(8)?,
                    h5: row.get(9)?,
                    h6: row.get(10)?,
                    internal_links: row.get(11)?,
                    external_links: row.get(12)?,
                    inaccessible_links: row.get(13)?,
                    has_login_form: row.get(14)?,
                    error: row.get(15)?,
                    inaccessible_links_list: row.get(16)?,
                    created_at: row.get(17)?,
                })
            })?;
            let mut results = Vec::new();
            for row in rows {
                match row {
                    Ok(result) => results.push(result),
                    Err(e) => tracing::warn!(error = %e, "skipping undecodable url_results row"),
                }
            }
            Ok(results)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Delete the given result ids in a single statement.
///
/// Identical contract to `urls::delete_urls`: delete-if-exists, duplicates
/// harmless, empty id set is a caller error.
pub async fn delete_results(db: &Database, ids: &[i64]) -> Result<(), LinkscopeError> {
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
            let sql = format!("DELETE FROM url_results WHERE id IN ({placeholders})");
            conn.execute(&sql, rusqlite::params_from_iter(ids))?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}
