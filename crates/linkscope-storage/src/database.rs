// SPDX-FileCopyrightText: 2026 Linkscope Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection management with PRAGMA setup, migrations, and a
//! startup liveness probe.
//!
//! All statements are serialized through tokio-rusqlite's single background
//! thread. The `Database` struct IS the single writer; query modules accept
//! `&Database` and call through `db.connection().call()`. Do NOT create
//! additional Connection instances for writes.

use linkscope_core::LinkscopeError;
use tokio_rusqlite::Connection;

use crate::migrations;

/// The shared database handle, opened once at startup and injected into
/// every component that needs persistence.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at `path`, apply pragmas, run pending migrations,
    /// and verify reachability with a `SELECT 1` probe.
    ///
    /// Any failure here is a startup failure: the caller is expected to
    /// abort the process rather than serve requests without storage.
    pub async fn open(path: &str, wal_mode: bool) -> Result<Self, LinkscopeError> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| LinkscopeError::Storage {
                source: Box::new(e),
            })?;

        conn.call(move |conn| -> Result<(), LinkscopeError> {
            let map_rusqlite = |e: rusqlite::Error| LinkscopeError::Storage {
                source: Box::new(e),
            };
            if wal_mode {
                conn.pragma_update(None, "journal_mode", "WAL")
                    .map_err(map_rusqlite)?;
            }
            conn.pragma_update(None, "foreign_keys", "ON")
                .map_err(map_rusqlite)?;

            migrations::run_migrations(conn)?;

            // Liveness probe: the handle must be able to run a statement
            // before the process starts serving.
            conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
                .map_err(map_rusqlite)?;
            Ok(())
        })
        .await
        .map_err(|e| LinkscopeError::Storage {
            source: Box::new(e),
        })?;

        Ok(Self { conn })
    }

    /// The underlying tokio-rusqlite connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Close the background connection, flushing outstanding work.
    pub async fn close(self) -> Result<(), LinkscopeError> {
        self.conn.close().await.map_err(map_tr_err)
    }
}

/// Map a tokio-rusqlite error into the crate error type.
pub(crate) fn map_tr_err(e: tokio_rusqlite::Error) -> LinkscopeError {
    LinkscopeError::Storage {
        source: Box::new(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn open_creates_schema_and_probes() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();

        // Both tables exist immediately after open.
        let tables: Vec<String> = db
            .connection()
            .call(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
                )?;
                let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
                let mut names = Vec::new();
                for row in rows {
                    names.push(row?);
                }
                Ok::<_, rusqlite::Error>(names)
            })
            .await
            .unwrap();
        assert!(tables.contains(&"urls".to_string()));
        assert!(tables.contains(&"url_results".to_string()));

        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn reopen_is_idempotent() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");

        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        db.close().await.unwrap();

        // Migrations already applied; reopening must not fail.
        let db = Database::open(db_path.to_str().unwrap(), true).await.unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_without_wal_works() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db = Database::open(db_path.to_str().unwrap(), false)
            .await
            .unwrap();
        db.close().await.unwrap();
    }

    #[tokio::test]
    async fn open_unreachable_path_fails() {
        let result = Database::open("/nonexistent/dir/test.db", true).await;
        assert!(result.is_err());
    }
}
