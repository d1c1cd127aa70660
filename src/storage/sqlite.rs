//! SQLite storage implementation

use rusqlite::{params, OptionalExtension};
use crate::{Error, Result};
use crate::snippet::Snippet;
use super::pool::{self, DbPool, PooledConnection};
use super::schema;

/// Maximum number of snippets returned by [`SnippetStore::latest`]
pub const LATEST_LIMIT: i64 = 10;

/// Pooled SQLite-backed storage for snippets.
///
/// Cloning is cheap and every clone shares the same pool. The pool, and
/// with it every open connection, is closed when the last clone is dropped.
///
/// The store performs no validation and never logs: every failure is
/// returned to the caller.
#[derive(Clone)]
pub struct SnippetStore {
    pool: DbPool,
}

impl SnippetStore {
    /// Open a database file or `file:` URI (creates if doesn't exist)
    pub fn open(dsn: &str, pool_size: u32) -> Result<Self> {
        let store = Self { pool: pool::create_pool(dsn, pool_size)? };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let store = Self { pool: pool::create_memory_pool()? };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        let conn = self.conn()?;
        for stmt in schema::all_schema_statements() {
            conn.execute(stmt, [])?;
        }
        Ok(())
    }

    /// Check a connection out of the pool
    pub(crate) fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }

    /// Number of connections the pool may hold
    pub fn pool_size(&self) -> u32 {
        self.pool.max_size()
    }

    /// Insert a snippet that stays visible for `lifetime_days` days.
    ///
    /// Both timestamps come from the database clock within one statement,
    /// so `expires - created` is exactly the requested lifetime.
    pub fn insert(&self, title: &str, content: &str, lifetime_days: i64) -> Result<i64> {
        let conn = self.conn()?;
        let id = conn.query_row(
            r#"
            INSERT INTO snippets (title, content, created, expires)
            VALUES (
                ?1,
                ?2,
                strftime('%Y-%m-%d %H:%M:%f', 'now'),
                strftime('%Y-%m-%d %H:%M:%f', 'now', ?3 || ' days')
            )
            RETURNING id
            "#,
            params![title, content, lifetime_days],
            |row| row.get(0),
        )?;
        Ok(id)
    }

    /// Get a visible snippet by id
    pub fn get(&self, id: i64) -> Result<Snippet> {
        let conn = self.conn()?;
        conn.query_row(
            r#"
            SELECT id, title, content, created, expires FROM snippets
            WHERE expires > strftime('%Y-%m-%d %H:%M:%f', 'now') AND id = ?1
            "#,
            [id],
            row_to_snippet,
        )
        .optional()?
        .ok_or(Error::NotFound)
    }

    /// The most recently created visible snippets, newest first
    pub fn latest(&self) -> Result<Vec<Snippet>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, title, content, created, expires FROM snippets
            WHERE expires > strftime('%Y-%m-%d %H:%M:%f', 'now')
            ORDER BY id DESC LIMIT ?1
            "#,
        )?;

        let snippets = stmt
            .query_map([LATEST_LIMIT], row_to_snippet)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(snippets)
    }
}

/// Helper to convert a row to a Snippet
fn row_to_snippet(row: &rusqlite::Row) -> rusqlite::Result<Snippet> {
    Ok(Snippet {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        created: row.get(3)?,
        expires: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn insert_sample(store: &SnippetStore, n: usize, days: i64) -> i64 {
        store
            .insert(&format!("snippet {}", n), &format!("content of snippet {}", n), days)
            .unwrap()
    }

    #[test]
    fn test_insert_then_get() {
        let store = SnippetStore::open_in_memory().unwrap();

        let before = Utc::now() - Duration::seconds(5);
        let id = store.insert("O snail", "Climb Mount Fuji,\nBut slowly, slowly!", 7).unwrap();
        let after = Utc::now() + Duration::seconds(5);

        let snippet = store.get(id).unwrap();
        assert_eq!(snippet.id, id);
        assert_eq!(snippet.title, "O snail");
        assert_eq!(snippet.content, "Climb Mount Fuji,\nBut slowly, slowly!");
        assert!(snippet.created > before && snippet.created < after);

        let drift = (snippet.lifetime() - Duration::days(7)).num_milliseconds().abs();
        assert!(drift < 1000, "lifetime drifted by {}ms", drift);
    }

    #[test]
    fn test_get_unknown_id_is_not_found() {
        let store = SnippetStore::open_in_memory().unwrap();
        insert_sample(&store, 1, 1);

        let err = store.get(999).unwrap_err();
        assert!(err.is_not_found());
        assert!(store.get(0).unwrap_err().is_not_found());
    }

    #[test]
    fn test_expired_snippet_is_invisible() {
        let store = SnippetStore::open_in_memory().unwrap();

        let live = insert_sample(&store, 1, 1);
        let expired = insert_sample(&store, 2, -1);

        assert!(store.get(expired).unwrap_err().is_not_found());
        assert!(store.get(live).is_ok());

        let latest = store.latest().unwrap();
        assert_eq!(latest.len(), 1);
        assert_eq!(latest[0].id, live);
    }

    #[test]
    fn test_zero_day_lifetime_is_already_expired() {
        let store = SnippetStore::open_in_memory().unwrap();
        let id = insert_sample(&store, 1, 0);

        assert!(store.get(id).unwrap_err().is_not_found());
        assert!(store.latest().unwrap().is_empty());
    }

    #[test]
    fn test_expired_rows_are_kept() {
        let store = SnippetStore::open_in_memory().unwrap();
        insert_sample(&store, 1, -3);

        let conn = store.conn().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_latest_empty() {
        let store = SnippetStore::open_in_memory().unwrap();
        assert!(store.latest().unwrap().is_empty());
    }

    #[test]
    fn test_latest_returns_ten_newest() {
        let store = SnippetStore::open_in_memory().unwrap();

        let ids: Vec<i64> = (0..15).map(|n| insert_sample(&store, n, 365)).collect();
        let latest = store.latest().unwrap();

        assert_eq!(latest.len(), LATEST_LIMIT as usize);
        let expected: Vec<i64> = ids.iter().rev().take(10).copied().collect();
        let got: Vec<i64> = latest.iter().map(|s| s.id).collect();
        assert_eq!(got, expected);
        assert!(got.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(latest[0].title, "snippet 14");
    }

    #[test]
    fn test_latest_skips_expired_between_live() {
        let store = SnippetStore::open_in_memory().unwrap();

        for n in 0..12 {
            let days = if n % 2 == 0 { 7 } else { -7 };
            insert_sample(&store, n, days);
        }

        let latest = store.latest().unwrap();
        assert_eq!(latest.len(), 6);
        assert!(latest.iter().all(|s| s.title.ends_with(&['0', '2', '4', '6', '8'][..])));
    }

    #[test]
    fn test_ids_are_never_reused() {
        let store = SnippetStore::open_in_memory().unwrap();
        let first = insert_sample(&store, 1, 1);

        store.conn().unwrap().execute("DELETE FROM snippets", []).unwrap();

        let second = insert_sample(&store, 2, 1);
        assert!(second > first);
    }

    #[test]
    fn test_insert_failure_is_surfaced() {
        let store = SnippetStore::open_in_memory().unwrap();
        store.conn().unwrap().execute("DROP TABLE snippets", []).unwrap();

        let err = store.insert("title", "content", 7).unwrap_err();
        assert!(err.is_storage_failure());
        assert!(store.latest().unwrap_err().is_storage_failure());
        assert!(store.get(1).unwrap_err().is_storage_failure());
    }

    #[test]
    fn test_reopen_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippetbox.db");
        let dsn = path.to_str().unwrap();

        let id = {
            let store = SnippetStore::open(dsn, 2).unwrap();
            store.insert("persisted", "survives a restart", 1).unwrap()
        };

        let store = SnippetStore::open(dsn, 2).unwrap();
        assert_eq!(store.get(id).unwrap().title, "persisted");
    }

    #[test]
    fn test_concurrent_inserts_get_distinct_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("concurrent.db");
        let store = Arc::new(SnippetStore::open(path.to_str().unwrap(), 4).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..10)
                        .map(|n| {
                            store
                                .insert(&format!("w{} n{}", worker, n), "concurrent", 1)
                                .unwrap()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: Vec<i64> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();
        let unique: HashSet<i64> = ids.iter().copied().collect();

        assert_eq!(ids.len(), 80);
        assert_eq!(unique.len(), 80);
        assert!(ids.iter().all(|id| *id > 0));

        let count: i64 = store
            .conn()
            .unwrap()
            .query_row("SELECT COUNT(*) FROM snippets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 80);
    }
}
