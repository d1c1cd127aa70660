//! Connection pool construction

use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;

use crate::Result;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Default number of pooled connections
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// How long a writer waits on a locked database before giving up
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// How long `get()` waits for a free connection
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Build a pool over a database file or `file:` URI.
///
/// Every connection runs in WAL mode with a busy timeout, so concurrent
/// writers queue on the database lock instead of failing with `SQLITE_BUSY`.
/// Building the pool opens the connections, which doubles as a
/// connectivity check.
pub fn create_pool(dsn: &str, max_size: u32) -> Result<DbPool> {
    let manager = SqliteConnectionManager::file(dsn).with_init(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")
    });

    let pool = r2d2::Pool::builder()
        .max_size(max_size.max(1))
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)?;

    Ok(pool)
}

/// Build a single-connection pool over a private in-memory database.
///
/// The connection is never recycled, since closing it would drop the data.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = SqliteConnectionManager::memory();

    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_timeout(CONNECTION_TIMEOUT)
        .build(manager)?;

    Ok(pool)
}
