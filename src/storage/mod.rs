//! Storage Layer - pooled SQLite persistence
//!
//! System of record is SQLite with a single table:
//! - snippets(id, title, content, created, expires)
//!
//! Connections come from a bounded `r2d2` pool so concurrent requests never
//! share one connection.

pub mod pool;
pub mod schema;
pub mod sqlite;

pub use pool::{DbPool, PooledConnection};
pub use sqlite::{SnippetStore, LATEST_LIMIT};
