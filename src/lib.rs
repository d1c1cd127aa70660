//! # Snippetbox - short-lived text snippets
//!
//! Snippetbox lets people paste a titled piece of text and share it for a
//! fixed number of days. After that the snippet quietly disappears from
//! every read path.
//!
//! Snippetbox provides:
//! - A pooled SQLite-backed store enforcing expiry visibility on every read
//! - An axum web application rendering server-side HTML pages
//! - A command-line interface for serving and for quick local inspection

pub mod snippet;
pub mod storage;
pub mod forms;
pub mod templates;
pub mod server;
pub mod output;
pub mod config;
pub mod commands;
pub mod ui;

// Re-exports for convenient access
pub use snippet::Snippet;
pub use storage::SnippetStore;

/// Result type alias for Snippetbox operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Snippetbox operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No visible snippet matches the request. Covers both ids that never
    /// existed and snippets whose expiry has passed.
    #[error("no matching snippet found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }

    /// True for failures of the underlying database or its connection pool.
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, Error::Storage(_) | Error::Pool(_))
    }
}
