//! Database schema definitions

/// SQL to create the snippets table
///
/// Timestamps are stored as `YYYY-MM-DD HH:MM:SS.SSS` UTC text so that
/// lexical comparison matches chronological order.
pub const CREATE_SNIPPETS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS snippets (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created TEXT NOT NULL,
    expires TEXT NOT NULL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_snippets_expires ON snippets(expires)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_SNIPPETS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
