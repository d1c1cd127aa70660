use tabled::{settings::Style, Table, Tabled};

use crate::snippet::Snippet;
use crate::templates::format_human_date;

#[derive(Tabled)]
pub struct SnippetRow {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Created")]
    pub created: String,
    #[tabled(rename = "Expires")]
    pub expires: String,
}

impl From<&Snippet> for SnippetRow {
    fn from(snippet: &Snippet) -> Self {
        Self {
            id: snippet.id,
            title: snippet.title.clone(),
            created: format_human_date(&snippet.created),
            expires: format_human_date(&snippet.expires),
        }
    }
}

/// Render snippets as a rounded table; empty input renders as nothing.
pub fn snippet_table(snippets: &[Snippet]) -> String {
    if snippets.is_empty() {
        return String::new();
    }

    let rows: Vec<SnippetRow> = snippets.iter().map(SnippetRow::from).collect();
    Table::new(&rows).with(Style::rounded()).to_string()
}
