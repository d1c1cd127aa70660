//! HTML template cache
//!
//! Templates are embedded in the binary and compiled once at startup. A
//! template that fails to parse aborts startup instead of failing the first
//! request that needs it.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use tera::{Context, Tera, Value};

use crate::forms::SnippetCreateForm;
use crate::snippet::Snippet;
use crate::Result;

pub const HOME_PAGE: &str = "home.html";
pub const VIEW_PAGE: &str = "view.html";
pub const CREATE_PAGE: &str = "create.html";

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../ui/html/base.html")),
    ("nav.html", include_str!("../ui/html/partials/nav.html")),
    (HOME_PAGE, include_str!("../ui/html/pages/home.html")),
    (VIEW_PAGE, include_str!("../ui/html/pages/view.html")),
    (CREATE_PAGE, include_str!("../ui/html/pages/create.html")),
];

/// Everything a page may render.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateData {
    pub current_year: i32,
    pub snippet: Option<Snippet>,
    pub snippets: Vec<Snippet>,
    pub form: Option<SnippetCreateForm>,
}

impl TemplateData {
    pub fn new() -> Self {
        Self {
            current_year: Utc::now().year(),
            snippet: None,
            snippets: Vec::new(),
            form: None,
        }
    }

    pub fn with_snippet(mut self, snippet: Snippet) -> Self {
        self.snippet = Some(snippet);
        self
    }

    pub fn with_snippets(mut self, snippets: Vec<Snippet>) -> Self {
        self.snippets = snippets;
        self
    }

    pub fn with_form(mut self, form: SnippetCreateForm) -> Self {
        self.form = Some(form);
        self
    }
}

impl Default for TemplateData {
    fn default() -> Self {
        Self::new()
    }
}

/// Compiled set of page templates.
pub struct TemplateCache {
    tera: Tera,
}

impl TemplateCache {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        tera.register_filter("human_date", human_date);
        Ok(Self { tera })
    }

    pub fn render(&self, page: &str, data: &TemplateData) -> Result<String> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(page, &context)?)
    }
}

/// Format a timestamp as `02 Jan 2026 at 15:04`, in UTC.
pub fn format_human_date(t: &DateTime<Utc>) -> String {
    t.format("%d %b %Y at %H:%M").to_string()
}

/// Tera filter wrapping [`format_human_date`]; null renders as empty.
fn human_date(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    match value {
        Value::Null => Ok(Value::String(String::new())),
        Value::String(s) => {
            let t = DateTime::parse_from_rfc3339(s)
                .map_err(|e| tera::Error::msg(format!("human_date: invalid timestamp {:?}: {}", s, e)))?;
            Ok(Value::String(format_human_date(&t.with_timezone(&Utc))))
        }
        other => Err(tera::Error::msg(format!("human_date: expected a timestamp, got {}", other))),
    }
}
