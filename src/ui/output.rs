use owo_colors::OwoColorize;

use crate::snippet::Snippet;
use crate::templates::format_human_date;
use crate::ui::{theme, Icons, Theme};

const RULE_WIDTH: usize = 40;

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().ok));
}

pub fn error(label: &str) {
    eprintln!("{} {}", Icons::CROSS, label.style(theme().failure));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().caution));
}

/// `📝 Title #id`, the first line of a printed snippet.
pub fn snippet_header(snippet: &Snippet, theme: &Theme) -> String {
    format!(
        "{} {} {}",
        Icons::MEMO,
        snippet.title.style(theme.title),
        format!("#{}", snippet.id).style(theme.id)
    )
}

/// Full terminal rendering of one snippet: header, ruled content, dates.
pub fn render_snippet(snippet: &Snippet, theme: &Theme) -> String {
    let rule = "─".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&snippet_header(snippet, theme));
    out.push('\n');
    out.push_str(&format!("{}\n", rule.style(theme.rule)));
    out.push_str(snippet.content.trim_end());
    out.push('\n');
    out.push_str(&format!("{}\n", rule.style(theme.rule)));
    out.push_str(&format!("{} {}\n", "Created:".style(theme.label), format_human_date(&snippet.created)));
    out.push_str(&format!(
        "{} {} ({} days)",
        "Expires:".style(theme.label),
        format_human_date(&snippet.expires),
        snippet.lifetime().num_days()
    ));
    out
}

pub fn print_snippet(snippet: &Snippet) {
    println!("{}", render_snippet(snippet, theme()));
}
