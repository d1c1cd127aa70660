use owo_colors::Style;
use std::sync::OnceLock;

static THEME: OnceLock<Theme> = OnceLock::new();

/// Styles for the pieces of a snippet and for command status lines.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub id: Style,
    /// "Created" / "Expires" labels
    pub label: Style,
    /// Horizontal rule around snippet content
    pub rule: Style,
    pub ok: Style,
    pub failure: Style,
    pub caution: Style,
}

impl Theme {
    /// Colours only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        if no_color || !console::Term::stdout().is_term() {
            return Self::plain();
        }
        Self::colored()
    }

    pub fn colored() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            id: Style::new().white().dimmed(),
            label: Style::new().magenta(),
            rule: Style::new().white().dimmed(),
            ok: Style::new().green().bold(),
            failure: Style::new().red().bold(),
            caution: Style::new().yellow().bold(),
        }
    }

    pub fn plain() -> Self {
        Self {
            title: Style::new(),
            id: Style::new(),
            label: Style::new(),
            rule: Style::new(),
            ok: Style::new(),
            failure: Style::new(),
            caution: Style::new(),
        }
    }
}

pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::detect)
}
