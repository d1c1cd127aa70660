use std::path::Path;

use anyhow::Context;
use serde_json::json;

use crate::config::{self, ServeSettings, SnippetboxConfig};
use crate::forms::SnippetCreateForm;
use crate::output::{emit_success, OutputMode};
use crate::ui::{self, Icons};
use crate::{server, SnippetStore};

pub fn run_serve(cli: SnippetboxConfig, config_path: Option<&Path>) -> anyhow::Result<()> {
    let file = config::load_config(config_path)?;
    let settings = ServeSettings::resolve(cli, file);

    config::ensure_db_dir(&settings.dsn)?;
    let store = SnippetStore::open(&settings.dsn, settings.pool_size)
        .with_context(|| format!("unable to connect to database {}", settings.dsn))?;
    tracing::info!(dsn = %settings.dsn, pool_size = store.pool_size(), "Connected to database");

    if !settings.static_dir.is_dir() {
        ui::warn(&format!("static directory {} does not exist", settings.static_dir.display()));
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server::start_server(&settings.addr, store, &settings.static_dir))
}

pub fn run_init(path: &Path, force: bool, output_mode: OutputMode) -> anyhow::Result<()> {
    config::write_config(path, &SnippetboxConfig::defaults(), force)?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", path.display()));
    } else {
        emit_success(output_mode, "init", json!({ "path": path.display().to_string() }))?;
    }
    Ok(())
}

pub fn run_create(
    store: &SnippetStore,
    title: String,
    content: String,
    expires: i64,
    output_mode: OutputMode,
) -> anyhow::Result<()> {
    let mut form = SnippetCreateForm::new(title, content, expires);
    let Some(days) = form.validate() else {
        let problems: Vec<String> = form
            .field_errors()
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        anyhow::bail!("invalid snippet: {}", problems.join("; "));
    };

    let id = store.insert(&form.title, &form.content, days)?;

    if output_mode.is_human() {
        ui::success(&format!("Created snippet #{} (expires in {} days)", id, days));
    } else {
        emit_success(output_mode, "create", json!({ "id": id }))?;
    }
    Ok(())
}

pub fn run_view(store: &SnippetStore, id: i64, output_mode: OutputMode) -> anyhow::Result<()> {
    let snippet = match store.get(id) {
        Ok(snippet) => snippet,
        Err(e) if e.is_not_found() => anyhow::bail!("snippet #{} not found or expired", id),
        Err(e) => return Err(e.into()),
    };

    if output_mode.is_human() {
        ui::print_snippet(&snippet);
    } else {
        emit_success(output_mode, "view", serde_json::to_value(&snippet)?)?;
    }
    Ok(())
}

pub fn run_latest(store: &SnippetStore, output_mode: OutputMode) -> anyhow::Result<()> {
    let snippets = store.latest()?;

    if !output_mode.is_human() {
        return emit_success(output_mode, "latest", serde_json::to_value(&snippets)?);
    }

    if snippets.is_empty() {
        println!("{} No snippets yet.", Icons::EMPTY);
    } else {
        println!("{}", ui::snippet_table(&snippets));
    }
    Ok(())
}
